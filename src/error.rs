use std::fmt::{self, Debug, Display};

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;

/// Error produced when a document violates the grammar.
///
/// Parsing stops at the first violation; the location identifies the first
/// offending character in document order. Line and column are both 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The error kind.
    pub kind: ErrorKind,
    /// 1-based line of the first offending character.
    pub line: usize,
    /// 1-based column of the first offending character.
    pub column: usize,
}

impl std::error::Error for Error {}

/// The ways a document can fail to parse.
#[derive(Clone, PartialEq)]
pub enum ErrorKind {
    /// EOF was reached while a construct was still open.
    UnexpectedEof,

    /// An unexpected character was encountered outside any construct.
    Unexpected(char),

    /// Wanted one sort of token, but found another.
    Wanted {
        /// Expected token type.
        expected: &'static str,
        /// Actually found token type.
        found: &'static str,
    },

    /// EOF was found before the closing string delimiter.
    UnterminatedString,

    /// An invalid character not allowed in a string was found.
    InvalidCharInString(char),

    /// An invalid character was found as an escape.
    InvalidEscape(char),

    /// An invalid character was found in a hex escape.
    InvalidHexEscape(char),

    /// A hex escape named a value outside the plane of Unicode scalar
    /// values (e.g. an unpaired surrogate).
    InvalidEscapeValue(u32),

    /// A number failed to parse: misplaced underscore, missing digits
    /// around a decimal point or exponent, stray trailing characters, or
    /// an out-of-range integer.
    InvalidNumber,

    /// A datetime component had the wrong width, an out-of-range value, or
    /// a required part (time of day, UTC offset) was missing entirely.
    InvalidDatetime,

    /// A `t`/`f`-leading token that is not exactly `true` or `false`.
    InvalidBoolean,

    /// An unquoted token was found where a value was expected.
    UnquotedString,

    /// Multiline strings are not allowed for keys.
    MultilineStringKey,

    /// Duplicate key in table.
    DuplicateKey {
        /// The duplicate key.
        key: String,
    },

    /// A table already defined by a header was declared a second time.
    DuplicateTable {
        /// The name of the duplicate table.
        name: String,
    },

    /// A previously defined table was redefined as an array of tables.
    RedefineAsArray {
        /// The name of the redefined table.
        name: String,
    },

    /// An array-of-tables header tried to extend a value closed by inline
    /// syntax (`[...]` or `{...}`).
    ExtendInlineValue {
        /// The key of the inline value.
        key: String,
    },

    /// Dotted key attempted to extend something that is not an open table.
    DottedKeyInvalidType {
        /// The offending path segment.
        key: String,
    },

    /// An array element did not match the kind of the first element.
    MixedArrayTypes,

    /// Inline values were nested deeper than the parser supports.
    RecursionLimit,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UnexpectedEof => "unexpected-eof",
            Self::Unexpected(..) => "unexpected",
            Self::Wanted { .. } => "wanted",
            Self::UnterminatedString => "unterminated-string",
            Self::InvalidCharInString(..) => "invalid-char-in-string",
            Self::InvalidEscape(..) => "invalid-escape",
            Self::InvalidHexEscape(..) => "invalid-hex-escape",
            Self::InvalidEscapeValue(..) => "invalid-escape-value",
            Self::InvalidNumber => "invalid-number",
            Self::InvalidDatetime => "invalid-datetime",
            Self::InvalidBoolean => "invalid-boolean",
            Self::UnquotedString => "unquoted-string",
            Self::MultilineStringKey => "multiline-string-key",
            Self::DuplicateKey { .. } => "duplicate-key",
            Self::DuplicateTable { .. } => "duplicate-table",
            Self::RedefineAsArray { .. } => "redefine-as-array",
            Self::ExtendInlineValue { .. } => "extend-inline-value",
            Self::DottedKeyInvalidType { .. } => "dotted-key-invalid-type",
            Self::MixedArrayTypes => "mixed-array-types",
            Self::RecursionLimit => "recursion-limit",
        };
        f.write_str(text)
    }
}

impl Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// Renders whitespace and control characters with their escaped form so
/// they stay visible in error messages.
struct Escape(char);

impl Display for Escape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        if self.0.is_whitespace() || self.0.is_control() {
            for esc in self.0.escape_default() {
                f.write_char(esc)?;
            }
            Ok(())
        } else {
            f.write_char(self.0)
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::UnexpectedEof => f.write_str("unexpected eof encountered")?,
            ErrorKind::Unexpected(c) => {
                write!(f, "unexpected character found: `{}`", Escape(*c))?;
            }
            ErrorKind::Wanted { expected, found } => {
                write!(f, "expected {expected}, found {found}")?;
            }
            ErrorKind::UnterminatedString => f.write_str("unterminated string")?,
            ErrorKind::InvalidCharInString(c) => {
                write!(f, "invalid character in string: `{}`", Escape(*c))?;
            }
            ErrorKind::InvalidEscape(c) => {
                write!(f, "invalid escape character in string: `{}`", Escape(*c))?;
            }
            ErrorKind::InvalidHexEscape(c) => {
                write!(f, "invalid hex escape character in string: `{}`", Escape(*c))?;
            }
            ErrorKind::InvalidEscapeValue(v) => write!(f, "invalid escape value: `{v}`")?,
            ErrorKind::InvalidNumber => f.write_str("invalid number")?,
            ErrorKind::InvalidDatetime => f.write_str("invalid datetime")?,
            ErrorKind::InvalidBoolean => {
                f.write_str("invalid boolean, expected `true` or `false`")?;
            }
            ErrorKind::UnquotedString => {
                f.write_str("invalid value, did you mean to use a quoted string?")?;
            }
            ErrorKind::MultilineStringKey => {
                f.write_str("multiline strings are not allowed for key")?;
            }
            ErrorKind::DuplicateKey { key } => write!(f, "duplicate key: `{key}`")?,
            ErrorKind::DuplicateTable { name } => {
                write!(f, "redefinition of table `{name}`")?;
            }
            ErrorKind::RedefineAsArray { name } => {
                write!(f, "table `{name}` redefined as array")?;
            }
            ErrorKind::ExtendInlineValue { key } => {
                write!(f, "cannot extend inline value `{key}` with an array of tables")?;
            }
            ErrorKind::DottedKeyInvalidType { key } => {
                write!(f, "dotted key `{key}` attempted to extend non-table type")?;
            }
            ErrorKind::MixedArrayTypes => f.write_str("mixed types in array")?,
            ErrorKind::RecursionLimit => f.write_str("values nested too deeply")?,
        }
        write!(f, " at line {} column {}", self.line, self.column)
    }
}
