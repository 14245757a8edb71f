//! The parsing engine: scalar lexers, the recursive-descent structural
//! parser, and the path resolver that grows the value tree.
//!
//! The parser makes a single left-to-right pass over the input. Each line
//! is a comment, a `[table]` or `[[array-of-tables]]` header, or a
//! `key = value` binding; values recurse through inline arrays and tables.
//! The first violation aborts the parse and is reported with the 1-based
//! line and column of the offending character.

use crate::array::Array;
use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind};
use crate::table::Table;
use crate::time;
use crate::value::{Kind, Value};

/// Inline values nested deeper than this fail with a `recursion-limit`
/// error instead of overflowing the stack.
const MAX_NESTING: usize = 128;

// Lightweight internal error. When a method returns Err(ParseError), the
// full error details have already been recorded in Parser::error_kind /
// Parser::error_at.
struct ParseError;

struct Parser<'a> {
    cur: Cursor<'a>,

    // Error context, populated just before returning ParseError.
    error_at: usize,
    error_kind: Option<ErrorKind>,

    /// Key path of the table the most recent header opened. Key/value
    /// lines are bound into the table this path resolves to.
    context: Vec<String>,

    /// Scratch buffer for stripping underscores out of number tokens.
    scratch: String,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            cur: Cursor::new(input),
            error_at: 0,
            error_kind: None,
            context: Vec::new(),
            scratch: String::new(),
        }
    }

    // -- error helpers ------------------------------------------------------

    #[cold]
    fn set_error(&mut self, at: usize, kind: ErrorKind) -> ParseError {
        self.error_at = at;
        self.error_kind = Some(kind);
        ParseError
    }

    fn take_error(&mut self) -> Error {
        let kind = self
            .error_kind
            .take()
            .expect("take_error called without error");
        let (line, column) = self.cur.line_col(self.error_at);
        Error { kind, line, column }
    }

    /// Describes the token at the cursor for `Wanted` error messages.
    fn found_desc(&self) -> &'static str {
        match self.cur.peek() {
            None => "eof",
            Some(b'\n' | b'\r') => "a newline",
            Some(b' ' | b'\t') => "whitespace",
            Some(b'#') => "a comment",
            Some(b'=') => "an equals",
            Some(b'.') => "a period",
            Some(b',') => "a comma",
            Some(b'{') => "a left brace",
            Some(b'}') => "a right brace",
            Some(b'[') => "a left bracket",
            Some(b']') => "a right bracket",
            Some(b'\'' | b'"') => "a string",
            Some(b) if is_keylike(b) => "an identifier",
            Some(_) => "a character",
        }
    }

    fn wanted(&mut self, expected: &'static str) -> ParseError {
        let at = self.cur.pos();
        let found = self.found_desc();
        self.set_error(at, ErrorKind::Wanted { expected, found })
    }

    fn expect(&mut self, b: u8, expected: &'static str) -> Result<(), ParseError> {
        if self.cur.eat(b) {
            Ok(())
        } else {
            Err(self.wanted(expected))
        }
    }

    // -- line structure -----------------------------------------------------

    /// Consumes a `#` comment through to (and including) its line ending.
    fn eat_comment(&mut self) -> Result<bool, ParseError> {
        if !self.cur.eat(b'#') {
            return Ok(false);
        }
        // Comment content: tab or any non-control byte.
        while let Some(0x09 | 0x20..=0x7e | 0x80..) = self.cur.peek() {
            self.cur.advance();
        }
        self.eat_newline_or_eof()?;
        Ok(true)
    }

    fn eat_newline_or_eof(&mut self) -> Result<(), ParseError> {
        match self.cur.peek() {
            None => Ok(()),
            Some(b'\n') => {
                self.cur.advance();
                Ok(())
            }
            Some(b'\r') if self.cur.peek_at(1) == Some(b'\n') => {
                self.cur.advance_by(2);
                Ok(())
            }
            _ => Err(self.wanted("a newline")),
        }
    }

    /// Trailing whitespace and an optional comment, then the line ending.
    /// Any other text is the "text after value" error.
    fn end_of_line(&mut self) -> Result<(), ParseError> {
        self.cur.eat_whitespace();
        if self.eat_comment()? {
            return Ok(());
        }
        self.eat_newline_or_eof()
    }

    /// Whitespace, newlines, and comments between inline-array elements.
    fn skip_array_filler(&mut self) -> Result<(), ParseError> {
        loop {
            self.cur.eat_whitespace();
            if self.cur.eat_newline() {
                continue;
            }
            if !self.eat_comment()? {
                return Ok(());
            }
        }
    }

    // -- keys ---------------------------------------------------------------

    fn read_bare(&mut self) -> &'a str {
        let start = self.cur.pos();
        while let Some(b) = self.cur.peek() {
            if !is_keylike(b) {
                break;
            }
            self.cur.advance();
        }
        self.cur.slice(start, self.cur.pos())
    }

    /// Reads one key segment: bare, or a single-line quoted string.
    /// Returns the key text and its start offset for error attribution.
    fn read_key(&mut self) -> Result<(String, usize), ParseError> {
        let at = self.cur.pos();
        match self.cur.peek() {
            Some(delim @ (b'"' | b'\'')) => {
                self.cur.advance();
                let (text, multiline) = self.string(at, delim)?;
                if multiline {
                    return Err(self.set_error(at, ErrorKind::MultilineStringKey));
                }
                Ok((text, at))
            }
            Some(b) if is_keylike(b) => Ok((self.read_bare().to_owned(), at)),
            _ => Err(self.wanted("a key")),
        }
    }

    /// Reads a dotted key path with optional whitespace around the dots.
    fn read_key_path(&mut self) -> Result<Vec<(String, usize)>, ParseError> {
        let mut path = vec![self.read_key()?];
        loop {
            self.cur.eat_whitespace();
            if !self.cur.eat(b'.') {
                return Ok(path);
            }
            self.cur.eat_whitespace();
            path.push(self.read_key()?);
        }
    }

    // -- string lexer -------------------------------------------------------

    /// Reads a string. The cursor must be just past the opening delimiter;
    /// `start` is the offset of that delimiter. Returns the decoded content
    /// and whether the string used the multi-line form.
    fn string(&mut self, start: usize, delim: u8) -> Result<(String, bool), ParseError> {
        let mut multiline = false;
        if self.cur.eat(delim) {
            if self.cur.eat(delim) {
                multiline = true;
            } else {
                return Ok((String::new(), false));
            }
        }
        if multiline {
            // A newline right after the opening delimiter is trimmed.
            self.cur.eat_newline();
        }

        let mut buf = String::new();
        loop {
            let at = self.cur.pos();
            let Some(b) = self.cur.peek() else {
                return Err(self.set_error(start, ErrorKind::UnterminatedString));
            };
            match b {
                b'\n' => {
                    if !multiline {
                        return Err(self.set_error(at, ErrorKind::InvalidCharInString('\n')));
                    }
                    self.cur.advance();
                    buf.push('\n');
                }
                b'\r' => {
                    if multiline && self.cur.peek_at(1) == Some(b'\n') {
                        self.cur.advance_by(2);
                        buf.push_str("\r\n");
                    } else {
                        return Err(self.set_error(at, ErrorKind::InvalidCharInString('\r')));
                    }
                }
                d if d == delim => {
                    self.cur.advance();
                    if !multiline {
                        return Ok((buf, false));
                    }
                    if !self.cur.eat(delim) {
                        buf.push(delim as char);
                        continue;
                    }
                    if !self.cur.eat(delim) {
                        buf.push(delim as char);
                        buf.push(delim as char);
                        continue;
                    }
                    // Closed. Up to two more delimiters belong to the
                    // content, just before the closing triple; any further
                    // quotes are trailing text the caller will reject.
                    for _ in 0..2 {
                        if self.cur.eat(delim) {
                            buf.push(delim as char);
                        } else {
                            break;
                        }
                    }
                    return Ok((buf, true));
                }
                b'\\' if delim == b'"' => {
                    self.cur.advance();
                    self.basic_escape(&mut buf, start, multiline)?;
                }
                0x09 | 0x20..=0x7e | 0x80.. => {
                    // Full character, so multi-byte UTF-8 stays intact.
                    let (_, ch) = match self.cur.next_char() {
                        Some(c) => c,
                        None => return Err(self.set_error(start, ErrorKind::UnterminatedString)),
                    };
                    buf.push(ch);
                }
                _ => {
                    return Err(self.set_error(at, ErrorKind::InvalidCharInString(b as char)));
                }
            }
        }
    }

    fn basic_escape(
        &mut self,
        buf: &mut String,
        string_start: usize,
        multiline: bool,
    ) -> Result<(), ParseError> {
        let at = self.cur.pos();
        let Some(b) = self.cur.peek() else {
            return Err(self.set_error(string_start, ErrorKind::UnterminatedString));
        };
        self.cur.advance();
        match b {
            b'b' => buf.push('\u{8}'),
            b't' => buf.push('\t'),
            b'n' => buf.push('\n'),
            b'f' => buf.push('\u{c}'),
            b'r' => buf.push('\r'),
            b'"' => buf.push('"'),
            b'\\' => buf.push('\\'),
            b'u' => buf.push(self.hex_escape(4, at, string_start)?),
            b'U' => buf.push(self.hex_escape(8, at, string_start)?),
            b' ' | b'\t' | b'\n' | b'\r' if multiline => {
                // Line-ending backslash: trims all whitespace and newlines
                // up to the next non-whitespace character. Only legal when
                // nothing but whitespace remains on the line.
                let c = if b == b'\r' && self.cur.eat(b'\n') {
                    b'\n'
                } else {
                    b
                };
                if c != b'\n' {
                    loop {
                        match self.cur.peek() {
                            Some(b' ' | b'\t') => self.cur.advance(),
                            Some(b'\n') => {
                                self.cur.advance();
                                break;
                            }
                            Some(b'\r') if self.cur.peek_at(1) == Some(b'\n') => {
                                self.cur.advance_by(2);
                                break;
                            }
                            _ => {
                                return Err(
                                    self.set_error(at, ErrorKind::InvalidEscape(c as char))
                                );
                            }
                        }
                    }
                }
                loop {
                    match self.cur.peek() {
                        Some(b' ' | b'\t' | b'\n') => self.cur.advance(),
                        Some(b'\r') if self.cur.peek_at(1) == Some(b'\n') => {
                            self.cur.advance_by(2);
                        }
                        _ => break,
                    }
                }
            }
            _ => {
                if b < 0x80 {
                    return Err(self.set_error(at, ErrorKind::InvalidEscape(b as char)));
                }
                // Multi-byte character in escape position; decode it for
                // the error message.
                let ch = self.cur.slice(at, self.cur.input_len()).chars().next();
                let ch = ch.unwrap_or('\u{fffd}');
                return Err(self.set_error(at, ErrorKind::InvalidEscape(ch)));
            }
        }
        Ok(())
    }

    fn hex_escape(
        &mut self,
        digits: usize,
        escape_at: usize,
        string_start: usize,
    ) -> Result<char, ParseError> {
        let mut value: u32 = 0;
        for _ in 0..digits {
            let at = self.cur.pos();
            let Some(b) = self.cur.peek() else {
                return Err(self.set_error(string_start, ErrorKind::UnterminatedString));
            };
            let Some(digit) = (b as char).to_digit(16) else {
                let ch = if b < 0x80 {
                    b as char
                } else {
                    self.cur
                        .slice(at, self.cur.input_len())
                        .chars()
                        .next()
                        .unwrap_or('\u{fffd}')
                };
                return Err(self.set_error(at, ErrorKind::InvalidHexEscape(ch)));
            };
            self.cur.advance();
            value = value * 16 + digit;
        }
        match char::from_u32(value) {
            Some(ch) => Ok(ch),
            None => Err(self.set_error(escape_at, ErrorKind::InvalidEscapeValue(value))),
        }
    }

    // -- boolean lexer ------------------------------------------------------

    fn boolean(&mut self) -> Result<Value, ParseError> {
        let at = self.cur.pos();
        match self.read_bare() {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Err(self.set_error(at, ErrorKind::InvalidBoolean)),
        }
    }

    // -- number lexer -------------------------------------------------------

    /// A digit run with underscores permitted strictly between two digits.
    fn digits(&mut self) -> Result<(), ParseError> {
        if !matches!(self.cur.peek(), Some(b'0'..=b'9')) {
            let at = self.cur.pos();
            return Err(self.set_error(at, ErrorKind::InvalidNumber));
        }
        loop {
            match self.cur.peek() {
                Some(b'0'..=b'9') => self.cur.advance(),
                Some(b'_') => {
                    if !matches!(self.cur.peek_at(1), Some(b'0'..=b'9')) {
                        let at = self.cur.pos();
                        return Err(self.set_error(at, ErrorKind::InvalidNumber));
                    }
                    self.cur.advance_by(2);
                }
                _ => return Ok(()),
            }
        }
    }

    /// Characters that may legally follow a complete scalar token. A stray
    /// character here means the token is malformed, never truncated.
    fn scalar_end(&mut self, kind: ErrorKind) -> Result<(), ParseError> {
        match self.cur.peek() {
            None | Some(b' ' | b'\t' | b'\n' | b',' | b']' | b'}' | b'#') => Ok(()),
            Some(b'\r') if self.cur.peek_at(1) == Some(b'\n') => Ok(()),
            _ => {
                let at = self.cur.pos();
                Err(self.set_error(at, kind))
            }
        }
    }

    fn number(&mut self) -> Result<Value, ParseError> {
        let start = self.cur.pos();
        if matches!(self.cur.peek(), Some(b'+' | b'-')) {
            self.cur.advance();
        }
        self.digits()?;
        let mut float = false;
        if self.cur.eat(b'.') {
            float = true;
            self.digits()?;
        }
        if matches!(self.cur.peek(), Some(b'e' | b'E')) {
            float = true;
            self.cur.advance();
            if matches!(self.cur.peek(), Some(b'+' | b'-')) {
                self.cur.advance();
            }
            self.digits()?;
        }
        self.scalar_end(ErrorKind::InvalidNumber)?;

        let text = self.cur.slice(start, self.cur.pos());
        self.scratch.clear();
        self.scratch.extend(text.chars().filter(|&c| c != '_'));
        if float {
            match self.scratch.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(Value::Float(f)),
                _ => Err(self.set_error(start, ErrorKind::InvalidNumber)),
            }
        } else {
            match self.scratch.parse::<i64>() {
                Ok(i) => Ok(Value::Integer(i)),
                Err(_) => Err(self.set_error(start, ErrorKind::InvalidNumber)),
            }
        }
    }

    // -- datetime lexer -----------------------------------------------------

    /// A value starting with four digits and a dash commits to the
    /// datetime grammar; everything else digit-leading is a number.
    fn datetime_ahead(&self) -> bool {
        let rest = self.cur.rest();
        rest.len() > 4 && rest[..4].iter().all(u8::is_ascii_digit) && rest[4] == b'-'
    }

    fn datetime(&mut self) -> Result<Value, ParseError> {
        let start = self.cur.pos();
        match time::scan(self.cur.rest()) {
            Ok((len, dt)) => {
                self.cur.advance_by(len);
                self.scalar_end(ErrorKind::InvalidDatetime)?;
                Ok(Value::Datetime(dt))
            }
            Err(rel) => Err(self.set_error(start + rel, ErrorKind::InvalidDatetime)),
        }
    }

    // -- value dispatch -----------------------------------------------------

    /// Parses one value, dispatching on the first character class.
    fn value(&mut self, depth: usize) -> Result<Value, ParseError> {
        if depth >= MAX_NESTING {
            let at = self.cur.pos();
            return Err(self.set_error(at, ErrorKind::RecursionLimit));
        }
        let at = self.cur.pos();
        match self.cur.peek() {
            None => Err(self.set_error(at, ErrorKind::UnexpectedEof)),
            Some(delim @ (b'"' | b'\'')) => {
                self.cur.advance();
                let (text, _multiline) = self.string(at, delim)?;
                Ok(Value::String(text))
            }
            Some(b'[') => self.inline_array(depth),
            Some(b'{') => self.inline_table(depth),
            Some(b't' | b'f') => self.boolean(),
            Some(b'0'..=b'9' | b'+' | b'-') => {
                if self.datetime_ahead() {
                    self.datetime()
                } else {
                    self.number()
                }
            }
            Some(b) if is_keylike(b) => Err(self.set_error(at, ErrorKind::UnquotedString)),
            Some(_) => Err(self.wanted("a value")),
        }
    }

    fn inline_array(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.cur.advance(); // '['
        let mut array = Array::new();
        let mut kind: Option<Kind> = None;
        loop {
            self.skip_array_filler()?;
            if self.cur.eat(b']') {
                return Ok(Value::Array(array));
            }
            let at = self.cur.pos();
            let value = self.value(depth + 1)?;
            match kind {
                None => kind = Some(value.kind()),
                Some(k) if k == value.kind() => {}
                Some(_) => return Err(self.set_error(at, ErrorKind::MixedArrayTypes)),
            }
            array.push(value);
            self.skip_array_filler()?;
            if self.cur.eat(b',') {
                continue;
            }
            if self.cur.eat(b']') {
                return Ok(Value::Array(array));
            }
            return Err(self.wanted("a comma or a right bracket"));
        }
    }

    /// An inline table is a single value position: raw newlines inside the
    /// braces are rejected, and no trailing comma is permitted. The table
    /// is frozen once the closing brace is consumed.
    fn inline_table(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.cur.advance(); // '{'
        let mut table = Table::new();
        self.cur.eat_whitespace();
        if self.cur.eat(b'}') {
            table.frozen = true;
            return Ok(Value::Table(table));
        }
        loop {
            let mut path = self.read_key_path()?;
            self.cur.eat_whitespace();
            self.expect(b'=', "an equals")?;
            self.cur.eat_whitespace();
            let value = self.value(depth + 1)?;

            let (last_key, last_at) = path.pop().expect("key path is never empty");
            let mut target: &mut Table = &mut table;
            for (seg, at) in &path {
                target = self.descend_dotted(target, seg, *at)?;
            }
            self.bind_value(target, last_key, last_at, value)?;

            self.cur.eat_whitespace();
            if self.cur.eat(b'}') {
                break;
            }
            self.expect(b',', "a comma")?;
            self.cur.eat_whitespace();
        }
        table.frozen = true;
        Ok(Value::Table(table))
    }

    // -- path resolver ------------------------------------------------------

    /// Walks one dotted-key segment, creating the intermediate table if it
    /// does not exist. Fails if the segment names anything other than an
    /// open, non-inline table.
    fn descend_dotted<'t>(
        &mut self,
        table: &'t mut Table,
        key: &str,
        at: usize,
    ) -> Result<&'t mut Table, ParseError> {
        if !table.contains_key(key) {
            table.insert(key.to_owned(), Value::Table(Table::new_dotted()));
        }
        match table.get_mut(key) {
            Some(Value::Table(t)) if !t.frozen && !t.defined => Ok(t),
            _ => Err(self.set_error(
                at,
                ErrorKind::DottedKeyInvalidType {
                    key: key.to_owned(),
                },
            )),
        }
    }

    /// Walks one intermediate header segment (`a` in `[a.b.c]`), creating
    /// an implicit table if absent. An existing array-of-tables resolves to
    /// its most recent entry.
    fn enter_header_intermediate<'t>(
        &mut self,
        table: &'t mut Table,
        key: &str,
        at: usize,
    ) -> Result<&'t mut Table, ParseError> {
        if !table.contains_key(key) {
            table.insert(key.to_owned(), Value::Table(Table::new()));
        }
        match table.get_mut(key) {
            Some(Value::Table(t)) if !t.frozen => Ok(t),
            Some(Value::Array(a)) if a.aot => match a.last_mut() {
                Some(Value::Table(t)) => Ok(t),
                _ => unreachable!("array-of-tables entries are always tables"),
            },
            _ => Err(self.set_error(
                at,
                ErrorKind::DuplicateKey {
                    key: key.to_owned(),
                },
            )),
        }
    }

    /// Final segment of a `[path]` header: the table must not already be
    /// explicitly defined, frozen, or occupied by a non-table value. A
    /// table created implicitly by an earlier deeper header may be defined
    /// here, exactly once.
    fn define_table(&mut self, table: &mut Table, key: String, at: usize) -> Result<(), ParseError> {
        if !table.contains_key(&key) {
            table.insert(key, Value::Table(Table::new_defined()));
            return Ok(());
        }
        match table.get_mut(&key) {
            Some(Value::Table(t)) if !t.frozen && !t.dotted => {
                if t.defined {
                    Err(self.set_error(at, ErrorKind::DuplicateTable { name: key }))
                } else {
                    t.defined = true;
                    Ok(())
                }
            }
            _ => Err(self.set_error(at, ErrorKind::DuplicateKey { key })),
        }
    }

    /// Final segment of a `[[path]]` header: appends a fresh table to the
    /// array of tables, creating the array on first use. Inline-created
    /// values can never be extended this way.
    fn append_array_entry(
        &mut self,
        table: &mut Table,
        key: String,
        at: usize,
    ) -> Result<(), ParseError> {
        if !table.contains_key(&key) {
            let mut array = Array::of_tables();
            array.push(Value::Table(Table::new_defined()));
            table.insert(key, Value::Array(array));
            return Ok(());
        }
        match table.get_mut(&key) {
            Some(Value::Array(a)) if a.aot => {
                a.push(Value::Table(Table::new_defined()));
                Ok(())
            }
            Some(Value::Array(_)) => Err(self.set_error(at, ErrorKind::ExtendInlineValue { key })),
            Some(Value::Table(t)) if t.frozen => {
                Err(self.set_error(at, ErrorKind::ExtendInlineValue { key }))
            }
            Some(Value::Table(_)) => Err(self.set_error(at, ErrorKind::RedefineAsArray { name: key })),
            _ => Err(self.set_error(at, ErrorKind::DuplicateKey { key })),
        }
    }

    /// Binds a value to its terminal key, rejecting duplicates.
    fn bind_value(
        &mut self,
        table: &mut Table,
        key: String,
        at: usize,
        value: Value,
    ) -> Result<(), ParseError> {
        if table.contains_key(&key) {
            return Err(self.set_error(at, ErrorKind::DuplicateKey { key }));
        }
        table.insert(key, value);
        Ok(())
    }

    // -- top-level structure ------------------------------------------------

    fn table_header(&mut self, root: &mut Table) -> Result<(), ParseError> {
        self.cur.advance(); // '['
        let aot = self.cur.eat(b'[');

        self.cur.eat_whitespace();
        let mut path = self.read_key_path()?;
        self.cur.eat_whitespace();
        self.expect(b']', "a right bracket")?;
        if aot {
            // The second bracket must follow immediately: `[[a.b] ]` is a
            // mismatched header, not a spaced-out one.
            self.expect(b']', "a right bracket")?;
        }
        self.end_of_line()?;

        let (last_key, last_at) = path.pop().expect("key path is never empty");
        let mut context = Vec::with_capacity(path.len() + 1);
        let mut table: &mut Table = root;
        for (seg, at) in &path {
            table = self.enter_header_intermediate(table, seg, *at)?;
        }
        for (seg, _) in path {
            context.push(seg);
        }
        if aot {
            self.append_array_entry(table, last_key.clone(), last_at)?;
        } else {
            self.define_table(table, last_key.clone(), last_at)?;
        }
        context.push(last_key);
        self.context = context;
        Ok(())
    }

    fn key_value(&mut self, root: &mut Table) -> Result<(), ParseError> {
        let mut path = self.read_key_path()?;
        self.cur.eat_whitespace();
        self.expect(b'=', "an equals")?;
        self.cur.eat_whitespace();
        let value = self.value(0)?;
        self.end_of_line()?;

        let (last_key, last_at) = path.pop().expect("key path is never empty");
        let mut table = open_context(root, &self.context);
        for (seg, at) in &path {
            table = self.descend_dotted(table, seg, *at)?;
        }
        self.bind_value(table, last_key, last_at, value)
    }

    fn document(&mut self, root: &mut Table) -> Result<(), ParseError> {
        loop {
            self.cur.eat_whitespace();
            if self.eat_comment()? {
                continue;
            }
            if self.cur.eat_newline() {
                continue;
            }
            match self.cur.peek() {
                None => return Ok(()),
                Some(b'[') => self.table_header(root)?,
                Some(b'\r') => {
                    let at = self.cur.pos();
                    return Err(self.set_error(at, ErrorKind::Unexpected('\r')));
                }
                Some(_) => self.key_value(root)?,
            }
        }
    }
}

/// Re-resolves the current header context against the root. The path was
/// validated when the header was processed, so every segment names either
/// a table or an array of tables.
fn open_context<'t>(root: &'t mut Table, path: &[String]) -> &'t mut Table {
    let mut table = root;
    for seg in path {
        table = match table.get_mut(seg) {
            Some(Value::Table(t)) => t,
            Some(Value::Array(a)) => match a.last_mut() {
                Some(Value::Table(t)) => t,
                _ => unreachable!("array-of-tables entries are always tables"),
            },
            _ => unreachable!("context path segments are always containers"),
        };
    }
    table
}

// ---------------------------------------------------------------------------
// Top-level parse entry point
// ---------------------------------------------------------------------------

/// Parses a document into its root [`Table`].
///
/// The input must already be fully materialized; the parser performs no
/// I/O. On failure the returned [`Error`] locates the first offending
/// character with 1-based line and column numbers.
///
/// # Examples
///
/// ```
/// let root = strictoml::parse("answer = 42")?;
/// assert_eq!(root.get("answer").and_then(|v| v.as_integer()), Some(42));
/// # Ok::<(), strictoml::Error>(())
/// ```
pub fn parse(input: &str) -> Result<Table, Error> {
    let mut root = Table::new_defined();
    let mut parser = Parser::new(input);
    match parser.document(&mut root) {
        Ok(()) => Ok(root),
        Err(ParseError) => Err(parser.take_error()),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[inline]
fn is_keylike(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

#[cfg(test)]
#[path = "./parser_tests.rs"]
mod tests;
