use super::*;

fn at(kind: ErrorKind, line: usize, column: usize) -> Error {
    Error { kind, line, column }
}

#[test]
fn display_includes_location() {
    let cases = [
        (
            at(ErrorKind::UnexpectedEof, 1, 5),
            "unexpected eof encountered at line 1 column 5",
        ),
        (
            at(ErrorKind::Wanted { expected: "a newline", found: "an identifier" }, 2, 7),
            "expected a newline, found an identifier at line 2 column 7",
        ),
        (
            at(ErrorKind::DuplicateKey { key: "port".into() }, 10, 1),
            "duplicate key: `port` at line 10 column 1",
        ),
        (
            at(ErrorKind::DuplicateTable { name: "server".into() }, 4, 2),
            "redefinition of table `server` at line 4 column 2",
        ),
        (
            at(ErrorKind::RedefineAsArray { name: "a".into() }, 2, 3),
            "table `a` redefined as array at line 2 column 3",
        ),
        (
            at(ErrorKind::MixedArrayTypes, 1, 10),
            "mixed types in array at line 1 column 10",
        ),
        (
            at(ErrorKind::InvalidEscapeValue(0xD800), 1, 7),
            "invalid escape value: `55296` at line 1 column 7",
        ),
    ];
    for (error, expected) in cases {
        assert_eq!(error.to_string(), expected);
    }
}

#[test]
fn display_escapes_invisible_characters() {
    let e = at(ErrorKind::InvalidCharInString('\u{0}'), 1, 6);
    assert_eq!(
        e.to_string(),
        "invalid character in string: `\\u{0}` at line 1 column 6",
    );

    let e = at(ErrorKind::InvalidEscape('\t'), 1, 6);
    assert_eq!(
        e.to_string(),
        "invalid escape character in string: `\\t` at line 1 column 6",
    );

    // printable characters pass through untouched
    let e = at(ErrorKind::Unexpected('@'), 1, 1);
    assert_eq!(e.to_string(), "unexpected character found: `@` at line 1 column 1");
}

#[test]
fn kind_codes() {
    let cases = [
        (ErrorKind::UnexpectedEof, "unexpected-eof"),
        (ErrorKind::UnterminatedString, "unterminated-string"),
        (ErrorKind::InvalidNumber, "invalid-number"),
        (ErrorKind::InvalidDatetime, "invalid-datetime"),
        (ErrorKind::DuplicateKey { key: "x".into() }, "duplicate-key"),
        (ErrorKind::MixedArrayTypes, "mixed-array-types"),
        (ErrorKind::RecursionLimit, "recursion-limit"),
    ];
    for (kind, code) in cases {
        assert_eq!(kind.to_string(), code);
        // Debug matches Display, so assertion failures stay readable
        assert_eq!(format!("{kind:?}"), code);
    }
}
