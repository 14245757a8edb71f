//! Byte-level cursor over the input document.

#[cfg(test)]
#[path = "./cursor_tests.rs"]
mod tests;

/// Tracks the current position inside the document being parsed.
///
/// The cursor never fails: end of input is signalled by `None` from the
/// peek methods and must be handled explicitly by every consumer. Line and
/// column numbers are derived on demand from a byte offset, since they are
/// only needed when attaching a location to an error.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    /// Current byte offset from the start of the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Total length of the input in bytes.
    #[inline]
    pub fn input_len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// The unconsumed tail of the input as raw bytes.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_by(&mut self, n: usize) {
        self.pos += n;
    }

    /// Consumes the next byte if it equals `b`.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Reads the next character, folding `\r\n` into a single `'\n'`.
    /// Returns the byte offset the character started at.
    pub fn next_char(&mut self) -> Option<(usize, char)> {
        let i = self.pos;
        let b = self.bytes.get(i).copied()?;

        if b == b'\r' && self.bytes.get(i + 1) == Some(&b'\n') {
            self.pos = i + 2;
            return Some((i, '\n'));
        }

        if b < 0x80 {
            self.pos = i + 1;
            Some((i, b as char))
        } else {
            let ch = self.input[i..].chars().next()?;
            self.pos = i + ch.len_utf8();
            Some((i, ch))
        }
    }

    /// Skips spaces and tabs.
    pub fn eat_whitespace(&mut self) {
        while let Some(b' ' | b'\t') = self.peek() {
            self.advance();
        }
    }

    /// Consumes a `\n` or `\r\n` line ending.
    pub fn eat_newline(&mut self) -> bool {
        match self.peek() {
            Some(b'\n') => {
                self.advance();
                true
            }
            Some(b'\r') if self.peek_at(1) == Some(b'\n') => {
                self.pos += 2;
                true
            }
            _ => false,
        }
    }

    /// Slice of the input between two byte offsets. Offsets must fall on
    /// character boundaries; every caller slices around ASCII tokens.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// 1-based line and column of the given byte offset. Columns count
    /// bytes from the most recent newline.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.bytes.len());
        let mut line = 1;
        let mut line_start = 0;
        for (i, &b) in self.bytes[..offset].iter().enumerate() {
            if b == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }
        (line, offset - line_start + 1)
    }
}
