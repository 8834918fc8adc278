use text_size::{TextRange, TextSize};

pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    token_start: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0, token_start: 0 }
    }

    // `Tokenizer::new` rejects inputs whose offsets do not fit in a `u32`.
    pub(crate) fn offset(&self) -> TextSize {
        TextSize::new(self.pos as u32)
    }

    pub(crate) fn token_range(&self) -> TextRange {
        TextRange::new(TextSize::new(self.token_start as u32), self.offset())
    }

    pub(crate) fn reset_token_start(&mut self) {
        self.token_start = self.pos;
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub(crate) fn second(&self) -> Option<u8> {
        self.bytes.get(self.pos + 1).copied()
    }

    /// Steps over one byte. Only used for ASCII bytes already peeked.
    pub(crate) fn bump(&mut self) {
        debug_assert!(self.peek().is_some_and(|byte| byte.is_ascii()));
        self.pos += 1;
    }

    /// Steps over one UTF-8 encoded character.
    ///
    /// A malformed sequence is stepped over one byte at a time and reported
    /// by returning `false`.
    pub(crate) fn advance_char(&mut self) -> bool {
        let rest = &self.bytes[self.pos..];
        let width = match rest.first() {
            None => return true,
            Some(0x00..=0x7F) => 1,
            Some(0xC2..=0xDF) => 2,
            Some(0xE0..=0xEF) => 3,
            Some(0xF0..=0xF4) => 4,
            Some(_) => 0,
        };

        if width > 0 && rest.get(..width).is_some_and(|bytes| std::str::from_utf8(bytes).is_ok()) {
            self.pos += width;
            true
        } else {
            self.pos += 1;
            false
        }
    }
}
