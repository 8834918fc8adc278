mod cursor;

use braces_errors::Error;
use braces_syntax::ParseFlags;
pub use braces_syntax::SyntaxKind;
use braces_syntax::SyntaxKind::*;
use cursor::Cursor;
use text_size::{TextRange, TextSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

/// Splits a pattern into brace, quote, escape and literal tokens.
///
/// Brace tokens are produced wherever the characters occur; whether they
/// are structural is up to the parser. Quoting is tracked here: inside a
/// quote only the closing delimiter and escapes are recognized.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    flags: ParseFlags,
    quote: Option<(u8, TextSize)>,
}

impl<'a> Tokenizer<'a> {
    /// Fails with [`Error::TooLong`] when offsets into `text` would not fit
    /// in a [`TextSize`].
    pub fn new(text: &'a [u8], flags: ParseFlags) -> Result<Self, Error> {
        text_size(text.len())?;
        Ok(Self { cursor: Cursor::new(text), flags, quote: None })
    }

    /// Offset of the quote delimiter that is still waiting to be closed.
    pub fn open_quote(&self) -> Option<TextSize> {
        self.quote.map(|(_, offset)| offset)
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.cursor.reset_token_start();

        let kind = match (self.cursor.peek(), self.quote) {
            (None, quote) => self.eof(quote)?,
            (Some(first), Some((quote, _))) => self.quoted(first, quote)?,
            (Some(first), None) => self.unquoted(first)?,
        };

        Ok(Token { kind, range: self.cursor.token_range() })
    }

    fn escapes(&self) -> bool {
        !self.flags.contains(ParseFlags::IGNORE_ESCAPE)
    }

    fn quotes(&self) -> bool {
        !self.flags.contains(ParseFlags::IGNORE_QUOTE)
    }

    fn strict(&self) -> bool {
        self.flags.contains(ParseFlags::STRICT)
    }

    fn eof(&self, quote: Option<(u8, TextSize)>) -> Result<SyntaxKind, Error> {
        match quote {
            Some((quote, offset)) if self.strict() => {
                Err(Error::UnterminatedQuote { offset, quote: char::from(quote) })
            }
            _ => Ok(EOF),
        }
    }

    fn unquoted(&mut self, first: u8) -> Result<SyntaxKind, Error> {
        let kind = match first {
            b'\\' if self.escapes() => return self.escape(),
            b'"' | b'\'' | b'`' if self.quotes() => {
                self.quote = Some((first, self.cursor.offset()));
                self.cursor.bump();
                QUOTE
            }
            b'{' => {
                self.cursor.bump();
                BRACE_OPEN
            }
            b',' => {
                self.cursor.bump();
                BRACE_DELIMITER
            }
            b'}' => {
                self.cursor.bump();
                BRACE_CLOSE
            }
            b'.' if self.cursor.second() == Some(b'.') => {
                self.cursor.bump();
                self.cursor.bump();
                BRACE_RANGE
            }
            _ => {
                self.literal(Self::is_special)?;
                LITERAL
            }
        };

        Ok(kind)
    }

    fn quoted(&mut self, first: u8, quote: u8) -> Result<SyntaxKind, Error> {
        if first == quote {
            self.cursor.bump();
            self.quote = None;
            return Ok(QUOTE);
        }

        if first == b'\\' && self.escapes() {
            return self.escape();
        }

        self.literal(|tokenizer, byte| byte == quote || (byte == b'\\' && tokenizer.escapes()))?;
        Ok(LITERAL)
    }

    /// Whether `byte` at the cursor starts a token of its own outside quotes.
    fn is_special(&self, byte: u8) -> bool {
        match byte {
            b'{' | b',' | b'}' => true,
            b'.' => self.cursor.second() == Some(b'.'),
            b'\\' => self.escapes(),
            b'"' | b'\'' | b'`' => self.quotes(),
            _ => false,
        }
    }

    /// `\` followed by one character. A trailing `\` is literal text unless
    /// running in strict mode.
    fn escape(&mut self) -> Result<SyntaxKind, Error> {
        let offset = self.cursor.offset();
        self.cursor.bump();

        if self.cursor.is_eof() {
            return if self.strict() { Err(Error::TrailingEscape { offset }) } else { Ok(LITERAL) };
        }

        self.advance_char()?;
        Ok(ESCAPE)
    }

    fn literal(&mut self, stop: impl Fn(&Self, u8) -> bool) -> Result<(), Error> {
        while let Some(byte) = self.cursor.peek() {
            if stop(self, byte) {
                break;
            }
            self.advance_char()?;
        }
        Ok(())
    }

    fn advance_char(&mut self) -> Result<(), Error> {
        let offset = self.cursor.offset();
        if !self.cursor.advance_char() && self.strict() {
            return Err(Error::InvalidEncoding { offset });
        }
        Ok(())
    }
}

fn text_size(len: usize) -> Result<TextSize, Error> {
    TextSize::try_from(len).map_err(|_| Error::TooLong { len })
}
