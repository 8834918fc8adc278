use std::fmt::Display;

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
pub use text_size::TextSize;

/// Errors reported while compiling a pattern in strict mode.
///
/// Malformed brace syntax is never an error: it degrades to literal text.
/// These variants only cover encoding-level problems.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid UTF-8 sequence at offset {offset:?}")]
    InvalidEncoding { offset: TextSize },
    #[error("trailing escape character at offset {offset:?}")]
    TrailingEscape { offset: TextSize },
    #[error("missing closing quote character for `{quote}` opened at offset {offset:?}")]
    UnterminatedQuote { offset: TextSize, quote: char },
    #[error("pattern of {len} bytes does not fit in 32-bit offsets")]
    TooLong { len: usize },
}

impl Error {
    /// Byte offset into the pattern where the problem starts.
    ///
    /// [`Error::TooLong`] points at the last representable offset.
    pub fn offset(&self) -> TextSize {
        match *self {
            Self::InvalidEncoding { offset }
            | Self::TrailingEscape { offset }
            | Self::UnterminatedQuote { offset, .. } => offset,
            Self::TooLong { .. } => TextSize::new(u32::MAX),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::InvalidEncoding { .. } => "not valid UTF-8",
            Self::TrailingEscape { .. } => "nothing to escape",
            Self::UnterminatedQuote { .. } => "quote opened here",
            Self::TooLong { .. } => "pattern ends past this point",
        }
    }

    /// Renders the error as an annotated snippet of `text`.
    ///
    /// The range is clamped to `text`, so a pattern that is not the one the
    /// error came from still renders.
    pub fn render<'a>(
        &self,
        renderer: &'a Renderer,
        origin: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let mut start = usize::from(self.offset()).min(text.len());
        while !text.is_char_boundary(start) {
            start -= 1;
        }
        let end = text[start..].chars().next().map_or(start, |ch| start + ch.len_utf8());

        let title = self.to_string();
        let label = self.label();
        let message = Level::Error.title(&title).snippet(
            Snippet::source(text)
                .origin(origin)
                .annotation(Level::Error.span(start..end).label(label))
                .fold(true),
        );
        renderer.render(message).to_string()
    }
}
