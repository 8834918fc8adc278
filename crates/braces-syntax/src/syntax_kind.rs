use std::fmt;

use crate::SyntaxSet;

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxKind {
    EMPTY,
    LITERAL,
    ESCAPE,
    QUOTE,
    INTEGER_RANGE,
    CHAR_RANGE,
    CONCAT,
    ALTERNATE,

    BRACE_OPEN,
    BRACE_DELIMITER,
    BRACE_RANGE,

    BRACE_CLOSE,
    EOF,
}

impl SyntaxKind {
    /// Kinds that only ever live on the parser's working stack.
    pub const PSEUDO: SyntaxSet =
        SyntaxSet::new([Self::BRACE_OPEN, Self::BRACE_DELIMITER, Self::BRACE_RANGE]);
    /// Leaf kinds whose value bytes are raw source text.
    pub const TEXT: SyntaxSet = SyntaxSet::new([Self::LITERAL, Self::ESCAPE, Self::QUOTE]);
    pub const RANGES: SyntaxSet = SyntaxSet::new([Self::INTEGER_RANGE, Self::CHAR_RANGE]);
    pub const LISTS: SyntaxSet = SyntaxSet::new([Self::CONCAT, Self::ALTERNATE]);

    pub const fn is_pseudo(self) -> bool {
        Self::PSEUDO.contains(self)
    }

    pub const fn is_range(self) -> bool {
        Self::RANGES.contains(self)
    }

    pub const fn is_list(self) -> bool {
        Self::LISTS.contains(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::EMPTY => "Empty",
            Self::LITERAL => "Literal",
            Self::ESCAPE => "Escape",
            Self::QUOTE => "Quote",
            Self::INTEGER_RANGE => "IntegerRange",
            Self::CHAR_RANGE => "CharRange",
            Self::CONCAT => "Concat",
            Self::ALTERNATE => "Alternate",
            Self::BRACE_OPEN => "BraceOpen",
            Self::BRACE_DELIMITER => "BraceDelimiter",
            Self::BRACE_RANGE => "BraceRange",
            Self::BRACE_CLOSE => "BraceClose",
            Self::EOF => "Eof",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
