//! Parser and expansion configuration.
//!
//! Both flag sets are independently combinable. The empty set is the
//! default: permissive parsing, escapes and quotes stripped on output.

use bitflags::bitflags;

bitflags! {
    /// How a pattern is scanned and parsed.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ParseFlags: u16 {
        /// Treat `\` as an ordinary character.
        const IGNORE_ESCAPE = 1 << 0;
        /// Treat `"`, `'` and `` ` `` as ordinary characters.
        const IGNORE_QUOTE = 1 << 1;
        /// Allow ranges between any two single characters, not just
        /// digits and same-case ASCII letters.
        const ANY_CHAR_RANGE = 1 << 2;
        /// Report invalid UTF-8, a trailing `\` and unterminated quotes
        /// as errors instead of degrading them to literal text.
        const STRICT = 1 << 3;
    }
}

bitflags! {
    /// How a compiled tree is turned into strings.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ExpandFlags: u16 {
        /// Emit `\x` verbatim instead of just `x`.
        const KEEP_ESCAPE = 1 << 0;
        /// Emit quote delimiters instead of stripping them.
        const KEEP_QUOTE = 1 << 1;
    }
}
