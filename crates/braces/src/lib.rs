//! Shell-style brace expansion.
//!
//! ```text
//! a{b,c}d        abd acd
//! {1..10..3}     1 4 7 10
//! {a..e..2}      a c e
//! {08..10}       08 09 10
//! {,re}do        do redo
//! ```
//!
//! Constructs that are neither an alternation nor a range are kept as
//! literal text, so compiling only fails in strict mode or for patterns
//! whose offsets do not fit in 32 bits.

use std::fmt;

pub use braces_errors::{Error, Renderer};
pub use braces_expand::Walker;
pub use braces_parse::Parser;
pub use braces_syntax::{ExpandFlags, Node, NodeId, ParseFlags, SyntaxKind, Tree};

/// A compiled pattern together with its expansion settings.
///
/// Expanding reuses an internal buffer, so a `Pattern` that is expanded
/// repeatedly only allocates for the strings it hands out.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    tree: Tree,
    flags: ExpandFlags,
    buffer: Vec<u8>,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Result<Self, Error> {
        Self::with_flags(source, ParseFlags::empty(), ExpandFlags::empty())
    }

    pub fn with_flags(
        source: impl Into<String>,
        parse_flags: ParseFlags,
        expand_flags: ExpandFlags,
    ) -> Result<Self, Error> {
        let source = source.into();
        let tree = braces_parse::parse(&source, parse_flags)?;
        Ok(Self { source, tree, flags: expand_flags, buffer: Vec::new() })
    }

    /// Calls `emit` with every expansion in order.
    pub fn walk(&mut self, mut emit: impl FnMut(&str)) {
        braces_expand::walk(&self.tree, self.flags, &mut self.buffer, |bytes| {
            emit(&String::from_utf8_lossy(bytes));
        });
    }

    /// Appends every expansion to `data`.
    pub fn expand(&mut self, mut data: Vec<String>) -> Vec<String> {
        self.walk(|expansion| data.push(expansion.to_owned()));
        data
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> ExpandFlags {
        self.flags
    }

    /// Prints the tree dump to stdout.
    pub fn print(&self) {
        print!("{}", self.tree);
    }
}

/// Two patterns are equal when they compile to the same tree.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

pub fn compile(pattern: &str) -> Result<Pattern, Error> {
    Pattern::new(pattern)
}

/// Like [`compile`], but panics with the rendered error.
pub fn must_compile(pattern: &str) -> Pattern {
    compile(pattern).unwrap_or_else(|err| {
        panic!("{}", err.render(&Renderer::plain(), "<pattern>", pattern))
    })
}

pub fn walk(pattern: &str, emit: impl FnMut(&str)) {
    must_compile(pattern).walk(emit);
}

pub fn expand(pattern: &str) -> Vec<String> {
    append_expand(Vec::new(), pattern)
}

pub fn append_expand(data: Vec<String>, pattern: &str) -> Vec<String> {
    must_compile(pattern).expand(data)
}

pub fn print_tree(pattern: &str) {
    must_compile(pattern).print();
}
