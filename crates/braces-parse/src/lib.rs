use braces_errors::Error;
use braces_syntax::{ParseFlags, Tree};

mod parser;
mod pool;
mod range;
#[cfg(test)]
mod tests;

pub use parser::Parser;

/// Compiles `input` with a throwaway [`Parser`].
pub fn parse(input: impl AsRef<[u8]>, flags: ParseFlags) -> Result<Tree, Error> {
    Parser::new(flags).parse(input)
}
