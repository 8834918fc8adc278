//! Expansion of compiled brace patterns.

use braces_syntax::{ExpandFlags, Tree};

mod number;
mod walker;

pub use number::push_integer;
pub use walker::Walker;

/// Streams every expansion of `tree` to `emit`, using `buffer` as scratch.
pub fn walk(tree: &Tree, flags: ExpandFlags, buffer: &mut Vec<u8>, emit: impl FnMut(&[u8])) {
    Walker::new(tree, flags, emit).walk(buffer);
}

pub fn expand(tree: &Tree, flags: ExpandFlags) -> Vec<String> {
    append_expand(Vec::new(), tree, flags)
}

/// Appends every expansion of `tree` to `data`.
///
/// Bytes that are not valid UTF-8 (only possible for patterns parsed in
/// permissive mode) are replaced with `U+FFFD`.
pub fn append_expand(mut data: Vec<String>, tree: &Tree, flags: ExpandFlags) -> Vec<String> {
    let mut buffer = Vec::new();
    walk(tree, flags, &mut buffer, |bytes| {
        data.push(String::from_utf8_lossy(bytes).into_owned());
    });
    data
}
