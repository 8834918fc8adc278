use braces_syntax::SyntaxKind::*;
use braces_syntax::stack::ensure_sufficient_stack;
use braces_syntax::{ExpandFlags, NodeId, Tree, code_point};

use crate::number::push_integer;

/// Depth-first expansion of a compiled tree.
///
/// All expansions share one output buffer: every alternative truncates the
/// buffer back to the length it had on entry before writing its own text,
/// so a prefix is written once no matter how many expansions share it.
/// `emit` only sees the buffer for the duration of the call.
pub struct Walker<'t, F> {
    tree: &'t Tree,
    flags: ExpandFlags,
    emit: F,
}

impl<'t, F> Walker<'t, F>
where
    F: FnMut(&[u8]),
{
    pub fn new(tree: &'t Tree, flags: ExpandFlags, emit: F) -> Self {
        Self { tree, flags, emit }
    }

    /// Emits every expansion in order. `buffer` is cleared first and left
    /// holding the last expansion.
    pub fn walk(&mut self, buffer: &mut Vec<u8>) {
        buffer.clear();
        self.visit(buffer, Some(self.tree.root()));
    }

    fn visit(&mut self, buffer: &mut Vec<u8>, id: Option<NodeId>) {
        ensure_sufficient_stack(|| {
            let Some(id) = id else {
                (self.emit)(buffer.as_slice());
                return;
            };

            let tree = self.tree;
            let node = &tree[id];
            match node.kind() {
                CONCAT => self.visit(buffer, node.children().first().copied()),
                ALTERNATE => {
                    let offset = buffer.len();
                    for &branch in node.children() {
                        buffer.truncate(offset);
                        self.visit(buffer, Some(branch));
                    }
                }
                INTEGER_RANGE => {
                    let offset = buffer.len();
                    let range = node.range();
                    for value in range.values() {
                        buffer.truncate(offset);
                        push_integer(buffer, value, range.width);
                        self.visit(buffer, node.next());
                    }
                }
                CHAR_RANGE => {
                    let offset = buffer.len();
                    let mut utf8 = [0; 4];
                    for value in node.range().values() {
                        buffer.truncate(offset);
                        let ch = code_point(value).encode_utf8(&mut utf8);
                        buffer.extend_from_slice(ch.as_bytes());
                        self.visit(buffer, node.next());
                    }
                }
                ESCAPE => {
                    let value = node.value();
                    let value = if self.flags.contains(ExpandFlags::KEEP_ESCAPE) {
                        value
                    } else {
                        value.get(1..).unwrap_or_default()
                    };
                    buffer.extend_from_slice(value);
                    self.visit(buffer, node.next());
                }
                QUOTE => {
                    if self.flags.contains(ExpandFlags::KEEP_QUOTE) {
                        buffer.extend_from_slice(node.value());
                    }
                    self.visit(buffer, node.next());
                }
                _ => {
                    buffer.extend_from_slice(node.value());
                    self.visit(buffer, node.next());
                }
            }
        });
    }
}
