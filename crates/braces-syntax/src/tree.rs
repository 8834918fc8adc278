//! Immutable expansion tree.

use std::fmt;
use std::ops::Index;

use la_arena::{Arena, Idx};
use smallvec::SmallVec;

use crate::stack::ensure_sufficient_stack;
use crate::{RangeData, SyntaxKind};

pub type NodeId = Idx<Node>;

/// A single tree element.
///
/// Which payload is meaningful depends on `kind`: `children` for
/// `CONCAT`/`ALTERNATE`, `range` for the range kinds, `value` for the rest.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) kind: SyntaxKind,
    pub(crate) children: Vec<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) value: SmallVec<[u8; 2]>,
    pub(crate) range: RangeData,
}

impl Node {
    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// What follows this node once it has been expanded, `None` at the end
    /// of the pattern.
    #[inline]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// Raw bytes of a `LITERAL`, `ESCAPE` or `QUOTE` node. An `ESCAPE` value
    /// includes the leading backslash.
    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    #[inline]
    pub fn range(&self) -> RangeData {
        self.range
    }
}

/// Compiled pattern, owned by the caller and never mutated after
/// [`Builder::finish`](crate::Builder::finish).
#[derive(Debug, Clone)]
pub struct Tree {
    pub(crate) nodes: Arena<Node>,
    pub(crate) root: NodeId,
}

impl Tree {
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the tree.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    fn node_eq(&self, id: NodeId, other: &Self, other_id: NodeId) -> bool {
        ensure_sufficient_stack(|| {
            let (lhs, rhs) = (&self[id], &other[other_id]);
            if lhs.kind != rhs.kind {
                return false;
            }

            if lhs.kind.is_range() {
                lhs.range == rhs.range
            } else if lhs.kind.is_list() {
                lhs.children.len() == rhs.children.len()
                    && lhs
                        .children
                        .iter()
                        .zip(&rhs.children)
                        .all(|(&lhs, &rhs)| self.node_eq(lhs, other, rhs))
            } else {
                lhs.value == rhs.value
            }
        })
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        ensure_sufficient_stack(|| {
            let node = &self[id];
            write!(f, "{:indent$}- {}", "", node.kind, indent = depth * 2)?;

            match node.kind {
                SyntaxKind::INTEGER_RANGE => {
                    let range = node.range;
                    let width = range.width;
                    write!(f, " {:0width$}..{:0width$}", range.start, range.end())?;
                    fmt_step(f, range.step)?;
                }
                SyntaxKind::CHAR_RANGE => {
                    let range = node.range;
                    write!(f, " {:?}..{:?}", code_point(range.start), code_point(range.end()))?;
                    fmt_step(f, range.step)?;
                }
                SyntaxKind::EMPTY | SyntaxKind::CONCAT | SyntaxKind::ALTERNATE => {}
                _ => write!(f, " {:?}", String::from_utf8_lossy(&node.value))?,
            }
            writeln!(f)?;

            for &child in &node.children {
                self.fmt_node(f, child, depth + 1)?;
            }
            Ok(())
        })
    }
}

fn fmt_step(f: &mut fmt::Formatter<'_>, step: i64) -> fmt::Result {
    if step.unsigned_abs() > 1 { write!(f, "..{step}") } else { Ok(()) }
}

/// Character for a char-range value, `U+FFFD` for surrogates.
pub fn code_point(value: i64) -> char {
    u32::try_from(value).ok().and_then(char::from_u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl Index<NodeId> for Tree {
    type Output = Node;

    #[inline]
    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index]
    }
}

/// Structural equality: kinds, values and range payloads must match
/// recursively. `next` links are derived and never compared.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.node_eq(self.root, other, other.root)
    }
}

impl Eq for Tree {}

/// Indented dump, one node per line.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root, 0)
    }
}
