//! Expansion tree for brace patterns.
//!
//! A pattern compiles to a tree of [`Node`]s stored in one arena. Besides the
//! owning parent-to-children edges, every node carries a `next` link to the
//! node that follows it in the pattern, so the tree can be expanded as a
//! chain without walking back up through parents.

mod builder;
mod flags;
mod range;
pub mod stack;
mod syntax_kind;
mod syntax_set;
mod tree;

/// Bottom-up construction of a `Tree`.
pub use builder::Builder;
/// Parser and expansion configuration.
pub use flags::{ExpandFlags, ParseFlags};
/// Closed-form range payload.
pub use range::RangeData;
/// Node and tree kinds.
pub use syntax_kind::SyntaxKind;
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;
/// Tree API.
pub use tree::{Node, NodeId, Tree, code_point};
