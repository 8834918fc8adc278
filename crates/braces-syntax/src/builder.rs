//! Bottom-up construction of an immutable [`Tree`].

use la_arena::Arena;
use smallvec::SmallVec;

use crate::stack::ensure_sufficient_stack;
use crate::{Node, NodeId, RangeData, SyntaxKind, Tree};

/// Builds a `Tree` from leaves up.
///
/// Children must be allocated before their parent. `next` links are only
/// established in [`Builder::finish`], once the whole tree is known.
#[derive(Default)]
pub struct Builder {
    nodes: Arena<Node>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, kind: SyntaxKind) -> NodeId {
        debug_assert!(!kind.is_pseudo(), "pseudo kind {kind:?} in a finished tree");
        self.nodes.alloc(Node {
            kind,
            children: Vec::new(),
            next: None,
            value: SmallVec::new(),
            range: RangeData::default(),
        })
    }

    pub fn leaf(&mut self, kind: SyntaxKind, value: &[u8]) -> NodeId {
        debug_assert!(kind == SyntaxKind::EMPTY || SyntaxKind::TEXT.contains(kind));
        let id = self.alloc(kind);
        self.nodes[id].value.extend_from_slice(value);
        id
    }

    pub fn range(&mut self, kind: SyntaxKind, range: RangeData) -> NodeId {
        debug_assert!(kind.is_range());
        let id = self.alloc(kind);
        self.nodes[id].range = range;
        id
    }

    pub fn node(&mut self, kind: SyntaxKind, children: Vec<NodeId>) -> NodeId {
        debug_assert!(kind.is_list());
        let id = self.alloc(kind);
        self.nodes[id].children = children;
        id
    }

    /// Links every node to its continuation and freezes the tree.
    pub fn finish(mut self, root: NodeId) -> Tree {
        self.link(root, None);
        Tree { nodes: self.nodes, root }
    }

    fn link(&mut self, id: NodeId, next: Option<NodeId>) {
        ensure_sufficient_stack(|| {
            self.nodes[id].next = next;

            let len = self.nodes[id].children.len();
            match self.nodes[id].kind {
                SyntaxKind::ALTERNATE => {
                    for i in 0..len {
                        let branch = self.nodes[id].children[i];
                        self.link(branch, next);
                    }
                }
                SyntaxKind::CONCAT => {
                    for i in 0..len {
                        let children = &self.nodes[id].children;
                        let (child, after) = (children[i], children.get(i + 1).copied());
                        self.link(child, after.or(next));
                    }
                }
                _ => {}
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;
    use crate::SyntaxKind::*;

    /// `a{b,c}d`
    fn sample() -> Tree {
        let mut builder = Builder::new();
        let a = builder.leaf(LITERAL, b"a");
        let b = builder.leaf(LITERAL, b"b");
        let c = builder.leaf(LITERAL, b"c");
        let alternate = builder.node(ALTERNATE, vec![b, c]);
        let d = builder.leaf(LITERAL, b"d");
        let root = builder.node(CONCAT, vec![a, alternate, d]);
        builder.finish(root)
    }

    #[test]
    fn links() {
        let tree = sample();
        let root = &tree[tree.root()];
        let &[a, alternate, d] = root.children() else { panic!("expected three children") };

        assert_eq!(root.next(), None);
        assert_eq!(tree[a].next(), Some(alternate));
        assert_eq!(tree[d].next(), None);
        for &branch in tree[alternate].children() {
            assert_eq!(tree[branch].next(), Some(d));
        }
    }

    #[test]
    fn nested_links() {
        // {x{1,2},y}z
        let mut builder = Builder::new();
        let x = builder.leaf(LITERAL, b"x");
        let one = builder.leaf(LITERAL, b"1");
        let two = builder.leaf(LITERAL, b"2");
        let inner = builder.node(ALTERNATE, vec![one, two]);
        let first = builder.node(CONCAT, vec![x, inner]);
        let y = builder.leaf(LITERAL, b"y");
        let outer = builder.node(ALTERNATE, vec![first, y]);
        let z = builder.leaf(LITERAL, b"z");
        let root = builder.node(CONCAT, vec![outer, z]);
        let tree = builder.finish(root);

        assert_eq!(tree[x].next(), Some(inner));
        assert_eq!(tree[one].next(), Some(z));
        assert_eq!(tree[two].next(), Some(z));
        assert_eq!(tree[y].next(), Some(z));
        assert_eq!(tree[first].next(), Some(z));
    }

    #[test]
    fn equality() {
        assert_eq!(sample(), sample());

        let mut builder = Builder::new();
        let a = builder.leaf(LITERAL, b"a");
        let b = builder.leaf(LITERAL, b"b");
        let root = builder.node(CONCAT, vec![a, b]);
        assert_ne!(sample(), builder.finish(root));

        let range = |step| {
            let mut builder = Builder::new();
            let root = builder.range(INTEGER_RANGE, RangeData::new(1, 9, step, 0).unwrap());
            builder.finish(root)
        };
        assert_eq!(range(0), range(1));
        assert_ne!(range(1), range(2));
    }

    #[test]
    fn display() {
        let mut builder = Builder::new();
        let escape = builder.leaf(ESCAPE, b"\\{");
        let numbers = builder.range(INTEGER_RANGE, RangeData::new(-1, 5, 2, 3).unwrap());
        let letters = builder.range(CHAR_RANGE, RangeData::new(97, 100, 1, 0).unwrap());
        let empty = builder.leaf(EMPTY, b"");
        let alternate = builder.node(ALTERNATE, vec![letters, empty]);
        let root = builder.node(CONCAT, vec![escape, numbers, alternate]);
        let tree = builder.finish(root);

        expect![[r#"
            - Concat
              - Escape "\\{"
              - IntegerRange -01..005..2
              - Alternate
                - CharRange 'a'..'d'
                - Empty
        "#]]
        .assert_eq(&tree.to_string());
    }
}
