use std::ops::{Index, IndexMut};

use braces_syntax::stack::ensure_sufficient_stack;
use braces_syntax::{Builder, NodeId, RangeData, SyntaxKind, Tree};
use la_arena::{Arena, Idx};
use smallvec::SmallVec;

pub(crate) type PendingId = Idx<Pending>;

/// Working node owned by the parser stack.
///
/// Unlike a finished `Node` it is mutable: literals grow in place, pseudo
/// kinds get demoted to `LITERAL` and lists are flattened.
#[derive(Debug)]
pub(crate) struct Pending {
    pub(crate) kind: SyntaxKind,
    pub(crate) children: Vec<PendingId>,
    pub(crate) value: SmallVec<[u8; 2]>,
    pub(crate) range: RangeData,
}

/// Arena of working nodes with a free list, reused across parses.
#[derive(Debug, Default)]
pub(crate) struct Pool {
    nodes: Arena<Pending>,
    free: Vec<PendingId>,
}

impl Pool {
    pub(crate) fn alloc(&mut self, kind: SyntaxKind) -> PendingId {
        let Some(id) = self.free.pop() else {
            return self.nodes.alloc(Pending {
                kind,
                children: Vec::new(),
                value: SmallVec::new(),
                range: RangeData::default(),
            });
        };

        let node = &mut self.nodes[id];
        node.kind = kind;
        node.children.clear();
        node.value.clear();
        node.range = RangeData::default();
        id
    }

    /// Returns `id` to the free list. Its children are not released.
    pub(crate) fn release(&mut self, id: PendingId) {
        self.free.push(id);
    }

    /// Makes every slot available again.
    pub(crate) fn recycle(&mut self) {
        self.free.clear();
        self.free.extend(self.nodes.iter().map(|(id, _)| id).rev());
    }

    /// Copies the subtree under `root` into a finished tree and recycles
    /// every working node.
    pub(crate) fn finish(&mut self, root: PendingId) -> Tree {
        let mut builder = Builder::new();
        let root = self.export(&mut builder, root);
        self.recycle();
        builder.finish(root)
    }

    fn export(&self, builder: &mut Builder, id: PendingId) -> NodeId {
        ensure_sufficient_stack(|| {
            let node = &self.nodes[id];
            match node.kind {
                kind if kind.is_list() => {
                    let children =
                        node.children.iter().map(|&child| self.export(builder, child)).collect();
                    builder.node(kind, children)
                }
                kind if kind.is_range() => builder.range(kind, node.range),
                kind => builder.leaf(kind, &node.value),
            }
        })
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.len()
    }
}

impl Index<PendingId> for Pool {
    type Output = Pending;

    fn index(&self, index: PendingId) -> &Self::Output {
        &self.nodes[index]
    }
}

impl IndexMut<PendingId> for Pool {
    fn index_mut(&mut self, index: PendingId) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}
