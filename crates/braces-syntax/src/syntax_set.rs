use crate::SyntaxKind;

/// Compact `const` set of [`SyntaxKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntaxSet {
    bits: u32,
}

impl SyntaxSet {
    pub const EMPTY: Self = Self { bits: 0 };

    const fn from_kind(kind: SyntaxKind) -> Self {
        let bit = kind as u32;

        debug_assert!(bit < u32::BITS, "Kind out of range. Widen the bitset.");

        Self { bits: 1 << bit }
    }

    pub const fn union(self, other: &Self) -> Self {
        Self { bits: self.bits | other.bits }
    }

    pub const fn new<const N: usize>(kinds: [SyntaxKind; N]) -> Self {
        let mut set = Self::EMPTY;

        let mut i = 0;
        while i < kinds.len() {
            set = set.union(&Self::from_kind(kinds[i]));
            i += 1;
        }

        set
    }

    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        self.bits & Self::from_kind(kind).bits != 0
    }
}
