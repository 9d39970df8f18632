use crate::monoid::Monoid;

bitflags::bitflags! {
    /// Capabilities an [`Action`] advertises to the structures consuming it.
    pub struct Flags: u8 {
        /// Fold queries over a point-update structure.
        const RANGE_FOLDING = 0b001;
        /// Operators applied across a contiguous range; needs [`Action::fold`].
        const RANGE_OPERATION = 0b010;
        /// Marker for implicit-treap style sequences.
        const IMPLICIT_TREAP = 0b100;
    }
}

/// An operator monoid acting on an operand monoid.
///
/// The following are caller contracts and are not checked:
///
/// - `map(x, identity) == x`
/// - `map(map(x, a), b) == map(x, a.combine(b))`
/// - `map(x.combine(y), f)` agrees with mapping both sides once `f` has
///   been scaled with [`Action::fold`] to the number of elements folded.
pub trait Action {
    type Operand: Monoid;
    type Operator: Monoid;

    const TAGS: Flags;

    fn map(x: &Self::Operand, f: &Self::Operator) -> Self::Operand;

    /// Scale `f` so that it acts on an aggregate of `len` elements.
    #[inline(always)]
    fn fold(f: &Self::Operator, len: usize) -> Self::Operator {
        let _ = len;
        f.clone()
    }
}
