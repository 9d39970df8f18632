/// A type with an associative `combine` and an identity element.
///
/// Implementations must satisfy, for all `a`, `b`, `c`:
///
/// - `a.combine(&b).combine(&c) == a.combine(&b.combine(&c))`
/// - `Self::identity().combine(&a) == a == a.combine(&Self::identity())`
pub trait Monoid: Clone {
    fn identity() -> Self;
    fn combine(&self, rhs: &Self) -> Self;
}

/// `a.combine(&b) == b.combine(&a)`.
pub trait Commutative: Monoid {}

/// `a.combine(&a) == a`.
pub trait Idempotent: Monoid {}

/// A monoid with inverse elements: `a.combine(&a.inverse()) == identity()`.
///
/// Range folding by prefix difference needs this.
pub trait Group: Monoid {
    fn inverse(&self) -> Self;
}
