//! Ready-made actions.

use std::marker::PhantomData;

use crate::action::{Action, Flags};
use crate::integer::Integer;
use crate::monoid::Monoid;
use crate::structures::{Addition, Affine, Assignment, BitXor, Minimum, Null};

/// Point add, range sum.
pub struct RangeSum<T>(PhantomData<T>);

impl<T: Integer> Action for RangeSum<T> {
    type Operand = Addition<T>;
    type Operator = Null;

    const TAGS: Flags = Flags::RANGE_FOLDING;

    #[inline(always)]
    fn map(x: &Self::Operand, _f: &Self::Operator) -> Self::Operand {
        *x
    }
}

/// Xor over a range, updated by xor.
pub struct RangeBitXor<T>(PhantomData<T>);

impl<T: Integer> Action for RangeBitXor<T> {
    type Operand = BitXor<T>;
    type Operator = BitXor<T>;

    const TAGS: Flags = Flags::RANGE_FOLDING.union(Flags::RANGE_OPERATION);

    #[inline(always)]
    fn map(x: &Self::Operand, f: &Self::Operator) -> Self::Operand {
        x.combine(f)
    }

    #[inline(always)]
    fn fold(f: &Self::Operator, len: usize) -> Self::Operator {
        if len & 1 == 1 { *f } else { BitXor::identity() }
    }
}

pub struct RangeAddRangeSum<T>(PhantomData<T>);

impl<T: Integer> Action for RangeAddRangeSum<T> {
    type Operand = Addition<T>;
    type Operator = Addition<T>;

    const TAGS: Flags = Flags::RANGE_FOLDING.union(Flags::RANGE_OPERATION);

    #[inline(always)]
    fn map(x: &Self::Operand, f: &Self::Operator) -> Self::Operand {
        x.combine(f)
    }

    #[inline(always)]
    fn fold(f: &Self::Operator, len: usize) -> Self::Operator {
        Addition(f.0.wrapping_mul(T::from_usize(len)))
    }
}

pub struct RangeSetRangeMin<T>(PhantomData<T>);

impl<T: Integer> Action for RangeSetRangeMin<T> {
    type Operand = Minimum<T>;
    type Operator = Assignment<T>;

    const TAGS: Flags = Flags::RANGE_FOLDING.union(Flags::RANGE_OPERATION);

    #[inline(always)]
    fn map(x: &Self::Operand, f: &Self::Operator) -> Self::Operand {
        Minimum(f.value_or(x.0))
    }
}

pub struct RangeSetRangeSum<T>(PhantomData<T>);

impl<T: Integer> Action for RangeSetRangeSum<T> {
    type Operand = Addition<T>;
    type Operator = Assignment<T>;

    const TAGS: Flags = Flags::RANGE_FOLDING.union(Flags::RANGE_OPERATION);

    #[inline(always)]
    fn map(x: &Self::Operand, f: &Self::Operator) -> Self::Operand {
        Addition(f.value_or(x.0))
    }

    #[inline(always)]
    fn fold(f: &Self::Operator, len: usize) -> Self::Operator {
        Assignment(f.0.map(|v| v.wrapping_mul(T::from_usize(len))))
    }
}

/// Range add, range min.
pub struct RangeAddRangeMin<T>(PhantomData<T>);

impl<T: Integer> Action for RangeAddRangeMin<T> {
    type Operand = Minimum<T>;
    type Operator = Addition<T>;

    const TAGS: Flags = Flags::RANGE_FOLDING.union(Flags::RANGE_OPERATION);

    #[inline(always)]
    fn map(x: &Self::Operand, f: &Self::Operator) -> Self::Operand {
        Minimum(x.0.wrapping_add(f.0))
    }
}

/// `x -> a * x + b` over a range, range sum.
pub struct RangeAffineRangeSum<T>(PhantomData<T>);

impl<T: Integer> Action for RangeAffineRangeSum<T> {
    type Operand = Addition<T>;
    type Operator = Affine<T>;

    const TAGS: Flags = Flags::RANGE_FOLDING.union(Flags::RANGE_OPERATION);

    #[inline(always)]
    fn map(x: &Self::Operand, f: &Self::Operator) -> Self::Operand {
        Addition(f.eval(x.0))
    }

    #[inline(always)]
    fn fold(f: &Self::Operator, len: usize) -> Self::Operator {
        Affine {
            a: f.a,
            b: f.b.wrapping_mul(T::from_usize(len)),
        }
    }
}

/// Sequence marker action: no folding, no updates.
pub struct NullAction<T>(PhantomData<T>);

impl<T: Integer> Action for NullAction<T> {
    type Operand = Addition<T>;
    type Operator = Null;

    const TAGS: Flags = Flags::IMPLICIT_TREAP;

    #[inline(always)]
    fn map(x: &Self::Operand, _f: &Self::Operator) -> Self::Operand {
        *x
    }
}
