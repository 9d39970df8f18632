//! Binary indexed tree over a commutative monoid.
//!
//! - Point updates combine a value into one slot.
//! - Prefix folds work for any commutative monoid.
//! - Range folds, point reads/writes and the binary searches need inverse
//!   elements ([`Group`]); asking for them on e.g. [`algebraic::Minimum`] does
//!   not type-check.
//!
//! Every panicking operation has a `try_*` twin returning
//! [`FenwickTreeError`].

mod error;

use std::fmt;
use std::ops::RangeBounds;

use algebraic::{Action, Commutative, Flags, Group, Monoid};
use bit::Bits;

pub use error::FenwickTreeError;
use error::{check_index, expect_ok, resolve_range};

pub struct FenwickTree<A: Action> {
    len: usize,
    bit_ceil: usize,
    // data[i - 1] folds (i - lowbit(i), i] (1-indexed).
    data: Vec<A::Operand>,
}

impl<A> FenwickTree<A>
where
    A: Action,
    A::Operand: Commutative,
{
    /// `n` identity elements.
    pub fn new(n: usize) -> Self {
        Self::from_vec(vec![A::Operand::identity(); n])
    }

    /// Builds the tree over `values` in O(n).
    ///
    /// The action must advertise [`Flags::RANGE_FOLDING`] (or no tags at all):
    ///
    /// ```
    /// use algebraic::actions::RangeSum;
    /// use algebraic::Addition;
    /// use fenwick_tree::FenwickTree;
    ///
    /// let ft = FenwickTree::<RangeSum<i64>>::from_vec(vec![Addition(1), Addition(2)]);
    /// assert_eq!(ft.fold_all().val(), 3);
    /// ```
    ///
    /// ```compile_fail
    /// use algebraic::actions::NullAction;
    /// use algebraic::Addition;
    /// use fenwick_tree::FenwickTree;
    ///
    /// let ft = FenwickTree::<NullAction<i64>>::from_vec(vec![Addition(1), Addition(2)]);
    /// ```
    pub fn from_vec(values: Vec<A::Operand>) -> Self {
        const {
            assert!(
                A::TAGS.is_empty() || A::TAGS.contains(Flags::RANGE_FOLDING),
                "fenwick tree requires an action supporting range folding"
            );
        }
        let len = values.len();
        let mut tree = Self {
            len,
            bit_ceil: len.bit_ceil(),
            data: values,
        };
        tree.build();
        tree
    }

    fn build(&mut self) {
        for i in 1..=self.len {
            let j = i + i.lowest_bit();
            if j <= self.len {
                let child = self.data[i - 1].clone();
                self.data[j - 1] = self.data[j - 1].combine(&child);
            }
        }
    }

    /// Resets every element to `value`.
    pub fn fill(&mut self, value: A::Operand) {
        self.data.clear();
        self.data.resize(self.len, value);
        self.build();
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Combines `x` into the element at `index`.
    #[track_caller]
    pub fn apply(&mut self, index: usize, x: A::Operand) {
        expect_ok(self.try_apply(index, x))
    }

    pub fn try_apply(&mut self, index: usize, x: A::Operand) -> Result<(), FenwickTreeError> {
        check_index(index, self.len)?;
        let mut i = index + 1;
        while i <= self.len {
            self.data[i - 1] = self.data[i - 1].combine(&x);
            i += i.lowest_bit();
        }
        Ok(())
    }

    /// Fold of `[0, end)`.
    #[track_caller]
    pub fn prefix(&self, end: usize) -> A::Operand {
        expect_ok(self.try_prefix(end))
    }

    pub fn try_prefix(&self, end: usize) -> Result<A::Operand, FenwickTreeError> {
        if end > self.len {
            return Err(FenwickTreeError::InvalidRange {
                start: 0,
                end,
                len: self.len,
            });
        }
        Ok(self.prefix_unchecked(end))
    }

    pub fn fold_all(&self) -> A::Operand {
        self.prefix_unchecked(self.len)
    }

    fn prefix_unchecked(&self, mut r: usize) -> A::Operand {
        let mut acc = A::Operand::identity();
        while r > 0 {
            acc = acc.combine(&self.data[r - 1]);
            r -= r.lowest_bit();
        }
        acc
    }
}

impl<A> FenwickTree<A>
where
    A: Action,
    A::Operand: Commutative + Group,
{
    /// Fold of `range`.
    ///
    /// Needs inverse elements. Over [`Minimum`](algebraic::Minimum) only the
    /// prefix fold exists:
    ///
    /// ```
    /// use algebraic::actions::RangeSetRangeMin;
    /// use algebraic::Minimum;
    /// use fenwick_tree::FenwickTree;
    ///
    /// let ft = FenwickTree::<RangeSetRangeMin<i64>>::from_vec(vec![Minimum(4), Minimum(2), Minimum(7)]);
    /// assert_eq!(ft.prefix(1).val(), 4);
    /// assert_eq!(ft.prefix(3).val(), 2);
    /// ```
    ///
    /// ```compile_fail
    /// use algebraic::actions::RangeSetRangeMin;
    /// use algebraic::Minimum;
    /// use fenwick_tree::FenwickTree;
    ///
    /// let ft = FenwickTree::<RangeSetRangeMin<i64>>::from_vec(vec![Minimum(4), Minimum(2), Minimum(7)]);
    /// ft.fold(1..3);
    /// ```
    #[track_caller]
    pub fn fold<R: RangeBounds<usize>>(&self, range: R) -> A::Operand {
        expect_ok(self.try_fold(range))
    }

    pub fn try_fold<R: RangeBounds<usize>>(&self, range: R) -> Result<A::Operand, FenwickTreeError> {
        let (l, r) = resolve_range(range, self.len)?;
        Ok(self.fold_unchecked(l, r))
    }

    // Strips both bounds down to their common binary prefix.
    fn fold_unchecked(&self, mut l: usize, mut r: usize) -> A::Operand {
        let mut acc = A::Operand::identity();
        while l < r {
            acc = acc.combine(&self.data[r - 1]);
            r -= r.lowest_bit();
        }
        while r < l {
            acc = acc.combine(&self.data[l - 1].inverse());
            l -= l.lowest_bit();
        }
        acc
    }

    #[track_caller]
    pub fn get(&self, index: usize) -> A::Operand {
        expect_ok(self.try_get(index))
    }

    pub fn try_get(&self, index: usize) -> Result<A::Operand, FenwickTreeError> {
        check_index(index, self.len)?;
        Ok(self.fold_unchecked(index, index + 1))
    }

    /// Replaces the element at `index` with `x`.
    #[track_caller]
    pub fn set(&mut self, index: usize, x: A::Operand) {
        expect_ok(self.try_set(index, x))
    }

    pub fn try_set(&mut self, index: usize, x: A::Operand) -> Result<(), FenwickTreeError> {
        let current = self.try_get(index)?;
        self.try_apply(index, x.combine(&current.inverse()))
    }

    /// Largest `r >= l` with `pred(fold(l..r))`.
    ///
    /// `pred` must hold for the identity and be monotone: once it fails on
    /// `l..r` it fails for every longer range.
    #[track_caller]
    pub fn max_right<F>(&self, l: usize, pred: F) -> usize
    where
        F: FnMut(&A::Operand) -> bool,
    {
        expect_ok(self.try_max_right(l, pred))
    }

    pub fn try_max_right<F>(&self, l: usize, mut pred: F) -> Result<usize, FenwickTreeError>
    where
        F: FnMut(&A::Operand) -> bool,
    {
        if l > self.len {
            return Err(FenwickTreeError::IndexOutOfBounds {
                index: l,
                len: self.len,
            });
        }
        if !pred(&A::Operand::identity()) {
            return Err(FenwickTreeError::PredicateRejectsIdentity);
        }
        if l == self.len {
            return Ok(self.len);
        }

        // acc == fold(0..p) - fold(0..l); only meaningful once past `l`.
        let mut acc = self.prefix_unchecked(l).inverse();
        let mut p = 0;
        let mut k = self.bit_ceil;
        while k > 0 {
            let next = p + k;
            if next <= self.len {
                let candidate = acc.combine(&self.data[next - 1]);
                if next <= l || pred(&candidate) {
                    acc = candidate;
                    p = next;
                }
            }
            k >>= 1;
        }
        Ok(p)
    }

    /// Smallest `l <= r` with `pred(fold(l..r))`.
    ///
    /// `pred` must hold for the identity and be monotone: once it fails on
    /// `l..r` it fails for every longer range.
    #[track_caller]
    pub fn min_left<F>(&self, r: usize, pred: F) -> usize
    where
        F: FnMut(&A::Operand) -> bool,
    {
        expect_ok(self.try_min_left(r, pred))
    }

    pub fn try_min_left<F>(&self, r: usize, mut pred: F) -> Result<usize, FenwickTreeError>
    where
        F: FnMut(&A::Operand) -> bool,
    {
        if r > self.len {
            return Err(FenwickTreeError::IndexOutOfBounds {
                index: r,
                len: self.len,
            });
        }
        if !pred(&A::Operand::identity()) {
            return Err(FenwickTreeError::PredicateRejectsIdentity);
        }
        if r == 0 {
            return Ok(0);
        }

        // acc == fold(p..r); p only advances while the predicate fails.
        let mut acc = self.prefix_unchecked(r);
        let mut p = 0;
        let mut k = r.bit_ceil();
        while k > 0 {
            let next = p + k;
            if next < r {
                let candidate = acc.combine(&self.data[next - 1].inverse());
                if !pred(&candidate) {
                    acc = candidate;
                    p = next;
                }
            }
            k >>= 1;
        }
        if p == 0 && pred(&acc) { Ok(0) } else { Ok(p + 1) }
    }

    /// Point values, front to back. O(log n) per element.
    pub fn iter(&self) -> impl Iterator<Item = A::Operand> + '_ {
        (0..self.len).map(move |i| self.fold_unchecked(i, i + 1))
    }
}

impl<A> Clone for FenwickTree<A>
where
    A: Action,
{
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            bit_ceil: self.bit_ceil,
            data: self.data.clone(),
        }
    }
}

// Shows the prefix folds; point values need a `Group` operand.
impl<A> fmt::Debug for FenwickTree<A>
where
    A: Action,
    A::Operand: Commutative + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix_folds = (1..=self.len)
            .map(|r| self.prefix_unchecked(r))
            .collect::<Vec<_>>();
        f.debug_struct("FenwickTree")
            .field("len", &self.len)
            .field("prefix_folds", &prefix_folds)
            .finish()
    }
}

impl<A> FromIterator<A::Operand> for FenwickTree<A>
where
    A: Action,
    A::Operand: Commutative,
{
    fn from_iter<I: IntoIterator<Item = A::Operand>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
