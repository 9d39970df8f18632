//! Range-operation / range-fold segment tree driven by an [`Action`].
//!
//! Operators pending on a node are stored unscaled; they are scaled with
//! [`Action::fold`] to the node's width when mapped onto its aggregate.

mod error;

use std::fmt;
use std::ops::RangeBounds;

use algebraic::{Action, Flags, Monoid};
use bit::Bits;

pub use error::LazySegmentTreeError;
use error::{check_index, expect_ok, resolve_range};

pub struct LazySegmentTree<A: Action> {
    len: usize,
    size: usize,
    log: u32,
    data: Vec<A::Operand>,
    lazy: Vec<A::Operator>,
}

impl<A: Action> LazySegmentTree<A> {
    pub fn new(n: usize) -> Self {
        Self::from_vec(vec![A::Operand::identity(); n])
    }

    /// Builds the tree over `values`.
    ///
    /// The action must support both range folds and range operations:
    ///
    /// ```
    /// use algebraic::actions::RangeAddRangeSum;
    /// use algebraic::Addition;
    /// use lazy_segment_tree::LazySegmentTree;
    ///
    /// let mut seg = LazySegmentTree::<RangeAddRangeSum<i64>>::from_vec(vec![Addition(1); 4]);
    /// seg.apply(1..3, Addition(2));
    /// assert_eq!(seg.fold(..).val(), 8);
    /// ```
    ///
    /// ```compile_fail
    /// use algebraic::actions::RangeSum;
    /// use algebraic::Addition;
    /// use lazy_segment_tree::LazySegmentTree;
    ///
    /// let seg = LazySegmentTree::<RangeSum<i64>>::from_vec(vec![Addition(1); 4]);
    /// ```
    pub fn from_vec(values: Vec<A::Operand>) -> Self {
        const {
            assert!(
                A::TAGS.contains(Flags::RANGE_FOLDING.union(Flags::RANGE_OPERATION)),
                "lazy segment tree requires range folding and range operations"
            );
        }
        let len = values.len();
        let size = len.bit_ceil();
        let log = size.trailing_zeros();
        let mut data = vec![A::Operand::identity(); 2 * size];
        for (slot, value) in data[size..].iter_mut().zip(values) {
            *slot = value;
        }
        let mut tree = Self {
            len,
            size,
            log,
            data,
            lazy: vec![A::Operator::identity(); size],
        };
        for k in (1..size).rev() {
            tree.update(k);
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn width(&self, k: usize) -> usize {
        self.size >> k.highest_bit_pos()
    }

    #[inline(always)]
    fn update(&mut self, k: usize) {
        self.data[k] = self.data[2 * k].combine(&self.data[2 * k + 1]);
    }

    fn all_apply(&mut self, k: usize, f: &A::Operator) {
        self.data[k] = A::map(&self.data[k], &A::fold(f, self.width(k)));
        if k < self.size {
            self.lazy[k] = self.lazy[k].combine(f);
        }
    }

    fn push(&mut self, k: usize) {
        let f = std::mem::replace(&mut self.lazy[k], A::Operator::identity());
        self.all_apply(2 * k, &f);
        self.all_apply(2 * k + 1, &f);
    }

    fn push_path(&mut self, leaf: usize) {
        for i in (1..=self.log).rev() {
            self.push(leaf >> i);
        }
    }

    fn update_path(&mut self, leaf: usize) {
        for i in 1..=self.log {
            self.update(leaf >> i);
        }
    }

    #[track_caller]
    pub fn get(&mut self, index: usize) -> A::Operand {
        expect_ok(self.try_get(index))
    }

    pub fn try_get(&mut self, index: usize) -> Result<A::Operand, LazySegmentTreeError> {
        check_index(index, self.len)?;
        let p = index + self.size;
        self.push_path(p);
        Ok(self.data[p].clone())
    }

    #[track_caller]
    pub fn set(&mut self, index: usize, x: A::Operand) {
        expect_ok(self.try_set(index, x))
    }

    pub fn try_set(&mut self, index: usize, x: A::Operand) -> Result<(), LazySegmentTreeError> {
        check_index(index, self.len)?;
        let p = index + self.size;
        self.push_path(p);
        self.data[p] = x;
        self.update_path(p);
        Ok(())
    }

    #[track_caller]
    pub fn fold<R: RangeBounds<usize>>(&mut self, range: R) -> A::Operand {
        expect_ok(self.try_fold(range))
    }

    pub fn try_fold<R: RangeBounds<usize>>(
        &mut self,
        range: R,
    ) -> Result<A::Operand, LazySegmentTreeError> {
        let (l, r) = resolve_range(range, self.len)?;
        if l == r {
            return Ok(A::Operand::identity());
        }

        let mut l = l + self.size;
        let mut r = r + self.size;
        for i in (1..=self.log).rev() {
            if ((l >> i) << i) != l {
                self.push(l >> i);
            }
            if ((r >> i) << i) != r {
                self.push((r - 1) >> i);
            }
        }

        let mut left = A::Operand::identity();
        let mut right = A::Operand::identity();
        while l < r {
            if (l & 1) == 1 {
                left = left.combine(&self.data[l]);
                l += 1;
            }
            if (r & 1) == 1 {
                r -= 1;
                right = self.data[r].combine(&right);
            }
            l >>= 1;
            r >>= 1;
        }
        Ok(left.combine(&right))
    }

    pub fn fold_all(&self) -> A::Operand {
        self.data[1].clone()
    }

    /// Applies `f` to the element at `index`.
    #[track_caller]
    pub fn apply_point(&mut self, index: usize, f: A::Operator) {
        expect_ok(self.try_apply_point(index, f))
    }

    pub fn try_apply_point(
        &mut self,
        index: usize,
        f: A::Operator,
    ) -> Result<(), LazySegmentTreeError> {
        check_index(index, self.len)?;
        let p = index + self.size;
        self.push_path(p);
        self.data[p] = A::map(&self.data[p], &A::fold(&f, 1));
        self.update_path(p);
        Ok(())
    }

    /// Applies `f` to every element of `range`.
    #[track_caller]
    pub fn apply<R: RangeBounds<usize>>(&mut self, range: R, f: A::Operator) {
        expect_ok(self.try_apply(range, f))
    }

    pub fn try_apply<R: RangeBounds<usize>>(
        &mut self,
        range: R,
        f: A::Operator,
    ) -> Result<(), LazySegmentTreeError> {
        let (l, r) = resolve_range(range, self.len)?;
        if l == r {
            return Ok(());
        }

        let l = l + self.size;
        let r = r + self.size;
        for i in (1..=self.log).rev() {
            if ((l >> i) << i) != l {
                self.push(l >> i);
            }
            if ((r >> i) << i) != r {
                self.push((r - 1) >> i);
            }
        }

        {
            let (mut l, mut r) = (l, r);
            while l < r {
                if (l & 1) == 1 {
                    self.all_apply(l, &f);
                    l += 1;
                }
                if (r & 1) == 1 {
                    r -= 1;
                    self.all_apply(r, &f);
                }
                l >>= 1;
                r >>= 1;
            }
        }

        for i in 1..=self.log {
            if ((l >> i) << i) != l {
                self.update(l >> i);
            }
            if ((r >> i) << i) != r {
                self.update((r - 1) >> i);
            }
        }
        Ok(())
    }

    /// Largest `r >= l` with `pred(fold(l..r))`, for a monotone `pred` that
    /// holds on the identity.
    #[track_caller]
    pub fn max_right<F>(&mut self, l: usize, pred: F) -> usize
    where
        F: FnMut(&A::Operand) -> bool,
    {
        expect_ok(self.try_max_right(l, pred))
    }

    pub fn try_max_right<F>(&mut self, l: usize, mut pred: F) -> Result<usize, LazySegmentTreeError>
    where
        F: FnMut(&A::Operand) -> bool,
    {
        if l > self.len {
            return Err(LazySegmentTreeError::IndexOutOfBounds {
                index: l,
                len: self.len,
            });
        }
        if !pred(&A::Operand::identity()) {
            return Err(LazySegmentTreeError::PredicateRejectsIdentity);
        }
        if l == self.len {
            return Ok(self.len);
        }

        let mut l = l + self.size;
        self.push_path(l);
        let mut acc = A::Operand::identity();
        loop {
            while l % 2 == 0 {
                l >>= 1;
            }
            let candidate = acc.combine(&self.data[l]);
            if !pred(&candidate) {
                while l < self.size {
                    self.push(l);
                    l *= 2;
                    let candidate = acc.combine(&self.data[l]);
                    if pred(&candidate) {
                        acc = candidate;
                        l += 1;
                    }
                }
                return Ok(l - self.size);
            }
            acc = candidate;
            l += 1;
            if l.lowest_bit() == l {
                return Ok(self.len);
            }
        }
    }

    /// Smallest `l <= r` with `pred(fold(l..r))`, for a monotone `pred` that
    /// holds on the identity.
    #[track_caller]
    pub fn min_left<F>(&mut self, r: usize, pred: F) -> usize
    where
        F: FnMut(&A::Operand) -> bool,
    {
        expect_ok(self.try_min_left(r, pred))
    }

    pub fn try_min_left<F>(&mut self, r: usize, mut pred: F) -> Result<usize, LazySegmentTreeError>
    where
        F: FnMut(&A::Operand) -> bool,
    {
        if r > self.len {
            return Err(LazySegmentTreeError::IndexOutOfBounds {
                index: r,
                len: self.len,
            });
        }
        if !pred(&A::Operand::identity()) {
            return Err(LazySegmentTreeError::PredicateRejectsIdentity);
        }
        if r == 0 {
            return Ok(0);
        }

        let mut r = r + self.size;
        self.push_path(r - 1);
        let mut acc = A::Operand::identity();
        loop {
            r -= 1;
            while r > 1 && r % 2 == 1 {
                r >>= 1;
            }
            let candidate = self.data[r].combine(&acc);
            if !pred(&candidate) {
                while r < self.size {
                    self.push(r);
                    r = 2 * r + 1;
                    let candidate = self.data[r].combine(&acc);
                    if pred(&candidate) {
                        acc = candidate;
                        r -= 1;
                    }
                }
                return Ok(r + 1 - self.size);
            }
            acc = candidate;
            if r.lowest_bit() == r {
                return Ok(0);
            }
        }
    }

    /// Current elements, front to back.
    pub fn to_vec(&mut self) -> Vec<A::Operand> {
        for k in 1..self.size {
            self.push(k);
        }
        self.data[self.size..self.size + self.len].to_vec()
    }
}

impl<A> Clone for LazySegmentTree<A>
where
    A: Action,
{
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            size: self.size,
            log: self.log,
            data: self.data.clone(),
            lazy: self.lazy.clone(),
        }
    }
}

impl<A> fmt::Debug for LazySegmentTree<A>
where
    A: Action,
    A::Operand: fmt::Debug,
    A::Operator: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySegmentTree")
            .field("len", &self.len)
            .field("data", &self.data)
            .field("lazy", &self.lazy)
            .finish()
    }
}

impl<A: Action> FromIterator<A::Operand> for LazySegmentTree<A> {
    fn from_iter<I: IntoIterator<Item = A::Operand>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebraic::actions::{
        RangeAddRangeMin, RangeAddRangeSum, RangeAffineRangeSum, RangeBitXor, RangeSetRangeMin,
        RangeSetRangeSum,
    };
    use algebraic::{Addition, Affine, Assignment, BitXor, Minimum};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_range(rng: &mut StdRng, n: usize) -> (usize, usize) {
        let l = rng.random_range(0..=n);
        let r = rng.random_range(l..=n);
        (l, r)
    }

    #[test]
    fn affine_sum_matches_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x1A2_A5E6);
        for n in 0..24 {
            let mut values = (0..n).map(|_| rng.random_range(-9_i64..=9)).collect::<Vec<_>>();
            let mut seg = values
                .iter()
                .copied()
                .map(Addition)
                .collect::<LazySegmentTree<RangeAffineRangeSum<i64>>>();
            for _ in 0..200 {
                let (l, r) = random_range(&mut rng, n);
                match rng.random_range(0..3) {
                    0 => {
                        let f = Affine::new(rng.random_range(-2_i64..=2), rng.random_range(-9..=9));
                        for v in &mut values[l..r] {
                            *v = f.eval(*v);
                        }
                        seg.apply(l..r, f);
                    }
                    1 if n > 0 => {
                        let i = rng.random_range(0..n);
                        let x = rng.random_range(-9_i64..=9);
                        values[i] = x;
                        seg.set(i, Addition(x));
                    }
                    _ => {}
                }
                assert_eq!(seg.fold(l..r).val(), values[l..r].iter().sum::<i64>());
                assert_eq!(seg.fold_all().val(), values.iter().sum::<i64>());
            }
            assert_eq!(seg.to_vec().iter().map(|x| x.val()).collect::<Vec<_>>(), values);
        }
    }

    #[test]
    fn set_min_matches_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x5E7_0313);
        let n = 37;
        let mut values = (0..n).map(|_| rng.random_range(0_i64..=100)).collect::<Vec<_>>();
        let mut seg = values
            .iter()
            .copied()
            .map(Minimum)
            .collect::<LazySegmentTree<RangeSetRangeMin<i64>>>();
        for _ in 0..500 {
            let (l, r) = random_range(&mut rng, n);
            if rng.random_bool(0.5) {
                let x = rng.random_range(0_i64..=100);
                values[l..r].fill(x);
                seg.apply(l..r, Assignment::new(x));
            } else {
                seg.apply(l..r, Assignment::default());
            }
            let (l, r) = random_range(&mut rng, n);
            let expected = values[l..r].iter().copied().min().unwrap_or(i64::MAX);
            assert_eq!(seg.fold(l..r).val(), expected);
        }
    }

    #[test]
    fn other_actions_match_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x07E2_AC75);
        let n = 29;
        let mut sums = vec![0_i64; n];
        let mut mins = vec![0_i64; n];
        let mut xors = vec![0_u32; n];
        let mut assigned = vec![0_i64; n];
        let mut add_sum = LazySegmentTree::<RangeAddRangeSum<i64>>::new(n);
        let mut add_min = mins
            .iter()
            .copied()
            .map(Minimum)
            .collect::<LazySegmentTree<RangeAddRangeMin<i64>>>();
        let mut xor = LazySegmentTree::<RangeBitXor<u32>>::new(n);
        let mut set_sum = LazySegmentTree::<RangeSetRangeSum<i64>>::new(n);

        for _ in 0..400 {
            let (l, r) = random_range(&mut rng, n);
            let x = rng.random_range(-20_i64..=20);
            let bits = rng.random::<u32>();
            sums[l..r].iter_mut().for_each(|v| *v += x);
            mins[l..r].iter_mut().for_each(|v| *v += x);
            xors[l..r].iter_mut().for_each(|v| *v ^= bits);
            assigned[l..r].fill(x);
            add_sum.apply(l..r, Addition(x));
            add_min.apply(l..r, Addition(x));
            xor.apply(l..r, BitXor(bits));
            set_sum.apply(l..r, Assignment::new(x));

            let (l, r) = random_range(&mut rng, n);
            assert_eq!(add_sum.fold(l..r).val(), sums[l..r].iter().sum::<i64>());
            assert_eq!(
                add_min.fold(l..r).val(),
                mins[l..r].iter().copied().min().unwrap_or(i64::MAX)
            );
            assert_eq!(xor.fold(l..r).val(), xors[l..r].iter().fold(0, |a, b| a ^ b));
            assert_eq!(set_sum.fold(l..r).val(), assigned[l..r].iter().sum::<i64>());

            let i = rng.random_range(0..n);
            assert_eq!(add_sum.get(i).val(), sums[i]);
            add_sum.apply_point(i, Addition(1));
            sums[i] += 1;
        }
    }

    #[test]
    fn add_min_on_max_valued_elements() {
        let mut seg = [i64::MAX, 5, i64::MAX]
            .into_iter()
            .map(Minimum)
            .collect::<LazySegmentTree<RangeAddRangeMin<i64>>>();
        seg.apply(0..1, Addition(-10));
        assert_eq!(seg.fold(0..1).val(), i64::MAX - 10);
        assert_eq!(seg.fold(..).val(), 5);
        seg.apply(.., Addition(-10));
        assert_eq!(seg.get(2).val(), i64::MAX - 10);
        assert_eq!(seg.fold(1..).val(), -5);
        assert_eq!(seg.fold(0..1).val(), i64::MAX - 20);
        assert_eq!(seg.fold(3..3).val(), i64::MAX);
    }

    #[test]
    fn binary_searches_match_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0xB15_EA2C);
        for n in 0..24 {
            let mut values = (0..n).map(|_| rng.random_range(0_i64..=6)).collect::<Vec<_>>();
            let mut seg = values
                .iter()
                .copied()
                .map(Addition)
                .collect::<LazySegmentTree<RangeAddRangeSum<i64>>>();
            for _ in 0..20 {
                let (l, r) = random_range(&mut rng, n);
                let x = rng.random_range(0_i64..=3);
                values[l..r].iter_mut().for_each(|v| *v += x);
                seg.apply(l..r, Addition(x));

                let bound = rng.random_range(0_i64..=40);
                for start in 0..=n {
                    let mut expected = start;
                    while expected < n && values[start..=expected].iter().sum::<i64>() <= bound {
                        expected += 1;
                    }
                    assert_eq!(seg.max_right(start, |s| s.val() <= bound), expected);
                }
                for end in 0..=n {
                    let mut expected = end;
                    while expected > 0 && values[expected - 1..end].iter().sum::<i64>() <= bound {
                        expected -= 1;
                    }
                    assert_eq!(seg.min_left(end, |s| s.val() <= bound), expected);
                }
            }
        }
    }

    #[test]
    fn errors_name_the_failed_precondition() {
        let mut seg = LazySegmentTree::<RangeAddRangeSum<i64>>::new(3);
        assert_eq!(
            seg.try_apply(2..5, Addition(1)),
            Err(LazySegmentTreeError::InvalidRange { start: 2, end: 5, len: 3 })
        );
        assert_eq!(
            seg.try_get(3),
            Err(LazySegmentTreeError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            seg.try_max_right(0, |_| false),
            Err(LazySegmentTreeError::PredicateRejectsIdentity)
        );
    }
}
