//! Range and index checks shared by the sequence structures.
//!
//! Each structure wraps these in its own error type.

use std::fmt::Display;
use std::ops::{Bound, RangeBounds};

/// Resolves `range` against a sequence of length `len` into `start..end`.
///
/// On failure the resolved (invalid) bounds are returned so the caller can
/// report them.
pub fn resolve<R: RangeBounds<usize>>(range: R, len: usize) -> Result<(usize, usize), (usize, usize)> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    if start <= end && end <= len {
        Ok((start, end))
    } else {
        Err((start, end))
    }
}

#[inline]
pub fn in_bounds(index: usize, len: usize) -> bool {
    index < len
}

/// Unwraps `result`, panicking with the error's `Display` at the caller.
#[track_caller]
pub fn expect_ok<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{expect_ok, in_bounds, resolve};

    #[test]
    fn resolves_every_bound_kind() {
        assert_eq!(resolve(.., 5), Ok((0, 5)));
        assert_eq!(resolve(1..3, 5), Ok((1, 3)));
        assert_eq!(resolve(1..=3, 5), Ok((1, 4)));
        assert_eq!(resolve(2.., 5), Ok((2, 5)));
        assert_eq!(resolve(..=4, 5), Ok((0, 5)));
        assert_eq!(resolve(5..5, 5), Ok((5, 5)));
        assert_eq!(
            resolve((std::ops::Bound::Excluded(1), std::ops::Bound::Unbounded), 5),
            Ok((2, 5))
        );
    }

    #[test]
    fn reports_invalid_bounds() {
        assert_eq!(resolve(0..6, 5), Err((0, 6)));
        assert_eq!(resolve(..=5, 5), Err((0, 6)));
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = resolve(3..2, 5);
        assert_eq!(reversed, Err((3, 2)));
        assert_eq!(resolve(..=usize::MAX, 5), Err((0, usize::MAX)));
    }

    #[test]
    fn index_checks() {
        assert!(in_bounds(0, 1));
        assert!(!in_bounds(1, 1));
        assert!(!in_bounds(0, 0));
    }

    #[test]
    #[should_panic(expected = "bad input")]
    fn expect_ok_panics_with_display() {
        expect_ok::<(), _>(Err("bad input"));
    }
}
