use std::ops::RangeBounds;

pub(crate) use bounds::expect_ok;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LazySegmentTreeError {
    #[error("index {index} out of bounds for segment tree of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("range {start}..{end} invalid for segment tree of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("search predicate must hold for the identity element")]
    PredicateRejectsIdentity,
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<(), LazySegmentTreeError> {
    if bounds::in_bounds(index, len) {
        Ok(())
    } else {
        Err(LazySegmentTreeError::IndexOutOfBounds { index, len })
    }
}

pub(crate) fn resolve_range<R: RangeBounds<usize>>(
    range: R,
    len: usize,
) -> Result<(usize, usize), LazySegmentTreeError> {
    bounds::resolve(range, len)
        .map_err(|(start, end)| LazySegmentTreeError::InvalidRange { start, end, len })
}
