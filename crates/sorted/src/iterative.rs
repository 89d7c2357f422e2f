use std::cmp::Ordering;

use crate::{RangeError, check_range, midpoint};

/// Iteratively searches `data[low..=high]` for `target`.
///
/// # Errors
///
/// Returns [`RangeError::OutOfBounds`] if `high` is past the end of `data`
/// and the range is non-empty.
pub fn binary_search_iterative<T: Ord>(
    data: &[T],
    target: &T,
    low: usize,
    high: usize,
) -> Result<Option<usize>, RangeError> {
    debug_assert!(data.is_sorted(), "binary search requires sorted data");
    binary_search_iterative_by(data, low, high, |probe| probe.cmp(target))
}

/// Iteratively searches `data[low..=high]` with a comparator.
///
/// `compare` orders a probed element against the target: `Less` if the
/// element sorts before it, `Greater` if after.
///
/// # Errors
///
/// Returns [`RangeError::OutOfBounds`] if `high` is past the end of `data`
/// and the range is non-empty.
pub fn binary_search_iterative_by<T, F>(
    data: &[T],
    low: usize,
    high: usize,
    compare: F,
) -> Result<Option<usize>, RangeError>
where
    F: FnMut(&T) -> Ordering,
{
    if !check_range(data.len(), low, high)? {
        return Ok(None);
    }
    let found = search(data, low, high, compare);
    log::trace!("iterative search in {low}..={high}: {found:?}");
    Ok(found)
}

/// Searches a range already known to be within `data`.
pub(crate) fn search<T, F>(data: &[T], mut low: usize, mut high: usize, mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    // Inclusive bounds: a single remaining element is still a candidate.
    while low <= high {
        let mid = midpoint(low, high);
        match compare(&data[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Greater => high = mid.checked_sub(1)?,
            Ordering::Less => low = mid + 1,
        }
    }
    None
}
