//! Binary search over sorted slices.
//!
//! Two interchangeable implementations search the inclusive index range
//! `low..=high` of a slice sorted in non-decreasing order:
//!
//! - [`binary_search_recursive`]: halves the range by recursion
//! - [`binary_search_iterative`]: halves the range in a loop
//!
//! Both return `Ok(Some(index))` when the target is found, `Ok(None)` when it
//! is absent (including an empty range, `low > high`), and an error when
//! `high` is past the end of the slice. The `_by` variants take a comparator
//! in the style of [`slice::binary_search_by`].
//!
//! With duplicate elements any matching index may be returned.

mod error;
mod iterative;
mod recursive;

pub use error::RangeError;
pub use iterative::{binary_search_iterative, binary_search_iterative_by};
pub use recursive::{binary_search_recursive, binary_search_recursive_by};

/// Searches the whole of `data` for `target`.
///
/// Returns the index of a matching element, or `None` if there is none.
#[must_use]
pub fn binary_search<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    debug_assert!(data.is_sorted(), "binary search requires sorted data");
    let high = data.len().checked_sub(1)?;
    iterative::search(data, 0, high, |probe| probe.cmp(target))
}

/// Validates an inclusive `low..=high` range against a slice of length `len`.
///
/// Returns `Ok(false)` for an empty range, which needs no search.
fn check_range(len: usize, low: usize, high: usize) -> Result<bool, RangeError> {
    if low > high {
        return Ok(false);
    }
    if high >= len {
        return Err(RangeError::OutOfBounds { high, len });
    }
    Ok(true)
}

/// Midpoint of `low..=high` without overflow.
fn midpoint(low: usize, high: usize) -> usize {
    low + (high - low) / 2
}
