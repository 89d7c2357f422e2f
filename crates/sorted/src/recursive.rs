use std::cmp::Ordering;

use crate::{RangeError, check_range, midpoint};

/// Recursively searches `data[low..=high]` for `target`.
///
/// # Errors
///
/// Returns [`RangeError::OutOfBounds`] if `high` is past the end of `data`
/// and the range is non-empty.
pub fn binary_search_recursive<T: Ord>(
    data: &[T],
    target: &T,
    low: usize,
    high: usize,
) -> Result<Option<usize>, RangeError> {
    debug_assert!(data.is_sorted(), "binary search requires sorted data");
    binary_search_recursive_by(data, low, high, |probe| probe.cmp(target))
}

/// Recursively searches `data[low..=high]` with a comparator.
///
/// `compare` orders a probed element against the target: `Less` if the
/// element sorts before it, `Greater` if after.
///
/// # Errors
///
/// Returns [`RangeError::OutOfBounds`] if `high` is past the end of `data`
/// and the range is non-empty.
pub fn binary_search_recursive_by<T, F>(
    data: &[T],
    low: usize,
    high: usize,
    mut compare: F,
) -> Result<Option<usize>, RangeError>
where
    F: FnMut(&T) -> Ordering,
{
    if !check_range(data.len(), low, high)? {
        return Ok(None);
    }
    let found = search(data, low, high, &mut compare);
    log::trace!("recursive search in {low}..={high}: {found:?}");
    Ok(found)
}

fn search<T, F>(data: &[T], low: usize, high: usize, compare: &mut F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    if low > high {
        return None;
    }

    let mid = midpoint(low, high);
    match compare(&data[mid]) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => search(data, low, mid.checked_sub(1)?, compare),
        Ordering::Less => search(data, mid + 1, high, compare),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    const DATA: [i32; 10] = [1, 4, 5, 7, 12, 16, 17, 25, 37, 42];

    #[test]
    fn finds_every_element() {
        for (index, value) in DATA.iter().enumerate() {
            assert_eq!(
                binary_search_recursive(&DATA, value, 0, DATA.len() - 1),
                Ok(Some(index))
            );
        }
    }

    #[test]
    fn reports_missing_target() {
        assert_eq!(binary_search_recursive(&DATA, &125, 0, 9), Ok(None));
        assert_eq!(binary_search_recursive(&DATA, &0, 0, 9), Ok(None));
        assert_eq!(binary_search_recursive(&DATA, &6, 0, 9), Ok(None));
    }

    #[test]
    fn respects_sub_range() {
        assert_eq!(binary_search_recursive(&DATA, &17, 0, 5), Ok(None));
        assert_eq!(binary_search_recursive(&DATA, &17, 6, 6), Ok(Some(6)));
        assert_eq!(binary_search_recursive(&DATA, &17, 7, 6), Ok(None));
    }

    #[test]
    fn rejects_out_of_bounds_range() {
        assert_eq!(
            binary_search_recursive(&DATA, &17, 0, 10),
            Err(RangeError::OutOfBounds { high: 10, len: 10 })
        );
    }

    #[test]
    fn comparator_searches_by_key() {
        let people = [("ada", 36), ("alan", 41), ("grace", 85)];

        let found = binary_search_recursive_by(&people, 0, 2, |(_, age)| age.cmp(&41));

        assert_eq!(found, Ok(Some(1)));
    }
}
