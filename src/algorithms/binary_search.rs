//! [Binary Search]: A search algorithm that finds the position of a target
//! value within a sorted array.
//!
//! [Binary Search]: https://en.wikipedia.org/wiki/Binary_search

use core::cmp::Ordering;

/// Returns the index of the `target` within the sorted array, or [`None`] if
/// it was not found.
///
/// The array must be sorted in ascending order; this is not checked. When
/// `target` occurs more than once, any one of its indices may be returned.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time. Binary search uses a divide-and-conquer approach
/// and runs in logarithmic time in the worst case, making *O*(*log n*)
/// comparisons, where `n` is the number of elements in the array.
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// let arr = [4, 10, 12, 13, 20, 50, 66];
///
/// assert_eq!(binary_search(&arr, &4), Some(0));
/// assert_eq!(binary_search(&arr, &40), None);
/// ```
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    None
}

/// Returns the index of the `target` within the sorted array, or [`None`] if
/// it was not found, narrowing the search window recursively.
///
/// Visits the same midpoints as [`binary_search`], so both functions return
/// the same index for the same input, even when `target` is duplicated.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time, and *O*(*log n*) stack space for the recursion.
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// let arr = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
///
/// assert_eq!(binary_search_recursive(&arr, &7), Some(6));
/// assert_eq!(binary_search_recursive(&arr, &11), None);
/// ```
pub fn binary_search_recursive<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_window(arr, target, 0, arr.len())
}

/// Searches the half-open window `lo..hi` of `arr`.
fn search_window<T: Ord>(arr: &[T], target: &T, lo: usize, hi: usize) -> Option<usize> {
    if lo >= hi {
        return None;
    }

    let mid = lo + ((hi - lo) >> 1);

    match arr[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_window(arr, target, mid + 1, hi),
        Ordering::Greater => search_window(arr, target, lo, mid),
    }
}
