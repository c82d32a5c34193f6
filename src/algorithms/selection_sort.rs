//! [Selection Sort]: An in-place comparison sort that repeatedly moves the
//! smallest remaining element to the front of the unsorted region.
//!
//! [Selection Sort]: https://en.wikipedia.org/wiki/Selection_sort

/// Sorts the provided array in-place, in ascending order.
///
/// Unlike textbook selection sort, which swaps once per pass, this variant
/// swaps the current slot with any smaller element as soon as it is found
/// while walking forward. The slot still ends each pass holding the minimum of
/// the remaining elements, but the extra swaps mean it is not `stable`.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time. Every slot is compared against every element after
/// it, regardless of the input's order.
///
/// # Example
///
/// ```
/// use dsa::prelude::*;
///
/// let mut arr = [40, 20, 50, 60, 30, 10];
///
/// selection_sort(&mut arr);
///
/// assert_eq!(arr, [10, 20, 30, 40, 50, 60]);
/// ```
pub fn selection_sort<T: PartialOrd>(arr: &mut [T]) {
    let len = arr.len();

    for i in 0..len.saturating_sub(1) {
        for j in (i + 1)..len {
            if arr[j] < arr[i] {
                arr.swap(i, j);
            }
        }
    }
}

/// Sorts the provided array in-place, in ascending order.
///
/// Finds the minimum of the whole array, swaps it into the first slot, then
/// recurses on the rest. Selection sort is not `stable`.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time, performing at most `n - 1` swaps.
///
/// # Stack Depth
///
/// Recurses once per element, so very large inputs can exhaust the thread's
/// stack. Prefer [`selection_sort`] for those.
///
/// # Example
///
/// ```
/// use dsa::prelude::*;
///
/// let mut arr = [40, 20, 50, 60, 30, 10];
///
/// selection_sort_recursive(&mut arr);
///
/// assert_eq!(arr, [10, 20, 30, 40, 50, 60]);
/// ```
pub fn selection_sort_recursive<T: PartialOrd>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }

    let mut min = 0;
    for i in 1..arr.len() {
        if arr[i] < arr[min] {
            min = i;
        }
    }

    if min != 0 {
        arr.swap(0, min);
    }

    selection_sort_recursive(&mut arr[1..]);
}
