//! [Quicksort]: A divide-and-conquer sort that partitions the array around a
//! pivot and sorts each side independently.
//!
//! [Quicksort]: https://en.wikipedia.org/wiki/Quicksort

/// Sorts the provided array in-place, in ascending order.
///
/// Uses the Lomuto partition scheme with the last element as pivot. Quicksort
/// is not `stable`.
///
/// # Time Complexity
///
/// Takes *O*(*n log n*) time on average. Already sorted or reverse-sorted
/// input always picks an extreme pivot, degrading to *O*(*n^2*).
///
/// # Stack Depth
///
/// Only the smaller partition is sorted recursively, the larger one is handled
/// by the loop, so recursion depth stays within *O*(*log n*) even on
/// worst-case input.
///
/// # Example
///
/// ```
/// use dsa::prelude::*;
///
/// let mut arr = [10, 7, 8, 9, 1, 5];
///
/// quick_sort(&mut arr);
///
/// assert_eq!(arr, [1, 5, 7, 8, 9, 10]);
/// ```
pub fn quick_sort<T: PartialOrd>(mut arr: &mut [T]) {
    while arr.len() > 1 {
        let pivot = partition(arr);

        let (left, rest) = core::mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left);
            arr = right;
        } else {
            quick_sort(right);
            arr = left;
        }
    }
}

/// Partitions `arr` around its last element and returns the pivot's final
/// index.
///
/// Afterwards every element before the returned index is less than or equal to
/// the pivot and every element after it is greater. An empty array returns
/// `0` without touching anything.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time, a single pass over the array.
///
/// # Example
///
/// ```
/// use dsa::algorithms::quick_sort::partition;
///
/// let mut arr = [9, 1, 8, 2, 5];
///
/// let pivot = partition(&mut arr);
///
/// assert_eq!(pivot, 2);
/// assert_eq!(arr[pivot], 5);
/// ```
pub fn partition<T: PartialOrd>(arr: &mut [T]) -> usize {
    let Some(high) = arr.len().checked_sub(1) else {
        return 0;
    };

    // Next slot for an element that belongs left of the pivot.
    let mut store = 0;

    for j in 0..high {
        if arr[j] <= arr[high] {
            arr.swap(store, j);
            store += 1;
        }
    }

    arr.swap(store, high);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_invariant() {
        let mut arr = [3, 8, 2, 5, 1, 4, 7, 6, 4];
        let p = partition(&mut arr);

        assert_eq!(arr[p], 4);
        assert!(arr[..p].iter().all(|x| *x <= 4));
        assert!(arr[p + 1..].iter().all(|x| *x > 4));
    }

    #[test]
    fn test_partition_empty() {
        let mut empty: [i32; 0] = [];
        assert_eq!(partition(&mut empty), 0);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        quick_sort(&mut empty);

        let mut single = [42];
        quick_sort(&mut single);
        assert_eq!(single, [42]);
    }

    #[test]
    fn test_all_equal() {
        let mut arr = [5; 16];
        quick_sort(&mut arr);
        assert_eq!(arr, [5; 16]);
    }

    #[test]
    fn test_worst_case_inputs() {
        let mut arr: Vec<u32> = (0..5_000).collect();
        quick_sort(&mut arr);
        assert!(arr.windows(2).all(|w| w[0] <= w[1]));

        let mut arr: Vec<u32> = (0..5_000).rev().collect();
        quick_sort(&mut arr);
        assert!(arr.windows(2).all(|w| w[0] <= w[1]));
    }
}
