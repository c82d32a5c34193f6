//! [Bubble Sort]: A simple sorting algorithm that repeatedly steps through the
//! input list element by element, comparing the current element with the one
//! after it, swapping their values if needed.
//!
//! [Bubble Sort]: https://en.wikipedia.org/wiki/Bubble_sort

/// Sorts the provided array in-place, in ascending order.
///
/// Bubble sort is `stable` meaning equal elements retain their original
/// relative position.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time. For every element of the list, the algorithm compares
/// an adjacent pair and swaps them if the ordering is incorrect (ascending).
/// The list is linearly iterated over for every `n` elements, even when it is
/// already sorted.
///
/// # Example
///
/// ```
/// use dsa::prelude::*;
///
/// let mut arr = [10, 323, 11, 35, 76, 2, 11, 393, 14];
///
/// bubble_sort(&mut arr);
///
/// assert_eq!(arr, [2, 10, 11, 11, 14, 35, 76, 323, 393]);
/// ```
pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) {
    let len = arr.len();

    for i in 0..len.saturating_sub(1) {
        for j in 0..(len - i - 1) {
            if arr[j + 1] < arr[j] {
                arr.swap(j, j + 1);
            }
        }
    }
}

/// Sorts the provided array in-place, in ascending order, one pass per call.
///
/// Each call bubbles the largest element of `arr` to its end, then recurses on
/// everything before it. If a pass performs no swap the array is already
/// sorted and recursion stops.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time in the worst case and *O*(*n*) time when the input is
/// already sorted, since the first pass finds nothing to swap.
///
/// # Stack Depth
///
/// Recurses once per element in the worst case, so very large inputs can
/// exhaust the thread's stack. Prefer [`bubble_sort`] for those.
///
/// # Example
///
/// ```
/// use dsa::prelude::*;
///
/// let mut arr = [40, 20, 50, 60, 30, 10];
///
/// bubble_sort_recursive(&mut arr);
///
/// assert_eq!(arr, [10, 20, 30, 40, 50, 60]);
/// ```
pub fn bubble_sort_recursive<T: PartialOrd>(arr: &mut [T]) {
    let len = arr.len();
    if len <= 1 {
        return;
    }

    let mut swapped = false;

    for i in 0..(len - 1) {
        if arr[i + 1] < arr[i] {
            arr.swap(i, i + 1);
            swapped = true;
        }
    }

    if swapped {
        bubble_sort_recursive(&mut arr[..len - 1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        bubble_sort(&mut empty);
        bubble_sort_recursive(&mut empty);

        let mut single = [7];
        bubble_sort(&mut single);
        assert_eq!(single, [7]);
        bubble_sort_recursive(&mut single);
        assert_eq!(single, [7]);
    }

    #[test]
    fn test_reverse_sorted() {
        let mut arr = [6, 5, 4, 3, 2, 1];
        bubble_sort(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 5, 6]);

        let mut arr = [6, 5, 4, 3, 2, 1];
        bubble_sort_recursive(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_duplicates_and_negatives() {
        let mut arr = [3, -1, 3, 0, -1, 2];
        bubble_sort(&mut arr);
        assert_eq!(arr, [-1, -1, 0, 2, 3, 3]);

        let mut arr = [3, -1, 3, 0, -1, 2];
        bubble_sort_recursive(&mut arr);
        assert_eq!(arr, [-1, -1, 0, 2, 3, 3]);
    }

    #[test]
    fn test_stable() {
        // Sorted by key only, the tag records input order.
        #[derive(Debug, PartialEq)]
        struct Keyed(i32, char);

        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let mut arr = [Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        bubble_sort_recursive(&mut arr);
        assert_eq!(
            arr,
            [Keyed(1, 'b'), Keyed(1, 'd'), Keyed(2, 'a'), Keyed(2, 'c')]
        );
    }
}
