//! [Insertion Sort]: A simple sorting algorithm that builds the final sorted
//! array (or list) one item at a time by comparisons.
//!
//! [Insertion Sort]: https://en.wikipedia.org/wiki/Insertion_sort

/// Sorts the provided array in-place, in ascending order.
///
/// Insertion sort is `stable` meaning equal elements retain their original
/// relative position.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time. For each element in the array, the algorithm works
/// backwards, comparing adjacent elements with each other and swapping when
/// needed.
///
/// # Example
///
/// ```
/// use dsa::prelude::*;
///
/// let mut arr = [10, 323, 11, 35, 76, 2, 11, 393, 14];
///
/// insertion_sort(&mut arr);
///
/// assert_eq!(arr, [2, 10, 11, 11, 14, 35, 76, 323, 393]);
/// ```
pub fn insertion_sort<T: PartialOrd>(arr: &mut [T]) {
    for i in 1..arr.len() {
        shift_last_into_place(&mut arr[..=i]);
    }
}

/// Sorts the provided array in-place, in ascending order, by first sorting
/// every element but the last, then inserting the last one.
///
/// Like [`insertion_sort`], this is `stable`.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time in the worst case (reverse-sorted input) and *O*(*n*)
/// time when the input is already sorted, since every insertion stops after a
/// single comparison.
///
/// # Stack Depth
///
/// Recurses once per element, so very large inputs can exhaust the thread's
/// stack. Prefer [`insertion_sort`] for those.
///
/// # Example
///
/// ```
/// use dsa::prelude::*;
///
/// let mut arr = [12, 11, 13, 5, 6];
///
/// insertion_sort_recursive(&mut arr);
///
/// assert_eq!(arr, [5, 6, 11, 12, 13]);
/// ```
pub fn insertion_sort_recursive<T: PartialOrd>(arr: &mut [T]) {
    let len = arr.len();
    if len <= 1 {
        return;
    }

    insertion_sort_recursive(&mut arr[..len - 1]);
    shift_last_into_place(arr);
}

/// Moves the last element of `arr` left past every element strictly greater
/// than it. Everything before the last element must already be sorted.
fn shift_last_into_place<T: PartialOrd>(arr: &mut [T]) {
    let mut j = arr.len().saturating_sub(1);

    while j > 0 && arr[j - 1] > arr[j] {
        arr.swap(j - 1, j);
        j -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        insertion_sort(&mut empty);
        insertion_sort_recursive(&mut empty);

        let mut single = [1];
        insertion_sort_recursive(&mut single);
        assert_eq!(single, [1]);
    }

    #[test]
    fn test_recursive_matches_iterative() {
        let input = [9, -3, 5, 0, 5, 12, -3, 1];

        let mut iterative = input;
        insertion_sort(&mut iterative);

        let mut recursive = input;
        insertion_sort_recursive(&mut recursive);

        assert_eq!(iterative, recursive);
        assert_eq!(recursive, [-3, -3, 0, 1, 5, 5, 9, 12]);
    }

    #[test]
    fn test_already_sorted() {
        let mut arr = [1, 2, 3, 4, 5];
        insertion_sort_recursive(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shift_last_into_place() {
        let mut arr = [1, 3, 5, 7, 4];
        shift_last_into_place(&mut arr);
        assert_eq!(arr, [1, 3, 4, 5, 7]);
    }
}
