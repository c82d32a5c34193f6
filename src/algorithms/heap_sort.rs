//! [Heap Sort]: A comparison sort that arranges the array into a binary
//! max-heap, then repeatedly moves the root to the end of the unsorted region.
//!
//! [Heap Sort]: https://en.wikipedia.org/wiki/Heapsort

/// Sorts the provided array in-place, in ascending order.
///
/// Heap sort is not `stable`.
///
/// # Time Complexity
///
/// Takes *O*(*n log n*) time. Building the heap is *O*(*n*), and each of the
/// `n` extractions sifts the new root down at most *log n* levels.
///
/// # Example
///
/// ```
/// use dsa::prelude::*;
///
/// let mut arr = [12, 11, 13, 5, 6, 7];
///
/// heap_sort(&mut arr);
///
/// assert_eq!(arr, [5, 6, 7, 11, 12, 13]);
/// ```
pub fn heap_sort<T: PartialOrd>(arr: &mut [T]) {
    let len = arr.len();

    for i in (0..len / 2).rev() {
        heapify(arr, len, i);
    }

    for end in (1..len).rev() {
        arr.swap(0, end);
        heapify(arr, end, 0);
    }
}

/// Sifts the node at `root` down until the subtree rooted there satisfies the
/// max-heap property, considering only the first `len` elements of `arr`.
///
/// The children of node `i` are `2i + 1` and `2i + 2`. Both child subtrees
/// must already be max-heaps.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time, recursing at most once per level of the heap.
///
/// # Panics
///
/// Panics if `len` exceeds the length of `arr` and a child index lands past
/// the end of it.
///
/// # Example
///
/// ```
/// use dsa::algorithms::heap_sort::heapify;
///
/// let mut arr = [1, 9, 8, 3, 4];
///
/// heapify(&mut arr, 5, 0);
///
/// assert_eq!(arr[0], 9);
/// ```
pub fn heapify<T: PartialOrd>(arr: &mut [T], len: usize, root: usize) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < len && arr[left] > arr[largest] {
        largest = left;
    }

    if right < len && arr[right] > arr[largest] {
        largest = right;
    }

    if largest != root {
        arr.swap(root, largest);
        heapify(arr, len, largest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_max_heap<T: PartialOrd>(arr: &[T]) -> bool {
        (1..arr.len()).all(|i| arr[(i - 1) / 2] >= arr[i])
    }

    #[test]
    fn test_heapify_builds_heap() {
        let mut arr = [3, 1, 6, 5, 2, 4];
        for i in (0..arr.len() / 2).rev() {
            heapify(&mut arr, 6, i);
        }
        assert!(is_max_heap(&arr));
        assert_eq!(arr[0], 6);
    }

    #[test]
    fn test_heapify_respects_len() {
        let mut arr = [1, 2, 100];
        heapify(&mut arr, 2, 0);
        assert_eq!(arr, [2, 1, 100]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        heap_sort(&mut empty);

        let mut single = [1];
        heap_sort(&mut single);
        assert_eq!(single, [1]);
    }

    #[test]
    fn test_duplicates() {
        let mut arr = [2, 2, 1, 1, 3, 3, 0];
        heap_sort(&mut arr);
        assert_eq!(arr, [0, 1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn test_sorted_and_reverse() {
        let mut arr = [1, 2, 3, 4, 5, 6, 7, 8];
        heap_sort(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 5, 6, 7, 8]);

        let mut arr = [8, 7, 6, 5, 4, 3, 2, 1];
        heap_sort(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
