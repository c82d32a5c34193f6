//! [Radix Sort]: A non-comparative sort that distributes elements by their
//! individual digits, least significant digit (LSD) first.
//!
//! [Radix Sort]: https://en.wikipedia.org/wiki/Radix_sort

/// Number of buckets per pass, one per decimal digit.
const RADIX: usize = 10;

/// Sorts the provided array of unsigned integers in-place, in ascending order.
///
/// Negative values have no decimal digits to bucket by, so only unsigned
/// element types are accepted. `usize` and `u128` do not implement
/// `Into<u64>`; sort them with [`radix_sort_by_key`] and a converting key:
///
/// ```
/// use dsa::prelude::*;
///
/// let mut lens: Vec<usize> = vec![12, 3, 7];
/// radix_sort_by_key(&mut lens, |len| *len as u64);
/// assert_eq!(lens, [3, 7, 12]);
/// ```
///
/// # Time Complexity
///
/// Takes *O*(*d*(*n* + *k*)) time, where `d` is the number of decimal digits
/// of the largest element and `k` is the radix (10). Allocates one buffer of
/// `n` elements.
///
/// # Example
///
/// ```
/// use dsa::prelude::*;
///
/// let mut arr: [u32; 8] = [170, 45, 75, 90, 802, 24, 2, 66];
///
/// radix_sort(&mut arr);
///
/// assert_eq!(arr, [2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub fn radix_sort<T: Copy + Into<u64>>(arr: &mut [T]) {
    radix_sort_by_key(arr, |elem| (*elem).into());
}

/// Sorts the provided array in-place by the non-negative key extracted from
/// each element.
///
/// Radix sort is `stable`: elements with equal keys retain their original
/// relative position, which makes it usable for sorting records.
///
/// # Time Complexity
///
/// Takes *O*(*d*(*n* + *k*)) time, where `d` is the number of decimal digits
/// of the largest key and `k` is the radix (10). The key function is called
/// *O*(*d* *n*) times.
///
/// # Example
///
/// ```
/// use dsa::prelude::*;
///
/// let mut people = [("carol", 31), ("alice", 24), ("bob", 31), ("dave", 7)];
///
/// radix_sort_by_key(&mut people, |(_, age)| *age);
///
/// assert_eq!(people, [("dave", 7), ("alice", 24), ("carol", 31), ("bob", 31)]);
/// ```
pub fn radix_sort_by_key<T, F>(arr: &mut [T], key: F)
where
    T: Clone,
    F: Fn(&T) -> u64,
{
    if arr.len() <= 1 {
        return;
    }

    let max = arr.iter().map(&key).max().unwrap_or(0);
    let mut exp: u64 = 1;

    while max / exp > 0 {
        log::trace!("radix pass: exp = {exp}, len = {}", arr.len());
        counting_sort_by_digit(arr, &key, exp);

        // `exp` reaches 10^19 for keys near `u64::MAX`; the next power does
        // not fit and there are no digits left anyway.
        match exp.checked_mul(RADIX as u64) {
            Some(next) => exp = next,
            None => break,
        }
    }
}

/// Stable counting sort of `arr` by the decimal digit of each key at place
/// `exp` (1, 10, 100, ...).
fn counting_sort_by_digit<T, F>(arr: &mut [T], key: &F, exp: u64)
where
    T: Clone,
    F: Fn(&T) -> u64,
{
    let digit = |elem: &T| ((key(elem) / exp) % RADIX as u64) as usize;

    let mut count = [0usize; RADIX];
    for elem in arr.iter() {
        count[digit(elem)] += 1;
    }

    // Prefix sums: `count[d]` becomes one past the last slot for digit `d`.
    for d in 1..RADIX {
        count[d] += count[d - 1];
    }

    // Placing from the back keeps equal digits in input order.
    let mut output = arr.to_vec();
    for elem in arr.iter().rev() {
        let d = digit(elem);
        count[d] -= 1;
        output[count[d]] = elem.clone();
    }

    arr.clone_from_slice(&output);
}
