//! Sorting and Searching Algorithms.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

pub mod binary_search;
pub mod bubble_sort;
pub mod heap_sort;
pub mod insertion_sort;
pub mod quick_sort;
pub mod radix_sort;
pub mod selection_sort;

/// Comparison sorts provided by this module, selectable at runtime.
///
/// Radix sort is not listed, since it only accepts unsigned integers; see
/// [`radix_sort::radix_sort`].
///
/// # Examples
///
/// ```
/// use dsa::algorithms::Algorithm;
///
/// for algorithm in Algorithm::ALL {
///     let mut arr = [40, 20, 50, 60, 30, 10];
///     algorithm.sort(&mut arr);
///     assert_eq!(arr, [10, 20, 30, 40, 50, 60]);
/// }
///
/// let quick: Algorithm = "quick".parse().unwrap();
/// assert_eq!(quick, Algorithm::Quick);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`bubble_sort::bubble_sort`]
    Bubble,
    /// [`bubble_sort::bubble_sort_recursive`]
    BubbleRecursive,
    /// [`selection_sort::selection_sort`]
    Selection,
    /// [`selection_sort::selection_sort_recursive`]
    SelectionRecursive,
    /// [`heap_sort::heap_sort`]
    Heap,
    /// [`insertion_sort::insertion_sort`]
    Insertion,
    /// [`insertion_sort::insertion_sort_recursive`]
    InsertionRecursive,
    /// [`quick_sort::quick_sort`]
    Quick,
}

impl Algorithm {
    /// Every variant, in declaration order.
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::BubbleRecursive,
        Algorithm::Selection,
        Algorithm::SelectionRecursive,
        Algorithm::Heap,
        Algorithm::Insertion,
        Algorithm::InsertionRecursive,
        Algorithm::Quick,
    ];

    /// Sorts the provided array in-place, in ascending order, with this
    /// algorithm.
    pub fn sort<T: PartialOrd>(self, arr: &mut [T]) {
        match self {
            Algorithm::Bubble => bubble_sort::bubble_sort(arr),
            Algorithm::BubbleRecursive => bubble_sort::bubble_sort_recursive(arr),
            Algorithm::Selection => selection_sort::selection_sort(arr),
            Algorithm::SelectionRecursive => selection_sort::selection_sort_recursive(arr),
            Algorithm::Heap => heap_sort::heap_sort(arr),
            Algorithm::Insertion => insertion_sort::insertion_sort(arr),
            Algorithm::InsertionRecursive => insertion_sort::insertion_sort_recursive(arr),
            Algorithm::Quick => quick_sort::quick_sort(arr),
        }
    }

    /// Returns `true` if equal elements keep their original relative order.
    pub const fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble
                | Algorithm::BubbleRecursive
                | Algorithm::Insertion
                | Algorithm::InsertionRecursive
        )
    }

    /// Returns the kebab-case name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::BubbleRecursive => "bubble-recursive",
            Algorithm::Selection => "selection",
            Algorithm::SelectionRecursive => "selection-recursive",
            Algorithm::Heap => "heap",
            Algorithm::Insertion => "insertion",
            Algorithm::InsertionRecursive => "insertion-recursive",
            Algorithm::Quick => "quick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Algorithm`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sorting algorithm: {0:?}")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseAlgorithmError(s.to_owned()))
    }
}
