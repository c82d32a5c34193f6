//! Data Structures & Algorithms
//!
//! Classic sorting algorithms, binary search, and two stacks sharing one
//! [`Stack`](collections::Stack) contract.
//!
//! Nothing here is thread-safe beyond what `Send` and `Sync` provide;
//! callers sharing a stack across threads must synchronise access themselves.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod algorithms;
pub mod collections;

/// Data Structures & Algorithms Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::stack;

    #[doc(no_inline)]
    pub use super::collections::array_stack::ArrayStack;
    #[doc(no_inline)]
    pub use super::collections::linked_stack::LinkedStack;
    #[doc(no_inline)]
    pub use super::collections::stack::{Stack, StackError};

    #[doc(no_inline)]
    pub use super::algorithms::Algorithm;

    #[doc(no_inline)]
    pub use super::algorithms::binary_search::*;
    #[doc(no_inline)]
    pub use super::algorithms::bubble_sort::*;
    #[doc(no_inline)]
    pub use super::algorithms::heap_sort::heap_sort;
    #[doc(no_inline)]
    pub use super::algorithms::insertion_sort::*;
    #[doc(no_inline)]
    pub use super::algorithms::quick_sort::quick_sort;
    #[doc(no_inline)]
    pub use super::algorithms::radix_sort::*;
    #[doc(no_inline)]
    pub use super::algorithms::selection_sort::*;
}
