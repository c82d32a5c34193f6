//! The [stack] contract shared by [`ArrayStack`] and [`LinkedStack`].
//!
//! [stack]: https://en.wikipedia.org/wiki/Stack_(abstract_data_type)
//! [`ArrayStack`]: super::array_stack::ArrayStack
//! [`LinkedStack`]: super::linked_stack::LinkedStack

use std::fmt;

use thiserror::Error;

/// Error returned when a value could not be pushed onto a stack.
///
/// A failed push never modifies the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// A bounded stack already holds as many elements as it can.
    #[error("stack overflow: capacity of {capacity} reached")]
    Overflow {
        /// Maximum number of elements the stack can hold.
        capacity: usize,
    },
    /// Memory for a new element could not be allocated.
    #[error("stack overflow: memory allocation failed")]
    AllocFailed,
}

/// A last-in, first-out collection.
///
/// Implementations must uphold the LIFO law: [`pop`](Stack::pop) returns
/// values in the exact reverse order of successful [`push`](Stack::push)
/// calls, and every failed operation leaves the stack untouched.
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// fn drain<S: Stack<i32>>(stack: &mut S) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Some(value) = stack.pop() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut bounded = ArrayStack::with_capacity(4);
/// let mut linked = LinkedStack::new();
///
/// for value in [1, 2, 3] {
///     bounded.push(value).unwrap();
///     linked.push(value).unwrap();
/// }
///
/// assert_eq!(drain(&mut bounded), [3, 2, 1]);
/// assert_eq!(drain(&mut linked), [3, 2, 1]);
/// ```
pub trait Stack<T> {
    /// Pushes `value` onto the top of the stack.
    fn push(&mut self, value: T) -> Result<(), StackError>;

    /// Removes the top element and returns it, or [`None`] if the stack is
    /// empty.
    fn pop(&mut self) -> Option<T>;

    /// Returns a reference to the top element, or [`None`] if the stack is
    /// empty.
    fn peek(&self) -> Option<&T>;

    /// Returns the number of elements in the stack.
    fn len(&self) -> usize;

    /// Returns `true` if the stack contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Writes elements as `top -> ... -> bottom`, or `(empty)`.
pub(crate) fn fmt_top_to_bottom<'a, T, I>(f: &mut fmt::Formatter<'_>, iter: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut iter = iter.into_iter();

    let Some(top) = iter.next() else {
        return f.write_str("(empty)");
    };

    write!(f, "{top}")?;
    for elem in iter {
        write!(f, " -> {elem}")?;
    }

    Ok(())
}
