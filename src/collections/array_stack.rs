//! A bounded [stack] backed by a contiguous buffer.
//!
//! [stack]: https://en.wikipedia.org/wiki/Stack_(abstract_data_type)

use std::fmt;

use super::stack::{fmt_top_to_bottom, Stack, StackError};

/// Capacity of an [`ArrayStack`] created with [`ArrayStack::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A bounded [stack] backed by a contiguous buffer.
///
/// Pushing onto a full stack fails with [`StackError::Overflow`] rather than
/// growing past the capacity chosen at construction.
///
/// [stack]: https://en.wikipedia.org/wiki/Stack_(abstract_data_type)
pub struct ArrayStack<T> {
    /// Elements, bottom first. Never holds more than `capacity`.
    buf: Vec<T>,
    /// Maximum number of elements.
    capacity: usize,
}

impl<T> ArrayStack<T> {
    /// Creates a new, empty `ArrayStack` holding at most
    /// [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let stack: ArrayStack<i32> = ArrayStack::new();
    /// assert_eq!(stack.capacity(), 10);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new, empty `ArrayStack` holding at most `capacity` elements.
    ///
    /// `capacity` is only a bound; nothing is allocated until elements are
    /// pushed, so any capacity is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut stack = ArrayStack::with_capacity(1);
    ///
    /// assert_eq!(stack.push(1), Ok(()));
    /// assert_eq!(stack.push(2), Err(StackError::Overflow { capacity: 1 }));
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::new(),
            capacity,
        }
    }

    /// Pushes `value` onto the top of the stack, or returns
    /// [`StackError::Overflow`] if the stack is full.
    ///
    /// Fails with [`StackError::AllocFailed`] if the buffer needs to grow and
    /// memory cannot be allocated. Either way the stack is left unchanged.
    ///
    /// # Time Complexity
    ///
    /// Takes amortized *O*(1) time. The buffer grows on demand, so a large
    /// capacity costs nothing until it is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut stack = ArrayStack::with_capacity(2);
    /// stack.push(10).unwrap();
    /// stack.push(20).unwrap();
    ///
    /// assert!(stack.push(30).is_err());
    /// assert_eq!(stack.len(), 2);
    /// assert_eq!(stack.peek(), Some(&20));
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.is_full() {
            log::warn!("stack overflow: capacity of {} reached", self.capacity);
            return Err(StackError::Overflow {
                capacity: self.capacity,
            });
        }

        if let Err(err) = self.buf.try_reserve(1) {
            log::warn!("stack overflow: buffer allocation failed: {err}");
            return Err(StackError::AllocFailed);
        }

        self.buf.push(value);
        Ok(())
    }

    /// Removes the top element and returns it, or [`None`] if the stack is
    /// empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut stack = ArrayStack::new();
    /// assert_eq!(stack.pop(), None);
    ///
    /// stack.push(1).unwrap();
    /// stack.push(2).unwrap();
    ///
    /// assert_eq!(stack.pop(), Some(2));
    /// assert_eq!(stack.pop(), Some(1));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let value = self.buf.pop();
        if value.is_none() {
            log::debug!("stack underflow: pop on empty stack");
        }
        value
    }

    /// Returns a reference to the top element, or [`None`] if the stack is
    /// empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.buf.last()
    }

    /// Returns an iterator over the elements, from top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut stack = ArrayStack::new();
    /// stack.push(1).unwrap();
    /// stack.push(2).unwrap();
    ///
    /// assert_eq!(stack.iter().collect::<Vec<_>>(), [&2, &1]);
    /// ```
    #[inline]
    pub fn iter(&self) -> core::iter::Rev<core::slice::Iter<'_, T>> {
        self.buf.iter().rev()
    }

    /// Returns the number of elements in the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns the maximum number of elements the stack can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` if another push would fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buf.len() >= self.capacity
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, value: T) -> Result<(), StackError> {
        ArrayStack::push(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        ArrayStack::pop(self)
    }

    fn peek(&self) -> Option<&T> {
        ArrayStack::peek(self)
    }

    fn len(&self) -> usize {
        ArrayStack::len(self)
    }

    fn is_empty(&self) -> bool {
        ArrayStack::is_empty(self)
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("top_to_bottom", &self.iter().collect::<Vec<_>>())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_top_to_bottom(f, self.iter())
    }
}
