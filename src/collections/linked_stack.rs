//! An unbounded [stack] built from singly-linked, owned nodes.
//!
//! [stack]: https://en.wikipedia.org/wiki/Stack_(abstract_data_type)

use std::alloc::{self, Layout};
use std::fmt;

use core::ptr::NonNull;

use super::stack::{fmt_top_to_bottom, Stack, StackError};

/// Creates a `LinkedStack` by pushing the arguments in order, so the last
/// argument ends up on top.
///
/// Evaluates to `Result<LinkedStack<T>, StackError>`, failing if a node could
/// not be allocated.
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// let mut stack = stack![1 => 2 => 3].unwrap();
/// assert_eq!(stack.len(), 3);
///
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// ```
#[macro_export]
macro_rules! stack {
    ($($elem:expr)=>*) => {{
        #[allow(unused_mut)]
        let mut stack = $crate::collections::linked_stack::LinkedStack::new();
        #[allow(unused_mut)]
        let mut result: ::core::result::Result<(), $crate::collections::StackError> =
            ::core::result::Result::Ok(());
        $(
            if result.is_ok() {
                result = stack.push($elem);
            }
        )*
        result.map(|()| stack)
    }};
}

/// An unbounded [stack] built from singly-linked, owned nodes.
///
/// [stack]: https://en.wikipedia.org/wiki/Stack_(abstract_data_type)
pub struct LinkedStack<T> {
    /// The top node, which owns the rest of the chain.
    top: Link<T>,
    /// Number of allocated nodes in the stack.
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    /// Node below this one.
    next: Link<T>,
    /// Data the node owns.
    data: T,
}

impl<T> Node<T> {
    /// Moves `node` into freshly allocated memory, reporting allocation
    /// failure instead of aborting the way [`Box::new`] would.
    fn try_boxed(node: Node<T>) -> Result<Box<Node<T>>, StackError> {
        // `Node` always holds a pointer-sized link, so the layout is never
        // zero-sized.
        let layout = Layout::new::<Node<T>>();

        let ptr = unsafe { alloc::alloc(layout).cast::<Node<T>>() };
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(StackError::AllocFailed);
        };

        unsafe {
            ptr.as_ptr().write(node);
            // Allocated by the global allocator with `Node<T>`'s layout, which
            // is what `Box` expects to free.
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }
}

impl<T> LinkedStack<T> {
    /// Creates a new, empty `LinkedStack`.
    ///
    /// The stack will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let stack: LinkedStack<i32> = LinkedStack::new();
    /// assert!(stack.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Pushes `value` onto the top of the stack.
    ///
    /// Fails with [`StackError::AllocFailed`] only if memory for the new node
    /// cannot be allocated, in which case the stack is left unchanged.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. Only the `top` link is rewired, regardless of the
    /// number of nodes in the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut stack = LinkedStack::new();
    /// stack.push(3).unwrap();
    /// stack.push(4).unwrap();
    ///
    /// assert_eq!(stack.len(), 2);
    /// assert_eq!(stack.peek(), Some(&4));
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        let node = Node {
            next: None,
            data: value,
        };

        let mut node = Node::try_boxed(node).inspect_err(|err| log::warn!("{err}"))?;

        node.next = self.top.take();
        self.top = Some(node);
        self.len += 1;

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
    /// let mut stack = stack![10 => 20].unwrap();
    ///
    /// assert_eq!(stack.pop(), Some(20));
    /// assert_eq!(stack.pop(), Some(10));
    /// assert_eq!(stack.pop(), None);
    /// assert!(stack.is_empty());
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let Some(node) = self.top.take() else {
            log::debug!("stack underflow: pop on empty stack");
            return None;
        };

        let Node { next, data } = *node;
        self.top = next;
        self.len -= 1;

        // The node's memory is released here, the data moves out.
        Some(data)
    }

    /// Returns a reference to the top element, or [`None`] if the stack is
    /// empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.data)
    }

    /// Returns a mutable reference to the top element, or [`None`] if the
    /// stack is empty.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.top.as_deref_mut().map(|node| &mut node.data)
    }

    /// Removes every element from the stack, releasing all nodes.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. Nodes are unlinked one at a time, so even very
    /// long stacks do not recurse while dropping.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut stack = stack![100 => 200 => 300].unwrap();
    /// stack.clear();
    ///
    /// assert!(stack.is_empty());
    /// assert_eq!(stack.peek(), None);
    /// ```
    pub fn clear(&mut self) {
        let released = self.len;
        self.unlink_all();
        log::debug!("stack cleared: released {released} nodes");
    }

    /// Returns an iterator over the elements, from top to bottom.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }

    /// Returns the number of nodes in the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack contains no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn unlink_all(&mut self) {
        let mut curr = self.top.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }
}

impl<T: PartialEq> LinkedStack<T> {
    /// Returns the position of `value` counted from the top (the top is `0`),
    /// or [`None`] if the stack does not contain it.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The nodes are linearly traversed from the top
    /// until a match is found.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let stack = stack![10 => 20 => 30].unwrap();
    ///
    /// assert_eq!(stack.search(&30), Some(0));
    /// assert_eq!(stack.search(&20), Some(1));
    /// assert_eq!(stack.search(&100), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<usize> {
        self.iter().position(|elem| elem == value)
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, value: T) -> Result<(), StackError> {
        LinkedStack::push(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        LinkedStack::pop(self)
    }

    fn peek(&self) -> Option<&T> {
        LinkedStack::peek(self)
    }

    fn len(&self) -> usize {
        LinkedStack::len(self)
    }

    fn is_empty(&self) -> bool {
        LinkedStack::is_empty(self)
    }
}

/// An iterator over the elements of a [`LinkedStack`], from top to bottom.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(Iter { next: self.next })
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_top_to_bottom(f, self.iter())
    }
}

#[allow(dead_code)]
fn assert_properties() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}

    is_send::<LinkedStack<i32>>();
    is_sync::<LinkedStack<i32>>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_push_pop() {
        let mut stack = LinkedStack::new();

        // Try to break an empty stack
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);

        // Try to break a one item stack
        stack.push(10).unwrap();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.pop(), None);

        // Mess around
        stack.push(10).unwrap();
        stack.push(20).unwrap();
        stack.push(30).unwrap();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(30));
        stack.push(40).unwrap();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(40));
        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_search_scenario() {
        let stack = stack![10 => 20 => 30].unwrap();

        assert_eq!(stack.search(&20), Some(1));
        assert_eq!(stack.search(&100), None);

        let empty: LinkedStack<i32> = LinkedStack::new();
        assert_eq!(empty.search(&20), None);
    }

    #[test]
    fn test_search_returns_topmost_match() {
        let stack = stack![5 => 7 => 5 => 9].unwrap();
        assert_eq!(stack.search(&5), Some(1));
    }

    #[test]
    fn test_pop_on_empty_stays_empty() {
        let mut stack: LinkedStack<i32> = LinkedStack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        assert!(stack.is_empty());
        assert_eq!(stack.to_string(), "(empty)");
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut stack = stack![100 => 200 => 300].unwrap();
        stack.clear();
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.pop(), None);

        stack.push(1).unwrap();
        assert_eq!(stack.peek(), Some(&1));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_peek_mut() {
        let mut stack = stack![1 => 2].unwrap();
        if let Some(top) = stack.peek_mut() {
            *top *= 10;
        }
        assert_eq!(stack.pop(), Some(20));
    }

    #[test]
    fn test_display_and_debug() {
        let stack = stack![30 => 40 => 50].unwrap();
        assert_eq!(stack.to_string(), "50 -> 40 -> 30");
        assert_eq!(format!("{stack:?}"), "[50, 40, 30]");
        assert_eq!(format!("{:?}", stack.iter()), "[50, 40, 30]");
    }

    #[test]
    fn test_empty_macro() {
        let stack: LinkedStack<u8> = stack![].unwrap();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_drop_long_chain() {
        let mut stack = LinkedStack::new();
        for i in 0..200_000 {
            stack.push(i).unwrap();
        }
        assert_eq!(stack.len(), 200_000);
        drop(stack);
    }

    #[test]
    fn test_owned_values_are_dropped() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        {
            let mut stack = LinkedStack::new();
            for _ in 0..4 {
                stack.push(Rc::clone(&tracker)).unwrap();
            }
            assert_eq!(Rc::strong_count(&tracker), 5);

            drop(stack.pop());
            assert_eq!(Rc::strong_count(&tracker), 4);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
