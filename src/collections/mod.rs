//! Collection Types.

pub mod array_stack;
pub mod linked_stack;
pub mod stack;

pub use array_stack::ArrayStack;
pub use linked_stack::LinkedStack;
pub use stack::{Stack, StackError};

/// Data Structures & Algorithms Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::stack;

    #[doc(no_inline)]
    pub use super::array_stack::ArrayStack;
    #[doc(no_inline)]
    pub use super::linked_stack::LinkedStack;
    #[doc(no_inline)]
    pub use super::stack::{Stack, StackError};
}
