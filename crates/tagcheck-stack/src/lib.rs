//! tagcheck Stack
//!
//! A generic last-in-first-out container built from singly linked nodes.
//! The stack owns the top node and every node owns the next one, so no
//! interior node can be reached from outside the container.
//!
//! # Example
//!
//! ```
//! use tagcheck_stack::{Stack, StackError};
//!
//! let mut stack: Stack<&str> = Stack::new();
//! stack.push("html").unwrap();
//! stack.push("body").unwrap();
//! assert_eq!(stack.pop(), Ok("body"));
//! assert_eq!(stack.peek(), Ok(&"html"));
//! assert_eq!(stack.push(None), Err(StackError::InvalidArgument));
//! ```

pub mod stack;

pub use stack::{IntoIter, Iter, Stack};

/// Stack operation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// `pop` or `peek` on a stack with no elements.
    #[error("stack is empty")]
    EmptyContainer,
    /// `push` was given an absent value.
    #[error("cannot push an absent value")]
    InvalidArgument,
}
