//! # classic-structures
//!
//! Classic linear and hierarchical data structures, written to be read.
//!
//! ## Overview
//!
//! - **Lists**: a doubly-linked list with head and tail access and a
//!   singly-linked list with a head pointer only
//! - **Queue**: a round-robin service simulation on top of the doubly-linked
//!   list
//! - **Stack**: a `Vec`-backed stack and a balanced-parenthesis checker
//! - **Tree**: an unbalanced binary search tree with in-order iteration
//!
//! Every container is single-owner and synchronous. Recursive algorithms are
//! expressed with loops and explicit stacks, so deep or degenerate structures
//! do not exhaust the call stack.
//!
//! ## Feature Flags
//!
//! - `list`: Linked lists
//! - `queue`: Round-robin queue (enables `list`)
//! - `stack`: Stack and parenthesis checker
//! - `tree`: Binary search tree
//! - `serde`: `Serialize`/`Deserialize` for the lists and the tree
//! - `tracing`: Emit `tracing` events from mutating operations
//! - `full`: Enable all of the above
//!
//! ## Example
//!
//! ```rust
//! use classic_structures::prelude::*;
//!
//! let mut list = DoublyLinkedList::new();
//! list.insert_tail(1);
//! list.insert_tail(3);
//! list.insert_after(2, &1).unwrap();
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//!
//! let tree: BinarySearchTree<i32> = [2, 3, 1, 3].into_iter().collect();
//! assert_eq!(tree.to_string(), "[1, 2, 3]");
//!
//! assert!(is_balanced("(()())"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers of every enabled feature.
///
/// # Usage
///
/// ```rust
/// use classic_structures::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "list")]
    pub use crate::list::*;

    #[cfg(feature = "queue")]
    pub use crate::queue::*;

    #[cfg(feature = "stack")]
    pub use crate::stack::*;

    #[cfg(feature = "tree")]
    pub use crate::tree::*;
}

pub mod error;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "queue")]
pub mod queue;

#[cfg(feature = "stack")]
pub mod stack;

#[cfg(feature = "tree")]
pub mod tree;
