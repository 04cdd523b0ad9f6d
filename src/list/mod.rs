//! Mutable linked lists.
//!
//! - [`DoublyLinkedList`]: head and tail pointers, O(1) removal at both ends,
//!   backward links kept as arena indices
//! - [`SinglyLinkedList`]: head pointer only, a narrower contract with simpler
//!   splicing
//!
//! Both lists address their anchors by value: `insert_after` and the
//! value-based deletes act on the first element equal to the argument, scanning
//! from the head.
//!
//! # Examples
//!
//! ```rust
//! use classic_structures::list::{DoublyLinkedList, SinglyLinkedList};
//!
//! let mut doubly: DoublyLinkedList<&str> = ["a", "c"].into_iter().collect();
//! doubly.insert_after("b", &"a").unwrap();
//! assert_eq!(doubly.to_string(), "[a, b, c]");
//!
//! let mut singly: SinglyLinkedList<&str> = ["a", "c"].into_iter().collect();
//! singly.insert_after("b", &"a").unwrap();
//! assert_eq!(singly.to_string(), "[a, b, c]");
//! ```

pub mod doubly;
pub mod singly;

pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;
