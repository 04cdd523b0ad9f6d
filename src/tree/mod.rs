//! Ordered trees.
//!
//! - [`BinarySearchTree`]: an unbalanced binary search tree of distinct
//!   values with in-order iteration

pub mod binary_search;

pub use binary_search::BinarySearchTree;
