//! Error types shared by the containers.
//!
//! Most "nothing to do" outcomes (deleting from an empty list, removing a
//! value that is absent) are reported through `Option`. The types here cover
//! the cases where the caller needs more than `None`: an insertion whose
//! anchor is missing hands the value back, and queue queries say why they
//! could not answer.

use thiserror::Error;

/// Returned by `insert_after` when no element equals the anchor.
///
/// The rejected value is handed back to the caller unchanged.
///
/// # Examples
///
/// ```rust
/// use classic_structures::list::DoublyLinkedList;
///
/// let mut list: DoublyLinkedList<i32> = [1, 2].into_iter().collect();
/// let error = list.insert_after(7, &42).unwrap_err();
/// assert_eq!(error.into_inner(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("anchor value not found")]
pub struct AnchorNotFound<T>(pub T);

impl<T> AnchorNotFound<T> {
    /// Returns the value that could not be inserted.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Errors reported by [`RoundRobinQueue`](crate::queue::RoundRobinQueue) queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The ticket does not belong to any entry currently waiting.
    #[error("ticket #{0} is not waiting in the queue")]
    UnknownTicket(u64),
    /// The queue position is past the end of the queue.
    #[error("position {index} is out of range for a queue of {length} entries")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of entries waiting.
        length: usize,
    },
}
