//! Round-robin service simulation.
//!
//! A [`RoundRobinQueue`] holds entities that each need a number of service
//! units. Service happens one unit per time step, in strict arrival order:
//! the front entry is served, and goes to the back of the queue if it still
//! needs more, or leaves for good once its count reaches zero.
//!
//! ```text
//! WAITING -> SERVED_ONE_UNIT -> (remaining > 0) -> WAITING -> ... -> DONE
//! ```
//!
//! The queue is backed by a [`DoublyLinkedList`], which gives O(1) removal at
//! the front and O(1) insertion at the back.
//!
//! # Examples
//!
//! ```rust
//! use classic_structures::queue::RoundRobinQueue;
//!
//! let mut queue = RoundRobinQueue::new();
//! let jasper = queue.enqueue("Jasper", 3);
//! let penelope = queue.enqueue("Penelope", 1);
//! let maverick = queue.enqueue("Maverick", 4);
//! let lincoln = queue.enqueue("Lincoln", 2);
//!
//! assert_eq!(queue.time_to_completion(jasper), Ok(8));
//! assert_eq!(queue.time_to_completion(penelope), Ok(2));
//! assert_eq!(queue.time_to_completion(maverick), Ok(10));
//! assert_eq!(queue.time_to_completion(lincoln), Ok(7));
//!
//! // Queries never touch the queue itself.
//! assert_eq!(queue.len(), 4);
//! ```

use std::fmt;

use crate::error::QueueError;
use crate::list::DoublyLinkedList;
use crate::list::doubly::Iter;

/// Identity token handed out by [`RoundRobinQueue::enqueue`].
///
/// Tickets are unique within one queue, so two entities with equal labels can
/// still be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Returns the raw numeric identifier.
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// An entity waiting for service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry<I> {
    ticket: Ticket,
    identity: I,
    remaining: u32,
}

impl<I> QueueEntry<I> {
    /// The entry's identity token.
    #[inline]
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// The label supplied at enqueue time.
    #[inline]
    #[must_use]
    pub const fn identity(&self) -> &I {
        &self.identity
    }

    /// Service units still needed.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// What one time step did to the entry at the front of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service<I> {
    /// The entry still needs service and moved to the back.
    Requeued {
        /// The served entry.
        ticket: Ticket,
        /// Units still needed after this step.
        remaining: u32,
    },
    /// The entry received its last unit and left the queue.
    Done {
        /// The served entry.
        ticket: Ticket,
        /// The label of the departing entry.
        identity: I,
    },
}

impl<I> Service<I> {
    /// The ticket of the entry served in this step.
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        match self {
            Self::Requeued { ticket, .. } | Self::Done { ticket, .. } => *ticket,
        }
    }

    /// Returns `true` if the served entry left the queue.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }
}

/// The time step at which an entry received its last unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion<I> {
    /// The completed entry.
    pub ticket: Ticket,
    /// Its label.
    pub identity: I,
    /// One-based time step of the final unit.
    pub step: usize,
}

/// A FIFO of entities served one unit at a time, round-robin.
///
/// # Time Complexity
///
/// | Operation              | Complexity |
/// |------------------------|------------|
/// | `enqueue`              | O(1)       |
/// | `advance_one_step`     | O(1)       |
/// | `time_to_completion`   | O(total remaining units) |
/// | `completion_schedule`  | O(total remaining units) |
#[derive(Clone)]
pub struct RoundRobinQueue<I> {
    entries: DoublyLinkedList<QueueEntry<I>>,
    next_ticket: u64,
}

impl<I> RoundRobinQueue<I> {
    /// Creates an empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: DoublyLinkedList::new(),
            next_ticket: 0,
        }
    }

    /// Number of entries waiting.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nobody is waiting.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entity needing `units` service units and returns its ticket.
    ///
    /// An entry enqueued with zero units still occupies one time step when it
    /// reaches the front, and leaves as soon as it is served.
    pub fn enqueue(&mut self, identity: I, units: u32) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.entries.insert_tail(QueueEntry {
            ticket,
            identity,
            remaining: units,
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(%ticket, units, "enqueued");
        ticket
    }

    /// Serves one unit to the front entry.
    ///
    /// The entry's count is decremented; it moves to the back if it still
    /// needs service and is removed otherwise. Returns `None` on an empty
    /// queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::queue::{RoundRobinQueue, Service};
    ///
    /// let mut queue = RoundRobinQueue::new();
    /// let first = queue.enqueue('a', 2);
    /// let second = queue.enqueue('b', 1);
    ///
    /// assert_eq!(
    ///     queue.advance_one_step(),
    ///     Some(Service::Requeued { ticket: first, remaining: 1 })
    /// );
    /// assert_eq!(
    ///     queue.advance_one_step(),
    ///     Some(Service::Done { ticket: second, identity: 'b' })
    /// );
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn advance_one_step(&mut self) -> Option<Service<I>> {
        let mut entry = self.entries.delete_head()?;
        entry.remaining = entry.remaining.saturating_sub(1);
        let ticket = entry.ticket;

        if entry.remaining > 0 {
            let remaining = entry.remaining;
            self.entries.insert_tail(entry);
            #[cfg(feature = "tracing")]
            tracing::trace!(%ticket, remaining, "served one unit, requeued");
            Some(Service::Requeued { ticket, remaining })
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(%ticket, "served last unit");
            Some(Service::Done {
                ticket,
                identity: entry.identity,
            })
        }
    }

    /// Returns `true` if the entry with `ticket` is still waiting.
    #[must_use]
    pub fn contains(&self, ticket: Ticket) -> bool {
        self.entries.iter().any(|entry| entry.ticket == ticket)
    }

    /// Returns the entry at `index`, counting from the front.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&QueueEntry<I>> {
        self.entries.iter().nth(index)
    }

    /// Returns an iterator over the waiting entries, front to back.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, QueueEntry<I>> {
        self.entries.iter()
    }

    /// Counts the time steps until the entry with `ticket` leaves the queue.
    ///
    /// The simulation runs on a fresh snapshot each call; `self` is never
    /// advanced, so repeated queries are independent of one another.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::UnknownTicket`] if the ticket is not waiting.
    pub fn time_to_completion(&self, ticket: Ticket) -> Result<usize, QueueError> {
        if !self.contains(ticket) {
            return Err(QueueError::UnknownTicket(ticket.as_raw()));
        }
        let mut snapshot = self.snapshot();
        let mut steps = 0;
        while let Some(service) = snapshot.advance_one_step() {
            steps += 1;
            if service.is_done() && service.ticket() == ticket {
                return Ok(steps);
            }
        }
        Err(QueueError::UnknownTicket(ticket.as_raw()))
    }

    /// Like [`time_to_completion`](Self::time_to_completion), addressing the
    /// entry by its current position from the front.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::queue::RoundRobinQueue;
    ///
    /// let mut queue = RoundRobinQueue::new();
    /// for units in [3, 1, 4, 2] {
    ///     queue.enqueue((), units);
    /// }
    /// let times: Vec<_> = (0..4)
    ///     .map(|index| queue.time_to_completion_at(index).unwrap())
    ///     .collect();
    /// assert_eq!(times, vec![8, 2, 10, 7]);
    /// ```
    pub fn time_to_completion_at(&self, index: usize) -> Result<usize, QueueError> {
        let entry = self.get(index).ok_or(QueueError::IndexOutOfRange {
            index,
            length: self.len(),
        })?;
        self.time_to_completion(entry.ticket)
    }

    /// Runs the whole queue to exhaustion on a snapshot and reports when each
    /// entry finished, in completion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::queue::RoundRobinQueue;
    ///
    /// let mut queue = RoundRobinQueue::new();
    /// queue.enqueue("long", 2);
    /// queue.enqueue("short", 1);
    ///
    /// let schedule: Vec<_> = queue
    ///     .completion_schedule()
    ///     .into_iter()
    ///     .map(|completion| (*completion.identity, completion.step))
    ///     .collect();
    /// assert_eq!(schedule, vec![("short", 2), ("long", 3)]);
    /// ```
    #[must_use]
    pub fn completion_schedule(&self) -> Vec<Completion<&I>> {
        let mut snapshot = self.snapshot();
        let mut schedule = Vec::with_capacity(self.len());
        let mut step = 0;
        while let Some(service) = snapshot.advance_one_step() {
            step += 1;
            if let Service::Done { ticket, identity } = service {
                schedule.push(Completion {
                    ticket,
                    identity,
                    step,
                });
            }
        }
        schedule
    }

    /// A copy of the queue that borrows the identities instead of cloning them.
    fn snapshot(&self) -> RoundRobinQueue<&I> {
        RoundRobinQueue {
            entries: self
                .entries
                .iter()
                .map(|entry| QueueEntry {
                    ticket: entry.ticket,
                    identity: &entry.identity,
                    remaining: entry.remaining,
                })
                .collect(),
            next_ticket: self.next_ticket,
        }
    }
}

impl<I> Default for RoundRobinQueue<I> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Extend<(I, u32)> for RoundRobinQueue<I> {
    fn extend<T: IntoIterator<Item = (I, u32)>>(&mut self, iter: T) {
        for (identity, units) in iter {
            self.enqueue(identity, units);
        }
    }
}

impl<I> FromIterator<(I, u32)> for RoundRobinQueue<I> {
    fn from_iter<T: IntoIterator<Item = (I, u32)>>(iter: T) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<I: fmt::Debug> fmt::Debug for RoundRobinQueue<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(
                self.entries
                    .iter()
                    .map(|entry| (&entry.identity, entry.remaining)),
            )
            .finish()
    }
}
