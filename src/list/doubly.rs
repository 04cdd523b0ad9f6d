//! Doubly-linked list backed by a slot arena.
//!
//! This module provides [`DoublyLinkedList`], a mutable ordered container with
//! O(1) insertion and removal at both ends and O(n) value-addressed splicing.
//!
//! # Overview
//!
//! Nodes are stored in a `Vec` of slots owned by the list. Each node owns its
//! element; the `next` and `prev` links are slot indices, so the backward link
//! is a navigation aid and never a second owner. Vacated slots are chained
//! into a free list and reused by later insertions.
//!
//! ```text
//! head                                   tail
//!  |                                       |
//!  v                                       v
//! [9] <-> [5] <-> [8] <-> [6] <-> [3] <-> [4]
//! ```
//!
//! # Examples
//!
//! ```rust
//! use classic_structures::list::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.insert_head(5);
//! list.insert_tail(3);
//! list.insert_after(6, &5).unwrap();
//! list.insert_head(9);
//! list.insert_after(8, &5).unwrap();
//! list.insert_tail(4);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![9, 5, 8, 6, 3, 4]);
//!
//! list.delete_head();
//! list.delete_value(&6);
//! list.delete_value(&3);
//! assert_eq!(list.to_string(), "[5, 8, 4]");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::mem;

use crate::error::AnchorNotFound;

/// A node of the list: the element plus its neighbour indices.
#[derive(Clone)]
struct Node<T> {
    element: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// One arena cell.
#[derive(Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// A doubly-linked list with head and tail access.
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `insert_head`   | O(1)       |
/// | `insert_tail`   | O(1)       |
/// | `insert_after`  | O(n)       |
/// | `delete_head`   | O(1)       |
/// | `delete_tail`   | O(1)       |
/// | `delete_value`  | O(n)       |
/// | `len`           | O(1)       |
///
/// # Invariants
///
/// - `head.prev` and `tail.next` are always `None`.
/// - For adjacent nodes `a -> b`, `a.next == b` and `b.prev == a`.
/// - The list is empty iff both `head` and `tail` are `None`.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    length: usize,
}

static_assertions::assert_impl_all!(DoublyLinkedList<i32>: Send, Sync);

impl<T> DoublyLinkedList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::list::DoublyLinkedList;
    ///
    /// let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            length: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before reallocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::list::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::with_capacity(4);
    /// list.insert_tail('a');
    /// list.insert_head('b');
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.to_string(), "[b, a]");
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the first element, or `None` if the list is empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|index| &self.node(index).element)
    }

    /// Returns a reference to the last element, or `None` if the list is empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|index| &self.node(index).element)
    }

    /// Inserts `value` before the current head.
    ///
    /// On an empty list the new node becomes both head and tail.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::list::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.insert_head(2);
    /// list.insert_head(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn insert_head(&mut self, value: T) {
        let index = self.allocate(Node {
            element: value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.length += 1;
    }

    /// Inserts `value` after the current tail.
    ///
    /// On an empty list the new node becomes both head and tail.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::list::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.insert_tail(1);
    /// list.insert_tail(2);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn insert_tail(&mut self, value: T) {
        let index = self.allocate(Node {
            element: value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old_tail) => self.node_mut(old_tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.length += 1;
    }

    /// Removes the head and returns its element.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::list::DoublyLinkedList;
    ///
    /// let mut list: DoublyLinkedList<i32> = [1, 2].into_iter().collect();
    /// assert_eq!(list.delete_head(), Some(1));
    /// assert_eq!(list.delete_head(), Some(2));
    /// assert_eq!(list.delete_head(), None);
    /// ```
    pub fn delete_head(&mut self) -> Option<T> {
        let index = self.head?;
        Some(self.unlink(index))
    }

    /// Removes the tail and returns its element.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::list::DoublyLinkedList;
    ///
    /// let mut list: DoublyLinkedList<i32> = [1, 2].into_iter().collect();
    /// assert_eq!(list.delete_tail(), Some(2));
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn delete_tail(&mut self) -> Option<T> {
        let index = self.tail?;
        Some(self.unlink(index))
    }

    /// Removes every element, keeping the allocated arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.length = 0;
    }

    /// Returns an iterator over references to the elements, head to tail.
    ///
    /// The iterator is double-ended; `iter().rev()` walks tail to head along
    /// the backward links.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::list::DoublyLinkedList;
    ///
    /// let list: DoublyLinkedList<i32> = (1..=3).collect();
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
    /// assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![&3, &2, &1]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }

    fn node(&self, index: usize) -> &Node<T> {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at vacant slot {index}"),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at vacant slot {index}"),
        }
    }

    /// Stores `node` in a free slot, reusing a vacated one when available.
    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(index) => {
                let Slot::Vacant { next_free } = self.slots[index] else {
                    unreachable!("free list points at occupied slot {index}")
                };
                self.free = next_free;
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Detaches the node at `index`, reconnecting its neighbours.
    fn unlink(&mut self, index: usize) -> T {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        let Slot::Occupied(node) = mem::replace(&mut self.slots[index], vacant) else {
            unreachable!("unlink called on vacant slot {index}")
        };
        self.free = Some(index);

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.length -= 1;

        if self.length == 0 {
            self.slots.clear();
            self.free = None;
        }
        node.element
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Inserts `value` right after the first element equal to `anchor`.
    ///
    /// When the anchor is the tail, the new node becomes the tail. When no
    /// element matches, the list is left unchanged and `value` is returned
    /// inside the error.
    ///
    /// # Errors
    ///
    /// Returns [`AnchorNotFound`] if no element equals `anchor`.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::list::DoublyLinkedList;
    ///
    /// let mut list: DoublyLinkedList<i32> = [1, 3].into_iter().collect();
    /// list.insert_after(2, &1).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    ///
    /// let rejected = list.insert_after(9, &42).unwrap_err();
    /// assert_eq!(rejected.into_inner(), 9);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn insert_after(&mut self, value: T, anchor: &T) -> Result<(), AnchorNotFound<T>> {
        let Some(anchor_index) = self.position(anchor) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(length = self.length, "insert_after: anchor not found");
            return Err(AnchorNotFound(value));
        };

        let successor = self.node(anchor_index).next;
        let index = self.allocate(Node {
            element: value,
            prev: Some(anchor_index),
            next: successor,
        });
        self.node_mut(anchor_index).next = Some(index);
        match successor {
            Some(next) => self.node_mut(next).prev = Some(index),
            None => self.tail = Some(index),
        }
        self.length += 1;
        Ok(())
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Head, tail and interior nodes are all handled; returns `None` if no
    /// element matches.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::list::DoublyLinkedList;
    ///
    /// let mut list: DoublyLinkedList<i32> = (1..=3).collect();
    /// assert_eq!(list.delete_value(&1), Some(1));
    /// assert_eq!(list.delete_value(&3), Some(3));
    /// assert_eq!(list.delete_value(&7), None);
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&2]);
    /// ```
    pub fn delete_value(&mut self, value: &T) -> Option<T> {
        let Some(index) = self.position(value) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(length = self.length, "delete_value: value not found");
            return None;
        };
        Some(self.unlink(index))
    }

    /// Returns `true` if some element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Slot index of the first node holding `value`, scanning from the head.
    fn position(&self, value: &T) -> Option<usize> {
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.node(index);
            if node.element == *value {
                return Some(index);
            }
            current = node.next;
        }
        None
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over elements of a [`DoublyLinkedList`].
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.delete_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.delete_tail()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for DoublyLinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert_tail(element);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for DoublyLinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for DoublyLinkedList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
