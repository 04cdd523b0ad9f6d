//! Singly-linked list with a head pointer only.
//!
//! [`SinglyLinkedList`] is the reduced sibling of
//! [`DoublyLinkedList`](super::DoublyLinkedList): there is no tail pointer and
//! no backward link, so every splice is a predecessor scan followed by a single
//! forward relink. It is a separate container with a narrower contract, not a
//! view over the doubly-linked one.
//!
//! # Examples
//!
//! ```rust
//! use classic_structures::list::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! list.insert_head(3);
//! list.insert_head(1);
//! list.insert_after(2, &1).unwrap();
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//!
//! assert_eq!(list.delete_after(&1), Some(2));
//! assert_eq!(list.delete_head(), Some(1));
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![&3]);
//! ```

use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use crate::error::AnchorNotFound;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

/// A singly-linked list that owns its nodes front to back.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `insert_head`  | O(1)       |
/// | `insert_after` | O(n)       |
/// | `delete_head`  | O(1)       |
/// | `delete_after` | O(n)       |
/// | `delete_value` | O(n)       |
/// | `len`          | O(1)       |
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    length: usize,
}

static_assertions::assert_impl_all!(SinglyLinkedList<String>: Send, Sync);

impl<T> SinglyLinkedList<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
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

    /// Returns a reference to the first element.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Prepends `value` to the list.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn insert_head(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node {
            element: value,
            next,
        }));
        self.length += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = (1..=2).collect();
    /// assert_eq!(list.delete_head(), Some(1));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn delete_head(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.length -= 1;
            node.element
        })
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        while self.delete_head().is_some() {}
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Inserts `value` right after the first element equal to `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`AnchorNotFound`] carrying `value` when no element matches;
    /// the list is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = [1, 3].into_iter().collect();
    /// list.insert_after(2, &1).unwrap();
    /// assert!(list.insert_after(4, &9).is_err());
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn insert_after(&mut self, value: T, anchor: &T) -> Result<(), AnchorNotFound<T>> {
        let Some(node) = self.find_mut(anchor) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(length = self.length, "insert_after: anchor not found");
            return Err(AnchorNotFound(value));
        };
        let next = node.next.take();
        node.next = Some(Box::new(Node {
            element: value,
            next,
        }));
        self.length += 1;
        Ok(())
    }

    /// Removes the element following the first element equal to `anchor`.
    ///
    /// Returns `None` if the anchor is absent or is the last element.
    pub fn delete_after(&mut self, anchor: &T) -> Option<T> {
        let node = self.find_mut(anchor)?;
        let removed = *node.next.take()?;
        node.next = removed.next;
        self.length -= 1;
        Some(removed.element)
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = (1..=3).collect();
    /// assert_eq!(list.delete_value(&3), Some(3));
    /// assert_eq!(list.delete_value(&1), Some(1));
    /// assert_eq!(list.delete_value(&1), None);
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&2]);
    /// ```
    pub fn delete_value(&mut self, value: &T) -> Option<T> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.element != *value) {
            cursor = &mut cursor.as_mut()?.next;
        }
        let removed = *cursor.take()?;
        *cursor = removed.next;
        self.length -= 1;
        Some(removed.element)
    }

    /// Returns `true` if some element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|element| element == value)
    }

    fn find_mut(&mut self, value: &T) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if node.element == *value {
                return Some(node);
            }
            current = node.next.as_deref_mut();
        }
        None
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over elements of a [`SinglyLinkedList`].
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
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

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SinglyLinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    /// Builds a list with elements in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        while let Some(element) = elements.pop() {
            list.insert_head(element);
        }
        list
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
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
impl<T: serde::Serialize> serde::Serialize for SinglyLinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for SinglyLinkedList<T> {
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
