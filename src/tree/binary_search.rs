//! Unbalanced binary search tree.
//!
//! [`BinarySearchTree`] keeps distinct values ordered: every value in a node's
//! left subtree is strictly less than the node, every value in its right
//! subtree strictly greater. Inserting a value that is already present does
//! nothing.
//!
//! All operations are O(height). Height is O(log n) for random insertion
//! order and O(n) for sorted input; the tree never rebalances.
//!
//! Insertion, lookup, removal, traversal and drop all walk the tree with loops
//! and explicit stacks, so a degenerate (list-shaped) tree cannot overflow the
//! call stack.
//!
//! # Examples
//!
//! ```rust
//! use classic_structures::tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! for value in [7, 9, 3, 3, 5, 11, 8] {
//!     tree.insert(value);
//! }
//! let sorted: Vec<i32> = tree.traverse_in_order().copied().collect();
//! assert_eq!(sorted, vec![3, 5, 7, 8, 9, 11]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::mem;

use smallvec::SmallVec;

/// Inline capacity of the traversal stack; deeper trees spill to the heap.
const INLINE_DEPTH: usize = 16;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    const fn leaf(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }
}

/// An unbalanced binary search tree of distinct values.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `insert`   | O(h)       |
/// | `contains` | O(h)       |
/// | `remove`   | O(h)       |
/// | `min`/`max`| O(h)       |
/// | `len`      | O(1)       |
/// | `height`   | O(n)       |
///
/// where h is the height of the tree.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    length: usize,
}

static_assertions::assert_impl_all!(BinarySearchTree<u64>: Send, Sync);

impl<T> BinarySearchTree<T> {
    /// Creates a new empty tree.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of values in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree holds no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path; `0` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::tree::BinarySearchTree;
    ///
    /// let balanced: BinarySearchTree<i32> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(balanced.height(), 2);
    ///
    /// let degenerate: BinarySearchTree<i32> = (1..=5).collect();
    /// assert_eq!(degenerate.height(), 5);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            tallest = tallest.max(depth);
            pending.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            pending.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        tallest
    }

    /// Returns the smallest value.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.element)
    }

    /// Returns the largest value.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.element)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        release(self.root.take().into_iter().collect());
        self.length = 0;
    }

    /// Returns an iterator over the values in ascending order.
    ///
    /// The traversal visits the left subtree, then the node, then the right
    /// subtree. It is lazy and can be restarted by calling this method again.
    #[must_use]
    pub fn traverse_in_order(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: SmallVec::new(),
            remaining: self.length,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Alias for [`traverse_in_order`](Self::traverse_in_order).
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.traverse_in_order()
    }

    /// Nodes in pre-order (node, left, right). Re-inserting them reproduces
    /// the exact shape of the tree.
    fn pre_order(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.length);
        let mut pending: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            visited.push(&node.element);
            pending.extend(node.right.as_deref());
            pending.extend(node.left.as_deref());
        }
        visited
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value`, returning `false` if an equal value was already present.
    ///
    /// Duplicates are discarded; the tree is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(3));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.element) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *cursor = Some(Box::new(Node::leaf(value)));
        self.length += 1;
        true
    }

    /// Returns `true` if the tree holds a value equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.element) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Removes the value equal to `value` and returns it.
    ///
    /// A leaf is dropped, a node with one child is replaced by that child,
    /// and a node with two children takes the value of its in-order successor,
    /// which is unlinked from the right subtree instead. Returns `None` if no
    /// value matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classic_structures::tree::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<i32> = [5, 3, 8, 7, 9].into_iter().collect();
    /// assert_eq!(tree.remove(&8), Some(8));
    /// assert_eq!(tree.remove(&8), None);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 5, 7, 9]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut cursor = &mut self.root;
        loop {
            let ordering = value.cmp(&cursor.as_deref()?.element);
            cursor = match ordering {
                Ordering::Less => &mut cursor.as_mut()?.left,
                Ordering::Greater => &mut cursor.as_mut()?.right,
                Ordering::Equal => break,
            };
        }

        let node = cursor.as_mut()?;
        let removed = if node.left.is_some() && node.right.is_some() {
            let successor = detach_min(&mut node.right)?;
            mem::replace(&mut node.element, successor)
        } else {
            let node = *cursor.take()?;
            *cursor = node.left.or(node.right);
            node.element
        };
        self.length -= 1;
        Some(removed)
    }
}

/// Unlinks the leftmost node under `link`, splicing its right child into its
/// place.
fn detach_min<T>(link: &mut Link<T>) -> Option<T> {
    let mut cursor = link;
    while cursor.as_ref().is_some_and(|node| node.left.is_some()) {
        cursor = &mut cursor.as_mut()?.left;
    }
    let node = *cursor.take()?;
    *cursor = node.right;
    Some(node.element)
}

/// Drops a forest one node at a time.
fn release<T>(mut pending: Vec<Box<Node<T>>>) {
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        release(self.root.take().into_iter().collect());
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An in-order iterator over references to values of a [`BinarySearchTree`].
pub struct Iter<'a, T> {
    stack: SmallVec<[&'a Node<T>; INLINE_DEPTH]>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// An owning in-order iterator over values of a [`BinarySearchTree`].
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut current: Link<T>) {
        while let Some(mut node) = current {
            current = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        release(mem::take(&mut self.stack));
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for BinarySearchTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> IntoIterator for BinarySearchTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.length,
        };
        iter.push_left_spine(self.root.take());
        iter
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        self.pre_order().into_iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    /// Trees are equal when they hold the same values, whatever their shape.
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
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
impl<T: serde::Serialize> serde::Serialize for BinarySearchTree<T> {
    /// Serializes the values as an ascending sequence.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for BinarySearchTree<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    /// Re-inserts the values in sequence order; duplicates collapse.
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

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    /// Checks the ordering invariant on every node against the bounds
    /// inherited from its ancestors.
    fn is_search_tree<T: Ord>(tree: &BinarySearchTree<T>) -> bool {
        let mut pending: Vec<(&Node<T>, Option<&T>, Option<&T>)> = tree
            .root
            .as_deref()
            .map(|root| (root, None, None))
            .into_iter()
            .collect();
        let mut count = 0;
        while let Some((node, lower, upper)) = pending.pop() {
            if lower.is_some_and(|lower| node.element <= *lower)
                || upper.is_some_and(|upper| node.element >= *upper)
            {
                return false;
            }
            count += 1;
            if let Some(left) = node.left.as_deref() {
                pending.push((left, lower, Some(&node.element)));
            }
            if let Some(right) = node.right.as_deref() {
                pending.push((right, Some(&node.element), upper));
            }
        }
        count == tree.length
    }

    fn collect(tree: &BinarySearchTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[rstest]
    fn test_display() {
        let tree: BinarySearchTree<i32> = [2, 1, 3].into_iter().collect();
        assert_eq!(format!("{tree}"), "[1, 2, 3]");
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    }

    #[rstest]
    fn test_empty_tree() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[rstest]
    fn test_duplicates_are_discarded() {
        let mut tree = BinarySearchTree::new();
        for value in [7, 9, 3, 3, 5, 11, 8] {
            tree.insert(value);
        }
        assert_eq!(collect(&tree), vec![3, 5, 7, 8, 9, 11]);
        assert_eq!(tree.len(), 6);
        assert!(is_search_tree(&tree));
    }

    #[rstest]
    fn test_traversal_is_restartable() {
        let tree: BinarySearchTree<i32> = [4, 2, 6].into_iter().collect();
        let first: Vec<_> = tree.traverse_in_order().collect();
        let second: Vec<_> = tree.traverse_in_order().collect();
        assert_eq!(first, second);
    }

    #[rstest]
    #[case::leaf(9, vec![1, 3, 5, 7, 8])]
    #[case::one_child(3, vec![1, 5, 7, 8, 9])]
    #[case::two_children(8, vec![1, 3, 5, 7, 9])]
    #[case::root(5, vec![1, 3, 7, 8, 9])]
    fn test_remove_cases(#[case] target: i32, #[case] expected: Vec<i32>) {
        let mut tree: BinarySearchTree<i32> = [5, 3, 8, 7, 9, 1].into_iter().collect();
        assert_eq!(tree.remove(&target), Some(target));
        assert_eq!(collect(&tree), expected);
        assert_eq!(tree.len(), 5);
        assert!(is_search_tree(&tree));
    }

    #[rstest]
    fn test_remove_root_with_two_children_uses_successor() {
        let mut tree: BinarySearchTree<i32> = [5, 3, 8, 7, 9].into_iter().collect();
        tree.remove(&5);
        assert_eq!(tree.root.as_ref().map(|root| root.element), Some(7));
    }

    #[rstest]
    fn test_remove_missing_value() {
        let mut tree: BinarySearchTree<i32> = [2, 1].into_iter().collect();
        assert_eq!(tree.remove(&5), None);
        assert_eq!(tree.len(), 2);
    }

    #[rstest]
    fn test_sorted_input_degenerates_without_overflow() {
        let tree: BinarySearchTree<u32> = (0..100_000).collect();
        assert_eq!(tree.height(), 100_000);
        assert_eq!(tree.iter().count(), 100_000);
        assert_eq!(tree.max(), Some(&99_999));
        drop(tree);
    }

    #[rstest]
    fn test_clone_preserves_shape() {
        let tree: BinarySearchTree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
        let copy = tree.clone();
        assert_eq!(copy.height(), tree.height());
        assert_eq!(copy.pre_order(), tree.pre_order());
    }

    #[rstest]
    fn test_into_iter_partially_consumed() {
        let tree: BinarySearchTree<String> =
            ["b", "a", "c"].into_iter().map(String::from).collect();
        let mut iter = tree.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().as_deref(), Some("a"));
        drop(iter);
    }

    proptest! {
        #[test]
        fn prop_invariant_holds_after_inserts_and_removes(
            inserts in prop::collection::vec(0i32..64, 0..48),
            removes in prop::collection::vec(0i32..64, 0..24),
        ) {
            let mut tree: BinarySearchTree<i32> = inserts.iter().copied().collect();
            for value in &removes {
                tree.remove(value);
                prop_assert!(is_search_tree(&tree));
            }
            let mut expected: Vec<i32> = inserts;
            expected.sort_unstable();
            expected.dedup();
            expected.retain(|value| !removes.contains(value));
            prop_assert_eq!(collect(&tree), expected);
        }
    }
}
