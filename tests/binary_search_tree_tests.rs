//! Integration tests for BinarySearchTree.

use classic_structures::tree::BinarySearchTree;
use rstest::rstest;

fn contents(tree: &BinarySearchTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

#[rstest]
fn test_scripted_inserts_skip_duplicate() {
    let mut tree = BinarySearchTree::new();
    let inserted: Vec<bool> = [7, 9, 3, 3, 5, 11, 8]
        .into_iter()
        .map(|value| tree.insert(value))
        .collect();
    assert_eq!(inserted, vec![true, true, true, false, true, true, true]);
    assert_eq!(contents(&tree), vec![3, 5, 7, 8, 9, 11]);
    assert_eq!(tree.len(), 6);
}

#[rstest]
fn test_contains_follows_ordering() {
    let tree: BinarySearchTree<i32> = [7, 9, 3, 5, 11, 8].into_iter().collect();
    for value in [3, 5, 7, 8, 9, 11] {
        assert!(tree.contains(&value));
    }
    for value in [0, 4, 6, 10, 12] {
        assert!(!tree.contains(&value));
    }
}

#[rstest]
fn test_min_and_max() {
    let tree: BinarySearchTree<i32> = [7, 9, 3, 5, 11, 8].into_iter().collect();
    assert_eq!(tree.min(), Some(&3));
    assert_eq!(tree.max(), Some(&11));
}

#[rstest]
#[case(vec![4, 2, 6, 1, 3, 5, 7], 3)]
#[case(vec![1, 2, 3, 4], 4)]
#[case(vec![4, 3, 2, 1], 4)]
#[case(vec![1], 1)]
fn test_height_depends_on_insertion_order(#[case] values: Vec<i32>, #[case] expected: usize) {
    let tree: BinarySearchTree<i32> = values.into_iter().collect();
    assert_eq!(tree.height(), expected);
}

#[rstest]
fn test_remove_all_values_in_insertion_order() {
    let values = [50, 30, 70, 20, 40, 60, 80, 35, 45, 65];
    let mut tree: BinarySearchTree<i32> = values.into_iter().collect();
    for (removed, value) in values.iter().enumerate() {
        assert_eq!(tree.remove(value), Some(*value));
        assert_eq!(tree.len(), values.len() - removed - 1);
        let remaining = contents(&tree);
        assert!(remaining.windows(2).all(|pair| pair[0] < pair[1]));
    }
    assert!(tree.is_empty());
}

#[rstest]
fn test_strings_sort_lexicographically() {
    let tree: BinarySearchTree<&str> = ["pear", "apple", "fig", "apple"].into_iter().collect();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec!["apple", "fig", "pear"]);
}

#[rstest]
fn test_into_iter_is_ascending() {
    let tree: BinarySearchTree<i32> = [5, 1, 4, 2, 3].into_iter().collect();
    assert_eq!(tree.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_equality_is_by_contents_not_shape() {
    let left: BinarySearchTree<i32> = [1, 2, 3].into_iter().collect();
    let right: BinarySearchTree<i32> = [2, 1, 3].into_iter().collect();
    assert_ne!(left.height(), right.height());
    assert_eq!(left, right);
}

#[rstest]
fn test_clear_then_reuse() {
    let mut tree: BinarySearchTree<i32> = (0..10).collect();
    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.insert(3));
    assert_eq!(contents(&tree), vec![3]);
}
