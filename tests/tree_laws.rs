//! Property-based tests for Tree.
//!
//! These tests check the tree against `BTreeMap` as a model and verify the
//! structural invariants after arbitrary sequences of operations.

use bstree::{EqualKeyPolicy, NaturalOrder, ReverseOrder, Tree};
use proptest::prelude::*;
use std::collections::BTreeMap;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

#[derive(Debug, Clone)]
enum Operation {
    Insert(i16, i32),
    Delete(i16),
}

/// Small key range so that deletes and overwrites hit existing keys often.
fn arbitrary_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (-64_i16..64, any::<i32>()).prop_map(|(key, value)| Operation::Insert(key, value)),
        2 => (-64_i16..64).prop_map(Operation::Delete),
    ]
}

fn arbitrary_tree(max_size: usize) -> impl Strategy<Value = Tree<i16, i32>> {
    prop::collection::vec((any::<i16>(), any::<i32>()), 0..max_size)
        .prop_map(|entries| entries.into_iter().collect::<Tree<i16, i32>>())
}

// =============================================================================
// Model Laws
// =============================================================================

proptest! {
    /// Law: any sequence of inserts and deletes agrees with BTreeMap.
    #[test]
    fn prop_matches_btreemap_model(operations in prop::collection::vec(arbitrary_operation(), 0..200)) {
        let mut tree = Tree::new(NaturalOrder);
        let mut model = BTreeMap::new();

        for operation in operations {
            match operation {
                Operation::Insert(key, value) => {
                    prop_assert_eq!(tree.insert(key, value), model.insert(key, value));
                }
                Operation::Delete(key) => {
                    prop_assert_eq!(tree.delete(&key), model.remove(&key).is_some());
                }
            }
            prop_assert_eq!(tree.len(), model.len());
        }

        prop_assert_eq!(tree.validate(), Ok(()));
        for key in -64_i16..64 {
            prop_assert_eq!(tree.search(&key), model.get(&key));
        }
        prop_assert_eq!(format!("{tree:?}"), format!("{model:?}"));
    }

    /// Law: in-order output is strictly ascending after every step.
    #[test]
    fn prop_ordering_invariant_holds_after_each_step(operations in prop::collection::vec(arbitrary_operation(), 0..100)) {
        let mut tree = Tree::new(NaturalOrder);
        for operation in operations {
            match operation {
                Operation::Insert(key, value) => {
                    tree.insert(key, value);
                }
                Operation::Delete(key) => {
                    tree.delete(&key);
                }
            }
            prop_assert_eq!(tree.validate(), Ok(()));
        }
    }
}

// =============================================================================
// Search-Insert Laws
// =============================================================================

proptest! {
    /// Law: search after insert returns the inserted value.
    /// tree.insert(key, value); tree.search(&key) == Some(&value)
    #[test]
    fn prop_search_insert_law(tree in arbitrary_tree(50), key: i16, value: i32) {
        let mut tree = tree;
        tree.insert(key, value);
        prop_assert_eq!(tree.search(&key), Some(&value));
    }

    /// Law: insert does not affect other keys.
    #[test]
    fn prop_search_insert_other_law(tree in arbitrary_tree(50), key1: i16, key2: i16, value: i32) {
        let mut tree = tree;
        prop_assume!(key1 != key2);
        let before = tree.search(&key2).copied();
        tree.insert(key1, value);
        prop_assert_eq!(tree.search(&key2).copied(), before);
    }

    /// Law: inserting an existing key twice keeps one entry; the second value wins.
    #[test]
    fn prop_upsert_law(tree in arbitrary_tree(50), key: i16, first: i32, second: i32) {
        let mut tree = tree;
        tree.insert(key, first);
        let length = tree.len();
        prop_assert_eq!(tree.insert(key, second), Some(first));
        prop_assert_eq!(tree.len(), length);
        prop_assert_eq!(tree.search(&key), Some(&second));
    }
}

// =============================================================================
// Delete Laws
// =============================================================================

proptest! {
    /// Law: search after delete returns None.
    #[test]
    fn prop_search_delete_law(tree in arbitrary_tree(50), key: i16) {
        let mut tree = tree;
        tree.delete(&key);
        prop_assert_eq!(tree.search(&key), None);
    }

    /// Law: delete does not affect other keys.
    #[test]
    fn prop_search_delete_other_law(tree in arbitrary_tree(50), key1: i16, key2: i16) {
        let mut tree = tree;
        prop_assume!(key1 != key2);
        let before = tree.search(&key2).copied();
        tree.delete(&key1);
        prop_assert_eq!(tree.search(&key2).copied(), before);
    }

    /// Law: deleting every inserted key empties the tree.
    #[test]
    fn prop_delete_all_law(entries in prop::collection::vec((any::<i16>(), any::<i32>()), 0..50)) {
        let mut tree: Tree<i16, i32> = entries.iter().copied().collect();
        for (key, _) in &entries {
            tree.delete(key);
            prop_assert_eq!(tree.validate(), Ok(()));
        }
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.height(), 0);
    }

    /// Law: deleting an absent key leaves the tree unchanged.
    #[test]
    fn prop_delete_absent_law(tree in arbitrary_tree(50), key: i16) {
        let mut tree = tree;
        prop_assume!(!tree.contains_key(&key));
        let before = format!("{tree:?}");
        let height = tree.height();
        prop_assert!(!tree.delete(&key));
        prop_assert_eq!(format!("{tree:?}"), before);
        prop_assert_eq!(tree.height(), height);
    }
}

// =============================================================================
// Shape Laws
// =============================================================================

proptest! {
    /// Law: height lies between log2 of the node count and the node count.
    #[test]
    fn prop_height_bounds(tree in arbitrary_tree(100)) {
        let length = tree.len();
        let height = tree.height();
        prop_assert!(height <= length);
        // A tree of height h holds at most 2^h - 1 nodes.
        prop_assert!(length < 1_usize << height.min(63) || length == 0);
    }

    /// Law: a reverse-ordered tree lists keys in descending order.
    #[test]
    fn prop_reverse_order_descends(entries in prop::collection::vec((any::<i16>(), any::<i32>()), 0..50)) {
        let mut tree = Tree::new(ReverseOrder);
        tree.extend(entries.iter().copied());
        let model: BTreeMap<std::cmp::Reverse<i16>, i32> = entries
            .into_iter()
            .map(|(key, value)| (std::cmp::Reverse(key), value))
            .collect();

        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(tree.validate(), Ok(()));
        for (std::cmp::Reverse(key), value) in &model {
            prop_assert_eq!(tree.search(key), Some(value));
        }
        let descending = model
            .iter()
            .map(|(std::cmp::Reverse(key), value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(format!("{tree:?}"), format!("{{{descending}}}"));
    }

    /// Law: under BranchRight every insert adds a node, and searches see the
    /// value inserted first for each key.
    #[test]
    fn prop_branch_right_keeps_first_value(entries in prop::collection::vec((-8_i16..8, any::<i32>()), 0..40)) {
        let mut tree = Tree::with_policy(NaturalOrder, EqualKeyPolicy::BranchRight);
        let mut first_seen = BTreeMap::new();
        for (key, value) in &entries {
            prop_assert_eq!(tree.insert(*key, *value), None);
            first_seen.entry(*key).or_insert(*value);
        }

        prop_assert_eq!(tree.len(), entries.len());
        for (key, value) in &first_seen {
            prop_assert_eq!(tree.search(key), Some(value));
        }
        if first_seen.len() == entries.len() {
            prop_assert_eq!(tree.validate(), Ok(()));
        } else {
            prop_assert!(tree.validate().is_err());
        }
    }
}
