//! Ordered key-value map on an unbalanced binary search tree.
//!
//! This module provides [`Tree`], a mutable map whose entries are kept in the
//! order defined by a [`Comparator`] chosen at construction.
//!
//! # Overview
//!
//! The tree never rebalances. Every operation walks from the root along a
//! single path, so its cost is proportional to the height of the tree:
//!
//! - O(log N) on average for keys arriving in random order
//! - O(N) in the worst case, for example when keys arrive already sorted
//!
//! All descents are loops rather than recursive calls, and dropping the tree
//! frees nodes iteratively, so a list-shaped tree costs time but not stack.
//!
//! # Examples
//!
//! ```rust
//! use bstree::{NaturalOrder, Tree};
//!
//! let mut tree = Tree::new(NaturalOrder);
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key, key * 10);
//! }
//!
//! assert_eq!(tree.search(&4), Some(&40));
//! assert!(tree.delete(&5));
//! assert_eq!(tree.search(&5), None);
//! assert_eq!(format!("{tree:?}"), "{1: 10, 3: 30, 4: 40, 7: 70, 8: 80, 9: 90}");
//! ```
//!
//! # Deletion
//!
//! Removing a node with at most one child splices the child (or nothing) into
//! the link that owned the node. Removing a node with two children moves the
//! in-order successor's entry into the node and splices the successor out
//! instead; the successor has no left child, so that splice is always the
//! simple case.

mod error;
mod node;
mod policy;

pub use error::InvariantViolation;
pub use policy::EqualKeyPolicy;

use std::fmt;
use std::iter::FromIterator;
use std::mem;

use tracing::trace;

use crate::comparator::{Comparator, NaturalOrder};
use node::{Link, Node, Side, descend, descend_mut, dismantle, seek, take_leftmost};

// =============================================================================
// Tree Definition
// =============================================================================

/// A mutable ordered map backed by a plain binary search tree.
///
/// Keys are ordered by the comparator `C`, which is fixed for the lifetime of
/// the tree. The default, [`NaturalOrder`], uses the key's [`Ord`]
/// implementation.
///
/// # Time Complexity
///
/// | Operation         | Complexity |
/// |-------------------|------------|
/// | `new`             | O(1)       |
/// | `insert`          | O(h)       |
/// | `search`          | O(h)       |
/// | `delete`          | O(h)       |
/// | `len`/`is_empty`  | O(1)       |
/// | `height`          | O(N)       |
/// | `validate`        | O(N)       |
///
/// where `h` is the current height, between log₂ N and N.
///
/// # Examples
///
/// ```rust
/// use bstree::{ReverseOrder, Tree};
///
/// let mut tree = Tree::new(ReverseOrder);
/// tree.insert("b", 2);
/// tree.insert("a", 1);
/// tree.insert("c", 3);
///
/// assert_eq!(format!("{tree:?}"), r#"{"c": 3, "b": 2, "a": 1}"#);
/// ```
pub struct Tree<K, V, C = NaturalOrder> {
    /// Link owning the root node
    root: Link<K, V>,
    /// Ordering used by every descent
    comparator: C,
    /// Behavior of insert on an equal key
    policy: EqualKeyPolicy,
    /// Number of nodes
    length: usize,
}

impl<K, V, C> Tree<K, V, C> {
    /// Creates an empty tree ordered by `comparator`, replacing values on
    /// equal keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::{NaturalOrder, Tree};
    ///
    /// let tree: Tree<u32, String> = Tree::new(NaturalOrder);
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(comparator: C) -> Self {
        Self::with_policy(comparator, EqualKeyPolicy::Replace)
    }

    /// Creates an empty tree with an explicit [`EqualKeyPolicy`].
    #[inline]
    #[must_use]
    pub const fn with_policy(comparator: C, policy: EqualKeyPolicy) -> Self {
        Self {
            root: None,
            comparator,
            policy,
            length: 0,
        }
    }

    /// Returns the number of nodes in the tree.
    ///
    /// Under [`EqualKeyPolicy::BranchRight`] this counts every copy of a
    /// repeated key.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree has no root.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the comparator the tree was built with.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the equal-key policy the tree was built with.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> EqualKeyPolicy {
        self.policy
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// An empty tree has height 0 and a lone root has height 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::Tree;
    ///
    /// let sorted: Tree<i32, ()> = (0..10).map(|key| (key, ())).collect();
    /// assert_eq!(sorted.height(), 10);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node<K, V>, usize)> =
            self.root.as_deref().map(|node| (node, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left.as_deref().map(|child| (child, depth + 1)));
            pending.extend(node.right.as_deref().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Removes every entry, keeping the comparator and policy.
    pub fn clear(&mut self) {
        dismantle(self.root.take());
        self.length = 0;
    }

    /// Collects entries by in-order traversal.
    fn entries_in_order(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.length);
        let mut ancestors = Vec::new();
        let mut cursor = self.root.as_deref();
        loop {
            while let Some(node) = cursor {
                ancestors.push(node);
                cursor = node.left.as_deref();
            }
            let Some(node) = ancestors.pop() else {
                break;
            };
            entries.push((&node.key, &node.value));
            cursor = node.right.as_deref();
        }
        entries
    }
}

impl<K, V, C: Comparator<K>> Tree<K, V, C> {
    /// Inserts `value` under `key`.
    ///
    /// With the default [`EqualKeyPolicy::Replace`], an existing equal key has
    /// its value overwritten in place and the previous value is returned.
    /// Otherwise a new leaf is created at the first empty link on the search
    /// path and `None` is returned. An empty tree gets `key` as its root.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::{NaturalOrder, Tree};
    ///
    /// let mut tree = Tree::new(NaturalOrder);
    /// assert_eq!(tree.insert(1, "one"), None);
    /// assert_eq!(tree.insert(1, "ONE"), Some("one"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let comparator = &self.comparator;
        // Set when a BranchRight descent passes a node holding an equal key.
        let mut duplicate = false;
        let link = match self.policy {
            EqualKeyPolicy::Replace => descend_mut(&mut self.root, seek(comparator, &key)),
            EqualKeyPolicy::BranchRight => descend_mut(&mut self.root, |node| {
                if comparator.less(&key, &node.key) {
                    Some(Side::Left)
                } else {
                    duplicate |= comparator.equal(&key, &node.key);
                    Some(Side::Right)
                }
            }),
        };

        if let Some(node) = link {
            trace!(length = self.length, "bstree: replaced value in place");
            return Some(mem::replace(&mut node.value, value));
        }

        let created_root = self.length == 0;
        *link = Some(Node::leaf(key, value));
        self.length += 1;
        if created_root {
            trace!(length = self.length, "bstree: created root");
        } else if duplicate {
            trace!(length = self.length, "bstree: inserted duplicate key to the right");
        } else {
            trace!(length = self.length, "bstree: inserted new leaf");
        }
        None
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::{NaturalOrder, Tree};
    ///
    /// let mut tree = Tree::new(NaturalOrder);
    /// tree.insert("hello".to_string(), 42);
    ///
    /// assert_eq!(tree.search(&"hello".to_string()), Some(&42));
    /// assert_eq!(tree.search(&"world".to_string()), None);
    /// ```
    #[must_use]
    pub fn search(&self, key: &K) -> Option<&V> {
        descend(&self.root, seek(&self.comparator, key))
            .as_deref()
            .map(|node| &node.value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::{NaturalOrder, Tree};
    ///
    /// let mut tree = Tree::new(NaturalOrder);
    /// tree.insert(7, vec![1]);
    /// if let Some(values) = tree.search_mut(&7) {
    ///     values.push(2);
    /// }
    /// assert_eq!(tree.search(&7), Some(&vec![1, 2]));
    /// ```
    #[must_use]
    pub fn search_mut(&mut self, key: &K) -> Option<&mut V> {
        descend_mut(&mut self.root, seek(&self.comparator, key))
            .as_deref_mut()
            .map(|node| &mut node.value)
    }

    /// Returns `true` if a node holds a key equal to `key`.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Removes the entry stored under `key`.
    ///
    /// Returns `false`, leaving the tree untouched, when no such entry exists.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::{NaturalOrder, Tree};
    ///
    /// let mut tree = Tree::new(NaturalOrder);
    /// tree.insert(10, "x");
    ///
    /// assert!(tree.delete(&10));
    /// assert!(tree.is_empty());
    /// assert!(!tree.delete(&10));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes the entry stored under `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry stored under `key` and returns the stored key and value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::{NaturalOrder, Tree};
    ///
    /// let mut tree = Tree::new(NaturalOrder);
    /// tree.insert(2, "two");
    /// assert_eq!(tree.remove_entry(&2), Some((2, "two")));
    /// assert_eq!(tree.remove_entry(&2), None);
    /// ```
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let link = descend_mut(&mut self.root, seek(&self.comparator, key));
        let target = link.as_deref_mut()?;

        let entry = if target.left.is_some() && target.right.is_some() {
            // The target keeps its place and left subtree; the successor node
            // is the one unlinked. `target.right` is occupied here, so the `?`
            // never fires.
            let successor = take_leftmost(&mut target.right)?;
            let Node {
                key: successor_key,
                value: successor_value,
                ..
            } = *successor;
            trace!(length = self.length, "bstree: removed node with two children via successor");
            (
                mem::replace(&mut target.key, successor_key),
                mem::replace(&mut target.value, successor_value),
            )
        } else {
            let mut target = link.take()?;
            *link = match target.take_children() {
                (None, None) => {
                    trace!(length = self.length, "bstree: removed leaf");
                    None
                }
                (Some(child), _) | (_, Some(child)) => {
                    trace!(length = self.length, "bstree: removed node with one child");
                    Some(child)
                }
            };
            (target.key, target.value)
        };

        self.length -= 1;
        Some(entry)
    }

    /// Checks the ordering, uniqueness and length invariants.
    ///
    /// Every key in a left subtree must be less than its ancestor's key and
    /// every key in a right subtree must be neither less than nor equal to it.
    /// Returns the first violation found.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] describing the first broken rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::Tree;
    ///
    /// let tree: Tree<i32, &str> = [(2, "b"), (1, "a"), (3, "c")].into_iter().collect();
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        struct Frame<'a, K, V> {
            node: &'a Node<K, V>,
            lower: Option<&'a K>,
            upper: Option<&'a K>,
            depth: usize,
        }

        let mut pending: Vec<Frame<'_, K, V>> = self
            .root
            .as_deref()
            .map(|node| Frame {
                node,
                lower: None,
                upper: None,
                depth: 0,
            })
            .into_iter()
            .collect();
        let mut counted = 0;

        while let Some(Frame {
            node,
            lower,
            upper,
            depth,
        }) = pending.pop()
        {
            counted += 1;

            if let Some(lower) = lower {
                if self.comparator.equal(&node.key, lower) {
                    return Err(InvariantViolation::DuplicateKey { depth });
                }
                if self.comparator.less(&node.key, lower) {
                    return Err(InvariantViolation::Ordering { depth });
                }
            }
            if let Some(upper) = upper {
                if self.comparator.equal(&node.key, upper) {
                    return Err(InvariantViolation::DuplicateKey { depth });
                }
                if !self.comparator.less(&node.key, upper) {
                    return Err(InvariantViolation::Ordering { depth });
                }
            }

            if let Some(left) = node.left.as_deref() {
                pending.push(Frame {
                    node: left,
                    lower,
                    upper: Some(&node.key),
                    depth: depth + 1,
                });
            }
            if let Some(right) = node.right.as_deref() {
                pending.push(Frame {
                    node: right,
                    lower: Some(&node.key),
                    upper,
                    depth: depth + 1,
                });
            }
        }

        if counted == self.length {
            Ok(())
        } else {
            Err(InvariantViolation::LengthMismatch {
                recorded: self.length,
                counted,
            })
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<K, V, C> Drop for Tree<K, V, C> {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

impl<K: Ord, V> Default for Tree<K, V, NaturalOrder> {
    fn default() -> Self {
        Self::new(NaturalOrder)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Tree<K, V, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for Tree<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Tree<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries_in_order()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
