//! A [`Tree`] that can be shared between threads.
//!
//! [`Tree`] itself takes `&mut self` for every change and has no internal
//! locking. [`SharedTree`] wraps one tree in a single
//! [`parking_lot::RwLock`] behind an [`Arc`], so clones of the handle can be
//! moved to other threads. Lookups take the read lock and may run in
//! parallel; inserts and deletes take the write lock.
//!
//! # Examples
//!
//! ```rust
//! use bstree::sync::SharedTree;
//! use std::thread;
//!
//! let tree = SharedTree::default();
//! let handles: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let tree = tree.clone();
//!         thread::spawn(move || {
//!             for key in 0..25 {
//!                 tree.insert(worker * 100 + key, worker);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(tree.len(), 100);
//! assert_eq!(tree.search(&301), Some(3));
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::comparator::{Comparator, NaturalOrder};
use crate::tree::{EqualKeyPolicy, InvariantViolation, Tree};

/// Cloneable, lock-guarded handle to a [`Tree`].
///
/// Every clone refers to the same tree.
pub struct SharedTree<K, V, C = NaturalOrder> {
    inner: Arc<RwLock<Tree<K, V, C>>>,
}

impl<K, V, C> SharedTree<K, V, C> {
    /// Creates an empty shared tree ordered by `comparator`.
    #[must_use]
    pub fn new(comparator: C) -> Self {
        Self::from_tree(Tree::new(comparator))
    }

    /// Creates an empty shared tree with an explicit [`EqualKeyPolicy`].
    #[must_use]
    pub fn with_policy(comparator: C, policy: EqualKeyPolicy) -> Self {
        Self::from_tree(Tree::with_policy(comparator, policy))
    }

    /// Takes ownership of an existing tree.
    #[must_use]
    pub fn from_tree(tree: Tree<K, V, C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Acquires the read lock for several lookups under one guard.
    pub fn read(&self) -> RwLockReadGuard<'_, Tree<K, V, C>> {
        self.inner.read()
    }

    /// Acquires the write lock for a sequence of changes that must not
    /// interleave with other writers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::sync::SharedTree;
    ///
    /// let tree = SharedTree::default();
    /// {
    ///     let mut guard = tree.write();
    ///     guard.insert(1, "one");
    ///     guard.insert(2, "two");
    /// }
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn write(&self) -> RwLockWriteGuard<'_, Tree<K, V, C>> {
        self.inner.write()
    }
}

impl<K, V, C: Comparator<K>> SharedTree<K, V, C> {
    /// Inserts under the write lock. See [`Tree::insert`].
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    /// Returns a clone of the value stored under `key`.
    #[must_use]
    pub fn search(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read().search(key).cloned()
    }

    /// Runs `function` on the value stored under `key` while holding the read lock.
    pub fn with_value<R, F>(&self, key: &K, function: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        self.inner.read().search(key).map(function)
    }

    /// Returns `true` if an entry exists under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }

    /// Deletes under the write lock. See [`Tree::delete`].
    pub fn delete(&self, key: &K) -> bool {
        self.inner.write().delete(key)
    }

    /// Removes under the write lock and returns the value. See [`Tree::remove`].
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().remove(key)
    }

    /// Validates the tree under the read lock. See [`Tree::validate`].
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.inner.read().validate()
    }
}

impl<K, V, C> Clone for SharedTree<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Ord, V> Default for SharedTree<K, V, NaturalOrder> {
    fn default() -> Self {
        Self::new(NaturalOrder)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for SharedTree<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("SharedTree")
            .field(&*self.inner.read())
            .finish()
    }
}
