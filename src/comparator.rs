//! Key ordering supplied to a [`Tree`](crate::Tree) at construction.
//!
//! A [`Comparator`] answers two questions about a pair of keys: is the first
//! strictly less than the second, and are they equal. Every structural
//! operation on the tree branches on these answers, so the implementation must
//! describe a total order:
//!
//! - `less` is irreflexive and transitive
//! - `equal(a, b)` implies `!less(a, b) && !less(b, a)`
//! - for any `a` and `b`, exactly one of `less(a, b)`, `equal(a, b)`,
//!   `less(b, a)` holds
//!
//! A comparator that breaks these rules does not cause undefined behavior in
//! the Rust sense, but entries may be misplaced or become unreachable.
//! [`Tree::validate`](crate::Tree::validate) can detect the damage after the
//! fact.
//!
//! # Examples
//!
//! ```rust
//! use bstree::{Comparator, FnComparator, NaturalOrder, ReverseOrder};
//!
//! assert!(NaturalOrder.less(&1, &2));
//! assert!(ReverseOrder.less(&2, &1));
//!
//! let by_length = FnComparator::new(|left: &&str, right: &&str| left.len().cmp(&right.len()));
//! assert!(by_length.equal(&"abc", &"xyz"));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Total order over keys of type `K`.
///
/// Only [`less`](Comparator::less) and [`equal`](Comparator::equal) are
/// required. [`compare`](Comparator::compare) combines them into an
/// [`Ordering`] and is what the tree actually calls while descending.
pub trait Comparator<K: ?Sized> {
    /// Returns `true` if `left` sorts strictly before `right`.
    fn less(&self, left: &K, right: &K) -> bool;

    /// Returns `true` if `left` and `right` occupy the same position in the order.
    fn equal(&self, left: &K, right: &K) -> bool;

    /// Three-way comparison derived from `equal` and `less`.
    ///
    /// `equal` is consulted first, so a key equal to a node's key is never
    /// mistaken for a greater one.
    fn compare(&self, left: &K, right: &K) -> Ordering {
        if self.equal(left, right) {
            Ordering::Equal
        } else if self.less(left, right) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl<K: ?Sized, C: Comparator<K> + ?Sized> Comparator<K> for &C {
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        (**self).less(left, right)
    }

    #[inline]
    fn equal(&self, left: &K, right: &K) -> bool {
        (**self).equal(left, right)
    }

    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (**self).compare(left, right)
    }
}

// =============================================================================
// NaturalOrder
// =============================================================================

/// Ascending order given by the key's [`Ord`] implementation.
///
/// # Examples
///
/// ```rust
/// use bstree::{Comparator, NaturalOrder};
///
/// assert!(NaturalOrder.less(&"apple", &"banana"));
/// assert!(NaturalOrder.equal(&7, &7));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        left < right
    }

    #[inline]
    fn equal(&self, left: &K, right: &K) -> bool {
        left == right
    }

    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

// =============================================================================
// ReverseOrder
// =============================================================================

/// Descending order, the mirror image of [`NaturalOrder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<K: Ord + ?Sized> Comparator<K> for ReverseOrder {
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        left > right
    }

    #[inline]
    fn equal(&self, left: &K, right: &K) -> bool {
        left == right
    }

    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        right.cmp(left)
    }
}

// =============================================================================
// FnComparator
// =============================================================================

/// Adapts a three-way comparison closure into a [`Comparator`].
///
/// Useful for ordering by a projection of the key, or for key types that do
/// not implement [`Ord`] (such as `f64` via [`f64::total_cmp`]).
///
/// # Examples
///
/// ```rust
/// use bstree::{FnComparator, Tree};
///
/// let mut tree = Tree::new(FnComparator::new(|left: &f64, right: &f64| left.total_cmp(right)));
/// tree.insert(2.5, "b");
/// tree.insert(-1.0, "a");
/// assert_eq!(tree.search(&-1.0), Some(&"a"));
/// ```
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    function: F,
}

impl<F> FnComparator<F> {
    /// Wraps `function`, which must describe a total order.
    #[inline]
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<K: ?Sized, F> Comparator<K> for FnComparator<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        (self.function)(left, right) == Ordering::Less
    }

    #[inline]
    fn equal(&self, left: &K, right: &K) -> bool {
        (self.function)(left, right) == Ordering::Equal
    }

    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (self.function)(left, right)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FnComparator(..)")
    }
}

// =============================================================================
// Tests
// =============================================================================
