//! What [`Tree::insert`](super::Tree::insert) does with a key that is already present.

/// Handling of an inserted key that compares equal to an existing key.
///
/// # Examples
///
/// ```rust
/// use bstree::{EqualKeyPolicy, NaturalOrder, Tree};
///
/// let mut tree = Tree::with_policy(NaturalOrder, EqualKeyPolicy::BranchRight);
/// tree.insert(1, "first");
/// tree.insert(1, "second");
///
/// // Both nodes exist; lookups stop at the shallower one.
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.search(&1), Some(&"first"));
/// assert!(tree.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EqualKeyPolicy {
    /// Overwrite the existing node's value in place. Keys stay unique.
    #[default]
    Replace,
    /// Treat an equal key like a greater one and keep descending right, so a
    /// second node is created below the first.
    ///
    /// This reproduces the placement rule `if less { left } else { right }`
    /// without an equality check. It breaks key uniqueness: the newer value is
    /// shadowed by the older node on every lookup, and a delete removes one
    /// copy at a time.
    BranchRight,
}
