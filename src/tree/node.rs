//! Owned tree nodes and the link cursor helpers used by every descent.

use std::cmp::Ordering;

use crate::comparator::Comparator;

/// An owning edge of the tree: either empty or the sole owner of a subtree.
pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Internal node structure for the binary search tree.
pub(super) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a boxed node with no children.
    pub(super) fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    /// Returns the child link on the given side.
    pub(super) const fn child(&self, side: Side) -> &Link<K, V> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Returns the child link on the given side, mutably.
    pub(super) const fn child_mut(&mut self, side: Side) -> &mut Link<K, V> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Detaches both children, leaving the node as a leaf.
    pub(super) const fn take_children(&mut self) -> (Link<K, V>, Link<K, V>) {
        (self.left.take(), self.right.take())
    }
}

/// Which child a descent continues into.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Side {
    Left,
    Right,
}

impl Side {
    /// Picks the side for `ordering`, the result of comparing a sought key
    /// against a node's key. `Equal` has no side.
    pub(super) const fn of(ordering: Ordering) -> Option<Self> {
        match ordering {
            Ordering::Less => Some(Self::Left),
            Ordering::Greater => Some(Self::Right),
            Ordering::Equal => None,
        }
    }
}

/// Walks down from `link` while `step` names a side, and returns the link at
/// which it stopped: either an empty link, or the link owning the node for
/// which `step` returned `None`.
///
/// The returned link is what a parent pointer would give access to, so the
/// caller can replace whatever it owns, including the root.
pub(super) fn descend_mut<'a, K, V, F>(mut link: &'a mut Link<K, V>, mut step: F) -> &'a mut Link<K, V>
where
    F: FnMut(&Node<K, V>) -> Option<Side>,
{
    while let Some(side) = link.as_deref().and_then(&mut step) {
        match link {
            Some(node) => link = node.child_mut(side),
            None => break,
        }
    }
    link
}

/// Read-only counterpart of [`descend_mut`].
pub(super) fn descend<'a, K, V, F>(mut link: &'a Link<K, V>, mut step: F) -> &'a Link<K, V>
where
    F: FnMut(&Node<K, V>) -> Option<Side>,
{
    while let Some(node) = link.as_deref() {
        match step(node) {
            Some(side) => link = node.child(side),
            None => break,
        }
    }
    link
}

/// Descent rule for lookups: stop at an equal key, otherwise branch.
pub(super) fn seek<'k, K, V, C>(comparator: &'k C, key: &'k K) -> impl FnMut(&Node<K, V>) -> Option<Side>
where
    C: Comparator<K>,
{
    move |node| Side::of(comparator.compare(key, &node.key))
}

/// Unlinks the leftmost node of the subtree owned by `link` and returns it.
///
/// The leftmost node has no left child, so its owning link is redirected to
/// its right child (possibly empty). Returns `None` only for an empty subtree.
pub(super) fn take_leftmost<K, V>(link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
    let link = descend_mut(link, |node| node.left.as_ref().map(|_| Side::Left));
    let mut leftmost = link.take()?;
    *link = leftmost.right.take();
    Some(leftmost)
}

/// Frees a subtree one node at a time.
///
/// Dropping a `Box<Node>` directly recurses once per level, and a tree fed
/// sorted keys is as deep as it is long.
pub(super) fn dismantle<K, V>(root: Link<K, V>) {
    let mut pending: Vec<Box<Node<K, V>>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        let (left, right) = node.take_children();
        pending.extend(left);
        pending.extend(right);
    }
}
