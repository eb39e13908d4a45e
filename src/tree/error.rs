//! Structural problems reported by [`Tree::validate`](super::Tree::validate).
//!
//! None of the tree's own operations fail. These errors only arise when the
//! comparator breaks its total-order contract, or when the tree was built with
//! [`EqualKeyPolicy::BranchRight`](super::EqualKeyPolicy::BranchRight) and a
//! key was inserted twice.

/// The first broken invariant found while walking a tree.
///
/// `depth` counts edges from the root, so the root itself is at depth 0.
///
/// # Examples
///
/// ```rust
/// use bstree::InvariantViolation;
///
/// let violation = InvariantViolation::DuplicateKey { depth: 2 };
/// assert_eq!(
///     format!("{violation}"),
///     "duplicate key at depth 2: an equal key already sits on the path from the root"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A node lies on the wrong side of one of its ancestors.
    Ordering {
        /// Depth of the misplaced node.
        depth: usize,
    },
    /// A node holds a key equal to one of its ancestors' keys.
    DuplicateKey {
        /// Depth of the deeper of the two equal nodes.
        depth: usize,
    },
    /// The cached entry count disagrees with the number of reachable nodes.
    LengthMismatch {
        /// The count the tree maintains across inserts and deletes.
        recorded: usize,
        /// The number of nodes actually reachable from the root.
        counted: usize,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ordering { depth } => write!(
                formatter,
                "ordering violated at depth {depth}: node is on the wrong side of an ancestor"
            ),
            Self::DuplicateKey { depth } => write!(
                formatter,
                "duplicate key at depth {depth}: an equal key already sits on the path from the root"
            ),
            Self::LengthMismatch { recorded, counted } => write!(
                formatter,
                "length mismatch: recorded {recorded} entries but {counted} nodes are reachable"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}
