//! # bstree
//!
//! An ordered key-value map stored in a plain binary search tree, ordered by
//! a comparator supplied at construction.
//!
//! ## Overview
//!
//! - **Comparator**: the [`Comparator`] trait (`less` / `equal`) and the
//!   provided [`NaturalOrder`], [`ReverseOrder`] and [`FnComparator`]
//! - **Tree**: [`Tree`] with `insert` (upsert), `search` and `delete`
//! - **Diagnostics**: [`Tree::validate`] reports an [`InvariantViolation`]
//!   when a misbehaving comparator has corrupted the ordering
//! - **Sharing**: `sync::SharedTree`, a lock-guarded handle for use across
//!   threads
//!
//! The tree does not rebalance and does not offer iteration or range queries.
//!
//! ## Feature Flags
//!
//! - `sync`: `SharedTree`, backed by `parking_lot`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use bstree::prelude::*;
//!
//! let mut tree = Tree::new(NaturalOrder);
//! tree.insert(5, "five");
//! tree.insert(3, "three");
//! tree.insert(8, "eight");
//!
//! assert_eq!(tree.search(&3), Some(&"three"));
//! assert!(tree.delete(&5));
//! assert_eq!(tree.search(&5), None);
//! assert_eq!(tree.validate(), Ok(()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use bstree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::*;
    pub use crate::tree::*;

    #[cfg(feature = "sync")]
    pub use crate::sync::*;
}

pub mod comparator;
mod tree;

#[cfg(feature = "sync")]
pub mod sync;

pub use comparator::{Comparator, FnComparator, NaturalOrder, ReverseOrder};
pub use tree::{EqualKeyPolicy, InvariantViolation, Tree};
