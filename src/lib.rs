//! # llrb-set
//!
//! An ordered set backed by a left-leaning red-black tree (LLRB).
//!
//! Based on Sedgewick's "Left-leaning Red-Black Trees" (2008): red links only
//! ever lean left, so insertion and deletion each repair the tree with the
//! same three local fixups applied while the recursion unwinds.
//!
//! - Nodes live in an arena and link to each other (parent included) by index
//! - O(1) access to the minimum through a cached node
//! - Stackless, double-ended iteration through parent links
//! - User-supplied strict weak ordering via [`Compare`]
//!
//! ## Example
//!
//! ```rust
//! use llrb_set::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//! set.insert("pear");
//! set.insert("apple");
//! assert!(!set.insert("pear"));
//! assert_eq!(set.first(), Some(&"apple"));
//! ```
//!
//! Arrays and iterators convert directly:
//!
//! ```rust
//! use llrb_set::OrderedSet;
//!
//! let mut set = OrderedSet::from([5, 3, 8, 1, 4, 7, 9, 2, 6]);
//! set.remove(&5);
//!
//! assert_eq!(set.len(), 8);
//! assert_eq!(set.first(), Some(&1));
//! assert_eq!(
//!     set.iter().copied().collect::<Vec<_>>(),
//!     vec![1, 2, 3, 4, 6, 7, 8, 9]
//! );
//! ```
//!
//! The underlying [`RbTree`] is public for callers that want duplicate and
//! missing keys reported instead of ignored:
//!
//! ```rust
//! use llrb_set::{RbTree, TreeError};
//!
//! let mut tree: RbTree<&str> = RbTree::new();
//! tree.insert("a").unwrap();
//! assert_eq!(tree.insert("a"), Err(TreeError::AlreadyPresent));
//! assert_eq!(tree.remove(&"b"), Err(TreeError::NotFound));
//! ```
//!
//! Any other ordering goes through [`OrderedSet::with_comparator`]:
//!
//! ```rust
//! use llrb_set::{OrderedSet, Reverse};
//!
//! let mut set = OrderedSet::with_comparator(Reverse);
//! set.extend([1, 3, 2]);
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```
//!
//! ## Features
//!
//! - `validate`: re-checks every tree invariant after each insert and
//!   removal and panics on the first violation. Run the suite with
//!   `cargo test --features validate` to exercise it.
//!
//! ## Concurrency
//!
//! Nothing here synchronises. Shared references may be read from several
//! threads at once; mutation takes `&mut self`, so the borrow checker already
//! rules out mutating while any cursor or iterator is alive.

#![forbid(unsafe_code)]

mod arena;
mod compare;
mod error;
mod iter;
mod set;
mod tree;

pub use compare::{Compare, Natural, Reverse};
pub use error::{InvariantViolation, TreeError};
pub use iter::{Cursor, IntoIter, Iter};
pub use set::OrderedSet;
pub use tree::RbTree;


#[cfg(test)]
mod proptests;
