//! A linked binary search tree holding an ordered collection of values.
//!
//! A [`LinkedBst`] supports insertion, lookup, removal, ordered traversals,
//! range and neighbour queries, and an explicit, whole-tree [`rebalance()`]
//! operation that rebuilds the tree with minimal height.
//!
//! ```
//! use linkedbst::LinkedBst;
//!
//! let mut t = [2, -1, 3, 4, -2, 6].into_iter().collect::<LinkedBst<_>>();
//!
//! assert_eq!(t.inorder().copied().collect::<Vec<_>>(), [-2, -1, 2, 3, 4, 6]);
//! assert_eq!(t.height(), 3);
//!
//! assert_eq!(t.successor(&3), Some(&4));
//! assert_eq!(t.predecessor(&3), Some(&2));
//! assert_eq!(t.range_find(&-1, &4).count(), 4);
//!
//! t.rebalance();
//! assert_eq!(t.height(), 2);
//!
//! assert_eq!(t.remove(&3), Ok(3));
//! assert!(t.remove(&3).is_err());
//! ```
//!
//! The tree does not rebalance itself on insertion or removal - inserting
//! values in ascending order produces a chain with a height of `len - 1`.
//! Traversals, height measurement and tree teardown use explicit stacks and
//! never recurse along the height of the tree.
//!
//! [`rebalance()`]: LinkedBst::rebalance

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

mod balance;
mod error;
mod iter;
mod node;
mod position;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::NotFound;
pub use iter::{Inorder, IntoIter, IntoSorted, Levelorder, Postorder, Preorder, RangeFind};
pub use position::Position;
pub use tree::LinkedBst;

