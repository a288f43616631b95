//! An ordered set of words backed by a red-black tree.
//!
//! [`WordSet`] keeps unique strings sorted by their bytes. Insertion costs
//! `O(log n)` in the worst case and [`WordSet::iter`] yields the words in
//! ascending order.
//!
//! Nodes live in an arena and refer to each other through handles. Child
//! handles form the owning tree, while the parent handle of each node is only
//! used to walk upwards while rebalancing.

#![deny(rust_2018_idioms)]
#![forbid(unsafe_code)]

mod arena;
mod iter;
mod node;
mod red_black_tree;

pub use iter::Iter;
pub use red_black_tree::WordSet;
