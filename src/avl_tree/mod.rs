//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod balance;

pub use self::balance::Avl;

use crate::bst::{TreeMap, TreeSet};

/// An ordered map balanced as an AVL tree.
pub type AvlMap<T, U> = TreeMap<T, U, Avl>;

/// An ordered set balanced as an AVL tree.
pub type AvlSet<T> = TreeSet<T, Avl>;
