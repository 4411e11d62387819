//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.

mod balance;
mod color;

pub use self::balance::RedBlack;
pub use self::color::Color;

use crate::bst::{TreeMap, TreeSet};

/// An ordered map implemented using a red black tree.
///
/// # Examples
///
/// ```
/// use balanced_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
/// assert!(map.verify().is_ok());
/// ```
pub type RedBlackMap<T, U> = TreeMap<T, U, RedBlack>;

/// An ordered set implemented using a red black tree.
pub type RedBlackSet<T> = TreeSet<T, RedBlack>;
