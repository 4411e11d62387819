//! Ordered maps and sets backed by self-balancing binary search trees.
//!
//! A single tree engine in `bst` implements search, rotation and node removal over arena-allocated
//! nodes. The balancing rule is a type parameter: `avl_tree::Avl` keeps subtree heights within one
//! of each other and `red_black_tree::RedBlack` maintains node colors. Both strategies expose the
//! same map and set API.
//!
//! # Examples
//!
//! ```
//! use balanced_collections::avl_tree::AvlMap;
//! use balanced_collections::red_black_tree::RedBlackMap;
//!
//! let mut avl = AvlMap::new();
//! let mut red_black = RedBlackMap::new();
//! for key in vec![3, 1, 4, 1, 5, 9, 2, 6] {
//!     avl.insert(key, key * 10);
//!     red_black.insert(key, key * 10);
//! }
//!
//! assert_eq!(avl, red_black);
//! assert_eq!(avl.keys().collect::<Vec<&u32>>(), vec![&1, &2, &3, &4, &5, &6, &9]);
//! ```

mod entry;
pub mod arena;
pub mod avl_tree;
pub mod bst;
pub mod error;
pub mod red_black_tree;

pub use crate::bst::{Balance, Cursor, TreeMap, TreeSet};
pub use crate::error::{Error, Result};
