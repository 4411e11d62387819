//! Binary search tree engine shared by the balanced maps and sets.
//!
//! The engine owns the node storage and implements every structural operation (search, rotation,
//! transplant, successor and predecessor). A balancing strategy plugs into the engine through the
//! `Balance` trait: the engine calls its hooks after each structural change and the strategy
//! restores its invariant using the engine's rotation primitives.

mod cursor;
mod map;
mod node;
mod set;
mod tree;

pub use self::cursor::Cursor;
pub use self::map::{TreeMap, TreeMapIntoIter, TreeMapIter, TreeMapIterMut};
pub use self::node::NodeId;
pub use self::set::{TreeSet, TreeSetIntoIter, TreeSetIter};
pub use self::tree::Tree;

use crate::error::Result;
use std::fmt::Debug;

/// Describes the splice performed by a removal so that a strategy can repair the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Removal<M> {
    /// The node that moved into the vacated position, if any.
    pub child: Option<NodeId>,
    /// The parent of the vacated position after the splice.
    pub parent: Option<NodeId>,
    /// Metadata of the node that physically left its position. When the removed node had two
    /// children, its successor took over its position and metadata, so this is the successor's
    /// former metadata.
    pub removed: M,
}

/// A balancing strategy consumed by the tree engine.
///
/// Hooks receive the engine itself so that they can inspect links and metadata and call
/// `Tree::rotate_left` and `Tree::rotate_right`.
pub trait Balance: Sized {
    /// Per-node balance metadata.
    type Meta: Copy + Debug + PartialEq;

    /// Metadata of a freshly allocated leaf.
    fn new_meta() -> Self::Meta;

    /// Recomputes the metadata of `node` from its children. Called by rotations on the demoted
    /// node and then on the promoted node.
    fn update<T, U>(tree: &mut Tree<T, U, Self>, node: NodeId);

    /// Restores the invariant after `node` was linked in as a new leaf.
    fn rebalance_insert<T, U>(tree: &mut Tree<T, U, Self>, node: NodeId);

    /// Restores the invariant after a node was spliced out.
    fn rebalance_delete<T, U>(tree: &mut Tree<T, U, Self>, removal: Removal<Self::Meta>);

    /// Checks the strategy's invariant over the whole tree.
    fn verify<T, U>(tree: &Tree<T, U, Self>) -> Result<()>;
}
