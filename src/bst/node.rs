use crate::arena::Handle;
use crate::entry::Entry;

/// Identifies a node of a tree. Rotations relink nodes but never move them, so a `NodeId` keeps
/// referring to the same entry until that entry is removed.
pub type NodeId = Handle;

/// A struct representing an internal node of a balanced tree.
///
/// `left` and `right` are the owning edges: every node is reachable from exactly one child slot or
/// from the root slot. `parent` is the non-owning back edge and is kept in sync by the tree's link
/// helpers.
pub struct Node<T, U, M> {
    pub entry: Entry<T, U>,
    pub meta: M,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
}

impl<T, U, M> Node<T, U, M> {
    pub fn new(key: T, value: U, meta: M) -> Self {
        Node {
            entry: Entry { key, value },
            meta,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// Copies the entry and metadata without any links.
    pub fn unlinked_clone(&self) -> Self
    where
        T: Clone,
        U: Clone,
        M: Copy,
    {
        Node {
            entry: self.entry.clone(),
            meta: self.meta,
            left: None,
            right: None,
            parent: None,
        }
    }
}
