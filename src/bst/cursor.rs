use crate::bst::node::NodeId;

/// A position in a `TreeMap` or `TreeSet`: either an entry or the past-the-end position.
///
/// A cursor does not borrow its container. It keeps referring to the same entry across inserts
/// and removals of other entries. Once its entry is removed the cursor no longer resolves to
/// anything, and operations that need an entry reject it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Cursor {
    node: Option<NodeId>,
}

impl Cursor {
    pub(crate) fn new(node: Option<NodeId>) -> Self {
        Cursor { node }
    }

    pub(crate) fn end() -> Self {
        Cursor { node: None }
    }

    pub(crate) fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Returns `true` if this is the past-the-end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }
}
