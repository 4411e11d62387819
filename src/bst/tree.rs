use crate::arena::{TypedArena, DEFAULT_CHUNK_SIZE};
use crate::bst::node::{Node, NodeId};
use crate::bst::{Balance, Removal};
use crate::entry::Entry;
use crate::error::{Error, Result};
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::Ordering;

enum Search {
    Found(NodeId),
    // The search-terminal parent and the side the key belongs on.
    Vacant(Option<(NodeId, Ordering)>),
}

/// The structural engine of a balanced binary search tree.
///
/// Nodes live in a typed arena owned by the tree. Child links are the owning edges and parent
/// links the non-owning back edges; every helper that changes a child link updates the matching
/// parent link in the same call. Rebalancing is delegated to the strategy `B`.
pub struct Tree<T, U, B>
where
    B: Balance,
{
    arena: TypedArena<Node<T, U, B::Meta>>,
    root: Option<NodeId>,
    len: usize,
}

impl<T, U, B> Tree<T, U, B>
where
    B: Balance,
{
    pub fn new() -> Self {
        Tree {
            arena: TypedArena::new(DEFAULT_CHUNK_SIZE),
            root: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns `true` if `node` refers to a live node of this tree.
    pub fn contains(&self, node: NodeId) -> bool {
        self.arena.contains(&node)
    }

    fn node(&self, node: NodeId) -> &Node<T, U, B::Meta> {
        &self.arena[node]
    }

    fn node_mut(&mut self, node: NodeId) -> &mut Node<T, U, B::Meta> {
        &mut self.arena[node]
    }

    pub fn left(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).left
    }

    pub fn right(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).right
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    pub fn meta(&self, node: NodeId) -> B::Meta {
        self.node(node).meta
    }

    pub fn set_meta(&mut self, node: NodeId, meta: B::Meta) {
        self.node_mut(node).meta = meta;
    }

    pub fn entry(&self, node: NodeId) -> &Entry<T, U> {
        &self.node(node).entry
    }

    pub fn entry_mut(&mut self, node: NodeId) -> &mut Entry<T, U> {
        &mut self.node_mut(node).entry
    }

    pub fn key(&self, node: NodeId) -> &T {
        &self.node(node).entry.key
    }

    fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.node_mut(parent).left = child;
        if let Some(child) = child {
            self.node_mut(child).parent = Some(parent);
        }
    }

    fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.node_mut(parent).right = child;
        if let Some(child) = child {
            self.node_mut(child).parent = Some(parent);
        }
    }

    // Points the slot that holds `old` (a child slot of `parent`, or the root slot) at `new`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                if self.left(parent) == Some(old) {
                    self.node_mut(parent).left = new;
                } else {
                    self.node_mut(parent).right = new;
                }
            },
        }
        if let Some(new) = new {
            self.node_mut(new).parent = parent;
        }
    }

    /// Rotates the right child of `node` into its position.
    ///
    /// # Panics
    ///
    /// Panics if `node` has no right child.
    pub fn rotate_left(&mut self, node: NodeId) {
        let child = self
            .right(node)
            .expect("Expected right child node to be `Some`.");
        trace!("rotate left at {:?}", node);
        let parent = self.parent(node);
        let inner = self.left(child);
        self.set_right(node, inner);
        self.replace_child(parent, node, Some(child));
        self.set_left(child, Some(node));
        B::update(self, node);
        B::update(self, child);
    }

    /// Rotates the left child of `node` into its position.
    ///
    /// # Panics
    ///
    /// Panics if `node` has no left child.
    pub fn rotate_right(&mut self, node: NodeId) {
        let child = self
            .left(node)
            .expect("Expected left child node to be `Some`.");
        trace!("rotate right at {:?}", node);
        let parent = self.parent(node);
        let inner = self.right(child);
        self.set_left(node, inner);
        self.replace_child(parent, node, Some(child));
        self.set_right(child, Some(node));
        B::update(self, node);
        B::update(self, child);
    }

    /// Puts `subtree` in the position of `old`. `old` keeps its own child links.
    pub fn single_transplant(&mut self, old: NodeId, subtree: Option<NodeId>) {
        trace!("transplant {:?} over {:?}", subtree, old);
        let parent = self.parent(old);
        self.replace_child(parent, old, subtree);
    }

    /// Detaches `successor` from deeper in the right subtree of `old` and moves it into the
    /// position of `old`, adopting both of its subtrees.
    pub fn double_transplant(&mut self, old: NodeId, successor: NodeId) {
        trace!("double transplant {:?} over {:?}", successor, old);
        let successor_right = self.right(successor);
        self.single_transplant(successor, successor_right);
        let (left, right) = (self.left(old), self.right(old));
        self.set_right(successor, right);
        self.set_left(successor, left);
        self.single_transplant(old, Some(successor));
    }

    /// Returns the leftmost node of the subtree rooted at `node`.
    pub fn min_node(&self, mut node: NodeId) -> NodeId {
        while let Some(left) = self.left(node) {
            node = left;
        }
        node
    }

    /// Returns the rightmost node of the subtree rooted at `node`.
    pub fn max_node(&self, mut node: NodeId) -> NodeId {
        while let Some(right) = self.right(node) {
            node = right;
        }
        node
    }

    pub fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.min_node(root))
    }

    pub fn last(&self) -> Option<NodeId> {
        self.root.map(|root| self.max_node(root))
    }

    /// Returns the in-order successor of `node`.
    pub fn succ(&self, mut node: NodeId) -> Option<NodeId> {
        if let Some(right) = self.right(node) {
            return Some(self.min_node(right));
        }
        while let Some(parent) = self.parent(node) {
            if self.left(parent) == Some(node) {
                return Some(parent);
            }
            node = parent;
        }
        None
    }

    /// Returns the in-order predecessor of `node`.
    pub fn pred(&self, mut node: NodeId) -> Option<NodeId> {
        if let Some(left) = self.left(node) {
            return Some(self.max_node(left));
        }
        while let Some(parent) = self.parent(node) {
            if self.right(parent) == Some(node) {
                return Some(parent);
            }
            node = parent;
        }
        None
    }

    fn search<V>(&self, key: &V) -> Search
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut parent = None;
        let mut curr = self.root;
        while let Some(node) = curr {
            let ordering = key.cmp(self.key(node).borrow());
            curr = match ordering {
                Ordering::Less => self.left(node),
                Ordering::Greater => self.right(node),
                Ordering::Equal => return Search::Found(node),
            };
            parent = Some((node, ordering));
        }
        Search::Vacant(parent)
    }

    pub fn find<V>(&self, key: &V) -> Option<NodeId>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.search(key) {
            Search::Found(node) => Some(node),
            Search::Vacant(_) => None,
        }
    }

    /// Inserts `key` with the value produced by `value` if the key is absent. Returns the node
    /// holding the key and whether it was inserted. `value` is only called on insertion.
    pub fn insert_with<F>(&mut self, key: T, value: F) -> (NodeId, bool)
    where
        T: Ord,
        F: FnOnce() -> U,
    {
        let parent = match self.search(&key) {
            Search::Found(node) => return (node, false),
            Search::Vacant(parent) => parent,
        };

        let node = self.arena.allocate(Node::new(key, value(), B::new_meta()));
        match parent {
            None => self.root = Some(node),
            Some((parent, Ordering::Less)) => self.set_left(parent, Some(node)),
            Some((parent, _)) => self.set_right(parent, Some(node)),
        }
        self.len += 1;
        B::rebalance_insert(self, node);
        (node, true)
    }

    /// Splices `node` out of the tree, frees it and rebalances. Returns its entry.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a live node of this tree.
    pub fn remove(&mut self, node: NodeId) -> Entry<T, U> {
        let (left, right, parent, meta) = {
            let Node {
                left,
                right,
                parent,
                meta,
                ..
            } = *self.node(node);
            (left, right, parent, meta)
        };

        let removal = match (left, right) {
            (None, right) => {
                self.single_transplant(node, right);
                Removal {
                    child: right,
                    parent,
                    removed: meta,
                }
            },
            (left, None) => {
                self.single_transplant(node, left);
                Removal {
                    child: left,
                    parent,
                    removed: meta,
                }
            },
            (Some(left), Some(right)) => {
                let successor = self.min_node(right);
                let removed = self.meta(successor);
                let child = self.right(successor);
                let child_parent = if successor == right {
                    self.set_left(successor, Some(left));
                    self.single_transplant(node, Some(successor));
                    Some(successor)
                } else {
                    let successor_parent = self.parent(successor);
                    self.double_transplant(node, successor);
                    successor_parent
                };
                self.set_meta(successor, meta);
                Removal {
                    child,
                    parent: child_parent,
                    removed,
                }
            },
        };

        let Node { entry, .. } = self
            .arena
            .free(&node)
            .expect("Expected removed node to be live.");
        self.len -= 1;
        B::rebalance_delete(self, removal);
        entry
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.len);
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns the greatest node whose key is less than or equal to `key`.
    pub fn floor<V>(&self, key: &V) -> Option<NodeId>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(node) = curr {
            match key.cmp(self.key(node).borrow()) {
                Ordering::Less => curr = self.left(node),
                Ordering::Greater => {
                    ret = Some(node);
                    curr = self.right(node);
                },
                Ordering::Equal => return Some(node),
            }
        }
        ret
    }

    /// Returns the least node whose key is greater than or equal to `key`.
    pub fn ceil<V>(&self, key: &V) -> Option<NodeId>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(node) = curr {
            match key.cmp(self.key(node).borrow()) {
                Ordering::Greater => curr = self.right(node),
                Ordering::Less => {
                    ret = Some(node);
                    curr = self.left(node);
                },
                Ordering::Equal => return Some(node),
            }
        }
        ret
    }

    /// Returns the number of edges on the longest root-to-leaf path, or `None` for an empty tree.
    pub fn height(&self) -> Option<usize> {
        let mut stack = vec![(self.root?, 0)];
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [self.left(node), self.right(node)].iter().flatten() {
                stack.push((*child, depth + 1));
            }
        }
        Some(height)
    }

    /// Returns every node in ascending key order.
    pub fn in_order(&self) -> Vec<NodeId> {
        let mut ret = Vec::with_capacity(self.len);
        let mut curr = self.first();
        while let Some(node) = curr {
            ret.push(node);
            curr = self.succ(node);
        }
        ret
    }

    /// Returns mutable access to every value, paired with its key, in ascending key order.
    pub fn entries_mut(&mut self) -> Vec<(&T, &mut U)> {
        let chunk_size = self.arena.chunk_size();
        let order = self.in_order();
        let slots = order
            .iter()
            .map(|node| node.flat_index(chunk_size) + 1)
            .max()
            .unwrap_or(0);
        let mut ranks = vec![None; slots];
        for (rank, node) in order.iter().enumerate() {
            ranks[node.flat_index(chunk_size)] = Some(rank);
        }

        let mut ret: Vec<Option<(&T, &mut U)>> = (0..order.len()).map(|_| None).collect();
        for (handle, node) in self.arena.iter_mut() {
            if let Some(Some(rank)) = ranks.get(handle.flat_index(chunk_size)) {
                let Entry { key, value } = &mut node.entry;
                ret[*rank] = Some((&*key, value));
            }
        }
        ret.into_iter().flatten().collect()
    }

    /// Consumes the tree and returns its entries in ascending key order.
    pub fn into_entries(mut self) -> Vec<Entry<T, U>> {
        let order = self.in_order();
        order
            .iter()
            .filter_map(|node| self.arena.free(node))
            .map(|node| node.entry)
            .collect()
    }

    /// Checks the parent links, the key order, the entry count and the strategy's invariant.
    pub fn verify(&self) -> Result<()>
    where
        T: Ord,
    {
        if let Some(root) = self.root {
            if self.parent(root).is_some() {
                return Err(Error::InvariantViolation(format!(
                    "root {:?} has a parent",
                    root,
                )));
            }
        }

        let mut count = 0;
        let mut prev: Option<NodeId> = None;
        let mut curr = self.first();
        while let Some(node) = curr {
            for child in [self.left(node), self.right(node)].iter().flatten() {
                if self.parent(*child) != Some(node) {
                    return Err(Error::InvariantViolation(format!(
                        "child {:?} does not point back to parent {:?}",
                        child, node,
                    )));
                }
            }
            if let Some(prev) = prev {
                if self.key(prev) >= self.key(node) {
                    return Err(Error::InvariantViolation(format!(
                        "keys of {:?} and {:?} are not strictly ascending",
                        prev, node,
                    )));
                }
            }
            count += 1;
            if count > self.len {
                return Err(Error::InvariantViolation(format!(
                    "in-order walk visits more than {} nodes",
                    self.len,
                )));
            }
            prev = Some(node);
            curr = self.succ(node);
        }

        if count != self.len || self.arena.len() != self.len {
            return Err(Error::InvariantViolation(format!(
                "tree counts {} entries but reaches {} of {} allocated nodes",
                self.len,
                count,
                self.arena.len(),
            )));
        }

        B::verify(self)
    }
}

impl<T, U, B> Clone for Tree<T, U, B>
where
    T: Clone,
    U: Clone,
    B: Balance,
{
    fn clone(&self) -> Self {
        let mut tree = Tree::new();
        let root = match self.root {
            Some(root) => root,
            None => return tree,
        };
        debug!("cloning tree of {} nodes", self.len);

        let new_root = tree.arena.allocate(self.node(root).unlinked_clone());
        tree.root = Some(new_root);
        let mut stack = vec![(root, new_root)];
        while let Some((source, target)) = stack.pop() {
            if let Some(left) = self.left(source) {
                let copy = tree.arena.allocate(self.node(left).unlinked_clone());
                tree.set_left(target, Some(copy));
                stack.push((left, copy));
            }
            if let Some(right) = self.right(source) {
                let copy = tree.arena.allocate(self.node(right).unlinked_clone());
                tree.set_right(target, Some(copy));
                stack.push((right, copy));
            }
        }
        tree.len = self.len;
        tree
    }
}

impl<T, U, B> Default for Tree<T, U, B>
where
    B: Balance,
{
    fn default() -> Self {
        Self::new()
    }
}
