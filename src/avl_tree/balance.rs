use crate::bst::{Balance, NodeId, Removal, Tree};
use crate::error::{Error, Result};
use log::trace;
use std::cmp;

/// Height balancing: the heights of the two child subtrees of any node differ by at most one.
///
/// Each node stores the height of its subtree, where a leaf has height `0` and an absent child
/// counts as `-1`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Avl;

fn height<T, U>(tree: &Tree<T, U, Avl>, node: Option<NodeId>) -> i32 {
    match node {
        None => -1,
        Some(node) => tree.meta(node),
    }
}

fn balance_factor<T, U>(tree: &Tree<T, U, Avl>, node: NodeId) -> i32 {
    height(tree, tree.left(node)) - height(tree, tree.right(node))
}

// Recomputes the height of `node` and rotates if it is out of balance. Returns whether a rotation
// happened.
fn rebalance<T, U>(tree: &mut Tree<T, U, Avl>, node: NodeId) -> bool {
    Avl::update(tree, node);
    let factor = balance_factor(tree, node);

    if factor > 1 {
        if let Some(child) = tree.left(node) {
            if balance_factor(tree, child) < 0 {
                trace!("left-right case at {:?}", node);
                tree.rotate_left(child);
            }
        }
        tree.rotate_right(node);
        true
    } else if factor < -1 {
        if let Some(child) = tree.right(node) {
            if balance_factor(tree, child) > 0 {
                trace!("right-left case at {:?}", node);
                tree.rotate_right(child);
            }
        }
        tree.rotate_left(node);
        true
    } else {
        false
    }
}

fn verify_subtree<T, U>(tree: &Tree<T, U, Avl>, node: Option<NodeId>) -> Result<i32> {
    let node = match node {
        None => return Ok(-1),
        Some(node) => node,
    };
    let left = verify_subtree(tree, tree.left(node))?;
    let right = verify_subtree(tree, tree.right(node))?;
    if (left - right).abs() > 1 {
        return Err(Error::InvariantViolation(format!(
            "node {:?} has balance factor {}",
            node,
            left - right,
        )));
    }
    let actual = cmp::max(left, right) + 1;
    if tree.meta(node) != actual {
        return Err(Error::InvariantViolation(format!(
            "node {:?} stores height {} but has height {}",
            node,
            tree.meta(node),
            actual,
        )));
    }
    Ok(actual)
}

impl Balance for Avl {
    type Meta = i32;

    fn new_meta() -> i32 {
        0
    }

    fn update<T, U>(tree: &mut Tree<T, U, Self>, node: NodeId) {
        let left = height(tree, tree.left(node));
        let right = height(tree, tree.right(node));
        tree.set_meta(node, cmp::max(left, right) + 1);
    }

    // A single rebalancing point restores the height of the subtree it roots, so the walk stops
    // after the first rotation.
    fn rebalance_insert<T, U>(tree: &mut Tree<T, U, Self>, node: NodeId) {
        let mut curr = Some(node);
        while let Some(node) = curr {
            let parent = tree.parent(node);
            if rebalance(tree, node) {
                break;
            }
            curr = parent;
        }
    }

    fn rebalance_delete<T, U>(tree: &mut Tree<T, U, Self>, removal: Removal<i32>) {
        let mut curr = removal.parent.or(removal.child);
        while let Some(node) = curr {
            let parent = tree.parent(node);
            rebalance(tree, node);
            curr = parent;
        }
    }

    fn verify<T, U>(tree: &Tree<T, U, Self>) -> Result<()> {
        verify_subtree(tree, tree.root()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::{balance_factor, Avl};
    use crate::avl_tree::AvlMap;
    use crate::bst::{Balance, Tree};

    fn build(keys: &[u32]) -> Tree<u32, (), Avl> {
        let mut tree = Tree::new();
        for key in keys {
            tree.insert_with(*key, || ());
            assert!(tree.verify().is_ok());
        }
        tree
    }

    fn root_key(tree: &Tree<u32, (), Avl>) -> Option<u32> {
        tree.root().map(|node| *tree.key(node))
    }

    #[test]
    fn test_leaf_height() {
        let tree = build(&[1]);
        let root = tree.root().unwrap();
        assert_eq!(tree.meta(root), 0);
        assert_eq!(Avl::new_meta(), 0);
    }

    #[test]
    fn test_left_left_case() {
        let tree = build(&[3, 2, 1]);
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(tree.height(), Some(1));
    }

    #[test]
    fn test_left_right_case() {
        let tree = build(&[3, 1, 2]);
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(tree.meta(tree.root().unwrap()), 1);
    }

    #[test]
    fn test_right_right_case() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(root_key(&tree), Some(2));
    }

    #[test]
    fn test_right_left_case() {
        let tree = build(&[1, 3, 2]);
        assert_eq!(root_key(&tree), Some(2));
    }

    #[test]
    fn test_ascending_inserts_stay_logarithmic() {
        let tree = build(&(0..1023).collect::<Vec<u32>>());
        assert_eq!(tree.height(), Some(9));
        let root = tree.root().unwrap();
        assert_eq!(balance_factor(&tree, root), 0);
    }

    #[test]
    fn test_remove_rebalances_multiple_levels() {
        // Fibonacci-shaped tree where removing the shallow leaf forces two rotations.
        let mut tree = build(&[8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1]);
        let twelve = tree.find(&12).unwrap();
        tree.remove(twelve);
        assert!(tree.verify().is_ok());
        assert_eq!(root_key(&tree), Some(5));
    }

    #[test]
    fn test_remove_root_with_two_children() {
        let mut tree = build(&[4, 2, 6, 1, 3, 5, 7]);
        let root = tree.root().unwrap();
        tree.remove(root);
        assert!(tree.verify().is_ok());
        assert_eq!(root_key(&tree), Some(5));
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_scenario_with_duplicate() {
        let mut map = AvlMap::new();
        let mut rejected = Vec::new();
        for key in &[3, 1, 4, 1, 5, 9, 2, 6] {
            let (_, inserted) = map.insert(*key, *key);
            if !inserted {
                rejected.push(*key);
            }
            assert!(map.verify().is_ok());
        }
        assert_eq!(rejected, vec![1]);
        assert_eq!(map.len(), 7);
        assert_eq!(
            map.keys().cloned().collect::<Vec<u32>>(),
            vec![1, 2, 3, 4, 5, 6, 9],
        );
    }
}
