use crate::bst::{Balance, NodeId, Removal, Tree};
use crate::error::{Error, Result};
use crate::red_black_tree::color::Color;
use log::trace;

/// Color balancing: the root is black, a red node has no red child, and every path from a node
/// to an absent child passes through the same number of black nodes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RedBlack;

// Absent children are black.
fn is_red<T, U>(tree: &Tree<T, U, RedBlack>, node: Option<NodeId>) -> bool {
    node.map_or(false, |node| tree.meta(node).is_red())
}

fn set_color<T, U>(tree: &mut Tree<T, U, RedBlack>, node: Option<NodeId>, color: Color) {
    if let Some(node) = node {
        tree.set_meta(node, color);
    }
}

// The sibling of a doubly black position always exists: the removed black node contributed to
// the black height on its side, so the other side holds at least one black node.
fn sibling_of(node: Option<NodeId>) -> NodeId {
    node.expect("Expected sibling of doubly black position to be `Some`.")
}

// Returns the black height of the subtree at `node`, counting absent children as zero.
fn verify_subtree<T, U>(tree: &Tree<T, U, RedBlack>, node: Option<NodeId>) -> Result<usize> {
    let node = match node {
        None => return Ok(0),
        Some(node) => node,
    };
    let (left, right) = (tree.left(node), tree.right(node));
    if tree.meta(node).is_red() && (is_red(tree, left) || is_red(tree, right)) {
        return Err(Error::InvariantViolation(format!(
            "red node {:?} has a red child",
            node,
        )));
    }
    let left_height = verify_subtree(tree, left)?;
    let right_height = verify_subtree(tree, right)?;
    if left_height != right_height {
        return Err(Error::InvariantViolation(format!(
            "node {:?} has black heights {} and {}",
            node, left_height, right_height,
        )));
    }
    Ok(left_height + if tree.meta(node).is_red() { 0 } else { 1 })
}

impl Balance for RedBlack {
    type Meta = Color;

    fn new_meta() -> Color {
        Color::Red
    }

    fn update<T, U>(_: &mut Tree<T, U, Self>, _: NodeId) {}

    fn rebalance_insert<T, U>(tree: &mut Tree<T, U, Self>, node: NodeId) {
        let mut node = node;
        while let Some(parent) = tree.parent(node).filter(|parent| tree.meta(*parent).is_red()) {
            // A red parent is never the root.
            let grandparent = match tree.parent(parent) {
                Some(grandparent) => grandparent,
                None => break,
            };

            if tree.left(grandparent) == Some(parent) {
                let uncle = tree.right(grandparent);
                if is_red(tree, uncle) {
                    trace!("recolor below {:?}", grandparent);
                    set_color(tree, Some(parent), Color::Black);
                    set_color(tree, uncle, Color::Black);
                    set_color(tree, Some(grandparent), Color::Red);
                    node = grandparent;
                    continue;
                }
                let parent = if tree.right(parent) == Some(node) {
                    trace!("zig-zag at {:?}", parent);
                    tree.rotate_left(parent);
                    node
                } else {
                    parent
                };
                set_color(tree, Some(parent), Color::Black);
                set_color(tree, Some(grandparent), Color::Red);
                tree.rotate_right(grandparent);
                break;
            } else {
                let uncle = tree.left(grandparent);
                if is_red(tree, uncle) {
                    trace!("recolor below {:?}", grandparent);
                    set_color(tree, Some(parent), Color::Black);
                    set_color(tree, uncle, Color::Black);
                    set_color(tree, Some(grandparent), Color::Red);
                    node = grandparent;
                    continue;
                }
                let parent = if tree.left(parent) == Some(node) {
                    trace!("zig-zag at {:?}", parent);
                    tree.rotate_right(parent);
                    node
                } else {
                    parent
                };
                set_color(tree, Some(parent), Color::Black);
                set_color(tree, Some(grandparent), Color::Red);
                tree.rotate_left(grandparent);
                break;
            }
        }

        let root = tree.root();
        set_color(tree, root, Color::Black);
    }

    fn rebalance_delete<T, U>(tree: &mut Tree<T, U, Self>, removal: Removal<Color>) {
        if removal.removed.is_red() {
            return;
        }

        let Removal {
            child: mut node,
            mut parent,
            ..
        } = removal;
        while node != tree.root() && !is_red(tree, node) {
            let curr_parent = match parent {
                Some(parent) => parent,
                None => break,
            };

            if tree.left(curr_parent) == node {
                let mut sibling = sibling_of(tree.right(curr_parent));
                if is_red(tree, Some(sibling)) {
                    trace!("red sibling {:?}", sibling);
                    set_color(tree, Some(sibling), Color::Black);
                    set_color(tree, Some(curr_parent), Color::Red);
                    tree.rotate_left(curr_parent);
                    sibling = sibling_of(tree.right(curr_parent));
                }

                if !is_red(tree, tree.left(sibling)) && !is_red(tree, tree.right(sibling)) {
                    set_color(tree, Some(sibling), Color::Red);
                    node = Some(curr_parent);
                    parent = tree.parent(curr_parent);
                    continue;
                }

                if !is_red(tree, tree.right(sibling)) {
                    trace!("near red child of {:?}", sibling);
                    set_color(tree, tree.left(sibling), Color::Black);
                    set_color(tree, Some(sibling), Color::Red);
                    tree.rotate_right(sibling);
                    sibling = sibling_of(tree.right(curr_parent));
                }
                let parent_color = tree.meta(curr_parent);
                set_color(tree, Some(sibling), parent_color);
                set_color(tree, Some(curr_parent), Color::Black);
                set_color(tree, tree.right(sibling), Color::Black);
                tree.rotate_left(curr_parent);
            } else {
                let mut sibling = sibling_of(tree.left(curr_parent));
                if is_red(tree, Some(sibling)) {
                    trace!("red sibling {:?}", sibling);
                    set_color(tree, Some(sibling), Color::Black);
                    set_color(tree, Some(curr_parent), Color::Red);
                    tree.rotate_right(curr_parent);
                    sibling = sibling_of(tree.left(curr_parent));
                }

                if !is_red(tree, tree.left(sibling)) && !is_red(tree, tree.right(sibling)) {
                    set_color(tree, Some(sibling), Color::Red);
                    node = Some(curr_parent);
                    parent = tree.parent(curr_parent);
                    continue;
                }

                if !is_red(tree, tree.left(sibling)) {
                    trace!("near red child of {:?}", sibling);
                    set_color(tree, tree.right(sibling), Color::Black);
                    set_color(tree, Some(sibling), Color::Red);
                    tree.rotate_left(sibling);
                    sibling = sibling_of(tree.left(curr_parent));
                }
                let parent_color = tree.meta(curr_parent);
                set_color(tree, Some(sibling), parent_color);
                set_color(tree, Some(curr_parent), Color::Black);
                set_color(tree, tree.left(sibling), Color::Black);
                tree.rotate_right(curr_parent);
            }

            node = tree.root();
            break;
        }

        set_color(tree, node, Color::Black);
    }

    fn verify<T, U>(tree: &Tree<T, U, Self>) -> Result<()> {
        if is_red(tree, tree.root()) {
            return Err(Error::InvariantViolation(String::from("root is red")));
        }
        verify_subtree(tree, tree.root()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlack;
    use crate::bst::{Balance, NodeId, Tree};
    use crate::red_black_tree::{Color, RedBlackMap};

    fn build(keys: &[u32]) -> Tree<u32, (), RedBlack> {
        let mut tree = Tree::new();
        for key in keys {
            tree.insert_with(*key, || ());
            assert!(tree.verify().is_ok());
        }
        tree
    }

    fn color_of(tree: &Tree<u32, (), RedBlack>, key: u32) -> Color {
        tree.meta(tree.find(&key).unwrap())
    }

    fn has_red_red(tree: &Tree<u32, (), RedBlack>, node: Option<NodeId>) -> bool {
        match node {
            None => false,
            Some(node) => {
                let red = tree.meta(node) == Color::Red;
                let children = [tree.left(node), tree.right(node)];
                children.iter().any(|child| {
                    red && child.map_or(false, |child| tree.meta(child) == Color::Red)
                }) || children.iter().any(|child| has_red_red(tree, *child))
            },
        }
    }

    #[test]
    fn test_new_node_is_red() {
        assert_eq!(RedBlack::new_meta(), Color::Red);
        let tree = build(&[2, 1]);
        assert_eq!(color_of(&tree, 1), Color::Red);
        assert_eq!(color_of(&tree, 2), Color::Black);
    }

    #[test]
    fn test_uncle_red_recolors() {
        let tree = build(&[2, 1, 3, 4]);
        assert_eq!(color_of(&tree, 1), Color::Black);
        assert_eq!(color_of(&tree, 3), Color::Black);
        assert_eq!(color_of(&tree, 4), Color::Red);
        assert_eq!(color_of(&tree, 2), Color::Black);
    }

    #[test]
    fn test_outer_case_rotates() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(tree.root().map(|root| *tree.key(root)), Some(2));
        assert_eq!(color_of(&tree, 2), Color::Black);
        assert_eq!(color_of(&tree, 1), Color::Red);
        assert_eq!(color_of(&tree, 3), Color::Red);
    }

    #[test]
    fn test_inner_case_rotates_twice() {
        let tree = build(&[3, 1, 2]);
        assert_eq!(tree.root().map(|root| *tree.key(root)), Some(2));
        assert_eq!(color_of(&tree, 2), Color::Black);
    }

    #[test]
    fn test_insert_scenario() {
        let tree = build(&[10, 20, 30, 40, 50, 25]);
        let root = tree.root().unwrap();
        assert_eq!(tree.meta(root), Color::Black);
        assert!(!has_red_red(&tree, Some(root)));
        assert_eq!(*tree.key(root), 20);
        assert_eq!(color_of(&tree, 40), Color::Red);
        assert_eq!(color_of(&tree, 25), Color::Red);
    }

    #[test]
    fn test_remove_red_leaf() {
        let mut tree = build(&[2, 1, 3, 4]);
        let four = tree.find(&4).unwrap();
        tree.remove(four);
        assert!(tree.verify().is_ok());
        assert_eq!(color_of(&tree, 3), Color::Black);
    }

    #[test]
    fn test_remove_black_leaf_with_red_sibling() {
        let mut tree = build(&[2, 1, 4, 3, 5, 6]);
        // 4 is red with black children 3 and 5; removing 1 leaves a doubly black position whose
        // sibling is red.
        assert_eq!(color_of(&tree, 4), Color::Red);
        let one = tree.find(&1).unwrap();
        tree.remove(one);
        assert!(tree.verify().is_ok());
        assert_eq!(tree.root().map(|root| *tree.key(root)), Some(4));
    }

    #[test]
    fn test_remove_black_leaf_with_far_red_nephew() {
        let mut tree = build(&[2, 1, 3, 4]);
        let one = tree.find(&1).unwrap();
        tree.remove(one);
        assert!(tree.verify().is_ok());
        assert_eq!(tree.root().map(|root| *tree.key(root)), Some(3));
    }

    #[test]
    fn test_remove_black_leaf_with_near_red_nephew() {
        let mut tree = build(&[3, 1, 5, 4]);
        let one = tree.find(&1).unwrap();
        tree.remove(one);
        assert!(tree.verify().is_ok());
        assert_eq!(tree.root().map(|root| *tree.key(root)), Some(4));
    }

    #[test]
    fn test_remove_pushes_blackness_up() {
        let mut tree = build(&[2, 1, 3, 4]);
        let four = tree.find(&4).unwrap();
        tree.remove(four);
        assert_eq!(color_of(&tree, 1), Color::Black);
        assert_eq!(color_of(&tree, 3), Color::Black);

        // Both nephews are absent, so the sibling turns red and the root absorbs the deficit.
        let three = tree.find(&3).unwrap();
        tree.remove(three);
        assert!(tree.verify().is_ok());
        assert_eq!(color_of(&tree, 1), Color::Red);
        assert_eq!(color_of(&tree, 2), Color::Black);
    }

    #[test]
    fn test_remove_all() {
        let mut map: RedBlackMap<u32, u32> = (0..256).map(|i| (i * 7 % 256, i)).collect();
        for i in 0..256 {
            assert_eq!(map.remove(&(i * 11 % 256)).map(|pair| pair.0), Some(i * 11 % 256));
            assert!(map.verify().is_ok());
        }
        assert!(map.is_empty());
    }
}
