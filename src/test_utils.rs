use std::fmt::{Debug, Display, Write};

use proptest::prelude::*;

use crate::{node::Node, LinkedBst};

/// The maximum value produced by [`arbitrary_value()`].
///
/// A small value domain encourages multiple operations to act on the same
/// value, and produces duplicate values in the tree.
pub(crate) const VALUE_MAX: u8 = 20;

/// Generate arbitrary values in the range [0..[`VALUE_MAX`]).
pub(crate) fn arbitrary_value() -> impl Strategy<Value = u8> {
    0..VALUE_MAX
}

/// Assert the BST and bookkeeping properties of `t`, ensuring the tree is
/// well-formed.
pub(crate) fn validate_tree_structure<T>(t: &LinkedBst<T>)
where
    T: Ord + Debug,
{
    // Invariant 1: an in-order traversal yields a non-decreasing sequence.
    let sorted = t.inorder().collect::<Vec<_>>();
    for window in sorted.windows(2) {
        assert!(
            window[0] <= window[1],
            "out of order values {:?} and {:?} in tree {t:?}",
            window[0],
            window[1],
        );
    }

    // Invariant 2: the tracked size matches the number of reachable nodes,
    // regardless of traversal order.
    assert_eq!(t.len(), sorted.len());
    assert_eq!(t.len(), t.preorder().count());
    assert_eq!(t.len(), t.postorder().count());
    assert_eq!(t.len(), t.levelorder().count());
    assert_eq!(t.is_empty(), t.root().is_none());

    // Invariant 3: the height of each node is always +1 of the maximum child
    // height, and all values in the left subtree are no greater than the node,
    // while all values in the right subtree are no less than it.
    let mut stack = t.root().into_iter().collect::<Vec<_>>();
    while let Some(n) = stack.pop() {
        stack.extend(n.left().into_iter().chain(n.right()));

        let left_height = n.left().map(|v| v.height()).unwrap_or(-1);
        let right_height = n.right().map(|v| v.height()).unwrap_or(-1);
        assert_eq!(n.height(), left_height.max(right_height) + 1);

        if let Some(left) = n.left() {
            assert!(left.value() <= n.value());
        }
        if let Some(right) = n.right() {
            assert!(right.value() >= n.value());
        }
    }
}

/// Render the subtree rooted at `n` in the graphviz "dot" format.
#[allow(unused)]
pub(crate) fn print_dot<T>(n: &Node<T>) -> String
where
    T: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(
        buf,
        r#"node [shape = circle; style = filled; fontcolor = orange4; fillcolor = white;];"#
    )
    .unwrap();

    // Nodes are identified by their address, as values may be duplicated.
    let mut stack = vec![n];
    while let Some(n) = stack.pop() {
        writeln!(buf, r#""{:p}" [label="{}"];"#, n, n.value()).unwrap();

        for v in [n.left(), n.right()] {
            match v {
                Some(v) => {
                    writeln!(buf, "\"{:p}\" -> \"{:p}\" [color = \"orange1\";];", n, v).unwrap();
                    stack.push(v);
                }
                None => {
                    writeln!(buf, "\"null_{:p}\" [shape=point,style=invis];", n).unwrap();
                    writeln!(buf, "\"{:p}\" -> \"null_{:p}\" [style=invis];", n, n).unwrap();
                }
            };
        }
    }

    writeln!(buf, "}}").unwrap();

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_dot() {
        let t = [2, 1, 3].into_iter().collect::<LinkedBst<_>>();
        let root = t.root().unwrap().node();

        let dot = print_dot(root);
        assert!(dot.starts_with("digraph {"));
        assert!(dot.trim_end().ends_with('}'));

        // One labelled vertex per value, and one edge per child link.
        assert_eq!(dot.matches("[label=").count(), 3);
        assert_eq!(dot.matches("color = \"orange1\"").count(), 2);
    }
}
