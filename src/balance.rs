//! Tree shape measurement and reconstruction.

use crate::node::{Link, Node};

/// Compute the height of the subtree rooted at `root`.
///
/// An empty subtree has a height of -1, and a leaf has a height of 0.
///
/// The subtree is walked with an explicit stack, so the cost is linear in the
/// number of nodes and independent of the call stack depth.
pub(crate) fn subtree_height<T>(root: Option<&Node<T>>) -> isize {
    let mut height = -1;

    let mut stack = root.map(|v| (v, 0)).into_iter().collect::<Vec<_>>();
    while let Some((n, depth)) = stack.pop() {
        height = height.max(depth);
        stack.extend(n.left().map(|v| (v, depth + 1)));
        stack.extend(n.right().map(|v| (v, depth + 1)));
    }

    height
}

/// The exclusive upper bound on the height of a tree holding `len` values for
/// it to be considered balanced.
///
/// This is `2 * log2(len + 1) - 1`, modelled on the worst-case height of a
/// height-balanced tree.
pub(crate) fn balanced_height_bound(len: usize) -> f64 {
    2.0 * ((len as f64) + 1.0).log2() - 1.0
}

/// Build a tree from the first `len` ascending `values`, with minimal height.
///
/// The median value of each range becomes the root of the subtree holding
/// that range, with the values before it forming the left subtree and the
/// values after it forming the right subtree:
///
/// ```text
///    [1, 2, 3, 4, 5, 6]               4
///              ^                    /   \
///                       ---->      2     6
///                                 / \   /
///                                1   3 5
/// ```
///
/// The median is the element at index `len / 2`. The values are consumed in
/// order (an in-order construction), and the recursion depth is bounded by
/// `log2(len)`.
pub(crate) fn build_balanced<T, I>(values: &mut I, len: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    let left = build_balanced(values, mid);
    let value = values.next()?;
    let right = build_balanced(values, len - mid - 1);

    Some(Box::new(Node::with_children(left, value, right)))
}
