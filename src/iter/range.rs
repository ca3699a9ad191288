use crate::node::Node;

/// An [`Iterator`] performing a depth-first, in-order walk of a tree, yielding
/// the values `v` for which `low <= v <= high` in ascending order.
///
/// Subtrees that cannot contain a value within the bounds are pruned from the
/// walk.
///
/// Returned by [`LinkedBst::range_find()`](crate::LinkedBst::range_find).
#[derive(Debug)]
pub struct RangeFind<'a, T> {
    low: &'a T,
    high: &'a T,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> RangeFind<'a, T>
where
    T: Ord,
{
    pub(crate) fn new(root: Option<&'a Node<T>>, low: &'a T, high: &'a T) -> Self {
        let mut this = Self {
            low,
            high,
            stack: vec![],
        };

        // Descend down the left side of the tree, pushing all the internal
        // nodes onto the stack until the left-most in-bound node is reached.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: Option<&'a Node<T>>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            if v.value() < self.low {
                // Prune "v" and the left subtree rooted at "v" from the
                // search.
                //
                // All values in the left subtree are less than or equal to
                // "v", and therefore strictly less than the lower bound.
                ptr = v.right();
                continue;
            }

            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, T> Iterator for RangeFind<'a, T>
where
    T: Ord,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        if v.value() > self.high {
            // Every value remaining in the walk is greater than or equal to
            // "v", and therefore strictly greater than the upper bound.
            self.stack.clear();
            return None;
        }

        // Push the right subtree to be visited next.
        self.push_subtree(v.right());

        Some(v.value())
    }
}
