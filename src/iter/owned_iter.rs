use crate::node::{Link, Node};

/// An iterator of owned values in ascending order, consuming the tree.
///
/// Returned by [`LinkedBst::into_sorted()`](crate::LinkedBst::into_sorted).
#[derive(Debug)]
pub struct IntoSorted<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoSorted<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: Link<T>) {
        let mut ptr = subtree_root;

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<T> Iterator for IntoSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        let right = v.take_right();
        self.push_subtree(right);

        Some(v.into_value())
    }
}

impl<T> Drop for IntoSorted<T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

/// An iterator of owned values in the default pre-order, consuming the tree.
///
/// Nodes are unlinked from their children as they are visited, so dropping a
/// partially consumed [`IntoIter`] releases the remaining nodes without
/// recursing.
#[derive(Debug)]
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.stack.pop()?;

        self.stack.extend(v.take_right());
        self.stack.extend(v.take_left());

        Some(v.into_value())
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}
