use crate::{balance::subtree_height, node::Node};

/// A read-only handle to a node within a [`LinkedBst`], and the subtree rooted
/// at it.
///
/// [`LinkedBst`]: crate::LinkedBst
#[derive(Debug)]
pub struct Position<'a, T>(&'a Node<T>);

impl<T> Clone for Position<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<'_, T> {}

impl<'a, T> Position<'a, T> {
    pub(crate) fn new(node: &'a Node<T>) -> Self {
        Self(node)
    }

    pub(crate) fn node(self) -> &'a Node<T> {
        self.0
    }

    /// The value held at this position.
    pub fn value(self) -> &'a T {
        self.0.value()
    }

    /// The root of the left subtree, if any.
    pub fn left(self) -> Option<Self> {
        self.0.left().map(Self)
    }

    /// The root of the right subtree, if any.
    pub fn right(self) -> Option<Self> {
        self.0.right().map(Self)
    }

    /// The height of the subtree rooted at this position, where a leaf has a
    /// height of 0.
    pub fn height(self) -> isize {
        subtree_height(Some(self.0))
    }
}
