use crate::node::Node;

/// An [`Iterator`] performing a depth-first, pre-order walk of a tree, yielding
/// each parent before its children, and left children before right children.
///
/// This is the default iteration order of a [`LinkedBst`].
///
/// [`LinkedBst`]: crate::LinkedBst
#[derive(Debug)]
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Push the right child first so the left child is popped (and visited)
        // next.
        self.stack.extend(v.right());
        self.stack.extend(v.left());

        Some(v.value())
    }
}
