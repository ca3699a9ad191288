use crate::node::Node;

/// An [`Iterator`] performing a depth-first, post-order walk of a tree,
/// yielding the left subtree, then the right subtree, then the parent.
#[derive(Debug)]
pub struct Postorder<'a, T> {
    /// Nodes to visit, and whether the children of each node have already
    /// been pushed onto the stack.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|v| (v, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (v, expanded) = self.stack.pop()?;
            if expanded {
                return Some(v.value());
            }

            // Revisit this node once both subtrees have been yielded.
            self.stack.push((v, true));
            self.stack.extend(v.right().map(|v| (v, false)));
            self.stack.extend(v.left().map(|v| (v, false)));
        }
    }
}
