use std::collections::VecDeque;

use crate::node::Node;

/// An [`Iterator`] performing a breadth-first walk of a tree, yielding all
/// values at depth `d` (left to right) before any value at depth `d + 1`.
#[derive(Debug)]
pub struct Levelorder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Levelorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Levelorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.queue.pop_front()?;

        self.queue.extend(v.left());
        self.queue.extend(v.right());

        Some(v.value())
    }
}
