use std::cmp::Ordering;

/// An owning link to a child (or root) [`Node`], if any.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// The side of a parent a child [`Node`] hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    ///
    /// All values in the left subtree order before `value`, and values that
    /// are greater than or equal to `value` are inserted to the right.
    left: Link<T>,
    right: Link<T>,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Construct a [`Node`] with the given children already linked.
    pub(crate) fn with_children(left: Link<T>, value: T, right: Link<T>) -> Self {
        Self { left, right, value }
    }

    /// Return the side a search for `item` descends towards from this node,
    /// or [`None`] if this node holds a value equal to `item`.
    pub(crate) fn side_for(&self, item: &T) -> Option<Side>
    where
        T: Ord,
    {
        match item.cmp(&self.value) {
            Ordering::Less => Some(Side::Left),
            Ordering::Equal => None,
            Ordering::Greater => Some(Side::Right),
        }
    }

    /// Return the side a new `item` is attached to below this node.
    ///
    /// Unlike [`Node::side_for()`], values equal to this node descend right.
    pub(crate) fn insert_side(&self, item: &T) -> Side
    where
        T: Ord,
    {
        if *item < self.value {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    /// Overwrite the value held in this node, returning the old value.
    ///
    /// The node is not repositioned.
    pub(crate) fn replace_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Link<T> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Link<T> {
        self.right.take()
    }

    pub(crate) fn has_both_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    /// Unlink this node (which has at most one child) from the tree, returning
    /// the value it held and the child that takes its place.
    ///
    /// If this node has no left child, the right child (if any) replaces it.
    /// Otherwise the left child replaces it.
    pub(crate) fn unlink(self: Box<Self>) -> (T, Link<T>) {
        debug_assert!(!self.has_both_children());

        let Self { left, right, value } = *self;
        match left {
            None => (value, right),
            left => (value, left),
        }
    }

    /// Replace the value of this node with the maximum value held in its left
    /// subtree, and remove the node that held that maximum.
    ///
    /// Returns the value previously held by this node.
    ///
    /// ```text
    ///            <5>                  4
    ///            / \                 / \
    ///           2   7     ---->     2   7
    ///          / \                 / \
    ///         1   4               1   3
    ///            /
    ///           3
    /// ```
    ///
    /// The maximum node is the right-most descendant of the left child, so it
    /// has no right child and its parent is relinked to its left child (if
    /// any).
    ///
    /// # Panics
    ///
    /// Panics if this node has no left child.
    pub(crate) fn lift_max_in_left_subtree(&mut self) -> T {
        debug_assert!(self.left.is_some());

        // The parent of the maximum node starts out as "self", linking it on
        // the left.
        let mut slot = &mut self.left;
        while slot.as_deref().is_some_and(|v| v.right.is_some()) {
            slot = match slot {
                Some(v) => &mut v.right,
                None => break,
            };
        }

        let Some(max) = slot.take() else {
            unreachable!("lifting the left subtree maximum of a node with no left child");
        };
        debug_assert!(max.right.is_none());

        let (value, left) = max.unlink();
        *slot = left;

        self.replace_value(value)
    }
}
