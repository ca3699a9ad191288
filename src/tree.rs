use std::fmt::{self, Debug, Display};

use log::{debug, log_enabled, trace, Level};

use crate::{
    balance::{balanced_height_bound, build_balanced, subtree_height},
    error::NotFound,
    iter::{Inorder, IntoIter, IntoSorted, Levelorder, Postorder, Preorder, RangeFind},
    node::{Link, Node},
    position::Position,
};

/// An ordered collection of `T`, stored in a linked binary search tree.
///
/// Duplicate values are permitted, and are inserted into the right subtree of
/// an equal ancestor. After a [`LinkedBst::rebalance()`] an equal value may
/// also sit in the left subtree - the in-order traversal is always
/// non-decreasing, but not every equal value is to the right. The tree is never rebalanced implicitly - call
/// [`LinkedBst::rebalance()`] to restore a minimal height after skewing
/// insertions or removals.
///
/// Iterating over a [`LinkedBst`] directly yields values in pre-order, see
/// [`LinkedBst::inorder()`] for an ascending ordering.
pub struct LinkedBst<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for LinkedBst<T> {
    fn default() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }
}

impl<T> LinkedBst<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values stored in the tree, including duplicates.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        let root = self.root.take();
        self.size = 0;

        // Unlink the nodes one at a time to avoid recursing down the (possibly
        // very deep) tree when dropping it.
        drop(IntoIter::new(root));
    }

    /// Returns the [`Position`] of the root node, if any.
    pub fn root(&self) -> Option<Position<'_, T>> {
        self.root.as_deref().map(Position::new)
    }

    /// Iterate over the values in the tree in pre-order (the default
    /// iteration order).
    pub fn iter(&self) -> Preorder<'_, T> {
        self.preorder()
    }

    /// Iterate over the values in the tree in ascending order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.as_deref())
    }

    /// Iterate over the values in the tree visiting each parent before its
    /// children, and the left child before the right.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.as_deref())
    }

    /// Iterate over the values in the tree visiting the children of a node
    /// before the node itself.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root.as_deref())
    }

    /// Iterate over the values in the tree breadth-first, from the root down.
    pub fn levelorder(&self) -> Levelorder<'_, T> {
        Levelorder::new(self.root.as_deref())
    }

    /// Consume the tree, yielding the owned values in ascending order.
    pub fn into_sorted(mut self) -> IntoSorted<T> {
        self.size = 0;
        IntoSorted::new(self.root.take())
    }

    /// Returns the height of the tree.
    ///
    /// An empty tree has a height of -1, and a tree containing a single value
    /// has a height of 0.
    pub fn height(&self) -> isize {
        self.height_at(None)
    }

    /// Returns the height of the subtree rooted at `position`, or the height of
    /// the whole tree if `position` is [`None`].
    pub fn height_at(&self, position: Option<Position<'_, T>>) -> isize {
        match position {
            Some(v) => subtree_height(Some(v.node())),
            None => subtree_height(self.root.as_deref()),
        }
    }

    /// Returns true if the height of the tree is strictly less than
    /// `2 * log2(len + 1) - 1`.
    ///
    /// This is a diagnostic only - see [`LinkedBst::rebalance()`]. An empty
    /// tree is never considered balanced.
    pub fn is_balanced(&self) -> bool {
        (self.height() as f64) < balanced_height_bound(self.size)
    }

    /// Rebuild the tree to have the minimum height possible for the number of
    /// values it contains.
    ///
    /// All values are extracted in ascending order and the tree is rebuilt by
    /// recursively selecting the median value of each range as the root of the
    /// subtree holding it. The values stored in the tree are unchanged.
    pub fn rebalance(&mut self) {
        let height_before = log_enabled!(Level::Debug).then(|| self.height());

        let mut sorted = IntoSorted::new(self.root.take());
        self.root = build_balanced(&mut sorted, self.size);

        // Invariant: all extracted values were relinked into the new tree.
        debug_assert!(sorted.next().is_none());

        if let Some(height_before) = height_before {
            debug!(
                "rebalanced tree of {} values (height {} -> {})",
                self.size,
                height_before,
                self.height(),
            );
        }
    }
}

impl<T> LinkedBst<T>
where
    T: Ord,
{
    /// Insert `item` into the tree.
    ///
    /// Values equal to an existing value are inserted to the right of it. The
    /// tree is not rebalanced.
    pub fn insert(&mut self, item: T) {
        let mut slot = &mut self.root;
        while let Some(v) = slot {
            let side = v.insert_side(&item);
            slot = v.child_mut(side);
        }

        *slot = Some(Box::new(Node::new(item)));
        self.size += 1;
    }

    /// Return a reference to a stored value equal to `item`, if any.
    pub fn find(&self, item: &T) -> Option<&T> {
        self.position(item).map(Position::value)
    }

    /// Return the [`Position`] of the first node on the search path holding a
    /// value equal to `item`, if any.
    pub fn position(&self, item: &T) -> Option<Position<'_, T>> {
        let mut ptr = self.root.as_deref();
        while let Some(v) = ptr {
            match v.side_for(item) {
                Some(side) => ptr = v.child(side),
                None => return Some(Position::new(v)),
            }
        }

        None
    }

    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Remove a single value equal to `item` from the tree, returning the
    /// removed value.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no value equal to `item` is stored in the tree,
    /// in which case the tree is unchanged.
    pub fn remove(&mut self, item: &T) -> Result<T, NotFound> {
        // A sentinel link above the root acting as the root's parent, allowing
        // the root to be unlinked in the same way as any other node.
        //
        // The root is restored from it after the removal.
        let mut pre_root = self.root.take();

        // Descend to the link holding the target node, or the empty link where
        // it would be if present.
        let mut slot = &mut pre_root;
        while let Some(side) = slot.as_deref().and_then(|v| v.side_for(item)) {
            slot = match slot {
                Some(v) => v.child_mut(side),
                None => break,
            };
        }

        let Some(mut target) = slot.take() else {
            self.root = pre_root;
            trace!("remove of absent item");
            return Err(NotFound);
        };

        // The target node may have 0, 1 or 2 child node(s).
        //
        // If it has both, the maximum value of the left subtree replaces the
        // target value in place, and the node that held it is unlinked.
        //
        // Otherwise the parent is relinked to the right child when there is no
        // left child, or to the left child when there is no right child.
        let (removed, replacement) = if target.has_both_children() {
            (target.lift_max_in_left_subtree(), Some(target))
        } else {
            target.unlink()
        };

        *slot = replacement;
        self.root = pre_root;
        self.size -= 1;

        Ok(removed)
    }

    /// Overwrite the stored value equal to `item` with `new_item`, returning
    /// the old value, or [`None`] if no value equal to `item` is stored.
    ///
    /// The node holding the value is not repositioned. The caller must ensure
    /// `new_item` orders the same as `item` relative to the other values in the
    /// tree, otherwise the ordering of the tree is corrupted.
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T> {
        let mut ptr = self.root.as_deref_mut();
        while let Some(v) = ptr {
            match v.side_for(item) {
                Some(side) => ptr = v.child_mut(side).as_deref_mut(),
                None => return Some(v.replace_value(new_item)),
            }
        }

        None
    }

    /// Iterate over the stored values `v` for which `low <= v <= high`, in
    /// ascending order.
    ///
    /// Subtrees holding only values outside of the bounds are not visited.
    pub fn range_find<'a>(&'a self, low: &'a T, high: &'a T) -> RangeFind<'a, T> {
        RangeFind::new(self.root.as_deref(), low, high)
    }

    /// Return the smallest stored value strictly greater than `item`, if any.
    pub fn successor(&self, item: &T) -> Option<&T> {
        let mut best = None;

        let mut ptr = self.root.as_deref();
        while let Some(v) = ptr {
            if item < v.value() {
                // "v" is a candidate, but a smaller one may be on the left.
                best = Some(v.value());
                ptr = v.left();
            } else {
                ptr = v.right();
            }
        }

        best
    }

    /// Return the largest stored value strictly less than `item`, if any.
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        let mut best = None;

        let mut ptr = self.root.as_deref();
        while let Some(v) = ptr {
            if v.value() < item {
                // "v" is a candidate, but a larger one may be on the right.
                best = Some(v.value());
                ptr = v.right();
            } else {
                ptr = v.left();
            }
        }

        best
    }
}

impl<T> Drop for LinkedBst<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Debug for LinkedBst<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inorder()).finish()
    }
}

/// Render the tree rotated 90 degrees anticlockwise, with one value per line
/// prefixed with a `"| "` per level of depth.
///
/// A tree built by inserting `2, 1, 3, 4` renders as:
///
/// ```text
/// | | 4
/// | 3
/// 2
/// | 1
/// ```
impl<T> Display for LinkedBst<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A reverse in-order walk, visiting the right subtree first.
        let mut stack = vec![];
        let mut ptr = self.root.as_deref().map(|v| (v, 0));
        loop {
            while let Some((v, depth)) = ptr {
                stack.push((v, depth));
                ptr = v.right().map(|v| (v, depth + 1));
            }

            let Some((v, depth)) = stack.pop() else {
                return Ok(());
            };

            writeln!(f, "{}{}", "| ".repeat(depth), v.value())?;
            ptr = v.left().map(|v| (v, depth + 1));
        }
    }
}

impl<T> FromIterator<T> for LinkedBst<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<T> Extend<T> for LinkedBst<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedBst<T> {
    type Item = &'a T;
    type IntoIter = Preorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedBst<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.size = 0;
        IntoIter::new(self.root.take())
    }
}
