//! An unbalanced BST whose nodes live in an arena. Each node links to its children and back to
//! its parent through arena indices, so walking up the tree (for predecessors, successors and
//! splicing during deletion) is as cheap as walking down it.
//!
//! # Examples
//!
//! ```
//! use bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//! assert!(matches!(tree.min(), Err(Error::EmptyTree(_))));
//!
//! tree.insert(1);
//! assert!(tree.search(&1));
//!
//! // Inserting the same value again stores a second copy.
//! tree.insert(1);
//! assert_eq!(tree.size(), 2);
//!
//! // Removing takes out one copy at a time.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.size(), 1);
//! assert!(tree.search(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use generational_arena::{Arena, Index};
use log::{debug, trace};

use crate::error::{Error, Query, Result};
use crate::util::Side;

/// A Binary Search Tree holding values of `T`. This can be used for inserting, finding, and
/// removing values as well as asking for their neighbours in sorted order.
///
/// The tree never rebalances. Its shape depends only on the order values were inserted in.
pub struct Tree<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) root: Link,
}

/// An optional reference to a node in the tree's arena. Child links own the node they point to
/// in the sense that a node is live exactly when a child link (or the root) reaches it. Parent
/// links are back-references only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Link(pub(crate) Option<Index>);

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link,
    pub(crate) right: Link,
    pub(crate) parent: Link,
}

impl<T> Node<T> {
    fn new(value: T, parent: Link) -> Self {
        Self {
            value,
            left: Link(None),
            right: Link(None),
            parent,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies are built by feeding the values of `self` in sorted order into a fresh tree. The copy
/// holds the same values but, because of that insertion order, not necessarily the same shape.
impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    fn clone(&self) -> Self {
        let mut tree = Self {
            nodes: Arena::with_capacity(self.size()),
            root: Link(None),
        };
        self.inorder_traverse(|value| tree.insert(value.clone()));
        tree
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.inorder_traverse(|value| {
            list.entry(value);
        });
        list.finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Tree<T>
where
    T: Ord,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for Tree<T>
where
    T: Ord,
{
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: Link(None),
        }
    }

    /// The number of values stored in the tree, counting duplicates.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree stores no values at all.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The number of edges on the longest path from the root to a leaf. Both an empty tree and a
    /// tree with a single value have a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let balanced: Tree<_> = [4, 2, 6, 1, 3, 5, 7].into();
    /// assert_eq!(balanced.height(), 2);
    ///
    /// // Sorted insertion degrades the tree into a list.
    /// let skewed: Tree<_> = [1, 2, 3, 4, 5, 6, 7].into();
    /// assert_eq!(skewed.height(), 6);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(Index, usize)> =
            self.root.0.map(|root| (root, 0)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(idx);
            for child in [node.left, node.right].iter().filter_map(|link| link.0) {
                stack.push((child, depth + 1));
            }
        }

        height
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        trace!("clearing {} nodes", self.size());
        self.nodes.clear();
        self.root = Link(None);
    }

    /// Exchanges the contents of two trees without touching any of their nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut a: Tree<_> = [1, 2].into();
    /// let mut b: Tree<_> = [3].into();
    /// a.swap(&mut b);
    ///
    /// assert_eq!(a.size(), 1);
    /// assert_eq!(b.size(), 2);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves every value out of `self` into the returned tree, leaving `self` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut source: Tree<_> = [2, 1, 3].into();
    /// let moved = source.take();
    ///
    /// assert!(source.is_empty());
    /// assert_eq!(moved.size(), 3);
    /// ```
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Replaces the contents of `self` with the contents of `source`. The previous contents of
    /// `self` are dropped and `source` is left empty.
    pub fn assign(&mut self, source: &mut Self) {
        self.swap(source);
        source.clear();
    }

    pub(crate) fn node(&self, idx: Index) -> &Node<T> {
        &self.nodes[idx]
    }

    fn node_mut(&mut self, idx: Index) -> &mut Node<T> {
        &mut self.nodes[idx]
    }

    /// Walks from `idx` towards `side` for as long as there is a child there. With `Side::Left`
    /// this finds the minimum of the subtree rooted at `idx`.
    fn extremum(&self, mut idx: Index, side: Side) -> Index {
        while let Some(child) = self.node(idx).child(side).0 {
            idx = child;
        }
        idx
    }

    /// The in-order neighbour of `idx`: its predecessor for `Side::Left` and its successor for
    /// `Side::Right`.
    fn neighbor(&self, idx: Index, side: Side) -> Option<Index> {
        if let Some(child) = self.node(idx).child(side).0 {
            return Some(self.extremum(child, side.opposite()));
        }

        // Climb until we arrive at an ancestor from its other side.
        let mut current = idx;
        while let Some(parent) = self.node(current).parent.0 {
            if self.node(parent).child(side).0 != Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    fn side_of(&self, idx: Index, parent: Index) -> Side {
        if self.node(parent).left.0 == Some(idx) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Puts `replacement` where `dest` is in the tree. `dest`'s own links are left alone so the
    /// caller can still reach its children.
    fn transplant(&mut self, dest: Index, replacement: Link) {
        let parent = self.node(dest).parent;
        match parent.0 {
            None => self.root = replacement,
            Some(parent) => {
                let side = self.side_of(dest, parent);
                *self.node_mut(parent).child_mut(side) = replacement;
            }
        }
        if let Some(replacement) = replacement.0 {
            self.node_mut(replacement).parent = parent;
        }
        trace!("transplanted {:?} into the place of {:?}", replacement, dest);
    }

    /// Unlinks the node at `idx` from the tree and frees it, returning its value.
    fn remove_node(&mut self, idx: Index) -> T {
        let Node { left, right, .. } = *self.node(idx);
        match (left.0, right.0) {
            (None, _) => self.transplant(idx, right),
            (Some(_), None) => self.transplant(idx, left),
            (Some(left_idx), Some(right_idx)) => {
                let successor = self.extremum(right_idx, Side::Left);
                if successor != right_idx {
                    let successor_right = self.node(successor).right;
                    self.transplant(successor, successor_right);
                    self.node_mut(successor).right = right;
                    self.node_mut(right_idx).parent = Link(Some(successor));
                }
                self.transplant(idx, Link(Some(successor)));
                self.node_mut(successor).left = left;
                self.node_mut(left_idx).parent = Link(Some(successor));

                if cfg!(debug_assertions) {
                    let node = self.node(successor);
                    for child in [node.left, node.right].iter().filter_map(|link| link.0) {
                        assert_eq!(self.node(child).parent, Link(Some(successor)));
                    }
                }
            }
        }

        self.nodes
            .remove(idx)
            .expect("Removing a node implies it is in the arena")
            .value
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts the given value into the tree. Values equal to one already stored are kept as
    /// separate entries to the right of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// let mut values = Vec::new();
    /// tree.preorder_traverse(|v| values.push(*v));
    /// assert_eq!(values, [2, 1, 2]);
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut parent = None;
        let mut current = self.root.0;
        while let Some(idx) = current {
            let side = if self.node(idx).value > value {
                Side::Left
            } else {
                Side::Right
            };
            parent = Some((idx, side));
            current = self.node(idx).child(side).0;
        }

        let new = self
            .nodes
            .insert(Node::new(value, Link(parent.map(|(idx, _)| idx))));
        match parent {
            Some((parent, side)) => *self.node_mut(parent).child_mut(side) = Link(Some(new)),
            None => self.root = Link(Some(new)),
        }
        trace!("inserted {:?} under {:?}", new, parent);

        if cfg!(debug_assertions) {
            if let Some((parent, side)) = parent {
                let (parent, new) = (self.node(parent), self.node(new));
                match side {
                    Side::Left => assert!(new.value < parent.value),
                    Side::Right => assert!(new.value >= parent.value),
                }
            }
        }
    }

    /// Removes one node holding the given value and returns the stored value. If the tree does
    /// not contain the value, nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into();
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.remove(&42), None);
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        match self.find_node(value) {
            Some(idx) => Some(self.remove_node(idx)),
            None => {
                debug!("nothing to remove, value not found");
                None
            }
        }
    }

    /// Whether the tree holds at least one copy of the given value.
    pub fn search(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }

    /// The smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when the tree has no values.
    pub fn min(&self) -> Result<&T> {
        self.root
            .0
            .map(|root| &self.node(self.extremum(root, Side::Left)).value)
            .ok_or(Error::EmptyTree(Query::Min))
    }

    /// The largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when the tree has no values.
    pub fn max(&self) -> Result<&T> {
        self.root
            .0
            .map(|root| &self.node(self.extremum(root, Side::Right)).value)
            .ok_or(Error::EmptyTree(Query::Max))
    }

    /// The value just before `value` in sorted order.
    ///
    /// **Note** if `value` isn't in the tree, or nothing comes before it, `value` itself is
    /// returned. Callers who need to tell those cases apart from a real answer have to compare
    /// the result against `value` (or [`search`](Self::search) first).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when the tree has no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into();
    ///
    /// assert_eq!(tree.predecessor_of(&5), Ok(&4));
    /// assert_eq!(tree.predecessor_of(&4), Ok(&3));
    ///
    /// // No predecessor and missing values both come back unchanged.
    /// assert_eq!(tree.predecessor_of(&1), Ok(&1));
    /// assert_eq!(tree.predecessor_of(&42), Ok(&42));
    /// ```
    pub fn predecessor_of<'a>(&'a self, value: &'a T) -> Result<&'a T> {
        if self.is_empty() {
            return Err(Error::EmptyTree(Query::Predecessor));
        }
        Ok(self.neighbor_of(value, Side::Left).unwrap_or(value))
    }

    /// The value just after `value` in sorted order.
    ///
    /// **Note** as with [`predecessor_of`](Self::predecessor_of), a missing `value` or one with
    /// nothing after it is returned unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when the tree has no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into();
    ///
    /// assert_eq!(tree.successor_of(&4), Ok(&5));
    /// assert_eq!(tree.successor_of(&8), Ok(&8));
    /// ```
    pub fn successor_of<'a>(&'a self, value: &'a T) -> Result<&'a T> {
        if self.is_empty() {
            return Err(Error::EmptyTree(Query::Successor));
        }
        Ok(self.neighbor_of(value, Side::Right).unwrap_or(value))
    }

    fn neighbor_of(&self, value: &T, side: Side) -> Option<&T> {
        let idx = self.find_node(value)?;
        self.neighbor(idx, side).map(|neighbor| &self.node(neighbor).value)
    }

    /// Finds the first node holding `value` on the path down from the root.
    fn find_node(&self, value: &T) -> Option<Index> {
        let mut current = self.root.0;
        while let Some(idx) = current {
            let node = self.node(idx);
            current = match value.cmp(&node.value) {
                Ordering::Equal => return Some(idx),
                Ordering::Greater => node.right.0,
                Ordering::Less => node.left.0,
            };
        }
        None
    }
}

#[cfg(test)]
impl<T> Tree<T>
where
    T: Ord,
{
    /// Walks every reachable node checking ordering, parent links, and the node count.
    pub(crate) fn assert_invariants(&self) {
        if let Some(root) = self.root.0 {
            assert_eq!(self.node(root).parent, Link(None));
        }

        // Each entry carries the inclusive lower bound and exclusive upper bound its value must
        // respect.
        let mut reachable = 0;
        let mut stack: Vec<(Index, Option<&T>, Option<&T>)> =
            self.root.0.map(|root| (root, None, None)).into_iter().collect();
        while let Some((idx, lower, upper)) = stack.pop() {
            reachable += 1;
            let node = self.node(idx);
            if let Some(lower) = lower {
                assert!(node.value >= *lower);
            }
            if let Some(upper) = upper {
                assert!(node.value < *upper);
            }
            if let Some(left) = node.left.0 {
                assert_eq!(self.node(left).parent, Link(Some(idx)));
                stack.push((left, lower, Some(&node.value)));
            }
            if let Some(right) = node.right.0 {
                assert_eq!(self.node(right).parent, Link(Some(idx)));
                stack.push((right, Some(&node.value), upper));
            }
        }
        assert_eq!(reachable, self.size());
    }
}
