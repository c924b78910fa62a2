//! The four traversal orders. Each walks the whole tree eagerly, calling the visitor once per
//! stored value. They use an explicit stack (or queue) rather than recursion so that a tree
//! degraded into a long list can't overflow the call stack.

use std::collections::VecDeque;

use crate::tree::Tree;

impl<T> Tree<T> {
    /// Visits each value before the values in its left subtree, then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into();
    ///
    /// let mut values = Vec::new();
    /// tree.preorder_traverse(|v| values.push(*v));
    /// assert_eq!(values, [5, 3, 1, 4, 8, 7, 9]);
    /// ```
    pub fn preorder_traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut stack: Vec<_> = self.root.0.into_iter().collect();
        while let Some(idx) = stack.pop() {
            let node = self.node(idx);
            visit(&node.value);
            // Right first so the left subtree is popped (and visited) first.
            stack.extend(node.right.0);
            stack.extend(node.left.0);
        }
    }

    /// Visits the values in ascending order: left subtree, then the value, then right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into();
    ///
    /// let mut values = Vec::new();
    /// tree.inorder_traverse(|v| values.push(*v));
    /// assert_eq!(values, [1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn inorder_traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut stack = Vec::new();
        let mut current = self.root.0;
        loop {
            while let Some(idx) = current {
                stack.push(idx);
                current = self.node(idx).left.0;
            }
            let Some(idx) = stack.pop() else {
                break;
            };
            let node = self.node(idx);
            visit(&node.value);
            current = node.right.0;
        }
    }

    /// Visits each value after both of its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into();
    ///
    /// let mut values = Vec::new();
    /// tree.postorder_traverse(|v| values.push(*v));
    /// assert_eq!(values, [1, 4, 3, 7, 9, 8, 5]);
    /// ```
    pub fn postorder_traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        // The flag marks nodes whose children have already been pushed.
        let mut stack: Vec<_> = self.root.0.map(|root| (root, false)).into_iter().collect();
        while let Some((idx, expanded)) = stack.pop() {
            let node = self.node(idx);
            if expanded {
                visit(&node.value);
            } else {
                stack.push((idx, true));
                stack.extend(node.right.0.map(|right| (right, false)));
                stack.extend(node.left.0.map(|left| (left, false)));
            }
        }
    }

    /// Visits the values level by level from the root down, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into();
    ///
    /// let mut values = Vec::new();
    /// tree.levelorder_traverse(|v| values.push(*v));
    /// assert_eq!(values, [5, 3, 8, 1, 4, 7, 9]);
    /// ```
    pub fn levelorder_traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut queue: VecDeque<_> = self.root.0.into_iter().collect();
        while let Some(idx) = queue.pop_front() {
            let node = self.node(idx);
            visit(&node.value);
            queue.extend(node.left.0);
            queue.extend(node.right.0);
        }
    }
}
