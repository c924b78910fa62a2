//! This crate exposes a plain, unbalanced Binary Search Tree (BST) storing
//! values of a single ordered type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The invariants of
//! this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than **or equal to** its own value.
//!
//! > Note that the second rule makes this a multiset: inserting the same value
//! > twice stores it twice, and the duplicate always lands to the right.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). This tree never
//! rebalances, so inserting values in sorted order produces a tree whose
//! height is its size. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into();
//!
//! let mut sorted = Vec::new();
//! tree.inorder_traverse(|v| sorted.push(*v));
//! assert_eq!(sorted, [1, 3, 4, 5, 7, 8, 9]);
//!
//! tree.remove(&5);
//! assert!(!tree.search(&5));
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.successor_of(&4), Ok(&7));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod traverse;
pub mod tree;
mod util;

pub use error::{Error, Query, Result};
pub use tree::Tree;
