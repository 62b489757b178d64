//! This crate exposes a plain Binary Search Tree (BST) along with the classic
//! ways of walking one, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` where `height` is the longest path from the root
//! `Node` to a leaf `Node`. The [`Tree`] here does nothing to keep that height down, so
//! inserting keys in sorted order produces a tree as tall as it is large.
//!
//! ## Traversals
//!
//! Every key can be visited in one of four [`Order`]s. In-order visits the left subtree,
//! then the subtree root, then the right subtree, which yields the keys sorted. Pre-order and
//! post-order move the subtree root to the front or the back. Level-order goes breadth first.
//! The first three come in a recursive form and an iterative form that manages its own stack;
//! both emit exactly the same sequence.
//!
//! ```
//! use bst::{Order, Tree};
//!
//! let tree: Tree<i32> = [50, 30, 20, 40, 70, 60, 80].into_iter().collect();
//!
//! let mut recursive = Vec::new();
//! tree.post_order(|key| recursive.push(*key));
//!
//! let mut iterative = Vec::new();
//! tree.post_order_iterative(|key| iterative.push(*key));
//!
//! assert_eq!(recursive, [20, 40, 30, 60, 80, 70, 50]);
//! assert_eq!(recursive, iterative);
//! assert_eq!(tree.keys(Order::LevelOrder), [&50, &30, &70, &20, &40, &60, &80]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod order;
pub mod tree;

pub use error::Violation;
pub use order::Order;
pub use tree::Tree;
