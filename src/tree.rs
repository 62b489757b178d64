//! A plain, unbalanced Binary Search Tree of keys. Each parent exclusively owns its children
//! through `Option<Box<_>>` slots so there is no `unsafe` and no reference counting.
//!
//! Keys are kept in search order and duplicates are ignored. Deleting a node with two children
//! promotes its in-order successor (the smallest key of its right subtree). Nothing rebalances
//! the tree, so inserting sorted keys degenerates it into a list. `insert`, `delete`, `Drop` and
//! `Clone` are loops rather than recursion so that such trees are still usable.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [50, 30, 20, 40, 70, 60, 80] {
//!     tree.insert(key);
//! }
//!
//! // Inserting an existing key does nothing.
//! assert!(!tree.insert(30));
//!
//! // Deleting a node with two children promotes its successor.
//! assert!(tree.delete(&50));
//! assert_eq!(tree.root(), Some(&60));
//!
//! let mut keys = Vec::new();
//! tree.in_order(|key| keys.push(*key));
//! assert_eq!(keys, [20, 30, 40, 60, 70, 80]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use log::trace;

use crate::error::Violation;
use crate::node::{self, Link, Node};
use crate::order::Order;

/// An unbalanced Binary Search Tree. This can be used for inserting, finding, and deleting keys
/// and for walking them in any [`Order`].
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Dropping a `Box<Node>` drops its children recursively which overflows the stack on a
    // degenerate tree. Detach children onto a heap allocated stack instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    /// Deep copies the tree, preserving its shape. Nodes are rebuilt in post-order so both
    /// subtrees of a node are finished (and on top of `built`) before the node itself.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<K>>> = Vec::new();
        let mut pending = self.post_order_stack();
        while let Some(node) = pending.pop() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                key: node.key.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they hold the same keys, regardless of shape.
impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The key stored in the root node, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.root(), Some(&2));
    ///
    /// tree.delete(&2);
    /// assert_eq!(tree.root(), Some(&3));
    /// ```
    pub fn root(&self) -> Option<&K> {
        self.root_node().map(|root| &root.key)
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root_node().map(Node::min_value)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root_node().map(Node::max_value)
    }

    /// The number of edges on the longest path from the root to a leaf. A tree with a single
    /// node has a height of 0, and so does an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let balanced: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let skewed: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(balanced.height(), 1);
    /// assert_eq!(skewed.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let mut queue: VecDeque<&Node<K>> = self.root_node().into_iter().collect();
        let mut levels: usize = 0;
        while !queue.is_empty() {
            levels += 1;
            for _ in 0..queue.len() {
                if let Some(node) = queue.pop_front() {
                    queue.extend(node.left());
                    queue.extend(node.right());
                }
            }
        }

        levels.saturating_sub(1)
    }

    /// The number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        let mut stack: Vec<&Node<K>> = self.root_node().into_iter().collect();
        let mut leaves = 0;
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                leaves += 1;
            }
            stack.extend(node.right());
            stack.extend(node.left());
        }

        leaves
    }

    /// A lazy iterator over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// let keys: Vec<_> = tree.iter().copied().collect();
    ///
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Collects the keys in the given order.
    pub fn keys(&self, order: Order) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        self.traverse(order, |key| keys.push(key));
        keys
    }

    /// Emits every key to `visit` in the given order using the iterative (explicit stack or
    /// queue) traversals.
    pub fn traverse<'a>(&'a self, order: Order, visit: impl FnMut(&'a K)) {
        match order {
            Order::InOrder => self.in_order_iterative(visit),
            Order::PreOrder => self.pre_order_iterative(visit),
            Order::PostOrder => self.post_order_iterative(visit),
            Order::LevelOrder => self.level_order(visit),
        }
    }

    /// Emits every key to `visit` in the given order using the recursive traversals. Level-order
    /// is breadth first and has no recursive form so it uses [`level_order`][Self::level_order].
    ///
    /// The recursion is as deep as the tree is tall.
    pub fn traverse_recursive<'a>(&'a self, order: Order, visit: impl FnMut(&'a K)) {
        match order {
            Order::InOrder => self.in_order(visit),
            Order::PreOrder => self.pre_order(visit),
            Order::PostOrder => self.post_order(visit),
            Order::LevelOrder => self.level_order(visit),
        }
    }

    /// Recursively emits the keys in ascending order: left subtree, node, right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 3, 1].into_iter().collect();
    /// let mut keys = Vec::new();
    /// tree.in_order(|key| keys.push(*key));
    ///
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn in_order<'a>(&'a self, mut visit: impl FnMut(&'a K)) {
        if let Some(root) = self.root_node() {
            root.in_order(&mut visit);
        }
    }

    /// Recursively emits each node before its left and then right subtrees.
    pub fn pre_order<'a>(&'a self, mut visit: impl FnMut(&'a K)) {
        if let Some(root) = self.root_node() {
            root.pre_order(&mut visit);
        }
    }

    /// Recursively emits both subtrees of a node before the node itself.
    pub fn post_order<'a>(&'a self, mut visit: impl FnMut(&'a K)) {
        if let Some(root) = self.root_node() {
            root.post_order(&mut visit);
        }
    }

    /// Emits the keys breadth first, from the root down and left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    /// let mut keys = Vec::new();
    /// tree.level_order(|key| keys.push(*key));
    ///
    /// assert_eq!(keys, [4, 2, 6, 1, 3, 5, 7]);
    /// ```
    pub fn level_order<'a>(&'a self, mut visit: impl FnMut(&'a K)) {
        let mut queue: VecDeque<&Node<K>> = self.root_node().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(&node.key);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// In-order traversal with an explicit stack. Ancestors are pushed while descending to the
    /// left; each popped node is emitted and then its right subtree is walked the same way.
    pub fn in_order_iterative<'a>(&'a self, mut visit: impl FnMut(&'a K)) {
        let mut stack: Vec<&Node<K>> = Vec::new();
        let mut current = self.root_node();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }

            match stack.pop() {
                Some(node) => {
                    visit(&node.key);
                    current = node.right();
                }
                None => break,
            }
        }
    }

    /// Pre-order traversal with an explicit stack seeded with the root. The right child is pushed
    /// before the left one so the left subtree is popped first.
    pub fn pre_order_iterative<'a>(&'a self, mut visit: impl FnMut(&'a K)) {
        let mut stack: Vec<&Node<K>> = self.root_node().into_iter().collect();
        while let Some(node) = stack.pop() {
            visit(&node.key);
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    /// Post-order traversal with two stacks. The first drives a node, right, left walk and every
    /// node it pops is pushed onto the second; draining the second stack yields post-order.
    pub fn post_order_iterative<'a>(&'a self, mut visit: impl FnMut(&'a K)) {
        let mut output = self.post_order_stack();
        while let Some(node) = output.pop() {
            visit(&node.key);
        }
    }

    /// Runs a pre-order-like walk (node, right, left) that pushes every node it pops onto a
    /// second stack. Popping that second stack until it is empty yields post-order.
    fn post_order_stack(&self) -> Vec<&Node<K>> {
        let mut pending: Vec<&Node<K>> = self.root_node().into_iter().collect();
        let mut output = Vec::with_capacity(self.len);
        while let Some(node) = pending.pop() {
            output.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }

        output
    }

    fn root_node(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Inserts the key into the tree as a new leaf. Returns whether the key was added: inserting
    /// a key that is already present leaves the tree unchanged and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let slot = node::locate(&mut self.root, &key);
        if slot.is_some() {
            trace!("insert: key already present");
            return false;
        }

        *slot = Some(Node::new_boxed(key));
        self.len += 1;
        trace!("insert: added leaf, len = {}", self.len);
        true
    }

    /// Deletes the node containing the given key from the tree. Returns whether a node was
    /// removed: deleting a key that isn't present leaves the tree unchanged and returns `false`.
    ///
    /// A node with one child is replaced by that child. A node with two children takes the key
    /// of its in-order successor, whose own node is then removed from the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = [50, 30, 20, 40, 70, 60, 80].into_iter().collect();
    ///
    /// assert!(tree.delete(&50));
    /// assert!(!tree.delete(&50));
    ///
    /// assert_eq!(tree.root(), Some(&60));
    /// assert!(!tree.contains(&50));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        let slot = node::locate(&mut self.root, key);
        let Some(mut node) = slot.take() else {
            trace!("delete: key not found");
            return false;
        };

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                node.right = Some(right);
                if let Some(successor) = node::take_min(&mut node.right) {
                    node.key = successor;
                }
                node.left = Some(left);
                Some(node)
            }
        };
        self.len -= 1;
        trace!("delete: removed node, len = {}", self.len);
        true
    }

    /// Whether the tree has a node with the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root_node();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// Checks that every key is strictly between the bounds set by its ancestors and that the
    /// cached length matches the number of nodes.
    pub fn validate(&self) -> Result<(), Violation<K>>
    where
        K: Clone,
    {
        let mut stack: Vec<(&Node<K>, Option<&K>, Option<&K>)> = self
            .root_node()
            .map(|root| (root, None, None))
            .into_iter()
            .collect();
        let mut counted = 0;

        while let Some((node, lower, upper)) = stack.pop() {
            counted += 1;

            let bound = lower
                .filter(|bound| node.key <= **bound)
                .or_else(|| upper.filter(|bound| node.key >= **bound));
            if let Some(bound) = bound {
                return Err(Violation::OutOfOrder {
                    key: node.key.clone(),
                    bound: bound.clone(),
                });
            }

            if let Some(left) = node.left() {
                stack.push((left, lower, Some(&node.key)));
            }
            if let Some(right) = node.right() {
                stack.push((right, Some(&node.key), upper));
            }
        }

        if counted == self.len {
            Ok(())
        } else {
            Err(Violation::LengthMismatch {
                cached: self.len,
                counted,
            })
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Node<K> {
    fn in_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a K),
    {
        if let Some(left) = self.left() {
            left.in_order(visit);
        }
        visit(&self.key);
        if let Some(right) = self.right() {
            right.in_order(visit);
        }
    }

    fn pre_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a K),
    {
        visit(&self.key);
        if let Some(left) = self.left() {
            left.pre_order(visit);
        }
        if let Some(right) = self.right() {
            right.pre_order(visit);
        }
    }

    fn post_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a K),
    {
        if let Some(left) = self.left() {
            left.post_order(visit);
        }
        if let Some(right) = self.right() {
            right.post_order(visit);
        }
        visit(&self.key);
    }
}

/// An iterator over the keys of a [`Tree`] in ascending order, created by [`Tree::iter`].
///
/// This is the stack based in-order traversal turned inside out: the stack holds the left spine
/// still to be visited and each call to `next` pops one node and pushes the left spine of its
/// right subtree.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a Tree<K>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: tree.len,
        };
        iter.push_left_spine(tree.root_node());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
