//! The owned node type shared by [`Tree`][crate::Tree] and its iterators, plus the cursor
//! helpers that walk `&mut Link` slots without recursion.

use std::cmp::Ordering;

/// An optional, exclusively owned child. `None` marks the empty slot at the bottom of a subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single vertex of the tree. A `Node` owns both of its children, so dropping the root of a
/// subtree frees the whole subtree.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Construct a new leaf holding `key`.
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The smallest key in the subtree rooted here, found by following left children.
    pub(crate) fn min_value(&self) -> &K {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.key
    }

    /// The largest key in the subtree rooted here.
    pub(crate) fn max_value(&self) -> &K {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.key
    }
}

/// Walks down from `link` following the usual search rule and returns the slot that either holds
/// the node with `key` or is the empty slot where such a node would be inserted.
///
/// The reference is moved into the `match` on each step so that returning it on a hit doesn't
/// conflict with the reborrow taken on a miss.
pub(crate) fn locate<'a, K>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
where
    K: Ord,
{
    loop {
        let ordering = link.as_ref().map(|node| key.cmp(&node.key));
        link = match (ordering, link) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// Detaches the leftmost node of the subtree in `link` and returns its key. The detached node
/// never has a left child so its right child (if any) takes its place.
pub(crate) fn take_min<K>(mut link: &mut Link<K>) -> Option<K> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let node = link.take()?;
    let Node { key, right, .. } = *node;
    *link = right;
    Some(key)
}
