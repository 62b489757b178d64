use std::fmt;

/// The order in which a traversal visits the nodes of a [`Tree`][crate::Tree].
///
/// # Examples
///
/// ```
/// use bst::{Order, Tree};
///
/// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
///
/// assert_eq!(tree.keys(Order::InOrder), [&1, &2, &3]);
/// assert_eq!(tree.keys(Order::PreOrder), [&2, &1, &3]);
/// assert_eq!(tree.keys(Order::PostOrder), [&1, &3, &2]);
/// assert_eq!(tree.keys(Order::LevelOrder), [&2, &1, &3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Yields keys in ascending order.
    InOrder,
    /// The node, then its left subtree, then its right subtree. Inserting keys in this order
    /// into an empty tree rebuilds the same shape.
    PreOrder,
    /// Both subtrees before the node itself, so children always come before their parent.
    PostOrder,
    /// Breadth first: by depth, left to right within a depth.
    LevelOrder,
}

impl Order {
    /// Every order, in the order the demo prints them.
    pub const ALL: [Order; 4] = [
        Order::InOrder,
        Order::PreOrder,
        Order::PostOrder,
        Order::LevelOrder,
    ];

    /// A human readable label, e.g. `"In-order"`.
    pub fn name(self) -> &'static str {
        match self {
            Order::InOrder => "In-order",
            Order::PreOrder => "Pre-order",
            Order::PostOrder => "Post-order",
            Order::LevelOrder => "Level-order",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
