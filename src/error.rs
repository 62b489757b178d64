use std::error;
use std::fmt;

/// Describes how a [`Tree`][crate::Tree] failed [`validate`][crate::Tree::validate].
///
/// The public API never produces an invalid tree, so seeing one of these means a bug in the
/// tree itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation<K> {
    /// `key` was found in a subtree it doesn't belong in: it must be strictly on the other side
    /// of `bound`, the key of one of its ancestors.
    OutOfOrder {
        /// The misplaced key.
        key: K,
        /// The ancestor key that `key` should have been ordered against.
        bound: K,
    },
    /// The cached node count disagrees with the number of reachable nodes.
    LengthMismatch {
        /// The length the tree reports from [`len`][crate::Tree::len].
        cached: usize,
        /// The number of nodes actually found by walking the tree.
        counted: usize,
    },
}

impl<K> fmt::Display for Violation<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrder { key, bound } => {
                write!(f, "key {key:?} is on the wrong side of ancestor {bound:?}")
            }
            Self::LengthMismatch { cached, counted } => write!(
                f,
                "tree reports {cached} nodes but {counted} are reachable from the root"
            ),
        }
    }
}

impl<K> error::Error for Violation<K> where K: fmt::Debug {}
