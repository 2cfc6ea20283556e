use thiserror::Error;

/// Errors returned by the primitive tree operations.
///
/// [`OrderedSet`](crate::OrderedSet) checks membership before mutating, so it
/// never surfaces these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// An equivalent key is already stored; the tree was left untouched.
    #[error("an equivalent key is already present")]
    AlreadyPresent,

    /// No equivalent key is stored; the tree was left untouched.
    #[error("key not found")]
    NotFound,
}

/// A broken structural invariant, as reported by [`RbTree::validate`].
///
/// Node positions are arena slot indices.
///
/// [`RbTree::validate`]: crate::RbTree::validate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("node {node} is out of order with respect to its ancestors")]
    Order { node: usize },

    #[error("node {node} has a red right child")]
    RedRightChild { node: usize },

    #[error("red node {node} has a red left child")]
    DoubleRed { node: usize },

    #[error("root node {node} is red")]
    RedRoot { node: usize },

    #[error("black height {found} below node {node}, expected {expected}")]
    BlackHeight {
        node: usize,
        expected: usize,
        found: usize,
    },

    #[error("node {node} does not point back to its parent")]
    ParentLink { node: usize },

    #[error("cached minimum does not hold the smallest key")]
    StaleMinimum,

    #[error("recorded length {recorded} but {reachable} nodes are reachable")]
    Count { recorded: usize, reachable: usize },

    #[error("{live} nodes allocated but only {reachable} reachable from the root")]
    Leak { live: usize, reachable: usize },
}
