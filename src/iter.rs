// =============================================================================
// Cursors and iterators
// =============================================================================
//
// All of these borrow the tree, so the compiler rejects any mutation while a
// cursor or iterator is alive. A position held across a mutation has to be
// re-acquired with `find`.

use std::fmt;
use std::iter::FusedIterator;

use crate::arena::NodeId;
use crate::compare::Compare;
use crate::tree::RbTree;

/// A position on one key of a tree, able to step to its neighbours.
pub struct Cursor<'a, K, C> {
    tree: &'a RbTree<K, C>,
    node: NodeId,
}

impl<'a, K, C> Cursor<'a, K, C> {
    pub(crate) fn new(tree: &'a RbTree<K, C>, node: NodeId) -> Option<Self> {
        (!node.is_nil()).then_some(Self { tree, node })
    }

    pub fn key(&self) -> &'a K {
        &self.tree.nodes[self.node].key
    }

    /// Cursor on the next larger key.
    pub fn successor(&self) -> Option<Self> {
        Self::new(self.tree, self.tree.successor(self.node))
    }

    /// Cursor on the next smaller key.
    pub fn predecessor(&self) -> Option<Self> {
        Self::new(self.tree, self.tree.predecessor(self.node))
    }

    /// Ascending iteration from this key (inclusive) to the end. Counting the
    /// remaining keys walks to the maximum once up front.
    pub fn iter_from(&self) -> Iter<'a, K, C> {
        let back = self.tree.maximum(self.tree.root);
        let mut remaining = 1;
        let mut n = self.node;
        while n != back {
            n = self.tree.successor(n);
            remaining += 1;
        }
        Iter::new(self.tree, self.node, back, remaining)
    }
}

impl<K, C> Clone for Cursor<'_, K, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, C> Copy for Cursor<'_, K, C> {}

impl<K, C> PartialEq for Cursor<'_, K, C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<K, C> Eq for Cursor<'_, K, C> {}

impl<K: fmt::Debug, C> fmt::Debug for Cursor<'_, K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(self.key()).finish()
    }
}

/// Ascending iterator over the keys of a tree.
///
/// Steps through parent links, so it holds two node positions and a count
/// rather than a stack.
pub struct Iter<'a, K, C> {
    tree: &'a RbTree<K, C>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, K, C> Iter<'a, K, C> {
    pub(crate) fn new(
        tree: &'a RbTree<K, C>,
        front: NodeId,
        back: NodeId,
        remaining: usize,
    ) -> Self {
        Self {
            tree,
            front,
            back,
            remaining,
        }
    }
}

impl<K, C> Clone for Iter<'_, K, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, C> Iterator for Iter<'a, K, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        let n = self.front;
        self.front = self.tree.successor(n);
        self.remaining -= 1;
        Some(&self.tree.nodes[n].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, C> DoubleEndedIterator for Iter<'a, K, C> {
    fn next_back(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        let n = self.back;
        self.back = self.tree.predecessor(n);
        self.remaining -= 1;
        Some(&self.tree.nodes[n].key)
    }
}

impl<K, C> ExactSizeIterator for Iter<'_, K, C> {}

impl<K, C> FusedIterator for Iter<'_, K, C> {}

/// Consuming ascending iterator; each step pops the minimum.
pub struct IntoIter<K, C> {
    tree: RbTree<K, C>,
}

impl<K, C> IntoIter<K, C> {
    pub(crate) fn new(tree: RbTree<K, C>) -> Self {
        Self { tree }
    }
}

impl<K, C: Compare<K>> Iterator for IntoIter<K, C> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.tree.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<K, C: Compare<K>> ExactSizeIterator for IntoIter<K, C> {}

impl<K, C: Compare<K>> FusedIterator for IntoIter<K, C> {}

impl<K, C: Compare<K>> IntoIterator for RbTree<K, C> {
    type Item = K;
    type IntoIter = IntoIter<K, C>;

    fn into_iter(self) -> IntoIter<K, C> {
        IntoIter::new(self)
    }
}
