// =============================================================================
// RbTree: the left-leaning red-black tree container
// =============================================================================

mod balance;
mod insert;
mod remove;
mod traverse;
mod validate;

use std::collections::VecDeque;
use std::fmt;
use std::mem;

use log::debug;

use crate::arena::{NodeArena, NodeId};
use crate::compare::{Compare, Natural};
use crate::iter::{Cursor, Iter};

/// A left-leaning red-black tree of unique keys ordered by `C`.
///
/// This is the primitive layer: [`insert`](Self::insert) and
/// [`remove`](Self::remove) report duplicates and missing keys as
/// [`TreeError`](crate::TreeError)s. Most callers want
/// [`OrderedSet`](crate::OrderedSet) instead.
///
/// Nodes live in an arena and refer to each other by index, including the
/// parent back-references used for stackless iteration. The minimum node is
/// cached so [`first`](Self::first) and [`iter`](Self::iter) start in O(1).
pub struct RbTree<K, C = Natural> {
    pub(crate) nodes: NodeArena<K>,
    pub(crate) root: NodeId,
    pub(crate) leftmost: NodeId,
    pub(crate) count: usize,
    pub(crate) cmp: C,
}

impl<K> RbTree<K, Natural> {
    /// An empty tree ordered by `K: Ord`. Use
    /// [`with_comparator`](Self::with_comparator) for any other ordering.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, C> RbTree<K, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: NodeArena::new(),
            root: NodeId::NIL,
            leftmost: NodeId::NIL,
            count: 0,
            cmp,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Smallest key, from the cached minimum.
    pub fn first(&self) -> Option<&K> {
        (!self.leftmost.is_nil()).then(|| &self.nodes[self.leftmost].key)
    }

    pub fn last(&self) -> Option<&K> {
        let max = self.maximum(self.root);
        (!max.is_nil()).then(|| &self.nodes[max].key)
    }

    pub fn cursor_first(&self) -> Option<Cursor<'_, K, C>> {
        Cursor::new(self, self.leftmost)
    }

    pub fn cursor_last(&self) -> Option<Cursor<'_, K, C>> {
        Cursor::new(self, self.maximum(self.root))
    }

    pub fn iter(&self) -> Iter<'_, K, C> {
        Iter::new(self, self.leftmost, self.maximum(self.root), self.count)
    }

    /// Bytes held by the node arena.
    pub fn memory_usage(&self) -> usize {
        self.nodes.memory_usage()
    }

    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Drops every key and resets to the empty state. The comparator is kept.
    pub fn clear(&mut self) {
        let dropped = self.nodes.len();
        self.nodes.clear();
        self.root = NodeId::NIL;
        self.leftmost = NodeId::NIL;
        self.count = 0;
        debug!("clear: dropped {dropped} nodes");
    }

    /// Moves the contents out, leaving `self` empty and still usable with a
    /// copy of its comparator.
    pub fn take(&mut self) -> Self
    where
        C: Clone,
    {
        let empty = Self::with_comparator(self.cmp.clone());
        let taken = mem::replace(self, empty);
        debug!("take: moved {} nodes", taken.count);
        taken
    }

    /// Rebuilds live nodes into a fresh, dense arena in breadth-first order.
    ///
    /// Removals leave vacated slots behind; this reclaims them. Keys and
    /// colors are moved, not cloned. Returns the number of nodes rewritten.
    pub fn compact(&mut self) -> usize {
        let slots = self.nodes.slot_count();
        let mut old = mem::replace(&mut self.nodes, NodeArena::with_capacity(self.count));
        if self.root.is_nil() {
            return 0;
        }

        // (old id, new parent, hangs to the left of the new parent)
        let mut queue: VecDeque<(NodeId, NodeId, bool)> = VecDeque::new();
        queue.push_back((self.root, NodeId::NIL, false));
        while let Some((from, parent, is_left)) = queue.pop_front() {
            let (left, right, color) = {
                let n = &old[from];
                (n.left, n.right, n.color)
            };
            let to = self.nodes.alloc(old.free(from));
            self.nodes[to].color = color;
            if parent.is_nil() {
                self.root = to;
            } else if is_left {
                self.set_left(parent, to);
            } else {
                self.set_right(parent, to);
            }
            if !left.is_nil() {
                queue.push_back((left, to, true));
            }
            if !right.is_nil() {
                queue.push_back((right, to, false));
            }
        }

        self.leftmost = self.minimum(self.root);
        debug!(
            "compact: rewrote {} nodes, {slots} slots before",
            self.nodes.len()
        );
        self.nodes.len()
    }

    /// Appends a copy of `src`'s subtree into this (empty) tree's arena,
    /// mirroring shape and colors node for node.
    fn mirror(&mut self, src: &Self)
    where
        K: Clone,
    {
        debug_assert!(self.root.is_nil() && self.nodes.len() == 0);
        self.count = src.count;
        if src.root.is_nil() {
            return;
        }

        let mut from_queue = VecDeque::new();
        let mut to_queue = VecDeque::new();
        self.root = self.copy_node(src, src.root);
        from_queue.push_back(src.root);
        to_queue.push_back(self.root);

        while let (Some(from), Some(to)) = (from_queue.pop_front(), to_queue.pop_front()) {
            let (left, right) = (src.nodes[from].left, src.nodes[from].right);
            if !left.is_nil() {
                let copy = self.copy_node(src, left);
                self.set_left(to, copy);
                from_queue.push_back(left);
                to_queue.push_back(copy);
            }
            if !right.is_nil() {
                let copy = self.copy_node(src, right);
                self.set_right(to, copy);
                from_queue.push_back(right);
                to_queue.push_back(copy);
            }
        }

        self.leftmost = self.minimum(self.root);
        debug!("copy: mirrored {} nodes", self.nodes.len());
    }

    fn copy_node(&mut self, src: &Self, from: NodeId) -> NodeId
    where
        K: Clone,
    {
        let n = &src.nodes[from];
        let id = self.nodes.alloc(n.key.clone());
        self.nodes[id].color = n.color;
        id
    }
}

impl<K, C: Compare<K>> RbTree<K, C> {
    pub(crate) fn find_node(&self, key: &K) -> NodeId {
        let mut n = self.root;
        while !n.is_nil() {
            let node = &self.nodes[n];
            if self.cmp.less(key, &node.key) {
                n = node.left;
            } else if self.cmp.less(&node.key, key) {
                n = node.right;
            } else {
                break;
            }
        }
        n
    }

    /// Positions a cursor on the key equivalent to `key`.
    pub fn find(&self, key: &K) -> Option<Cursor<'_, K, C>> {
        Cursor::new(self, self.find_node(key))
    }

    /// The stored key equivalent to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        let n = self.find_node(key);
        (!n.is_nil()).then(|| &self.nodes[n].key)
    }

    pub fn contains(&self, key: &K) -> bool {
        !self.find_node(key).is_nil()
    }
}

impl<K, C: Default> Default for RbTree<K, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

/// Copies keep every node's color along with its key and shape, so the copy
/// satisfies the same balance invariants as the original.
impl<K: Clone, C: Clone> Clone for RbTree<K, C> {
    fn clone(&self) -> Self {
        let mut out = Self::with_comparator(self.cmp.clone());
        out.nodes = NodeArena::with_capacity(self.count);
        out.mirror(self);
        out
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.cmp = source.cmp.clone();
        self.mirror(source);
    }
}

impl<K: fmt::Debug, C> fmt::Debug for RbTree<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K, C> IntoIterator for &'a RbTree<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K, C>;

    fn into_iter(self) -> Iter<'a, K, C> {
        self.iter()
    }
}
