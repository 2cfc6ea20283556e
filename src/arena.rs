// =============================================================================
// Node arena
// =============================================================================
//
// Every node of a tree lives in one `Vec` of slots. Links between nodes are
// slot indices (`NodeId`), so parent back-references are plain integers and
// never take part in ownership. Vacated slots go on a free list and are
// reused before the vector grows.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Slot index of a node, or [`NodeId::NIL`] for the empty link.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    pub(crate) const NIL: NodeId = NodeId(u32::MAX);

    #[inline]
    pub(crate) fn is_nil(self) -> bool {
        self.0 == Self::NIL.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        debug_assert!(!self.is_nil());
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            f.write_str("NIL")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub(crate) fn flip(&mut self) {
        *self = match *self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        };
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

pub(crate) struct NodeArena<K> {
    slots: Vec<Option<Node<K>>>,
    /// Indices of vacated slots, reused LIFO.
    free: Vec<u32>,
    live: usize,
}

impl<K> NodeArena<K> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    /// Number of slots, live or vacated.
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn memory_usage(&self) -> usize {
        self.slots.capacity() * std::mem::size_of::<Option<Node<K>>>()
            + self.free.capacity() * std::mem::size_of::<u32>()
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        // Trailing vacated slots can be dropped outright.
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        let len = self.slots.len() as u32;
        self.free.retain(|&i| i < len);
        self.slots.shrink_to_fit();
        self.free.shrink_to_fit();
    }

    /// Allocates a detached red node holding `key`.
    pub(crate) fn alloc(&mut self, key: K) -> NodeId {
        let node = Node {
            key,
            color: Color::Red,
            parent: NodeId::NIL,
            left: NodeId::NIL,
            right: NodeId::NIL,
        };
        self.live += 1;
        if let Some(i) = self.free.pop() {
            debug_assert!(self.slots[i as usize].is_none());
            self.slots[i as usize] = Some(node);
            return NodeId(i);
        }
        let i = self.slots.len();
        assert!(i < NodeId::NIL.0 as usize, "node arena exhausted");
        self.slots.push(Some(node));
        NodeId(i as u32)
    }

    /// Vacates the slot of `id` and hands back its key. The node must already
    /// be unlinked from the tree.
    pub(crate) fn free(&mut self, id: NodeId) -> K {
        let node = self.slots[id.index()]
            .take()
            .unwrap_or_else(|| panic!("double free of node {id:?}"));
        self.free.push(id.0);
        self.live -= 1;
        node.key
    }

    /// Drops every node in slot order.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }
}

impl<K> Index<NodeId> for NodeArena<K> {
    type Output = Node<K>;

    #[inline]
    fn index(&self, id: NodeId) -> &Node<K> {
        match &self.slots[id.index()] {
            Some(node) => node,
            None => panic!("access to vacated node {id:?}"),
        }
    }
}

impl<K> IndexMut<NodeId> for NodeArena<K> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        match &mut self.slots[id.index()] {
            Some(node) => node,
            None => panic!("access to vacated node {id:?}"),
        }
    }
}
