// =============================================================================
// Traversal
// =============================================================================
//
// Stackless in-order stepping through parent links. None of these allocate or
// mutate; all of them map NIL to NIL.

use super::RbTree;
use crate::arena::NodeId;

impl<K, C> RbTree<K, C> {
    pub(crate) fn minimum(&self, mut n: NodeId) -> NodeId {
        if n.is_nil() {
            return n;
        }
        while !self.nodes[n].left.is_nil() {
            n = self.nodes[n].left;
        }
        n
    }

    pub(crate) fn maximum(&self, mut n: NodeId) -> NodeId {
        if n.is_nil() {
            return n;
        }
        while !self.nodes[n].right.is_nil() {
            n = self.nodes[n].right;
        }
        n
    }

    /// Next node in ascending order, or NIL after the maximum.
    pub(crate) fn successor(&self, mut n: NodeId) -> NodeId {
        if n.is_nil() {
            return n;
        }
        let right = self.nodes[n].right;
        if !right.is_nil() {
            return self.minimum(right);
        }
        let mut p = self.nodes[n].parent;
        while !p.is_nil() && self.nodes[p].right == n {
            n = p;
            p = self.nodes[p].parent;
        }
        p
    }

    /// Previous node in ascending order, or NIL before the minimum.
    pub(crate) fn predecessor(&self, mut n: NodeId) -> NodeId {
        if n.is_nil() {
            return n;
        }
        let left = self.nodes[n].left;
        if !left.is_nil() {
            return self.maximum(left);
        }
        let mut p = self.nodes[n].parent;
        while !p.is_nil() && self.nodes[p].left == n {
            n = p;
            p = self.nodes[p].parent;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_both_directions() {
        let mut t: RbTree<u32> = RbTree::new();
        for k in [50, 20, 80, 10, 30, 70, 90, 60, 40] {
            t.insert(k).unwrap();
        }

        let mut forward = Vec::new();
        let mut n = t.minimum(t.root);
        while !n.is_nil() {
            forward.push(t.nodes[n].key);
            n = t.successor(n);
        }
        assert_eq!(forward, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);

        let mut backward = Vec::new();
        let mut n = t.maximum(t.root);
        while !n.is_nil() {
            backward.push(t.nodes[n].key);
            n = t.predecessor(n);
        }
        forward.reverse();
        assert_eq!(backward, forward);
    }

    #[test]
    fn test_nil_maps_to_nil() {
        let t: RbTree<u32> = RbTree::new();
        assert!(t.minimum(NodeId::NIL).is_nil());
        assert!(t.maximum(NodeId::NIL).is_nil());
        assert!(t.successor(NodeId::NIL).is_nil());
        assert!(t.predecessor(NodeId::NIL).is_nil());
    }
}
