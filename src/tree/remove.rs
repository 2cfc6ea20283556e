// =============================================================================
// Delete path
// =============================================================================
//
// Deletion descends with the invariant that the current node is not a
// 2-node: before stepping into a child that is a 2-node, a red link is pushed
// down into it (`move_red_left` / `move_red_right`). The node finally removed
// is then always red or part of a 3-node, so black height is untouched and
// `fixup` cleans up the temporary right-leaning reds on the way back up.

use std::mem;

use log::trace;

use super::RbTree;
use crate::arena::{Color, NodeId};
use crate::compare::Compare;
use crate::error::TreeError;

impl<K, C: Compare<K>> RbTree<K, C> {
    /// Removes the key equivalent to `key` and returns the stored key.
    ///
    /// Fails with [`TreeError::NotFound`] if no such key exists; that case is
    /// detected before any restructuring takes place.
    pub fn remove(&mut self, key: &K) -> Result<K, TreeError> {
        if self.find_node(key).is_nil() {
            return Err(TreeError::NotFound);
        }

        let root = self.prepare_root();
        let mut removed = None;
        let root = self.remove_at(root, key, &mut removed);
        self.finish_removal(root);
        trace!("remove: len {}", self.count);

        self.check_after_mutation();
        removed.ok_or(TreeError::NotFound)
    }

    /// Removes and returns the smallest key.
    pub fn pop_first(&mut self) -> Option<K> {
        if self.root.is_nil() {
            return None;
        }

        let root = self.prepare_root();
        let (root, key) = self.remove_min_at(root);
        self.finish_removal(root);
        trace!("pop_first: len {}", self.count);

        self.check_after_mutation();
        Some(key)
    }

    /// A root with two black children is treated as the red middle of a
    /// 3-node so the first push-down has a red link to borrow.
    fn prepare_root(&mut self) -> NodeId {
        let root = self.root;
        let (left, right) = (self.nodes[root].left, self.nodes[root].right);
        if !self.is_red(left) && !self.is_red(right) {
            self.nodes[root].color = Color::Red;
        }
        root
    }

    fn finish_removal(&mut self, root: NodeId) {
        self.root = root;
        if !root.is_nil() {
            let r = &mut self.nodes[root];
            r.parent = NodeId::NIL;
            r.color = Color::Black;
        }
        self.count -= 1;
        // Successor keys move between slots, so the cached node may now hold
        // a different key or be gone.
        self.leftmost = self.minimum(root);
    }

    /// Removes the minimum of the subtree at `h`, returning the new subtree
    /// root and the removed key.
    pub(crate) fn remove_min_at(&mut self, mut h: NodeId) -> (NodeId, K) {
        if self.nodes[h].left.is_nil() {
            debug_assert!(self.nodes[h].right.is_nil());
            return (NodeId::NIL, self.nodes.free(h));
        }

        let left = self.nodes[h].left;
        if !self.is_red(left) && !self.is_red(self.nodes[left].left) {
            h = self.move_red_left(h);
        }
        let left = self.nodes[h].left;
        let (left, key) = self.remove_min_at(left);
        self.set_left(h, left);

        (self.fixup(h), key)
    }

    /// `key` must be present in the subtree at `h`.
    fn remove_at(&mut self, mut h: NodeId, key: &K, removed: &mut Option<K>) -> NodeId {
        if self.cmp.less(key, &self.nodes[h].key) {
            let left = self.nodes[h].left;
            if !self.is_red(left) && !self.is_red(self.nodes[left].left) {
                h = self.move_red_left(h);
            }
            let left = self.nodes[h].left;
            let left = self.remove_at(left, key, removed);
            self.set_left(h, left);
        } else {
            if self.is_red(self.nodes[h].left) {
                h = self.rotate_right(h);
            }
            if self.nodes[h].right.is_nil() && self.cmp.equivalent(key, &self.nodes[h].key) {
                debug_assert!(self.nodes[h].left.is_nil());
                *removed = Some(self.nodes.free(h));
                return NodeId::NIL;
            }

            let right = self.nodes[h].right;
            if !self.is_red(right) && !self.is_red(self.nodes[right].left) {
                h = self.move_red_right(h);
            }
            let right = self.nodes[h].right;
            if self.cmp.equivalent(key, &self.nodes[h].key) {
                // Replace with the successor's key and drop the successor's
                // node instead.
                let (right, successor) = self.remove_min_at(right);
                self.set_right(h, right);
                *removed = Some(mem::replace(&mut self.nodes[h].key, successor));
            } else {
                let right = self.remove_at(right, key, removed);
                self.set_right(h, right);
            }
        }

        self.fixup(h)
    }
}
