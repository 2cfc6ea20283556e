// =============================================================================
// Insert path
// =============================================================================

use std::cmp::Ordering;

use log::trace;

use super::RbTree;
use crate::arena::{Color, NodeId};
use crate::compare::Compare;
use crate::error::TreeError;

impl<K, C: Compare<K>> RbTree<K, C> {
    /// Inserts `key` as a new node.
    ///
    /// Fails with [`TreeError::AlreadyPresent`] if an equivalent key is
    /// stored. The duplicate is detected on the way down, before anything is
    /// allocated or relinked, so a failed insert leaves the tree exactly as it
    /// was (and drops `key`).
    pub fn insert(&mut self, key: K) -> Result<(), TreeError> {
        let mut created = NodeId::NIL;
        let root = self.insert_at(self.root, key, &mut created)?;

        self.root = root;
        let r = &mut self.nodes[root];
        r.parent = NodeId::NIL;
        r.color = Color::Black;

        if self.leftmost.is_nil()
            || self
                .cmp
                .less(&self.nodes[created].key, &self.nodes[self.leftmost].key)
        {
            self.leftmost = created;
        }
        self.count += 1;
        trace!("insert: node {created:?}, len {}", self.count);

        self.check_after_mutation();
        Ok(())
    }

    fn insert_at(
        &mut self,
        h: NodeId,
        key: K,
        created: &mut NodeId,
    ) -> Result<NodeId, TreeError> {
        if h.is_nil() {
            let id = self.nodes.alloc(key);
            *created = id;
            return Ok(id);
        }

        match self.cmp.compare(&key, &self.nodes[h].key) {
            Ordering::Less => {
                let left = self.nodes[h].left;
                let left = self.insert_at(left, key, created)?;
                self.set_left(h, left);
            }
            Ordering::Greater => {
                let right = self.nodes[h].right;
                let right = self.insert_at(right, key, created)?;
                self.set_right(h, right);
            }
            Ordering::Equal => return Err(TreeError::AlreadyPresent),
        }

        Ok(self.fixup(h))
    }
}
