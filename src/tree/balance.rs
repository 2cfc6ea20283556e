// =============================================================================
// Rotation & color primitives
// =============================================================================
//
// Everything here works on a subtree root and returns the (possibly new)
// subtree root. Rotations keep the grandparent's link and every parent
// back-reference coherent on their own; callers still relink the returned
// root into its parent, which is a no-op when the rotation already did it.

use super::RbTree;
use crate::arena::{Color, NodeId};

impl<K, C> RbTree<K, C> {
    /// Empty links count as black.
    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        !id.is_nil() && self.nodes[id].color == Color::Red
    }

    #[inline]
    pub(crate) fn set_left(&mut self, h: NodeId, child: NodeId) {
        self.nodes[h].left = child;
        if !child.is_nil() {
            self.nodes[child].parent = h;
        }
    }

    #[inline]
    pub(crate) fn set_right(&mut self, h: NodeId, child: NodeId) {
        self.nodes[h].right = child;
        if !child.is_nil() {
            self.nodes[child].parent = h;
        }
    }

    /// Points whichever link of `parent` referenced `old` at `new`.
    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent.is_nil() {
            return;
        }
        let p = &mut self.nodes[parent];
        if p.left == old {
            p.left = new;
        } else if p.right == old {
            p.right = new;
        }
    }

    /// Promotes `z.right` into `z`'s position. The promoted node takes `z`'s
    /// color and `z` turns red. Returns `z` unchanged when it has no right
    /// child.
    pub(crate) fn rotate_left(&mut self, z: NodeId) -> NodeId {
        let y = self.nodes[z].right;
        if y.is_nil() {
            return z;
        }
        let inner = self.nodes[y].left;
        self.set_right(z, inner);

        let parent = self.nodes[z].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, z, y);

        self.set_left(y, z);
        self.nodes[y].color = self.nodes[z].color;
        self.nodes[z].color = Color::Red;
        y
    }

    /// Mirror image of [`rotate_left`](Self::rotate_left).
    pub(crate) fn rotate_right(&mut self, z: NodeId) -> NodeId {
        let y = self.nodes[z].left;
        if y.is_nil() {
            return z;
        }
        let inner = self.nodes[y].right;
        self.set_left(z, inner);

        let parent = self.nodes[z].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, z, y);

        self.set_right(y, z);
        self.nodes[y].color = self.nodes[z].color;
        self.nodes[z].color = Color::Red;
        y
    }

    /// Inverts the color of `z` and of each child it has.
    pub(crate) fn color_flip(&mut self, z: NodeId) {
        let (left, right) = {
            let node = &mut self.nodes[z];
            node.color.flip();
            (node.left, node.right)
        };
        if !left.is_nil() {
            self.nodes[left].color.flip();
        }
        if !right.is_nil() {
            self.nodes[right].color.flip();
        }
    }

    /// The three guarded local repairs applied to every node on the way back
    /// up from an insertion or deletion.
    pub(crate) fn fixup(&mut self, mut h: NodeId) -> NodeId {
        debug_assert!(!h.is_nil());
        if self.is_red(self.nodes[h].right) && !self.is_red(self.nodes[h].left) {
            h = self.rotate_left(h);
        }
        let left = self.nodes[h].left;
        if self.is_red(left) && self.is_red(self.nodes[left].left) {
            h = self.rotate_right(h);
        }
        if self.is_red(self.nodes[h].left) && self.is_red(self.nodes[h].right) {
            self.color_flip(h);
        }
        h
    }

    /// Borrows a red link from the right sibling so a descent to the left
    /// never lands on a 2-node. `h.right` must exist.
    pub(crate) fn move_red_left(&mut self, mut h: NodeId) -> NodeId {
        self.color_flip(h);
        let right = self.nodes[h].right;
        debug_assert!(!right.is_nil());
        if self.is_red(self.nodes[right].left) {
            let right = self.rotate_right(right);
            self.set_right(h, right);
            h = self.rotate_left(h);
            self.color_flip(h);
        }
        h
    }

    /// Rightward counterpart of [`move_red_left`](Self::move_red_left).
    /// `h.left` must exist.
    pub(crate) fn move_red_right(&mut self, mut h: NodeId) -> NodeId {
        self.color_flip(h);
        let left = self.nodes[h].left;
        debug_assert!(!left.is_nil());
        if self.is_red(self.nodes[left].left) {
            h = self.rotate_right(h);
            self.color_flip(h);
        }
        h
    }
}
