// =============================================================================
// Invariant checking
// =============================================================================

use super::RbTree;
use crate::arena::{Color, NodeId};
use crate::compare::Compare;
use crate::error::InvariantViolation;

struct Frame {
    node: NodeId,
    /// Nearest ancestor the node must compare greater than.
    lower: NodeId,
    /// Nearest ancestor the node must compare less than.
    upper: NodeId,
    blacks_above: usize,
}

impl<K, C: Compare<K>> RbTree<K, C> {
    /// Walks the whole tree and reports the first broken invariant: key
    /// order, left-leaning colors, black balance, black root, parent links,
    /// the cached minimum, and length bookkeeping.
    ///
    /// O(n). Intended for tests and the `validate` feature.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if self.root.is_nil() {
            if !self.leftmost.is_nil() {
                return Err(InvariantViolation::StaleMinimum);
            }
            if self.count != 0 {
                return Err(InvariantViolation::Count {
                    recorded: self.count,
                    reachable: 0,
                });
            }
            return self.check_live(0);
        }

        let root = self.root;
        if self.is_red(root) {
            return Err(InvariantViolation::RedRoot { node: root.index() });
        }
        if !self.nodes[root].parent.is_nil() {
            return Err(InvariantViolation::ParentLink { node: root.index() });
        }

        let mut expected = 0usize;
        let mut n = root;
        while !n.is_nil() {
            if self.nodes[n].color == Color::Black {
                expected += 1;
            }
            n = self.nodes[n].left;
        }

        let mut reachable = 0usize;
        let mut stack = vec![Frame {
            node: root,
            lower: NodeId::NIL,
            upper: NodeId::NIL,
            blacks_above: 0,
        }];
        while let Some(Frame {
            node: n,
            lower,
            upper,
            blacks_above,
        }) = stack.pop()
        {
            reachable += 1;
            let node = &self.nodes[n];

            let above_lower = lower.is_nil() || self.cmp.less(&self.nodes[lower].key, &node.key);
            let below_upper = upper.is_nil() || self.cmp.less(&node.key, &self.nodes[upper].key);
            if !above_lower || !below_upper {
                return Err(InvariantViolation::Order { node: n.index() });
            }
            if self.is_red(node.right) {
                return Err(InvariantViolation::RedRightChild { node: n.index() });
            }
            if node.color == Color::Red && self.is_red(node.left) {
                return Err(InvariantViolation::DoubleRed { node: n.index() });
            }

            let blacks = blacks_above + usize::from(node.color == Color::Black);
            for (child, lower, upper) in [(node.left, lower, n), (node.right, n, upper)] {
                if child.is_nil() {
                    if blacks != expected {
                        return Err(InvariantViolation::BlackHeight {
                            node: n.index(),
                            expected,
                            found: blacks,
                        });
                    }
                    continue;
                }
                if self.nodes[child].parent != n {
                    return Err(InvariantViolation::ParentLink {
                        node: child.index(),
                    });
                }
                stack.push(Frame {
                    node: child,
                    lower,
                    upper,
                    blacks_above: blacks,
                });
            }
        }

        if reachable != self.count {
            return Err(InvariantViolation::Count {
                recorded: self.count,
                reachable,
            });
        }
        if self.leftmost != self.minimum(root) {
            return Err(InvariantViolation::StaleMinimum);
        }
        self.check_live(reachable)
    }

    fn check_live(&self, reachable: usize) -> Result<(), InvariantViolation> {
        if self.nodes.len() != reachable {
            return Err(InvariantViolation::Leak {
                live: self.nodes.len(),
                reachable,
            });
        }
        Ok(())
    }

    /// Runs [`validate`](Self::validate) after a mutation when the
    /// `validate` feature is on.
    #[inline]
    pub(crate) fn check_after_mutation(&self) {
        #[cfg(feature = "validate")]
        if let Err(err) = self.validate() {
            panic!("tree invariant broken: {err}");
        }
    }
}
