//! Tree structure management operations for MTree.
//!
//! This module contains the tree-level queries that look at shape rather
//! than contents, plus clearing.

use crate::arena::{ArenaStats, NodeId};
use crate::types::{MTree, Node};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<T: Ord + Clone> MTree<T> {
    /// Returns the number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len_recursive(self.root)
    }

    fn len_recursive(&self, id: NodeId) -> usize {
        match self.arena.get(id) {
            Some(node) if node.is_leaf() => node.len(),
            Some(node) => node
                .children()
                .iter()
                .map(|&child| self.len_recursive(child))
                .sum(),
            None => 0,
        }
    }

    /// Returns true if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the root is a leaf node.
    pub fn is_leaf_root(&self) -> bool {
        self.arena.get(self.root).is_none_or(|root| root.is_leaf())
    }

    /// Number of levels on the longest root-to-leaf path. Insert keeps all
    /// leaves at one depth, but rebuild can leave the remainder slice deeper
    /// than its siblings.
    pub fn height(&self) -> usize {
        self.height_recursive(self.root)
    }

    fn height_recursive(&self, id: NodeId) -> usize {
        match self.arena.get(id) {
            Some(node) => {
                1 + node
                    .children()
                    .iter()
                    .map(|&child| self.height_recursive(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Returns the number of leaf nodes reachable from the root.
    pub fn leaf_count(&self) -> usize {
        self.count_nodes(self.root, &|node| node.is_leaf())
    }

    /// Returns the number of nodes reachable from the root.
    pub fn node_count(&self) -> usize {
        self.count_nodes(self.root, &|_| true)
    }

    fn count_nodes(&self, id: NodeId, include: &dyn Fn(&Node<T>) -> bool) -> usize {
        let Some(node) = self.arena.get(id) else {
            return 0;
        };

        let own = usize::from(include(node));
        own + node
            .children()
            .iter()
            .map(|&child| self.count_nodes(child, include))
            .sum::<usize>()
    }

    /// Statistics for the node arena backing this tree.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    /// Remove every value, leaving a single empty leaf.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = self.arena.allocate(Node::leaf(Vec::new()));
    }
}
