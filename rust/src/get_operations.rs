//! GET operations for MTree.
//!
//! This module contains the read-only lookups and the helper methods for
//! resolving node ids.

use crate::arena::NodeId;
use crate::error::{MTreeError, TreeResult};
use crate::types::{MTree, Node};

impl<T: Ord + Clone> MTree<T> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Check whether a value is stored in the tree.
    ///
    /// Descends by the same `<=` routing as insert and remove and answers
    /// from the leaf. Separators are not consulted for equality: after a
    /// removal they may name values that are no longer stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use mtree::MTree;
    ///
    /// let mut tree = MTree::from_sorted(3, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// assert!(tree.search(&4));
    /// tree.remove(&4).unwrap();
    /// assert!(!tree.search(&4));
    /// ```
    pub fn search(&self, value: &T) -> bool {
        self.find_leaf(value)
            .ok()
            .and_then(|id| self.arena.get(id))
            .is_some_and(|leaf| leaf.contains_key(value))
    }

    /// Alias for [`search`](Self::search).
    pub fn contains(&self, value: &T) -> bool {
        self.search(value)
    }

    // ============================================================================
    // HELPERS
    // ============================================================================

    /// Follow the routing rule from the root to the leaf responsible for
    /// `value`.
    pub(crate) fn find_leaf(&self, value: &T) -> TreeResult<NodeId> {
        let mut id = self.root;
        while let Some(child) = self.node(id)?.route(value) {
            id = child;
        }
        Ok(id)
    }

    pub(crate) fn node(&self, id: NodeId) -> TreeResult<&Node<T>> {
        self.arena
            .get(id)
            .ok_or_else(|| MTreeError::arena_error("Node lookup", &format!("node {} not found", id)))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> TreeResult<&mut Node<T>> {
        self.arena
            .get_mut(id)
            .ok_or_else(|| MTreeError::arena_error("Node lookup", &format!("node {} not found", id)))
    }
}
