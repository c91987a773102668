//! Validation and debugging utilities for MTree.
//!
//! This module contains the invariant checks used by the tests and
//! available to callers that want to audit a tree.

use crate::arena::NodeId;
use crate::error::{MTreeError, MTreeResult, TreeResult};
use crate::types::MTree;

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<T: Ord + Clone> MTree<T> {
    /// Check if the tree maintains its structural invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> MTreeResult<()> {
        let mut visited = 0;
        self.check_node_invariants(self.root, None, None, &mut visited)?;

        // Every node in the arena must hang off the root exactly once
        if visited != self.arena.len() {
            return Err(MTreeError::corrupted_tree(
                "Arena",
                &format!("{} nodes reachable vs {} allocated", visited, self.arena.len()),
            ));
        }

        self.check_collected_order()
    }

    /// Check one node and recurse. Values under this node must lie in
    /// `(lower, upper]`.
    fn check_node_invariants(
        &self,
        id: NodeId,
        lower: Option<&T>,
        upper: Option<&T>,
        visited: &mut usize,
    ) -> TreeResult<()> {
        let node = self.node(id)?;
        *visited += 1;

        if node.len() > self.capacity - 1 {
            return Err(MTreeError::corrupted_tree(
                "Node",
                &format!(
                    "node {} holds {} keys (limit {})",
                    id,
                    node.len(),
                    self.capacity - 1
                ),
            ));
        }

        if !node.keys().windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(MTreeError::corrupted_tree(
                "Node",
                &format!("node {} keys are not strictly increasing", id),
            ));
        }

        let out_of_range = node.keys().iter().any(|key| {
            lower.is_some_and(|low| key <= low) || upper.is_some_and(|high| key > high)
        });
        if out_of_range {
            return Err(MTreeError::corrupted_tree(
                "Node",
                &format!("node {} holds a key outside its parent's range", id),
            ));
        }

        if node.is_leaf() {
            return Ok(());
        }

        if node.children().len() != node.len() + 1 {
            return Err(MTreeError::corrupted_tree(
                "Node",
                &format!(
                    "internal node {} has {} keys but {} children",
                    id,
                    node.len(),
                    node.children().len()
                ),
            ));
        }

        let keys = node.keys();
        for (i, &child) in node.children().iter().enumerate() {
            let child_lower = if i == 0 { lower } else { Some(&keys[i - 1]) };
            let child_upper = if i == keys.len() { upper } else { Some(&keys[i]) };
            self.check_node_invariants(child, child_lower, child_upper, visited)?;
        }

        Ok(())
    }

    fn check_collected_order(&self) -> TreeResult<()> {
        let values = self.collect_values();
        match values.windows(2).position(|pair| pair[0] >= pair[1]) {
            Some(i) => Err(MTreeError::corrupted_tree(
                "Traversal",
                &format!("collected values out of order at index {}", i + 1),
            )),
            None => Ok(()),
        }
    }
}
