//! INSERT operations for MTree.
//!
//! A value is placed in the leaf its routing path ends at. On the way back
//! up, every node that now holds `capacity` keys is split at once and its
//! parent absorbs the promoted separator; a split root grows the tree by
//! one level.

use log::{debug, trace};

use crate::arena::NodeId;
use crate::error::{MTreeError, ModifyResult, TreeResult};
use crate::types::{InsertResult, MTree, Node};

impl<T: Ord + Clone> MTree<T> {
    /// Insert a value.
    ///
    /// Fails with `DuplicateKey`, leaving the tree unchanged, if the value
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use mtree::{MTree, MTreeError};
    ///
    /// let mut tree = MTree::new(3).unwrap();
    /// assert!(tree.insert(7).is_ok());
    /// assert_eq!(tree.insert(7), Err(MTreeError::DuplicateKey));
    /// ```
    pub fn insert(&mut self, value: T) -> ModifyResult<()> {
        let root = self.root;
        match self.insert_recursive(root, value)? {
            InsertResult::Inserted => {}
            InsertResult::Split { separator, right } => {
                let new_root = self
                    .arena
                    .allocate(Node::internal(vec![separator], vec![root, right]));
                self.root = new_root;
                debug!(
                    "root {} split, new root {} over [{}, {}]",
                    root, new_root, root, right
                );
            }
        }
        Ok(())
    }

    fn insert_recursive(&mut self, id: NodeId, value: T) -> TreeResult<InsertResult<T>> {
        let node = self.node(id)?;
        let child_index = node.child_index(&value);
        let child = node.children().get(child_index).copied();

        match child {
            None => {
                if !self.node_mut(id)?.insert_key(value) {
                    trace!("insert rejected, value already in leaf {}", id);
                    return Err(MTreeError::DuplicateKey);
                }
                trace!("inserted into leaf {}", id);
            }
            Some(child) => match self.insert_recursive(child, value)? {
                InsertResult::Inserted => return Ok(InsertResult::Inserted),
                InsertResult::Split { separator, right } => {
                    self.node_mut(id)?
                        .insert_child(child_index, separator, right);
                }
            },
        }

        // In both arms the new key sits at `child_index`.
        self.split_if_overfull(id, child_index)
    }

    /// Split `id` if it reached `capacity` keys, handing the new right
    /// sibling to the caller.
    fn split_if_overfull(&mut self, id: NodeId, incoming: usize) -> TreeResult<InsertResult<T>> {
        let capacity = self.capacity;
        let node = self.node_mut(id)?;
        if !node.is_overfull(capacity) {
            return Ok(InsertResult::Inserted);
        }

        let kind = if node.is_leaf() { "leaf" } else { "internal" };
        let (separator, right_node) = node.split(incoming);
        let right = self.arena.allocate(right_node);
        debug!("split {} node {}, new right sibling {}", kind, id, right);

        Ok(InsertResult::Split { separator, right })
    }
}

#[cfg(test)]
mod tests {
    use crate::{MTree, MTreeError};

    #[test]
    fn test_insert_into_empty_tree() {
        let mut tree = MTree::new(4).unwrap();
        tree.insert(10).unwrap();
        tree.insert(5).unwrap();
        tree.insert(7).unwrap();

        assert!(tree.is_leaf_root());
        assert_eq!(tree.collect_values(), vec![5, 7, 10]);
    }

    #[test]
    fn test_duplicate_is_rejected_without_change() {
        let mut tree = MTree::new(3).unwrap();
        for v in [1, 2, 3, 4] {
            tree.insert(v).unwrap();
        }
        let before = tree.clone();

        assert_eq!(tree.insert(3), Err(MTreeError::DuplicateKey));
        assert_eq!(tree.collect_values(), before.collect_values());
        assert_eq!(tree.node_count(), before.node_count());
        assert_eq!(tree.height(), before.height());
    }

    #[test]
    fn test_leaf_split_grows_root() {
        let mut tree = MTree::new(3).unwrap();
        tree.insert(1).unwrap();
        tree.insert(2).unwrap();
        assert!(tree.is_leaf_root());

        tree.insert(3).unwrap();
        assert!(!tree.is_leaf_root());
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.node(tree.root).unwrap().keys(), &[2]);
        assert_eq!(tree.collect_values(), vec![1, 2, 3]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_internal_split_propagates() {
        let mut tree = MTree::new(3).unwrap();
        for v in 1..=20 {
            tree.insert(v).unwrap();
            assert!(tree.check_invariants(), "invariants broken after {}", v);
        }

        assert!(tree.height() >= 3);
        assert_eq!(tree.collect_values(), (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_capacity_two_stays_within_bounds() {
        let mut tree = MTree::new(2).unwrap();
        for v in (0..40).rev() {
            tree.insert(v).unwrap();
        }

        assert!(tree.check_invariants());
        assert_eq!(tree.len(), 40);
        for v in 0..40 {
            assert!(tree.search(&v));
        }
    }

    #[test]
    fn test_capacity_two_long_runs_stay_shallow() {
        let n = 100_000;

        let mut descending = MTree::new(2).unwrap();
        for v in (0..n).rev() {
            descending.insert(v).unwrap();
        }
        assert!(descending.height() <= 40, "height {}", descending.height());
        assert!(descending.node_count() <= 3 * n as usize);
        assert_eq!(descending.len(), n as usize);
        assert!(descending.check_invariants());

        let mut ascending = MTree::new(2).unwrap();
        for v in 0..n {
            ascending.insert(v).unwrap();
        }
        assert!(ascending.height() <= 40, "height {}", ascending.height());
        assert_eq!(ascending.collect_values(), descending.collect_values());
    }

    #[test]
    fn test_capacity_two_descending_split_shape() {
        let mut tree = MTree::new(2).unwrap();
        for v in [4, 3, 2] {
            tree.insert(v).unwrap();
        }
        // Leaves [2] [3] [4]. The root held 3 and split on the incoming 2.
        let root = tree.node(tree.root).unwrap();
        assert_eq!(root.keys(), &[2]);
        let left = tree.node(root.children()[0]).unwrap();
        assert!(left.keys().is_empty());
        assert_eq!(left.children().len(), 1);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_insert_after_rebuild_splits_overfull_leaf() {
        let mut tree = MTree::from_sorted(3, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
        // Last slice [5, 6, 7] became a nested internal node; 8 lands beside 7.
        tree.insert(8).unwrap();

        assert!(tree.check_invariants());
        assert_eq!(tree.collect_values(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
