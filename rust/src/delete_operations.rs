//! DELETE operations for MTree.
//!
//! Removal only erases the value from its leaf. Nodes are never merged,
//! borrowed from, or pruned, and separators are left as they are, so a
//! leaf may end up empty and stay in place.

use log::trace;

use crate::error::{MTreeError, ModifyResult};
use crate::types::MTree;

impl<T: Ord + Clone> MTree<T> {
    /// Remove a value.
    ///
    /// Fails with `NotFound`, leaving the tree unchanged, if the value is
    /// absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use mtree::{MTree, MTreeError};
    ///
    /// let mut tree = MTree::from_sorted(3, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// assert!(tree.remove(&4).is_ok());
    /// assert_eq!(tree.remove(&4), Err(MTreeError::NotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> ModifyResult<()> {
        let leaf = self.find_leaf(value)?;
        if self.node_mut(leaf)?.remove_key(value) {
            trace!("removed from leaf {}", leaf);
            Ok(())
        } else {
            trace!("remove failed, value not in leaf {}", leaf);
            Err(MTreeError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{MTree, MTreeError};

    #[test]
    fn test_remove_from_leaf_root() {
        let mut tree = MTree::new(4).unwrap();
        for v in [3, 1, 2] {
            tree.insert(v).unwrap();
        }

        tree.remove(&2).unwrap();
        assert_eq!(tree.collect_values(), vec![1, 3]);
        assert_eq!(tree.remove(&2), Err(MTreeError::NotFound));
    }

    #[test]
    fn test_remove_absent_leaves_tree_unchanged() {
        let mut tree = MTree::from_sorted(3, &[10, 20, 30, 40, 50]).unwrap();
        let before = tree.collect_values();

        assert_eq!(tree.remove(&25), Err(MTreeError::NotFound));
        assert_eq!(tree.remove(&0), Err(MTreeError::NotFound));
        assert_eq!(tree.remove(&99), Err(MTreeError::NotFound));
        assert_eq!(tree.collect_values(), before);
    }

    #[test]
    fn test_remove_does_not_restructure() {
        let mut tree = MTree::from_sorted(3, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
        let nodes = tree.node_count();
        let height = tree.height();

        tree.remove(&1).unwrap();
        tree.remove(&2).unwrap();

        // The first leaf is now empty but still linked.
        assert_eq!(tree.node_count(), nodes);
        assert_eq!(tree.height(), height);
        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(tree.collect_values(), vec![3, 4, 5, 6, 7]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_reinsert_into_emptied_leaf() {
        let mut tree = MTree::from_sorted(3, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
        tree.remove(&1).unwrap();
        tree.remove(&2).unwrap();

        tree.insert(2).unwrap();
        assert!(tree.search(&2));
        assert_eq!(tree.collect_values(), vec![2, 3, 4, 5, 6, 7]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_remove_everything() {
        let values: Vec<u32> = (0..50).collect();
        let mut tree = MTree::from_sorted(5, &values).unwrap();
        for v in &values {
            tree.remove(v).unwrap();
        }

        assert!(tree.is_empty());
        assert!(tree.collect_values().is_empty());
        for v in &values {
            assert!(!tree.search(v));
        }
    }
}
