//! Bulk rebuild of an MTree from an ascending sequence.
//!
//! Rebuild does not go through insert. A run of at most `capacity - 1`
//! values becomes a leaf; a longer run is cut into exactly `capacity`
//! contiguous slices of `len / capacity` values each, the last slice taking
//! the remainder. The final value of every slice but the last is copied up
//! as a separator, and each slice is built recursively into a child.

use log::debug;

use crate::arena::{NodeArena, NodeId};
use crate::types::{MTree, Node};

impl<T: Ord + Clone> MTree<T> {
    /// Replace the whole contents of the tree with `values`.
    ///
    /// `values` must be strictly ascending; this is checked only in debug
    /// builds. Every existing node is discarded and the root is replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use mtree::MTree;
    ///
    /// let mut tree = MTree::new(4).unwrap();
    /// tree.insert(100).unwrap();
    /// tree.rebuild(&[1, 2, 3]);
    /// assert_eq!(tree.collect_values(), vec![1, 2, 3]);
    /// ```
    pub fn rebuild(&mut self, values: &[T]) {
        debug_assert!(
            values.windows(2).all(|pair| pair[0] < pair[1]),
            "rebuild input must be strictly ascending"
        );

        self.arena = NodeArena::with_capacity(estimated_node_count(values.len(), self.capacity));
        self.root = self.build_subtree(values);

        debug!(
            "rebuilt tree from {} values into {} nodes, root {}",
            values.len(),
            self.arena.len(),
            self.root
        );
    }

    /// Collect every stored value and rebuild from them, restoring a
    /// balanced shape after a run of inserts and removals.
    pub fn rebalance(&mut self) {
        let values = self.collect_values();
        self.rebuild(&values);
    }

    fn build_subtree(&mut self, values: &[T]) -> NodeId {
        let capacity = self.capacity;
        if values.len() < capacity {
            return self.arena.allocate(Node::leaf(values.to_vec()));
        }

        let slice_len = values.len() / capacity;
        let mut keys = Vec::with_capacity(capacity - 1);
        let mut children = Vec::with_capacity(capacity);

        for i in 0..capacity {
            let start = i * slice_len;
            let end = if i == capacity - 1 {
                values.len()
            } else {
                keys.push(values[start + slice_len - 1].clone());
                start + slice_len
            };
            children.push(self.build_subtree(&values[start..end]));
        }

        self.arena.allocate(Node::internal(keys, children))
    }
}

/// Rough node count for a rebuilt tree: the leaves plus as many again for
/// the levels above them.
fn estimated_node_count(len: usize, capacity: usize) -> usize {
    let leaves = len / (capacity - 1) + 1;
    leaves * 2
}
