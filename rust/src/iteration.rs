//! Ordered traversal of MTree values.
//!
//! Stored values live only in leaves, so a left-to-right walk over the
//! leaves yields the full ascending set. Separators are never emitted.

use crate::arena::NodeId;
use crate::types::MTree;

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Borrowing iterator over the stored values in ascending order.
pub struct ValueIterator<'a, T> {
    tree: &'a MTree<T>,
    /// Nodes still to visit, next one on top.
    pending: Vec<NodeId>,
    current_leaf: std::slice::Iter<'a, T>,
}

// ============================================================================
// MTREE TRAVERSAL METHODS
// ============================================================================

impl<T: Ord + Clone> MTree<T> {
    /// All stored values, ascending, without duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use mtree::MTree;
    ///
    /// let mut tree = MTree::new(3).unwrap();
    /// for v in [5, 1, 4, 2, 3] {
    ///     tree.insert(v).unwrap();
    /// }
    /// assert_eq!(tree.collect_values(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn collect_values(&self) -> Vec<T> {
        let mut values = Vec::new();
        self.collect_recursive(self.root, &mut values);
        values
    }

    fn collect_recursive(&self, id: NodeId, out: &mut Vec<T>) {
        let Some(node) = self.arena.get(id) else {
            return;
        };

        if node.is_leaf() {
            out.extend_from_slice(node.keys());
        } else {
            for &child in node.children() {
                self.collect_recursive(child, out);
            }
        }
    }

    /// Returns an iterator over the stored values in ascending order.
    pub fn values(&self) -> ValueIterator<'_, T> {
        ValueIterator::new(self)
    }
}

// ============================================================================
// ITERATOR IMPLEMENTATIONS
// ============================================================================

impl<'a, T> ValueIterator<'a, T> {
    fn new(tree: &'a MTree<T>) -> Self {
        Self {
            tree,
            pending: vec![tree.root],
            current_leaf: (&[] as &[T]).iter(),
        }
    }
}

impl<'a, T: Ord + Clone> Iterator for ValueIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current_leaf.next() {
                return Some(value);
            }

            let node = self.tree.arena.get(self.pending.pop()?)?;
            if node.is_leaf() {
                self.current_leaf = node.keys().iter();
            } else {
                self.pending.extend(node.children().iter().rev());
            }
        }
    }
}

impl<'a, T: Ord + Clone> IntoIterator for &'a MTree<T> {
    type Item = &'a T;
    type IntoIter = ValueIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}
