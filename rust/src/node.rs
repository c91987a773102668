//! Node-level operations for MTree.
//!
//! Everything here works on a single node. Capacity is passed in by the
//! tree rather than stored per node.

use crate::arena::NodeId;
use crate::types::Node;

impl<T: Ord + Clone> Node<T> {
    // ============================================================================
    // ACCESSORS
    // ============================================================================

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of keys in this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[T] {
        &self.keys
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    // ============================================================================
    // ROUTING
    // ============================================================================

    /// Index of the child a value belongs to: the first `i` with
    /// `value <= keys[i]`, otherwise the last child. A value equal to a
    /// separator goes left.
    pub fn child_index(&self, value: &T) -> usize {
        self.keys.partition_point(|key| key < value)
    }

    /// The child a value belongs to, or `None` for a leaf.
    pub fn route(&self, value: &T) -> Option<NodeId> {
        self.children.get(self.child_index(value)).copied()
    }

    // ============================================================================
    // LEAF OPERATIONS
    // ============================================================================

    pub fn contains_key(&self, value: &T) -> bool {
        self.keys.binary_search(value).is_ok()
    }

    /// Insert a value in sorted position. Returns false, leaving the node
    /// untouched, if the value is already present.
    pub fn insert_key(&mut self, value: T) -> bool {
        match self.keys.binary_search(&value) {
            Ok(_) => false,
            Err(index) => {
                self.keys.insert(index, value);
                true
            }
        }
    }

    /// Erase a value, shifting later keys left. Returns false if absent.
    pub fn remove_key(&mut self, value: &T) -> bool {
        match self.keys.binary_search(value) {
            Ok(index) => {
                self.keys.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    // ============================================================================
    // INTERNAL NODE OPERATIONS
    // ============================================================================

    /// Link a split-off sibling after the child at `child_index`.
    pub fn insert_child(&mut self, child_index: usize, separator: T, right: NodeId) {
        self.keys.insert(child_index, separator);
        self.children.insert(child_index + 1, right);
    }

    // ============================================================================
    // SPLITTING
    // ============================================================================

    /// A node overflows once it holds `capacity` keys (one more child than
    /// the tree allows).
    pub fn is_overfull(&self, capacity: usize) -> bool {
        self.keys.len() >= capacity
    }

    /// Split this node in two, keeping the left half in place. Returns the
    /// separator to promote and the new right node. `incoming` is the index
    /// of the key whose arrival overflowed the node.
    pub fn split(&mut self, incoming: usize) -> (T, Node<T>) {
        if self.is_leaf() {
            self.split_leaf()
        } else {
            self.split_internal(incoming)
        }
    }

    /// Leaves keep the separator: it is a copy of the left half's largest
    /// value, so the value itself stays stored.
    fn split_leaf(&mut self) -> (T, Node<T>) {
        let mid = (self.keys.len() - 1) / 2;
        let right_keys = self.keys.split_off(mid + 1);
        let separator = self.keys[mid].clone();

        (separator, Node::leaf(right_keys))
    }

    /// Internal nodes give up the middle key: left keeps `keys[..mid]` and
    /// `children[..=mid]`, right takes `keys[mid + 1..]` and `children[mid + 1..]`.
    ///
    /// With two keys one side keeps a single child and no keys. There the
    /// incoming key is promoted, so the keyless side holds the child that
    /// just split and absorbs the next separator coming up from it.
    fn split_internal(&mut self, incoming: usize) -> (T, Node<T>) {
        let mid = if self.keys.len() == 2 {
            incoming
        } else {
            self.keys.len() / 2
        };
        let mut right_keys = self.keys.split_off(mid);
        let separator = right_keys.remove(0);
        let right_children = self.children.split_off(mid + 1);

        (separator, Node::internal(right_keys, right_children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_index_routes_equal_values_left() {
        let node = Node::internal(vec![10, 20], vec![0, 1, 2]);
        assert_eq!(node.child_index(&5), 0);
        assert_eq!(node.child_index(&10), 0);
        assert_eq!(node.child_index(&11), 1);
        assert_eq!(node.child_index(&20), 1);
        assert_eq!(node.child_index(&21), 2);
        assert_eq!(node.route(&21), Some(2));
    }

    #[test]
    fn test_route_on_leaf_is_none() {
        let leaf = Node::leaf(vec![1, 2, 3]);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.route(&2), None);
    }

    #[test]
    fn test_insert_key_keeps_order_and_rejects_duplicates() {
        let mut leaf = Node::leaf(vec![1, 5]);
        assert!(leaf.insert_key(3));
        assert!(leaf.insert_key(0));
        assert!(leaf.insert_key(9));
        assert!(!leaf.insert_key(5));
        assert_eq!(leaf.keys(), &[0, 1, 3, 5, 9]);
    }

    #[test]
    fn test_remove_key() {
        let mut leaf = Node::leaf(vec![1, 2, 3]);
        assert!(leaf.remove_key(&2));
        assert!(!leaf.remove_key(&2));
        assert_eq!(leaf.keys(), &[1, 3]);
        assert!(leaf.remove_key(&1));
        assert!(leaf.remove_key(&3));
        assert!(leaf.is_empty());
    }

    #[test]
    fn test_insert_child() {
        let mut node = Node::internal(vec![10], vec![0, 1]);
        node.insert_child(0, 5, 7);
        assert_eq!(node.keys(), &[5, 10]);
        assert_eq!(node.children(), &[0, 7, 1]);
    }

    #[test]
    fn test_split_leaf_keeps_separator_on_the_left() {
        let mut leaf = Node::leaf(vec![1, 2, 3]);
        assert!(leaf.is_overfull(3));

        let (separator, right) = leaf.split(1);
        assert_eq!(separator, 2);
        assert_eq!(leaf.keys(), &[1, 2]);
        assert_eq!(right.keys(), &[3]);
        assert!(right.is_leaf());
    }

    #[test]
    fn test_split_leaf_capacity_two() {
        let mut leaf = Node::leaf(vec![4, 8]);
        let (separator, right) = leaf.split(0);
        assert_eq!(separator, 4);
        assert_eq!(leaf.keys(), &[4]);
        assert_eq!(right.keys(), &[8]);
    }

    #[test]
    fn test_split_internal_promotes_middle_key() {
        let mut node = Node::internal(vec![10, 20, 30, 40], vec![0, 1, 2, 3, 4]);
        let (separator, right) = node.split(0);

        assert_eq!(separator, 30);
        assert_eq!(node.keys(), &[10, 20]);
        assert_eq!(node.children(), &[0, 1, 2]);
        assert_eq!(right.keys(), &[40]);
        assert_eq!(right.children(), &[3, 4]);
    }

    #[test]
    fn test_split_internal_capacity_two_promotes_incoming_right() {
        // 20 arrived last, from children 1 and 2.
        let mut node = Node::internal(vec![10, 20], vec![0, 1, 2]);
        let (separator, right) = node.split(1);

        assert_eq!(separator, 20);
        assert_eq!(node.keys(), &[10]);
        assert_eq!(node.children(), &[0, 1]);
        assert!(right.keys().is_empty());
        assert_eq!(right.children(), &[2]);
        assert!(!right.is_leaf());
    }

    #[test]
    fn test_split_internal_capacity_two_promotes_incoming_left() {
        // 10 arrived last, from children 0 and 1.
        let mut node = Node::internal(vec![10, 20], vec![0, 1, 2]);
        let (separator, right) = node.split(0);

        assert_eq!(separator, 10);
        assert!(node.keys().is_empty());
        assert_eq!(node.children(), &[0]);
        assert_eq!(right.keys(), &[20]);
        assert_eq!(right.children(), &[1, 2]);
    }

    #[test]
    fn test_split_internal_ignores_incoming_above_two_keys() {
        let mut node = Node::internal(vec![10, 20, 30], vec![0, 1, 2, 3]);
        let (separator, right) = node.split(0);

        assert_eq!(separator, 20);
        assert_eq!(node.keys(), &[10]);
        assert_eq!(right.keys(), &[30]);
    }
}
