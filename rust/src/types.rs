//! Core types and data structures for MTree.
//!
//! This module contains the tree handle, the node layout, and the records
//! passed back up the recursion during insertion.

use crate::arena::{NodeArena, NodeId};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Minimum capacity (children per node) for any tree
pub const MIN_CAPACITY: usize = 2;

/// Capacity used by `with_default_capacity` and `Default`
pub const DEFAULT_CAPACITY: usize = 16;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// In-memory M-way search tree over unique, ordered values.
///
/// Every node holds at most `capacity - 1` keys and, when internal, one more
/// child than keys. Stored values live in the leaves; the keys of internal
/// nodes are separators, where child `i` holds the values `v` with
/// `keys[i - 1] < v <= keys[i]`.
///
/// # Examples
///
/// ```
/// use mtree::MTree;
///
/// let mut tree = MTree::from_sorted(3, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
/// tree.insert(8).unwrap();
/// assert!(tree.insert(8).unwrap_err().is_duplicate());
///
/// tree.remove(&4).unwrap();
/// assert!(!tree.search(&4));
/// assert_eq!(tree.collect_values(), vec![1, 2, 3, 5, 6, 7, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct MTree<T> {
    /// Maximum number of children per node, shared by every node.
    pub(crate) capacity: usize,
    /// The root node of the tree.
    pub(crate) root: NodeId,
    /// Storage for every node reachable from `root`.
    pub(crate) arena: NodeArena<Node<T>>,
}

/// A tree node. A node is a leaf iff it has no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// Strictly increasing keys.
    pub(crate) keys: Vec<T>,
    /// Child ids; empty for leaves, `keys.len() + 1` entries otherwise.
    pub(crate) children: Vec<NodeId>,
}

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Outcome of inserting into a subtree, reported to its parent.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum InsertResult<T> {
    /// The value was placed and the subtree root is within capacity.
    Inserted,
    /// The subtree root overflowed and was split; it kept the left half and
    /// `right` is the new sibling to be linked after it under `separator`.
    Split { separator: T, right: NodeId },
}
