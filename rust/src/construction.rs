//! Construction and initialization logic for MTree and nodes.
//!
//! This module contains capacity validation, tree construction, and the
//! node constructors used by split and rebuild.

use crate::arena::{NodeArena, NodeId};
use crate::error::{InitResult, MTreeError, MTreeResult};
use crate::types::{MTree, Node, DEFAULT_CAPACITY, MIN_CAPACITY};

impl<T: Ord + Clone> MTree<T> {
    /// Create an empty tree whose nodes have at most `capacity` children.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of children per node (minimum 2)
    ///
    /// # Examples
    ///
    /// ```
    /// use mtree::MTree;
    ///
    /// let tree = MTree::<i32>::new(4).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(MTree::<i32>::new(1).is_err());
    /// ```
    pub fn new(capacity: usize) -> InitResult<Self> {
        validate_capacity(capacity)?;

        let mut arena = NodeArena::new();
        let root = arena.allocate(Node::leaf(Vec::new()));

        Ok(Self {
            capacity,
            root,
            arena,
        })
    }

    /// Create an empty tree with `DEFAULT_CAPACITY`.
    pub fn with_default_capacity() -> InitResult<Self> {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Create a tree and bulk-load it from an ascending sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use mtree::MTree;
    ///
    /// let tree = MTree::from_sorted(3, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.collect_values(), vec![1, 2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn from_sorted(capacity: usize, values: &[T]) -> InitResult<Self> {
        let mut tree = Self::new(capacity)?;
        tree.rebuild(values);
        Ok(tree)
    }

    /// Maximum number of children per node.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Node<T> {
    /// A leaf holding `keys`, which must be strictly increasing.
    pub fn leaf(keys: Vec<T>) -> Self {
        Self {
            keys,
            children: Vec::new(),
        }
    }

    /// An internal node; `children` must have one more entry than `keys`.
    pub fn internal(keys: Vec<T>, children: Vec<NodeId>) -> Self {
        debug_assert_eq!(keys.len() + 1, children.len());
        Self { keys, children }
    }
}

impl<T: Ord + Clone> Default for MTree<T> {
    /// Create an empty tree with default capacity.
    fn default() -> Self {
        Self::with_default_capacity().expect("DEFAULT_CAPACITY is at least MIN_CAPACITY")
    }
}

/// Validate that a capacity can form an M-way tree.
///
/// Below two children per node the rebuild partitioning cannot make
/// progress, so such trees are rejected up front.
pub fn validate_capacity(capacity: usize) -> MTreeResult<()> {
    if capacity < MIN_CAPACITY {
        Err(MTreeError::invalid_capacity(capacity, MIN_CAPACITY))
    } else {
        Ok(())
    }
}
