//! Error handling and result types for MTree operations.
//!
//! Duplicate insertion and removal of an absent value are ordinary outcomes
//! reported to the caller; neither leaves the tree modified.

use thiserror::Error;

/// Error type for M-way tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MTreeError {
    /// The value is already stored in the tree.
    #[error("Duplicate insertion")]
    DuplicateKey,
    /// The value is not stored in the tree.
    #[error("Value not found")]
    NotFound,
    /// Invalid capacity specified.
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),
    /// A node id did not resolve to a node.
    #[error("Arena error: {0}")]
    ArenaError(String),
    /// Tree corruption detected.
    #[error("Corrupted tree: {0}")]
    CorruptedTree(String),
}

impl MTreeError {
    /// Create an InvalidCapacity error with context
    pub fn invalid_capacity(capacity: usize, min_required: usize) -> Self {
        Self::InvalidCapacity(format!(
            "Capacity {} is invalid (minimum required: {})",
            capacity, min_required
        ))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateKey)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Check if this error is a capacity error
    pub fn is_capacity_error(&self) -> bool {
        matches!(self, Self::InvalidCapacity(_))
    }
}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, MTreeError>;

/// Public result type for tree operations that may fail
pub type MTreeResult<T> = Result<T, MTreeError>;

/// Result type for insert and remove
pub type ModifyResult<T> = Result<T, MTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, MTreeError>;
