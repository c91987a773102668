//! M-way search tree in Rust.
//!
//! This crate provides an in-memory multiway ordered index over unique
//! values, supporting insertion with node splitting, point search, removal,
//! ordered collection, and bulk rebuild from an ascending sequence.
//!
//! Nodes live in an arena owned by the tree and refer to their children by
//! id. The node capacity is configured once per tree.
//!
//! # Examples
//!
//! ```
//! use mtree::{MTree, MTreeError};
//!
//! let mut tree = MTree::from_sorted(3, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
//!
//! tree.insert(8).unwrap();
//! assert_eq!(tree.insert(8), Err(MTreeError::DuplicateKey));
//!
//! tree.remove(&4).unwrap();
//! assert_eq!(tree.remove(&4), Err(MTreeError::NotFound));
//!
//! assert_eq!(tree.collect_values(), vec![1, 2, 3, 5, 6, 7, 8]);
//! ```

mod arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod rebuild;
mod tree_structure;
mod types;
mod validation;

pub use arena::{ArenaStats, NodeArena, NodeId, NULL_NODE};
pub use construction::validate_capacity;
pub use error::{InitResult, MTreeError, MTreeResult, ModifyResult};
pub use iteration::ValueIterator;
pub use types::{MTree, Node, DEFAULT_CAPACITY, MIN_CAPACITY};
