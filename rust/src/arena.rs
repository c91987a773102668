//! Index-addressed node storage.
//!
//! Nodes refer to their children by `NodeId` instead of owning boxes, so a
//! whole tree is torn down by clearing one `Vec` rather than by a chain of
//! recursive drops.

use std::convert::TryFrom;

pub type NodeId = u32;
pub const NULL_NODE: NodeId = u32::MAX;

/// Statistics for a node arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub utilization: f64,
}

/// Append-only arena. Slots are never freed individually; `clear` drops
/// everything at once, which is how a rebuild discards the old tree.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    storage: Vec<T>,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a new item in the arena and return its ID
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = self.storage.len();
        self.storage.push(item);
        NodeId::try_from(index).expect("Index should fit in NodeId")
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        if id == NULL_NODE {
            return None;
        }
        self.storage.get(usize::try_from(id).ok()?)
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        if id == NULL_NODE {
            return None;
        }
        self.storage.get_mut(usize::try_from(id).ok()?)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    pub fn stats(&self) -> ArenaStats {
        let total_capacity = self.storage.capacity();
        let allocated_count = self.storage.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };

        ArenaStats {
            total_capacity,
            allocated_count,
            utilization,
        }
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
