//! Storage statistics for a container instance.
//!
//! [`ArrayStats`] is a point-in-time snapshot, taken by value so that it
//! stays valid after the container is mutated or dropped.

/// Size, capacity, and allocation counters for one container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayStats {
    /// Number of live elements.
    pub len: usize,
    /// Number of reserved element slots.
    pub capacity: usize,
    /// Storage reallocations performed over the container's lifetime.
    pub reallocations: u64,
    /// Bytes reserved by the storage block (`capacity * size_of::<T>()`).
    pub memory_bytes: usize,
}

impl ArrayStats {
    /// Reserved slots not currently holding a live element.
    pub fn spare_capacity(&self) -> usize {
        self.capacity - self.len
    }
}
