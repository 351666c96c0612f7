//! Dequeue Error Types

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DequeError {
    #[error("Invalid capacity {requested}: capacity must be >= 0")]
    InvalidCapacity { requested: i64 },

    #[error(
        "Capacity ({requested}) must be >= the current size ({size}), or 0 for infinite capacity"
    )]
    CapacityBelowSize { requested: usize, size: usize },
}

/// Result type for dequeue operations
pub type DequeResult<T> = Result<T, DequeError>;
