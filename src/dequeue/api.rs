//! Public API for the dequeue
//!
//! External modules should import from here rather than directly from internal
//! modules. See module documentation for usage and locking details.

// Core dequeue
pub use crate::dequeue::blocking::BlockingDequeue;

// Callbacks
pub use crate::dequeue::callback::{DequeCallback, Edge};

// Error handling
pub use crate::dequeue::error::{DequeError, DequeResult};
