//! Edge-transition callbacks
//!
//! A dequeue holds at most one callback per edge. The slot is read under the
//! dequeue lock and the captured `Arc` is invoked after the lock is released,
//! so a callback may safely call back into the dequeue.

use std::fmt;
use std::sync::Arc;

/// Shared zero-argument callback invoked on a full or empty transition
pub type DequeCallback = Arc<dyn Fn() + Send + Sync>;

/// The occupancy boundary a callback is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Size reached capacity after a push
    Full,
    /// Size reached zero after a pop
    Empty,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Full => write!(f, "full"),
            Edge::Empty => write!(f, "empty"),
        }
    }
}

/// Invoke a callback captured at transition time, if any
pub(crate) fn fire(edge: Edge, callback: Option<DequeCallback>) {
    if let Some(callback) = callback {
        log::trace!("Invoking on_{} callback", edge);
        callback();
    }
}
