//! Blocking Dequeue Component
//!
//! A thread-safe double-ended queue supporting FIFO, LIFO and hybrid access
//! across concurrent producers and consumers, with an optional capacity bound
//! and callbacks fired on transitions into the full and empty states.
//!
//! # Overview
//!
//! - **Both Ends**: push, pop and peek at the front or the back
//! - **Blocking**: pushes wait while full, pops and peeks wait while empty
//! - **Capacity**: `0` means unbounded; capacity can change at any time but
//!   never below the current size
//! - **Edge Callbacks**: `on_full` / `on_empty` fire once per transition, on
//!   the triggering thread, after the internal lock is released
//!
//! # Locking
//!
//! ```text
//!                 ┌───────────────────────────────────┐
//!   push_front ──►│ Mutex<DequeState>                 │◄── push_back
//!                 │  elements: VecDeque<T>            │
//!   pop_front  ◄──│  capacity, on_full, on_empty      │──► pop_back
//!                 └──────┬─────────────────────┬──────┘
//!                        │                     │
//!                 not_empty (Condvar)   not_full (Condvar)
//!                 pops + peeks wait     pushes wait
//! ```
//!
//! Size, capacity and callbacks share a single mutex. A split design with one
//! lock per condition lets a producer read a stale capacity while a consumer
//! changes the size, so it is not used.
//!
//! # Example Usage
//!
//! ```rust
//! use blocking_dequeue::dequeue::BlockingDequeue;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let dequeue = Arc::new(BlockingDequeue::with_capacity(2));
//!
//! let producer = {
//!     let dequeue = Arc::clone(&dequeue);
//!     thread::spawn(move || {
//!         for i in 0..10 {
//!             dequeue.push_back(i);
//!         }
//!     })
//! };
//!
//! let received: Vec<i32> = (0..10).map(|_| dequeue.pop_front()).collect();
//! producer.join().unwrap();
//! assert_eq!(received, (0..10).collect::<Vec<_>>());
//! ```

pub mod api;
mod blocking;
mod callback;
mod error;
mod internal;

pub use blocking::BlockingDequeue;
pub use callback::{DequeCallback, Edge};
pub use error::{DequeError, DequeResult};

#[cfg(test)]
mod tests;
