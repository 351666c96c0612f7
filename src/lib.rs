//! Thread-safe blocking double-ended queue
//!
//! See [`dequeue`] for the container and [`core`] for configuration, logging
//! and synchronisation helpers.

pub mod core;
pub mod dequeue;
