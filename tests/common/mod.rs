//! Common test utilities and helpers
//!
//! Shared helpers for integration tests that drive the dequeue from several
//! threads through its public API.

use blocking_dequeue::dequeue::api::BlockingDequeue;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Spawn `workers` producers that together push `1..=total` to the back
#[allow(dead_code)]
pub fn spawn_back_producers(
    dequeue: &Arc<BlockingDequeue<usize>>,
    workers: usize,
    total: usize,
) -> Vec<JoinHandle<()>> {
    (0..workers)
        .map(|worker| {
            let dequeue = Arc::clone(dequeue);
            thread::spawn(move || {
                for value in (worker + 1..=total).step_by(workers) {
                    dequeue.push_back(value);
                }
            })
        })
        .collect()
}

/// A shared counter and a callback that increments it
#[allow(dead_code)]
pub fn counting_callback() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let counter = Arc::new(AtomicUsize::new(0));
    let callback = {
        let counter = Arc::clone(&counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    };
    (counter, callback)
}
