//! Test modules for the blocking dequeue
//!
//! Tests are organised by functional area.


use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// How long a thread must stay parked before it counts as blocked
pub(super) const BLOCKED_FOR: Duration = Duration::from_millis(100);

/// Upper bound for a released thread to finish
pub(super) const RELEASED_WITHIN: Duration = Duration::from_secs(5);

/// Run `operation` on a new thread and report its result through a channel
pub(super) fn spawn_reporting<R, F>(operation: F) -> Receiver<R>
where
    R: Send + 'static,
    F: FnOnce() -> R + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(operation());
    });
    rx
}

/// Assert the spawned operation has not completed yet
pub(super) fn assert_blocked<R: std::fmt::Debug>(rx: &Receiver<R>) {
    match rx.recv_timeout(BLOCKED_FOR) {
        Err(RecvTimeoutError::Timeout) => {}
        other => panic!("Expected operation to be blocked, got {:?}", other),
    }
}

/// Wait for the spawned operation to complete and return its result
pub(super) fn assert_released<R>(rx: &Receiver<R>) -> R {
    rx.recv_timeout(RELEASED_WITHIN)
        .expect("Blocked operation should have been released")
}
