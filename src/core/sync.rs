//! Synchronization utilities for robust mutex handling
//!
//! This module provides utilities for handling mutex poisoning in a consistent
//! manner across the codebase. Every structure guarded through these helpers
//! keeps its invariants intact before any user code runs under the lock, so a
//! poisoned lock is recovered and logged rather than propagated.

use std::sync::{Condvar, LockResult, Mutex, MutexGuard};

/// Recover the guard from a possibly poisoned lock result
///
/// Logs a warning naming the `context` when the lock was poisoned, then
/// continues with the inner guard.
///
/// # Arguments
/// * `result` - The result from a mutex lock or condvar wait operation
/// * `context` - Human-readable name of the structure being locked
///
/// # Examples
/// ```
/// use std::sync::Mutex;
/// use blocking_dequeue::core::sync::recover_poison;
///
/// let mutex = Mutex::new(42);
/// let guard = recover_poison(mutex.lock(), "answer");
/// assert_eq!(*guard, 42);
/// ```
pub fn recover_poison<G>(result: LockResult<G>, context: &str) -> G {
    result.unwrap_or_else(|poison_err| {
        log::warn!(
            "Recovered poisoned lock on {}. A panic occurred while the lock was held.",
            context
        );
        poison_err.into_inner()
    })
}

/// Lock a mutex, recovering from poisoning
pub fn lock_recover<'a, T>(mutex: &'a Mutex<T>, context: &str) -> MutexGuard<'a, T> {
    recover_poison(mutex.lock(), context)
}

/// Wait on a condition variable once, recovering from poisoning
///
/// Callers must re-check their predicate after this returns: the wake-up may
/// be spurious, or another thread may already have consumed the change.
pub fn wait_recover<'a, T>(
    condvar: &Condvar,
    guard: MutexGuard<'a, T>,
    context: &str,
) -> MutexGuard<'a, T> {
    recover_poison(condvar.wait(guard), context)
}
