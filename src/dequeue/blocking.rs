//! The blocking dequeue
//!
//! All state sits behind one mutex with two condition variables bound to it:
//! `not_empty` for pops and peeks, `not_full` for pushes. Every wait re-checks
//! its predicate in a loop. Callbacks are captured under the lock and invoked
//! after it is released.

use crate::core::config::DequeSettings;
use crate::core::sync::{lock_recover, wait_recover};
use crate::dequeue::callback::{fire, DequeCallback, Edge};
use crate::dequeue::error::{DequeError, DequeResult};
use crate::dequeue::internal::{DequeState, End};
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};

const LOCK_CONTEXT: &str = "blocking dequeue state";

/// Thread-safe double-ended queue with optional capacity bound
///
/// Pushes block while the dequeue is full, pops and peeks block while it is
/// empty. A capacity of `0` means unbounded. The dequeue is not `Clone`;
/// share it by reference or through an [`Arc`].
pub struct BlockingDequeue<T> {
    state: Mutex<DequeState<T>>,
    not_empty: Condvar,
    not_full: Condvar,
}

impl<T> BlockingDequeue<T> {
    /// Create an empty, unbounded dequeue
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty dequeue holding at most `capacity` elements (0 = unbounded)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(DequeState::new(capacity)),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }
    }

    /// Create an empty, unbounded dequeue with both callbacks bound
    pub fn with_callbacks<F, E>(on_full: F, on_empty: E) -> Self
    where
        F: Fn() + Send + Sync + 'static,
        E: Fn() + Send + Sync + 'static,
    {
        let dequeue = Self::new();
        {
            let mut state = dequeue.lock();
            state.set_callback(Edge::Full, Some(Arc::new(on_full)));
            state.set_callback(Edge::Empty, Some(Arc::new(on_empty)));
        }
        dequeue
    }

    /// Create a dequeue from the `[dequeue]` configuration table
    pub fn from_config(settings: &DequeSettings) -> DequeResult<Self> {
        let dequeue = Self::new();
        dequeue.set_capacity(settings.capacity)?;
        Ok(dequeue)
    }

    /// Add an item to the front. Blocks while the dequeue is full.
    pub fn push_front(&self, item: T) {
        self.push(item, End::Front)
    }

    /// Add an item to the back. Blocks while the dequeue is full.
    pub fn push_back(&self, item: T) {
        self.push(item, End::Back)
    }

    /// Remove and return the front item. Blocks while the dequeue is empty.
    pub fn pop_front(&self) -> T {
        self.pop(End::Front)
    }

    /// Remove and return the back item. Blocks while the dequeue is empty.
    pub fn pop_back(&self) -> T {
        self.pop(End::Back)
    }

    /// Add an item to the front unless the dequeue is full
    ///
    /// Returns the item back in `Err` when full.
    pub fn try_push_front(&self, item: T) -> Result<(), T> {
        self.try_push(item, End::Front)
    }

    /// Add an item to the back unless the dequeue is full
    ///
    /// Returns the item back in `Err` when full.
    pub fn try_push_back(&self, item: T) -> Result<(), T> {
        self.try_push(item, End::Back)
    }

    /// Remove the front item if there is one
    pub fn try_pop_front(&self) -> Option<T> {
        self.try_pop(End::Front)
    }

    /// Remove the back item if there is one
    pub fn try_pop_back(&self) -> Option<T> {
        self.try_pop(End::Back)
    }

    /// Set the capacity; 0 makes the dequeue unbounded.
    ///
    /// Fails without changing anything when `capacity` is negative or when a
    /// positive `capacity` is below the current size. Widening the capacity
    /// (or removing the bound) wakes every blocked producer.
    pub fn set_capacity(&self, capacity: i64) -> DequeResult<()> {
        let requested = usize::try_from(capacity).map_err(|_| {
            log::warn!("Rejected capacity change to {}", capacity);
            DequeError::InvalidCapacity {
                requested: capacity,
            }
        })?;

        let mut state = self.lock();
        let size = state.len();
        if requested > 0 && requested < size {
            log::warn!(
                "Rejected capacity change to {} below current size {}",
                requested,
                size
            );
            return Err(DequeError::CapacityBelowSize { requested, size });
        }

        let previous = state.replace_capacity(requested);
        drop(state);

        log::debug!("Dequeue capacity changed from {} to {}", previous, requested);
        let widened = requested == 0 || (previous > 0 && requested > previous);
        if widened {
            self.not_full.notify_all();
        }
        Ok(())
    }

    /// Current capacity; 0 = unbounded
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Number of elements currently held
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// True when bounded and size has reached capacity
    pub fn is_full(&self) -> bool {
        self.lock().is_full()
    }

    /// Bind the callback invoked when a push fills the dequeue
    pub fn set_on_full<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.replace_callback(Edge::Full, Some(Arc::new(callback)));
    }

    /// Bind the callback invoked when a pop empties the dequeue
    pub fn set_on_empty<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.replace_callback(Edge::Empty, Some(Arc::new(callback)));
    }

    pub fn clear_on_full(&self) {
        self.replace_callback(Edge::Full, None);
    }

    pub fn clear_on_empty(&self) {
        self.replace_callback(Edge::Empty, None);
    }

    fn replace_callback(&self, edge: Edge, callback: Option<DequeCallback>) {
        let bound = callback.is_some();
        self.lock().set_callback(edge, callback);
        log::debug!(
            "on_{} callback {}",
            edge,
            if bound { "bound" } else { "cleared" }
        );
    }

    fn lock(&self) -> MutexGuard<'_, DequeState<T>> {
        lock_recover(&self.state, LOCK_CONTEXT)
    }

    /// Wait on `condvar` until `blocked` no longer holds
    fn wait_until<'a>(
        &'a self,
        condvar: &Condvar,
        mut state: MutexGuard<'a, DequeState<T>>,
        operation: &str,
        blocked: impl Fn(&DequeState<T>) -> bool,
    ) -> MutexGuard<'a, DequeState<T>> {
        if blocked(&state) {
            log::trace!("{} blocked (size {})", operation, state.len());
            while blocked(&state) {
                state = wait_recover(condvar, state, LOCK_CONTEXT);
            }
            log::trace!("{} resumed (size {})", operation, state.len());
        }
        state
    }

    fn push(&self, item: T, end: End) {
        let state = self.lock();
        let mut state = self.wait_until(&self.not_full, state, push_name(end), DequeState::is_full);
        let on_full = state.insert(item, end);
        drop(state);

        self.not_empty.notify_all();
        fire(Edge::Full, on_full);
    }

    fn try_push(&self, item: T, end: End) -> Result<(), T> {
        let mut state = self.lock();
        if state.is_full() {
            return Err(item);
        }
        let on_full = state.insert(item, end);
        drop(state);

        self.not_empty.notify_all();
        fire(Edge::Full, on_full);
        Ok(())
    }

    fn pop(&self, end: End) -> T {
        let mut state = self.lock();
        loop {
            if let Some((item, on_empty)) = state.remove(end) {
                drop(state);
                self.not_full.notify_one();
                fire(Edge::Empty, on_empty);
                return item;
            }
            state = self.wait_until(&self.not_empty, state, pop_name(end), DequeState::is_empty);
        }
    }

    fn try_pop(&self, end: End) -> Option<T> {
        let mut state = self.lock();
        let (item, on_empty) = state.remove(end)?;
        drop(state);

        self.not_full.notify_one();
        fire(Edge::Empty, on_empty);
        Some(item)
    }
}

impl<T: Clone> BlockingDequeue<T> {
    /// Return a clone of the front item without removing it. Blocks while empty.
    pub fn peek_front(&self) -> T {
        self.peek(End::Front)
    }

    /// Return a clone of the back item without removing it. Blocks while empty.
    pub fn peek_back(&self) -> T {
        self.peek(End::Back)
    }

    pub fn try_peek_front(&self) -> Option<T> {
        self.lock().get(End::Front).cloned()
    }

    pub fn try_peek_back(&self) -> Option<T> {
        self.lock().get(End::Back).cloned()
    }

    fn peek(&self, end: End) -> T {
        let mut state = self.lock();
        loop {
            if let Some(item) = state.get(end) {
                return item.clone();
            }
            state = self.wait_until(&self.not_empty, state, peek_name(end), DequeState::is_empty);
        }
    }
}

impl<T> Default for BlockingDequeue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BlockingDequeue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("BlockingDequeue")
            .field("size", &state.len())
            .field("capacity", &state.capacity())
            .field("on_full", &state.has_callback(Edge::Full))
            .field("on_empty", &state.has_callback(Edge::Empty))
            .finish()
    }
}

fn push_name(end: End) -> &'static str {
    match end {
        End::Front => "push_front",
        End::Back => "push_back",
    }
}

fn pop_name(end: End) -> &'static str {
    match end {
        End::Front => "pop_front",
        End::Back => "pop_back",
    }
}

fn peek_name(end: End) -> &'static str {
    match end {
        End::Front => "peek_front",
        End::Back => "peek_back",
    }
}
