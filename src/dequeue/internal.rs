//! Lock-protected state of a blocking dequeue
//!
//! Elements, capacity and both callback slots live in one structure behind a
//! single mutex. Fullness and emptiness are joint functions of size and
//! capacity, so they are never read or written under separate locks.

use crate::dequeue::callback::{DequeCallback, Edge};
use std::collections::VecDeque;
use std::fmt;

/// End of the dequeue an operation acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum End {
    Front,
    Back,
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            End::Front => write!(f, "front"),
            End::Back => write!(f, "back"),
        }
    }
}

pub(crate) struct DequeState<T> {
    /// Growable ring buffer; O(1) amortized at both ends
    elements: VecDeque<T>,
    /// Maximum size, 0 = unbounded
    capacity: usize,
    on_full: Option<DequeCallback>,
    on_empty: Option<DequeCallback>,
}

impl<T> DequeState<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            elements: VecDeque::new(),
            capacity,
            on_full: None,
            on_empty: None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.capacity > 0 && self.elements.len() >= self.capacity
    }

    /// Replace the capacity, returning the previous value
    pub(crate) fn replace_capacity(&mut self, capacity: usize) -> usize {
        std::mem::replace(&mut self.capacity, capacity)
    }

    pub(crate) fn set_callback(&mut self, edge: Edge, callback: Option<DequeCallback>) {
        match edge {
            Edge::Full => self.on_full = callback,
            Edge::Empty => self.on_empty = callback,
        }
    }

    pub(crate) fn has_callback(&self, edge: Edge) -> bool {
        match edge {
            Edge::Full => self.on_full.is_some(),
            Edge::Empty => self.on_empty.is_some(),
        }
    }

    /// Insert at `end`. The caller has already waited out fullness.
    ///
    /// Returns the `on_full` callback when this insertion filled the dequeue.
    pub(crate) fn insert(&mut self, item: T, end: End) -> Option<DequeCallback> {
        debug_assert!(!self.is_full());
        match end {
            End::Front => self.elements.push_front(item),
            End::Back => self.elements.push_back(item),
        }
        if self.is_full() {
            self.on_full.clone()
        } else {
            None
        }
    }

    /// Remove from `end`, or `None` when empty.
    ///
    /// The callback half is the `on_empty` callback when this removal emptied
    /// the dequeue.
    pub(crate) fn remove(&mut self, end: End) -> Option<(T, Option<DequeCallback>)> {
        let item = match end {
            End::Front => self.elements.pop_front(),
            End::Back => self.elements.pop_back(),
        }?;
        let on_empty = if self.elements.is_empty() {
            self.on_empty.clone()
        } else {
            None
        };
        Some((item, on_empty))
    }

    pub(crate) fn get(&self, end: End) -> Option<&T> {
        match end {
            End::Front => self.elements.front(),
            End::Back => self.elements.back(),
        }
    }
}
