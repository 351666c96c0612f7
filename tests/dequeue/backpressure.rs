//! Flow control through callbacks and capacity changes

use crate::common::counting_callback;
use blocking_dequeue::dequeue::api::{BlockingDequeue, DequeError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_full_and_empty_signals_bracket_a_burst() {
    let (full_count, on_full) = counting_callback();
    let (empty_count, on_empty) = counting_callback();
    let dequeue = BlockingDequeue::with_callbacks(on_full, on_empty);
    dequeue.set_capacity(5).unwrap();

    for i in 0..5 {
        dequeue.push_back(i);
    }
    for _ in 0..5 {
        dequeue.pop_front();
    }

    assert_eq!(full_count.load(Ordering::SeqCst), 1);
    assert_eq!(empty_count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_on_full_can_grow_capacity() {
    // A callback that widens the bound keeps producers from stalling
    let dequeue: Arc<BlockingDequeue<u32>> = Arc::new(BlockingDequeue::with_capacity(2));
    {
        let weak = Arc::downgrade(&dequeue);
        dequeue.set_on_full(move || {
            if let Some(dequeue) = weak.upgrade() {
                let grown = dequeue.capacity() * 2;
                dequeue.set_capacity(grown as i64).unwrap();
            }
        });
    }

    for i in 0..20 {
        dequeue.push_back(i);
    }

    assert_eq!(dequeue.size(), 20);
    assert_eq!(dequeue.capacity(), 32);
}

#[test]
fn test_widening_releases_blocked_producer_without_pop() {
    let dequeue = Arc::new(BlockingDequeue::with_capacity(1));
    dequeue.push_back(1);

    let (tx, rx) = mpsc::channel();
    {
        let dequeue = Arc::clone(&dequeue);
        thread::spawn(move || {
            dequeue.push_back(2);
            tx.send(()).unwrap();
        });
    }
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

    dequeue.set_capacity(2).unwrap();
    rx.recv_timeout(Duration::from_secs(5)).unwrap();

    assert_eq!(dequeue.pop_front(), 1);
    assert_eq!(dequeue.pop_front(), 2);
}

#[test]
fn test_rejected_shrink_leaves_producers_blocked() {
    let dequeue = Arc::new(BlockingDequeue::with_capacity(3));
    for i in 0..3 {
        dequeue.push_back(i);
    }

    let done = Arc::new(AtomicBool::new(false));
    let producer = {
        let dequeue = Arc::clone(&dequeue);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            dequeue.push_back(3);
            done.store(true, Ordering::SeqCst);
        })
    };

    assert_eq!(
        dequeue.set_capacity(2),
        Err(DequeError::CapacityBelowSize {
            requested: 2,
            size: 3
        })
    );
    thread::sleep(Duration::from_millis(100));
    assert!(!done.load(Ordering::SeqCst));
    assert_eq!(dequeue.capacity(), 3);

    dequeue.pop_front();
    producer.join().unwrap();
    assert!(done.load(Ordering::SeqCst));
    assert_eq!(dequeue.size(), 3);
}
