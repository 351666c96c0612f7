//! Mixed FIFO/LIFO access tests

use blocking_dequeue::dequeue::api::BlockingDequeue;
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn test_owner_lifo_thief_fifo() {
    // The owner works on its newest item while a thief takes the oldest
    let dequeue = Arc::new(BlockingDequeue::new());
    for task in 0..100 {
        dequeue.push_front(task);
    }

    let stolen = Arc::new(Mutex::new(Vec::new()));
    let thief = {
        let dequeue = Arc::clone(&dequeue);
        let stolen = Arc::clone(&stolen);
        thread::spawn(move || {
            while let Some(task) = dequeue.try_pop_back() {
                stolen.lock().unwrap().push(task);
            }
        })
    };

    let mut owned = Vec::new();
    while let Some(task) = dequeue.try_pop_front() {
        owned.push(task);
    }
    thief.join().unwrap();

    let stolen = stolen.lock().unwrap();
    assert!(owned.windows(2).all(|pair| pair[0] > pair[1]), "owner is LIFO");
    assert!(stolen.windows(2).all(|pair| pair[0] < pair[1]), "thief is FIFO");

    let mut all: Vec<i32> = owned.iter().chain(stolen.iter()).copied().collect();
    all.sort_unstable();
    assert_eq!(all, (0..100).collect::<Vec<_>>());
}

#[test]
fn test_urgent_items_jump_the_queue() {
    let dequeue = BlockingDequeue::new();
    dequeue.push_back("normal-1");
    dequeue.push_back("normal-2");
    dequeue.push_front("urgent");

    assert_eq!(dequeue.peek_front(), "urgent");
    assert_eq!(dequeue.pop_front(), "urgent");
    assert_eq!(dequeue.pop_front(), "normal-1");
    assert_eq!(dequeue.pop_front(), "normal-2");
}
