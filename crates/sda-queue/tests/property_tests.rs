//! Property tests for sda-queue
//!
//! Replays enqueue/dequeue sequences against a capacity-checked `VecDeque`.

use proptest::prelude::*;
use sda_queue::{BoundedQueue, QueueError};
use std::collections::VecDeque;

// ============================================================================
// Model Equivalence Tests
// ============================================================================

proptest! {
    /// Enqueue (`Some`) and dequeue (`None`) agree with VecDeque bounded at the same capacity.
    #[test]
    fn prop_matches_vecdeque(
        capacity in 1usize..10,
        ops in prop::collection::vec(prop::option::of(any::<i16>()), 0..100)
    ) {
        let mut queue = BoundedQueue::with_capacity(capacity);
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Some(v) => {
                    let result = queue.enqueue(v);
                    if model.len() == capacity {
                        prop_assert_eq!(result, Err(QueueError::Full { capacity }));
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        model.push_back(v);
                    }
                }
                None => prop_assert_eq!(queue.dequeue(), model.pop_front()),
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.front(), model.front());
        }

        prop_assert_eq!(queue.iter().copied().collect::<Vec<_>>(), Vec::from(model));
    }

    /// A queue never reports more items than its capacity.
    #[test]
    fn prop_len_bounded_by_capacity(capacity in 0usize..8, items in prop::collection::vec(any::<u8>(), 0..20)) {
        let mut queue = BoundedQueue::with_capacity(capacity);
        for item in items {
            let _ = queue.enqueue(item);
            prop_assert!(queue.len() <= queue.capacity());
        }
        prop_assert_eq!(queue.is_full(), queue.len() == capacity);
    }
}
