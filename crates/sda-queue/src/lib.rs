//! Bounded FIFO queue for sda.
//!
//! [`BoundedQueue`] stores its items in a fixed ring of slots with separate
//! read and write cursors. Enqueueing into a full queue is an error rather
//! than an overwrite.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Queue operation errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueueError {
    Full { capacity: usize },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Full { capacity } => {
                write!(f, "queue is at maximum capacity ({capacity})")
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// A fixed-capacity FIFO queue over a circular buffer.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    slots: Vec<Option<T>>,
    read: usize,
    write: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue that holds at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            read: 0,
            write: 0,
            len: 0,
        }
    }

    /// Maximum number of items.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if another enqueue would fail.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Appends `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full {
                capacity: self.capacity(),
            });
        }
        self.slots[self.write] = Some(value);
        self.write = (self.write + 1) % self.capacity();
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front item.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.read].take();
        self.read = (self.read + 1) % self.capacity();
        self.len -= 1;
        item
    }

    /// Returns the front item without removing it.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.read].as_ref()
    }

    /// Drops every queued item and rewinds both cursors.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.read = 0;
        self.write = 0;
        self.len = 0;
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.len).filter_map(move |offset| self.slots[(self.read + offset) % capacity].as_ref())
    }
}

impl<T: fmt::Display> fmt::Display for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
