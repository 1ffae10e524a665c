//! Circular doubly linked list for sda.
//!
//! The tail links forward to the head and the head links back to the tail.
//! Nodes live in a dense arena and link to each other by slot index; a
//! removal moves the last slot into the hole and patches its neighbours.
//!
//! Reads by position wrap around (`get_nth(len)` is the head again), while
//! inserts and removals clamp to the tail.

use std::fmt;
use std::iter::FusedIterator;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: usize,
    next: usize,
}

/// A circular doubly linked list.
#[derive(Clone)]
pub struct CircularList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
}

impl<T> CircularList<T> {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the value at position `n`, wrapping past the tail back to
    /// the head. `None` only when the list is empty.
    pub fn get_nth(&self, n: usize) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let slot = self.slot_at(n % self.len())?;
        Some(&self.nodes[slot].value)
    }

    /// Returns a mutable reference to the value at position `n`, wrapping
    /// like [`CircularList::get_nth`].
    pub fn get_nth_mut(&mut self, n: usize) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let slot = self.slot_at(n % self.len())?;
        Some(&mut self.nodes[slot].value)
    }

    /// Returns the head value.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|h| &self.nodes[h].value)
    }

    /// Returns the tail value.
    pub fn back(&self) -> Option<&T> {
        self.head.map(|h| &self.nodes[self.nodes[h].prev].value)
    }

    /// Inserts `value` at position `n`; `n >= len` appends at the tail.
    pub fn insert_nth(&mut self, n: usize, value: T) {
        let slot = self.nodes.len();
        let Some(head) = self.head else {
            self.nodes.push(Node {
                value,
                prev: slot,
                next: slot,
            });
            self.head = Some(slot);
            return;
        };

        let n = n.min(self.len());
        let succ = if n == self.len() {
            head
        } else {
            self.slot_at(n).unwrap_or(head)
        };
        let pred = self.nodes[succ].prev;

        self.nodes.push(Node {
            value,
            prev: pred,
            next: succ,
        });
        self.nodes[pred].next = slot;
        self.nodes[succ].prev = slot;

        if n == 0 {
            self.head = Some(slot);
        }
    }

    /// Appends a value at the tail.
    pub fn push_back(&mut self, value: T) {
        self.insert_nth(self.len(), value);
    }

    /// Inserts a value at the head.
    pub fn push_front(&mut self, value: T) {
        self.insert_nth(0, value);
    }

    /// Removes and returns the value at position `n`; `n >= len` removes
    /// the tail. `None` only when the list is empty.
    pub fn remove_nth(&mut self, n: usize) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let n = n.min(self.len() - 1);
        let slot = self.slot_at(n)?;
        Some(self.unlink(slot))
    }

    /// Removes and returns the head value.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove_nth(0)
    }

    /// Removes and returns the tail value.
    pub fn pop_back(&mut self) -> Option<T> {
        self.remove_nth(self.len())
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }

    /// Iterates head to tail; `.rev()` walks tail to head.
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = match self.head {
            Some(h) => (h, self.nodes[h].prev),
            None => (0, 0),
        };
        Iter {
            list: self,
            front,
            back,
            remaining: self.len(),
        }
    }

    /// Splits into the values at even positions (0, 2, ...) and the values
    /// at odd positions, both in list order.
    pub fn split_parity(&self) -> (CircularList<T>, CircularList<T>)
    where
        T: Clone,
    {
        let mut even = CircularList::new();
        let mut odd = CircularList::new();
        for (i, value) in self.iter().enumerate() {
            if i % 2 == 0 {
                even.push_back(value.clone());
            } else {
                odd.push_back(value.clone());
            }
        }
        (even, odd)
    }

    /// Slot holding position `pos` (`pos < len`), walking from whichever
    /// end of the ring is closer.
    fn slot_at(&self, pos: usize) -> Option<usize> {
        let mut slot = self.head?;
        let len = self.len();
        if pos <= len / 2 {
            for _ in 0..pos {
                slot = self.nodes[slot].next;
            }
        } else {
            for _ in pos..len {
                slot = self.nodes[slot].prev;
            }
        }
        Some(slot)
    }

    fn unlink(&mut self, slot: usize) -> T {
        if self.nodes.len() == 1 {
            self.head = None;
            let node = self.nodes.swap_remove(slot);
            return node.value;
        }

        let Node { prev, next, .. } = self.nodes[slot];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        if self.head == Some(slot) {
            self.head = Some(next);
        }

        let last = self.nodes.len() - 1;
        let removed = self.nodes.swap_remove(slot);
        if slot != last {
            let moved = &mut self.nodes[slot];
            if moved.prev == last {
                moved.prev = slot;
            }
            if moved.next == last {
                moved.next = slot;
            }
            let (mp, mn) = (moved.prev, moved.next);
            self.nodes[mp].next = slot;
            self.nodes[mn].prev = slot;
            if self.head == Some(last) {
                self.head = Some(slot);
            }
        }
        removed.value
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

/// Values head to tail, separated by a single space.
impl<T: fmt::Display> fmt::Display for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

/// Double-ended iterator over a [`CircularList`].
pub struct Iter<'a, T> {
    list: &'a CircularList<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
