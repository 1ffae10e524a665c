//! Singly linked list for sda.
//!
//! Positions are 0-based. Positional operations clamp instead of failing:
//! inserting past the end appends, removing past the end removes the last
//! node. This is the list the stack, hash table buckets and adjacency-list
//! graph are built on.

use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

/// A node in the list.
struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list owning its nodes.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts `value` so that it ends up at position `n`.
    ///
    /// When `n >= len` the value is appended.
    pub fn insert_nth(&mut self, n: usize, value: T) {
        let n = n.min(self.len);
        let link = self.link_at(n);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Removes and returns the value at position `n`.
    ///
    /// When `n >= len - 1` the last node is removed. Returns `None` only
    /// when the list is empty.
    pub fn remove_nth(&mut self, n: usize) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let n = n.min(self.len - 1);
        let link = self.link_at(n);
        let node = link.take()?;
        let Node { value, next } = *node;
        *link = next;
        self.len -= 1;
        Some(value)
    }

    /// Inserts a value at the front.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Appends a value at the back.
    pub fn push_back(&mut self, value: T) {
        self.insert_nth(self.len, value);
    }

    /// Removes and returns the front value.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Returns a reference to the front value.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the front value.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the last value.
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns a reference to the value at position `n`, if any.
    pub fn get(&self, n: usize) -> Option<&T> {
        self.iter().nth(n)
    }

    /// Returns a mutable reference to the value at position `n`, if any.
    pub fn get_mut(&mut self, n: usize) -> Option<&mut T> {
        self.iter_mut().nth(n)
    }

    /// Returns the position of the first value matching `pred`.
    pub fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }

    /// Removes and returns the first value matching `pred`.
    pub fn remove_first<P>(&mut self, pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let n = self.position(pred)?;
        self.remove_nth(n)
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Returns a mutable iterator from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    /// Walks to the link that holds position `n` (`n <= len`).
    fn link_at(&mut self, n: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..n {
            let Some(node) = link else { break };
            link = &mut node.next;
        }
        link
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// Values separated by a single space.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
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

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = self.link_at(self.len);
        let mut added = 0;
        for value in iter {
            *link = Some(Box::new(Node { value, next: None }));
            added += 1;
            let Some(node) = link else { break };
            link = &mut node.next;
        }
        self.len += added;
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator over a [`LinkedList`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator over a [`LinkedList`].
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
