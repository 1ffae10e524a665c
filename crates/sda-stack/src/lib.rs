//! Stack data structure for sda.
//!
//! [`Stack`] is a LIFO wrapper over [`sda_list::LinkedList`] whose top is the
//! list front, so push, pop and peek never walk the list.

use sda_list::LinkedList;

/// A stack backed by a singly linked list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty Stack.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Pushes an element onto the stack.
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes and returns the top element from the stack.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Returns a reference to the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns a mutable reference to the top element without removing it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    /// Returns true if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of elements in the stack.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Clears all elements from the stack.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator from the top of the stack to the bottom.
    pub fn iter(&self) -> sda_list::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The last element of the vector ends up on top.
impl<T> From<Vec<T>> for Stack<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut stack = Stack::new();
        for item in vec {
            stack.push(item);
        }
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// Top to bottom.
impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = sda_list::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = sda_list::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A character and the length of the run it currently closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    ch: char,
    count: usize,
}

/// Repeatedly deletes runs of `k` equal adjacent characters from `s`.
///
/// Deleting a run can join its neighbours into a new run, which is deleted in
/// turn when it reaches `k`. A `k` of 0 or 1 leaves `s` unchanged.
///
/// ```
/// use sda_stack::remove_adjacent_duplicates;
///
/// assert_eq!(remove_adjacent_duplicates("deeedbbcccbdaa", 3), "aa");
/// assert_eq!(remove_adjacent_duplicates("abcd", 2), "abcd");
/// ```
pub fn remove_adjacent_duplicates(s: &str, k: usize) -> String {
    if k <= 1 {
        return s.to_string();
    }

    let mut runs: Stack<Run> = Stack::new();
    for ch in s.chars() {
        match runs.peek_mut() {
            Some(top) if top.ch == ch => {
                top.count += 1;
                if top.count == k {
                    runs.pop();
                }
            }
            _ => runs.push(Run { ch, count: 1 }),
        }
    }

    // The stack yields the last run first.
    let mut pieces: Vec<Run> = runs.into_iter().collect();
    pieces.reverse();
    pieces
        .into_iter()
        .flat_map(|run| std::iter::repeat_n(run.ch, run.count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_new() {
        let stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stack_peek() {
        let mut stack = Stack::new();
        stack.push(42);
        stack.push(99);

        assert_eq!(stack.peek(), Some(&99));
        assert_eq!(stack.len(), 2);

        if let Some(val) = stack.peek_mut() {
            *val = 100;
        }
        assert_eq!(stack.peek(), Some(&100));
    }

    #[test]
    fn test_stack_pop_empty() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_stack_clear() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.clear();

        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_stack_from_vec() {
        let mut stack = Stack::from(vec![1, 2, 3]);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(3));
    }

    #[test]
    fn test_stack_iter_top_to_bottom() {
        let stack = Stack::from(vec!['a', 'b', 'c']);
        let items: Vec<char> = stack.iter().copied().collect();
        assert_eq!(items, vec!['c', 'b', 'a']);
    }

    #[test]
    fn test_remove_duplicates_cascades() {
        assert_eq!(remove_adjacent_duplicates("deeedbbcccbdaa", 3), "aa");
        assert_eq!(remove_adjacent_duplicates("pbbcggttciiippooaais", 2), "ps");
    }

    #[test]
    fn test_remove_duplicates_keeps_short_runs() {
        assert_eq!(remove_adjacent_duplicates("aabbcc", 3), "aabbcc");
    }

    #[test]
    fn test_remove_duplicates_trivial_k() {
        assert_eq!(remove_adjacent_duplicates("aaa", 0), "aaa");
        assert_eq!(remove_adjacent_duplicates("aaa", 1), "aaa");
    }

    #[test]
    fn test_remove_duplicates_longer_run() {
        // Five 'a's with k = 2: two pairs go, one 'a' stays.
        assert_eq!(remove_adjacent_duplicates("aaaaa", 2), "a");
        assert_eq!(remove_adjacent_duplicates("", 2), "");
    }
}
