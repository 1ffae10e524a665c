//! Trie data structure implementation for sda.
//!
//! Keys are strings over a fixed [`Alphabet`]; each node holds one child slot
//! per symbol. Removing a key prunes every node that is left with neither a
//! value nor children, so the node count always reflects the live keys.

use std::fmt;

/// Trie operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    EmptyKey,
    InvalidCharacter { ch: char },
    EmptyAlphabet,
    DuplicateSymbol { ch: char },
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::EmptyKey => write!(f, "trie keys must not be empty"),
            TrieError::InvalidCharacter { ch } => {
                write!(f, "character {ch:?} is not in the trie alphabet")
            }
            TrieError::EmptyAlphabet => write!(f, "alphabet must contain at least one symbol"),
            TrieError::DuplicateSymbol { ch } => {
                write!(f, "alphabet lists {ch:?} more than once")
            }
        }
    }
}

impl std::error::Error for TrieError {}

/// The ordered set of symbols a trie accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`, in order.
    pub fn new(symbols: &str) -> Result<Self, TrieError> {
        let mut seen: Vec<char> = Vec::new();
        for ch in symbols.chars() {
            if seen.contains(&ch) {
                return Err(TrieError::DuplicateSymbol { ch });
            }
            seen.push(ch);
        }
        if seen.is_empty() {
            return Err(TrieError::EmptyAlphabet);
        }
        Ok(Self { symbols: seen })
    }

    /// `a` through `z`.
    pub fn lowercase() -> Self {
        Self {
            symbols: ('a'..='z').collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Child slot of `ch`, if it belongs to the alphabet.
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == ch)
    }

    fn path(&self, key: &str) -> Result<Vec<usize>, TrieError> {
        key.chars()
            .map(|ch| self.index_of(ch).ok_or(TrieError::InvalidCharacter { ch }))
            .collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

/// A node in the Trie
struct TrieNode<V> {
    children: Vec<Option<Box<TrieNode<V>>>>,
    n_children: usize,
    value: Option<V>,
}

impl<V> TrieNode<V> {
    fn new(width: usize) -> Self {
        Self {
            children: (0..width).map(|_| None).collect(),
            n_children: 0,
            value: None,
        }
    }

    fn take_children(&mut self) -> impl Iterator<Item = Box<TrieNode<V>>> + '_ {
        self.n_children = 0;
        self.children.iter_mut().filter_map(Option::take)
    }
}

/// Keys can be arbitrarily long, so subtrees are freed from a worklist
/// rather than by recursing once per symbol.
impl<V> Drop for TrieNode<V> {
    fn drop(&mut self) {
        let mut pending: Vec<_> = self.take_children().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children());
        }
    }
}

/// A prefix tree mapping keys over an [`Alphabet`] to values.
pub struct Trie<V> {
    alphabet: Alphabet,
    root: TrieNode<V>,
    len: usize,
    nodes: usize,
}

impl<V> Trie<V> {
    /// Creates an empty trie over `a..=z`.
    pub fn new() -> Self {
        Self::with_alphabet(Alphabet::lowercase())
    }

    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        let root = TrieNode::new(alphabet.len());
        Self {
            alphabet,
            root,
            len: 0,
            nodes: 1,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, counting the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// The key is validated before any node is created, so a rejected key
    /// leaves the trie untouched.
    pub fn insert(&mut self, key: &str, value: V) -> Result<Option<V>, TrieError> {
        if key.is_empty() {
            return Err(TrieError::EmptyKey);
        }
        let path = self.alphabet.path(key)?;
        let width = self.alphabet.len();

        let mut current = &mut self.root;
        for slot in path {
            if current.children[slot].is_none() {
                current.n_children += 1;
                self.nodes += 1;
            }
            current = current.children[slot].get_or_insert_with(|| Box::new(TrieNode::new(width)));
        }

        let previous = current.value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        Ok(previous)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        if key.is_empty() {
            return None;
        }
        self.find_node(key)?.value.as_ref()
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        if key.is_empty() {
            return None;
        }
        let path = self.alphabet.path(key).ok()?;
        let mut current = &mut self.root;
        for slot in path {
            current = current.children[slot].as_deref_mut()?;
        }
        current.value.as_mut()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if some key starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find_node(prefix)
            .is_some_and(|node| node.value.is_some() || node.n_children > 0)
    }

    /// All keys starting with `prefix`, in alphabet order.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        if let Some(node) = self.find_node(prefix) {
            self.collect_keys(node, prefix, &mut results);
        }
        results
    }

    /// All keys in alphabet order.
    pub fn keys(&self) -> Vec<String> {
        self.keys_with_prefix("")
    }

    /// Removes `key`, pruning the branch nodes it no longer needs.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        if key.is_empty() {
            return None;
        }
        let path = self.alphabet.path(key).ok()?;

        // Deepest node on the path that survives if the key's own branch goes.
        let mut keep = 0;
        let mut current = &self.root;
        for (depth, &slot) in path.iter().enumerate() {
            if current.value.is_some() || current.n_children > 1 {
                keep = depth;
            }
            current = current.children[slot].as_deref()?;
        }
        current.value.as_ref()?;
        let prune = current.n_children == 0;

        let mut parent = &mut self.root;
        for &slot in &path[..keep] {
            parent = parent.children[slot].as_deref_mut()?;
        }
        let removed = if prune {
            let mut branch = parent.children[path[keep]].take()?;
            parent.n_children -= 1;
            self.nodes -= path.len() - keep;
            let mut node = &mut *branch;
            for &slot in &path[keep + 1..] {
                node = node.children[slot].as_deref_mut()?;
            }
            node.value.take()
        } else {
            let mut node = parent;
            for &slot in &path[keep..] {
                node = node.children[slot].as_deref_mut()?;
            }
            node.value.take()
        };
        self.len -= 1;
        removed
    }

    /// Removes every key, keeping the alphabet.
    pub fn clear(&mut self) {
        self.root = TrieNode::new(self.alphabet.len());
        self.len = 0;
        self.nodes = 1;
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode<V>> {
        let mut current = &self.root;
        for ch in prefix.chars() {
            let slot = self.alphabet.index_of(ch)?;
            current = current.children[slot].as_deref()?;
        }
        Some(current)
    }

    fn collect_keys(&self, start: &TrieNode<V>, prefix: &str, results: &mut Vec<String>) {
        let mut suffix: Vec<char> = Vec::new();
        let mut pending: Vec<(&TrieNode<V>, usize, Option<char>)> = vec![(start, 0, None)];
        while let Some((node, depth, symbol)) = pending.pop() {
            suffix.truncate(depth);
            suffix.extend(symbol);
            if node.value.is_some() {
                results.push(prefix.chars().chain(suffix.iter().copied()).collect());
            }
            // Reversed so the lowest slot is popped first.
            for (slot, child) in node.children.iter().enumerate().rev() {
                if let Some(child) = child {
                    pending.push((child, suffix.len(), Some(self.alphabet.symbols[slot])));
                }
            }
        }
    }
}

impl<V> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("alphabet", &self.alphabet)
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}
