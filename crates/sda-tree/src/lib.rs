//! Binary tree for sda.
//!
//! [`BinaryTree`] fills its nodes in level order: every insert takes the
//! first free child slot in a breadth-first scan, so the tree is always
//! complete and its height grows logarithmically.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode<T> {
    pub value: T,
    pub left: Option<Box<BinaryNode<T>>>,
    pub right: Option<Box<BinaryNode<T>>>,
}

impl<T> BinaryNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A complete binary tree filled left to right, level by level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTree<T> {
    root: Option<Box<BinaryNode<T>>>,
    len: usize,
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> Option<&BinaryNode<T>> {
        self.root.as_deref()
    }

    /// Inserts `value` into the first free slot in level order.
    ///
    /// Numbering nodes 1, 2, 3, ... in level order, the bits of the new
    /// node's number after the leading one spell its path from the root
    /// (`0` = left, `1` = right).
    pub fn insert(&mut self, value: T) {
        let number = self.len + 1;
        let steps = usize::BITS - 1 - number.leading_zeros();

        let mut link = &mut self.root;
        for shift in (0..steps).rev() {
            let Some(node) = link else { break };
            link = if (number >> shift) & 1 == 0 {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(BinaryNode::new(value)));
        self.len += 1;
    }

    pub fn preorder(&self) -> Vec<&T> {
        fn walk<'a, T>(node: Option<&'a BinaryNode<T>>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                out.push(&n.value);
                walk(n.left.as_deref(), out);
                walk(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root(), &mut out);
        out
    }

    pub fn inorder(&self) -> Vec<&T> {
        fn walk<'a, T>(node: Option<&'a BinaryNode<T>>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                walk(n.left.as_deref(), out);
                out.push(&n.value);
                walk(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root(), &mut out);
        out
    }

    pub fn postorder(&self) -> Vec<&T> {
        fn walk<'a, T>(node: Option<&'a BinaryNode<T>>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                walk(n.left.as_deref(), out);
                walk(n.right.as_deref(), out);
                out.push(&n.value);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root(), &mut out);
        out
    }

    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&BinaryNode<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push(&node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }

    /// Number of edges on the longest root-to-leaf path, `None` when empty.
    pub fn height(&self) -> Option<usize> {
        fn edges<T>(node: &BinaryNode<T>) -> usize {
            let left = node.left.as_deref().map_or(0, |n| edges(n) + 1);
            let right = node.right.as_deref().map_or(0, |n| edges(n) + 1);
            left.max(right)
        }
        self.root().map(edges)
    }
}

impl<T: Copy + Into<i64>> BinaryTree<T> {
    /// Returns true if the values on some downward path from the root sum to
    /// `target`. The path may stop at any node, not only at a leaf.
    pub fn has_path_sum(&self, target: i64) -> bool {
        // Sums are kept in i128; a path of i64 values cannot overflow it.
        fn search<T: Copy + Into<i64>>(node: &BinaryNode<T>, remaining: i128) -> bool {
            let remaining = remaining - i128::from(node.value.into());
            remaining == 0
                || [node.left.as_deref(), node.right.as_deref()]
                    .into_iter()
                    .flatten()
                    .any(|child| search(child, remaining))
        }
        self.root()
            .is_some_and(|root| search(root, i128::from(target)))
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_tree_empty() {
        let t: BinaryTree<i32> = BinaryTree::new();
        assert!(t.is_empty());
        assert_eq!(t.height(), None);
        assert!(t.preorder().is_empty());
    }

    #[test]
    fn test_insert_fills_level_order() {
        let t: BinaryTree<i32> = (1..=6).collect();
        let root = t.root().unwrap();
        assert_eq!(root.value, 1);
        assert_eq!(root.left.as_ref().unwrap().value, 2);
        assert_eq!(root.right.as_ref().unwrap().value, 3);
        let left = root.left.as_ref().unwrap();
        assert_eq!(left.left.as_ref().unwrap().value, 4);
        assert_eq!(left.right.as_ref().unwrap().value, 5);
        assert_eq!(root.right.as_ref().unwrap().left.as_ref().unwrap().value, 6);
        assert!(root.right.as_ref().unwrap().right.is_none());
    }

    #[test]
    fn test_traversals() {
        let t: BinaryTree<i32> = (1..=5).collect();
        assert_eq!(t.preorder(), vec![&1, &2, &4, &5, &3]);
        assert_eq!(t.inorder(), vec![&4, &2, &5, &1, &3]);
        assert_eq!(t.postorder(), vec![&4, &5, &2, &3, &1]);
        assert_eq!(t.level_order(), vec![&1, &2, &3, &4, &5]);
    }

    #[test]
    fn test_height_counts_edges() {
        let mut t = BinaryTree::new();
        t.insert(1);
        assert_eq!(t.height(), Some(0));
        t.insert(2);
        assert_eq!(t.height(), Some(1));
        t.insert(3);
        assert_eq!(t.height(), Some(1));
        t.insert(4);
        assert_eq!(t.height(), Some(2));
    }

    #[test]
    fn test_path_sum_stops_at_any_node() {
        // 5 -> (4, 8), 4 -> (11, 13)
        let t: BinaryTree<i32> = vec![5, 4, 8, 11, 13].into_iter().collect();
        for target in [5, 9, 13, 20, 22] {
            assert!(t.has_path_sum(target), "{target}");
        }
        assert!(!t.root().unwrap().is_leaf());
        // 4 + 11 does not start at the root.
        assert!(!t.has_path_sum(15));
        assert!(!t.has_path_sum(0));
        assert!(!t.has_path_sum(17));
    }

    #[test]
    fn test_path_sum_extreme_values() {
        let t: BinaryTree<i64> = vec![i64::MAX, -1].into_iter().collect();
        assert!(!t.has_path_sum(i64::MIN));
        assert!(t.has_path_sum(i64::MAX - 1));

        let t: BinaryTree<i64> = vec![i64::MAX, i64::MAX, 2].into_iter().collect();
        assert!(!t.has_path_sum(0));
        assert!(!t.has_path_sum(-2));

        let t: BinaryTree<i64> = vec![i64::MIN, i64::MAX].into_iter().collect();
        assert!(t.has_path_sum(-1));
        assert!(t.has_path_sum(i64::MIN));
    }

    #[test]
    fn test_path_sum_empty_tree() {
        let t: BinaryTree<i32> = BinaryTree::new();
        assert!(!t.has_path_sum(0));
    }

    #[test]
    fn test_path_sum_negative_values() {
        let t: BinaryTree<i32> = vec![-2, -3].into_iter().collect();
        assert!(t.has_path_sum(-5));
        assert!(t.has_path_sum(-2));
        assert!(!t.has_path_sum(-3));
    }
}
