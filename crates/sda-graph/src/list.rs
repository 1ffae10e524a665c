use crate::{Adjacency, GraphError, check_node};
use sda_list::LinkedList;
use std::fmt;

/// A directed graph stored as one neighbour list per node.
///
/// Neighbours keep insertion order and repeated edges are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListGraph {
    neighbors: Vec<LinkedList<usize>>,
}

impl ListGraph {
    /// Creates a graph with `nodes` nodes and no edges.
    pub fn new(nodes: usize) -> Self {
        Self {
            neighbors: (0..nodes).map(|_| LinkedList::new()).collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(LinkedList::len).sum()
    }

    /// Appends `dst` to the neighbour list of `src`.
    pub fn add_edge(&mut self, src: usize, dst: usize) -> Result<(), GraphError> {
        check_node(src, self.node_count())?;
        check_node(dst, self.node_count())?;
        self.neighbors[src].push_back(dst);
        Ok(())
    }

    /// Adds the edge in both directions.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize) -> Result<(), GraphError> {
        self.add_edge(a, b)?;
        self.add_edge(b, a)
    }

    /// Removes the first `src -> dst` edge, returning whether one existed.
    pub fn remove_edge(&mut self, src: usize, dst: usize) -> Result<bool, GraphError> {
        check_node(src, self.node_count())?;
        check_node(dst, self.node_count())?;
        Ok(self.neighbors[src].remove_first(|&n| n == dst).is_some())
    }

    pub fn has_edge(&self, src: usize, dst: usize) -> Result<bool, GraphError> {
        check_node(src, self.node_count())?;
        check_node(dst, self.node_count())?;
        Ok(self.neighbors[src].iter().any(|&n| n == dst))
    }

    /// Out-neighbours of `node` in insertion order.
    pub fn neighbors(&self, node: usize) -> Result<sda_list::Iter<'_, usize>, GraphError> {
        check_node(node, self.node_count())?;
        Ok(self.neighbors[node].iter())
    }
}

impl Adjacency for ListGraph {
    fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    fn adjacent(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors[node].iter().copied()
    }
}

/// One `i: n1 n2 ...` line per node.
impl fmt::Display for ListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, list) in self.neighbors.iter().enumerate() {
            if list.is_empty() {
                writeln!(f, "{node}:")?;
            } else {
                writeln!(f, "{node}: {list}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut g = ListGraph::new(4);
        g.add_edge(0, 3).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        let ns: Vec<usize> = g.neighbors(0).unwrap().copied().collect();
        assert_eq!(ns, vec![3, 1, 2]);
    }

    #[test]
    fn test_duplicates_and_remove_first() {
        let mut g = ListGraph::new(2);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 1).unwrap();
        assert_eq!(g.edge_count(), 2);

        assert!(g.remove_edge(0, 1).unwrap());
        assert!(g.has_edge(0, 1).unwrap());
        assert!(g.remove_edge(0, 1).unwrap());
        assert!(!g.remove_edge(0, 1).unwrap());
    }

    #[test]
    fn test_undirected() {
        let mut g = ListGraph::new(3);
        g.add_undirected_edge(0, 2).unwrap();
        assert!(g.has_edge(0, 2).unwrap());
        assert!(g.has_edge(2, 0).unwrap());
        assert!(!g.has_edge(0, 1).unwrap());
    }

    #[test]
    fn test_out_of_range() {
        let mut g = ListGraph::new(1);
        assert_eq!(
            g.add_edge(0, 1),
            Err(GraphError::NodeOutOfRange { node: 1, nodes: 1 })
        );
        assert!(g.has_edge(4, 0).is_err());
        assert!(g.neighbors(1).is_err());
    }

    #[test]
    fn test_display() {
        let mut g = ListGraph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(2, 0).unwrap();
        assert_eq!(g.to_string(), "0: 1 2\n1:\n2: 0\n");
    }
}
