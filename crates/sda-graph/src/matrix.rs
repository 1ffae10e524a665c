use crate::{Adjacency, GraphError, check_node};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed graph stored as an `n x n` matrix of optional edge weights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixGraph {
    /// Number of nodes
    nodes: usize,
    /// Edge weights in row-major order, `None` where there is no edge
    weights: Vec<Option<u32>>,
}

impl MatrixGraph {
    /// Creates a graph with `nodes` nodes and no edges.
    pub fn new(nodes: usize) -> Self {
        Self {
            nodes,
            weights: vec![None; nodes * nodes],
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|w| w.is_some()).count()
    }

    /// Adds a unit-weight edge from `src` to `dst`.
    pub fn add_edge(&mut self, src: usize, dst: usize) -> Result<(), GraphError> {
        self.add_weighted_edge(src, dst, 1)
    }

    /// Adds (or reweights) the edge from `src` to `dst`.
    pub fn add_weighted_edge(&mut self, src: usize, dst: usize, weight: u32) -> Result<(), GraphError> {
        let idx = self.index(src, dst)?;
        self.weights[idx] = Some(weight);
        Ok(())
    }

    /// Removes the edge from `src` to `dst`, returning whether it existed.
    pub fn remove_edge(&mut self, src: usize, dst: usize) -> Result<bool, GraphError> {
        let idx = self.index(src, dst)?;
        Ok(self.weights[idx].take().is_some())
    }

    /// Returns true if there is an edge from `src` to `dst`.
    pub fn has_edge(&self, src: usize, dst: usize) -> Result<bool, GraphError> {
        Ok(self.weight(src, dst)?.is_some())
    }

    /// Weight of the edge from `src` to `dst`, if any.
    pub fn weight(&self, src: usize, dst: usize) -> Result<Option<u32>, GraphError> {
        let idx = self.index(src, dst)?;
        Ok(self.weights[idx])
    }

    /// Out-neighbours of `node` in ascending order.
    pub fn neighbors(&self, node: usize) -> Result<Vec<usize>, GraphError> {
        check_node(node, self.nodes)?;
        Ok(self.adjacent(node).collect())
    }

    /// Rows of `0`/`1` flags, one per source node.
    pub fn adjacency_rows(&self) -> Vec<Vec<u8>> {
        self.weights
            .chunks(self.nodes.max(1))
            .take(self.nodes)
            .map(|row| row.iter().map(|w| u8::from(w.is_some())).collect())
            .collect()
    }

    pub(crate) fn raw_weights(&self) -> &[Option<u32>] {
        &self.weights
    }

    fn index(&self, src: usize, dst: usize) -> Result<usize, GraphError> {
        check_node(src, self.nodes)?;
        check_node(dst, self.nodes)?;
        Ok(src * self.nodes + dst)
    }
}

impl Adjacency for MatrixGraph {
    fn node_count(&self) -> usize {
        self.nodes
    }

    fn adjacent(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        let row = &self.weights[node * self.nodes..(node + 1) * self.nodes];
        row.iter()
            .enumerate()
            .filter_map(|(dst, w)| w.map(|_| dst))
    }
}

/// One line per row of `0`/`1` flags.
impl fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.adjacency_rows() {
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
