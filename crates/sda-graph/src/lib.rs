//! Graph data structures and algorithms for sda.
//!
//! Two directed graph representations over nodes `0..n`:
//!
//! - [`MatrixGraph`]: an adjacency matrix of optional edge weights.
//! - [`ListGraph`]: one [`sda_list::LinkedList`] of neighbours per node.
//!
//! Both implement [`Adjacency`], which is all the traversal and analysis
//! functions in [`algo`] need.

pub mod algo;
mod list;
mod matrix;

pub use algo::{
    Bipartition, DistanceMatrix, bfs, bipartition, component_count, connected_components, dfs,
    floyd_warshall,
};
pub use list::ListGraph;
pub use matrix::MatrixGraph;

use sda_queue::QueueError;
use std::fmt;

/// Read access to a graph's out-neighbours.
pub trait Adjacency {
    /// Number of nodes; valid nodes are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Out-neighbours of `node` in traversal order.
    ///
    /// `node` must be in range; callers validate it first.
    fn adjacent(&self, node: usize) -> impl Iterator<Item = usize> + '_;
}

/// Graph operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    NodeOutOfRange { node: usize, nodes: usize },
    Queue(QueueError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NodeOutOfRange { node, nodes } => {
                write!(f, "node {node} is out of range for a graph with {nodes} nodes")
            }
            GraphError::Queue(err) => write!(f, "traversal queue error: {err}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphError::Queue(err) => Some(err),
            GraphError::NodeOutOfRange { .. } => None,
        }
    }
}

impl From<QueueError> for GraphError {
    fn from(err: QueueError) -> Self {
        GraphError::Queue(err)
    }
}

pub(crate) fn check_node(node: usize, nodes: usize) -> Result<(), GraphError> {
    if node < nodes {
        Ok(())
    } else {
        Err(GraphError::NodeOutOfRange { node, nodes })
    }
}
