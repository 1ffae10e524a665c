//! Traversal and analysis algorithms over [`Adjacency`] graphs.
//!
//! Depth-first walks use [`sda_stack::Stack`]; breadth-first walks use a
//! [`sda_queue::BoundedQueue`] sized to the node count, which is enough since
//! every node is enqueued at most once.

use crate::{Adjacency, GraphError, MatrixGraph, check_node};
use sda_queue::BoundedQueue;
use sda_stack::Stack;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Shortest paths
// ============================================================================

/// All-pairs shortest path lengths, `None` where no path exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    nodes: usize,
    dist: Vec<Option<u32>>,
}

impl DistanceMatrix {
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Length of the shortest path from `src` to `dst`.
    ///
    /// For `src == dst` this is the shortest cycle through the node.
    pub fn get(&self, src: usize, dst: usize) -> Option<u32> {
        if src >= self.nodes || dst >= self.nodes {
            return None;
        }
        self.dist[src * self.nodes + dst]
    }

    /// One slice of distances per source node.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u32>]> + '_ {
        self.dist.chunks(self.nodes.max(1)).take(self.nodes)
    }
}

/// One line per source node, `-1` for unreachable pairs.
impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|d| d.map_or_else(|| "-1".to_string(), |d| d.to_string()))
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Floyd-Warshall over the edge weights of `graph`.
///
/// The diagonal starts from the graph's self-loops rather than zero, so
/// `get(i, i)` ends up as the shortest cycle through `i`.
pub fn floyd_warshall(graph: &MatrixGraph) -> DistanceMatrix {
    let n = graph.node_count();
    let mut dist = graph.raw_weights().to_vec();

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[i * n + k] else { continue };
            for j in 0..n {
                let Some(kj) = dist[k * n + j] else { continue };
                let through = ik.saturating_add(kj);
                let cell = &mut dist[i * n + j];
                if cell.is_none_or(|d| through < d) {
                    *cell = Some(through);
                }
            }
        }
    }

    DistanceMatrix { nodes: n, dist }
}

// ============================================================================
// Traversals
// ============================================================================

/// Depth-first preorder from `start`.
///
/// The walk peeks at the top of the stack and descends into the first
/// unvisited neighbour, popping only when none is left.
pub fn dfs<G: Adjacency>(graph: &G, start: usize) -> Result<Vec<usize>, GraphError> {
    let nodes = graph.node_count();
    check_node(start, nodes)?;

    let mut visited = vec![false; nodes];
    let mut order = Vec::new();
    let mut stack = Stack::new();
    stack.push(start);

    while let Some(&current) = stack.peek() {
        if !visited[current] {
            visited[current] = true;
            order.push(current);
        }
        match graph.adjacent(current).find(|&n| !visited[n]) {
            Some(next) => stack.push(next),
            None => {
                stack.pop();
            }
        }
    }

    Ok(order)
}

/// Breadth-first order from `start`.
pub fn bfs<G: Adjacency>(graph: &G, start: usize) -> Result<Vec<usize>, GraphError> {
    let nodes = graph.node_count();
    check_node(start, nodes)?;

    let mut visited = vec![false; nodes];
    let mut order = Vec::new();
    reach(graph, start, &mut visited, |node| order.push(node))?;
    Ok(order)
}

fn reach<G, F>(graph: &G, start: usize, visited: &mut [bool], mut visit: F) -> Result<(), GraphError>
where
    G: Adjacency,
    F: FnMut(usize),
{
    let mut queue = BoundedQueue::with_capacity(graph.node_count());
    visited[start] = true;
    queue.enqueue(start)?;

    while let Some(current) = queue.dequeue() {
        visit(current);
        for next in graph.adjacent(current) {
            if !visited[next] {
                visited[next] = true;
                queue.enqueue(next)?;
            }
        }
    }
    Ok(())
}

// ============================================================================
// Bipartiteness
// ============================================================================

/// The two sides of a 2-colouring, each sorted ascending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bipartition {
    pub side_a: Vec<usize>,
    pub side_b: Vec<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    A,
    B,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Two-colours every component by BFS, returning `None` on an odd cycle.
///
/// The lowest node of each component goes to side A.
pub fn bipartition<G: Adjacency>(graph: &G) -> Result<Option<Bipartition>, GraphError> {
    let nodes = graph.node_count();
    let mut side: Vec<Option<Side>> = vec![None; nodes];
    let mut queue = BoundedQueue::with_capacity(nodes);

    for root in 0..nodes {
        if side[root].is_some() {
            continue;
        }
        side[root] = Some(Side::A);
        queue.enqueue(root)?;

        while let Some(current) = queue.dequeue() {
            let Some(colour) = side[current] else { continue };
            for next in graph.adjacent(current) {
                match side[next] {
                    None => {
                        side[next] = Some(colour.other());
                        queue.enqueue(next)?;
                    }
                    Some(c) if c == colour => return Ok(None),
                    Some(_) => {}
                }
            }
        }
    }

    let (side_a, side_b) = (0..nodes).partition(|&n| side[n] == Some(Side::A));
    Ok(Some(Bipartition { side_a, side_b }))
}

// ============================================================================
// Connected components
// ============================================================================

/// Number of components reachable by BFS from successive unvisited nodes.
pub fn component_count<G: Adjacency>(graph: &G) -> Result<usize, GraphError> {
    let mut visited = vec![false; graph.node_count()];
    let mut count = 0;
    for root in 0..graph.node_count() {
        if !visited[root] {
            count += 1;
            reach(graph, root, &mut visited, |_| {})?;
        }
    }
    Ok(count)
}

struct Frame {
    node: usize,
    pending: std::vec::IntoIter<usize>,
}

impl Frame {
    fn new<G: Adjacency>(graph: &G, node: usize) -> Self {
        let pending: Vec<usize> = graph.adjacent(node).collect();
        Self {
            node,
            pending: pending.into_iter(),
        }
    }
}

/// Components in order of their lowest node.
///
/// Within a component, nodes are listed in depth-first post-order: a node
/// appears only after every neighbour it discovered.
pub fn connected_components<G: Adjacency>(graph: &G) -> Vec<Vec<usize>> {
    let nodes = graph.node_count();
    let mut visited = vec![false; nodes];
    let mut components = Vec::new();

    for root in 0..nodes {
        if visited[root] {
            continue;
        }
        let mut component = Vec::new();
        let mut frames = Stack::new();
        visited[root] = true;
        frames.push(Frame::new(graph, root));

        while let Some(frame) = frames.peek_mut() {
            let node = frame.node;
            match frame.pending.find(|&n| !visited[n]) {
                Some(next) => {
                    visited[next] = true;
                    frames.push(Frame::new(graph, next));
                }
                None => {
                    frames.pop();
                    component.push(node);
                }
            }
        }
        components.push(component);
    }

    components
}
