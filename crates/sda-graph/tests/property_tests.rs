//! Property tests for sda-graph
//!
//! Graph algorithms are checked against simple reference computations over
//! random edge lists.

use proptest::prelude::*;
use sda_graph::{
    ListGraph, MatrixGraph, bfs, bipartition, component_count, connected_components, dfs,
    floyd_warshall,
};
use sda_testkit::proptest::*;
use std::collections::BTreeSet;

fn build_matrix(nodes: usize, edges: &[(usize, usize)]) -> MatrixGraph {
    let mut g = MatrixGraph::new(nodes);
    for &(a, b) in edges {
        g.add_edge(a, b).unwrap();
    }
    g
}

fn build_undirected(nodes: usize, edges: &[(usize, usize)]) -> ListGraph {
    let mut g = ListGraph::new(nodes);
    for &(a, b) in edges {
        g.add_undirected_edge(a, b).unwrap();
    }
    g
}

/// Nodes reachable from `start` by repeated relaxation.
fn reachable(nodes: usize, edges: &[(usize, usize)], start: usize) -> BTreeSet<usize> {
    let mut seen = BTreeSet::from([start]);
    loop {
        let before = seen.len();
        for &(a, b) in edges {
            if seen.contains(&a) {
                seen.insert(b);
            }
        }
        if seen.len() == before {
            return seen.into_iter().filter(|&n| n < nodes).collect();
        }
    }
}

// ============================================================================
// Traversal Tests
// ============================================================================

proptest! {
    /// DFS and BFS visit exactly the reachable set, each node once, starting at node 0.
    #[test]
    fn prop_traversals_cover_reachable_set((nodes, edges) in strategy_graph()) {
        let mg = build_matrix(nodes, &edges);
        let expected = reachable(nodes, &edges, 0);

        let by_dfs = dfs(&mg, 0).unwrap();
        let by_bfs = bfs(&mg, 0).unwrap();
        prop_assert_eq!(by_dfs[0], 0);
        prop_assert_eq!(by_bfs[0], 0);
        prop_assert_eq!(by_dfs.len(), expected.len());
        prop_assert_eq!(by_dfs.iter().copied().collect::<BTreeSet<_>>(), expected.clone());
        prop_assert_eq!(by_bfs.iter().copied().collect::<BTreeSet<_>>(), expected);
    }

    /// Matrix and list graphs with the same edges reach the same nodes.
    #[test]
    fn prop_representations_agree((nodes, edges) in strategy_graph()) {
        let mg = build_matrix(nodes, &edges);
        let mut lg = ListGraph::new(nodes);
        for &(a, b) in &edges {
            lg.add_edge(a, b).unwrap();
        }
        let from_matrix: BTreeSet<usize> = bfs(&mg, 0).unwrap().into_iter().collect();
        let from_list: BTreeSet<usize> = bfs(&lg, 0).unwrap().into_iter().collect();
        prop_assert_eq!(from_matrix, from_list);
    }
}

// ============================================================================
// Shortest Path Tests
// ============================================================================

proptest! {
    /// A finite distance exists exactly when the target is reachable by a non-empty path.
    #[test]
    fn prop_floyd_finite_iff_reachable((nodes, edges) in strategy_graph()) {
        let mg = build_matrix(nodes, &edges);
        let dist = floyd_warshall(&mg);
        for src in 0..nodes {
            // Targets of at least one edge step from src.
            let step: Vec<(usize, usize)> = edges.iter().copied().filter(|&(a, _)| a == src).collect();
            let mut via = BTreeSet::new();
            for &(_, mid) in &step {
                via.extend(reachable(nodes, &edges, mid));
            }
            for dst in 0..nodes {
                prop_assert_eq!(dist.get(src, dst).is_some(), via.contains(&dst));
            }
        }
    }

    /// Distances satisfy the triangle inequality over every edge.
    #[test]
    fn prop_floyd_triangle_inequality((nodes, edges) in strategy_graph()) {
        let mg = build_matrix(nodes, &edges);
        let dist = floyd_warshall(&mg);
        for src in 0..nodes {
            for &(a, b) in &edges {
                if let Some(to_a) = dist.get(src, a) {
                    let to_b = dist.get(src, b);
                    prop_assert!(to_b.is_some_and(|d| d <= to_a + 1));
                }
            }
        }
    }
}

// ============================================================================
// Component and Bipartition Tests
// ============================================================================

proptest! {
    /// Components partition the node set and their count matches the BFS count.
    #[test]
    fn prop_components_partition_nodes((nodes, edges) in strategy_graph()) {
        let lg = build_undirected(nodes, &edges);
        let components = connected_components(&lg);
        prop_assert_eq!(components.len(), component_count(&lg).unwrap());

        let mut all: Vec<usize> = components.iter().flatten().copied().collect();
        all.sort_unstable();
        prop_assert_eq!(all, (0..nodes).collect::<Vec<_>>());

        let both_ways: Vec<(usize, usize)> = edges.iter().flat_map(|&(a, b)| [(a, b), (b, a)]).collect();
        for component in &components {
            let expected = reachable(nodes, &both_ways, component[0]);
            prop_assert_eq!(component.iter().copied().collect::<BTreeSet<_>>(), expected);
        }
    }

    /// A reported bipartition never puts both ends of an edge on one side.
    #[test]
    fn prop_bipartition_is_proper((nodes, edges) in strategy_graph()) {
        let lg = build_undirected(nodes, &edges);
        if let Some(parts) = bipartition(&lg).unwrap() {
            let a: BTreeSet<usize> = parts.side_a.iter().copied().collect();
            prop_assert_eq!(parts.side_a.len() + parts.side_b.len(), nodes);
            for &(x, y) in &edges {
                prop_assert_ne!(a.contains(&x), a.contains(&y));
            }
        }
    }

    /// Simple paths are always bipartite, alternating by parity.
    #[test]
    fn prop_paths_are_bipartite(nodes in 1usize..20) {
        let edges: Vec<(usize, usize)> = (1..nodes).map(|n| (n - 1, n)).collect();
        let lg = build_undirected(nodes, &edges);
        let parts = bipartition(&lg).unwrap().unwrap();
        prop_assert!(parts.side_a.iter().all(|n| n % 2 == 0));
        prop_assert!(parts.side_b.iter().all(|n| n % 2 == 1));
    }
}
