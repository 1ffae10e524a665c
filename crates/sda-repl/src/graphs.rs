//! Graph exercises: the matrix and list graph command loops, plus the
//! bipartite and connected-component analyses.

use crate::ReplError;
use crate::tokens::Tokens;
use itertools::Itertools;
use sda_config::SdaConfig;
use sda_graph::{
    ListGraph, MatrixGraph, bfs, bipartition, connected_components, dfs, floyd_warshall,
};
use std::io::{BufRead, Write};

const NO_GRAPH: &str = "Create a graph first!";

/// Largest graph the interpreters will build.
pub const MAX_NODES: usize = 2048;

fn read_node_count<R: BufRead>(tokens: &mut Tokens<R>) -> Result<usize, ReplError> {
    let nodes = tokens.expect_number("node count")?;
    if nodes > MAX_NODES {
        return Err(ReplError::LimitExceeded {
            what: "node count",
            value: nodes,
            limit: MAX_NODES,
        });
    }
    Ok(nodes)
}

fn read_pair<R: BufRead>(tokens: &mut Tokens<R>) -> Result<(usize, usize), ReplError> {
    let src = tokens.expect_number("source node")?;
    let dst = tokens.expect_number("destination node")?;
    Ok((src, dst))
}

fn edge_flag(present: bool) -> &'static str {
    if present { "Has edge" } else { "No edge" }
}

/// Adjacency matrix commands: `create_mg`, `add_edge`, `remove_edge`,
/// `has_edge`, `print_graph`, `dfs`, `floyd` and `free`.
pub fn run_matrix_graph(
    input: impl BufRead,
    out: &mut impl Write,
    _config: &SdaConfig,
) -> Result<(), ReplError> {
    let mut tokens = Tokens::new(input);
    let mut graph: Option<MatrixGraph> = None;

    while let Some(command) = tokens.next_token()? {
        tracing::debug!(%command, "matrix graph command");
        if command == "create_mg" {
            graph = Some(MatrixGraph::new(read_node_count(&mut tokens)?));
            continue;
        }
        if !matches!(
            command.as_str(),
            "add_edge" | "remove_edge" | "has_edge" | "print_graph" | "dfs" | "floyd" | "free"
        ) {
            tracing::warn!(%command, "unknown command skipped");
            continue;
        }
        let Some(g) = graph.as_mut() else {
            writeln!(out, "{NO_GRAPH}")?;
            return Ok(());
        };
        match command.as_str() {
            "add_edge" => {
                let (src, dst) = read_pair(&mut tokens)?;
                g.add_edge(src, dst)?;
            }
            "remove_edge" => {
                let (src, dst) = read_pair(&mut tokens)?;
                g.remove_edge(src, dst)?;
            }
            "has_edge" => {
                let (src, dst) = read_pair(&mut tokens)?;
                writeln!(out, "{}", edge_flag(g.has_edge(src, dst)?))?;
            }
            "print_graph" => write!(out, "{g}")?,
            "dfs" => {
                let start = tokens.expect_number("start node")?;
                writeln!(out, "{}", dfs(&*g, start)?.iter().join(" "))?;
            }
            "floyd" => write!(out, "{}", floyd_warshall(&*g))?,
            _ => return Ok(()),
        }
    }
    Ok(())
}

/// Adjacency list commands: `create_lg`, `add_edge`, `remove_edge`,
/// `has_edge`, `print_graph`, `bfs`, `dfs` and `free`.
pub fn run_list_graph(
    input: impl BufRead,
    out: &mut impl Write,
    _config: &SdaConfig,
) -> Result<(), ReplError> {
    let mut tokens = Tokens::new(input);
    let mut graph: Option<ListGraph> = None;

    while let Some(command) = tokens.next_token()? {
        tracing::debug!(%command, "list graph command");
        if command == "create_lg" {
            graph = Some(ListGraph::new(read_node_count(&mut tokens)?));
            continue;
        }
        if !matches!(
            command.as_str(),
            "add_edge" | "remove_edge" | "has_edge" | "print_graph" | "bfs" | "dfs" | "free"
        ) {
            tracing::warn!(%command, "unknown command skipped");
            continue;
        }
        let Some(g) = graph.as_mut() else {
            writeln!(out, "{NO_GRAPH}")?;
            return Ok(());
        };
        match command.as_str() {
            "add_edge" => {
                let (src, dst) = read_pair(&mut tokens)?;
                g.add_edge(src, dst)?;
            }
            "remove_edge" => {
                let (src, dst) = read_pair(&mut tokens)?;
                if !g.remove_edge(src, dst)? {
                    tracing::debug!(src, dst, "no such edge to remove");
                }
            }
            "has_edge" => {
                let (src, dst) = read_pair(&mut tokens)?;
                writeln!(out, "{}", edge_flag(g.has_edge(src, dst)?))?;
            }
            "print_graph" => write!(out, "{g}")?,
            "bfs" => {
                let start = tokens.expect_number("start node")?;
                writeln!(out, "{}", bfs(&*g, start)?.iter().join(" "))?;
            }
            "dfs" => {
                let start = tokens.expect_number("start node")?;
                writeln!(out, "{}", dfs(&*g, start)?.iter().join(" "))?;
            }
            _ => return Ok(()),
        }
    }
    Ok(())
}

/// Reads `n m` and `m` edges into an undirected list graph.
fn read_undirected<R: BufRead>(tokens: &mut Tokens<R>) -> Result<ListGraph, ReplError> {
    let nodes = read_node_count(tokens)?;
    let edges: usize = tokens.expect_number("edge count")?;
    let mut graph = ListGraph::new(nodes);
    for _ in 0..edges {
        let (a, b) = read_pair(tokens)?;
        graph.add_undirected_edge(a, b)?;
    }
    Ok(graph)
}

/// Prints both sides of a 2-colouring, or `Graph is not bipartite`.
pub fn run_bipartite(
    input: impl BufRead,
    out: &mut impl Write,
    _config: &SdaConfig,
) -> Result<(), ReplError> {
    let graph = read_undirected(&mut Tokens::new(input))?;
    match bipartition(&graph)? {
        Some(parts) => {
            writeln!(out, "{}", parts.side_a.iter().join(" "))?;
            writeln!(out, "{}", parts.side_b.iter().join(" "))?;
        }
        None => writeln!(out, "Graph is not bipartite")?,
    }
    Ok(())
}

/// Prints the number of connected components, then one line per component.
pub fn run_components(
    input: impl BufRead,
    out: &mut impl Write,
    _config: &SdaConfig,
) -> Result<(), ReplError> {
    let graph = read_undirected(&mut Tokens::new(input))?;
    let components = connected_components(&graph);
    writeln!(out, "{}", components.len())?;
    for component in &components {
        writeln!(out, "{}", component.iter().join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sda_graph::GraphError;
    use sda_testkit::run_script;

    fn matrix(script: &str) -> String {
        run_script(script, |i, o| run_matrix_graph(i, o, &SdaConfig::default()))
    }

    fn list(script: &str) -> String {
        run_script(script, |i, o| run_list_graph(i, o, &SdaConfig::default()))
    }

    #[test]
    fn test_matrix_edges() {
        let out = matrix(
            "create_mg 3 add_edge 0 1 add_edge 1 2 has_edge 0 1 has_edge 1 0 \
             remove_edge 0 1 has_edge 0 1 print_graph free",
        );
        assert_eq!(out, "Has edge\nNo edge\nNo edge\n0 0 0\n0 0 1\n0 0 0\n");
    }

    #[test]
    fn test_matrix_floyd_prints_minus_one() {
        let out = matrix("create_mg 3 add_edge 0 1 add_edge 1 2 add_edge 2 0 add_edge 0 2 floyd free");
        assert_eq!(out, "2 1 1\n2 3 1\n1 2 2\n");
        let out = matrix("create_mg 2 add_edge 0 1 floyd");
        assert_eq!(out, "-1 1\n-1 -1\n");
    }

    #[test]
    fn test_matrix_requires_create() {
        assert_eq!(matrix("add_edge 0 1 print_graph"), "Create a graph first!\n");
        assert_eq!(matrix("hello free"), "Create a graph first!\n");
    }

    #[test]
    fn test_matrix_node_out_of_range() {
        let mut out = Vec::new();
        let err = run_matrix_graph(
            "create_mg 2 add_edge 0 5".as_bytes(),
            &mut out,
            &SdaConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ReplError::Graph(GraphError::NodeOutOfRange { node: 5, nodes: 2 })
        );
    }

    #[test]
    fn test_node_count_limit() {
        let mut out = Vec::new();
        let err = run_list_graph(
            "create_lg 99999999".as_bytes(),
            &mut out,
            &SdaConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ReplError::LimitExceeded { limit: MAX_NODES, .. }));
    }

    #[test]
    fn test_list_graph_traversals() {
        let out = list(
            "create_lg 4 add_edge 0 2 add_edge 0 1 add_edge 1 3 add_edge 2 3 \
             print_graph bfs 0 dfs 0 remove_edge 0 2 has_edge 0 2 free",
        );
        assert_eq!(
            out,
            "0: 2 1\n1: 3\n2: 3\n3:\n0 2 1 3\n0 2 3 1\nNo edge\n"
        );
    }

    #[test]
    fn test_bipartite() {
        let run = |s: &str| run_script(s, |i, o| run_bipartite(i, o, &SdaConfig::default()));
        assert_eq!(run("4 3\n0 1\n1 2\n2 3\n"), "0 2\n1 3\n");
        assert_eq!(run("3 3\n0 1\n1 2\n2 0\n"), "Graph is not bipartite\n");
    }

    #[test]
    fn test_components() {
        let out = run_script("6 4\n0 1\n1 2\n0 3\n4 5\n", |i, o| {
            run_components(i, o, &SdaConfig::default())
        });
        assert_eq!(out, "2\n2 1 3 0\n5 4\n");
    }
}
