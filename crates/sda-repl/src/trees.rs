//! Binary tree exercises. Both read `N` followed by `N` integers, inserted
//! in level order.

use crate::ReplError;
use crate::tokens::Tokens;
use sda_config::SdaConfig;
use sda_tree::BinaryTree;
use std::io::{BufRead, Write};

fn read_tree<R: BufRead>(tokens: &mut Tokens<R>) -> Result<BinaryTree<i64>, ReplError> {
    let count: usize = tokens.expect_number("node count")?;
    let mut tree = BinaryTree::new();
    for _ in 0..count {
        tree.insert(tokens.expect_number("node value")?);
    }
    tracing::debug!(nodes = tree.len(), "tree loaded");
    Ok(tree)
}

/// Prints the tree height in edges, `0` for an empty tree.
pub fn run_tree_height(
    input: impl BufRead,
    out: &mut impl Write,
    _config: &SdaConfig,
) -> Result<(), ReplError> {
    let tree = read_tree(&mut Tokens::new(input))?;
    writeln!(out, "{}", tree.height().unwrap_or(0))?;
    Ok(())
}

/// Reads a target after the tree and prints `1` if some path starting at the
/// root sums to it, `0` otherwise.
pub fn run_path_sum(
    input: impl BufRead,
    out: &mut impl Write,
    _config: &SdaConfig,
) -> Result<(), ReplError> {
    let mut tokens = Tokens::new(input);
    let tree = read_tree(&mut tokens)?;
    let target: i64 = tokens.expect_number("target sum")?;
    writeln!(out, "{}", u8::from(tree.has_path_sum(target)))?;
    Ok(())
}
