//! Proptest strategies for sda property-based testing
//!
//! This module provides reusable proptest strategies for generating container
//! operations, words and graphs across all sda crates.

pub mod strategies;

pub use strategies::{
    ListOp, strategy_edge_list, strategy_graph, strategy_key_ops, strategy_list_ops,
    strategy_word, strategy_words,
};
