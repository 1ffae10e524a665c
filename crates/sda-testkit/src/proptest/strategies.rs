//! Proptest strategies for sda property-based testing

use proptest::prelude::*;

// ============================================================================
// List Operations
// ============================================================================

/// One positional operation against a list model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOp {
    Insert(usize, i32),
    Remove(usize),
    PushFront(i32),
    PushBack(i32),
    PopFront,
}

/// Strategy for a single list operation; positions may run past the end.
fn strategy_list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        3 => (0usize..40, any::<i32>()).prop_map(|(n, v)| ListOp::Insert(n, v)),
        2 => (0usize..40).prop_map(ListOp::Remove),
        1 => any::<i32>().prop_map(ListOp::PushFront),
        1 => any::<i32>().prop_map(ListOp::PushBack),
        1 => Just(ListOp::PopFront),
    ]
}

/// Strategy for a sequence of list operations
pub fn strategy_list_ops() -> impl Strategy<Value = Vec<ListOp>> {
    prop::collection::vec(strategy_list_op(), 0..80)
}

// ============================================================================
// Words and Keys
// ============================================================================

/// Strategy for a non-empty lowercase word
pub fn strategy_word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

/// Strategy for a list of words, duplicates allowed
pub fn strategy_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(strategy_word(), 0..40)
}

/// Strategy for keyed put (`Some`) / remove (`None`) operations over a small key space
pub fn strategy_key_ops() -> impl Strategy<Value = Vec<(String, Option<i32>)>> {
    prop::collection::vec(("[a-d]{1,3}", prop::option::of(any::<i32>())), 0..60)
}

// ============================================================================
// Graphs
// ============================================================================

/// Strategy for an edge list over `nodes` nodes (self-loops and repeats allowed)
pub fn strategy_edge_list(nodes: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    let upper = nodes.max(1);
    prop::collection::vec((0..upper, 0..upper), 0..(upper * 3))
}

/// Strategy for a node count together with an edge list over it
pub fn strategy_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|nodes| (Just(nodes), strategy_edge_list(nodes)))
}
