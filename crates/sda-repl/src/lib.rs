//! Command interpreters for the sda exercises.
//!
//! Each exercise reads commands from a buffered reader and writes its
//! results to a writer. Most exercises read whitespace-separated tokens;
//! the trie exercise reads whole lines. Reaching the end of input between
//! commands ends an interpreter cleanly, while running out of input in the
//! middle of a command is an [`ReplError::UnexpectedEof`].

use sda_config::SdaConfig;
use sda_graph::GraphError;
use sda_hashtable::HashTableError;
use sda_queue::QueueError;
use sda_trie::TrieError;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub mod checks;
pub mod friends;
pub mod graphs;
pub mod lists;
mod tokens;
pub mod trees;
pub mod trie;

pub use tokens::MAX_LINE_BYTES;

/// Interpreter errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplError {
    UnexpectedEof { expected: &'static str },
    InvalidNumber { token: String },
    LimitExceeded {
        what: &'static str,
        value: usize,
        limit: usize,
    },
    Io(String),
    Graph(GraphError),
    Trie(TrieError),
    HashTable(HashTableError),
    Queue(QueueError),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplError::UnexpectedEof { expected } => {
                write!(f, "input ended while reading {expected}")
            }
            ReplError::InvalidNumber { token } => write!(f, "expected a number, got {token:?}"),
            ReplError::LimitExceeded { what, value, limit } => {
                write!(f, "{what} {value} exceeds the limit of {limit}")
            }
            ReplError::Io(msg) => write!(f, "I/O error: {msg}"),
            ReplError::Graph(err) => write!(f, "graph error: {err}"),
            ReplError::Trie(err) => write!(f, "trie error: {err}"),
            ReplError::HashTable(err) => write!(f, "hash table error: {err}"),
            ReplError::Queue(err) => write!(f, "queue error: {err}"),
        }
    }
}

impl std::error::Error for ReplError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplError::Graph(err) => Some(err),
            ReplError::Trie(err) => Some(err),
            ReplError::HashTable(err) => Some(err),
            ReplError::Queue(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(err: io::Error) -> Self {
        ReplError::Io(err.to_string())
    }
}

impl From<GraphError> for ReplError {
    fn from(err: GraphError) -> Self {
        ReplError::Graph(err)
    }
}

impl From<TrieError> for ReplError {
    fn from(err: TrieError) -> Self {
        ReplError::Trie(err)
    }
}

impl From<HashTableError> for ReplError {
    fn from(err: HashTableError) -> Self {
        ReplError::HashTable(err)
    }
}

impl From<QueueError> for ReplError {
    fn from(err: QueueError) -> Self {
        ReplError::Queue(err)
    }
}

/// The exercises an interpreter exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    List,
    Dlist,
    Parity,
    Friends,
    StackCheck,
    QueueCheck,
    Dedupe,
    MatrixGraph,
    ListGraph,
    Bipartite,
    Components,
    TreeHeight,
    PathSum,
    Trie,
}

impl Exercise {
    pub const ALL: [Exercise; 14] = [
        Exercise::List,
        Exercise::Dlist,
        Exercise::Parity,
        Exercise::Friends,
        Exercise::StackCheck,
        Exercise::QueueCheck,
        Exercise::Dedupe,
        Exercise::MatrixGraph,
        Exercise::ListGraph,
        Exercise::Bipartite,
        Exercise::Components,
        Exercise::TreeHeight,
        Exercise::PathSum,
        Exercise::Trie,
    ];

    /// The command-line name, e.g. `matrix-graph`.
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::List => "list",
            Exercise::Dlist => "dlist",
            Exercise::Parity => "parity",
            Exercise::Friends => "friends",
            Exercise::StackCheck => "stack-check",
            Exercise::QueueCheck => "queue-check",
            Exercise::Dedupe => "dedupe",
            Exercise::MatrixGraph => "matrix-graph",
            Exercise::ListGraph => "list-graph",
            Exercise::Bipartite => "bipartite",
            Exercise::Components => "components",
            Exercise::TreeHeight => "tree-height",
            Exercise::PathSum => "path-sum",
            Exercise::Trie => "trie",
        }
    }

    /// Runs this exercise's interpreter to completion.
    pub fn run(
        self,
        input: impl BufRead,
        out: &mut impl Write,
        config: &SdaConfig,
    ) -> Result<(), ReplError> {
        tracing::info!(exercise = self.name(), "interpreter started");
        let result = match self {
            Exercise::List => lists::run_list(input, out, config),
            Exercise::Dlist => lists::run_dlist(input, out, config),
            Exercise::Parity => lists::run_parity(input, out, config),
            Exercise::Friends => friends::run(input, out, config),
            Exercise::StackCheck => checks::run_stack_check(input, out, config),
            Exercise::QueueCheck => checks::run_queue_check(input, out, config),
            Exercise::Dedupe => checks::run_dedupe(input, out, config),
            Exercise::MatrixGraph => graphs::run_matrix_graph(input, out, config),
            Exercise::ListGraph => graphs::run_list_graph(input, out, config),
            Exercise::Bipartite => graphs::run_bipartite(input, out, config),
            Exercise::Components => graphs::run_components(input, out, config),
            Exercise::TreeHeight => trees::run_tree_height(input, out, config),
            Exercise::PathSum => trees::run_path_sum(input, out, config),
            Exercise::Trie => trie::run(input, out, config),
        };
        out.flush()?;
        match &result {
            Ok(()) => tracing::info!(exercise = self.name(), "interpreter finished"),
            Err(err) => tracing::warn!(exercise = self.name(), error = %err, "interpreter failed"),
        }
        result
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no [`Exercise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownExercise(pub String);

impl fmt::Display for UnknownExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Exercise::ALL.iter().map(Exercise::name).collect();
        write!(
            f,
            "unknown exercise {:?} (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownExercise {}

impl FromStr for Exercise {
    type Err = UnknownExercise;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Exercise::ALL
            .into_iter()
            .find(|exercise| exercise.name() == s)
            .ok_or_else(|| UnknownExercise(s.to_string()))
    }
}
