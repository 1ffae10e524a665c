//! Stack and queue self-checks, plus adjacent-duplicate removal.
//!
//! The self-checks read a test number and exercise a container that starts
//! with one seeded value. Unknown test numbers print nothing.

use crate::ReplError;
use crate::tokens::Tokens;
use itertools::Itertools;
use sda_config::SdaConfig;
use sda_queue::BoundedQueue;
use sda_stack::{Stack, remove_adjacent_duplicates};
use std::io::{BufRead, Write};

const STACK_SEED: i32 = 10;
const QUEUE_SEED: i32 = 5;

/// Stack self-check. The stack starts as `[10]`.
///
/// | test | prints |
/// |---|---|
/// | 0 | size |
/// | 1 | top |
/// | 2 | top, then the size after popping it |
/// | 3 | size and top after replacing the seed with 9, 8, 7 |
/// | 4 | every value popped after the same pushes, then the final size |
pub fn run_stack_check(
    input: impl BufRead,
    out: &mut impl Write,
    _config: &SdaConfig,
) -> Result<(), ReplError> {
    let mut tokens = Tokens::new(input);
    let test: i64 = tokens.expect_number("test number")?;

    let mut stack = Stack::new();
    stack.push(STACK_SEED);

    match test {
        0 => writeln!(out, "{}", stack.len())?,
        1 => {
            if let Some(top) = stack.peek() {
                writeln!(out, "{top}")?;
            }
        }
        2 => {
            if let Some(top) = stack.pop() {
                writeln!(out, "{top} {}", stack.len())?;
            }
        }
        3 | 4 => {
            stack.pop();
            stack.extend([9, 8, 7]);
            if test == 3 {
                if let Some(top) = stack.peek() {
                    writeln!(out, "{} {top}", stack.len())?;
                }
            } else {
                let popped: Vec<i32> = std::iter::from_fn(|| stack.pop()).collect();
                writeln!(out, "{} {}", popped.iter().join(" "), stack.len())?;
            }
        }
        other => tracing::warn!(test = other, "unknown stack test"),
    }
    Ok(())
}

/// Queue self-check. The queue starts as `[5]` with the configured capacity.
///
/// Mirrors [`run_stack_check`] with FIFO semantics; tests 3 and 4 replace
/// the seed with 2, 3, 4.
pub fn run_queue_check(
    input: impl BufRead,
    out: &mut impl Write,
    config: &SdaConfig,
) -> Result<(), ReplError> {
    let mut tokens = Tokens::new(input);
    let test: i64 = tokens.expect_number("test number")?;

    let mut queue = BoundedQueue::with_capacity(config.queue.capacity);
    queue.enqueue(QUEUE_SEED)?;

    match test {
        0 => writeln!(out, "{}", queue.len())?,
        1 => {
            if let Some(front) = queue.front() {
                writeln!(out, "{front}")?;
            }
        }
        2 => {
            if let Some(front) = queue.dequeue() {
                writeln!(out, "{front} {}", queue.len())?;
            }
        }
        3 | 4 => {
            queue.dequeue();
            for value in [2, 3, 4] {
                queue.enqueue(value)?;
            }
            if test == 3 {
                if let Some(front) = queue.front() {
                    writeln!(out, "{} {front}", queue.len())?;
                }
            } else {
                let drained: Vec<i32> = std::iter::from_fn(|| queue.dequeue()).collect();
                writeln!(out, "{} {}", drained.iter().join(" "), queue.len())?;
            }
        }
        other => tracing::warn!(test = other, "unknown queue test"),
    }
    Ok(())
}

/// Reads `k` and a word, then prints the word with every run of `k` equal
/// adjacent characters removed.
pub fn run_dedupe(
    input: impl BufRead,
    out: &mut impl Write,
    _config: &SdaConfig,
) -> Result<(), ReplError> {
    let mut tokens = Tokens::new(input);
    let k: usize = tokens.expect_number("run length")?;
    let word = tokens.expect_token("word")?;
    tracing::debug!(k, %word, "removing adjacent duplicates");
    writeln!(out, "{}", remove_adjacent_duplicates(&word, k))?;
    Ok(())
}
