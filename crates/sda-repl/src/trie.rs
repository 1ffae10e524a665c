//! The `trie` exercise.
//!
//! Input is line based: a command count `n`, then `n` lines of
//! `i <key> <value>`, `r <key>` or `s <key>`. A search for `_` looks up the
//! empty key, which is never stored and prints `_: -1`.

use crate::ReplError;
use crate::tokens::{parse_number, read_line};
use sda_config::SdaConfig;
use sda_trie::Trie;
use std::io::{BufRead, Write};

const EMPTY_KEY: &str = "_";

pub fn run(
    mut input: impl BufRead,
    out: &mut impl Write,
    config: &SdaConfig,
) -> Result<(), ReplError> {
    let mut trie: Trie<i64> = Trie::with_alphabet(config.trie.alphabet()?);

    let header = read_line(&mut input)?.ok_or(ReplError::UnexpectedEof {
        expected: "command count",
    })?;
    let count: usize = parse_number(header.trim())?;

    for _ in 0..count {
        let line = read_line(&mut input)?.ok_or(ReplError::UnexpectedEof {
            expected: "trie command",
        })?;
        let mut fields = line.split_whitespace();
        let (Some(op), Some(key)) = (fields.next(), fields.next()) else {
            tracing::warn!(%line, "malformed trie command skipped");
            continue;
        };
        tracing::debug!(op, key, "trie command");

        match op {
            "i" => {
                let Some(value) = fields.next() else {
                    tracing::warn!(key, "insert without a value skipped");
                    continue;
                };
                let value = parse_number(value)?;
                if let Err(err) = trie.insert(key, value) {
                    tracing::warn!(key, error = %err, "insert rejected");
                }
            }
            "r" => {
                writeln!(out, "nNodes before removing {key}: {}", trie.node_count())?;
                trie.remove(key);
                writeln!(out, "nNodes after removing {key}: {}", trie.node_count())?;
            }
            "s" => {
                let lookup = if key == EMPTY_KEY { "" } else { key };
                match trie.get(lookup) {
                    Some(value) => writeln!(out, "{key}: {value}")?,
                    None if lookup.is_empty() => writeln!(out, "{EMPTY_KEY}: -1")?,
                    None => writeln!(out, "{key}: not found")?,
                }
            }
            other => tracing::warn!(op = other, "unknown trie command skipped"),
        }
    }
    Ok(())
}
