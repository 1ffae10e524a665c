//! The linked list exercises: `list`, `dlist` and `parity`.

use crate::ReplError;
use crate::tokens::{Tokens, parse_number};
use itertools::Itertools;
use sda_config::SdaConfig;
use sda_dlist::CircularList;
use sda_list::LinkedList;
use std::io::{BufRead, Write};

/// The list a `create_*` command produced.
enum Loaded {
    SinglyInts(LinkedList<i64>),
    SinglyStrs(LinkedList<String>),
    CircularInts(CircularList<i64>),
    CircularStrs(CircularList<String>),
}

#[derive(Clone, Copy)]
enum Flavor {
    Singly,
    Circular,
}

impl Loaded {
    fn create(flavor: Flavor, ints: bool) -> Self {
        match (flavor, ints) {
            (Flavor::Singly, true) => Loaded::SinglyInts(LinkedList::new()),
            (Flavor::Singly, false) => Loaded::SinglyStrs(LinkedList::new()),
            (Flavor::Circular, true) => Loaded::CircularInts(CircularList::new()),
            (Flavor::Circular, false) => Loaded::CircularStrs(CircularList::new()),
        }
    }

    fn add(&mut self, pos: usize, item: &str) -> Result<(), ReplError> {
        match self {
            Loaded::SinglyInts(list) => list.insert_nth(pos, parse_number(item)?),
            Loaded::SinglyStrs(list) => list.insert_nth(pos, item.to_string()),
            Loaded::CircularInts(list) => list.insert_nth(pos, parse_number(item)?),
            Loaded::CircularStrs(list) => list.insert_nth(pos, item.to_string()),
        }
        Ok(())
    }

    fn remove(&mut self, pos: usize) -> bool {
        match self {
            Loaded::SinglyInts(list) => list.remove_nth(pos).is_some(),
            Loaded::SinglyStrs(list) => list.remove_nth(pos).is_some(),
            Loaded::CircularInts(list) => list.remove_nth(pos).is_some(),
            Loaded::CircularStrs(list) => list.remove_nth(pos).is_some(),
        }
    }

    /// Circular string lists print from the tail back to the head.
    fn render(&self) -> String {
        match self {
            Loaded::SinglyInts(list) => list.to_string(),
            Loaded::SinglyStrs(list) => list.to_string(),
            Loaded::CircularInts(list) => list.to_string(),
            Loaded::CircularStrs(list) => list.iter().rev().join(" "),
        }
    }
}

/// Parses a position, ignoring negative ones.
fn position(token: &str) -> Result<Option<usize>, ReplError> {
    let pos: i64 = parse_number(token)?;
    match usize::try_from(pos) {
        Ok(pos) => Ok(Some(pos)),
        Err(_) => {
            tracing::warn!(pos, "negative position ignored");
            Ok(None)
        }
    }
}

fn run_positional(
    flavor: Flavor,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), ReplError> {
    let mut tokens = Tokens::new(input);
    let mut list: Option<Loaded> = None;

    while let Some(command) = tokens.next_token()? {
        tracing::debug!(%command, "list command");
        match command.as_str() {
            "create_int" | "create_str" => {
                list = Some(Loaded::create(flavor, command == "create_int"));
            }
            "add" => {
                let Some(loaded) = list.as_mut() else {
                    writeln!(out, "Create a list before adding elements!")?;
                    return Ok(());
                };
                let pos = tokens.expect_token("position")?;
                let item = tokens.expect_token("item")?;
                if let Some(pos) = position(&pos)? {
                    loaded.add(pos, &item)?;
                }
            }
            "remove" => {
                let Some(loaded) = list.as_mut() else {
                    writeln!(out, "Create a list before removing elements!")?;
                    return Ok(());
                };
                let pos = tokens.expect_token("position")?;
                if let Some(pos) = position(&pos)?
                    && !loaded.remove(pos)
                {
                    tracing::debug!(pos, "remove on an empty list");
                }
            }
            "print" => {
                let Some(loaded) = list.as_ref() else {
                    writeln!(out, "Create a list before printing!")?;
                    return Ok(());
                };
                writeln!(out, "{}", loaded.render())?;
            }
            "free" => {
                if list.is_none() {
                    writeln!(out, "Create a list before freeing!")?;
                }
                return Ok(());
            }
            other => tracing::warn!(command = other, "unknown command skipped"),
        }
    }
    Ok(())
}

/// Singly linked list commands.
pub fn run_list(
    input: impl BufRead,
    out: &mut impl Write,
    _config: &SdaConfig,
) -> Result<(), ReplError> {
    run_positional(Flavor::Singly, input, out)
}

/// Circular doubly linked list commands.
pub fn run_dlist(
    input: impl BufRead,
    out: &mut impl Write,
    _config: &SdaConfig,
) -> Result<(), ReplError> {
    run_positional(Flavor::Circular, input, out)
}

/// Reads `N` then `N` integers and prints the even and odd positions.
pub fn run_parity(
    input: impl BufRead,
    out: &mut impl Write,
    _config: &SdaConfig,
) -> Result<(), ReplError> {
    let mut tokens = Tokens::new(input);
    let count: usize = tokens.expect_number("element count")?;

    let mut list = CircularList::new();
    for _ in 0..count {
        list.push_back(tokens.expect_number::<i64>("element")?);
    }

    let (even, odd) = list.split_parity();
    writeln!(out, "{even}")?;
    writeln!(out, "{odd}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sda_testkit::run_script;

    fn list(script: &str) -> String {
        run_script(script, |i, o| run_list(i, o, &SdaConfig::default()))
    }

    fn dlist(script: &str) -> String {
        run_script(script, |i, o| run_dlist(i, o, &SdaConfig::default()))
    }

    #[test]
    fn test_list_clamps_positions() {
        let out = list("create_int add 0 1 add 5 3 add 1 2 print remove 9 print free");
        assert_eq!(out, "1 2 3\n1 2\n");
    }

    #[test]
    fn test_list_negative_position_ignored() {
        let out = list("create_str add -1 x add 0 y remove -3 print free");
        assert_eq!(out, "y\n");
    }

    #[test]
    fn test_list_remove_on_empty() {
        assert_eq!(list("create_int remove 0 print free"), "\n");
    }

    #[test]
    fn test_list_int_item_must_parse() {
        let mut out = Vec::new();
        let err = run_list(
            "create_int add 0 abc".as_bytes(),
            &mut out,
            &SdaConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ReplError::InvalidNumber {
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_dlist_strings_print_reversed() {
        let out = dlist("create_str add 0 a add 1 b add 2 c print free");
        assert_eq!(out, "c b a\n");
        let out = dlist("create_int add 0 1 add 1 2 add 2 3 print free");
        assert_eq!(out, "1 2 3\n");
    }

    #[test]
    fn test_dlist_requires_create() {
        assert_eq!(dlist("print add 0 1"), "Create a list before printing!\n");
        assert_eq!(dlist("free"), "Create a list before freeing!\n");
    }

    #[test]
    fn test_eof_inside_command() {
        let mut out = Vec::new();
        let err = run_dlist("create_int add 3".as_bytes(), &mut out, &SdaConfig::default())
            .unwrap_err();
        assert_eq!(err, ReplError::UnexpectedEof { expected: "item" });
    }

    #[test]
    fn test_parity_split() {
        let out = run_script("5\n1 2 3 4 5\n", |i, o| {
            run_parity(i, o, &SdaConfig::default())
        });
        assert_eq!(out, "1 3 5\n2 4\n");
    }
}
