//! The `friends` exercise: a hash table of friend records keyed by name.

use crate::ReplError;
use crate::tokens::Tokens;
use sda_config::SdaConfig;
use sda_hashtable::HashTable;
use std::fmt;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friend {
    pub name: String,
    pub age: i32,
    pub faculty: String,
    pub favorite_food: String,
}

impl fmt::Display for Friend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | Age: {} | Faculty: {} | Favorite food: {}",
            self.name, self.age, self.faculty, self.favorite_food
        )
    }
}

const NO_TABLE: &str = "Create hashtable first.";

/// Runs the friends commands until `free` or end of input.
///
/// Commands issued before `create_ht` print a reminder and are otherwise
/// ignored; their arguments are still consumed.
pub fn run(input: impl BufRead, out: &mut impl Write, config: &SdaConfig) -> Result<(), ReplError> {
    let mut tokens = Tokens::new(input);
    let mut table: Option<HashTable<String, Friend>> = None;

    while let Some(command) = tokens.next_token()? {
        tracing::debug!(%command, "friends command");
        match command.as_str() {
            "create_ht" => {
                table = Some(HashTable::with_buckets(config.hashtable.buckets)?);
            }
            "add_friend" => {
                let friend = Friend {
                    name: tokens.expect_token("name")?,
                    age: tokens.expect_number("age")?,
                    faculty: tokens.expect_token("faculty")?,
                    favorite_food: tokens.expect_token("favorite food")?,
                };
                match table.as_mut() {
                    Some(table) => {
                        table.put(friend.name.clone(), friend);
                    }
                    None => writeln!(out, "{NO_TABLE}")?,
                }
            }
            "print_friend" => {
                let name = tokens.expect_token("name")?;
                match table.as_ref().map(|t| t.get(name.as_str())) {
                    Some(Some(friend)) => writeln!(out, "{friend}")?,
                    Some(None) => writeln!(out, "Friend doesn't exist!")?,
                    None => writeln!(out, "{NO_TABLE}")?,
                }
            }
            "check_friend" => {
                let name = tokens.expect_token("name")?;
                match table.as_ref().map(|t| t.contains_key(name.as_str())) {
                    Some(true) => writeln!(out, "Friend {name} exists.")?,
                    Some(false) => writeln!(out, "Friend {name} doesn't exist.")?,
                    None => writeln!(out, "{NO_TABLE}")?,
                }
            }
            "remove_friend" => {
                let name = tokens.expect_token("name")?;
                match table.as_mut() {
                    Some(table) => {
                        if table.remove(name.as_str()).is_none() {
                            tracing::debug!(%name, "no such friend to remove");
                        }
                    }
                    None => writeln!(out, "{NO_TABLE}")?,
                }
            }
            "free" => {
                if table.is_none() {
                    writeln!(out, "{NO_TABLE}")?;
                }
                return Ok(());
            }
            other => tracing::warn!(command = other, "unknown command skipped"),
        }
    }
    Ok(())
}
