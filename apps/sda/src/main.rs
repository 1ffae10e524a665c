use anyhow::{Context, Result};
use clap::Parser;
use sda_config::CONFIG_ENV;
use sda_logging::LogLevel;
use sda_repl::Exercise;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sda")]
#[command(about = "Run a data structure exercise as a command interpreter.", long_about = None)]
struct Cli {
    /// Exercise to run: list, dlist, parity, friends, stack-check,
    /// queue-check, dedupe, matrix-graph, list-graph, bipartite, components,
    /// tree-height, path-sum or trie.
    exercise: Exercise,

    /// Config file (YAML, or JSON by extension). If omitted, SDA_CONFIG is used.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured log level (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Read commands from this file instead of standard input.
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = sda_config::resolve_config(cli.config.as_deref(), std::env::var_os(CONFIG_ENV))?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    sda_logging::init(&config.logging)?;

    let mut out = BufWriter::new(io::stdout().lock());
    let result = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            cli.exercise.run(BufReader::new(file), &mut out, &config)
        }
        None => cli.exercise.run(io::stdin().lock(), &mut out, &config),
    };
    result.with_context(|| format!("exercise {} failed", cli.exercise))?;
    Ok(())
}
