//! Scheme tokenizer and read-eval-print loop.
//!
//! With no files, runs an interactive loop on stdin:
//!
//! ```ignore
//! schemish
//! ```
//!
//! With files, prints the tokens of each, one per line (`-` is stdin):
//!
//! ```ignore
//! schemish input.scm
//! ```
//!
//! Set `RUST_LOG=schemish=debug` (or `trace`, for every scanner step) for logs on stderr.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use schemish::{repl, tokenize, ReplConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to tokenize; `-` reads stdin
    files: Vec<PathBuf>,

    /// Print every token (the loop prints only results otherwise)
    #[arg(short, long)]
    tokens: bool,

    /// Skip the welcome and farewell banners
    #[arg(short, long)]
    quiet: bool,
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut s = String::new();
        std::io::stdin().read_to_string(&mut s)?;
        Ok(s)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))
    }
}

fn dump_tokens(files: &[PathBuf]) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for path in files {
        let input = read_input(path)?;
        let tokens = tokenize(&input).map_err(|e| e.annotate(path.display().to_string()))?;
        for token in tokens {
            writeln!(stdout, "{token}")?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if !cli.files.is_empty() {
        return dump_tokens(&cli.files);
    }

    let config = ReplConfig {
        show_tokens: cli.tokens,
        quiet: cli.quiet,
        ..Default::default()
    };
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    repl(&mut stdin, &mut stdout, &mut stderr, &config)?;
    Ok(())
}
