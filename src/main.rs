//! Dirgram CLI - annotated directory-tree diagram renderer
//!
//! Usage: dirgram <FILE>
//!
//! Reads a YAML description of a directory hierarchy and prints the
//! rendered tree diagram to stdout. Exits non-zero on a missing or
//! unreadable file and on malformed input, printing the error without
//! emitting a partial diagram.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use dirgram::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = fs::read(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let nodes = dirgram::parse_nodes(&input)?;
    let rendered = dirgram::generate(&nodes);

    print!("{}", rendered);

    Ok(())
}
