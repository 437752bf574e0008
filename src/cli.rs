//! Command-line interface definition for dirgram

use std::path::PathBuf;

use clap::Parser;

/// Dirgram - render annotated directory-tree diagrams from YAML
#[derive(Parser, Debug)]
#[command(name = "dirgram")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the YAML file describing the directory tree
    pub file: PathBuf,
}
