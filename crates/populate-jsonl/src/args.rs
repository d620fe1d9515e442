//! CLI argument definitions for document generation.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// How documents are laid out in the output.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One compact JSON document per line
    #[default]
    Jsonl,
    /// Indented JSON documents separated by newlines
    Pretty,
}

/// Arguments for the `generate` command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to schema file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Number of documents to generate
    #[arg(long, short = 'n', default_value = "1")]
    pub count: u64,

    /// Random seed for deterministic generation (same seed = same data).
    /// A random seed is chosen and logged when omitted.
    #[arg(long, env = "SCHEMA_DATAGEN_SEED")]
    pub seed: Option<u64>,

    /// Index of the first document (resume a previous run)
    #[arg(long, default_value = "0")]
    pub start_index: u64,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Append to the output file instead of truncating it
    #[arg(long, requires = "output")]
    pub append: bool,

    /// Output layout
    #[arg(long, value_enum, default_value_t = OutputFormat::Jsonl)]
    pub format: OutputFormat,

    /// TOML file with generator options
    #[arg(long, env = "SCHEMA_DATAGEN_CONFIG")]
    pub config: Option<PathBuf>,
}
