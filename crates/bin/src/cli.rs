//! CLI argument definitions for the docmodel binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Output format flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Aligned, human-readable text
    Human,
    /// One JSON object per invocation
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Which path grammar a compare argument uses
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PathKind {
    /// Dotted field path with backtick quoting
    Field,
    /// Slash-delimited document key
    Key,
}

/// Inspect field paths and document keys
#[derive(Parser, Debug)]
#[command(name = "docmodel")]
#[command(about = "Parse, render and compare field paths and document keys")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "human", env = "DOCMODEL_FORMAT")]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a dotted field path and print its segments and canonical form
    Field(FieldArgs),
    /// Parse a slash-delimited document key
    Key(KeyArgs),
    /// Order two field paths or two document keys
    Compare(CompareArgs),
}

/// Arguments for the field command
#[derive(clap::Args, Debug)]
pub struct FieldArgs {
    /// Raw field path, e.g. a.`b.c`.d
    pub path: String,
}

/// Arguments for the key command
#[derive(clap::Args, Debug)]
pub struct KeyArgs {
    /// Slash path, e.g. rooms/eros/messages/1
    pub path: String,
}

/// Arguments for the compare command
#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    /// Grammar of both operands
    #[arg(value_enum)]
    pub kind: PathKind,

    /// Left operand
    pub left: String,

    /// Right operand
    pub right: String,
}
