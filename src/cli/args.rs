//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    bores::BoresArgs, check::CheckArgs, completions::CompletionsArgs, list::ListArgs,
    select::SelectArgs, show::ShowArgs,
};
use crate::core::Delimiter;

#[derive(Parser)]
#[command(name = "hst")]
#[command(author, version, about = "Hose Selection Toolkit")]
#[command(
    long_about = "A parametric selection tool for industrial hose catalogs: filter a catalog against operating constraints and get the best-fitting hose recommended."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Catalog file (delimited text with a header row)
    #[arg(long, short = 'c', global = true, env = "HST_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Field delimiter of the catalog file
    #[arg(long, global = true, default_value = "auto")]
    pub delimiter: DelimiterArg,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter the catalog against operating constraints and recommend a hose
    Select(SelectArgs),

    /// List catalog records
    List(ListArgs),

    /// Show one record's full specifications
    Show(ShowArgs),

    /// List distinct bore designations
    Bores(BoresArgs),

    /// Validate a catalog file and report its detected schema
    Check(CheckArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Automatically detect based on context (tables for humans)
    #[default]
    Auto,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just identifiers, one per line
    Id,
}

/// Delimiter choice exposed on the command line; `auto` defers to detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DelimiterArg {
    #[default]
    Auto,
    Comma,
    Semicolon,
}

impl DelimiterArg {
    pub fn resolve(self) -> Option<Delimiter> {
        match self {
            DelimiterArg::Auto => None,
            DelimiterArg::Comma => Some(Delimiter::Comma),
            DelimiterArg::Semicolon => Some(Delimiter::Semicolon),
        }
    }
}
