//! `hst check` command - validate a catalog file
//!
//! Loads the file through the normal loader and reports what was detected:
//! record count, bore designations, and how each header column mapped (or
//! failed to map) to a canonical field. Schema failures surface the
//! mandatory missing-columns/found-columns diagnostic from the loader.

use std::fs;
use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::loader::{self, Delimiter};
use crate::core::schema::{normalize_header, resolve_alias};

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Catalog file to check (defaults to --catalog / HST_CATALOG)
    pub file: Option<PathBuf>,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let path = match args.file {
        Some(path) => path,
        None => super::catalog_path(global)?,
    };

    let delimiter = global.delimiter.resolve();
    let catalog = loader::load_with(&path, delimiter).into_diagnostic()?;

    println!(
        "{} Catalog OK: {} record(s), {} bore designation(s)",
        style("✓").green(),
        catalog.len(),
        catalog.bores().len()
    );

    if global.quiet {
        return Ok(());
    }

    // Re-read the header line to show the column mapping the loader used
    let data = fs::read_to_string(&path).into_diagnostic()?;
    let data = data.strip_prefix('\u{feff}').unwrap_or(&data);
    let header_line = data.lines().next().unwrap_or("");
    let delimiter = delimiter.unwrap_or_else(|| Delimiter::detect(header_line));

    println!();
    println!(
        "Delimiter: {}",
        match delimiter {
            Delimiter::Comma => "comma",
            Delimiter::Semicolon => "semicolon",
        }
    );
    println!("Columns:");
    for raw in header_line.split(delimiter.as_byte() as char) {
        let normalized = normalize_header(raw);
        match resolve_alias(&normalized) {
            Some(column) => println!("  {} -> {}", normalized, column),
            None => println!("  {} -> {}", normalized, style("(ignored)").dim()),
        }
    }

    Ok(())
}
