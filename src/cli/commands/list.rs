//! `hst list` command - dump catalog records

use miette::{IntoDiagnostic, Result};

use crate::cli::table::render_records;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::HoseRecord;

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by bore designation (exact match)
    #[arg(long, short = 'b')]
    pub bore: Option<String>,

    /// Filter by name keyword (case-insensitive substring)
    #[arg(long, short = 'k')]
    pub keyword: Option<String>,

    /// Limit number of rows shown
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let catalog = super::load_catalog(global)?;

    let keyword = args.keyword.as_deref().map(str::to_lowercase);
    let mut records: Vec<&HoseRecord> = catalog
        .records()
        .iter()
        .filter(|r| args.bore.as_deref().map_or(true, |b| r.bore == b))
        .filter(|r| {
            keyword
                .as_deref()
                .map_or(true, |k| r.name.to_lowercase().contains(k))
        })
        .collect();

    if let Some(limit) = args.limit {
        records.truncate(limit);
    }

    if global.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&records).into_diagnostic()?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No records match.");
        return Ok(());
    }

    println!("{}", render_records(&records, global.format));
    if global.format == OutputFormat::Auto && !global.quiet {
        println!();
        println!("{} record(s)", records.len());
    }

    Ok(())
}
