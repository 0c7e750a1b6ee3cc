//! `hst bores` command - distinct bore designations
//!
//! Answers "what can I even ask for?" before running a query; UIs use the
//! same list to populate their bore pickers.

use miette::{IntoDiagnostic, Result};
use serde_json::json;

use crate::cli::{GlobalOpts, OutputFormat};

#[derive(clap::Args, Debug)]
pub struct BoresArgs {}

pub fn run(_args: BoresArgs, global: &GlobalOpts) -> Result<()> {
    let catalog = super::load_catalog(global)?;
    let bores = catalog.bores();

    let counts: Vec<(String, usize)> = bores
        .into_iter()
        .map(|bore| {
            let count = catalog.records().iter().filter(|r| r.bore == bore).count();
            (bore, count)
        })
        .collect();

    match global.format {
        OutputFormat::Json => {
            let items: Vec<_> = counts
                .iter()
                .map(|(bore, count)| json!({ "bore": bore, "records": count }))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&items).into_diagnostic()?
            );
        }
        OutputFormat::Id => {
            for (bore, _) in &counts {
                println!("{bore}");
            }
        }
        OutputFormat::Tsv | OutputFormat::Csv => {
            let sep = if global.format == OutputFormat::Tsv { "\t" } else { "," };
            println!("bore{sep}records");
            for (bore, count) in &counts {
                println!("{bore}{sep}{count}");
            }
        }
        OutputFormat::Md => {
            println!("| Bore | Records |");
            println!("| --- | --- |");
            for (bore, count) in &counts {
                println!("| {bore} | {count} |");
            }
        }
        OutputFormat::Auto => {
            if counts.is_empty() {
                println!("Catalog is empty.");
                return Ok(());
            }
            for (bore, count) in &counts {
                println!("{bore}  ({count} record(s))");
            }
            if !global.quiet {
                println!();
                println!("{} bore designation(s)", counts.len());
            }
        }
    }

    Ok(())
}
