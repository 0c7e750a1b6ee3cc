//! `hst show` command - one record's full specifications

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{format_num, format_opt};
use crate::cli::{GlobalOpts, OutputFormat};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Record identifier (exact match)
    pub id: String,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let catalog = super::load_catalog(global)?;

    let record = catalog
        .get(args.id.trim())
        .ok_or_else(|| miette::miette!("no record with identifier '{}'", args.id))?;

    if global.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(record).into_diagnostic()?);
        return Ok(());
    }

    println!("{} {}", style(&record.id).cyan().bold(), record.name);
    println!("  Bore designation: {}", record.bore);
    println!(
        "  Working pressure: {} Bar",
        format_num(record.working_pressure_bar)
    );
    println!(
        "  Max temperature:  {} C",
        format_num(record.max_temperature_c)
    );
    println!(
        "  Bend radius:      {} mm",
        format_num(record.bend_radius_mm)
    );
    println!("  Vacuum rating:    {} Bar", format_opt(record.vacuum_bar));
    println!("  Inner diameter:   {} mm", format_opt(record.inner_diameter_mm));
    println!("  Outer diameter:   {} mm", format_opt(record.outer_diameter_mm));

    Ok(())
}
