//! `hst select` command - filter the catalog and recommend a hose
//!
//! The query interface of the toolkit: a conjunction of operating
//! constraints in, the matching records plus one recommendation out.

use std::collections::BTreeSet;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::format_num;
use crate::cli::table::render_records;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{select, ConstraintSet, HoseRecord};

#[derive(clap::Args, Debug)]
pub struct SelectArgs {
    /// Target bore designation (exact match, e.g. DN25)
    #[arg(long, short = 'b')]
    pub bore: String,

    /// Minimum acceptable rated working pressure, Bar
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub min_pressure: f64,

    /// Minimum acceptable maximum-temperature rating, degrees C
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub min_temp: f64,

    /// Medium keyword matched against the name (case-insensitive substring)
    #[arg(long, short = 'k')]
    pub keyword: Option<String>,

    /// Restrict to these series names (exact match, comma-separated)
    #[arg(long, short = 's', value_delimiter = ',')]
    pub series: Vec<String>,
}

pub fn run(args: SelectArgs, global: &GlobalOpts) -> Result<()> {
    // Temperature is the only constraint allowed to go sub-zero
    if args.min_pressure < 0.0 {
        return Err(miette::miette!("--min-pressure must be non-negative"));
    }

    let catalog = super::load_catalog(global)?;

    let constraints = ConstraintSet {
        bore: args.bore,
        min_pressure_bar: args.min_pressure,
        min_temperature_c: args.min_temp,
        keyword: args.keyword,
        series: if args.series.is_empty() {
            None
        } else {
            Some(args.series.into_iter().collect::<BTreeSet<String>>())
        },
    };

    let result = select(&catalog, &constraints);

    if global.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&result).into_diagnostic()?);
        return Ok(());
    }

    if result.is_empty() {
        match global.format {
            OutputFormat::Auto => {
                println!(
                    "No hoses match bore {} at the requested operating conditions.",
                    constraints.bore
                );
                if !global.quiet && !catalog.is_empty() {
                    println!();
                    println!("Bores in this catalog: {}", catalog.bores().join(", "));
                }
            }
            // Header-only output keeps machine formats parseable
            format => {
                let out = render_records(&[], format);
                if !out.is_empty() {
                    println!("{out}");
                }
            }
        }
        return Ok(());
    }

    if global.format != OutputFormat::Auto {
        println!("{}", render_records(&result.matches, global.format));
        return Ok(());
    }

    if !global.quiet {
        println!(
            "{} {} hose(s) match the requested operating conditions",
            style("✓").green(),
            result.len()
        );
    }
    if let Some(recommended) = result.recommended {
        println!();
        print_recommendation(recommended);
        println!();
    }
    println!("{}", render_records(&result.matches, OutputFormat::Auto));

    Ok(())
}

fn print_recommendation(record: &HoseRecord) {
    println!(
        "{} {}  {}",
        style("Recommended:").bold(),
        style(&record.id).cyan().bold(),
        record.name
    );
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
    if let Some(vacuum) = record.vacuum_bar {
        println!("  Vacuum rating:    {} Bar", format_num(vacuum));
    }
}
