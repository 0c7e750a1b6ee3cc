//! Table formatting for catalog record lists
//!
//! One renderer shared by `select` and `list` so every command prints
//! records the same way. Terminal output goes through tabled; TSV/CSV/Id
//! stay single-line for pipability.

use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{escape_csv, format_num, format_opt, truncate_str};
use crate::cli::OutputFormat;
use crate::core::HoseRecord;

const HEADERS: [&str; 7] = [
    "ID",
    "Name",
    "Bore",
    "Pressure (Bar)",
    "Max Temp (C)",
    "Bend Radius (mm)",
    "Vacuum (Bar)",
];

fn row(record: &HoseRecord) -> [String; 7] {
    [
        record.id.clone(),
        record.name.clone(),
        record.bore.clone(),
        format_num(record.working_pressure_bar),
        format_num(record.max_temperature_c),
        format_num(record.bend_radius_mm),
        format_opt(record.vacuum_bar),
    ]
}

/// Render records in the requested format. `Auto` means a bordered
/// terminal table; `Json` is handled by callers (they serialize the whole
/// query result, not just the rows).
pub fn render_records(records: &[&HoseRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Auto => render_tabled(records, false),
        OutputFormat::Md => render_tabled(records, true),
        OutputFormat::Tsv => render_delimited(records, "\t", false),
        OutputFormat::Csv => render_delimited(records, ",", true),
        OutputFormat::Id | OutputFormat::Json => records
            .iter()
            .map(|r| r.id.clone())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_tabled(records: &[&HoseRecord], markdown: bool) -> String {
    let mut builder = Builder::default();
    builder.push_record(HEADERS);
    for record in records {
        let mut cells = row(record);
        cells[1] = truncate_str(&cells[1], 40);
        builder.push_record(cells);
    }
    let mut table = builder.build();
    if markdown {
        table.with(Style::markdown());
    } else {
        table.with(Style::sharp());
    }
    table.to_string()
}

fn render_delimited(records: &[&HoseRecord], sep: &str, csv_escape: bool) -> String {
    let mut out = String::new();
    out.push_str(&HEADERS.join(sep));
    for record in records {
        out.push('\n');
        let cells = row(record);
        let line: Vec<String> = cells
            .iter()
            .map(|c| if csv_escape { escape_csv(c) } else { c.clone() })
            .collect();
        out.push_str(&line.join(sep));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::record;

    #[test]
    fn test_tsv_has_header_and_one_line_per_record() {
        let a = record("A1", "DN25", 15.0, 100.0, 200.0);
        let b = record("A2", "DN25", 20.0, 120.0, 150.0);
        let out = render_records(&[&a, &b], OutputFormat::Tsv);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID\tName"));
        assert!(lines[1].starts_with("A1\t"));
    }

    #[test]
    fn test_csv_escapes_commas_in_names() {
        let mut a = record("A1", "DN25", 15.0, 100.0, 200.0);
        a.name = "Hose, food grade".into();
        let out = render_records(&[&a], OutputFormat::Csv);
        assert!(out.contains("\"Hose, food grade\""));
    }

    #[test]
    fn test_id_format_is_ids_only() {
        let a = record("A1", "DN25", 15.0, 100.0, 200.0);
        let b = record("A2", "DN25", 20.0, 120.0, 150.0);
        assert_eq!(render_records(&[&a, &b], OutputFormat::Id), "A1\nA2");
    }
}
