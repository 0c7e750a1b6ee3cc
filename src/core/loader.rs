//! Catalog loader - reads a delimited catalog file into a [`Catalog`]
//!
//! Tolerates the quirks of real supplier exports (UTF-8 BOM, messy headers,
//! comma or semicolon delimiters) and fails loudly on everything else:
//! missing required columns, ragged rows, unparseable numbers, duplicate
//! identifiers. A `Catalog` that loads is always valid.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use crate::core::catalog::{Catalog, HoseRecord};
use crate::core::schema::{normalize_header, resolve_alias, Column};

/// Errors raised while loading a catalog. None are retried; the backing
/// file is static, so every one of these needs a human to fix the source.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog source {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Required columns absent after header normalization. Always carries
    /// the full detected column list; malformed headers are the dominant
    /// real-world failure mode and "column not found" alone is useless.
    #[error("catalog is missing required columns [{}]; columns found: [{}]", .missing.join(", "), .found.join(", "))]
    Schema {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("malformed row {row}: {detail}")]
    Parse { row: usize, detail: String },

    #[error("row {row}, column '{column}': invalid number '{value}'")]
    Value {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}, column '{column}': negative value {value} not allowed")]
    Negative {
        row: usize,
        column: &'static str,
        value: f64,
    },

    #[error("row {row}: identifier is empty")]
    EmptyId { row: usize },

    #[error("row {row}: duplicate identifier '{id}'")]
    DuplicateId { row: usize, id: String },
}

/// Field delimiter of the catalog source.
///
/// Excel CSV exports use a comma or a semicolon depending on the locale
/// that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
        }
    }

    /// Guess the delimiter from the header line. Semicolon wins only when
    /// strictly more frequent; comma is the common case and the fallback.
    pub fn detect(header_line: &str) -> Self {
        let semicolons = header_line.matches(';').count();
        let commas = header_line.matches(',').count();
        if semicolons > commas {
            Delimiter::Semicolon
        } else {
            Delimiter::Comma
        }
    }
}

/// Load a catalog file, auto-detecting the delimiter.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    load_with(path, None)
}

/// Load a catalog file with an explicitly configured delimiter.
pub fn load_with(path: &Path, delimiter: Option<Delimiter>) -> Result<Catalog, CatalogError> {
    let data = fs::read_to_string(path).map_err(|source| CatalogError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&data, delimiter)
}

/// Parse catalog data already in memory.
pub fn from_str(data: &str, delimiter: Option<Delimiter>) -> Result<Catalog, CatalogError> {
    // utf-8-sig: Excel prepends a BOM to CSV exports
    let data = data.strip_prefix('\u{feff}').unwrap_or(data);
    let delimiter =
        delimiter.unwrap_or_else(|| Delimiter::detect(data.lines().next().unwrap_or("")));

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .from_reader(data.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| csv_parse_error(e, 1))?
        .clone();
    let schema = resolve_schema(&headers)?;

    let mut records = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (i, result) in reader.records().enumerate() {
        // 1-based row numbers, header is row 1
        let row = i + 2;
        let record = result.map_err(|e| csv_parse_error(e, row))?;
        let hose = parse_record(&record, &schema, row)?;

        if hose.id.is_empty() {
            return Err(CatalogError::EmptyId { row });
        }
        if !seen_ids.insert(hose.id.clone()) {
            return Err(CatalogError::DuplicateId { row, id: hose.id });
        }
        records.push(hose);
    }

    Ok(Catalog::new(records))
}

/// Where each canonical column lives in the source.
struct SchemaMap {
    indices: HashMap<Column, usize>,
}

fn resolve_schema(headers: &StringRecord) -> Result<SchemaMap, CatalogError> {
    let mut indices: HashMap<Column, usize> = HashMap::new();
    let mut found = Vec::with_capacity(headers.len());

    for (idx, raw) in headers.iter().enumerate() {
        let normalized = normalize_header(raw);
        if let Some(column) = resolve_alias(&normalized) {
            // First occurrence wins if a column appears twice
            indices.entry(column).or_insert(idx);
        }
        found.push(normalized);
    }

    let missing: Vec<String> = Column::REQUIRED
        .iter()
        .filter(|c| !indices.contains_key(c))
        .map(|c| c.canonical().to_string())
        .collect();

    if missing.is_empty() {
        Ok(SchemaMap { indices })
    } else {
        Err(CatalogError::Schema { missing, found })
    }
}

fn parse_record(
    record: &StringRecord,
    schema: &SchemaMap,
    row: usize,
) -> Result<HoseRecord, CatalogError> {
    Ok(HoseRecord {
        id: text(record, schema, Column::Id),
        name: text(record, schema, Column::Name),
        bore: text(record, schema, Column::Bore),
        working_pressure_bar: number(record, schema, Column::WorkingPressure, row)?,
        max_temperature_c: number(record, schema, Column::MaxTemperature, row)?,
        bend_radius_mm: number(record, schema, Column::BendRadius, row)?,
        vacuum_bar: optional_number(record, schema, Column::Vacuum, row)?,
        inner_diameter_mm: optional_number(record, schema, Column::InnerDiameter, row)?,
        outer_diameter_mm: optional_number(record, schema, Column::OuterDiameter, row)?,
    })
}

fn text(record: &StringRecord, schema: &SchemaMap, column: Column) -> String {
    schema
        .indices
        .get(&column)
        .and_then(|&idx| record.get(idx))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn number(
    record: &StringRecord,
    schema: &SchemaMap,
    column: Column,
    row: usize,
) -> Result<f64, CatalogError> {
    let raw = text(record, schema, column);
    let value = raw.parse::<f64>().map_err(|_| CatalogError::Value {
        row,
        column: column.canonical(),
        value: raw.clone(),
    })?;
    check_sign(value, column, row)?;
    Ok(value)
}

fn optional_number(
    record: &StringRecord,
    schema: &SchemaMap,
    column: Column,
    row: usize,
) -> Result<Option<f64>, CatalogError> {
    let raw = text(record, schema, column);
    if raw.is_empty() {
        return Ok(None);
    }
    let value = raw.parse::<f64>().map_err(|_| CatalogError::Value {
        row,
        column: column.canonical(),
        value: raw.clone(),
    })?;
    check_sign(value, column, row)?;
    Ok(Some(value))
}

/// Temperature may be sub-zero; every other numeric column may not.
fn check_sign(value: f64, column: Column, row: usize) -> Result<(), CatalogError> {
    if value < 0.0 && column != Column::MaxTemperature {
        return Err(CatalogError::Negative {
            row,
            column: column.canonical(),
            value,
        });
    }
    Ok(())
}

fn csv_parse_error(error: csv::Error, row: usize) -> CatalogError {
    let detail = match error.kind() {
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("expected {expected_len} fields, found {len}")
        }
        _ => error.to_string(),
    };
    CatalogError::Parse { row, detail }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_CSV: &str = "\
编号,名称,通径,工作压力（Bar）,最高温度（℃）,弯曲半径（mm）,真空度（Bar）
A1,食品级硅胶软管,DN25,15,100,200,0.9
A2,耐油橡胶软管,DN25,20,120,150,
A3,蒸汽软管,DN50,10,-40,300,0.8
";

    #[test]
    fn test_load_chinese_headers() {
        let catalog = from_str(CATALOG_CSV, None).unwrap();
        assert_eq!(catalog.len(), 3);

        let a1 = catalog.get("A1").unwrap();
        assert_eq!(a1.bore, "DN25");
        assert_eq!(a1.working_pressure_bar, 15.0);
        assert_eq!(a1.vacuum_bar, Some(0.9));

        let a2 = catalog.get("A2").unwrap();
        assert_eq!(a2.vacuum_bar, None);
    }

    #[test]
    fn test_load_tolerates_leading_bom() {
        let data = format!("\u{feff}{CATALOG_CSV}");
        let catalog = from_str(&data, None).unwrap();
        assert_eq!(catalog.len(), 3);
        // BOM must not leak into the first header
        assert!(catalog.get("A1").is_some());
    }

    #[test]
    fn test_load_semicolon_delimiter_detected() {
        let data = "id;name;bore;working pressure (bar);max temperature (c);bend radius (mm)\n\
                    B1;PVC suction hose;DN25;8;60;180\n";
        let catalog = from_str(data, None).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("B1").unwrap().bend_radius_mm, 180.0);
    }

    #[test]
    fn test_load_explicit_delimiter_overrides_detection() {
        // One comma inside a name would fool naive counting per row, but the
        // header line here is unambiguous either way; force semicolon.
        let data = "id;name;bore;pressure;temperature;bend radius\n\
                    B1;Hose, food grade;DN25;8;60;180\n";
        let catalog = from_str(data, Some(Delimiter::Semicolon)).unwrap();
        assert_eq!(catalog.get("B1").unwrap().name, "Hose, food grade");
    }

    #[test]
    fn test_missing_pressure_column_is_schema_error() {
        let data = "编号,名称,通径,最高温度（℃）,弯曲半径（mm）\nA1,x,DN25,100,200\n";
        let err = from_str(data, None).unwrap_err();
        match err {
            CatalogError::Schema { missing, found } => {
                assert_eq!(missing, vec!["working_pressure_bar".to_string()]);
                assert!(found.contains(&"通径".to_string()));
                assert_eq!(found.len(), 5);
            }
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_schema_error_message_names_missing_and_found() {
        let data = "name,bore\nx,DN25\n";
        let err = from_str(data, None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("id"));
        assert!(message.contains("bend_radius_mm"));
        assert!(message.contains("columns found"));
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let data = "id,name,bore,working pressure,maximum temperature,bend radius\n\
                    A1,x,DN25,15,100,200\n\
                    A2,y,DN25,20\n";
        let err = from_str(data, None).unwrap_err();
        match err {
            CatalogError::Parse { row, .. } => assert_eq!(row, 3),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_number_is_value_error() {
        let data = "id,name,bore,working pressure,maximum temperature,bend radius\n\
                    A1,x,DN25,high,100,200\n";
        let err = from_str(data, None).unwrap_err();
        match err {
            CatalogError::Value { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "working_pressure_bar");
                assert_eq!(value, "high");
            }
            other => panic!("expected Value error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_pressure_rejected_negative_temperature_allowed() {
        let data = "id,name,bore,working pressure,maximum temperature,bend radius\n\
                    A1,x,DN25,-5,100,200\n";
        assert!(matches!(
            from_str(data, None).unwrap_err(),
            CatalogError::Negative { column: "working_pressure_bar", .. }
        ));

        let data = "id,name,bore,working pressure,maximum temperature,bend radius\n\
                    A1,x,DN25,5,-40,200\n";
        let catalog = from_str(data, None).unwrap();
        assert_eq!(catalog.get("A1").unwrap().max_temperature_c, -40.0);
    }

    #[test]
    fn test_duplicate_and_empty_ids_rejected() {
        let data = "id,name,bore,working pressure,maximum temperature,bend radius\n\
                    A1,x,DN25,15,100,200\n\
                    A1,y,DN25,20,120,150\n";
        assert!(matches!(
            from_str(data, None).unwrap_err(),
            CatalogError::DuplicateId { row: 3, .. }
        ));

        let data = "id,name,bore,working pressure,maximum temperature,bend radius\n\
                    ,x,DN25,15,100,200\n";
        assert!(matches!(
            from_str(data, None).unwrap_err(),
            CatalogError::EmptyId { row: 2 }
        ));
    }

    #[test]
    fn test_headers_only_is_valid_empty_catalog() {
        let data = "id,name,bore,working pressure,maximum temperature,bend radius\n";
        let catalog = from_str(data, None).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_load_error() {
        let err = load(Path::new("/nonexistent/hose-catalog.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Load { .. }));
    }
}
