//! Catalog column schema - canonical columns, header normalization, and the
//! alias table mapping real-world header spellings to canonical names.
//!
//! Catalog files come from Excel exports with inconsistent headers: BOM
//! prefixes, stray whitespace, embedded newlines, Chinese or English column
//! names, full-width or ASCII parentheses. Normalization plus an explicit
//! alias table keeps that tolerance reproducible and testable instead of
//! scattering string replacements through the loader.

/// Canonical catalog columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Name,
    Bore,
    WorkingPressure,
    MaxTemperature,
    BendRadius,
    Vacuum,
    InnerDiameter,
    OuterDiameter,
}

impl Column {
    /// Columns that must be present for a catalog to load.
    pub const REQUIRED: [Column; 6] = [
        Column::Id,
        Column::Name,
        Column::Bore,
        Column::WorkingPressure,
        Column::MaxTemperature,
        Column::BendRadius,
    ];

    /// Canonical field name used in diagnostics and machine output.
    pub fn canonical(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::Bore => "bore",
            Column::WorkingPressure => "working_pressure_bar",
            Column::MaxTemperature => "max_temperature_c",
            Column::BendRadius => "bend_radius_mm",
            Column::Vacuum => "vacuum_bar",
            Column::InnerDiameter => "inner_diameter_mm",
            Column::OuterDiameter => "outer_diameter_mm",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

/// Known header spellings, already in normalized form (lowercased, trimmed).
///
/// Covers the Chinese headers of Excel catalog exports and the English
/// synonyms seen in supplier spreadsheets, with both full-width and
/// ASCII parentheses.
const ALIASES: &[(&str, Column)] = &[
    // Identifier
    ("id", Column::Id),
    ("identifier", Column::Id),
    ("code", Column::Id),
    ("part number", Column::Id),
    ("编号", Column::Id),
    // Name / series
    ("name", Column::Name),
    ("series", Column::Name),
    ("product name", Column::Name),
    ("名称", Column::Name),
    ("系列", Column::Name),
    // Bore designation
    ("bore", Column::Bore),
    ("dn", Column::Bore),
    ("bore designation", Column::Bore),
    ("nominal diameter", Column::Bore),
    ("通径", Column::Bore),
    // Working pressure
    ("working pressure", Column::WorkingPressure),
    ("working pressure (bar)", Column::WorkingPressure),
    ("pressure", Column::WorkingPressure),
    ("pressure (bar)", Column::WorkingPressure),
    ("rated pressure", Column::WorkingPressure),
    ("max working pressure", Column::WorkingPressure),
    ("工作压力（bar）", Column::WorkingPressure),
    ("工作压力(bar)", Column::WorkingPressure),
    ("工作压力", Column::WorkingPressure),
    // Maximum temperature
    ("maximum temperature", Column::MaxTemperature),
    ("max temperature", Column::MaxTemperature),
    ("max temperature (c)", Column::MaxTemperature),
    ("maximum working temperature", Column::MaxTemperature),
    ("max working temperature", Column::MaxTemperature),
    ("temperature", Column::MaxTemperature),
    ("最高温度（℃）", Column::MaxTemperature),
    ("最高温度(℃)", Column::MaxTemperature),
    ("最高温度", Column::MaxTemperature),
    ("最高工作温度（℃）", Column::MaxTemperature),
    ("最高工作温度", Column::MaxTemperature),
    // Bend radius
    ("bend radius", Column::BendRadius),
    ("bend radius (mm)", Column::BendRadius),
    ("min bend radius", Column::BendRadius),
    ("minimum bend radius", Column::BendRadius),
    ("弯曲半径（mm）", Column::BendRadius),
    ("弯曲半径(mm)", Column::BendRadius),
    ("弯曲半径", Column::BendRadius),
    // Vacuum rating
    ("vacuum", Column::Vacuum),
    ("vacuum (bar)", Column::Vacuum),
    ("vacuum rating", Column::Vacuum),
    ("真空度（bar）", Column::Vacuum),
    ("真空度(bar)", Column::Vacuum),
    ("真空度", Column::Vacuum),
    // Inner / outer diameter
    ("inner diameter", Column::InnerDiameter),
    ("inner diameter (mm)", Column::InnerDiameter),
    ("内径（mm）", Column::InnerDiameter),
    ("内径(mm)", Column::InnerDiameter),
    ("内径", Column::InnerDiameter),
    ("outer diameter", Column::OuterDiameter),
    ("outer diameter (mm)", Column::OuterDiameter),
    ("od", Column::OuterDiameter),
    ("外径（mm）", Column::OuterDiameter),
    ("外径(mm)", Column::OuterDiameter),
    ("外径", Column::OuterDiameter),
];

/// Normalize a raw header cell: strip BOM characters, strip embedded
/// CR/LF, trim surrounding whitespace, lowercase.
///
/// Idempotent: normalizing an already-normalized header is a no-op.
pub fn normalize_header(raw: &str) -> String {
    raw.replace('\u{feff}', "")
        .replace(['\r', '\n'], "")
        .trim()
        .to_lowercase()
}

/// Resolve a normalized header to its canonical column, if known.
pub fn resolve_alias(normalized: &str) -> Option<Column> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|&(_, col)| col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_bom_whitespace_and_newlines() {
        assert_eq!(normalize_header("\u{feff}编号"), "编号");
        assert_eq!(normalize_header("  Bend Radius (mm)\n"), "bend radius (mm)");
        assert_eq!(normalize_header("working\r\npressure"), "workingpressure");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = "\u{feff}  Max Working Temperature \n";
        let once = normalize_header(raw);
        assert_eq!(normalize_header(&once), once);
    }

    #[test]
    fn test_resolve_chinese_headers() {
        assert_eq!(resolve_alias("编号"), Some(Column::Id));
        assert_eq!(resolve_alias("通径"), Some(Column::Bore));
        assert_eq!(resolve_alias("工作压力（bar）"), Some(Column::WorkingPressure));
        assert_eq!(resolve_alias("最高温度（℃）"), Some(Column::MaxTemperature));
        assert_eq!(resolve_alias("弯曲半径（mm）"), Some(Column::BendRadius));
    }

    #[test]
    fn test_resolve_english_synonyms() {
        assert_eq!(
            resolve_alias("maximum working temperature"),
            Some(Column::MaxTemperature)
        );
        assert_eq!(resolve_alias("dn"), Some(Column::Bore));
        assert_eq!(resolve_alias("series"), Some(Column::Name));
        assert_eq!(resolve_alias("no-such-column"), None);
    }

    #[test]
    fn test_aliases_are_already_normalized() {
        for (alias, _) in ALIASES {
            assert_eq!(&normalize_header(alias), alias, "alias not normalized: {alias}");
        }
    }
}
