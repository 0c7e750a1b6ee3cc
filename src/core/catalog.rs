//! Catalog model - one hose specification row and the loaded collection

use serde::{Deserialize, Serialize};

/// One catalog row: the rated specifications of a single hose model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoseRecord {
    /// Catalog identifier, unique within a loaded catalog
    pub id: String,

    /// Product name / series
    pub name: String,

    /// Bore designation, a categorical label such as "DN25"
    pub bore: String,

    /// Rated continuous working pressure, Bar
    pub working_pressure_bar: f64,

    /// Maximum working temperature, degrees C (may be sub-zero)
    pub max_temperature_c: f64,

    /// Minimum bend radius, mm (smaller installs easier)
    pub bend_radius_mm: f64,

    /// Vacuum rating magnitude, Bar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacuum_bar: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_diameter_mm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_diameter_mm: Option<f64>,
}

/// An ordered, read-only collection of hose records.
///
/// Built once by the loader and never mutated afterwards; queries borrow
/// records from it. Row order is the source file order and is what the
/// recommendation tie-break refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    records: Vec<HoseRecord>,
}

impl Catalog {
    pub fn new(records: Vec<HoseRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[HoseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by exact identifier.
    pub fn get(&self, id: &str) -> Option<&HoseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Distinct bore designations, sorted; feeds pickers and `hst bores`.
    pub fn bores(&self) -> Vec<String> {
        let mut bores: Vec<String> = self.records.iter().map(|r| r.bore.clone()).collect();
        bores.sort();
        bores.dedup();
        bores
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a HoseRecord;
    type IntoIter = std::slice::Iter<'a, HoseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
pub(crate) fn record(id: &str, bore: &str, pressure: f64, temp: f64, bend: f64) -> HoseRecord {
    HoseRecord {
        id: id.to_string(),
        name: format!("{id} test hose"),
        bore: bore.to_string(),
        working_pressure_bar: pressure,
        max_temperature_c: temp,
        bend_radius_mm: bend,
        vacuum_bar: None,
        inner_diameter_mm: None,
        outer_diameter_mm: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bores_distinct_and_sorted() {
        let catalog = Catalog::new(vec![
            record("A1", "DN50", 10.0, 80.0, 300.0),
            record("A2", "DN25", 10.0, 80.0, 200.0),
            record("A3", "DN25", 10.0, 80.0, 150.0),
        ]);
        assert_eq!(catalog.bores(), vec!["DN25", "DN50"]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::new(vec![record("A1", "DN25", 10.0, 80.0, 200.0)]);
        assert_eq!(catalog.get("A1").map(|r| r.bore.as_str()), Some("DN25"));
        assert!(catalog.get("A2").is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.bores().is_empty());
    }
}
