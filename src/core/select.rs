//! Selection engine - constraint filtering and recommendation
//!
//! A pure function of (catalog, constraints): one linear scan, no state.
//! Empty results are valid answers, not errors.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::catalog::{Catalog, HoseRecord};

/// Operating constraints supplied per query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    /// Target bore designation, matched by exact string equality
    /// ("DN25" never matches "DN250")
    pub bore: String,

    /// Minimum acceptable rated working pressure, Bar
    pub min_pressure_bar: f64,

    /// Minimum acceptable maximum-temperature rating, degrees C
    pub min_temperature_c: f64,

    /// Medium keyword, matched case-insensitively as a substring of the name
    pub keyword: Option<String>,

    /// Explicit allow-list of series names, matched exactly
    pub series: Option<BTreeSet<String>>,
}

impl ConstraintSet {
    pub fn new(bore: impl Into<String>) -> Self {
        Self {
            bore: bore.into(),
            ..Self::default()
        }
    }

    /// True when the record satisfies every constraint (conjunction).
    pub fn matches(&self, record: &HoseRecord) -> bool {
        if record.bore != self.bore {
            return false;
        }
        if record.working_pressure_bar < self.min_pressure_bar {
            return false;
        }
        if record.max_temperature_c < self.min_temperature_c {
            return false;
        }
        if let Some(keyword) = &self.keyword {
            if !record
                .name
                .to_lowercase()
                .contains(&keyword.to_lowercase())
            {
                return false;
            }
        }
        if let Some(series) = &self.series {
            if !series.contains(&record.name) {
                return false;
            }
        }
        true
    }
}

/// Result of one query: the matching records in catalog order, plus the
/// recommended record if any matched.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult<'a> {
    pub matches: Vec<&'a HoseRecord>,
    pub recommended: Option<&'a HoseRecord>,
}

impl QueryResult<'_> {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Filter the catalog against the constraints and pick a recommendation.
///
/// The recommendation is the matched record with the smallest bend radius
/// (installability proxy: smaller bends easier). Ties go to the record
/// appearing first in catalog order; that tie-break is a documented part
/// of the contract, not an accident of sorting.
pub fn select<'a>(catalog: &'a Catalog, constraints: &ConstraintSet) -> QueryResult<'a> {
    let matches: Vec<&HoseRecord> = catalog
        .records()
        .iter()
        .filter(|r| constraints.matches(r))
        .collect();

    // Keeping the incumbent on '<=' means the earliest record wins ties
    let recommended = matches
        .iter()
        .copied()
        .fold(None::<&HoseRecord>, |best, candidate| match best {
            Some(b) if b.bend_radius_mm <= candidate.bend_radius_mm => Some(b),
            _ => Some(candidate),
        });

    QueryResult {
        matches,
        recommended,
    }
}
