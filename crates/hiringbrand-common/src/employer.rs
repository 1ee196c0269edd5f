//! Employers and the dimensions they are scored on.
//!
//! Scores arrive pre-computed from the report pipeline on a 0–10 scale.
//! Dimension sets are supplied alongside the employer list, never derived
//! from the employers' own score maps.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// Key of one evaluation axis, e.g. `compensation`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionId(String);

impl DimensionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DimensionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DimensionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Catalogue entry for a dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: DimensionId,
    pub label: String,
}

impl Dimension {
    fn new(id: &str, label: &str) -> Self {
        Self {
            id: DimensionId::new(id),
            label: label.to_string(),
        }
    }
}

/// The employer-brand dimensions reports are generated against.
pub fn default_dimensions() -> Vec<Dimension> {
    vec![
        Dimension::new("compensation", "Compensation & Benefits"),
        Dimension::new("culture", "Culture & Values"),
        Dimension::new("growth", "Career Growth"),
        Dimension::new("work_life_balance", "Work-Life Balance"),
        Dimension::new("leadership", "Leadership"),
        Dimension::new("technology", "Technology & Innovation"),
        Dimension::new("mission", "Mission & Purpose"),
    ]
}

/// Ids of [`default_dimensions`], in catalogue order.
pub fn default_dimension_ids() -> Vec<DimensionId> {
    default_dimensions().into_iter().map(|d| d.id).collect()
}

/// One company in a comparison: the target or a competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employer {
    pub name: String,

    /// Marks the subject company. Display ordering only.
    #[serde(default)]
    pub is_target: bool,

    /// Dimension id → score in [0, 10]. Missing dimensions are scored as the default.
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
}

impl Employer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_target: false,
            scores: BTreeMap::new(),
        }
    }

    pub fn target(mut self) -> Self {
        self.is_target = true;
        self
    }

    pub fn with_score(mut self, dimension: impl Into<String>, score: f64) -> Self {
        self.scores.insert(dimension.into(), score);
        self
    }

    /// Raw score for a dimension, if the employer supplied one.
    pub fn score(&self, dimension: &DimensionId) -> Option<f64> {
        self.scores.get(dimension.as_str()).copied()
    }
}

/// One entry per employer name, at the name's first position, carrying the
/// data of its last occurrence. Scores are keyed by name, so the last
/// occurrence is the one a score map describes.
pub fn distinct_by_name(employers: &[Employer]) -> Vec<&Employer> {
    let latest: HashMap<&str, &Employer> =
        employers.iter().map(|e| (e.name.as_str(), e)).collect();
    let mut seen = HashSet::new();
    employers
        .iter()
        .filter(|e| seen.insert(e.name.as_str()))
        .filter_map(|e| latest.get(e.name.as_str()).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogue_order() {
        let ids = default_dimension_ids();
        assert_eq!(ids.len(), 7);
        assert_eq!(ids[0].as_str(), "compensation");
        assert_eq!(ids[6].as_str(), "mission");
    }

    #[test]
    fn test_builder_and_lookup() {
        let acme = Employer::new("Acme").target().with_score("culture", 8.5);
        assert!(acme.is_target);
        assert_eq!(acme.score(&"culture".into()), Some(8.5));
        assert_eq!(acme.score(&"growth".into()), None);
    }

    #[test]
    fn test_dimension_id_is_transparent() {
        let json = serde_json::to_string(&DimensionId::new("growth")).unwrap();
        assert_eq!(json, "\"growth\"");
    }

    #[test]
    fn test_employer_defaults_when_deserialising() {
        let e: Employer = serde_json::from_str(r#"{"name":"Globex"}"#).unwrap();
        assert!(!e.is_target);
        assert!(e.scores.is_empty());
    }

    #[test]
    fn test_distinct_by_name_keeps_first_position_last_data() {
        let employers = vec![
            Employer::new("Dup").target().with_score("culture", 2.0),
            Employer::new("Other"),
            Employer::new("Dup").with_score("culture", 9.0),
        ];
        let distinct = distinct_by_name(&employers);
        let names: Vec<_> = distinct.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Dup", "Other"]);
        assert!(!distinct[0].is_target);
        assert_eq!(distinct[0].score(&"culture".into()), Some(9.0));
    }
}
