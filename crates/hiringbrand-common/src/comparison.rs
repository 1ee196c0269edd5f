//! Comparison sets: a target employer, its competitors, and the dimension set
//! they are compared on.
//!
//! Comparisons are read from YAML or JSON files exported from stored reports.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::employer::{default_dimension_ids, distinct_by_name, DimensionId, Employer};
use crate::error::{HiringBrandError, Result};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// One employer comparison as stored alongside a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Report this comparison belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    /// Shared dimension set. `None` means the default catalogue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<DimensionId>>,

    pub employers: Vec<Employer>,
}

impl Comparison {
    pub fn new(employers: Vec<Employer>) -> Self {
        Self {
            report_id: None,
            dimensions: None,
            employers,
        }
    }

    pub fn with_dimensions(mut self, dimensions: Vec<DimensionId>) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn with_report_id(mut self, id: impl Into<String>) -> Self {
        self.report_id = Some(id.into());
        self
    }

    /// Dimension set to score against.
    pub fn resolved_dimensions(&self) -> Vec<DimensionId> {
        match &self.dimensions {
            Some(dims) => dims.clone(),
            None => default_dimension_ids(),
        }
    }

    /// The first employer flagged as target, if any. A repeated name counts
    /// as the employer given last under that name.
    pub fn target(&self) -> Option<&Employer> {
        distinct_by_name(&self.employers)
            .into_iter()
            .find(|e| e.is_target)
    }

    /// Check the input contract at the boundary: non-blank names, an explicit
    /// dimension list is non-empty, and every score is finite and within 0–10.
    pub fn validate(&self) -> Result<()> {
        if matches!(&self.dimensions, Some(d) if d.is_empty()) {
            return Err(HiringBrandError::EmptyDimensionSet);
        }

        for employer in &self.employers {
            if employer.name.trim().is_empty() {
                return Err(HiringBrandError::InvalidEmployer(
                    "employer name must not be blank".to_string(),
                ));
            }
            for (dimension, &value) in &employer.scores {
                if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                    return Err(HiringBrandError::InvalidScore {
                        employer: employer.name.clone(),
                        dimension: dimension.clone(),
                        value,
                    });
                }
            }
        }

        let targets = distinct_by_name(&self.employers)
            .iter()
            .filter(|e| e.is_target)
            .count();
        if targets > 1 {
            tracing::warn!(
                targets,
                "comparison flags more than one target employer; the first is used"
            );
        }

        Ok(())
    }

    /// Load from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a file, choosing the format by extension (`.json`, else YAML).
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Sample comparison used by `hiringbrand init` and the docs.
    pub fn sample() -> Self {
        let employer = |name: &str, scores: [f64; 7]| {
            default_dimension_ids()
                .into_iter()
                .zip(scores)
                .fold(Employer::new(name), |e, (dim, s)| {
                    e.with_score(dim.as_str(), s)
                })
        };

        Self::new(vec![
            employer("Acme Robotics", [7.5, 8.0, 8.5, 6.0, 7.0, 9.0, 8.0]).target(),
            employer("Globex", [8.0, 6.0, 6.5, 5.5, 6.0, 7.0, 5.0]),
            employer("Initech", [6.0, 5.0, 5.0, 7.0, 5.5, 5.0, 4.5]),
            employer("Umbrella Corp", [9.0, 4.0, 6.0, 4.0, 5.0, 8.0, 3.0]),
        ])
        .with_report_id("acme-robotics-sample")
    }
}
