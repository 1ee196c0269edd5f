//! Scoring and presentation policy for differentiation comparisons.
//!
//! Every field has a default, so an empty YAML document is a valid config.
//! Values here are product-tuned policy, not derived constants.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::comparison::{MAX_SCORE, MIN_SCORE};
use crate::error::{HiringBrandError, Result};

// ── Policy Constants ──────────────────────────────────────────────────────────

/// Weight of the profile-distance component.
pub const DISTANCE_WEIGHT: f64 = 0.4;
/// Weight of the intra-profile variance component.
pub const VARIANCE_WEIGHT: f64 = 0.3;
/// Weight of the strength-share component.
pub const STRENGTH_WEIGHT: f64 = 0.3;

/// Largest single-dimension deviation on a 0–10 scale (9² = 81 per dimension).
pub const MAX_DIMENSION_DEVIATION: f64 = 9.0;
/// Heuristic ceiling for intra-profile spread (4.5² = 20.25 per dimension).
/// Not a true bound: the variance component can exceed 100 before the final clamp.
pub const VARIANCE_CEILING: f64 = 4.5;

/// Margin over/under the group average that counts as a strength/weakness.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.5;
/// Score substituted for a missing dimension.
pub const DEFAULT_DIMENSION_SCORE: f64 = 5.0;

/// Minimum differentiation score for each tier label.
pub const HIGHLY_UNIQUE_THRESHOLD: u32 = 70;
pub const DISTINCTIVE_THRESHOLD: u32 = 50;
pub const MODERATE_THRESHOLD: u32 = 30;

/// Allowed drift of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Complete comparison configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Score formula weights and normalisation bases
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Tier label thresholds
    #[serde(default)]
    pub tiers: TierConfig,
}

// ── Scoring Configuration ─────────────────────────────────────────────────────

/// Weights and bases for the differentiation formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the distance from the group's average profile
    #[serde(default = "default_distance_weight")]
    pub distance_weight: f64,

    /// Weight of the spread within the employer's own profile
    #[serde(default = "default_variance_weight")]
    pub variance_weight: f64,

    /// Weight of the share of above-average dimensions
    #[serde(default = "default_strength_weight")]
    pub strength_weight: f64,

    /// Largest possible single-dimension deviation on the 0–10 scale
    #[serde(default = "default_max_dimension_deviation")]
    pub max_dimension_deviation: f64,

    /// Ceiling used to normalise intra-profile spread
    #[serde(default = "default_variance_ceiling")]
    pub variance_ceiling: f64,

    /// Margin over/under the group average that counts as a strength/weakness
    #[serde(default = "default_significance_threshold")]
    pub significance_threshold: f64,

    /// Score substituted for a dimension an employer has no value for
    #[serde(default = "default_dimension_score")]
    pub default_dimension_score: f64,
}

fn default_distance_weight() -> f64 { DISTANCE_WEIGHT }
fn default_variance_weight() -> f64 { VARIANCE_WEIGHT }
fn default_strength_weight() -> f64 { STRENGTH_WEIGHT }
fn default_max_dimension_deviation() -> f64 { MAX_DIMENSION_DEVIATION }
fn default_variance_ceiling() -> f64 { VARIANCE_CEILING }
fn default_significance_threshold() -> f64 { SIGNIFICANCE_THRESHOLD }
fn default_dimension_score() -> f64 { DEFAULT_DIMENSION_SCORE }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            distance_weight: default_distance_weight(),
            variance_weight: default_variance_weight(),
            strength_weight: default_strength_weight(),
            max_dimension_deviation: default_max_dimension_deviation(),
            variance_ceiling: default_variance_ceiling(),
            significance_threshold: default_significance_threshold(),
            default_dimension_score: default_dimension_score(),
        }
    }
}

// ── Tier Configuration ────────────────────────────────────────────────────────

/// Minimum differentiation score for each tier label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    #[serde(default = "default_highly_unique")]
    pub highly_unique: u32,

    #[serde(default = "default_distinctive")]
    pub distinctive: u32,

    #[serde(default = "default_moderate")]
    pub moderate: u32,
}

fn default_highly_unique() -> u32 { HIGHLY_UNIQUE_THRESHOLD }
fn default_distinctive() -> u32 { DISTINCTIVE_THRESHOLD }
fn default_moderate() -> u32 { MODERATE_THRESHOLD }

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            highly_unique: default_highly_unique(),
            distinctive: default_distinctive(),
            moderate: default_moderate(),
        }
    }
}

// ── Helper Methods ─────────────────────────────────────────────────────────────

impl ComparisonConfig {
    /// Load from YAML file
    pub fn from_yaml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load by extension: `.json` as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(path),
            _ => Self::from_yaml(path),
        }
    }

    /// Reject configs the formula cannot honour: weights that are negative,
    /// non-finite or do not sum to 1.0, non-positive bases, a negative
    /// threshold, a default score outside 0–10, or unordered tiers.
    pub fn validate(&self) -> Result<()> {
        let t = &self.tiers;
        if !(t.highly_unique >= t.distinctive && t.distinctive >= t.moderate) {
            return Err(HiringBrandError::Config(format!(
                "tier thresholds must be descending, got {}/{}/{}",
                t.highly_unique, t.distinctive, t.moderate
            )));
        }
        self.scoring.validate()
    }
}

impl ScoringConfig {
    pub fn weight_sum(&self) -> f64 {
        self.distance_weight + self.variance_weight + self.strength_weight
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("distance_weight", self.distance_weight),
            ("variance_weight", self.variance_weight),
            ("strength_weight", self.strength_weight),
        ];
        for (name, w) in weights {
            if !w.is_finite() || w < 0.0 {
                return Err(HiringBrandError::Config(format!(
                    "{name} must be a non-negative number, got {w}"
                )));
            }
        }
        if (self.weight_sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(HiringBrandError::Config(format!(
                "scoring weights must sum to 1.0, got {}",
                self.weight_sum()
            )));
        }

        // NaN fails every comparison, so test for the valid range
        let bases_ok = self.max_dimension_deviation.is_finite()
            && self.max_dimension_deviation > 0.0
            && self.variance_ceiling.is_finite()
            && self.variance_ceiling > 0.0;
        if !bases_ok {
            return Err(HiringBrandError::Config(
                "normalisation bases must be positive".to_string(),
            ));
        }
        if !(self.significance_threshold.is_finite() && self.significance_threshold >= 0.0) {
            return Err(HiringBrandError::Config(format!(
                "significance_threshold must be non-negative, got {}",
                self.significance_threshold
            )));
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.default_dimension_score) {
            return Err(HiringBrandError::Config(format!(
                "default_dimension_score must be within 0–10, got {}",
                self.default_dimension_score
            )));
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
