//! Policy constants for differentiation scoring.
//!
//! These are product-tuned values, not derivations. Change them through
//! [`ScoringPolicy`] (or `ComparisonConfig`) rather than inline.

use hiringbrand_common::ScoringConfig;
use serde::{Deserialize, Serialize};

pub use hiringbrand_common::comparison_config::{
    DEFAULT_DIMENSION_SCORE, DISTANCE_WEIGHT, MAX_DIMENSION_DEVIATION, SIGNIFICANCE_THRESHOLD,
    STRENGTH_WEIGHT, VARIANCE_CEILING, VARIANCE_WEIGHT, WEIGHT_SUM_TOLERANCE,
};

/// Score every employer gets when there is nothing to compare against.
pub const NEUTRAL_SCORE: u32 = 50;

/// Score range after clamping.
pub const MIN_DIFFERENTIATION: u32 = 0;
pub const MAX_DIFFERENTIATION: u32 = 100;

/// Full set of tunables used by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub distance_weight: f64,
    pub variance_weight: f64,
    pub strength_weight: f64,
    pub max_dimension_deviation: f64,
    pub variance_ceiling: f64,
    pub significance_threshold: f64,
    pub default_dimension_score: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            distance_weight: DISTANCE_WEIGHT,
            variance_weight: VARIANCE_WEIGHT,
            strength_weight: STRENGTH_WEIGHT,
            max_dimension_deviation: MAX_DIMENSION_DEVIATION,
            variance_ceiling: VARIANCE_CEILING,
            significance_threshold: SIGNIFICANCE_THRESHOLD,
            default_dimension_score: DEFAULT_DIMENSION_SCORE,
        }
    }
}

impl ScoringPolicy {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            distance_weight: config.distance_weight,
            variance_weight: config.variance_weight,
            strength_weight: config.strength_weight,
            max_dimension_deviation: config.max_dimension_deviation,
            variance_ceiling: config.variance_ceiling,
            significance_threshold: config.significance_threshold,
            default_dimension_score: config.default_dimension_score,
        }
    }

    fn weight_sum(&self) -> f64 {
        self.distance_weight + self.variance_weight + self.strength_weight
    }

    /// Weights sum to ~1.0 and normalisation bases are positive.
    pub fn validate(&self) -> bool {
        (self.weight_sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
            && self.max_dimension_deviation > 0.0
            && self.variance_ceiling > 0.0
    }

    /// Renormalise weights so they sum to 1.0
    pub fn normalise(&mut self) {
        let sum = self.weight_sum();
        if sum > 0.0 {
            self.distance_weight /= sum;
            self.variance_weight /= sum;
            self.strength_weight /= sum;
        }
    }
}
