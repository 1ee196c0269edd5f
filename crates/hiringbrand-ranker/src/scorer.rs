//! Differentiation score computation.
//!
//! For each employer in a comparison group:
//!
//! D(e) = w_d · distance(e) + w_v · variance(e) + w_s · strengths(e)
//!
//! where `distance` is the Euclidean distance of the employer's profile from
//! the group's per-dimension average, `variance` is the spread of the profile
//! around the employer's own mean, and `strengths` is the share of dimensions
//! scored meaningfully above average. Each component is scaled to 0–100 and
//! the weighted sum is rounded and clamped to [0, 100].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use hiringbrand_common::{DimensionId, Employer, HiringBrandError, Result};

use crate::normalise::{clamp_score, euclidean_norm_to_percent, ratio_to_percent};
use crate::weights::{ScoringPolicy, MAX_DIFFERENTIATION, MIN_DIFFERENTIATION, NEUTRAL_SCORE};

/// Per-employer output of the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0–100
    pub differentiation_score: u32,
    /// Dimensions scored above the group average by more than the threshold
    pub strength_count: usize,
    /// Dimensions scored below the group average by more than the threshold
    pub weakness_count: usize,
}

impl ScoreResult {
    /// Result for an employer with nothing to be compared against.
    pub const NEUTRAL: ScoreResult = ScoreResult {
        differentiation_score: NEUTRAL_SCORE,
        strength_count: 0,
        weakness_count: 0,
    };
}

/// The score an employer has on a dimension, or `default` when it has none.
/// Every per-dimension read in this crate goes through here.
pub fn resolve_dimension_score(employer: &Employer, dimension: &DimensionId, default: f64) -> f64 {
    employer.score(dimension).unwrap_or(default)
}

/// Mean of the employer's own score map (not the shared dimension list).
/// An employer with no scores at all is treated as sitting at `default`.
fn own_mean(employer: &Employer, default: f64) -> f64 {
    if employer.scores.is_empty() {
        return default;
    }
    employer.scores.values().sum::<f64>() / employer.scores.len() as f64
}

/// Per-dimension averages aligned with `dimensions`.
fn average_vector(employers: &[Employer], dimensions: &[DimensionId], default: f64) -> Vec<f64> {
    dimensions
        .iter()
        .map(|dim| {
            if employers.is_empty() {
                return default;
            }
            let total: f64 = employers
                .iter()
                .map(|e| resolve_dimension_score(e, dim, default))
                .sum();
            total / employers.len() as f64
        })
        .collect()
}

/// Group average for each dimension, missing scores resolved to the policy default.
pub fn group_averages(
    employers: &[Employer],
    dimensions: &[DimensionId],
    policy: &ScoringPolicy,
) -> BTreeMap<DimensionId, f64> {
    dimensions
        .iter()
        .cloned()
        .zip(average_vector(employers, dimensions, policy.default_dimension_score))
        .collect()
}

/// Compute differentiation results with the default policy.
///
/// Fails only when `dimensions` is empty. Output is keyed by employer name;
/// if two employers share a name, the later one wins.
pub fn compute_differentiation(
    employers: &[Employer],
    dimensions: &[DimensionId],
) -> Result<BTreeMap<String, ScoreResult>> {
    compute_differentiation_with_policy(employers, dimensions, &ScoringPolicy::default())
}

/// Compute differentiation results under an explicit policy.
pub fn compute_differentiation_with_policy(
    employers: &[Employer],
    dimensions: &[DimensionId],
    policy: &ScoringPolicy,
) -> Result<BTreeMap<String, ScoreResult>> {
    if dimensions.is_empty() {
        return Err(HiringBrandError::EmptyDimensionSet);
    }

    if employers.len() <= 1 {
        return Ok(employers
            .iter()
            .map(|e| (e.name.clone(), ScoreResult::NEUTRAL))
            .collect());
    }

    let default = policy.default_dimension_score;
    let averages = average_vector(employers, dimensions, default);
    let n = dimensions.len();

    let mut results = BTreeMap::new();
    for employer in employers {
        let mean = own_mean(employer, default);

        let mut distance_sum = 0.0;
        let mut variance_sum = 0.0;
        let mut strength_count = 0;
        let mut weakness_count = 0;

        for (dim, &avg) in dimensions.iter().zip(&averages) {
            let score = resolve_dimension_score(employer, dim, default);

            distance_sum += (score - avg).powi(2);
            variance_sum += (score - mean).powi(2);

            if score > avg + policy.significance_threshold {
                strength_count += 1;
            }
            if score < avg - policy.significance_threshold {
                weakness_count += 1;
            }
        }

        let distance_norm =
            euclidean_norm_to_percent(distance_sum, policy.max_dimension_deviation, n);
        let variance_norm = euclidean_norm_to_percent(variance_sum, policy.variance_ceiling, n);
        let strength_norm = ratio_to_percent(strength_count, n);

        let raw = distance_norm * policy.distance_weight
            + variance_norm * policy.variance_weight
            + strength_norm * policy.strength_weight;

        results.insert(
            employer.name.clone(),
            ScoreResult {
                differentiation_score: clamp_score(raw, MIN_DIFFERENTIATION, MAX_DIFFERENTIATION),
                strength_count,
                weakness_count,
            },
        );
    }

    Ok(results)
}
