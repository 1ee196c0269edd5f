//! Ranking and tier labels for differentiation results, plus the per-dimension
//! gap view used to list an employer's strengths and weaknesses.
//!
//! Tier thresholds are presentation policy; changing them never changes a score.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use hiringbrand_common::{distinct_by_name, DimensionId, Employer, TierConfig};

use crate::scorer::{resolve_dimension_score, ScoreResult};
use crate::weights::ScoringPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferentiationTier {
    HighlyUnique,
    Distinctive,
    Moderate,
    Generic,
}

impl DifferentiationTier {
    pub fn label(&self) -> &'static str {
        match self {
            DifferentiationTier::HighlyUnique => "Highly Unique",
            DifferentiationTier::Distinctive => "Distinctive",
            DifferentiationTier::Moderate => "Moderate",
            DifferentiationTier::Generic => "Generic",
        }
    }
}

/// Minimum score for each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub highly_unique: u32,
    pub distinctive: u32,
    pub moderate: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self::from_config(&TierConfig::default())
    }
}

impl TierThresholds {
    pub fn from_config(config: &TierConfig) -> Self {
        Self {
            highly_unique: config.highly_unique,
            distinctive: config.distinctive,
            moderate: config.moderate,
        }
    }

    pub fn tier_for(&self, score: u32) -> DifferentiationTier {
        if score >= self.highly_unique {
            DifferentiationTier::HighlyUnique
        } else if score >= self.distinctive {
            DifferentiationTier::Distinctive
        } else if score >= self.moderate {
            DifferentiationTier::Moderate
        } else {
            DifferentiationTier::Generic
        }
    }
}

/// One row of a ranked comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEmployer {
    /// 1-based position
    pub rank: usize,
    pub name: String,
    pub is_target: bool,
    #[serde(flatten)]
    pub result: ScoreResult,
    pub tier: DifferentiationTier,
    pub tier_label: String,
}

/// Order employers by differentiation score, highest first.
///
/// Ties keep input order. A name that appears more than once is listed once,
/// at its first position, with the data of its last occurrence, matching the
/// result the scorer kept for it.
pub fn rank_employers(
    employers: &[Employer],
    results: &BTreeMap<String, ScoreResult>,
    thresholds: &TierThresholds,
) -> Vec<RankedEmployer> {
    let mut rows: Vec<(&Employer, ScoreResult)> = distinct_by_name(employers)
        .into_iter()
        .filter_map(|e| results.get(&e.name).map(|r| (e, *r)))
        .collect();

    // sort_by is stable
    rows.sort_by(|a, b| b.1.differentiation_score.cmp(&a.1.differentiation_score));

    rows.into_iter()
        .enumerate()
        .map(|(i, (employer, result))| {
            let tier = thresholds.tier_for(result.differentiation_score);
            RankedEmployer {
                rank: i + 1,
                name: employer.name.clone(),
                is_target: employer.is_target,
                result,
                tier,
                tier_label: tier.label().to_string(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionStanding {
    Strength,
    Weakness,
    Parity,
}

/// How one employer sits against the group on one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionGap {
    pub dimension: DimensionId,
    pub score: f64,
    pub group_average: f64,
    /// `score - group_average`
    pub delta: f64,
    pub standing: DimensionStanding,
}

/// Rank an employer's dimensions by how far they sit above the group average.
/// Largest positive gap first; ties keep dimension order.
pub fn rank_dimensions(
    employer: &Employer,
    dimensions: &[DimensionId],
    averages: &BTreeMap<DimensionId, f64>,
    policy: &ScoringPolicy,
) -> Vec<DimensionGap> {
    let default = policy.default_dimension_score;
    let mut gaps: Vec<DimensionGap> = dimensions
        .iter()
        .map(|dim| {
            let score = resolve_dimension_score(employer, dim, default);
            let group_average = averages.get(dim).copied().unwrap_or(default);
            let delta = score - group_average;
            let standing = if delta > policy.significance_threshold {
                DimensionStanding::Strength
            } else if delta < -policy.significance_threshold {
                DimensionStanding::Weakness
            } else {
                DimensionStanding::Parity
            };
            DimensionGap {
                dimension: dim.clone(),
                score,
                group_average,
                delta,
                standing,
            }
        })
        .collect();

    gaps.sort_by(|a, b| b.delta.total_cmp(&a.delta));
    gaps
}
