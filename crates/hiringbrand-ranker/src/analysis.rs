//! One-call analysis of a stored comparison: scores, ranking, group profile,
//! and the target employer's dimension gaps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use hiringbrand_common::{Comparison, ComparisonConfig, DimensionId, Result};

use crate::ranking::{rank_dimensions, rank_employers, DimensionGap, RankedEmployer, TierThresholds};
use crate::scorer::{compute_differentiation_with_policy, group_averages};
use crate::weights::ScoringPolicy;

/// Everything a report view needs to render the differentiation section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    pub dimensions: Vec<DimensionId>,
    pub group_averages: BTreeMap<DimensionId, f64>,
    pub ranking: Vec<RankedEmployer>,
    /// Name of the target employer, if one is flagged
    pub target: Option<String>,
    /// Target's dimensions, largest gap over the group first
    pub target_gaps: Vec<DimensionGap>,
}

impl ComparisonAnalysis {
    /// Ranking row of the target employer.
    pub fn target_row(&self) -> Option<&RankedEmployer> {
        self.ranking.iter().find(|r| r.is_target)
    }
}

/// Score and rank a comparison under the given configuration.
pub fn analyse_comparison(
    comparison: &Comparison,
    config: &ComparisonConfig,
) -> Result<ComparisonAnalysis> {
    config.validate()?;

    let policy = ScoringPolicy::from_config(&config.scoring);
    let thresholds = TierThresholds::from_config(&config.tiers);
    let dimensions = comparison.resolved_dimensions();

    let results = compute_differentiation_with_policy(&comparison.employers, &dimensions, &policy)?;
    let averages = group_averages(&comparison.employers, &dimensions, &policy);
    let ranking = rank_employers(&comparison.employers, &results, &thresholds);

    let target = comparison.target();
    let target_gaps = target
        .map(|t| rank_dimensions(t, &dimensions, &averages, &policy))
        .unwrap_or_default();

    tracing::debug!(
        report_id = comparison.report_id.as_deref().unwrap_or("-"),
        employers = comparison.employers.len(),
        dimensions = dimensions.len(),
        "differentiation computed"
    );

    Ok(ComparisonAnalysis {
        report_id: comparison.report_id.clone(),
        dimensions,
        group_averages: averages,
        ranking,
        target: target.map(|t| t.name.clone()),
        target_gaps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiringbrand_common::{Employer, HiringBrandError};

    #[test]
    fn test_sample_analysis() {
        let analysis =
            analyse_comparison(&Comparison::sample(), &ComparisonConfig::default()).unwrap();
        assert_eq!(analysis.ranking.len(), 4);
        assert_eq!(analysis.dimensions.len(), 7);
        assert_eq!(analysis.target.as_deref(), Some("Acme Robotics"));
        assert_eq!(analysis.target_gaps.len(), 7);
        assert!(analysis.target_row().is_some());
        let scores: Vec<u32> = analysis
            .ranking
            .iter()
            .map(|r| r.result.differentiation_score)
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_no_target_means_no_gaps() {
        let comparison = Comparison::new(vec![Employer::new("A"), Employer::new("B")]);
        let analysis = analyse_comparison(&comparison, &ComparisonConfig::default()).unwrap();
        assert!(analysis.target.is_none());
        assert!(analysis.target_gaps.is_empty());
    }

    #[test]
    fn test_empty_dimensions_propagate() {
        let comparison = Comparison::new(vec![Employer::new("A")]).with_dimensions(vec![]);
        let err = analyse_comparison(&comparison, &ComparisonConfig::default()).unwrap_err();
        assert!(matches!(err, HiringBrandError::EmptyDimensionSet));
    }

    #[test]
    fn test_duplicate_name_resolves_to_last_occurrence() {
        let config = ComparisonConfig::default();

        let comparison = Comparison::new(vec![
            Employer::new("Dup").target().with_score("culture", 2.0),
            Employer::new("Other"),
            Employer::new("Dup").with_score("culture", 9.0),
        ]);
        let analysis = analyse_comparison(&comparison, &config).unwrap();
        assert!(analysis.target.is_none());
        assert!(analysis.target_row().is_none());
        assert!(analysis.target_gaps.is_empty());

        let comparison = Comparison::new(vec![
            Employer::new("Dup").with_score("culture", 2.0),
            Employer::new("Other"),
            Employer::new("Dup").target().with_score("culture", 9.0),
        ]);
        let analysis = analyse_comparison(&comparison, &config).unwrap();
        assert_eq!(analysis.target.as_deref(), Some("Dup"));
        assert_eq!(analysis.target_row().map(|r| r.name.as_str()), Some("Dup"));
        let culture = analysis
            .target_gaps
            .iter()
            .find(|g| g.dimension.as_str() == "culture")
            .unwrap();
        assert_eq!(culture.score, 9.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ComparisonConfig::default();
        config.scoring.distance_weight = 5.0;
        let err = analyse_comparison(&Comparison::sample(), &config).unwrap_err();
        assert!(matches!(err, HiringBrandError::Config(_)));

        let mut config = ComparisonConfig::default();
        config.scoring.max_dimension_deviation = f64::NAN;
        let err = analyse_comparison(&Comparison::sample(), &config).unwrap_err();
        assert!(matches!(err, HiringBrandError::Config(_)));
    }

    #[test]
    fn test_tier_config_changes_labels_not_scores() {
        let comparison = Comparison::sample();
        let base = analyse_comparison(&comparison, &ComparisonConfig::default()).unwrap();

        let mut config = ComparisonConfig::default();
        config.tiers.highly_unique = 0;
        config.tiers.distinctive = 0;
        config.tiers.moderate = 0;
        let relabelled = analyse_comparison(&comparison, &config).unwrap();

        for (a, b) in base.ranking.iter().zip(&relabelled.ranking) {
            assert_eq!(a.result, b.result);
            assert_eq!(b.tier_label, "Highly Unique");
        }
    }
}
