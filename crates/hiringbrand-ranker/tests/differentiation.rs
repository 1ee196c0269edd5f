//! Behavioural tests for the differentiation scorer and ranking.
//!
//! Run with: cargo test --package hiringbrand-ranker --test differentiation

use hiringbrand_common::{default_dimension_ids, ComparisonConfig, DimensionId, Employer};
use hiringbrand_ranker::ranking::{rank_employers, TierThresholds};
use hiringbrand_ranker::{analyse_comparison, compute_differentiation, ScoreResult};
use hiringbrand_test_utils::{
    assert_eq, dims, employer, random_comparison, seeded_rng, three_tier_comparison,
};

#[test]
fn test_scores_stay_in_bounds() {
    let mut rng = seeded_rng(7);
    let dimensions = default_dimension_ids();

    for employers in 2..=8 {
        for _ in 0..50 {
            let comparison = random_comparison(&mut rng, employers, &dimensions);
            let results = compute_differentiation(&comparison.employers, &dimensions).unwrap();
            assert_eq!(results.len(), employers);
            for r in results.values() {
                assert!(r.differentiation_score <= 100);
                assert!(r.strength_count + r.weakness_count <= dimensions.len());
            }
        }
    }
}

#[test]
fn test_repeat_calls_are_identical() {
    let mut rng = seeded_rng(42);
    let dimensions = dims(&["compensation", "culture", "growth", "mission"]);
    let comparison = random_comparison(&mut rng, 5, &dimensions);

    let first = compute_differentiation(&comparison.employers, &dimensions).unwrap();
    let cloned = comparison.employers.clone();
    let second = compute_differentiation(&cloned, &dimensions).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_single_employer_neutral_for_any_scores() {
    let mut rng = seeded_rng(3);
    let dimensions = default_dimension_ids();
    for _ in 0..20 {
        let comparison = random_comparison(&mut rng, 1, &dimensions);
        let results = compute_differentiation(&comparison.employers, &dimensions).unwrap();
        assert_eq!(results["Employer 0"], ScoreResult::NEUTRAL);
    }
}

#[test]
fn test_missing_dimension_scored_as_five() {
    let dimensions = dims(&["compensation", "culture"]);
    let others = [
        employer("B", &[("compensation", 2.0), ("culture", 9.0)]),
        employer("C", &[("compensation", 6.5), ("culture", 4.0)]),
    ];

    let mut sparse = vec![employer("A", &[("compensation", 8.0)])];
    sparse.extend(others.iter().cloned());
    let mut explicit = vec![employer("A", &[("compensation", 8.0), ("culture", 5.0)])];
    explicit.extend(others.iter().cloned());

    let a = compute_differentiation(&sparse, &dimensions).unwrap();
    let b = compute_differentiation(&explicit, &dimensions).unwrap();

    // group averages and every other employer are unaffected
    assert_eq!(a["B"], b["B"]);
    assert_eq!(a["C"], b["C"]);
    assert_eq!(a["A"].strength_count, b["A"].strength_count);
    assert_eq!(a["A"].weakness_count, b["A"].weakness_count);
}

#[test]
fn test_above_average_employer_has_more_strengths() {
    let dimensions = dims(&["compensation", "culture", "growth"]);
    let employers = vec![
        employer("High", &[("compensation", 10.0), ("culture", 10.0), ("growth", 4.0)]),
        employer("Low", &[("compensation", 2.0), ("culture", 3.0), ("growth", 4.0)]),
    ];
    let r = compute_differentiation(&employers, &dimensions).unwrap();
    assert!(r["High"].strength_count >= r["Low"].strength_count);
    assert_eq!(r["High"].strength_count, 2);
    assert_eq!(r["Low"].weakness_count, 2);
}

#[test]
fn test_three_tier_analysis() {
    let analysis =
        analyse_comparison(&three_tier_comparison(), &ComparisonConfig::default()).unwrap();

    let order: Vec<_> = analysis.ranking.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(order, ["A", "C", "B"]);

    let scores: Vec<_> = analysis
        .ranking
        .iter()
        .map(|r| r.result.differentiation_score)
        .collect();
    assert_eq!(scores, [48, 18, 0]);

    let tiers: Vec<_> = analysis.ranking.iter().map(|r| r.tier_label.as_str()).collect();
    assert_eq!(tiers, ["Moderate", "Generic", "Generic"]);

    assert!(analysis.group_averages.values().all(|&avg| avg == 5.0));
    assert!(analysis.target_gaps.iter().all(|g| g.delta == 4.0));
}

#[test]
fn test_ranking_keeps_input_order_for_ties() {
    let dimensions: Vec<DimensionId> = dims(&["culture"]);
    // three identical profiles plus one outlier
    let employers = vec![
        Employer::new("Twin 1").with_score("culture", 5.0),
        Employer::new("Twin 2").with_score("culture", 5.0),
        Employer::new("Outlier").with_score("culture", 9.0),
        Employer::new("Twin 3").with_score("culture", 5.0),
    ];
    let results = compute_differentiation(&employers, &dimensions).unwrap();
    let ranked = rank_employers(&employers, &results, &TierThresholds::default());

    let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Outlier", "Twin 1", "Twin 2", "Twin 3"]);
    let ranks: Vec<_> = ranked.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, [1, 2, 3, 4]);
}
