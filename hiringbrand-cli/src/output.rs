//! Plain-text rendering of rankings and dimension gaps.

use std::fmt::Write;

use console::style;
use hiringbrand_common::Dimension;
use hiringbrand_ranker::ranking::{DifferentiationTier, DimensionStanding};
use hiringbrand_ranker::ComparisonAnalysis;

fn styled_tier(tier: DifferentiationTier, label: &str) -> String {
    let padded = format!("{label:<13}");
    match tier {
        DifferentiationTier::HighlyUnique => style(padded).green().bold().to_string(),
        DifferentiationTier::Distinctive => style(padded).green().to_string(),
        DifferentiationTier::Moderate => style(padded).yellow().to_string(),
        DifferentiationTier::Generic => style(padded).dim().to_string(),
    }
}

pub fn render_analysis(analysis: &ComparisonAnalysis) -> String {
    let mut out = String::new();

    if let Some(id) = &analysis.report_id {
        let _ = writeln!(out, "{}", style(format!("Report {id}")).bold());
    }
    let _ = writeln!(
        out,
        "{:>4}  {:<28} {:>5}  {:>9}  {:>10}  {}",
        "Rank", "Employer", "Score", "Strengths", "Weaknesses", "Tier"
    );

    for row in &analysis.ranking {
        let marker = if row.is_target { "*" } else { " " };
        let _ = writeln!(
            out,
            "{:>4}  {}{:<27} {:>5}  {:>9}  {:>10}  {}",
            row.rank,
            marker,
            row.name,
            row.result.differentiation_score,
            row.result.strength_count,
            row.result.weakness_count,
            styled_tier(row.tier, &row.tier_label),
        );
    }

    if let Some(target) = &analysis.target {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style(format!("{target} vs. group average")).bold());
        for gap in &analysis.target_gaps {
            let standing = match gap.standing {
                DimensionStanding::Strength => style("strength").green(),
                DimensionStanding::Weakness => style("weakness").red(),
                DimensionStanding::Parity => style("parity").dim(),
            };
            let _ = writeln!(
                out,
                "  {:<20} {:>5.1}  avg {:>5.2}  {:>+6.2}  {}",
                gap.dimension.as_str(),
                gap.score,
                gap.group_average,
                gap.delta,
                standing,
            );
        }
    }

    out
}

pub fn render_dimensions(dimensions: &[Dimension]) -> String {
    dimensions
        .iter()
        .map(|d| format!("{:<20} {}\n", d.id.as_str(), d.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiringbrand_common::{default_dimensions, ComparisonConfig};
    use hiringbrand_ranker::analyse_comparison;
    use hiringbrand_test_utils::three_tier_comparison;

    #[test]
    fn test_render_three_tier() {
        let analysis =
            analyse_comparison(&three_tier_comparison(), &ComparisonConfig::default()).unwrap();
        let text = render_analysis(&analysis);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Rank"));
        assert!(lines[1].contains("*A"));
        assert!(lines[1].contains("48"));
        assert!(lines[3].contains("B"));
        assert!(text.contains("A vs. group average"));
        assert!(text.contains("+4.00"));
    }

    #[test]
    fn test_render_dimensions() {
        let text = render_dimensions(&default_dimensions());
        assert_eq!(text.lines().count(), 7);
        assert!(text.starts_with("compensation"));
    }
}
