//! hiringbrand-ranker — Employer differentiation scoring engine.
//! Scores how distinctive each employer's dimension profile is within its
//! comparison group, then ranks and labels the group.

pub mod scorer;
pub mod normalise;
pub mod weights;
pub mod ranking;
pub mod analysis;
pub mod source;

pub use scorer::{compute_differentiation, compute_differentiation_with_policy, ScoreResult};
pub use weights::ScoringPolicy;
pub use ranking::{DifferentiationTier, RankedEmployer, TierThresholds};
pub use analysis::{analyse_comparison, ComparisonAnalysis};
