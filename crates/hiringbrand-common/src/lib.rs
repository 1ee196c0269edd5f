//! hiringbrand-common — Shared types, errors, and configuration used across all HiringBrand crates.

pub mod error;
pub mod employer;
pub mod comparison;
pub mod comparison_config;

// Re-export commonly used types
pub use employer::{
    default_dimension_ids, default_dimensions, distinct_by_name, Dimension, DimensionId, Employer,
};
pub use comparison::Comparison;
pub use comparison_config::{ComparisonConfig, ScoringConfig, TierConfig};
pub use error::{HiringBrandError, Result};
