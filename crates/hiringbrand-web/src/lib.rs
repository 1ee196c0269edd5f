//! hiringbrand-web — JSON API over the differentiation ranker.
//! Provides:
//!   - Ad-hoc scoring of a posted comparison
//!   - Scoring of stored comparison sets
//!   - The default dimension catalogue

pub mod router;
pub mod handlers;
pub mod state;
pub mod error;
