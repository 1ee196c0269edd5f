//! Shared application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use hiringbrand_common::ComparisonConfig;
use hiringbrand_ranker::source::{ComparisonSource, DirectoryComparisonSource, InMemoryComparisonSource};

/// Optional path to a scoring/tier policy file (YAML or JSON).
pub const CONFIG_ENV: &str = "HIRINGBRAND_CONFIG";
/// Optional directory of stored comparison files.
pub const COMPARISONS_ENV: &str = "HIRINGBRAND_COMPARISONS";

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub config: ComparisonConfig,
    /// Stored comparisons, read-only after startup
    pub source: Arc<dyn ComparisonSource>,
}

impl AppState {
    pub fn new(config: ComparisonConfig, source: Arc<dyn ComparisonSource>) -> Self {
        Self { config, source }
    }

    /// Default policy and no stored comparisons.
    pub fn empty() -> Self {
        Self::new(
            ComparisonConfig::default(),
            Arc::new(InMemoryComparisonSource::new()),
        )
    }

    /// Build state from `HIRINGBRAND_CONFIG` and `HIRINGBRAND_COMPARISONS`.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = match std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading comparison config");
                ComparisonConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?
            }
            None => ComparisonConfig::default(),
        };

        let source: Arc<dyn ComparisonSource> =
            match std::env::var_os(COMPARISONS_ENV).map(PathBuf::from) {
                Some(dir) => Arc::new(DirectoryComparisonSource::load(&dir)?),
                None => {
                    tracing::warn!("{COMPARISONS_ENV} not set; no stored comparisons available");
                    Arc::new(InMemoryComparisonSource::new())
                }
            };

        Ok(Self::new(config, source))
    }
}

pub type SharedState = Arc<AppState>;
