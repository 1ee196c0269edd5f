//! Trait for stored comparison access.
//!
//! Decouples the ranker consumers (web API, CLI) from where comparison sets
//! are kept.

use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

use hiringbrand_common::{Comparison, HiringBrandError, Result};

/// Read access to stored employer comparisons, keyed by comparison id.
///
/// Implementations can use:
/// - exported report files on disk
/// - in-memory fixtures (testing)
pub trait ComparisonSource: Send + Sync {
    /// Get a stored comparison by id.
    fn get_comparison(&self, id: &str) -> Option<Comparison>;

    /// Ids of all stored comparisons, sorted.
    fn list_comparisons(&self) -> Vec<String>;

    /// Check if a comparison exists.
    fn has_comparison(&self, id: &str) -> bool {
        self.get_comparison(id).is_some()
    }

    /// Like [`get_comparison`](Self::get_comparison) but with a typed error.
    fn require_comparison(&self, id: &str) -> Result<Comparison> {
        self.get_comparison(id)
            .ok_or_else(|| HiringBrandError::ComparisonNotFound(id.to_string()))
    }
}

// ── In-memory Implementation ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryComparisonSource {
    data: BTreeMap<String, Comparison>,
}

impl InMemoryComparisonSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a comparison under `id`.
    pub fn with(mut self, id: &str, comparison: Comparison) -> Self {
        self.data.insert(id.to_string(), comparison);
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl ComparisonSource for InMemoryComparisonSource {
    fn get_comparison(&self, id: &str) -> Option<Comparison> {
        self.data.get(id).cloned()
    }

    fn list_comparisons(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }

    fn has_comparison(&self, id: &str) -> bool {
        self.data.contains_key(id)
    }
}

// ── Directory Implementation ─────────────────────────────────────────────────

const SUPPORTED_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Comparisons loaded once from `*.yaml` / `*.yml` / `*.json` files in a
/// directory, keyed by file stem. Other files are skipped.
#[derive(Debug, Clone)]
pub struct DirectoryComparisonSource {
    inner: InMemoryComparisonSource,
}

impl DirectoryComparisonSource {
    pub fn load(dir: &Path) -> Result<Self> {
        let mut inner = InMemoryComparisonSource::new();

        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read comparison directory {}", dir.display()))?;

        for entry in entries {
            let path = entry.context("Failed to read directory entry")?.path();
            if !path.is_file() {
                continue;
            }
            let supported = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e));
            if !supported {
                tracing::debug!(path = %path.display(), "skipping unsupported file");
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let comparison = Comparison::from_path(&path)
                .with_context(|| format!("Failed to load comparison {}", path.display()))?;
            comparison.validate()?;
            inner = inner.with(stem, comparison);
        }

        tracing::info!(dir = %dir.display(), count = inner.len(), "loaded stored comparisons");
        Ok(Self { inner })
    }
}

impl ComparisonSource for DirectoryComparisonSource {
    fn get_comparison(&self, id: &str) -> Option<Comparison> {
        self.inner.get_comparison(id)
    }

    fn list_comparisons(&self) -> Vec<String> {
        self.inner.list_comparisons()
    }

    fn has_comparison(&self, id: &str) -> bool {
        self.inner.has_comparison(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiringbrand_common::Employer;

    #[test]
    fn test_in_memory_lookup() {
        let source = InMemoryComparisonSource::new()
            .with("acme", Comparison::sample())
            .with("empty", Comparison::new(vec![Employer::new("Solo")]));

        assert_eq!(source.list_comparisons(), ["acme", "empty"]);
        assert!(source.has_comparison("acme"));
        assert!(!source.has_comparison("globex"));
        assert!(matches!(
            source.require_comparison("globex"),
            Err(HiringBrandError::ComparisonNotFound(_))
        ));
    }

    #[test]
    fn test_directory_source_filters_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = Comparison::sample().to_yaml().unwrap();
        std::fs::write(dir.path().join("acme.yaml"), &yaml).unwrap();
        std::fs::write(
            dir.path().join("globex.json"),
            r#"{"employers":[{"name":"Globex"}]}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a comparison").unwrap();

        let source = DirectoryComparisonSource::load(dir.path()).unwrap();
        assert_eq!(source.list_comparisons(), ["acme", "globex"]);
        assert_eq!(source.get_comparison("acme"), Some(Comparison::sample()));
    }

    #[test]
    fn test_directory_source_rejects_invalid_scores() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("bad.json"),
            r#"{"employers":[{"name":"A","scores":{"culture":42}}]}"#,
        )
        .unwrap();
        assert!(DirectoryComparisonSource::load(dir.path()).is_err());
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(DirectoryComparisonSource::load(&missing).is_err());
    }
}
