use thiserror::Error;

#[derive(Debug, Error)]
pub enum HiringBrandError {
    #[error("Dimension set is empty; at least one dimension is required")]
    EmptyDimensionSet,

    #[error("Invalid score for {employer} on {dimension}: {value} (expected 0–10)")]
    InvalidScore {
        employer: String,
        dimension: String,
        value: f64,
    },

    #[error("Invalid employer: {0}")]
    InvalidEmployer(String),

    #[error("Comparison not found: {0}")]
    ComparisonNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HiringBrandError {
    /// True when the caller supplied bad input, as opposed to an environment failure.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HiringBrandError::EmptyDimensionSet
                | HiringBrandError::InvalidScore { .. }
                | HiringBrandError::InvalidEmployer(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HiringBrandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_classified() {
        assert!(HiringBrandError::EmptyDimensionSet.is_input_error());
        assert!(HiringBrandError::InvalidEmployer("blank".into()).is_input_error());
        assert!(!HiringBrandError::ComparisonNotFound("x".into()).is_input_error());
        assert!(!HiringBrandError::Config("bad".into()).is_input_error());
    }

    #[test]
    fn test_invalid_score_message() {
        let err = HiringBrandError::InvalidScore {
            employer: "Acme".into(),
            dimension: "culture".into(),
            value: 11.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid score for Acme on culture: 11 (expected 0–10)"
        );
    }
}
