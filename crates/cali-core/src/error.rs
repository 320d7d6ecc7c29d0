//! Error types for dataset loading

use thiserror::Error;

/// Errors that can occur while loading a dataset
///
/// Lookups never fail: a miss is an absent result, not an error. Everything
/// here happens once, at startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset document is not valid JSON or has the wrong shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reference region is missing one of the four metrics
    #[error("Reference region {name} is missing metric: {metric}")]
    IncompleteReference { name: String, metric: &'static str },

    /// Reference region metric would make ratios meaningless
    #[error("Reference region {name} has unusable {metric} value: {value}")]
    ZeroReference {
        name: String,
        metric: &'static str,
        value: f64,
    },

    /// No complete country records survived loading
    #[error("Dataset contains no complete country records")]
    Empty,
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
