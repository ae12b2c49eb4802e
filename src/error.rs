//! Error types for Chat Distance
//!
//! Scoring and aggregation never fail; only the input collaborators do.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading inputs or writing reports
#[derive(Debug, Error)]
pub enum DistanceError {
    #[error("Cannot read avoidance phrase file {path}: {source}")]
    PhraseFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open transcript {path}: {source}")]
    Transcript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
