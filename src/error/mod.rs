//! Error handling for the risk engine.

use std::io;
use std::time::Duration;

/// Specialized error type for risk scoring operations
#[derive(Debug, thiserror::Error)]
pub enum RiskEngineError {
    /// Disease identifier not in the supported set or not in the catalog
    #[error("Unknown disease: {0}")]
    UnknownDisease(String),

    /// Score outside the 0-100 range or not a number
    #[error("Invalid risk score: {0} (expected 0-100)")]
    InvalidScore(f64),

    /// Questionnaire catalog failed validation
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// External analysis collaborator reported a failure
    #[error("Analysis service error: {0}")]
    Analysis(String),

    /// External analysis collaborator did not answer in time
    #[error("Analysis service timed out after {0:?}")]
    AnalysisTimeout(Duration),

    /// Configuration values are inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for risk engine operations
pub type Result<T> = std::result::Result<T, RiskEngineError>;
