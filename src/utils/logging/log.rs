//! Logging utilities
//!
//! This module provides standardized logging functions for scoring operations.

use crate::models::disease::Disease;
use crate::models::risk::RiskScore;

/// Initialise `env_logger`, honouring `RUST_LOG` and falling back to `default_filter`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}

/// Log a scored assessment with consistent format
///
/// # Arguments
/// * `disease` - Assessed disease
/// * `score` - Resulting score
/// * `source` - Which strategy produced the score
pub fn log_assessment_complete(disease: Disease, score: RiskScore, source: &str) {
    log::info!("Scored {disease} assessment: {score} ({source})");
}

/// Log a fallback substitution with consistent format
///
/// # Arguments
/// * `disease` - Assessed disease
/// * `reason` - Why the external result was not used
/// * `score` - Fallback score that replaced it
pub fn log_fallback(disease: Disease, reason: &str, score: RiskScore) {
    log::warn!("Analysis for {disease} unavailable ({reason}); using fallback score {score}");
}
