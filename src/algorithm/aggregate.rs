//! Aggregate Risk Index
//!
//! The index is the rounded mean of the most recent score of every disease
//! the user has assessed at least once.

use std::collections::BTreeMap;

use crate::models::assessment::AssessmentRecord;
use crate::models::disease::Disease;
use crate::models::risk::RiskScore;
use crate::utils::math::{mean, round_half_up};

/// Latest record per disease from a newest-first history
#[must_use]
pub fn latest_by_disease(records: &[AssessmentRecord]) -> BTreeMap<Disease, &AssessmentRecord> {
    let mut latest = BTreeMap::new();
    for record in records {
        latest.entry(record.disease).or_insert(record);
    }
    latest
}

/// Rounded mean of bare scores, `None` for empty input
#[must_use]
pub fn aggregate_scores(scores: &[RiskScore]) -> Option<RiskScore> {
    mean(scores.iter().map(|score| f64::from(score.value())))
        .map(|average| RiskScore::clamped(round_half_up(average)))
}

/// Aggregate Risk Index of a newest-first history, `None` when empty
#[must_use]
pub fn aggregate_risk_index(records: &[AssessmentRecord]) -> Option<RiskScore> {
    let latest: Vec<RiskScore> = latest_by_disease(records)
        .values()
        .map(|record| record.risk_score)
        .collect();
    aggregate_scores(&latest)
}
