//! Assessment history records
//!
//! Records are persisted by an outside collaborator; this crate only reads
//! them. Field names follow the stored rows.

use chrono::{DateTime, NaiveDate, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::disease::Disease;
use crate::models::risk::{RiskLevel, RiskScore};

/// One completed assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Record identifier assigned by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Assessed disease
    #[serde(rename = "disease_type")]
    pub disease: Disease,
    /// Score recorded for the assessment
    pub risk_score: RiskScore,
    /// Level recorded alongside the score, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    /// Submission time
    pub created_at: DateTime<Utc>,
    /// Answers submitted, keyed by question id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<FxHashMap<String, String>>,
}

impl AssessmentRecord {
    /// Create a record without answers
    #[must_use]
    pub fn new(disease: Disease, risk_score: RiskScore, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            disease,
            risk_score,
            risk_level: Some(risk_score.level()),
            created_at,
            answers: None,
        }
    }

    /// Attach the submitted answers
    #[must_use]
    pub fn with_answers(mut self, answers: FxHashMap<String, String>) -> Self {
        self.answers = Some(answers);
        self
    }

    /// UTC calendar day of submission
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// Sort records newest first, the order every history function expects
pub fn sort_newest_first(records: &mut [AssessmentRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
