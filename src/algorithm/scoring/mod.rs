//! Risk scoring strategies
//!
//! Two named strategies sit behind the `RiskScorer` trait: local linear
//! interpolation over the catalog, and delegation to an external analysis
//! service with a bounded fallback. Results carry their `ScoreSource` so the
//! two paths are never conflated.

pub mod external;
pub mod interpolation;

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::answers::AnswerSet;
use crate::models::disease::Disease;
use crate::models::risk::{RiskLevel, RiskScore, RiskThresholds};

pub use external::{
    AnalysisRequest, AnalysisResponse, AnalysisService, ExternalAnalysisScorer, fallback_score,
};
pub use interpolation::{
    InterpolationScorer, NEUTRAL_CONTRIBUTION, question_contribution, score_answers,
    score_answers_with_neutral,
};

/// Where a score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    /// Local linear interpolation
    Interpolated,
    /// External analysis service
    External,
    /// Bounded random substitute for an unavailable external result
    Fallback,
}

impl ScoreSource {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interpolated => "interpolated",
            Self::External => "external",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A score with its classification and provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAssessment {
    /// Assessed disease
    pub disease: Disease,
    /// Risk score
    pub score: RiskScore,
    /// Classification of `score`
    pub level: RiskLevel,
    /// Strategy that produced `score`
    pub source: ScoreSource,
}

impl ScoredAssessment {
    /// Create a result, classifying the score with `thresholds`
    #[must_use]
    pub const fn new(
        disease: Disease,
        score: RiskScore,
        thresholds: &RiskThresholds,
        source: ScoreSource,
    ) -> Self {
        Self {
            disease,
            score,
            level: RiskLevel::from_score_with_thresholds(score, thresholds),
            source,
        }
    }
}

/// Common interface of the scoring strategies
pub trait RiskScorer: Send + Sync {
    /// Strategy name for logs and reports
    fn name(&self) -> &'static str;

    /// Score one answer set
    ///
    /// `previous` is the last known score for the disease, used by strategies
    /// that need a default when nothing is answered.
    fn assess<'a>(
        &'a self,
        answers: &'a AnswerSet,
        previous: Option<RiskScore>,
    ) -> Pin<Box<dyn Future<Output = Result<ScoredAssessment>> + Send + 'a>>;
}

/// Score several answer sets concurrently, preserving input order
pub async fn assess_all<S>(scorer: &S, answer_sets: &[AnswerSet]) -> Vec<Result<ScoredAssessment>>
where
    S: RiskScorer + ?Sized,
{
    join_all(answer_sets.iter().map(|answers| scorer.assess(answers, None))).await
}
