//! External analysis scoring with a bounded fallback
//!
//! The primary assessment flow sends answers to an analysis service whose
//! formula is not reproduced here. When the service errors, times out, or
//! returns an out-of-range score, a random score from the configured fallback
//! range is substituted and labelled `ScoreSource::Fallback`.

use std::future::Future;
use std::pin::Pin;

use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use crate::algorithm::scoring::{RiskScorer, ScoreSource, ScoredAssessment};
use crate::config::EngineConfig;
use crate::error::{Result, RiskEngineError};
use crate::models::answers::AnswerSet;
use crate::models::disease::Disease;
use crate::models::risk::RiskScore;
use crate::utils::logging::{log_assessment_complete, log_fallback};

/// Payload sent to the analysis service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Assessed disease
    pub disease_type: Disease,
    /// Question id to option id
    pub answers: FxHashMap<String, String>,
    /// Owner of the assessment, when signed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Payload returned by the analysis service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Score computed by the service
    pub risk_score: f64,
    /// Level label computed by the service; not trusted locally
    #[serde(default)]
    pub risk_level: Option<String>,
    /// Free-text explanation
    #[serde(default)]
    pub analysis: Option<String>,
    /// Factors the service considered most significant
    #[serde(default)]
    pub key_risk_factors: Vec<String>,
}

/// An external collaborator that scores answers
pub trait AnalysisService: Send + Sync {
    /// Analyze one assessment
    fn analyze<'a>(
        &'a self,
        request: &'a AnalysisRequest,
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResponse>> + Send + 'a>>;
}

/// Draw a fallback score from `[fallback_min, fallback_max)`
pub fn fallback_score<R: Rng>(rng: &mut R, config: &EngineConfig) -> RiskScore {
    let min = i64::from(config.fallback_min);
    let max = i64::from(config.fallback_max).max(min + 1);
    RiskScore::clamped(rng.random_range(min..max))
}

/// Validate the score returned by the service
fn external_score(response: &AnalysisResponse) -> Result<RiskScore> {
    RiskScore::from_f64(response.risk_score)
}

/// Strategy delegating to an `AnalysisService`
#[derive(Debug, Clone)]
pub struct ExternalAnalysisScorer<S> {
    service: S,
    config: EngineConfig,
    user_id: Option<String>,
}

impl<S: AnalysisService> ExternalAnalysisScorer<S> {
    /// Create a scorer over a service
    #[must_use]
    pub const fn new(service: S, config: EngineConfig) -> Self {
        Self {
            service,
            config,
            user_id: None,
        }
    }

    /// Attach the signed-in user to outgoing requests
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// The wrapped service
    pub const fn service(&self) -> &S {
        &self.service
    }

    fn request_for(&self, answers: &AnswerSet) -> AnalysisRequest {
        AnalysisRequest {
            disease_type: answers.disease,
            answers: answers.answers.clone(),
            user_id: self.user_id.clone(),
        }
    }

    fn fallback(&self, disease: Disease, reason: &str) -> ScoredAssessment {
        let score = fallback_score(&mut rand::rng(), &self.config);
        log_fallback(disease, reason, score);
        ScoredAssessment::new(disease, score, &self.config.thresholds, ScoreSource::Fallback)
    }

    /// Call the service under the configured timeout
    ///
    /// Never fails: any problem with the external result yields a fallback score.
    pub async fn score(&self, answers: &AnswerSet) -> ScoredAssessment {
        let request = self.request_for(answers);
        let limit = self.config.analysis_timeout();

        let outcome = match timeout(limit, self.service.analyze(&request)).await {
            Ok(response) => response.and_then(|response| external_score(&response)),
            Err(_) => Err(RiskEngineError::AnalysisTimeout(limit)),
        };

        match outcome {
            Ok(score) => {
                log_assessment_complete(answers.disease, score, ScoreSource::External.as_str());
                ScoredAssessment::new(
                    answers.disease,
                    score,
                    &self.config.thresholds,
                    ScoreSource::External,
                )
            }
            Err(e) => self.fallback(answers.disease, &e.to_string()),
        }
    }
}

impl<S: AnalysisService> RiskScorer for ExternalAnalysisScorer<S> {
    fn name(&self) -> &'static str {
        "external-analysis"
    }

    fn assess<'a>(
        &'a self,
        answers: &'a AnswerSet,
        _previous: Option<RiskScore>,
    ) -> Pin<Box<dyn Future<Output = Result<ScoredAssessment>> + Send + 'a>> {
        Box::pin(async move { Ok(self.score(answers).await) })
    }
}
