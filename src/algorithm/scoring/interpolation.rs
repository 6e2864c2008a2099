//! Linear interpolation scoring
//!
//! Each answered question contributes `((N - 1 - i) / (N - 1)) * 100`, where
//! `N` is the option count and `i` the selected index, so the first option
//! scores 100 and the last scores 0. The score is the rounded mean of the
//! contributions of answered questions.

use std::future::Future;
use std::pin::Pin;

use log::debug;

use crate::algorithm::scoring::{RiskScorer, ScoreSource, ScoredAssessment};
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::answers::AnswerSet;
use crate::models::risk::RiskScore;
use crate::utils::math::{mean, round_half_up};

/// Contribution used for questions with fewer than two options
pub const NEUTRAL_CONTRIBUTION: f64 = 50.0;

/// Contribution of selecting `index` out of `option_count` options
///
/// Returns `neutral` when fewer than two options exist or `index` is not
/// one of them.
#[must_use]
pub fn question_contribution(option_count: usize, index: usize, neutral: f64) -> f64 {
    if option_count < 2 || index >= option_count {
        return neutral;
    }
    let last = (option_count - 1) as f64;
    ((last - index as f64) / last) * 100.0
}

/// Contributions of every answered question, in catalog order
///
/// Unknown question ids and unknown option ids are skipped.
pub fn contributions(catalog: &Catalog, answers: &AnswerSet, neutral: f64) -> Result<Vec<f64>> {
    let questions = catalog.questions(answers.disease)?;

    let contributions = questions
        .iter()
        .filter_map(|question| {
            let option_id = answers.get(&question.id)?;
            match question.option_index(option_id) {
                Some(index) => Some(question_contribution(question.option_count(), index, neutral)),
                None => {
                    debug!(
                        "Ignoring unknown option '{option_id}' for question '{}' ({})",
                        question.id, answers.disease
                    );
                    None
                }
            }
        })
        .collect::<Vec<_>>();

    if contributions.len() < answers.len() {
        debug!(
            "{} of {} answers for {} did not match the catalog",
            answers.len() - contributions.len(),
            answers.len(),
            answers.disease
        );
    }

    Ok(contributions)
}

/// Score an answer set with the default neutral contribution
///
/// `default` is returned when no catalog question is answered.
pub fn score_answers(catalog: &Catalog, answers: &AnswerSet, default: RiskScore) -> Result<RiskScore> {
    score_answers_with_neutral(catalog, answers, default, NEUTRAL_CONTRIBUTION)
}

/// Score an answer set with an explicit neutral contribution
pub fn score_answers_with_neutral(
    catalog: &Catalog,
    answers: &AnswerSet,
    default: RiskScore,
    neutral: f64,
) -> Result<RiskScore> {
    let contributions = contributions(catalog, answers, neutral)?;
    Ok(mean(contributions).map_or(default, |average| RiskScore::clamped(round_half_up(average))))
}

/// Local scoring strategy over a catalog
#[derive(Debug, Clone)]
pub struct InterpolationScorer<'c> {
    catalog: &'c Catalog,
    config: EngineConfig,
}

impl<'c> InterpolationScorer<'c> {
    /// Create a scorer over a catalog
    #[must_use]
    pub const fn new(catalog: &'c Catalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Score synchronously, using `previous` or the configured default when nothing is answered
    pub fn score(&self, answers: &AnswerSet, previous: Option<RiskScore>) -> Result<ScoredAssessment> {
        let default = previous.unwrap_or(self.config.default_score);
        let score = score_answers_with_neutral(
            self.catalog,
            answers,
            default,
            self.config.neutral_contribution,
        )?;
        Ok(ScoredAssessment::new(
            answers.disease,
            score,
            &self.config.thresholds,
            ScoreSource::Interpolated,
        ))
    }
}

impl RiskScorer for InterpolationScorer<'_> {
    fn name(&self) -> &'static str {
        "interpolation"
    }

    fn assess<'a>(
        &'a self,
        answers: &'a AnswerSet,
        previous: Option<RiskScore>,
    ) -> Pin<Box<dyn Future<Output = Result<ScoredAssessment>> + Send + 'a>> {
        Box::pin(std::future::ready(self.score(answers, previous)))
    }
}
