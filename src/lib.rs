//! A Rust library for scoring lifestyle risk questionnaires, aggregating
//! per-disease scores, and simulating what-if lifestyle changes.

pub mod algorithm;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use catalog::Catalog;
pub use config::EngineConfig;
pub use error::{Result, RiskEngineError};
pub use models::{AnswerSet, AssessmentRecord, Disease, RiskLevel, RiskScore, RiskThresholds};

// Scoring strategies
pub use algorithm::scoring::{
    AnalysisRequest, AnalysisResponse, AnalysisService, ExternalAnalysisScorer,
    InterpolationScorer, RiskScorer, ScoreSource, ScoredAssessment, assess_all,
    question_contribution, score_answers,
};

// History analytics
pub use algorithm::{
    HistorySummary, LifestyleSimulator, RiskChange, RiskDelta, RiskTrend, SimulationReport,
    aggregate_risk_index, aggregate_scores, compare, current_risks, disease_trend,
    history_summary, lifestyle_profile, risk_forecast, risk_trajectory,
};
