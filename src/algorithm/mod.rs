//! Algorithm implementations for risk assessment
//!
//! This module contains the scoring strategies and the analyses built on top
//! of scored assessments: aggregation, simulation, trends and lifestyle
//! profiles. Every function here is pure except the external strategy, which
//! awaits its collaborator.

pub mod aggregate;
pub mod lifestyle;
pub mod scoring;
pub mod simulator;
pub mod trend;

// Re-export common types
pub use aggregate::{aggregate_risk_index, aggregate_scores, latest_by_disease};
pub use lifestyle::{LifestyleProfile, lifestyle_profile};
pub use scoring::{RiskScorer, ScoreSource, ScoredAssessment};
pub use simulator::{LifestyleSimulator, RiskChange, RiskDelta, SimulationReport, compare, current_risks};
pub use trend::{HistorySummary, RiskTrend, disease_trend, history_summary, risk_forecast, risk_trajectory};
