//! Combined risk report
//!
//! Ties the history analytics and the simulator together for one user. The
//! binary reads a `ReportRequest` as JSON and prints the `RiskReport`.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::algorithm::aggregate::{aggregate_risk_index, aggregate_scores, latest_by_disease};
use crate::algorithm::lifestyle::{LifestyleProfile, lifestyle_profile};
use crate::algorithm::simulator::{LifestyleSimulator, SimulationReport, current_risks};
use crate::algorithm::trend::{
    ForecastPoint, HistorySummary, RiskTrend, TrajectoryPoint, disease_trend, history_summary,
    risk_forecast, risk_trajectory,
};
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::answers::AnswerSet;
use crate::models::assessment::{AssessmentRecord, sort_newest_first};
use crate::models::disease::Disease;
use crate::models::risk::RiskScore;

/// Input of a report run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRequest {
    /// Stored assessments, any order
    pub history: Vec<AssessmentRecord>,
    /// Hypothetical answers per disease
    pub answers: BTreeMap<Disease, FxHashMap<String, String>>,
}

/// Output of a report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Assessment count and overall change
    pub summary: HistorySummary,
    /// Aggregate Risk Index of the stored history
    pub aggregate_risk_index: Option<RiskScore>,
    /// Aggregate index with simulated scores substituted
    pub simulated_aggregate_index: Option<RiskScore>,
    /// Per-disease simulation results
    pub simulation: SimulationReport,
    /// Trend of every assessed disease
    pub trends: BTreeMap<Disease, RiskTrend>,
    /// Per-day mean scores
    pub trajectory: Vec<TrajectoryPoint>,
    /// Forecast from the most recent assessment
    pub forecast: Vec<ForecastPoint>,
    /// Pillars from the latest heart assessment, if it stored its answers
    pub lifestyle: Option<LifestyleProfile>,
}

/// Build a report from a request
pub fn build_report(catalog: &Catalog, config: &EngineConfig, request: &ReportRequest) -> Result<RiskReport> {
    let mut history = request.history.clone();
    sort_newest_first(&mut history);

    let current = current_risks(&history);
    let hypothetical: Vec<AnswerSet> = request
        .answers
        .iter()
        .map(|(&disease, answers)| AnswerSet {
            disease,
            answers: answers.clone(),
        })
        .collect();

    let simulator = LifestyleSimulator::new(catalog, config.clone());
    let simulation = simulator.simulate(&current, &hypothetical)?;

    let mut simulated = current.clone();
    for (disease, result) in &simulation.results {
        simulated.insert(*disease, result.delta.simulated);
    }
    let simulated_scores: Vec<RiskScore> = simulated.values().copied().collect();

    let trends = latest_by_disease(&history)
        .keys()
        .filter_map(|&disease| disease_trend(&history, disease).map(|trend| (disease, trend)))
        .collect();

    let forecast = history
        .first()
        .map(|latest| risk_forecast(latest.risk_score))
        .unwrap_or_default();

    let lifestyle = history
        .iter()
        .find(|record| record.disease == Disease::Heart)
        .and_then(|record| {
            record.answers.as_ref().map(|answers| {
                let heart_answers = AnswerSet {
                    disease: Disease::Heart,
                    answers: answers.clone(),
                };
                lifestyle_profile(&heart_answers, Some(record.risk_score))
            })
        });

    Ok(RiskReport {
        summary: history_summary(&history),
        aggregate_risk_index: aggregate_risk_index(&history),
        simulated_aggregate_index: aggregate_scores(&simulated_scores),
        simulation,
        trends,
        trajectory: risk_trajectory(&history),
        forecast,
        lifestyle,
    })
}
