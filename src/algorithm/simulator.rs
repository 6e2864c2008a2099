//! What-if lifestyle simulator
//!
//! Recomputes scores from hypothetical answers with the interpolation
//! strategy and compares them against the user's current scores. Nothing is
//! persisted.

use std::collections::BTreeMap;
use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::algorithm::aggregate::latest_by_disease;
use crate::algorithm::scoring::InterpolationScorer;
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::answers::AnswerSet;
use crate::models::assessment::AssessmentRecord;
use crate::models::disease::Disease;
use crate::models::risk::{RiskLevel, RiskScore};

/// Direction of a simulated change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskChange {
    /// Simulated score is lower
    Improved,
    /// Simulated score is higher
    Increased,
    /// Scores are equal
    NoChange,
}

impl RiskChange {
    /// Classify a signed delta
    #[must_use]
    pub const fn from_delta(delta: i16) -> Self {
        if delta < 0 {
            Self::Improved
        } else if delta > 0 {
            Self::Increased
        } else {
            Self::NoChange
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Improved => "improved",
            Self::Increased => "increased",
            Self::NoChange => "no change",
        }
    }
}

impl fmt::Display for RiskChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Difference between a current and a simulated score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDelta {
    /// Score before the hypothetical change
    pub current: RiskScore,
    /// Score after the hypothetical change
    pub simulated: RiskScore,
    /// `simulated - current`
    pub delta: i16,
    /// Direction of `delta`
    pub change: RiskChange,
}

impl fmt::Display for RiskDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+} ({})", self.delta, self.change)
    }
}

/// Compare a current score with a simulated one
#[must_use]
pub fn compare(current: RiskScore, simulated: RiskScore) -> RiskDelta {
    let delta = i16::from(simulated.value()) - i16::from(current.value());
    RiskDelta {
        current,
        simulated,
        delta,
        change: RiskChange::from_delta(delta),
    }
}

/// Latest score per disease from a newest-first history
#[must_use]
pub fn current_risks(records: &[AssessmentRecord]) -> BTreeMap<Disease, RiskScore> {
    latest_by_disease(records)
        .into_iter()
        .map(|(disease, record)| (disease, record.risk_score))
        .collect()
}

/// Simulated outcome for one disease
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedRisk {
    /// Simulated disease
    pub disease: Disease,
    /// Comparison with the current score
    pub delta: RiskDelta,
    /// Classification of the simulated score
    pub level: RiskLevel,
    /// Whether a current score existed before the simulation
    pub previously_assessed: bool,
}

/// Outcome of a simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Results keyed by disease
    pub results: BTreeMap<Disease, SimulatedRisk>,
}

impl SimulationReport {
    /// Result for one disease
    #[must_use]
    pub fn get(&self, disease: Disease) -> Option<&SimulatedRisk> {
        self.results.get(&disease)
    }

    /// Number of diseases whose simulated score went down
    #[must_use]
    pub fn improved_count(&self) -> usize {
        self.results
            .values()
            .filter(|result| result.delta.change == RiskChange::Improved)
            .count()
    }
}

/// Runs what-if simulations against a catalog
#[derive(Debug, Clone)]
pub struct LifestyleSimulator<'c> {
    scorer: InterpolationScorer<'c>,
    config: EngineConfig,
}

impl<'c> LifestyleSimulator<'c> {
    /// Create a simulator
    #[must_use]
    pub fn new(catalog: &'c Catalog, config: EngineConfig) -> Self {
        Self {
            scorer: InterpolationScorer::new(catalog, config.clone()),
            config,
        }
    }

    /// Simulate one disease
    ///
    /// With no answered questions the simulated score equals the current one.
    pub fn simulate_one(&self, current: Option<RiskScore>, answers: &AnswerSet) -> Result<SimulatedRisk> {
        let baseline = current.unwrap_or(self.config.default_score);
        let scored = self.scorer.score(answers, Some(baseline))?;
        Ok(SimulatedRisk {
            disease: answers.disease,
            delta: compare(baseline, scored.score),
            level: scored.level,
            previously_assessed: current.is_some(),
        })
    }

    /// Simulate every disease that has a hypothetical answer set
    ///
    /// A later answer set for the same disease replaces an earlier one.
    pub fn simulate(
        &self,
        current: &BTreeMap<Disease, RiskScore>,
        hypothetical: &[AnswerSet],
    ) -> Result<SimulationReport> {
        let mut report = SimulationReport::default();
        for answers in hypothetical {
            let result = self.simulate_one(current.get(&answers.disease).copied(), answers)?;
            report.results.insert(answers.disease, result);
        }

        info!(
            "Simulated {} diseases, {} improved",
            report.results.len(),
            report.improved_count()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: i64) -> RiskScore {
        RiskScore::new(value).unwrap()
    }

    #[test]
    fn test_compare() {
        let improved = compare(score(50), score(40));
        assert_eq!(improved.delta, -10);
        assert_eq!(improved.change, RiskChange::Improved);
        assert_eq!(improved.change.to_string(), "improved");

        let same = compare(score(50), score(50));
        assert_eq!(same.delta, 0);
        assert_eq!(same.change.to_string(), "no change");

        let worse = compare(score(50), score(65));
        assert_eq!(worse.delta, 15);
        assert_eq!(worse.change.to_string(), "increased");
        assert_eq!(worse.to_string(), "+15 (increased)");
    }

    #[test]
    fn test_unanswered_disease_keeps_current_score() {
        let simulator = LifestyleSimulator::new(Catalog::builtin(), EngineConfig::default());
        let result = simulator
            .simulate_one(Some(score(64)), &AnswerSet::new(Disease::Diabetes))
            .unwrap();
        assert_eq!(result.delta.simulated, score(64));
        assert_eq!(result.delta.change, RiskChange::NoChange);
        assert!(result.previously_assessed);
    }

    #[test]
    fn test_unassessed_disease_uses_default_baseline() {
        let simulator = LifestyleSimulator::new(Catalog::builtin(), EngineConfig::default());
        let answers = AnswerSet::new(Disease::Heart).with_answer("exercise", "5+");
        let result = simulator.simulate_one(None, &answers).unwrap();
        assert_eq!(result.delta.current, score(50));
        assert_eq!(result.delta.simulated, score(0));
        assert_eq!(result.delta.delta, -50);
        assert!(!result.previously_assessed);
    }
}
