//! History trends, trajectory and forecast
//!
//! All functions take history newest first, the order the store returns it.

use std::fmt;

use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::models::assessment::AssessmentRecord;
use crate::models::disease::Disease;
use crate::models::risk::RiskScore;
use crate::utils::math::{mean, round_half_up};

/// Direction of the two most recent assessments of a disease
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTrend {
    /// Latest score is lower than the previous one
    Improving,
    /// Latest score is higher than the previous one
    Declining,
    /// Equal scores, or only one assessment
    Stable,
}

impl fmt::Display for RiskTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        };
        write!(f, "{label}")
    }
}

/// Trend of one disease, `None` if it was never assessed
#[must_use]
pub fn disease_trend(records: &[AssessmentRecord], disease: Disease) -> Option<RiskTrend> {
    let mut scores = records
        .iter()
        .filter(|record| record.disease == disease)
        .map(|record| record.risk_score);

    let latest = scores.next()?;
    let trend = match scores.next() {
        Some(previous) if latest < previous => RiskTrend::Improving,
        Some(previous) if latest > previous => RiskTrend::Declining,
        _ => RiskTrend::Stable,
    };
    Some(trend)
}

/// Headline numbers of a user's history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Number of stored assessments
    pub total_assessments: usize,
    /// Newest score minus oldest score across all diseases
    pub risk_change: i16,
}

/// Summarize history, newest first
///
/// `risk_change` is 0 for an empty history or when the oldest score is 0.
#[must_use]
pub fn history_summary(records: &[AssessmentRecord]) -> HistorySummary {
    let risk_change = match (records.first(), records.last()) {
        (Some(latest), Some(first)) if first.risk_score != RiskScore::MIN => {
            i16::from(latest.risk_score.value()) - i16::from(first.risk_score.value())
        }
        _ => 0,
    };
    HistorySummary {
        total_assessments: records.len(),
        risk_change,
    }
}

/// Mean score of one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// UTC calendar day
    pub date: NaiveDate,
    /// Rounded mean of that day's scores
    pub risk: RiskScore,
    /// Number of assessments that day
    pub count: usize,
}

/// Per-day mean scores across all diseases, oldest day first
#[must_use]
pub fn risk_trajectory(records: &[AssessmentRecord]) -> Vec<TrajectoryPoint> {
    records
        .iter()
        .map(|record| (record.date(), f64::from(record.risk_score.value())))
        .into_group_map()
        .into_iter()
        .filter_map(|(date, scores)| {
            let count = scores.len();
            mean(scores).map(|average| TrajectoryPoint {
                date,
                risk: RiskScore::clamped(round_half_up(average)),
                count,
            })
        })
        .sorted_by_key(|point| point.date)
        .collect()
}

/// Projected score a number of months ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Months from now
    pub month: u8,
    /// Projection with sustained habit improvements
    pub improved: RiskScore,
    /// Projection with unchanged habits
    pub unchanged: RiskScore,
}

/// (month, improvement, deterioration) steps of the forecast
const FORECAST_STEPS: [(u8, i64, i64); 4] = [(0, 0, 0), (2, 10, 5), (4, 20, 12), (6, 25, 20)];

/// Floor of the improved projection once habits change
const IMPROVED_FLOOR: i64 = 10;

/// Six-month forecast from a current score
///
/// The improved curve never drops below 10 after month 0; the unchanged
/// curve never exceeds 100.
#[must_use]
pub fn risk_forecast(score: RiskScore) -> Vec<ForecastPoint> {
    let current = i64::from(score.value());
    FORECAST_STEPS
        .iter()
        .map(|&(month, improvement, deterioration)| {
            if month == 0 {
                return ForecastPoint {
                    month,
                    improved: score,
                    unchanged: score,
                };
            }
            ForecastPoint {
                month,
                improved: RiskScore::clamped((current - improvement).max(IMPROVED_FLOOR)),
                unchanged: RiskScore::clamped((current + deterioration).min(100)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn score(value: i64) -> RiskScore {
        RiskScore::new(value).unwrap()
    }

    fn record(disease: Disease, value: i64, day: u32, hour: u32) -> AssessmentRecord {
        AssessmentRecord::new(
            disease,
            score(value),
            Utc.with_ymd_and_hms(2025, 5, day, hour, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_disease_trend() {
        let records = vec![
            record(Disease::Heart, 30, 3, 9),
            record(Disease::Lung, 70, 2, 9),
            record(Disease::Heart, 45, 1, 9),
            record(Disease::Lung, 60, 1, 8),
        ];
        assert_eq!(disease_trend(&records, Disease::Heart), Some(RiskTrend::Improving));
        assert_eq!(disease_trend(&records, Disease::Lung), Some(RiskTrend::Declining));
        assert_eq!(disease_trend(&records, Disease::Thyroid), None);

        let single = vec![record(Disease::Pcod, 20, 1, 9)];
        assert_eq!(disease_trend(&single, Disease::Pcod), Some(RiskTrend::Stable));
    }

    #[test]
    fn test_history_summary() {
        let records = vec![
            record(Disease::Heart, 35, 3, 9),
            record(Disease::Lung, 70, 2, 9),
            record(Disease::Heart, 50, 1, 9),
        ];
        let summary = history_summary(&records);
        assert_eq!(summary.total_assessments, 3);
        assert_eq!(summary.risk_change, -15);

        let single = vec![record(Disease::Thyroid, 40, 1, 9)];
        assert_eq!(history_summary(&single).risk_change, 0);
    }

    #[test]
    fn test_history_summary_edge_cases() {
        assert_eq!(history_summary(&[]), HistorySummary::default());

        let from_zero = vec![record(Disease::Heart, 80, 2, 9), record(Disease::Heart, 0, 1, 9)];
        let summary = history_summary(&from_zero);
        assert_eq!(summary.total_assessments, 2);
        assert_eq!(summary.risk_change, 0);
    }

    #[test]
    fn test_trajectory_groups_by_day() {
        let records = vec![
            record(Disease::Heart, 41, 2, 18),
            record(Disease::Lung, 60, 2, 9),
            record(Disease::Heart, 20, 1, 9),
        ];
        let points = risk_trajectory(&records);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert_eq!(points[0].risk, score(20));
        assert_eq!(points[1].risk, score(51));
        assert_eq!(points[1].count, 2);
    }

    #[test]
    fn test_forecast() {
        let forecast = risk_forecast(score(30));
        assert_eq!(forecast.len(), 4);
        assert_eq!(forecast[0].improved, score(30));
        assert_eq!(forecast[1].improved, score(20));
        assert_eq!(forecast[2].improved, score(10));
        assert_eq!(forecast[3].improved, score(10));
        assert_eq!(forecast[3].unchanged, score(50));

        let high = risk_forecast(score(95));
        assert_eq!(high[3].unchanged, score(100));
    }
}
