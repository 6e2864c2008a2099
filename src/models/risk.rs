//! Risk score and risk level types
//!
//! A `RiskScore` is an integer in `0..=100`. A `RiskLevel` is the three-way
//! classification derived from it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskEngineError};
use crate::utils::math::round_half_up;

/// Integer risk score in `0..=100`
///
/// Stored scores may be fractional (`44.6`); they are rounded half up on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub struct RiskScore(u8);

impl RiskScore {
    /// Lowest possible score
    pub const MIN: Self = Self(0);
    /// Highest possible score
    pub const MAX: Self = Self(100);
    /// Midpoint, used when nothing better is known
    pub const NEUTRAL: Self = Self(50);

    /// Create a score, rejecting values outside `0..=100`
    pub fn new(value: i64) -> Result<Self> {
        if (0..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RiskEngineError::InvalidScore(value as f64))
        }
    }

    /// Round a fractional score half up, then range-check it
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(RiskEngineError::InvalidScore(value));
        }
        Self::new(round_half_up(value)).map_err(|_| RiskEngineError::InvalidScore(value))
    }

    /// Create a score, saturating values outside `0..=100`
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Get the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Classify with the default thresholds
    #[must_use]
    pub fn level(self) -> RiskLevel {
        RiskLevel::from_score(self)
    }
}

impl TryFrom<f64> for RiskScore {
    type Error = RiskEngineError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}

impl From<RiskScore> for u8 {
    fn from(score: RiskScore) -> Self {
        score.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Score boundaries between risk levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Lowest score classified as moderate
    pub moderate: u8,
    /// Lowest score classified as elevated
    pub elevated: u8,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            moderate: 30,
            elevated: 60,
        }
    }
}

/// Three-way classification of a risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Below the moderate threshold
    Low,
    /// Between the moderate and elevated thresholds
    Moderate,
    /// At or above the elevated threshold
    #[serde(alias = "high")]
    Elevated,
}

impl RiskLevel {
    /// Classify a score with the default thresholds (30 and 60)
    #[must_use]
    pub fn from_score(score: RiskScore) -> Self {
        Self::from_score_with_thresholds(score, &RiskThresholds::default())
    }

    /// Classify a score with custom thresholds
    #[must_use]
    pub const fn from_score_with_thresholds(score: RiskScore, thresholds: &RiskThresholds) -> Self {
        if score.0 >= thresholds.elevated {
            Self::Elevated
        } else if score.0 >= thresholds.moderate {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Lowercase label used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Elevated => "elevated",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: i64) -> RiskScore {
        RiskScore::new(value).unwrap()
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_score(score(0)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(score(29)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(score(30)), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(score(59)), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(score(60)), RiskLevel::Elevated);
        assert_eq!(RiskLevel::from_score(score(100)), RiskLevel::Elevated);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(score(29).level().to_string(), "low");
        assert_eq!(score(30).level().to_string(), "moderate");
        assert_eq!(score(60).level().to_string(), "elevated");
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = RiskThresholds {
            moderate: 40,
            elevated: 70,
        };
        assert_eq!(
            RiskLevel::from_score_with_thresholds(score(39), &thresholds),
            RiskLevel::Low
        );
        assert_eq!(
            RiskLevel::from_score_with_thresholds(score(69), &thresholds),
            RiskLevel::Moderate
        );
        assert_eq!(
            RiskLevel::from_score_with_thresholds(score(70), &thresholds),
            RiskLevel::Elevated
        );
    }

    #[test]
    fn test_score_range() {
        assert!(RiskScore::new(-1).is_err());
        assert!(RiskScore::new(101).is_err());
        assert_eq!(RiskScore::clamped(150), RiskScore::MAX);
        assert_eq!(RiskScore::clamped(-3), RiskScore::MIN);
    }

    #[test]
    fn test_score_serde() {
        let parsed: RiskScore = serde_json::from_str("42").unwrap();
        assert_eq!(parsed.value(), 42);
        assert!(serde_json::from_str::<RiskScore>("120").is_err());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "42");
    }

    #[test]
    fn test_fractional_scores_round_half_up() {
        for json in ["45.0", "44.6", "44.5", "45"] {
            let parsed: RiskScore = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.value(), 45, "{json}");
        }
        assert_eq!(RiskScore::from_f64(99.7).unwrap(), RiskScore::MAX);
        assert!(RiskScore::from_f64(100.6).is_err());
        assert!(RiskScore::from_f64(-0.6).is_err());
        assert!(matches!(
            RiskScore::from_f64(f64::NAN),
            Err(RiskEngineError::InvalidScore(_))
        ));
    }

    #[test]
    fn test_stored_high_level_reads_as_elevated() {
        let level: RiskLevel = serde_json::from_str(r#""high""#).unwrap();
        assert_eq!(level, RiskLevel::Elevated);
    }
}
