//! Configuration for the risk engine.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskEngineError};
use crate::models::risk::{RiskScore, RiskThresholds};

/// Configuration for scoring, classification and fallback behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Score used when nothing is answered and no previous score is known
    pub default_score: RiskScore,
    /// Contribution of a question that has fewer than two options
    pub neutral_contribution: f64,
    /// Level boundaries
    pub thresholds: RiskThresholds,
    /// Lowest fallback score (inclusive)
    pub fallback_min: u8,
    /// Upper bound of fallback scores (exclusive)
    pub fallback_max: u8,
    /// How long to wait for the external analysis service
    pub analysis_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_score: RiskScore::NEUTRAL,
            neutral_contribution: 50.0,
            thresholds: RiskThresholds::default(),
            fallback_min: 20,
            fallback_max: 60,
            analysis_timeout_ms: 10_000,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Timeout for the external analysis call
    #[must_use]
    pub const fn analysis_timeout(&self) -> Duration {
        Duration::from_millis(self.analysis_timeout_ms)
    }

    /// Check that the values are consistent
    pub fn validate(&self) -> Result<()> {
        if self.thresholds.moderate > self.thresholds.elevated {
            return Err(RiskEngineError::Config(format!(
                "moderate threshold {} exceeds elevated threshold {}",
                self.thresholds.moderate, self.thresholds.elevated
            )));
        }
        if self.thresholds.elevated > 100 {
            return Err(RiskEngineError::Config(format!(
                "elevated threshold {} exceeds 100",
                self.thresholds.elevated
            )));
        }
        if self.fallback_min >= self.fallback_max || self.fallback_max > 101 {
            return Err(RiskEngineError::Config(format!(
                "fallback range {}..{} is empty or exceeds 0..=100",
                self.fallback_min, self.fallback_max
            )));
        }
        if !(0.0..=100.0).contains(&self.neutral_contribution) {
            return Err(RiskEngineError::Config(format!(
                "neutral contribution {} outside 0-100",
                self.neutral_contribution
            )));
        }
        Ok(())
    }
}

impl fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Engine Configuration:")?;
        writeln!(f, "  Default Score: {}", self.default_score)?;
        writeln!(f, "  Neutral Contribution: {}", self.neutral_contribution)?;
        writeln!(
            f,
            "  Thresholds: moderate >= {}, elevated >= {}",
            self.thresholds.moderate, self.thresholds.elevated
        )?;
        writeln!(f, "  Fallback Range: {}..{}", self.fallback_min, self.fallback_max)?;
        writeln!(f, "  Analysis Timeout: {:?}", self.analysis_timeout())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_score.value(), 50);
        assert_eq!(config.analysis_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"fallback_min": 25}"#).unwrap();
        assert_eq!(config.fallback_min, 25);
        assert_eq!(config.fallback_max, 60);
        assert_eq!(config.thresholds, RiskThresholds::default());
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let config = EngineConfig {
            thresholds: RiskThresholds {
                moderate: 70,
                elevated: 40,
            },
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(RiskEngineError::Config(_))));
    }

    #[test]
    fn test_rejects_empty_fallback_range() {
        let config = EngineConfig {
            fallback_min: 60,
            fallback_max: 60,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_display() {
        let text = EngineConfig::default().to_string();
        assert!(text.contains("Fallback Range: 20..60"));
    }
}
