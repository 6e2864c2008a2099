//! Supported assessment domains

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RiskEngineError;

/// One of the five conditions a user can assess
///
/// Serialized as its lowercase id. Deserialization accepts anything `FromStr`
/// does, so stored rows such as `"Heart"` or `"PCOD/PCOS"` load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Disease {
    /// Heart disease
    Heart,
    /// Lung disease
    Lung,
    /// Type 2 diabetes
    Diabetes,
    /// PCOD/PCOS
    Pcod,
    /// Thyroid disorders
    Thyroid,
}

impl Disease {
    /// All diseases in catalog order
    pub const ALL: [Self; 5] = [
        Self::Heart,
        Self::Lung,
        Self::Diabetes,
        Self::Pcod,
        Self::Thyroid,
    ];

    /// Stable identifier used on the wire
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Lung => "lung",
            Self::Diabetes => "diabetes",
            Self::Pcod => "pcod",
            Self::Thyroid => "thyroid",
        }
    }

    /// Get the display name for this disease
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Heart => "Heart Disease",
            Self::Lung => "Lung Disease",
            Self::Diabetes => "Type 2 Diabetes",
            Self::Pcod => "PCOD/PCOS",
            Self::Thyroid => "Thyroid",
        }
    }
}

impl FromStr for Disease {
    type Err = RiskEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heart" => Ok(Self::Heart),
            "lung" => Ok(Self::Lung),
            "diabetes" => Ok(Self::Diabetes),
            "pcod" | "pcos" | "pcod/pcos" => Ok(Self::Pcod),
            "thyroid" => Ok(Self::Thyroid),
            _ => Err(RiskEngineError::UnknownDisease(s.to_string())),
        }
    }
}

impl TryFrom<String> for Disease {
    type Error = RiskEngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
