//! Domain models for risk assessment
//!
//! This module contains the value types shared by the catalog, the scoring
//! strategies and the history analytics.

pub mod answers;
pub mod assessment;
pub mod disease;
pub mod questionnaire;
pub mod risk;

// Re-export commonly used types
pub use answers::AnswerSet;
pub use assessment::AssessmentRecord;
pub use disease::Disease;
pub use questionnaire::{AnswerOption, Question};
pub use risk::{RiskLevel, RiskScore, RiskThresholds};
