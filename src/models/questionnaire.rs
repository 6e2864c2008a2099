//! Questionnaire building blocks
//!
//! Options are listed in severity order: index 0 is the highest-risk answer
//! and the last index the lowest-risk answer. Labels are display text only.

use serde::{Deserialize, Serialize};

/// A selectable answer with a stable identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Stable identifier stored in answer sets
    pub id: String,
    /// Human-readable label
    pub label: String,
    /// Other ids that select this option
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl AnswerOption {
    /// Create a new option
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            aliases: Vec::new(),
        }
    }

    /// Add ids that select this option
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Whether `option_id` selects this option
    #[must_use]
    pub fn matches(&self, option_id: &str) -> bool {
        self.id == option_id || self.aliases.iter().any(|alias| alias == option_id)
    }
}

/// A single question with its ordered options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier used as the answer-set key
    pub id: String,
    /// Prompt shown to the user
    pub prompt: String,
    /// Options in severity order, highest risk first
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Create a new question
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }

    /// Position of an option id or alias in severity order
    #[must_use]
    pub fn option_index(&self, option_id: &str) -> Option<usize> {
        self.options.iter().position(|option| option.matches(option_id))
    }

    /// Number of options
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// The highest-risk option
    #[must_use]
    pub fn highest_risk_option(&self) -> Option<&AnswerOption> {
        self.options.first()
    }

    /// The lowest-risk option
    #[must_use]
    pub fn lowest_risk_option(&self) -> Option<&AnswerOption> {
        self.options.last()
    }
}
