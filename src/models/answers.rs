//! Answer sets
//!
//! An answer set maps question ids to selected option ids for one disease.
//! Partial sets are valid input everywhere.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::disease::Disease;

/// Selected answers for one disease and one assessment instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    /// Disease the answers belong to
    pub disease: Disease,
    /// Question id to option id
    #[serde(default)]
    pub answers: FxHashMap<String, String>,
}

impl AnswerSet {
    /// Create an empty answer set
    #[must_use]
    pub fn new(disease: Disease) -> Self {
        Self {
            disease,
            answers: FxHashMap::default(),
        }
    }

    /// Builder-style answer
    #[must_use]
    pub fn with_answer(mut self, question_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        self.set(question_id, option_id);
        self
    }

    /// Select an option, replacing any previous answer
    pub fn set(&mut self, question_id: impl Into<String>, option_id: impl Into<String>) {
        self.answers.insert(question_id.into(), option_id.into());
    }

    /// Clear an answer
    pub fn clear(&mut self, question_id: &str) -> Option<String> {
        self.answers.remove(question_id)
    }

    /// Selected option id for a question
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Number of answered questions, including ids unknown to any catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Check if nothing is answered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<K, V> Extend<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (question_id, option_id) in iter {
            self.set(question_id, option_id);
        }
    }
}
