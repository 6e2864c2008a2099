//! Questionnaire catalog
//!
//! The catalog maps each disease to its ordered questions. The built-in
//! catalog covers all five diseases; custom catalogs can be loaded from JSON
//! and are validated before use.

mod builtin;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskEngineError};
use crate::models::disease::Disease;
use crate::models::questionnaire::{AnswerOption, Question};

/// Disease to question list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    questionnaires: BTreeMap<Disease, Vec<Question>>,
}

impl Catalog {
    /// Create a catalog from prepared questionnaires, validating it
    pub fn new(questionnaires: BTreeMap<Disease, Vec<Question>>) -> Result<Self> {
        let catalog = Self { questionnaires };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in five-disease catalog
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let questionnaires = Disease::ALL
                .iter()
                .map(|&disease| {
                    let questions = builtin::rows(disease)
                        .iter()
                        .map(|(id, prompt, options)| {
                            let options = options
                                .iter()
                                .map(|(option_id, label)| {
                                    AnswerOption::new(*option_id, *label)
                                        .with_aliases(builtin::aliases(disease, id, option_id).iter().copied())
                                })
                                .collect();
                            Question::new(*id, *prompt, options)
                        })
                        .collect();
                    (disease, questions)
                })
                .collect();
            Self { questionnaires }
        })
    }

    /// Parse and validate a catalog from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Questions for a disease
    pub fn questions(&self, disease: Disease) -> Result<&[Question]> {
        self.questionnaires
            .get(&disease)
            .map(Vec::as_slice)
            .ok_or_else(|| RiskEngineError::UnknownDisease(disease.id().to_string()))
    }

    /// Look up one question
    #[must_use]
    pub fn question(&self, disease: Disease, question_id: &str) -> Option<&Question> {
        self.questionnaires
            .get(&disease)?
            .iter()
            .find(|question| question.id == question_id)
    }

    /// Diseases present in this catalog
    pub fn diseases(&self) -> impl Iterator<Item = Disease> + '_ {
        self.questionnaires.keys().copied()
    }

    /// Check catalog invariants
    ///
    /// Rejects empty option lists and duplicate ids, counting aliases as
    /// ids. Single-option questions
    /// are accepted but logged, since they always score neutrally.
    pub fn validate(&self) -> Result<()> {
        for (disease, questions) in &self.questionnaires {
            let mut question_ids = HashSet::new();
            for question in questions {
                if !question_ids.insert(question.id.as_str()) {
                    return Err(RiskEngineError::InvalidCatalog(format!(
                        "duplicate question id '{}' in {disease}",
                        question.id
                    )));
                }

                if question.options.is_empty() {
                    return Err(RiskEngineError::InvalidCatalog(format!(
                        "question '{}' in {disease} has no options",
                        question.id
                    )));
                }

                let mut option_ids = HashSet::new();
                for option_id in question
                    .options
                    .iter()
                    .flat_map(|option| std::iter::once(&option.id).chain(&option.aliases))
                {
                    if !option_ids.insert(option_id.as_str()) {
                        return Err(RiskEngineError::InvalidCatalog(format!(
                            "duplicate option id '{option_id}' in question '{}'",
                            question.id
                        )));
                    }
                }

                if question.options.len() == 1 {
                    warn!(
                        "Question '{}' in {disease} has a single option and will score neutrally",
                        question.id
                    );
                }
            }
        }
        Ok(())
    }
}
