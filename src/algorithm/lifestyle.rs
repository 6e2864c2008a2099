//! Lifestyle pillar profile
//!
//! Derives five 0-100 pillar scores (higher is healthier) from the heart
//! questionnaire, plus a heart-age offset and a peer percentile.

use serde::{Deserialize, Serialize};

use crate::models::answers::AnswerSet;
use crate::models::risk::RiskScore;
use crate::utils::math::round_half_up;

/// Pillar value when the question is unanswered or the option is unknown
const UNANSWERED_PILLAR: u8 = 50;

const NUTRITION: &[(&str, u8)] = &[("never", 95), ("rarely", 80), ("weekly", 55), ("daily", 25)];
const ACTIVITY: &[(&str, u8)] = &[("5+", 95), ("3-4", 75), ("1-2", 45), ("none", 15)];
const STRESS: &[(&str, u8)] = &[("low", 90), ("moderate", 65), ("high", 35), ("very_high", 15)];
const SLEEP: &[(&str, u8)] = &[("7-8", 95), ("9+", 75), ("5-6", 50), ("<5", 20)];
const SUBSTANCE: &[(&str, u8)] = &[("none", 100), ("alcohol", 60), ("smoke", 40), ("both", 15)];

fn pillar(answers: &AnswerSet, question_id: &str, table: &[(&str, u8)]) -> u8 {
    answers
        .get(question_id)
        .and_then(|option_id| table.iter().find(|(id, _)| *id == option_id))
        .map_or(UNANSWERED_PILLAR, |&(_, value)| value)
}

/// Pillar scores and derived indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleProfile {
    /// Diet quality, from fried food intake
    pub nutrition: u8,
    /// Exercise frequency
    pub activity: u8,
    /// Inverse of reported stress
    pub stress: u8,
    /// Sleep duration quality
    pub sleep: u8,
    /// Absence of smoking and alcohol
    pub substance: u8,
    /// Years to add to calendar age for the biological heart age
    pub heart_age_offset: i8,
    /// Rounded mean of the pillars
    pub percentile: u8,
}

impl LifestyleProfile {
    /// Biological heart age for a calendar age
    #[must_use]
    pub fn heart_age(&self, calendar_age: u32) -> u32 {
        calendar_age.saturating_add_signed(i32::from(self.heart_age_offset))
    }
}

/// Build a profile from heart answers and the latest heart score
///
/// A missing heart score counts as 50.
#[must_use]
pub fn lifestyle_profile(heart_answers: &AnswerSet, heart_score: Option<RiskScore>) -> LifestyleProfile {
    let nutrition = pillar(heart_answers, "oily_food", NUTRITION);
    let activity = pillar(heart_answers, "exercise", ACTIVITY);
    let stress = pillar(heart_answers, "stress", STRESS);
    let sleep = pillar(heart_answers, "sleep", SLEEP);
    let substance = pillar(heart_answers, "smoking_alcohol", SUBSTANCE);

    let heart_score = f64::from(heart_score.unwrap_or(RiskScore::NEUTRAL).value());
    let heart_age_offset = round_half_up((heart_score - 50.0) / 10.0) as i8;

    let total: u32 = [nutrition, activity, stress, sleep, substance]
        .iter()
        .map(|&value| u32::from(value))
        .sum();
    let percentile = round_half_up(f64::from(total) / 5.0) as u8;

    LifestyleProfile {
        nutrition,
        activity,
        stress,
        sleep,
        substance,
        heart_age_offset,
        percentile,
    }
}
