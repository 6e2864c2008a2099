//! Built-in questionnaire tables
//!
//! Each option list runs from the highest-risk answer to the lowest-risk one.

use crate::models::disease::Disease;

/// Question id, prompt, and options as (option id, label)
pub(super) type QuestionRow = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

const HEART: &[QuestionRow] = &[
    (
        "exercise",
        "How often do you exercise per week?",
        &[("none", "Never"), ("1-2", "1-2 times"), ("3-4", "3-4 times"), ("5+", "5+ times")],
    ),
    (
        "oily_food",
        "How often do you consume oily/fried food?",
        &[("daily", "Daily"), ("weekly", "Few times a week"), ("rarely", "Rarely"), ("never", "Never")],
    ),
    (
        "sleep",
        "How many hours do you sleep daily?",
        &[("<5", "Less than 5 hours"), ("5-6", "5-6 hours"), ("7-8", "7-8 hours"), ("9+", "9+ hours")],
    ),
    (
        "stress",
        "What is your stress level at work/home?",
        &[("very_high", "Very high"), ("high", "High"), ("moderate", "Moderate"), ("low", "Low")],
    ),
    (
        "smoking_alcohol",
        "Do you smoke/consume alcohol?",
        &[("both", "Both regularly"), ("smoke", "Only smoke"), ("alcohol", "Only alcohol"), ("none", "Neither")],
    ),
];

const LUNG: &[QuestionRow] = &[
    (
        "smoking_status",
        "What is your smoking status?",
        &[("current", "Current smoker"), ("former", "Former smoker"), ("never", "Never smoked")],
    ),
    (
        "air_quality",
        "How is the air quality in your area?",
        &[("poor", "Poor"), ("moderate", "Moderate"), ("good", "Good"), ("excellent", "Excellent")],
    ),
    (
        "breathing",
        "Do you experience breathing difficulties?",
        &[("frequently", "Frequently"), ("sometimes", "Sometimes"), ("rarely", "Rarely"), ("never", "Never")],
    ),
    (
        "activity_level",
        "How active is your lifestyle?",
        &[
            ("sedentary", "Sedentary"),
            ("lightly", "Lightly active"),
            ("moderately", "Moderately active"),
            ("very", "Very active"),
        ],
    ),
    (
        "allergies",
        "Do you have any allergies or asthma?",
        &[("both", "Allergies and asthma"), ("asthma", "Asthma"), ("mild", "Mild allergies"), ("none", "None")],
    ),
];

const DIABETES: &[QuestionRow] = &[
    (
        "sugary_foods",
        "How often do you consume sugary foods/drinks?",
        &[("daily", "Daily"), ("weekly", "Few times a week"), ("rarely", "Rarely"), ("never", "Never")],
    ),
    (
        "physical_activity",
        "What is your physical activity level?",
        &[("sedentary", "Sedentary"), ("light", "Light"), ("moderate", "Moderate"), ("high", "High")],
    ),
    (
        "body_weight",
        "How would you describe your body weight?",
        &[("obese", "Obese"), ("overweight", "Overweight"), ("normal", "Normal"), ("underweight", "Underweight")],
    ),
    (
        "family_history",
        "Do you have a family history of diabetes?",
        &[("immediate", "Yes, immediate family"), ("distant", "Yes, extended family"), ("none", "No")],
    ),
    (
        "processed_food",
        "How often do you eat processed/junk food?",
        &[("daily", "Daily"), ("weekly", "Few times a week"), ("rarely", "Rarely"), ("never", "Never")],
    ),
];

const PCOD: &[QuestionRow] = &[
    (
        "menstrual_cycle",
        "How regular is your menstrual cycle?",
        &[
            ("very_irregular", "Very irregular"),
            ("irregular", "Somewhat irregular"),
            ("mostly_regular", "Mostly regular"),
            ("regular", "Always regular"),
        ],
    ),
    (
        "acne_hair",
        "Do you experience acne or excess hair growth?",
        &[("both", "Both frequently"), ("one", "One frequently"), ("occasional", "Occasionally"), ("none", "Never")],
    ),
    (
        "weight_gain",
        "Have you experienced unexplained weight gain?",
        &[("significant", "Significant"), ("moderate", "Moderate"), ("slight", "Slight"), ("none", "No")],
    ),
    (
        "stress_level",
        "What is your stress level?",
        &[("very_high", "Very high"), ("high", "High"), ("moderate", "Moderate"), ("low", "Low")],
    ),
    (
        "family_history_pcod",
        "Family history of PCOD/PCOS?",
        &[("immediate", "Yes, immediate family"), ("distant", "Yes, extended family"), ("none", "No")],
    ),
];

const THYROID: &[QuestionRow] = &[
    (
        "fatigue",
        "Do you experience unexplained fatigue?",
        &[("constantly", "Constantly"), ("frequently", "Frequently"), ("sometimes", "Sometimes"), ("never", "Never")],
    ),
    (
        "weight_changes",
        "Have you noticed unexplained weight changes?",
        &[
            ("significant", "Significant changes"),
            ("moderate", "Moderate changes"),
            ("slight", "Slight changes"),
            ("none", "No changes"),
        ],
    ),
    (
        "mood_changes",
        "Do you experience mood swings or depression?",
        &[("frequently", "Frequently"), ("sometimes", "Sometimes"), ("rarely", "Rarely"), ("never", "Never")],
    ),
    (
        "temperature_sensitivity",
        "Are you sensitive to cold or heat?",
        &[
            ("both", "Very sensitive to both"),
            ("one", "Sensitive to one"),
            ("slight", "Slightly sensitive"),
            ("neither", "Not sensitive"),
        ],
    ),
    (
        "family_history_thyroid",
        "Family history of thyroid disorders?",
        &[("immediate", "Yes, immediate family"), ("distant", "Yes, extended family"), ("none", "No")],
    ),
];

/// Extra ids sent by the assessment form, as (disease, question, option, aliases)
///
/// Each alias selects the listed option, so the option count and every
/// existing contribution stay unchanged.
const ALIASES: &[(Disease, &str, &str, &[&str])] = &[
    (Disease::Lung, "smoking_status", "former", &["passive"]),
    (Disease::Diabetes, "family_history", "immediate", &["both_parents"]),
    (Disease::Pcod, "menstrual_cycle", "very_irregular", &["absent"]),
    (Disease::Pcod, "acne_hair", "one", &["acne", "hair"]),
    (Disease::Pcod, "family_history_pcod", "immediate", &["multiple"]),
    (Disease::Thyroid, "fatigue", "sometimes", &["rarely"]),
    (Disease::Thyroid, "weight_changes", "significant", &["fluctuating"]),
    (Disease::Thyroid, "weight_changes", "moderate", &["gain", "loss"]),
    (Disease::Thyroid, "temperature_sensitivity", "one", &["cold", "heat"]),
    (Disease::Thyroid, "family_history_thyroid", "immediate", &["multiple"]),
];

/// Aliases of one built-in option
pub(super) fn aliases(disease: Disease, question_id: &str, option_id: &str) -> &'static [&'static str] {
    ALIASES
        .iter()
        .find(|(d, q, o, _)| *d == disease && *q == question_id && *o == option_id)
        .map(|&(_, _, _, aliases)| aliases)
        .unwrap_or_default()
}

/// Table for a disease
pub(super) const fn rows(disease: Disease) -> &'static [QuestionRow] {
    match disease {
        Disease::Heart => HEART,
        Disease::Lung => LUNG,
        Disease::Diabetes => DIABETES,
        Disease::Pcod => PCOD,
        Disease::Thyroid => THYROID,
    }
}
