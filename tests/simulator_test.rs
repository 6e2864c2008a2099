use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use health_risk::report::{ReportRequest, build_report};
use health_risk::{
    AnswerSet, AssessmentRecord, Catalog, Disease, EngineConfig, LifestyleSimulator, RiskChange,
    RiskScore, RiskTrend, aggregate_risk_index, aggregate_scores, compare, current_risks,
};

fn score(value: i64) -> RiskScore {
    RiskScore::new(value).unwrap()
}

fn record(disease: Disease, value: i64, day: u32) -> AssessmentRecord {
    AssessmentRecord::new(
        disease,
        score(value),
        Utc.with_ymd_and_hms(2025, 6, day, 10, 0, 0).unwrap(),
    )
}

#[test]
fn test_aggregate_index_examples() {
    assert_eq!(aggregate_scores(&[score(20), score(40), score(60)]), Some(score(40)));
    assert_eq!(aggregate_scores(&[]), None);
    assert_eq!(aggregate_risk_index(&[]), None);
}

#[test]
fn test_aggregate_index_uses_latest_per_disease() {
    let history = vec![
        record(Disease::Thyroid, 60, 20),
        record(Disease::Heart, 20, 19),
        record(Disease::Thyroid, 10, 5),
        record(Disease::Lung, 40, 4),
    ];
    assert_eq!(aggregate_risk_index(&history), Some(score(40)));
}

#[test]
fn test_delta_classification() {
    let cases = [
        (50, 40, -10, RiskChange::Improved, "improved"),
        (50, 50, 0, RiskChange::NoChange, "no change"),
        (50, 65, 15, RiskChange::Increased, "increased"),
    ];
    for (current, simulated, delta, change, label) in cases {
        let result = compare(score(current), score(simulated));
        assert_eq!(result.delta, delta);
        assert_eq!(result.change, change);
        assert_eq!(result.change.label(), label);
    }
}

#[test]
fn test_simulation_against_history() {
    let history = vec![record(Disease::Heart, 80, 10), record(Disease::Lung, 30, 9)];
    let current = current_risks(&history);
    assert_eq!(current.get(&Disease::Heart), Some(&score(80)));

    let hypothetical = vec![
        // Better habits on every heart question
        AnswerSet::new(Disease::Heart)
            .with_answer("exercise", "5+")
            .with_answer("oily_food", "never")
            .with_answer("sleep", "9+")
            .with_answer("stress", "low")
            .with_answer("smoking_alcohol", "none"),
        // Taking up smoking
        AnswerSet::new(Disease::Lung).with_answer("smoking_status", "current"),
        // Nothing answered
        AnswerSet::new(Disease::Thyroid),
    ];

    let simulator = LifestyleSimulator::new(Catalog::builtin(), EngineConfig::default());
    let report = simulator.simulate(&current, &hypothetical).unwrap();

    let heart = report.get(Disease::Heart).unwrap();
    assert_eq!(heart.delta.simulated, score(0));
    assert_eq!(heart.delta.delta, -80);
    assert_eq!(heart.delta.change, RiskChange::Improved);

    let lung = report.get(Disease::Lung).unwrap();
    assert_eq!(lung.delta.simulated, score(100));
    assert_eq!(lung.delta.change, RiskChange::Increased);

    let thyroid = report.get(Disease::Thyroid).unwrap();
    assert_eq!(thyroid.delta.simulated, score(50));
    assert_eq!(thyroid.delta.change, RiskChange::NoChange);
    assert!(!thyroid.previously_assessed);

    assert_eq!(report.improved_count(), 1);
    assert!(report.get(Disease::Pcod).is_none());
}

#[test]
fn test_simulation_does_not_need_history() {
    let simulator = LifestyleSimulator::new(Catalog::builtin(), EngineConfig::default());
    let answers = vec![AnswerSet::new(Disease::Diabetes).with_answer("family_history", "distant")];
    let report = simulator.simulate(&BTreeMap::new(), &answers).unwrap();
    let diabetes = report.get(Disease::Diabetes).unwrap();
    assert_eq!(diabetes.delta.current, score(50));
    assert_eq!(diabetes.delta.simulated, score(50));
}

#[test]
fn test_full_report() {
    let request: ReportRequest = serde_json::from_str(
        r#"{
            "history": [
                {"disease_type": "heart", "risk_score": 40, "created_at": "2025-06-01T09:00:00Z",
                 "answers": {"exercise": "1-2", "oily_food": "weekly", "sleep": "5-6", "stress": "high", "smoking_alcohol": "none"}},
                {"disease_type": "heart", "risk_score": 60, "created_at": "2025-06-08T09:00:00Z"},
                {"disease_type": "lung", "risk_score": 20, "created_at": "2025-06-08T12:00:00Z"}
            ],
            "answers": {
                "heart": {"exercise": "5+", "smoking_alcohol": "none"}
            }
        }"#,
    )
    .unwrap();

    let report = build_report(Catalog::builtin(), &EngineConfig::default(), &request).unwrap();

    assert_eq!(report.aggregate_risk_index, Some(score(40)));
    // Heart simulated to 0, lung stays at 20
    assert_eq!(report.simulated_aggregate_index, Some(score(10)));
    assert_eq!(report.trends.get(&Disease::Heart), Some(&RiskTrend::Declining));
    assert_eq!(report.trends.get(&Disease::Lung), Some(&RiskTrend::Stable));

    assert_eq!(report.trajectory.len(), 2);
    assert_eq!(report.trajectory[0].risk, score(40));
    assert_eq!(report.trajectory[1].risk, score(40));

    // Forecast starts from the newest record (lung, 20)
    assert_eq!(report.forecast[0].improved, score(20));
    assert_eq!(report.forecast[3].unchanged, score(40));

    let lifestyle = report.lifestyle.unwrap();
    assert_eq!(lifestyle.activity, 45);
    assert_eq!(lifestyle.nutrition, 55);
    assert_eq!(lifestyle.heart_age_offset, -1);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["simulation"]["results"]["heart"]["delta"]["change"], "improved");
}
