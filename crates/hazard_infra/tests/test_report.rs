//! Text and JSON rendering of analysis outcomes.

use hazard_core::{
    AnalysisMetrics, InvalidScenarioError, InvalidScenarioReason, MachineryState, RobotScenario,
    analyze_scenario,
};
use hazard_infra::report::{
    AnalysisReport, render_json, render_rejection_json, render_rejection_text, render_text,
};
use serde_json::Value;

const RULE: &str = "----------------------------------------";

fn assess(p: f64, d: f64, state: MachineryState) -> hazard_core::HazardAssessment {
    analyze_scenario(
        &RobotScenario::new(p, d, Some(state)),
        &mut AnalysisMetrics::new(),
    )
    .expect("valid scenario")
}

#[test]
fn test_text_report_layout() {
    let a = assess(0.0, 200.0, MachineryState::CriticalFault);
    let expected = format!(
        "\nAnalysis Result\n{RULE}\nHazard Risk Score: 97.50 / 100\nRisk Level: CRITICAL\n\
         Recommendation: Stop operation now and perform emergency maintenance.\n{RULE}\n"
    );
    assert_eq!(render_text(&a), expected);
}

#[test]
fn test_text_score_has_two_decimals() {
    // 0.40*80 + 0.35*75 + 0.25*50 = 70.75
    let a = assess(20.0, 150.0, MachineryState::MaintenanceDue);
    assert!(render_text(&a).contains("Hazard Risk Score: 70.75 / 100"));

    // 0.40*40 + 0.35*50 + 0.25*10 = 36
    let a = assess(60.0, 100.0, MachineryState::Normal);
    let text = render_text(&a);
    assert!(text.contains("Hazard Risk Score: 36.00 / 100"));
    assert!(text.contains("Risk Level: MODERATE"));
}

#[test]
fn test_rejection_text() {
    let err = InvalidScenarioError::new(InvalidScenarioReason::WorkerDensityNotFinite);
    assert_eq!(
        render_rejection_text(&err),
        "\nInvalid Scenario: Worker density must be a valid number.\n"
    );
}

#[test]
fn test_json_report_fields() {
    let a = assess(95.0, 20.0, MachineryState::Normal);
    let line = render_json(&a).unwrap();
    assert!(line.ends_with('\n'));
    assert_eq!(line.matches('\n').count(), 1, "one object per line");

    let v: Value = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(v["machinery_state"], "NORMAL");
    assert_eq!(v["risk_level"], "LOW");
    assert_eq!(
        v["recommendation"],
        "Continue monitoring and follow standard safety checks."
    );
    assert_eq!(v["arm_precision_percent"], 95.0);
    assert_eq!(v["worker_density_per_100m2"], 20.0);
    assert!((v["score"].as_f64().unwrap() - 8.0).abs() < 1e-9);
    assert_eq!(v["fingerprint"].as_str().unwrap().len(), 16);

    let report = AnalysisReport::from(&a);
    assert_eq!(v["fingerprint"], report.fingerprint.as_str());
}

#[test]
fn test_rejection_json() {
    let err = InvalidScenarioError::new(InvalidScenarioReason::MachineryStateUnrecognized);
    assert_eq!(
        render_rejection_json(&err).unwrap(),
        "{\"error\":\"Machinery state must be NORMAL / MAINTENANCE_DUE / CRITICAL_FAULT.\"}\n"
    );
}
