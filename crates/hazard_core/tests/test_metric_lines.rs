//! Metric line emission. Kept to a single test: the line buffer is
//! process-wide.

mod common;

use common::{scenario, valid_baseline};
use hazard_core::{AnalysisMetrics, MachineryState, analyze_scenario, take_analysis_metric_lines};

#[test]
fn test_outcomes_emit_metric_lines() {
    let _ = take_analysis_metric_lines();
    let mut metrics = AnalysisMetrics::new();

    analyze_scenario(&valid_baseline(), &mut metrics).expect("valid");
    analyze_scenario(&scenario(95.0, -3.0, MachineryState::Normal), &mut metrics)
        .expect_err("negative density");

    let lines = take_analysis_metric_lines();
    assert_eq!(
        lines,
        [
            "hazard_risk_level_total{level=LOW}",
            "hazard_scenario_reject_total{reason=WorkerDensityOutOfRange}",
        ]
    );
    assert!(take_analysis_metric_lines().is_empty(), "drain clears buffer");
}
