#![forbid(unsafe_code)]

pub mod analysis;
pub mod domain;
pub mod fingerprint;
pub mod service;

pub use analysis::{
    AnalysisMetrics, HazardAssessment, analyze_scenario, risk_level_total, scenario_reject_total,
    take_analysis_metric_lines,
};
pub use domain::{
    MachineryState, RiskLevel, RobotScenario, make_scenario, parse_machinery_state,
    risk_level_from_score,
};
pub use fingerprint::{format_fingerprint, scenario_fingerprint};
pub use service::{
    HazardBreakdown, InvalidScenarioError, InvalidScenarioReason, calculate_score,
    hazard_breakdown, recommendation_for, validate, validate_scenario,
};
