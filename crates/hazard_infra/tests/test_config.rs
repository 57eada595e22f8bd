//! Command-line flags and the fixed model table.

use std::collections::HashSet;

use clap::{CommandFactory, Parser};
use hazard_infra::config::{
    ALL_PARAMS, EXPECTED_PARAM_COUNT, ModelParam, ReportFormat, SessionConfig, param_name,
    param_value, render_model_table,
};

#[test]
fn test_cli_definition_is_consistent() {
    SessionConfig::command().debug_assert();
}

#[test]
fn test_defaults_without_flags() {
    let c = SessionConfig::try_parse_from(["hazard-analyzer"]).unwrap();
    assert!(!c.once);
    assert!(!c.show_model);
    assert_eq!(c.format, ReportFormat::Text);
    assert_eq!(c.log_level, tracing::Level::WARN);

    let d = SessionConfig::default();
    assert_eq!((d.once, d.format, d.log_level), (c.once, c.format, c.log_level));
}

#[test]
fn test_all_flags_parse() {
    let c = SessionConfig::try_parse_from([
        "hazard-analyzer",
        "--once",
        "--format",
        "json",
        "--log-level",
        "debug",
        "--show-model",
    ])
    .unwrap();
    assert!(c.once);
    assert!(c.show_model);
    assert_eq!(c.format, ReportFormat::Json);
    assert_eq!(c.log_level, tracing::Level::DEBUG);
}

#[test]
fn test_bad_flag_values_rejected() {
    assert!(SessionConfig::try_parse_from(["hazard-analyzer", "--format", "xml"]).is_err());
    assert!(SessionConfig::try_parse_from(["hazard-analyzer", "--log-level", "loud"]).is_err());
}

#[test]
fn test_model_table_is_complete() {
    assert_eq!(ALL_PARAMS.len(), EXPECTED_PARAM_COUNT);
    let names: HashSet<&str> = ALL_PARAMS.iter().map(|&p| param_name(p)).collect();
    assert_eq!(names.len(), ALL_PARAMS.len(), "param names must be unique");
}

#[test]
fn test_model_values() {
    let weights = param_value(ModelParam::PrecisionWeight)
        + param_value(ModelParam::DensityWeight)
        + param_value(ModelParam::MachineryWeight);
    assert!((weights - 1.0).abs() < 1e-12);

    assert_eq!(param_value(ModelParam::NormalHazard), 10.0);
    assert_eq!(param_value(ModelParam::MaintenanceDueHazard), 50.0);
    assert_eq!(param_value(ModelParam::CriticalFaultHazard), 90.0);
    assert_eq!(param_value(ModelParam::MaxArmPrecisionPercent), 100.0);
    assert_eq!(param_value(ModelParam::MaxWorkerDensityPer100m2), 200.0);
    assert_eq!(param_value(ModelParam::ModerateThreshold), 25.0);
    assert_eq!(param_value(ModelParam::HighThreshold), 50.0);
    assert_eq!(param_value(ModelParam::CriticalThreshold), 75.0);
}

#[test]
fn test_render_model_table() {
    let table = render_model_table();
    assert_eq!(table.lines().count(), EXPECTED_PARAM_COUNT);
    let first = table.lines().next().unwrap();
    assert!(first.starts_with("precision_weight "));
    assert!(first.ends_with("= 0.4"));
    assert!(table.contains("critical_threshold "));
}
