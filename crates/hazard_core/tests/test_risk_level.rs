//! Score-to-band classification.

use hazard_core::{RiskLevel, risk_level_from_score};

#[test]
fn test_band_interiors() {
    assert_eq!(risk_level_from_score(0.0), RiskLevel::Low);
    assert_eq!(risk_level_from_score(12.5), RiskLevel::Low);
    assert_eq!(risk_level_from_score(37.0), RiskLevel::Moderate);
    assert_eq!(risk_level_from_score(60.0), RiskLevel::High);
    assert_eq!(risk_level_from_score(90.0), RiskLevel::Critical);
    assert_eq!(risk_level_from_score(100.0), RiskLevel::Critical);
}

#[test]
fn test_boundaries_land_in_higher_band() {
    assert_eq!(risk_level_from_score(24.999_999), RiskLevel::Low);
    assert_eq!(risk_level_from_score(25.0), RiskLevel::Moderate);
    assert_eq!(risk_level_from_score(49.999_999), RiskLevel::Moderate);
    assert_eq!(risk_level_from_score(50.0), RiskLevel::High);
    assert_eq!(risk_level_from_score(74.999_999), RiskLevel::High);
    assert_eq!(risk_level_from_score(75.0), RiskLevel::Critical);
}

#[test]
fn test_total_over_non_finite_and_out_of_range() {
    assert_eq!(risk_level_from_score(-10.0), RiskLevel::Low);
    assert_eq!(risk_level_from_score(f64::NEG_INFINITY), RiskLevel::Low);
    assert_eq!(risk_level_from_score(250.0), RiskLevel::Critical);
    assert_eq!(risk_level_from_score(f64::INFINITY), RiskLevel::Critical);
    assert_eq!(risk_level_from_score(f64::NAN), RiskLevel::Critical);
}

#[test]
fn test_level_names() {
    let names: Vec<String> = RiskLevel::ALL.iter().map(|l| l.to_string()).collect();
    assert_eq!(names, ["LOW", "MODERATE", "HIGH", "CRITICAL"]);
}
