//! Operator recommendation per risk level.

use crate::domain::RiskLevel;

pub const FALLBACK_RECOMMENDATION: &str = "Monitor system.";

pub fn recommendation_for(level: Option<RiskLevel>) -> &'static str {
    match level {
        Some(RiskLevel::Low) => "Continue monitoring and follow standard safety checks.",
        Some(RiskLevel::Moderate) => "Increase supervision and run additional safety verification.",
        Some(RiskLevel::High) => "Restrict operation and schedule inspection immediately.",
        Some(RiskLevel::Critical) => "Stop operation now and perform emergency maintenance.",
        None => FALLBACK_RECOMMENDATION,
    }
}
