//! Discrete risk bands derived from a hazard score.
//!
//! Bands are closed on the lower bound and open on the upper bound:
//! `[0, 25)` LOW, `[25, 50)` MODERATE, `[50, 75)` HIGH, `[75, inf)` CRITICAL.
//! Scores below zero classify as LOW; a NaN score falls through every
//! comparison and classifies as CRITICAL.

use std::fmt;

pub const MODERATE_THRESHOLD: f64 = 25.0;
pub const HIGH_THRESHOLD: f64 = 50.0;
pub const CRITICAL_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Classify a hazard score. Total over every `f64`.
    pub fn from_score(score: f64) -> Self {
        if score < MODERATE_THRESHOLD {
            RiskLevel::Low
        } else if score < HIGH_THRESHOLD {
            RiskLevel::Moderate
        } else if score < CRITICAL_THRESHOLD {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-function form of [`RiskLevel::from_score`].
pub fn risk_level_from_score(score: f64) -> RiskLevel {
    RiskLevel::from_score(score)
}
