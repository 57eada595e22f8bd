//! Weighted hazard score.
//!
//! ```text
//! precision_hazard = 100 - arm_precision_percent
//! density_hazard   = clamp(worker_density / 200 * 100, 0, 100)
//! machinery_hazard = NORMAL 10 | MAINTENANCE_DUE 50 | CRITICAL_FAULT 90
//! score            = clamp(0.40*precision + 0.35*density + 0.25*machinery, 0, 100)
//! ```
//!
//! The calculator does not re-validate. Callers run the validator first.

use crate::domain::{MachineryState, RobotScenario};

pub const PRECISION_WEIGHT: f64 = 0.40;
pub const DENSITY_WEIGHT: f64 = 0.35;
pub const MACHINERY_WEIGHT: f64 = 0.25;

pub const MAX_WORKER_DENSITY_PER_100M2: f64 = 200.0;

pub const NORMAL_HAZARD: f64 = 10.0;
pub const MAINTENANCE_DUE_HAZARD: f64 = 50.0;
pub const CRITICAL_FAULT_HAZARD: f64 = 90.0;
/// Used when the state is absent; unreachable for validated scenarios.
pub const UNKNOWN_STATE_HAZARD: f64 = 50.0;

const MIN_HAZARD: f64 = 0.0;
const MAX_HAZARD: f64 = 100.0;

/// Intermediate terms of a score, each on a 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardBreakdown {
    pub precision_hazard: f64,
    pub density_hazard: f64,
    pub machinery_hazard: f64,
    pub score: f64,
}

pub fn machinery_hazard_value(state: Option<MachineryState>) -> f64 {
    match state {
        Some(MachineryState::Normal) => NORMAL_HAZARD,
        Some(MachineryState::MaintenanceDue) => MAINTENANCE_DUE_HAZARD,
        Some(MachineryState::CriticalFault) => CRITICAL_FAULT_HAZARD,
        None => UNKNOWN_STATE_HAZARD,
    }
}

pub fn hazard_breakdown(scenario: &RobotScenario) -> HazardBreakdown {
    let precision_hazard = MAX_HAZARD - scenario.arm_precision_percent();

    let density_hazard = clamp(
        (scenario.worker_density_per_100m2() / MAX_WORKER_DENSITY_PER_100M2) * 100.0,
        MIN_HAZARD,
        MAX_HAZARD,
    );

    let machinery_hazard = machinery_hazard_value(scenario.machinery_state());

    let weighted = PRECISION_WEIGHT * precision_hazard
        + DENSITY_WEIGHT * density_hazard
        + MACHINERY_WEIGHT * machinery_hazard;

    HazardBreakdown {
        precision_hazard,
        density_hazard,
        machinery_hazard,
        score: clamp(weighted, MIN_HAZARD, MAX_HAZARD),
    }
}

/// Hazard score in `[0, 100]` for a validated scenario.
pub fn calculate_score(scenario: &RobotScenario) -> f64 {
    hazard_breakdown(scenario).score
}

// Comparison chain rather than f64::clamp: NaN passes through unchanged.
fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}
