#![allow(dead_code)]

use hazard_core::{MachineryState, RobotScenario};

pub const EPSILON: f64 = 1e-9;

/// Test helper: scenario with a recognized machinery state.
pub fn scenario(precision: f64, density: f64, state: MachineryState) -> RobotScenario {
    RobotScenario::new(precision, density, Some(state))
}

/// Test helper: a scenario that passes every validator check.
pub fn valid_baseline() -> RobotScenario {
    scenario(95.0, 20.0, MachineryState::Normal)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
