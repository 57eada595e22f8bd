//! Scenario well-formedness checks.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. scenario present
//! 2. arm precision finite
//! 3. arm precision in [0, 100]
//! 4. worker density finite
//! 5. worker density in [0, 200]
//! 6. machinery state recognized

use std::fmt;

use crate::domain::RobotScenario;
use crate::service::calculator::MAX_WORKER_DENSITY_PER_100M2;

pub const MAX_ARM_PRECISION_PERCENT: f64 = 100.0;

/// Which validator check rejected the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidScenarioReason {
    MissingScenario,
    ArmPrecisionNotFinite,
    ArmPrecisionOutOfRange,
    WorkerDensityNotFinite,
    WorkerDensityOutOfRange,
    MachineryStateUnrecognized,
}

impl InvalidScenarioReason {
    pub const ALL: [InvalidScenarioReason; 6] = [
        InvalidScenarioReason::MissingScenario,
        InvalidScenarioReason::ArmPrecisionNotFinite,
        InvalidScenarioReason::ArmPrecisionOutOfRange,
        InvalidScenarioReason::WorkerDensityNotFinite,
        InvalidScenarioReason::WorkerDensityOutOfRange,
        InvalidScenarioReason::MachineryStateUnrecognized,
    ];

    /// Operator-facing message. Callers print it verbatim.
    pub fn message(self) -> &'static str {
        match self {
            InvalidScenarioReason::MissingScenario => "Scenario cannot be null.",
            InvalidScenarioReason::ArmPrecisionNotFinite => "Arm precision must be a valid number.",
            InvalidScenarioReason::ArmPrecisionOutOfRange => {
                "Arm precision must be between 0 and 100 percent."
            }
            InvalidScenarioReason::WorkerDensityNotFinite => {
                "Worker density must be a valid number."
            }
            InvalidScenarioReason::WorkerDensityOutOfRange => {
                "Worker density must be between 0 and 200 per 100 m^2."
            }
            InvalidScenarioReason::MachineryStateUnrecognized => {
                "Machinery state must be NORMAL / MAINTENANCE_DUE / CRITICAL_FAULT."
            }
        }
    }

    /// Stable token for log lines and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            InvalidScenarioReason::MissingScenario => "MissingScenario",
            InvalidScenarioReason::ArmPrecisionNotFinite => "ArmPrecisionNotFinite",
            InvalidScenarioReason::ArmPrecisionOutOfRange => "ArmPrecisionOutOfRange",
            InvalidScenarioReason::WorkerDensityNotFinite => "WorkerDensityNotFinite",
            InvalidScenarioReason::WorkerDensityOutOfRange => "WorkerDensityOutOfRange",
            InvalidScenarioReason::MachineryStateUnrecognized => "MachineryStateUnrecognized",
        }
    }
}

/// Scenario rejected by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidScenarioError {
    pub reason: InvalidScenarioReason,
}

impl InvalidScenarioError {
    pub fn new(reason: InvalidScenarioReason) -> Self {
        Self { reason }
    }

    pub fn message(&self) -> &'static str {
        self.reason.message()
    }
}

impl From<InvalidScenarioReason> for InvalidScenarioError {
    fn from(reason: InvalidScenarioReason) -> Self {
        Self::new(reason)
    }
}

impl fmt::Display for InvalidScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for InvalidScenarioError {}

/// Validate a possibly-absent scenario.
pub fn validate(scenario: Option<&RobotScenario>) -> Result<(), InvalidScenarioError> {
    match scenario {
        Some(scenario) => validate_scenario(scenario),
        None => Err(InvalidScenarioReason::MissingScenario.into()),
    }
}

/// Validate a scenario. `Ok(())` means it may be handed to the calculator.
pub fn validate_scenario(scenario: &RobotScenario) -> Result<(), InvalidScenarioError> {
    let precision = scenario.arm_precision_percent();
    if !precision.is_finite() {
        return Err(InvalidScenarioReason::ArmPrecisionNotFinite.into());
    }
    if !(0.0..=MAX_ARM_PRECISION_PERCENT).contains(&precision) {
        return Err(InvalidScenarioReason::ArmPrecisionOutOfRange.into());
    }

    let density = scenario.worker_density_per_100m2();
    if !density.is_finite() {
        return Err(InvalidScenarioReason::WorkerDensityNotFinite.into());
    }
    if !(0.0..=MAX_WORKER_DENSITY_PER_100M2).contains(&density) {
        return Err(InvalidScenarioReason::WorkerDensityOutOfRange.into());
    }

    if scenario.machinery_state().is_none() {
        return Err(InvalidScenarioReason::MachineryStateUnrecognized.into());
    }

    Ok(())
}
