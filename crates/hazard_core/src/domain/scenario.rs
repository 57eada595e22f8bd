//! Robot work-cell scenario.
//!
//! Construction never checks ranges; a scenario only counts as valid once it
//! has passed [`crate::service::validate_scenario`].

use super::MachineryState;

/// Immutable input triple for one hazard analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotScenario {
    arm_precision_percent: f64,
    worker_density_per_100m2: f64,
    machinery_state: Option<MachineryState>,
}

impl RobotScenario {
    pub fn new(
        arm_precision_percent: f64,
        worker_density_per_100m2: f64,
        machinery_state: Option<MachineryState>,
    ) -> Self {
        Self {
            arm_precision_percent,
            worker_density_per_100m2,
            machinery_state,
        }
    }

    /// Arm positioning precision, in percent.
    pub fn arm_precision_percent(&self) -> f64 {
        self.arm_precision_percent
    }

    /// Workers per 100 m^2 of floor space.
    pub fn worker_density_per_100m2(&self) -> f64 {
        self.worker_density_per_100m2
    }

    /// `None` when the operator text was not a recognized state.
    pub fn machinery_state(&self) -> Option<MachineryState> {
        self.machinery_state
    }
}

pub fn make_scenario(
    precision: f64,
    density: f64,
    state: Option<MachineryState>,
) -> RobotScenario {
    RobotScenario::new(precision, density, state)
}
