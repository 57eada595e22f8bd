//! Scenario domain types.

pub mod machinery_state;
pub mod risk_level;
pub mod scenario;

pub use machinery_state::{MachineryState, parse_machinery_state};
pub use risk_level::{RiskLevel, risk_level_from_score};
pub use scenario::{RobotScenario, make_scenario};
