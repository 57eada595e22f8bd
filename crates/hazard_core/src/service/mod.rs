//! Validation, scoring and recommendation services.

pub mod calculator;
pub mod recommendation;
pub mod validator;

pub use calculator::{
    DENSITY_WEIGHT, HazardBreakdown, MACHINERY_WEIGHT, MAX_WORKER_DENSITY_PER_100M2,
    PRECISION_WEIGHT, calculate_score, hazard_breakdown, machinery_hazard_value,
};
pub use recommendation::{FALLBACK_RECOMMENDATION, recommendation_for};
pub use validator::{
    InvalidScenarioError, InvalidScenarioReason, MAX_ARM_PRECISION_PERCENT, validate,
    validate_scenario,
};
