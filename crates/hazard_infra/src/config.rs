//! Session configuration and the fixed scoring-model table.
//!
//! Weights, hazard constants, bounds and band thresholds are compiled-in
//! constants of `hazard_core`. They are listed here read-only so an operator
//! can see exactly which model produced a score; nothing overrides them.

use clap::{Parser, ValueEnum};
use hazard_core::domain::risk_level::{CRITICAL_THRESHOLD, HIGH_THRESHOLD, MODERATE_THRESHOLD};
use hazard_core::service::calculator::{
    CRITICAL_FAULT_HAZARD, DENSITY_WEIGHT, MACHINERY_WEIGHT, MAINTENANCE_DUE_HAZARD,
    MAX_WORKER_DENSITY_PER_100M2, NORMAL_HAZARD, PRECISION_WEIGHT, UNKNOWN_STATE_HAZARD,
};
use hazard_core::service::validator::MAX_ARM_PRECISION_PERCENT;

/// How each analysis result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable block.
    #[default]
    Text,
    /// One JSON object per scenario.
    Json,
}

/// Command-line flags for one analyzer session.
#[derive(Debug, Clone, Parser)]
#[command(name = "hazard-analyzer")]
#[command(about = "Score the hazard of a robotic work cell from operator input")]
pub struct SessionConfig {
    /// Analyze a single scenario, then exit without asking to repeat
    #[arg(long)]
    pub once: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Log verbosity (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_level: tracing::Level,

    /// Print the scoring model constants and exit
    #[arg(long)]
    pub show_model: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            once: false,
            format: ReportFormat::Text,
            log_level: tracing::Level::WARN,
            show_model: false,
        }
    }
}

/// Fixed constants of the scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelParam {
    // Score weights
    PrecisionWeight,
    DensityWeight,
    MachineryWeight,

    // Machinery hazard per state
    NormalHazard,
    MaintenanceDueHazard,
    CriticalFaultHazard,
    UnknownStateHazard,

    // Input bounds
    MaxArmPrecisionPercent,
    MaxWorkerDensityPer100m2,

    // Risk band lower bounds
    ModerateThreshold,
    HighThreshold,
    CriticalThreshold,
}

pub fn param_value(param: ModelParam) -> f64 {
    match param {
        ModelParam::PrecisionWeight => PRECISION_WEIGHT,
        ModelParam::DensityWeight => DENSITY_WEIGHT,
        ModelParam::MachineryWeight => MACHINERY_WEIGHT,
        ModelParam::NormalHazard => NORMAL_HAZARD,
        ModelParam::MaintenanceDueHazard => MAINTENANCE_DUE_HAZARD,
        ModelParam::CriticalFaultHazard => CRITICAL_FAULT_HAZARD,
        ModelParam::UnknownStateHazard => UNKNOWN_STATE_HAZARD,
        ModelParam::MaxArmPrecisionPercent => MAX_ARM_PRECISION_PERCENT,
        ModelParam::MaxWorkerDensityPer100m2 => MAX_WORKER_DENSITY_PER_100M2,
        ModelParam::ModerateThreshold => MODERATE_THRESHOLD,
        ModelParam::HighThreshold => HIGH_THRESHOLD,
        ModelParam::CriticalThreshold => CRITICAL_THRESHOLD,
    }
}

pub fn param_name(param: ModelParam) -> &'static str {
    match param {
        ModelParam::PrecisionWeight => "precision_weight",
        ModelParam::DensityWeight => "density_weight",
        ModelParam::MachineryWeight => "machinery_weight",
        ModelParam::NormalHazard => "normal_hazard",
        ModelParam::MaintenanceDueHazard => "maintenance_due_hazard",
        ModelParam::CriticalFaultHazard => "critical_fault_hazard",
        ModelParam::UnknownStateHazard => "unknown_state_hazard",
        ModelParam::MaxArmPrecisionPercent => "max_arm_precision_percent",
        ModelParam::MaxWorkerDensityPer100m2 => "max_worker_density_per_100m2",
        ModelParam::ModerateThreshold => "moderate_threshold",
        ModelParam::HighThreshold => "high_threshold",
        ModelParam::CriticalThreshold => "critical_threshold",
    }
}

/// Expected number of `ModelParam` variants. Update when adding variants.
pub const EXPECTED_PARAM_COUNT: usize = 12;

pub const ALL_PARAMS: &[ModelParam] = &[
    ModelParam::PrecisionWeight,
    ModelParam::DensityWeight,
    ModelParam::MachineryWeight,
    ModelParam::NormalHazard,
    ModelParam::MaintenanceDueHazard,
    ModelParam::CriticalFaultHazard,
    ModelParam::UnknownStateHazard,
    ModelParam::MaxArmPrecisionPercent,
    ModelParam::MaxWorkerDensityPer100m2,
    ModelParam::ModerateThreshold,
    ModelParam::HighThreshold,
    ModelParam::CriticalThreshold,
];

/// `name = value` lines for `--show-model`.
pub fn render_model_table() -> String {
    let width = ALL_PARAMS
        .iter()
        .map(|&p| param_name(p).len())
        .max()
        .unwrap_or(0);
    ALL_PARAMS
        .iter()
        .map(|&param| format!("{:<width$} = {}\n", param_name(param), param_value(param)))
        .collect()
}
