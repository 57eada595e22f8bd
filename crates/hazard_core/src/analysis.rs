//! Composed analysis pipeline: validate -> score -> classify -> recommend.
//!
//! Observability:
//! - `hazard_scenario_reject_total{reason}` (counter)
//! - `hazard_risk_level_total{level}` (counter)

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{RiskLevel, RobotScenario};
use crate::fingerprint::{format_fingerprint, scenario_fingerprint};
use crate::service::{
    HazardBreakdown, InvalidScenarioError, InvalidScenarioReason, hazard_breakdown,
    recommendation_for, validate_scenario,
};

/// Hard cap on buffered metric lines.
pub const MAX_PENDING_METRIC_LINES: usize = 1024;

const REASON_COUNT: usize = 6;
const LEVEL_COUNT: usize = 4;

/// Outcome of a successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardAssessment {
    pub fingerprint: u64,
    pub scenario: RobotScenario,
    pub breakdown: HazardBreakdown,
    pub risk_level: RiskLevel,
    pub recommendation: &'static str,
}

impl HazardAssessment {
    pub fn score(&self) -> f64 {
        self.breakdown.score
    }
}

// ─── Metrics ────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct AnalysisMetrics {
    evaluated_total: u64,
    rejected_total: u64,
    rejects_by_reason: [u64; REASON_COUNT],
    levels: [u64; LEVEL_COUNT],
}

impl AnalysisMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scenarios that passed validation and were scored.
    pub fn evaluated_total(&self) -> u64 {
        self.evaluated_total
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected_total
    }

    pub fn reject_total(&self, reason: InvalidScenarioReason) -> u64 {
        self.rejects_by_reason[reason_index(reason)]
    }

    pub fn level_total(&self, level: RiskLevel) -> u64 {
        self.levels[level_index(level)]
    }

    fn record_reject(&mut self, reason: InvalidScenarioReason) {
        self.rejected_total += 1;
        self.rejects_by_reason[reason_index(reason)] += 1;
    }

    fn record_evaluated(&mut self, level: RiskLevel) {
        self.evaluated_total += 1;
        self.levels[level_index(level)] += 1;
    }
}

fn reason_index(reason: InvalidScenarioReason) -> usize {
    match reason {
        InvalidScenarioReason::MissingScenario => 0,
        InvalidScenarioReason::ArmPrecisionNotFinite => 1,
        InvalidScenarioReason::ArmPrecisionOutOfRange => 2,
        InvalidScenarioReason::WorkerDensityNotFinite => 3,
        InvalidScenarioReason::WorkerDensityOutOfRange => 4,
        InvalidScenarioReason::MachineryStateUnrecognized => 5,
    }
}

fn level_index(level: RiskLevel) -> usize {
    match level {
        RiskLevel::Low => 0,
        RiskLevel::Moderate => 1,
        RiskLevel::High => 2,
        RiskLevel::Critical => 3,
    }
}

static SCENARIO_REJECT_TOTALS: [AtomicU64; REASON_COUNT] = [
    AtomicU64::new(0),
    AtomicU64::new(0),
    AtomicU64::new(0),
    AtomicU64::new(0),
    AtomicU64::new(0),
    AtomicU64::new(0),
];
static RISK_LEVEL_TOTALS: [AtomicU64; LEVEL_COUNT] = [
    AtomicU64::new(0),
    AtomicU64::new(0),
    AtomicU64::new(0),
    AtomicU64::new(0),
];
static METRIC_LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

/// Process-wide reject counter for `reason`.
pub fn scenario_reject_total(reason: InvalidScenarioReason) -> u64 {
    SCENARIO_REJECT_TOTALS[reason_index(reason)].load(Ordering::Relaxed)
}

/// Process-wide classification counter for `level`.
pub fn risk_level_total(level: RiskLevel) -> u64 {
    RISK_LEVEL_TOTALS[level_index(level)].load(Ordering::Relaxed)
}

/// Drain buffered metric lines.
pub fn take_analysis_metric_lines() -> Vec<String> {
    let mut lines = METRIC_LINES.lock().unwrap_or_else(|e| e.into_inner());
    std::mem::take(&mut *lines)
}

fn emit_metric_line(name: &str, tail: &str) {
    let line = format!("{name}{{{tail}}}");
    tracing::debug!(target: "hazard_metrics", "{line}");
    let mut lines = METRIC_LINES.lock().unwrap_or_else(|e| e.into_inner());
    if lines.len() >= MAX_PENDING_METRIC_LINES {
        lines.remove(0);
    }
    lines.push(line);
}

fn bump_scenario_reject(reason: InvalidScenarioReason) {
    SCENARIO_REJECT_TOTALS[reason_index(reason)].fetch_add(1, Ordering::Relaxed);
    let tail = format!("reason={}", reason.as_str());
    emit_metric_line("hazard_scenario_reject_total", &tail);
}

fn bump_risk_level(level: RiskLevel) {
    RISK_LEVEL_TOTALS[level_index(level)].fetch_add(1, Ordering::Relaxed);
    let tail = format!("level={}", level.as_str());
    emit_metric_line("hazard_risk_level_total", &tail);
}

// ─── Pipeline ───────────────────────────────────────────────────────────

/// Validate, score, classify and recommend for one scenario.
///
/// The calculator is only reached when validation passes.
pub fn analyze_scenario(
    scenario: &RobotScenario,
    metrics: &mut AnalysisMetrics,
) -> Result<HazardAssessment, InvalidScenarioError> {
    let fingerprint = scenario_fingerprint(scenario);

    if let Err(err) = validate_scenario(scenario) {
        metrics.record_reject(err.reason);
        bump_scenario_reject(err.reason);
        tracing::warn!(
            fingerprint = %format_fingerprint(fingerprint),
            reason = err.reason.as_str(),
            "scenario rejected"
        );
        return Err(err);
    }

    let breakdown = hazard_breakdown(scenario);
    let risk_level = RiskLevel::from_score(breakdown.score);
    metrics.record_evaluated(risk_level);
    bump_risk_level(risk_level);
    tracing::debug!(
        fingerprint = %format_fingerprint(fingerprint),
        score = breakdown.score,
        level = risk_level.as_str(),
        "scenario scored"
    );

    Ok(HazardAssessment {
        fingerprint,
        scenario: *scenario,
        breakdown,
        risk_level,
        recommendation: recommendation_for(Some(risk_level)),
    })
}
