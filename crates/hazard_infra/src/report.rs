//! Rendering of analysis outcomes.

use serde::Serialize;

use hazard_core::{HazardAssessment, InvalidScenarioError, format_fingerprint};

const RULE: &str = "----------------------------------------";

/// Flat, serializable view of a [`HazardAssessment`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub fingerprint: String,
    pub arm_precision_percent: f64,
    pub worker_density_per_100m2: f64,
    pub machinery_state: &'static str,
    pub precision_hazard: f64,
    pub density_hazard: f64,
    pub machinery_hazard: f64,
    pub score: f64,
    pub risk_level: &'static str,
    pub recommendation: &'static str,
}

impl From<&HazardAssessment> for AnalysisReport {
    fn from(a: &HazardAssessment) -> Self {
        Self {
            fingerprint: format_fingerprint(a.fingerprint),
            arm_precision_percent: a.scenario.arm_precision_percent(),
            worker_density_per_100m2: a.scenario.worker_density_per_100m2(),
            machinery_state: a
                .scenario
                .machinery_state()
                .map_or("UNRECOGNIZED", |s| s.as_str()),
            precision_hazard: a.breakdown.precision_hazard,
            density_hazard: a.breakdown.density_hazard,
            machinery_hazard: a.breakdown.machinery_hazard,
            score: a.breakdown.score,
            risk_level: a.risk_level.as_str(),
            recommendation: a.recommendation,
        }
    }
}

#[derive(Serialize)]
struct RejectionReport<'a> {
    error: &'a str,
}

pub fn render_text(assessment: &HazardAssessment) -> String {
    format!(
        "\nAnalysis Result\n{RULE}\nHazard Risk Score: {:.2} / 100\nRisk Level: {}\nRecommendation: {}\n{RULE}\n",
        assessment.score(),
        assessment.risk_level,
        assessment.recommendation,
    )
}

pub fn render_rejection_text(err: &InvalidScenarioError) -> String {
    format!("\nInvalid Scenario: {err}\n")
}

pub fn render_json(assessment: &HazardAssessment) -> Result<String, serde_json::Error> {
    let mut line = serde_json::to_string(&AnalysisReport::from(assessment))?;
    line.push('\n');
    Ok(line)
}

pub fn render_rejection_json(err: &InvalidScenarioError) -> Result<String, serde_json::Error> {
    let mut line = serde_json::to_string(&RejectionReport {
        error: err.message(),
    })?;
    line.push('\n');
    Ok(line)
}
