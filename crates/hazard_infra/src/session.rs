//! Interactive analyze/repeat loop.
//!
//! Per iteration: read precision, density and state text; build a scenario;
//! run the core pipeline; print the report or the rejection reason. Neither a
//! number-format error nor an invalid scenario ends the session. An exhausted
//! input stream ends it cleanly; an I/O failure aborts it.

use std::fmt;
use std::io::{BufRead, Write};

use hazard_core::{AnalysisMetrics, RobotScenario, analyze_scenario, parse_machinery_state};

use crate::config::{ReportFormat, SessionConfig};
use crate::console::{ConsoleError, ConsoleInput};
use crate::report::{render_json, render_rejection_json, render_rejection_text, render_text};

pub const BANNER: &str = "========================================\n        FACTORY ROBOT HAZARD ANALYZER   \n========================================";
pub const PRECISION_PROMPT: &str = "Enter Arm Precision (0-100 %): ";
pub const DENSITY_PROMPT: &str = "Enter Worker Density (0-200 per 100 m^2): ";
pub const STATE_PROMPT: &str =
    "Enter Machinery State (NORMAL / MAINTENANCE_DUE / CRITICAL_FAULT): ";
pub const REPEAT_PROMPT: &str = "Analyze another scenario? (Y/N): ";
pub const EXIT_MESSAGE: &str = "Exiting Factory Robot Hazard Analyzer.";

/// Exit code for a session that completed.
pub const EXIT_OK: u8 = 0;
/// Exit code for a session aborted by an I/O or rendering failure.
pub const EXIT_IO_ERROR: u8 = 1;

/// Counts for one finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub analyzed: u64,
    pub rejected: u64,
    pub number_format_errors: u64,
}

#[derive(Debug)]
pub enum SessionError {
    Console(ConsoleError),
    Render(serde_json::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Console(e) => write!(f, "{e}"),
            SessionError::Render(e) => write!(f, "failed to render report: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Console(e) => Some(e),
            SessionError::Render(e) => Some(e),
        }
    }
}

impl From<ConsoleError> for SessionError {
    fn from(e: ConsoleError) -> Self {
        SessionError::Console(e)
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(e: serde_json::Error) -> Self {
        SessionError::Render(e)
    }
}

pub fn exit_code(result: &Result<SessionSummary, SessionError>) -> u8 {
    match result {
        Ok(_) => EXIT_OK,
        Err(_) => EXIT_IO_ERROR,
    }
}

/// Run the session until the operator declines to continue or input ends.
pub fn run_session<R: BufRead, W: Write>(
    config: &SessionConfig,
    console: &mut ConsoleInput<R, W>,
) -> Result<SessionSummary, SessionError> {
    tracing::info!(once = config.once, format = ?config.format, "hazard analysis session started");
    console.println(BANNER)?;

    let mut metrics = AnalysisMetrics::new();
    loop {
        match analyze_one(config.format, console, &mut metrics) {
            Ok(()) => {}
            Err(SessionError::Console(ConsoleError::EndOfInput)) => {
                console.println("")?;
                break;
            }
            Err(e) => return Err(e),
        }
        if config.once {
            break;
        }

        console.println("")?;
        let again = match console.read_yes_no(REPEAT_PROMPT) {
            Ok(again) => again,
            Err(ConsoleError::EndOfInput) => false,
            Err(e) => return Err(e.into()),
        };
        console.println("")?;
        if !again {
            break;
        }
    }

    console.println(EXIT_MESSAGE)?;
    console.flush()?;

    let summary = SessionSummary {
        analyzed: metrics.evaluated_total(),
        rejected: metrics.rejected_total(),
        number_format_errors: console.number_format_errors(),
    };
    tracing::info!(
        analyzed = summary.analyzed,
        rejected = summary.rejected,
        number_format_errors = summary.number_format_errors,
        "hazard analysis session finished"
    );
    Ok(summary)
}

fn analyze_one<R: BufRead, W: Write>(
    format: ReportFormat,
    console: &mut ConsoleInput<R, W>,
    metrics: &mut AnalysisMetrics,
) -> Result<(), SessionError> {
    let precision = console.read_double(PRECISION_PROMPT, "arm precision")?;
    let density = console.read_double(DENSITY_PROMPT, "worker density")?;
    let state_raw = console.read_string(STATE_PROMPT)?;

    let scenario = RobotScenario::new(precision, density, parse_machinery_state(&state_raw));
    let rendered = match (analyze_scenario(&scenario, metrics), format) {
        (Ok(assessment), ReportFormat::Text) => render_text(&assessment),
        (Ok(assessment), ReportFormat::Json) => render_json(&assessment)?,
        (Err(err), ReportFormat::Text) => render_rejection_text(&err),
        (Err(err), ReportFormat::Json) => render_rejection_json(&err)?,
    };
    console.print(&rendered)?;
    Ok(())
}
