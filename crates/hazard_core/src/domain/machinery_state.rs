//! Machinery operating state and lenient operator-text parsing.
//!
//! Accepted tokens (trimmed, case-insensitive):
//! - `NORMAL`
//! - `MAINTENANCE_DUE`, `MAINTENANCE`, `DUE`
//! - `CRITICAL_FAULT`, `CRITICAL`, `FAULT`
//!
//! Anything else parses to `None`. Rejecting an unrecognized state is the
//! validator's job, never a silent default here.

use std::fmt;

/// Operating condition of the machinery in a work cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineryState {
    Normal,
    MaintenanceDue,
    CriticalFault,
}

impl MachineryState {
    pub const ALL: [MachineryState; 3] = [
        MachineryState::Normal,
        MachineryState::MaintenanceDue,
        MachineryState::CriticalFault,
    ];

    /// Parse free-form operator input. Returns `None` for unrecognized text.
    pub fn from_user_input(raw: &str) -> Option<Self> {
        let v = raw.trim().to_ascii_uppercase();
        match v.as_str() {
            "NORMAL" => Some(MachineryState::Normal),
            "MAINTENANCE_DUE" | "MAINTENANCE" | "DUE" => Some(MachineryState::MaintenanceDue),
            "CRITICAL_FAULT" | "CRITICAL" | "FAULT" => Some(MachineryState::CriticalFault),
            _ => None,
        }
    }

    /// Canonical upper-case token.
    pub fn as_str(self) -> &'static str {
        match self {
            MachineryState::Normal => "NORMAL",
            MachineryState::MaintenanceDue => "MAINTENANCE_DUE",
            MachineryState::CriticalFault => "CRITICAL_FAULT",
        }
    }
}

impl fmt::Display for MachineryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-function form of [`MachineryState::from_user_input`].
pub fn parse_machinery_state(raw: &str) -> Option<MachineryState> {
    MachineryState::from_user_input(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_tokens_round_trip_through_as_str() {
        for state in MachineryState::ALL {
            assert_eq!(MachineryState::from_user_input(state.as_str()), Some(state));
        }
    }

    #[test]
    fn empty_and_whitespace_are_unrecognized() {
        assert_eq!(parse_machinery_state(""), None);
        assert_eq!(parse_machinery_state("   \t"), None);
    }

    #[test]
    fn partial_tokens_do_not_match() {
        assert_eq!(parse_machinery_state("NORM"), None);
        assert_eq!(parse_machinery_state("CRITICAL FAULT"), None);
        assert_eq!(parse_machinery_state("maintenance-due"), None);
    }
}
