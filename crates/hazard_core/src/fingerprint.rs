//! Deterministic scenario fingerprint.
//!
//! `fingerprint = xxhash64(precision_bits | 0xFF | density_bits | 0xFF | state_token)`
//!
//! Floats are hashed by bit pattern after folding `-0.0` into `0.0`, so the
//! same operator inputs always produce the same fingerprint.

use xxhash_rust::xxh64::xxh64;

use crate::domain::RobotScenario;

const ABSENT_STATE_TOKEN: &str = "UNRECOGNIZED";

pub fn scenario_fingerprint(scenario: &RobotScenario) -> u64 {
    let mut buf = Vec::with_capacity(40);

    buf.extend_from_slice(&canonical_bits(scenario.arm_precision_percent()).to_le_bytes());
    buf.push(0xFF);
    buf.extend_from_slice(&canonical_bits(scenario.worker_density_per_100m2()).to_le_bytes());
    buf.push(0xFF);
    let state = scenario
        .machinery_state()
        .map_or(ABSENT_STATE_TOKEN, |s| s.as_str());
    buf.extend_from_slice(state.as_bytes());

    xxh64(&buf, 0)
}

pub fn format_fingerprint(fingerprint: u64) -> String {
    format!("{fingerprint:016x}")
}

fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
}
