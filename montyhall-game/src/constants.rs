//! Game-wide defaults.

/// Trials per batch when nothing else is configured.
pub const DEFAULT_TRIALS: u64 = 100_000;

// Acceptance bands for the switch-win percentage.
pub const RULE_COMPLIANT_BAND_MIN: f64 = 63.0;
pub const RULE_COMPLIANT_BAND_MAX: f64 = 70.0;
pub const UNINFORMED_BAND_MIN: f64 = 47.0;
pub const UNINFORMED_BAND_MAX: f64 = 53.0;
