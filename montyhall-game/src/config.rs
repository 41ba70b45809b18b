//! Batch configuration and acceptance bands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_TRIALS, RULE_COMPLIANT_BAND_MAX, RULE_COMPLIANT_BAND_MIN, UNINFORMED_BAND_MAX,
    UNINFORMED_BAND_MIN,
};
use crate::host::HostPolicy;

/// Errors raised when simulation configuration invariants are violated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("trial count must be at least 1")]
    ZeroTrials,
    #[error("{policy} band invalid: min {min:.2}% max {max:.2}% (expected 0 <= min <= max <= 100)")]
    BandRange {
        policy: HostPolicy,
        min: f64,
        max: f64,
    },
    #[error("failed to parse simulation config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Inclusive percentage range a switch-win rate must land in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBand {
    pub min_pct: f64,
    pub max_pct: f64,
}

impl RateBand {
    #[must_use]
    pub const fn new(min_pct: f64, max_pct: f64) -> Self {
        Self { min_pct, max_pct }
    }

    #[must_use]
    pub fn contains(&self, pct: f64) -> bool {
        pct >= self.min_pct && pct <= self.max_pct
    }

    fn is_valid(&self) -> bool {
        self.min_pct.is_finite()
            && self.max_pct.is_finite()
            && self.min_pct >= 0.0
            && self.max_pct <= 100.0
            && self.min_pct <= self.max_pct
    }
}

/// Per-policy acceptance bands for the switch-win percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceBands {
    #[serde(default = "AcceptanceBands::default_rule_compliant")]
    pub rule_compliant: RateBand,
    #[serde(default = "AcceptanceBands::default_uninformed")]
    pub uninformed: RateBand,
}

impl AcceptanceBands {
    const fn default_rule_compliant() -> RateBand {
        RateBand::new(RULE_COMPLIANT_BAND_MIN, RULE_COMPLIANT_BAND_MAX)
    }

    const fn default_uninformed() -> RateBand {
        RateBand::new(UNINFORMED_BAND_MIN, UNINFORMED_BAND_MAX)
    }

    #[must_use]
    pub const fn for_policy(&self, policy: HostPolicy) -> RateBand {
        match policy {
            HostPolicy::RuleCompliant => self.rule_compliant,
            HostPolicy::Uninformed => self.uninformed,
        }
    }

    /// Check that every band is a sane percentage range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BandRange`] for the first malformed band.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for policy in HostPolicy::ALL {
            let band = self.for_policy(policy);
            if !band.is_valid() {
                return Err(ConfigError::BandRange {
                    policy,
                    min: band.min_pct,
                    max: band.max_pct,
                });
            }
        }
        Ok(())
    }
}

impl Default for AcceptanceBands {
    fn default() -> Self {
        Self {
            rule_compliant: Self::default_rule_compliant(),
            uninformed: Self::default_uninformed(),
        }
    }
}

/// Settings for a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "SimulationConfig::default_trials")]
    pub trials: u64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub bands: AcceptanceBands,
}

impl SimulationConfig {
    const fn default_trials() -> u64 {
        DEFAULT_TRIALS
    }

    #[must_use]
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the
    /// [`SimulationConfig::validate`] errors otherwise.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTrials`] or [`ConfigError::BandRange`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        self.bands.validate()
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: Self::default_trials(),
            seed: None,
            bands: AcceptanceBands::default(),
        }
    }
}
