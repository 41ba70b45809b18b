//! Monte Carlo batch runner.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, SimulationConfig};
use crate::host::HostPolicy;
use crate::numbers::percentage;
use crate::seed::policy_rng;
use crate::trial::{TrialRecord, simulate_trial};

/// Aggregated outcome counts for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub policy: HostPolicy,
    pub trials: u64,
    pub switch_good: u64,
    pub switch_bad: u64,
    pub host_opened_guess: u64,
}

impl RunSummary {
    #[must_use]
    pub const fn empty(policy: HostPolicy) -> Self {
        Self {
            policy,
            trials: 0,
            switch_good: 0,
            switch_bad: 0,
            host_opened_guess: 0,
        }
    }

    pub fn record(&mut self, trial: &TrialRecord) {
        self.trials += 1;
        if trial.switch_wins() {
            self.switch_good += 1;
        } else {
            self.switch_bad += 1;
        }
        if trial.host_opened_guess() {
            self.host_opened_guess += 1;
        }
    }

    /// Fold another batch's counts into this one. Order does not matter.
    pub fn merge(&mut self, other: &Self) {
        self.trials += other.trials;
        self.switch_good += other.switch_good;
        self.switch_bad += other.switch_bad;
        self.host_opened_guess += other.host_opened_guess;
    }

    #[must_use]
    pub fn switch_good_pct(&self) -> f64 {
        percentage(self.switch_good, self.trials)
    }

    #[must_use]
    pub fn switch_bad_pct(&self) -> f64 {
        percentage(self.switch_bad, self.trials)
    }

    /// Staying wins exactly when switching loses.
    #[must_use]
    pub const fn stay_good(&self) -> u64 {
        self.switch_bad
    }
}

/// Runs a fixed number of trials per batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRunner {
    trials: u64,
}

impl TrialRunner {
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTrials`] when `trials` is zero.
    pub fn new(trials: u64) -> Result<Self, ConfigError> {
        if trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        Ok(Self { trials })
    }

    /// # Errors
    ///
    /// Returns any validation error from [`SimulationConfig::validate`].
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(config.trials)
    }

    #[must_use]
    pub const fn trials(&self) -> u64 {
        self.trials
    }

    pub fn run<R: Rng + ?Sized>(&self, policy: HostPolicy, rng: &mut R) -> RunSummary {
        let mut summary = RunSummary::empty(policy);
        for _ in 0..self.trials {
            summary.record(&simulate_trial(policy, rng));
        }
        summary
    }

    /// Run a batch on the policy's stream derived from `seed`.
    #[must_use]
    pub fn run_seeded(&self, policy: HostPolicy, seed: u64) -> RunSummary {
        self.run(policy, &mut policy_rng(seed, policy))
    }

    /// Collect every trial instead of only the counts.
    pub fn outcomes<R: Rng + ?Sized>(&self, policy: HostPolicy, rng: &mut R) -> Vec<TrialRecord> {
        let mut records = Vec::with_capacity(usize::try_from(self.trials).unwrap_or(0));
        for _ in 0..self.trials {
            records.push(simulate_trial(policy, rng));
        }
        records
    }
}
