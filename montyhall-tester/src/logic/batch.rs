use montyhall_game::{HostPolicy, RunSummary, TrialRunner};
use serde::Serialize;

/// One policy's batch together with the seed that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchRun {
    pub seed: u64,
    #[serde(flatten)]
    pub summary: RunSummary,
    pub switch_good_pct: f64,
    pub switch_bad_pct: f64,
}

impl BatchRun {
    #[must_use]
    pub fn new(seed: u64, summary: RunSummary) -> Self {
        Self {
            seed,
            summary,
            switch_good_pct: summary.switch_good_pct(),
            switch_bad_pct: summary.switch_bad_pct(),
        }
    }

    #[must_use]
    pub const fn policy(&self) -> HostPolicy {
        self.summary.policy
    }
}

pub fn run_batches(runner: &TrialRunner, policies: &[HostPolicy], seed: u64) -> Vec<BatchRun> {
    policies
        .iter()
        .map(|&policy| {
            log::debug!(
                "running {} trials for {policy} with seed {seed}",
                runner.trials()
            );
            BatchRun::new(seed, runner.run_seeded(policy, seed))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_each_requested_policy_in_order() {
        let runner = TrialRunner::new(200).unwrap();
        let runs = run_batches(&runner, &HostPolicy::ALL, 9);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].policy(), HostPolicy::RuleCompliant);
        assert_eq!(runs[1].policy(), HostPolicy::Uninformed);
        assert!(runs.iter().all(|run| run.seed == 9 && run.summary.trials == 200));
    }

    #[test]
    fn serializes_flat_with_percentages() {
        let runner = TrialRunner::new(10).unwrap();
        let run = run_batches(&runner, &[HostPolicy::Uninformed], 1)[0];
        let json = serde_json::to_value(run).unwrap();
        assert_eq!(json["policy"], "uninformed");
        assert_eq!(json["trials"], 10);
        assert!(json["switch_good_pct"].is_number());
    }
}
