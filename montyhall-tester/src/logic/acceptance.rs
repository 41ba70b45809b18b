use anyhow::{Result, ensure};
use montyhall_game::AcceptanceBands;

use super::BatchRun;

/// Fail when any batch's switch-win rate falls outside its policy band.
pub fn validate_acceptance(runs: &[BatchRun], bands: &AcceptanceBands) -> Result<()> {
    let mut misses = Vec::new();
    for run in runs {
        let band = bands.for_policy(run.policy());
        if !band.contains(run.switch_good_pct) {
            log::warn!(
                "{} switch rate {:.3}% outside {:.2}%..={:.2}% (seed {})",
                run.policy(),
                run.switch_good_pct,
                band.min_pct,
                band.max_pct,
                run.seed
            );
            misses.push(format!(
                "{}: {:.3}% not in {:.2}%..={:.2}%",
                run.policy(),
                run.switch_good_pct,
                band.min_pct,
                band.max_pct
            ));
        }
    }
    ensure!(
        misses.is_empty(),
        "Acceptance bands violated: {}",
        misses.join("; ")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::run_batches;
    use montyhall_game::{HostPolicy, RateBand, TrialRunner};

    #[test]
    fn default_bands_accept_large_batches() {
        let runner = TrialRunner::new(10_000).unwrap();
        let runs = run_batches(&runner, &HostPolicy::ALL, 1337);
        validate_acceptance(&runs, &AcceptanceBands::default()).unwrap();
    }

    #[test]
    fn impossible_band_is_reported() {
        let runner = TrialRunner::new(1_000).unwrap();
        let runs = run_batches(&runner, &[HostPolicy::Uninformed], 1337);
        let bands = AcceptanceBands {
            uninformed: RateBand::new(90.0, 100.0),
            ..AcceptanceBands::default()
        };
        let err = validate_acceptance(&runs, &bands).unwrap_err();
        assert!(err.to_string().contains("Uninformed host"));
    }
}
