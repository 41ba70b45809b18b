use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::BatchRun;

/// The two canonical summary lines for one batch.
///
/// Percentages use `{:?}` so whole values keep their decimal point (`75.0`).
pub fn write_summary_lines(out: &mut dyn Write, run: &BatchRun) -> Result<()> {
    writeln!(
        out,
        "Number of times switching was good: {} ({:?})",
        run.summary.switch_good, run.switch_good_pct
    )?;
    writeln!(
        out,
        "Number of times switching was bad: {} ({:?})",
        run.summary.switch_bad, run.switch_bad_pct
    )?;
    Ok(())
}

pub fn generate_console_report(
    out: &mut dyn Write,
    runs: &[BatchRun],
    verbose: bool,
    total_duration: Duration,
) -> Result<()> {
    for run in runs {
        if verbose {
            writeln!(out)?;
            writeln!(
                out,
                "{} ({} trials)",
                run.policy().label().bright_white().bold(),
                run.summary.trials
            )?;
        }
        write_summary_lines(out, run)?;
        if verbose {
            writeln!(out, "   Seed: {}", run.seed)?;
            writeln!(
                out,
                "   Staying was good: {}",
                run.summary.stay_good()
            )?;
            writeln!(
                out,
                "   Host opened the contestant's door: {}",
                run.summary.host_opened_guess
            )?;
        }
    }
    if verbose {
        writeln!(out)?;
        writeln!(out, "Total time: {total_duration:?}")?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, runs: &[BatchRun]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(runs)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, runs: &[BatchRun]) -> Result<()> {
    writeln!(out, "# Monty Hall Simulation Results\n")?;

    for run in runs {
        writeln!(out, "## {}\n", run.policy().label())?;
        writeln!(out, "- **Trials**: {}", run.summary.trials)?;
        writeln!(out, "- **Seed**: {}\n", run.seed)?;
        writeln!(out, "| Outcome | Count | Percent |")?;
        writeln!(out, "|---|---:|---:|")?;
        writeln!(
            out,
            "| Switching was good | {} | {:.3}% |",
            run.summary.switch_good, run.switch_good_pct
        )?;
        writeln!(
            out,
            "| Switching was bad | {} | {:.3}% |",
            run.summary.switch_bad, run.switch_bad_pct
        )?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use montyhall_game::{HostPolicy, RunSummary};

    fn sample_run() -> BatchRun {
        let summary = RunSummary {
            policy: HostPolicy::RuleCompliant,
            trials: 4,
            switch_good: 3,
            switch_bad: 1,
            host_opened_guess: 0,
        };
        BatchRun::new(42, summary)
    }

    #[test]
    fn summary_lines_use_full_precision() {
        let mut buf = Vec::new();
        write_summary_lines(&mut buf, &sample_run()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Number of times switching was good: 3 (75.0)\nNumber of times switching was bad: 1 (25.0)\n"
        );
    }

    #[test]
    fn summary_lines_keep_decimal_point_at_extremes() {
        let summary = RunSummary {
            policy: HostPolicy::RuleCompliant,
            trials: 1,
            switch_good: 0,
            switch_bad: 1,
            host_opened_guess: 0,
        };
        let mut buf = Vec::new();
        write_summary_lines(&mut buf, &BatchRun::new(1, summary)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("was good: 0 (0.0)"));
        assert!(text.contains("was bad: 1 (100.0)"));
    }

    #[test]
    fn console_report_is_two_lines_per_run_by_default() {
        let mut buf = Vec::new();
        let runs = [sample_run(), sample_run()];
        generate_console_report(&mut buf, &runs, false, Duration::ZERO).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().all(|line| line.starts_with("Number of times switching was")));
    }

    #[test]
    fn console_report_includes_verbose_details() {
        let mut buf = Vec::new();
        generate_console_report(&mut buf, &[sample_run()], true, Duration::ZERO).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Rule-compliant host"));
        assert!(text.contains("Seed: 42"));
        assert!(text.contains("Staying was good: 1"));
    }

    #[test]
    fn markdown_report_has_table() {
        let mut buf = Vec::new();
        generate_markdown_report(&mut buf, &[sample_run()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("# Monty Hall Simulation Results"));
        assert!(text.contains("| Switching was good | 3 | 75.000% |"));
    }

    #[test]
    fn json_report_is_an_array() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, &[sample_run()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["switch_good"], 3);
        assert_eq!(parsed[0]["seed"], 42);
    }
}
