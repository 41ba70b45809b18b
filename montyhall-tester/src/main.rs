mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use logic::{BatchRun, resolve_seed, run_batches, validate_acceptance};
use montyhall_game::{HostPolicy, SimulationConfig, TrialRunner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicySelection {
    /// Host never opens the contestant's door
    RuleCompliant,
    /// Host opens a random goat door, possibly the contestant's
    Uninformed,
    /// Run both host policies
    Both,
}

impl PolicySelection {
    const fn policies(self) -> &'static [HostPolicy] {
        match self {
            Self::RuleCompliant => &[HostPolicy::RuleCompliant],
            Self::Uninformed => &[HostPolicy::Uninformed],
            Self::Both => &HostPolicy::ALL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "montyhall-tester", version = "0.1.0")]
#[command(about = "Monte Carlo estimates of the Monty Hall switch strategy")]
struct Args {
    /// Trials per host policy (overrides the config file)
    #[arg(long)]
    trials: Option<u64>,

    /// Host policies to simulate
    #[arg(long, value_enum, default_value_t = PolicySelection::Both)]
    policy: PolicySelection,

    /// Seed: decimal or 0x-prefixed hex (random when omitted)
    #[arg(long)]
    seed: Option<String>,

    /// JSON simulation config (trials, seed, acceptance bands)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Fail when a switch-win rate falls outside its acceptance band
    #[arg(long)]
    acceptance: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    announce_banner();

    let start_time = Instant::now();
    let config = resolve_config(&args)?;
    let seed = match config.seed {
        Some(seed) => seed,
        None => resolve_seed(None)?,
    };
    let runner = TrialRunner::from_config(&config).context("invalid simulation config")?;

    let runs = run_batches(&runner, args.policy.policies(), seed);

    write_reports(&args, &runs, start_time)?;

    if args.acceptance {
        validate_acceptance(&runs, &config.bands)?;
    }

    Ok(())
}

/// Goes to stderr so stdout carries only the report.
fn announce_banner() {
    eprintln!("{}", "🚪 Monty Hall Simulator".bright_cyan().bold());
    eprintln!("{}", "=======================".cyan());
}

/// Load the optional config file and layer CLI overrides on top.
fn resolve_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            SimulationConfig::from_json_str(&raw)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };

    if let Some(trials) = args.trials {
        config = config.with_trials(trials);
    }
    if let Some(token) = args.seed.as_deref() {
        config = config.with_seed(resolve_seed(Some(token))?);
    }

    config.validate().context("invalid simulation config")?;
    Ok(config)
}

fn write_reports(args: &Args, runs: &[BatchRun], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => logic::reports::generate_json_report(&mut output_target, runs)?,
        ReportFormat::Markdown => {
            logic::reports::generate_markdown_report(&mut output_target, runs)?;
        }
        ReportFormat::Console => logic::reports::generate_console_report(
            &mut output_target,
            runs,
            args.verbose,
            start_time.elapsed(),
        )?,
    }

    output_target.flush()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer().flush()
    }
}
