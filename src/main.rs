use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use idsbench::{Algorithm, ExperimentConfig, Summary, experiment, parse_size, report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Matching algorithm: brute, kmp, hash, trie, horspool or rabin
    #[arg(long, value_name = "ALGO", default_value = "brute")]
    algo: Algorithm,

    /// CSV or TSV dataset to scan
    #[arg(long, value_name = "PATH", default_value = "Friday-WorkingHours-Morning.pcap_ISCX.csv")]
    data: PathBuf,

    /// Signature list, one pattern per line
    #[arg(long, value_name = "PATH", default_value = "signatures.txt")]
    patterns: PathBuf,

    /// Approximate text budget per run (N, NKB, NMB or NGB; 0 = unlimited)
    #[arg(long, value_name = "SIZE", default_value = "1MB", value_parser = parse_size)]
    text_bytes: usize,

    /// Limit the number of patterns loaded
    #[arg(long, value_name = "N")]
    pattern_count: Option<usize>,

    /// Repeat the experiment N times
    #[arg(long, value_name = "N", default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,

    /// Write per-trial metrics to a CSV file
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Suppress informational output
    #[arg(long)]
    quiet: bool,
}

impl Args {
    fn into_config(self) -> ExperimentConfig {
        ExperimentConfig {
            data_file: self.data,
            pattern_file: self.patterns,
            text_bytes: self.text_bytes,
            pattern_count: self.pattern_count,
            trials: self.trials as usize,
            output_csv: self.output,
            algorithm: self.algo,
        }
    }
}

/// `--quiet` pins the level to `error`; otherwise `RUST_LOG` directives apply
/// on top of an `info` default.
fn log_filter(quiet: bool, env_directives: Option<&str>) -> EnvFilter {
    if quiet {
        return EnvFilter::new(LevelFilter::ERROR.to_string());
    }
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(env_directives.unwrap_or_default())
}

fn init_logging(quiet: bool) -> Result<()> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(quiet, env_directives.as_deref());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to install logger")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.quiet)?;
    let config = args.into_config();

    let outcome = experiment::run(&config)?;

    if let Some(summary) = Summary::from_trials(&outcome.trials) {
        println!();
        println!("{summary}");
    }

    if let Some(path) = config.output_csv.as_ref() {
        match report::write_csv_file(path, &outcome.trials) {
            Ok(()) => info!(path = %path.display(), "Wrote trial metrics"),
            Err(err) => error!(
                path = %path.display(),
                "Failed to open output CSV for writing: {err}"
            ),
        }
    }
    Ok(())
}
