use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Markov state model estimation from discretized trajectories.
#[derive(Parser)]
#[command(
    name = "msm",
    version,
    about = "Markov state model estimation from discretized trajectories"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate and spectrally analyze the model at one lag time.
    Analyze(AnalyzeArgs),
    /// Scan implied timescales across several lag times.
    Scan(ScanArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Trajectory file (single-column CSV, optionally gzipped).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Lag time in trajectory steps.
    #[arg(short, long)]
    pub lag: Option<usize>,

    /// Degenerate-row policy: zero-fill or drop-states.
    #[arg(long)]
    pub policy: Option<String>,

    /// Path for the JSON report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `scan` subcommand.
#[derive(clap::Args)]
pub struct ScanArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Trajectory file (single-column CSV, optionally gzipped).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Comma-separated lag times to scan.
    #[arg(long, value_delimiter = ',')]
    pub lags: Option<Vec<usize>>,

    /// Number of implied-timescale modes per lag.
    #[arg(long = "n-modes")]
    pub n_modes: Option<usize>,

    /// Degenerate-row policy: zero-fill or drop-states.
    #[arg(long)]
    pub policy: Option<String>,

    /// Path for the CSV table (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
