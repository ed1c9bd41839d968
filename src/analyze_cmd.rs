//! The `analyze` subcommand: one lag, full spectral report.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use msm_estimate::estimate;
use msm_spectral::{analyze, free_energy};
use msm_traj::read_trajectory;

use crate::cli::AnalyzeArgs;
use crate::config::MsmConfig;
use crate::convert;

/// JSON-serializable view of one eigenvalue.
#[derive(Serialize)]
struct EigenvalueOut {
    re: f64,
    im: f64,
}

/// The full single-lag report, shaped for direct plotting.
///
/// Non-finite values (NaN timescales, infinite free energies) serialize as
/// JSON `null`; consumers must tolerate them per the error-handling policy.
#[derive(Serialize)]
struct AnalyzeReport {
    lag: usize,
    n_states: usize,
    labels: Vec<u32>,
    total_transitions: u64,
    degenerate_labels: Vec<u32>,
    dropped_labels: Vec<u32>,
    occupancy_labels: Vec<u32>,
    occupancy_counts: Vec<u64>,
    transition_matrix: Vec<Vec<f64>>,
    eigenvalues: Vec<EigenvalueOut>,
    implied_timescales: Vec<f64>,
    stationary: Vec<f64>,
    free_energy: Vec<f64>,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let config = MsmConfig::load(args.config.as_deref())?;

    let input: PathBuf = args
        .input
        .or(config.input.path.clone())
        .context("no input path: set [input].path in config or use --input")?;
    let lag = args.lag.unwrap_or(config.analyze.lag);
    let policy = args.policy.unwrap_or(config.estimate.policy.clone());

    let reader_cfg = convert::build_reader_config(&config.input);
    let estimate_cfg = convert::build_estimate_config(&policy)?;

    info!(path = %input.display(), lag, "reading trajectory");
    let traj = read_trajectory(&input, &reader_cfg)
        .with_context(|| format!("failed to read trajectory: {}", input.display()))?;

    let est = estimate(&traj, lag, &estimate_cfg)
        .with_context(|| format!("estimation failed at lag {lag}"))?;
    let analysis = analyze(est.matrix().probs(), lag)
        .with_context(|| format!("spectral analysis failed at lag {lag}"))?;
    let stationary = analysis
        .stationary()
        .context("stationary distribution extraction failed")?;

    let tm = est.matrix();
    let (occupancy_labels, occupancy_counts) = traj.occupancy();
    let report = AnalyzeReport {
        lag,
        n_states: tm.n_states(),
        labels: tm.labels().to_vec(),
        total_transitions: est.counts().total(),
        degenerate_labels: tm
            .degenerate_rows()
            .iter()
            .map(|&i| tm.labels()[i])
            .collect(),
        dropped_labels: tm.dropped_labels().to_vec(),
        occupancy_labels,
        occupancy_counts,
        transition_matrix: (0..tm.n_states())
            .map(|i| (0..tm.n_states()).map(|j| tm.prob(i, j)).collect())
            .collect(),
        eigenvalues: analysis
            .eigenvalues()
            .iter()
            .map(|c| EigenvalueOut { re: c.re, im: c.im })
            .collect(),
        implied_timescales: analysis.timescales().to_vec(),
        free_energy: free_energy(&stationary),
        stationary,
    };

    let json = serde_json::to_string_pretty(&report).context("report serialization failed")?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
