//! The `scan` subcommand: implied timescales across lag times, as CSV.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use msm_scan::{LagScanTable, scan};
use msm_traj::read_trajectory;

use crate::cli::ScanArgs;
use crate::config::MsmConfig;
use crate::convert;

pub fn run(args: ScanArgs) -> Result<()> {
    let config = MsmConfig::load(args.config.as_deref())?;

    let input: PathBuf = args
        .input
        .or(config.input.path.clone())
        .context("no input path: set [input].path in config or use --input")?;
    let lags = args.lags.unwrap_or_else(|| config.scan.lags.clone());
    let n_modes = args.n_modes.unwrap_or(config.scan.n_modes);
    let policy = args.policy.unwrap_or(config.estimate.policy.clone());

    let reader_cfg = convert::build_reader_config(&config.input);
    let estimate_cfg = convert::build_estimate_config(&policy)?;

    info!(path = %input.display(), n_lags = lags.len(), n_modes, "reading trajectory");
    let traj = read_trajectory(&input, &reader_cfg)
        .with_context(|| format!("failed to read trajectory: {}", input.display()))?;

    let table = scan(&traj, &lags, n_modes, &estimate_cfg).context("lag scan failed")?;

    match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create output: {}", path.display()))?;
            write_csv(&table, file)?;
            info!(path = %path.display(), "scan table written");
        }
        None => write_csv(&table, std::io::stdout().lock())?,
    }
    Ok(())
}

/// Writes the scan table as `lag,ts_1..ts_k`; undefined entries print as NaN.
fn write_csv<W: Write>(table: &LagScanTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["lag".to_string()];
    header.extend((1..=table.n_modes()).map(|k| format!("ts_{k}")));
    wtr.write_record(&header).context("csv header write failed")?;

    for (lag, row) in table.iter() {
        let mut record = vec![lag.to_string()];
        record.extend(row.iter().map(|v| v.to_string()));
        wtr.write_record(&record).context("csv row write failed")?;
    }
    wtr.flush().context("csv flush failed")?;
    Ok(())
}
