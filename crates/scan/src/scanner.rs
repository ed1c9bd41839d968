//! The lag-time scan driver.

use rayon::prelude::*;
use tracing::info;

use msm_estimate::{EstimateConfig, EstimateError, estimate};
use msm_spectral::analyze;
use msm_traj::Trajectory;

use crate::error::ScanError;
use crate::table::LagScanTable;

/// Re-estimates the model at each lag and tabulates implied timescales.
///
/// For each lag in `lags` (independently; input order preserved in the
/// output) the estimator and spectral analyzer run in sequence, and the
/// first `n_modes` implied timescales are kept, NaN-padded when the matrix
/// dimension at that lag provides fewer. Per-lag runs execute in parallel.
///
/// All lags are validated before any computation starts: a zero lag or a
/// lag at or beyond the trajectory length is invalid input and fails the
/// whole scan, matching the single-lag estimator contract.
///
/// # Errors
///
/// [`ScanError::NoLags`] / [`ScanError::ZeroModes`] for malformed requests,
/// otherwise whatever the estimator or analyzer reports for some lag.
pub fn scan(
    trajectory: &Trajectory,
    lags: &[usize],
    n_modes: usize,
    config: &EstimateConfig,
) -> Result<LagScanTable, ScanError> {
    if lags.is_empty() {
        return Err(ScanError::NoLags);
    }
    if n_modes == 0 {
        return Err(ScanError::ZeroModes);
    }
    for &lag in lags {
        if lag == 0 {
            return Err(EstimateError::ZeroLag.into());
        }
        if lag >= trajectory.len() {
            return Err(EstimateError::LagExceedsLength {
                lag,
                len: trajectory.len(),
            }
            .into());
        }
    }

    let rows: Vec<Vec<f64>> = lags
        .par_iter()
        .map(|&lag| -> Result<Vec<f64>, ScanError> {
            let est = estimate(trajectory, lag, config)?;
            let analysis = analyze(est.matrix().probs(), lag)?;
            let mut row: Vec<f64> = analysis
                .timescales()
                .iter()
                .copied()
                .take(n_modes)
                .collect();
            row.resize(n_modes, f64::NAN);
            Ok(row)
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        n_lags = lags.len(),
        n_modes,
        n_steps = trajectory.len(),
        "lag scan complete"
    );
    Ok(LagScanTable::new(lags.to_vec(), n_modes, rows))
}
