//! Implied relaxation timescales from transition matrix eigenvalues.

use nalgebra::{Complex, Normed};

/// Converts non-leading eigenvalues into implied timescales.
///
/// `values` must be sorted by descending magnitude; the leading entry (the
/// stationary mode, expected magnitude ≈ 1) is skipped. For each remaining
/// eigenvalue `μ`, the timescale is `−lag / ln|μ|`, in the same time units
/// as the lag.
///
/// Undefined cases yield NaN instead of panicking or returning a misleading
/// number: `|μ| ≥ 1` (a numerical artifact or a non-ergodic chain) and
/// `|μ| = 0` (instant decay, `ln` diverges).
///
/// The output length is `values.len() - 1`, ordered to match the input.
pub fn implied_timescales(values: &[Complex<f64>], lag: usize) -> Vec<f64> {
    values
        .iter()
        .skip(1)
        .map(|mu| {
            let mag = mu.norm();
            if mag <= 0.0 || mag >= 1.0 {
                f64::NAN
            } else {
                -(lag as f64) / mag.ln()
            }
        })
        .collect()
}
