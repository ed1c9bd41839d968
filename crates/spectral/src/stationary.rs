//! Stationary distribution and free-energy profile.

use crate::eigen::{EigenPairs, real_part_checked};
use crate::error::SpectralError;

/// Imaginary-magnitude tolerance above which taking a real part warns.
pub const DEFAULT_IMAG_TOL: f64 = 1e-9;

/// Extracts the stationary distribution from the leading eigenpair.
///
/// For eigenpairs of the *transposed* transition matrix, the leading
/// eigenvector (eigenvalue ≈ 1) is the stationary distribution up to scale
/// and sign. The real part is taken through [`real_part_checked`], the sign
/// fixed by dividing by the entry sum, tiny negative round-off clamped to
/// zero, and the result renormalized to sum to 1.
///
/// # Errors
///
/// Returns [`SpectralError::EmptyMatrix`] for empty input and
/// [`SpectralError::DegenerateStationary`] when the entries sum to zero and
/// no scale can be fixed.
pub fn stationary_distribution(pairs: &EigenPairs) -> Result<Vec<f64>, SpectralError> {
    if pairs.dim() == 0 {
        return Err(SpectralError::EmptyMatrix);
    }

    let leading: Vec<_> = pairs.vectors().column(0).iter().copied().collect();
    let real = real_part_checked(&leading, DEFAULT_IMAG_TOL);

    let sum: f64 = real.iter().sum();
    if sum == 0.0 || !sum.is_finite() {
        return Err(SpectralError::DegenerateStationary);
    }

    // Dividing by the (possibly negative) sum fixes both scale and sign.
    let mut pi: Vec<f64> = real.iter().map(|x| x / sum).collect();
    for p in &mut pi {
        if *p < 0.0 {
            *p = 0.0;
        }
    }
    let clamped_sum: f64 = pi.iter().sum();
    if clamped_sum == 0.0 {
        return Err(SpectralError::DegenerateStationary);
    }
    for p in &mut pi {
        *p /= clamped_sum;
    }
    Ok(pi)
}

/// Boltzmann-inverts a probability distribution into a free-energy profile.
///
/// Returns `−ln p` per state, shifted so the minimum is 0 (free energies are
/// only defined up to an additive constant). States with zero probability
/// get `+∞`, the natural sentinel for "never occupied".
pub fn free_energy(stationary: &[f64]) -> Vec<f64> {
    let mut profile: Vec<f64> = stationary
        .iter()
        .map(|&p| if p > 0.0 { -p.ln() } else { f64::INFINITY })
        .collect();
    let min = profile
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::INFINITY, f64::min);
    if min.is_finite() {
        for v in &mut profile {
            *v -= min;
        }
    }
    profile
}
