//! The combined spectral analysis entry point.

use nalgebra::{Complex, DMatrix, Normed};
use tracing::debug;

use crate::eigen::{EigenPairs, eigen_decompose};
use crate::error::SpectralError;
use crate::stationary::stationary_distribution;
use crate::timescales::implied_timescales;

/// The spectral analysis of one transition matrix at one lag time.
#[derive(Debug, Clone)]
pub struct SpectralAnalysis {
    lag: usize,
    pairs: EigenPairs,
    timescales: Vec<f64>,
}

impl SpectralAnalysis {
    /// Returns the lag time the matrix was estimated at.
    pub fn lag(&self) -> usize {
        self.lag
    }

    /// Returns the eigenvalues, descending by magnitude.
    pub fn eigenvalues(&self) -> &[Complex<f64>] {
        self.pairs.values()
    }

    /// Returns the left eigenvectors of the transition matrix as columns,
    /// ordered like [`eigenvalues`](Self::eigenvalues).
    pub fn eigenvectors(&self) -> &DMatrix<Complex<f64>> {
        self.pairs.vectors()
    }

    /// Returns the full eigenpair set.
    pub fn eigenpairs(&self) -> &EigenPairs {
        &self.pairs
    }

    /// Implied timescales for the non-leading eigenvalues; length is
    /// `dim − 1`, NaN marking undefined entries.
    pub fn timescales(&self) -> &[f64] {
        &self.timescales
    }

    /// Extracts the stationary distribution from the leading eigenpair.
    pub fn stationary(&self) -> Result<Vec<f64>, SpectralError> {
        stationary_distribution(&self.pairs)
    }
}

/// Runs the spectral analysis of a row-stochastic matrix at the given lag.
///
/// Eigenpairs are computed for the *transpose* of `probs` (the left
/// eigenvectors of the original), sorted by descending magnitude, and
/// converted into implied timescales. The caller is responsible for handing
/// in a well-defined matrix; degenerate rows zero-filled by the estimator
/// are acceptable, NaN entries are not.
///
/// # Errors
///
/// Propagates [`SpectralError`] from the eigen-decomposition; undefined
/// timescales are reported as NaN, never as an error.
pub fn analyze(probs: &DMatrix<f64>, lag: usize) -> Result<SpectralAnalysis, SpectralError> {
    let pairs = eigen_decompose(&probs.transpose())?;
    let timescales = implied_timescales(pairs.values(), lag);
    debug!(
        lag,
        dim = pairs.dim(),
        leading_magnitude = pairs.values()[0].norm(),
        "spectral analysis complete"
    );
    Ok(SpectralAnalysis {
        lag,
        pairs,
        timescales,
    })
}
