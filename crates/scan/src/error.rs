//! Error types for the msm-scan crate.

use msm_estimate::EstimateError;
use msm_spectral::SpectralError;

/// Error type for all fallible operations in the msm-scan crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScanError {
    /// Returned when the lag list is empty.
    #[error("no lag times given")]
    NoLags,

    /// Returned when zero modes are requested.
    #[error("n_modes must be at least 1")]
    ZeroModes,

    /// Wraps a failure from the transition statistics estimator.
    #[error("estimation failed: {0}")]
    Estimate(#[from] EstimateError),

    /// Wraps a failure from the spectral analyzer.
    #[error("spectral analysis failed: {0}")]
    Spectral(#[from] SpectralError),
}
