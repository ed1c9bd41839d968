//! # msm-spectral
//!
//! Spectral analysis of row-stochastic transition matrices.
//!
//! The eigenvalues of a transition matrix carry the kinetics of the chain:
//! the unit eigenvalue pairs with the stationary distribution (as the left
//! eigenvector, i.e. the eigenvector of the transpose), and each sub-unity
//! eigenvalue `μ` corresponds to a relaxation process with implied timescale
//! `−τ / ln|μ|`.
//!
//! A transition matrix is only guaranteed row-stochastic, not symmetric, so
//! eigenpairs are complex-typed throughout. Taking real parts goes through
//! [`real_part_checked`], which warns when imaginary parts are not
//! negligible instead of silently truncating.

mod analyze;
mod eigen;
mod error;
mod stationary;
mod timescales;

pub use analyze::{SpectralAnalysis, analyze};
pub use eigen::{EigenPairs, eigen_decompose, real_part_checked};
pub use error::SpectralError;
pub use stationary::{DEFAULT_IMAG_TOL, free_energy, stationary_distribution};
pub use timescales::implied_timescales;
