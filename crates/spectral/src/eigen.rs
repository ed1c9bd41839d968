//! Complex eigen-decomposition of general square real matrices.
//!
//! nalgebra provides complex eigenvalues for a general real matrix via its
//! Schur decomposition but no matching eigenvectors, so the vectors are
//! recovered here by shifted inverse iteration on the complexified matrix.

use std::cmp::Ordering;

use nalgebra::{Complex, DMatrix, DVector, Normed};
use tracing::warn;

use crate::error::SpectralError;

const MAX_SWEEPS: usize = 50;
const CONVERGENCE_TOL: f64 = 1e-12;
const RESIDUAL_TOL: f64 = 1e-8;
const INITIAL_SHIFT: f64 = 1e-10;
const MAX_SHIFT_ATTEMPTS: usize = 5;

/// Eigenvalues and matching eigenvectors, sorted by descending `|λ|`.
///
/// Column `k` of [`vectors`](Self::vectors) pairs with `values()[k]`. Ties
/// in magnitude are broken by descending real part (then imaginary part),
/// so the unit eigenvalue of a periodic chain sorts ahead of its `−1`
/// partner. Each vector is unit-norm with its largest-magnitude component
/// rotated to be real and positive, which makes repeated decompositions
/// bit-identical.
#[derive(Debug, Clone)]
pub struct EigenPairs {
    values: Vec<Complex<f64>>,
    vectors: DMatrix<Complex<f64>>,
}

impl EigenPairs {
    /// Returns the eigenvalues, descending by magnitude.
    pub fn values(&self) -> &[Complex<f64>] {
        &self.values
    }

    /// Returns the eigenvectors as matrix columns, ordered like `values()`.
    pub fn vectors(&self) -> &DMatrix<Complex<f64>> {
        &self.vectors
    }

    /// Returns the matrix dimension.
    pub fn dim(&self) -> usize {
        self.values.len()
    }
}

/// Decomposes a square real matrix into complex eigenpairs.
///
/// # Errors
///
/// * [`SpectralError::EmptyMatrix`] / [`SpectralError::NotSquare`] for
///   malformed input.
/// * [`SpectralError::NonConvergence`] if inverse iteration fails for some
///   eigenvalue after repeated shift adjustments.
pub fn eigen_decompose(matrix: &DMatrix<f64>) -> Result<EigenPairs, SpectralError> {
    if matrix.is_empty() {
        return Err(SpectralError::EmptyMatrix);
    }
    if matrix.nrows() != matrix.ncols() {
        return Err(SpectralError::NotSquare {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        });
    }

    let mut values: Vec<Complex<f64>> = matrix.complex_eigenvalues().iter().copied().collect();
    values.sort_by(descending_magnitude);

    let complex = matrix.map(|x| Complex::new(x, 0.0));
    let n = matrix.nrows();
    let mut vectors = DMatrix::<Complex<f64>>::zeros(n, n);
    for (k, &lambda) in values.iter().enumerate() {
        let v = inverse_iteration(&complex, lambda)?;
        vectors.set_column(k, &v);
    }

    Ok(EigenPairs { values, vectors })
}

/// Extracts real parts from a complex slice with a tolerance check.
///
/// Emits a `tracing` warning when the largest imaginary magnitude exceeds
/// `tol`; the real parts are returned either way so the caller decides what
/// a warning means, but nothing is ever discarded silently.
pub fn real_part_checked(values: &[Complex<f64>], tol: f64) -> Vec<f64> {
    let max_imag = values.iter().map(|c| c.im.abs()).fold(0.0, f64::max);
    if max_imag > tol {
        warn!(max_imag, tol, "discarding non-negligible imaginary parts");
    }
    values.iter().map(|c| c.re).collect()
}

fn descending_magnitude(a: &Complex<f64>, b: &Complex<f64>) -> Ordering {
    b.norm()
        .partial_cmp(&a.norm())
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.re.partial_cmp(&a.re).unwrap_or(Ordering::Equal))
        .then_with(|| b.im.partial_cmp(&a.im).unwrap_or(Ordering::Equal))
}

/// Inverse iteration for the eigenvector of `a` belonging to `lambda`.
///
/// The system is shifted slightly off the eigenvalue so the LU factorization
/// stays non-singular; if iteration stalls the shift is widened and retried.
fn inverse_iteration(
    a: &DMatrix<Complex<f64>>,
    lambda: Complex<f64>,
) -> Result<DVector<Complex<f64>>, SpectralError> {
    let n = a.nrows();
    if n == 1 {
        return Ok(DVector::from_element(1, Complex::new(1.0, 0.0)));
    }

    let mut shift = INITIAL_SHIFT * lambda.norm().max(1.0);
    for _ in 0..MAX_SHIFT_ATTEMPTS {
        let offset = lambda + Complex::new(shift, shift);
        let shifted = a.clone() - DMatrix::from_diagonal_element(n, n, offset);
        let lu = shifted.lu();

        // Mildly uneven start vector so it is not orthogonal to the target mode.
        let mut v = DVector::from_fn(n, |i, _| {
            Complex::new(1.0 + (i as f64 + 1.0) / (n as f64), 0.0)
        });
        v.unscale_mut(v.norm());
        normalize_phase(&mut v);

        let mut converged = false;
        for _ in 0..MAX_SWEEPS {
            let Some(mut w) = lu.solve(&v) else { break };
            let norm = w.norm();
            if !norm.is_finite() || norm == 0.0 {
                break;
            }
            w.unscale_mut(norm);
            normalize_phase(&mut w);
            let delta = (&w - &v).norm();
            v = w;
            if delta < CONVERGENCE_TOL {
                converged = true;
                break;
            }
        }

        let residual = (a * &v - &v * lambda).norm();
        if converged || residual <= RESIDUAL_TOL * (1.0 + lambda.norm()) {
            return Ok(v);
        }
        shift *= 100.0;
    }

    Err(SpectralError::NonConvergence {
        re: lambda.re,
        im: lambda.im,
    })
}

/// Rotates a vector so its largest-magnitude component is real and positive.
///
/// Inverse iteration leaves the complex phase arbitrary; pinning it makes
/// the convergence test meaningful and the output deterministic.
fn normalize_phase(v: &mut DVector<Complex<f64>>) {
    let mut best = 0usize;
    let mut best_mag = 0.0;
    for (i, c) in v.iter().enumerate() {
        let mag = c.norm();
        if mag > best_mag {
            best_mag = mag;
            best = i;
        }
    }
    if best_mag > 0.0 {
        let phase = v[best] / Complex::new(best_mag, 0.0);
        for c in v.iter_mut() {
            *c /= phase;
        }
    }
}
