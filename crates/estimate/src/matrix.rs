//! The row-stochastic transition probability matrix.

use nalgebra::DMatrix;

use crate::error::EstimateError;

/// A square row-stochastic transition matrix over a labelled state alphabet.
///
/// Row `i` holds the probabilities of transitioning from `labels[i]` to each
/// destination state within one lag interval. Every row sums to 1.0 except
/// rows listed in [`degenerate_rows`](Self::degenerate_rows), which are
/// all-zero under the zero-fill policy.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    labels: Vec<u32>,
    probs: DMatrix<f64>,
    degenerate_rows: Vec<usize>,
    dropped_labels: Vec<u32>,
}

impl TransitionMatrix {
    /// Constructs a transition matrix from its parts.
    pub(crate) fn new(
        labels: Vec<u32>,
        probs: DMatrix<f64>,
        degenerate_rows: Vec<usize>,
        dropped_labels: Vec<u32>,
    ) -> Self {
        debug_assert_eq!(probs.nrows(), labels.len());
        debug_assert_eq!(probs.ncols(), labels.len());
        Self {
            labels,
            probs,
            degenerate_rows,
            dropped_labels,
        }
    }

    /// Returns the sorted state labels indexing the matrix axes.
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Returns the number of states in the matrix.
    pub fn n_states(&self) -> usize {
        self.labels.len()
    }

    /// Returns the full probability matrix.
    pub fn probs(&self) -> &DMatrix<f64> {
        &self.probs
    }

    /// Returns the probability of transitioning between two state indices.
    pub fn prob(&self, from: usize, to: usize) -> f64 {
        self.probs[(from, to)]
    }

    /// Indices of rows left all-zero by the zero-fill policy.
    ///
    /// Empty under the drop-states policy and whenever every state was
    /// observed as a source at this lag.
    pub fn degenerate_rows(&self) -> &[usize] {
        &self.degenerate_rows
    }

    /// Labels removed from the alphabet by the drop-states policy.
    pub fn dropped_labels(&self) -> &[u32] {
        &self.dropped_labels
    }

    /// True if the row at `from` was flagged degenerate.
    pub fn is_degenerate(&self, from: usize) -> bool {
        self.degenerate_rows.contains(&from)
    }

    /// Validates that the matrix is row-stochastic.
    ///
    /// Every value must be finite and in `[0, 1]`; every non-degenerate row
    /// must sum to 1.0 within 1e-9. Reports the first violation found.
    pub fn validate(&self) -> Result<(), EstimateError> {
        for i in 0..self.probs.nrows() {
            let mut sum = 0.0;
            for j in 0..self.probs.ncols() {
                let p = self.probs[(i, j)];
                if !p.is_finite() {
                    return Err(EstimateError::NotStochastic {
                        reason: format!("probs[{i}][{j}] is not finite: {p}"),
                    });
                }
                if !(0.0..=1.0).contains(&p) {
                    return Err(EstimateError::NotStochastic {
                        reason: format!("probs[{i}][{j}] = {p} is outside [0, 1]"),
                    });
                }
                sum += p;
            }
            if self.is_degenerate(i) {
                if sum != 0.0 {
                    return Err(EstimateError::NotStochastic {
                        reason: format!("degenerate row {i} sums to {sum}, expected 0"),
                    });
                }
            } else if (sum - 1.0).abs() > 1e-9 {
                return Err(EstimateError::NotStochastic {
                    reason: format!("row {i} sums to {sum}, expected ~1.0"),
                });
            }
        }
        Ok(())
    }
}
