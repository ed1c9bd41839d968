//! The integer transition count matrix.

use nalgebra::DMatrix;

/// A square matrix of transition counts indexed by sorted state labels.
///
/// Entry `(i, j)` is the number of positions `t` with
/// `trajectory[t] = labels[i]` and `trajectory[t + lag] = labels[j]`.
/// The total over all entries equals `trajectory.len() - lag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionCounts {
    labels: Vec<u32>,
    lag: usize,
    counts: DMatrix<u64>,
}

impl TransitionCounts {
    /// Constructs a count matrix from its parts.
    pub(crate) fn new(labels: Vec<u32>, lag: usize, counts: DMatrix<u64>) -> Self {
        debug_assert_eq!(counts.nrows(), labels.len());
        debug_assert_eq!(counts.ncols(), labels.len());
        Self { labels, lag, counts }
    }

    /// Returns the sorted state labels indexing the matrix axes.
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Returns the lag time the counts were taken at.
    pub fn lag(&self) -> usize {
        self.lag
    }

    /// Returns the number of distinct observed states.
    pub fn n_states(&self) -> usize {
        self.labels.len()
    }

    /// Returns the raw count matrix.
    pub fn counts(&self) -> &DMatrix<u64> {
        &self.counts
    }

    /// Returns the count for a source/destination index pair.
    pub fn count(&self, from: usize, to: usize) -> u64 {
        self.counts[(from, to)]
    }

    /// Returns the total count over a source row.
    pub fn row_sum(&self, from: usize) -> u64 {
        self.counts.row(from).iter().sum()
    }

    /// Returns the total over all entries; equal to `N - lag` by construction.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
