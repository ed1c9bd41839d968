//! The lag / implied-timescale result table.

/// Implied timescales per scanned lag time.
///
/// One row per input lag, in input order; every row has exactly `n_modes`
/// entries, NaN-padded where a lag yielded fewer defined timescales.
#[derive(Debug, Clone, PartialEq)]
pub struct LagScanTable {
    lags: Vec<usize>,
    n_modes: usize,
    rows: Vec<Vec<f64>>,
}

impl LagScanTable {
    pub(crate) fn new(lags: Vec<usize>, n_modes: usize, rows: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(lags.len(), rows.len());
        debug_assert!(rows.iter().all(|r| r.len() == n_modes));
        Self {
            lags,
            n_modes,
            rows,
        }
    }

    /// Returns the scanned lag times, in the order they were given.
    pub fn lags(&self) -> &[usize] {
        &self.lags
    }

    /// Returns the number of timescale modes per row.
    pub fn n_modes(&self) -> usize {
        self.n_modes
    }

    /// Returns the number of scanned lags.
    pub fn n_lags(&self) -> usize {
        self.lags.len()
    }

    /// Returns the timescale row at a positional index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= n_lags()`.
    pub fn row(&self, idx: usize) -> &[f64] {
        &self.rows[idx]
    }

    /// Returns the timescale row for a lag value, if that lag was scanned.
    ///
    /// When a lag was scanned more than once the first occurrence wins.
    pub fn timescales_at(&self, lag: usize) -> Option<&[f64]> {
        self.lags
            .iter()
            .position(|&l| l == lag)
            .map(|idx| self.rows[idx].as_slice())
    }

    /// Iterates over `(lag, timescales)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[f64])> {
        self.lags
            .iter()
            .copied()
            .zip(self.rows.iter().map(|r| r.as_slice()))
    }

    /// The series of one mode across all lags, e.g. for the convergence plot.
    ///
    /// # Panics
    ///
    /// Panics if `mode >= n_modes`.
    pub fn mode_series(&self, mode: usize) -> Vec<f64> {
        assert!(mode < self.n_modes, "mode {mode} out of range");
        self.rows.iter().map(|r| r[mode]).collect()
    }
}
