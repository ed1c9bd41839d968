//! Error types for the msm-spectral crate.

/// Error type for all fallible operations in the msm-spectral crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpectralError {
    /// Returned when the input matrix has no entries.
    #[error("matrix is empty")]
    EmptyMatrix,

    /// Returned when the input matrix is not square.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when inverse iteration fails to produce an eigenvector.
    #[error("inverse iteration did not converge for eigenvalue {re}{im:+}i")]
    NonConvergence {
        /// Real part of the eigenvalue.
        re: f64,
        /// Imaginary part of the eigenvalue.
        im: f64,
    },

    /// Returned when the leading eigenvector cannot be normalized to a
    /// probability distribution (its entries sum to zero).
    #[error("leading eigenvector sums to zero; stationary distribution undefined")]
    DegenerateStationary,
}
