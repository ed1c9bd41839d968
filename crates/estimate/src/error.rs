//! Error types for the msm-estimate crate.

/// Error type for all fallible operations in the msm-estimate crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EstimateError {
    /// Returned when the lag time is zero.
    #[error("lag time must be a positive number of steps")]
    ZeroLag,

    /// Returned when the lag time leaves no transition pairs to count.
    #[error("lag {lag} must be smaller than the trajectory length {len}")]
    LagExceedsLength {
        /// The requested lag time.
        lag: usize,
        /// The trajectory length.
        len: usize,
    },

    /// Returned by the drop-states policy when every state ends up removed.
    #[error("all states were dropped as degenerate sources; nothing left to normalize")]
    AllStatesDegenerate,

    /// Returned when a matrix fails the row-stochastic validation.
    #[error("matrix is not row-stochastic: {reason}")]
    NotStochastic {
        /// Description of the first violation found.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_zero_lag() {
        assert_eq!(
            EstimateError::ZeroLag.to_string(),
            "lag time must be a positive number of steps"
        );
    }

    #[test]
    fn display_lag_exceeds_length() {
        let e = EstimateError::LagExceedsLength { lag: 500, len: 100 };
        assert_eq!(
            e.to_string(),
            "lag 500 must be smaller than the trajectory length 100"
        );
    }

    #[test]
    fn display_all_states_degenerate() {
        assert_eq!(
            EstimateError::AllStatesDegenerate.to_string(),
            "all states were dropped as degenerate sources; nothing left to normalize"
        );
    }

    #[test]
    fn display_not_stochastic() {
        let e = EstimateError::NotStochastic {
            reason: "row 2 sums to 1.5".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "matrix is not row-stochastic: row 2 sums to 1.5"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<EstimateError>();
    }
}
