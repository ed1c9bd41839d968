//! Configuration for transition matrix estimation.

/// Policy for rows of the count matrix that sum to zero.
///
/// A state that is never observed as a transition source at the chosen lag
/// has an undefined row in the probability matrix. The choice of what to do
/// about it changes the spectrum, so it is explicit rather than a silent
/// division producing NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateRowPolicy {
    /// Keep the row as all zeros and flag its index.
    ///
    /// The matrix is then only sub-stochastic in those rows; callers that
    /// feed it to an eigensolver see a well-defined (if absorbing-looking)
    /// matrix, never NaN.
    #[default]
    ZeroFill,

    /// Remove degenerate source states from the alphabet for this lag.
    ///
    /// Rows *and* columns of dropped states are removed and the surviving
    /// rows renormalized from the reduced counts. Removal can cascade (a row
    /// may only have counted transitions into a dropped state), so the
    /// reduction iterates until no degenerate row remains.
    DropStates,
}

/// Configuration for the transition statistics estimator.
///
/// # Example
///
/// ```
/// use msm_estimate::{DegenerateRowPolicy, EstimateConfig};
///
/// let config = EstimateConfig::new().with_policy(DegenerateRowPolicy::DropStates);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EstimateConfig {
    policy: DegenerateRowPolicy,
}

impl EstimateConfig {
    /// Creates a configuration with the default zero-fill policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the degenerate-row policy.
    pub fn with_policy(mut self, policy: DegenerateRowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the degenerate-row policy.
    pub fn policy(&self) -> DegenerateRowPolicy {
        self.policy
    }
}
