//! The immutable discrete trajectory type.

use std::collections::BTreeMap;

use crate::error::TrajError;

/// An ordered sequence of integer microstate labels.
///
/// Immutable once constructed; every downstream pipeline stage takes a
/// `&Trajectory` and returns new, independent result structures. Guaranteed
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory {
    states: Vec<u32>,
}

impl Trajectory {
    /// Constructs a trajectory from a vector of state labels.
    ///
    /// # Errors
    ///
    /// Returns [`TrajError::Empty`] if `states` is empty.
    pub fn from_states(states: Vec<u32>) -> Result<Self, TrajError> {
        if states.is_empty() {
            return Err(TrajError::Empty);
        }
        Ok(Self { states })
    }

    /// Returns the state sequence.
    pub fn states(&self) -> &[u32] {
        &self.states
    }

    /// Returns the number of steps in the trajectory.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if there are no steps. Construction rejects empty
    /// sequences, so this is false for any obtainable value.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the sorted distinct labels appearing in the trajectory.
    ///
    /// This is the observed state alphabet and the axis labelling for every
    /// matrix the estimator produces.
    pub fn distinct_labels(&self) -> Vec<u32> {
        let mut labels = self.states.clone();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// Returns the state-occupancy histogram as `(labels, counts)`.
    ///
    /// Labels are sorted ascending and counts are aligned with them; the
    /// counts sum to `len()`.
    pub fn occupancy(&self) -> (Vec<u32>, Vec<u64>) {
        let mut hist: BTreeMap<u32, u64> = BTreeMap::new();
        for &s in &self.states {
            *hist.entry(s).or_insert(0) += 1;
        }
        let labels: Vec<u32> = hist.keys().copied().collect();
        let counts: Vec<u64> = hist.values().copied().collect();
        (labels, counts)
    }
}
