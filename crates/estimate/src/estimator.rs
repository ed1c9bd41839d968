//! Transition counting and row normalization.

use std::collections::HashMap;

use nalgebra::DMatrix;
use tracing::{debug, info};

use msm_traj::Trajectory;

use crate::config::{DegenerateRowPolicy, EstimateConfig};
use crate::counts::TransitionCounts;
use crate::error::EstimateError;
use crate::matrix::TransitionMatrix;

/// The combined output of one estimation run: counts plus probabilities.
#[derive(Debug, Clone)]
pub struct Estimate {
    counts: TransitionCounts,
    matrix: TransitionMatrix,
}

impl Estimate {
    /// Returns the transition count matrix.
    pub fn counts(&self) -> &TransitionCounts {
        &self.counts
    }

    /// Returns the row-stochastic transition matrix.
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }
}

/// Counts state-to-state transitions at the given lag.
///
/// Pairs `trajectory[t]` with `trajectory[t + lag]` for every
/// `t in 0..N - lag`, indexed by the sorted distinct labels. The total over
/// all entries equals `N - lag`.
///
/// # Errors
///
/// Returns [`EstimateError::ZeroLag`] for `lag == 0` and
/// [`EstimateError::LagExceedsLength`] for `lag >= trajectory.len()`.
pub fn count_transitions(
    trajectory: &Trajectory,
    lag: usize,
) -> Result<TransitionCounts, EstimateError> {
    if lag == 0 {
        return Err(EstimateError::ZeroLag);
    }
    let n = trajectory.len();
    if lag >= n {
        return Err(EstimateError::LagExceedsLength { lag, len: n });
    }

    let labels = trajectory.distinct_labels();
    let index: HashMap<u32, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, &label)| (label, i))
        .collect();

    let dim = labels.len();
    let mut counts = DMatrix::<u64>::zeros(dim, dim);
    let states = trajectory.states();
    for t in 0..n - lag {
        let from = index[&states[t]];
        let to = index[&states[t + lag]];
        counts[(from, to)] += 1;
    }

    debug!(lag, n_states = dim, total = n - lag, "transition counts built");
    Ok(TransitionCounts::new(labels, lag, counts))
}

/// Row-normalizes a count matrix into a transition probability matrix.
///
/// Rows with a zero count sum are handled per `policy`; see
/// [`DegenerateRowPolicy`]. The result never contains NaN.
///
/// # Errors
///
/// Returns [`EstimateError::AllStatesDegenerate`] if the drop-states policy
/// removes the entire alphabet.
pub fn row_normalize(
    counts: &TransitionCounts,
    policy: DegenerateRowPolicy,
) -> Result<TransitionMatrix, EstimateError> {
    match policy {
        DegenerateRowPolicy::ZeroFill => Ok(normalize_zero_fill(counts)),
        DegenerateRowPolicy::DropStates => normalize_drop_states(counts),
    }
}

/// Runs counting and normalization in one call.
pub fn estimate(
    trajectory: &Trajectory,
    lag: usize,
    config: &EstimateConfig,
) -> Result<Estimate, EstimateError> {
    let counts = count_transitions(trajectory, lag)?;
    let matrix = row_normalize(&counts, config.policy())?;
    info!(
        lag,
        n_states = matrix.n_states(),
        n_degenerate = matrix.degenerate_rows().len(),
        n_dropped = matrix.dropped_labels().len(),
        "transition matrix estimated"
    );
    Ok(Estimate { counts, matrix })
}

fn normalize_zero_fill(counts: &TransitionCounts) -> TransitionMatrix {
    let dim = counts.n_states();
    let mut degenerate = Vec::new();
    let mut probs = DMatrix::<f64>::zeros(dim, dim);
    for i in 0..dim {
        let row_sum = counts.row_sum(i);
        if row_sum == 0 {
            degenerate.push(i);
            continue;
        }
        for j in 0..dim {
            probs[(i, j)] = counts.count(i, j) as f64 / row_sum as f64;
        }
    }
    TransitionMatrix::new(counts.labels().to_vec(), probs, degenerate, Vec::new())
}

fn normalize_drop_states(counts: &TransitionCounts) -> Result<TransitionMatrix, EstimateError> {
    let dim = counts.n_states();
    let mut keep: Vec<usize> = (0..dim).collect();

    // Dropping a state removes its column, which can zero out other rows, so
    // iterate until the reduced matrix has no degenerate row left.
    loop {
        let sums: Vec<u64> = keep
            .iter()
            .map(|&i| keep.iter().map(|&j| counts.count(i, j)).sum())
            .collect();
        let survivors: Vec<usize> = keep
            .iter()
            .zip(&sums)
            .filter(|&(_, &s)| s > 0)
            .map(|(&i, _)| i)
            .collect();
        if survivors.is_empty() {
            return Err(EstimateError::AllStatesDegenerate);
        }
        if survivors.len() == keep.len() {
            break;
        }
        keep = survivors;
    }

    let labels: Vec<u32> = keep.iter().map(|&i| counts.labels()[i]).collect();
    let dropped: Vec<u32> = (0..dim)
        .filter(|i| !keep.contains(i))
        .map(|i| counts.labels()[i])
        .collect();

    let reduced = keep.len();
    let mut probs = DMatrix::<f64>::zeros(reduced, reduced);
    for (ri, &i) in keep.iter().enumerate() {
        let row_sum: u64 = keep.iter().map(|&j| counts.count(i, j)).sum();
        for (rj, &j) in keep.iter().enumerate() {
            probs[(ri, rj)] = counts.count(i, j) as f64 / row_sum as f64;
        }
    }

    Ok(TransitionMatrix::new(labels, probs, Vec::new(), dropped))
}
