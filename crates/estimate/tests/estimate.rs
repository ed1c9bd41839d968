use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use msm_estimate::{DegenerateRowPolicy, EstimateConfig, count_transitions, estimate};
use msm_traj::Trajectory;

fn traj(states: &[u32]) -> Trajectory {
    Trajectory::from_states(states.to_vec()).unwrap()
}

/// Seeded random walk over `n_states` labels with a bias toward staying put.
fn random_walk(n_steps: usize, n_states: u32, seed: u64) -> Trajectory {
    use rand::Rng;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut s: u32 = 1;
    let mut states = Vec::with_capacity(n_steps);
    for _ in 0..n_steps {
        states.push(s);
        if rng.random_bool(0.3) {
            s = rng.random_range(1..=n_states);
        }
    }
    Trajectory::from_states(states).unwrap()
}

// ---------------------------------------------------------------------------
// 1. count_total_invariant
// ---------------------------------------------------------------------------
#[test]
fn count_total_invariant() {
    let t = random_walk(5000, 8, 11);
    for lag in [1, 2, 7, 50, 499] {
        let counts = count_transitions(&t, lag).unwrap();
        assert_eq!(
            counts.total(),
            (t.len() - lag) as u64,
            "count total must equal N - lag at lag {lag}"
        );
    }
}

// ---------------------------------------------------------------------------
// 2. rows_sum_to_one
// ---------------------------------------------------------------------------
#[test]
fn rows_sum_to_one() {
    let t = random_walk(5000, 8, 12);
    let est = estimate(&t, 3, &EstimateConfig::new()).unwrap();
    let tm = est.matrix();
    for i in 0..tm.n_states() {
        if tm.is_degenerate(i) {
            continue;
        }
        let row_sum: f64 = (0..tm.n_states()).map(|j| tm.prob(i, j)).sum();
        assert_relative_eq!(row_sum, 1.0, epsilon = 1e-12);
    }
}

// ---------------------------------------------------------------------------
// 3. period_six_alternation (scenario: strong self-transitions)
// ---------------------------------------------------------------------------
#[test]
fn period_six_alternation() {
    // Blocks of three 1s and three 2s; at lag 1 self-transitions dominate
    // and the only cross terms are the block boundaries.
    let t = traj(&[1, 1, 1, 2, 2, 2, 1, 1, 1, 2, 2, 2]);
    let est = estimate(&t, 1, &EstimateConfig::new()).unwrap();

    let counts = est.counts();
    assert_eq!(counts.labels(), &[1, 2]);
    assert_eq!(counts.count(0, 0), 4); // 1 -> 1
    assert_eq!(counts.count(0, 1), 2); // 1 -> 2 (two block boundaries)
    assert_eq!(counts.count(1, 0), 1); // 2 -> 1 (one interior boundary)
    assert_eq!(counts.count(1, 1), 4); // 2 -> 2
    assert_eq!(counts.total(), 11);

    let tm = est.matrix();
    assert!(tm.validate().is_ok());
    assert!(tm.prob(0, 0) > tm.prob(0, 1), "self-transitions dominate");
    assert!(tm.prob(1, 1) > tm.prob(1, 0), "self-transitions dominate");
}

// ---------------------------------------------------------------------------
// 4. constant_trajectory_is_one_by_one (scenario 2)
// ---------------------------------------------------------------------------
#[test]
fn constant_trajectory_is_one_by_one() {
    let t = traj(&[6; 100]);
    for lag in [1, 10, 99] {
        let est = estimate(&t, lag, &EstimateConfig::new()).unwrap();
        assert_eq!(est.counts().n_states(), 1);
        assert_eq!(est.counts().total(), (100 - lag) as u64);
        assert_eq!(est.matrix().prob(0, 0), 1.0);
        assert!(est.matrix().degenerate_rows().is_empty());
    }
}

// ---------------------------------------------------------------------------
// 5. rare_switching_is_nearly_diagonal (scenario 3)
// ---------------------------------------------------------------------------
#[test]
fn rare_switching_is_nearly_diagonal() {
    let mut states = vec![1u32; 1000];
    states.extend(vec![2u32; 1000]);
    let t = Trajectory::from_states(states).unwrap();

    let est = estimate(&t, 1, &EstimateConfig::new()).unwrap();
    let tm = est.matrix();

    assert_relative_eq!(tm.prob(0, 0), 999.0 / 1000.0, epsilon = 1e-12);
    assert_relative_eq!(tm.prob(0, 1), 1.0 / 1000.0, epsilon = 1e-12);
    // State 2 never leaves: absorbing row.
    assert_relative_eq!(tm.prob(1, 1), 1.0, epsilon = 1e-12);
    assert!(tm.validate().is_ok());
}

// ---------------------------------------------------------------------------
// 6. idempotent_estimation
// ---------------------------------------------------------------------------
#[test]
fn idempotent_estimation() {
    let t = random_walk(2000, 5, 13);
    let config = EstimateConfig::new();
    let a = estimate(&t, 5, &config).unwrap();
    let b = estimate(&t, 5, &config).unwrap();
    assert_eq!(a.counts(), b.counts(), "counts must be bit-identical");
    assert_eq!(
        a.matrix().probs(),
        b.matrix().probs(),
        "probabilities must be bit-identical"
    );
}

// ---------------------------------------------------------------------------
// 7. policies_agree_when_no_degenerate_rows
// ---------------------------------------------------------------------------
#[test]
fn policies_agree_when_no_degenerate_rows() {
    let t = random_walk(5000, 4, 14);
    let zero_fill = estimate(&t, 2, &EstimateConfig::new()).unwrap();
    let drop = estimate(
        &t,
        2,
        &EstimateConfig::new().with_policy(DegenerateRowPolicy::DropStates),
    )
    .unwrap();

    assert!(zero_fill.matrix().degenerate_rows().is_empty());
    assert!(drop.matrix().dropped_labels().is_empty());
    assert_eq!(zero_fill.matrix().probs(), drop.matrix().probs());
}

// ---------------------------------------------------------------------------
// 8. large_lag_reduces_alphabet_gracefully
// ---------------------------------------------------------------------------
#[test]
fn large_lag_reduces_alphabet_gracefully() {
    // With lag = N - 1, exactly one pair remains. The zero-fill policy must
    // flag every other source row instead of propagating NaN.
    let t = traj(&[1, 2, 3, 4, 5]);
    let est = estimate(&t, 4, &EstimateConfig::new()).unwrap();
    let tm = est.matrix();
    assert_eq!(est.counts().total(), 1);
    assert_eq!(tm.degenerate_rows().len(), tm.n_states() - 1);
    assert!(tm.validate().is_ok());
}
