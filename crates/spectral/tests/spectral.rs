use approx::assert_relative_eq;
use nalgebra::{DMatrix, Normed};

use msm_spectral::{analyze, free_energy};

/// Two-state chain with switching probabilities `a` (0→1) and `b` (1→0).
///
/// Analytic spectrum: eigenvalues 1 and `1 − a − b`; stationary distribution
/// `[b/(a+b), a/(a+b)]`.
fn two_state(a: f64, b: f64) -> DMatrix<f64> {
    DMatrix::from_row_slice(2, 2, &[1.0 - a, a, b, 1.0 - b])
}

// ---------------------------------------------------------------------------
// 1. two_state_analytic_spectrum
// ---------------------------------------------------------------------------
#[test]
fn two_state_analytic_spectrum() {
    let analysis = analyze(&two_state(0.1, 0.2), 1).unwrap();

    let values = analysis.eigenvalues();
    assert_eq!(values.len(), 2);
    assert_relative_eq!(values[0].re, 1.0, epsilon = 1e-10);
    assert_relative_eq!(values[0].im, 0.0, epsilon = 1e-10);
    assert_relative_eq!(values[1].re, 0.7, epsilon = 1e-10);

    let ts = analysis.timescales();
    assert_eq!(ts.len(), 1);
    assert_relative_eq!(ts[0], -1.0 / 0.7_f64.ln(), epsilon = 1e-8);
}

// ---------------------------------------------------------------------------
// 2. two_state_stationary_distribution
// ---------------------------------------------------------------------------
#[test]
fn two_state_stationary_distribution() {
    let analysis = analyze(&two_state(0.1, 0.2), 1).unwrap();
    let pi = analysis.stationary().unwrap();

    assert_relative_eq!(pi[0], 2.0 / 3.0, epsilon = 1e-8);
    assert_relative_eq!(pi[1], 1.0 / 3.0, epsilon = 1e-8);
    assert_relative_eq!(pi.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// 3. leading_eigenvalue_has_unit_magnitude
// ---------------------------------------------------------------------------
#[test]
fn leading_eigenvalue_has_unit_magnitude() {
    let probs = DMatrix::from_row_slice(
        3,
        3,
        &[0.8, 0.15, 0.05, 0.1, 0.85, 0.05, 0.25, 0.25, 0.5],
    );
    let analysis = analyze(&probs, 1).unwrap();

    assert_relative_eq!(analysis.eigenvalues()[0].norm(), 1.0, epsilon = 1e-8);
    for value in &analysis.eigenvalues()[1..] {
        assert!(value.norm() <= 1.0 + 1e-10, "spectrum inside unit disk");
    }

    let pi = analysis.stationary().unwrap();
    assert_eq!(pi.len(), 3);
    assert!(pi.iter().all(|&p| p >= 0.0), "stationary is non-negative");
    assert_relative_eq!(pi.iter().sum::<f64>(), 1.0, epsilon = 1e-10);
}

// ---------------------------------------------------------------------------
// 4. stationary_satisfies_balance
// ---------------------------------------------------------------------------
#[test]
fn stationary_satisfies_balance() {
    let probs = DMatrix::from_row_slice(
        3,
        3,
        &[0.8, 0.15, 0.05, 0.1, 0.85, 0.05, 0.25, 0.25, 0.5],
    );
    let analysis = analyze(&probs, 1).unwrap();
    let pi = analysis.stationary().unwrap();

    // pi P = pi
    for j in 0..3 {
        let propagated: f64 = (0..3).map(|i| pi[i] * probs[(i, j)]).sum();
        assert_relative_eq!(propagated, pi[j], epsilon = 1e-8);
    }
}

// ---------------------------------------------------------------------------
// 5. timescale_count_is_dim_minus_one
// ---------------------------------------------------------------------------
#[test]
fn timescale_count_is_dim_minus_one() {
    for dim in [1usize, 2, 4] {
        // Lazy uniform chain: stays with probability 1/2, otherwise uniform.
        let p = DMatrix::from_fn(dim, dim, |i, j| {
            let uniform = 0.5 / dim as f64;
            if i == j { 0.5 + uniform } else { uniform }
        });
        let analysis = analyze(&p, 1).unwrap();
        assert_eq!(analysis.eigenvalues().len(), dim);
        assert_eq!(analysis.timescales().len(), dim - 1);
    }
}

// ---------------------------------------------------------------------------
// 6. one_by_one_matrix_has_no_timescales (scenario 2)
// ---------------------------------------------------------------------------
#[test]
fn one_by_one_matrix_has_no_timescales() {
    let probs = DMatrix::from_row_slice(1, 1, &[1.0]);
    let analysis = analyze(&probs, 7).unwrap();

    assert_eq!(analysis.eigenvalues().len(), 1);
    assert_relative_eq!(analysis.eigenvalues()[0].re, 1.0, epsilon = 1e-12);
    assert!(analysis.timescales().is_empty());
    assert_eq!(analysis.stationary().unwrap(), vec![1.0]);
}

// ---------------------------------------------------------------------------
// 7. periodic_chain_reports_nan_not_panic
// ---------------------------------------------------------------------------
#[test]
fn periodic_chain_reports_nan_not_panic() {
    // Deterministic 2-cycle: eigenvalues 1 and -1. The non-leading unit
    // magnitude must surface as NaN, not crash the analysis.
    let probs = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
    let analysis = analyze(&probs, 1).unwrap();

    assert_relative_eq!(analysis.eigenvalues()[0].re, 1.0, epsilon = 1e-10);
    assert_relative_eq!(analysis.eigenvalues()[1].re, -1.0, epsilon = 1e-10);
    assert!(analysis.timescales()[0].is_nan());
}

// ---------------------------------------------------------------------------
// 8. identity_matrix_reports_nan
// ---------------------------------------------------------------------------
#[test]
fn identity_matrix_reports_nan() {
    let probs = DMatrix::<f64>::identity(2, 2);
    let analysis = analyze(&probs, 1).unwrap();
    assert!(analysis.timescales()[0].is_nan());
}

// ---------------------------------------------------------------------------
// 9. slower_mode_has_larger_timescale
// ---------------------------------------------------------------------------
#[test]
fn slower_mode_has_larger_timescale() {
    let slow = analyze(&two_state(0.01, 0.01), 1).unwrap();
    let fast = analyze(&two_state(0.2, 0.2), 1).unwrap();
    assert!(
        slow.timescales()[0] > fast.timescales()[0],
        "eigenvalue closer to 1 must imply a larger timescale"
    );
}

// ---------------------------------------------------------------------------
// 10. free_energy_orders_like_occupancy
// ---------------------------------------------------------------------------
#[test]
fn free_energy_orders_like_occupancy() {
    let analysis = analyze(&two_state(0.1, 0.2), 1).unwrap();
    let pi = analysis.stationary().unwrap();
    let fe = free_energy(&pi);

    // State 0 is the more occupied one, so it sits at the minimum.
    assert_relative_eq!(fe[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(fe[1], (pi[0] / pi[1]).ln(), epsilon = 1e-8);
}

// ---------------------------------------------------------------------------
// 11. repeated_analysis_is_identical
// ---------------------------------------------------------------------------
#[test]
fn repeated_analysis_is_identical() {
    let probs = two_state(0.05, 0.15);
    let a = analyze(&probs, 3).unwrap();
    let b = analyze(&probs, 3).unwrap();
    assert_eq!(a.eigenvalues(), b.eigenvalues());
    assert_eq!(a.timescales(), b.timescales());
    assert_eq!(a.eigenvectors(), b.eigenvectors());
}
