#![cfg(feature = "dev")]

use fnembed_rs::internals::math::projection::reduce_rows;
use fnembed_rs::internals::primitives::matrix::Matrix;

// ============================================================================
// Identity Shortcut Tests
// ============================================================================

#[test]
fn test_target_at_row_count_returns_input() {
    let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    let reduced = reduce_rows(&m, 2, 42);
    assert_eq!(reduced, m);
}

#[test]
fn test_target_above_row_count_returns_input() {
    let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    let reduced = reduce_rows(&m, 10, 42);
    assert_eq!(reduced, m);
}

// ============================================================================
// Shape Tests
// ============================================================================

#[test]
fn test_reduced_shape() {
    let m: Matrix<f64> = Matrix::zeros(8, 5);
    let reduced = reduce_rows(&m, 3, 0);
    assert_eq!(reduced.rows(), 3);
    assert_eq!(reduced.cols(), 5);
}

#[test]
fn test_zero_input_projects_to_zero() {
    let m: Matrix<f64> = Matrix::zeros(6, 4);
    let reduced = reduce_rows(&m, 2, 123);
    assert!(reduced.data().iter().all(|&v| v == 0.0));
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_same_seed_same_projection() {
    let m = Matrix::from_vec((0..24).map(|i| i as f64).collect(), 6, 4).unwrap();
    let a = reduce_rows(&m, 3, 7);
    let b = reduce_rows(&m, 3, 7);
    assert_eq!(a, b);
}

#[test]
fn test_different_seed_different_projection() {
    let m = Matrix::from_vec((0..24).map(|i| i as f64).collect(), 6, 4).unwrap();
    let a = reduce_rows(&m, 3, 7);
    let b = reduce_rows(&m, 3, 8);
    assert_ne!(a, b);
}

// ============================================================================
// Linearity Tests
// ============================================================================

#[test]
fn test_projection_is_linear_in_input() {
    // Doubling the input doubles the projection (same seed, same map).
    let m = Matrix::from_vec((0..12).map(|i| i as f64).collect(), 4, 3).unwrap();
    let doubled =
        Matrix::from_vec(m.data().iter().map(|v| v * 2.0).collect(), 4, 3).unwrap();

    let pm = reduce_rows(&m, 2, 99);
    let pd = reduce_rows(&doubled, 2, 99);

    for (&a, &b) in pm.data().iter().zip(pd.data().iter()) {
        approx::assert_relative_eq!(b, a * 2.0, epsilon = 1e-12);
    }
}
