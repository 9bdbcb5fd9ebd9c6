#![cfg(feature = "dev")]

use approx::assert_relative_eq;

use fnembed_rs::internals::primitives::errors::EmbedError;
use fnembed_rs::internals::primitives::matrix::Matrix;

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_zeros() {
    let m: Matrix<f64> = Matrix::zeros(2, 3);
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert!(m.data().iter().all(|&v| v == 0.0));
}

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    assert_eq!(m.get(0, 0), 1.0);
    assert_eq!(m.get(0, 2), 3.0);
    assert_eq!(m.get(1, 0), 4.0);
    assert_eq!(m.get(1, 2), 6.0);
}

#[test]
fn test_from_vec_rejects_wrong_length() {
    let result: Result<Matrix<f64>, _> = Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2);
    assert!(matches!(result.unwrap_err(), EmbedError::InvalidInput(_)));
}

// ============================================================================
// Access Tests
// ============================================================================

#[test]
fn test_set_and_get() {
    let mut m: Matrix<f64> = Matrix::zeros(3, 3);
    m.set(1, 2, 7.5);
    assert_eq!(m.get(1, 2), 7.5);
    assert_eq!(m.get(2, 1), 0.0);
}

#[test]
fn test_row_is_contiguous() {
    let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    assert_eq!(m.row(0), &[1.0, 2.0]);
    assert_eq!(m.row(1), &[3.0, 4.0]);
}

#[test]
fn test_is_square() {
    let sq: Matrix<f64> = Matrix::zeros(3, 3);
    let rect: Matrix<f64> = Matrix::zeros(2, 3);
    assert!(sq.is_square());
    assert!(!rect.is_square());
}

// ============================================================================
// Column Gram Tests
// ============================================================================

#[test]
fn test_column_gram() {
    // Columns: (1, 3) and (2, 4)
    let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    let g = m.column_gram();

    // (1,3)·(1,3) = 10, (1,3)·(2,4) = 14, (2,4)·(2,4) = 20
    assert_relative_eq!(g.get(0, 0), 10.0);
    assert_relative_eq!(g.get(0, 1), 14.0);
    assert_relative_eq!(g.get(1, 0), 14.0);
    assert_relative_eq!(g.get(1, 1), 20.0);
}

#[test]
fn test_column_gram_is_symmetric() {
    let m = Matrix::from_vec(vec![1.0, -2.0, 0.5, 3.0, 4.0, -1.0], 2, 3).unwrap();
    let g = m.column_gram();
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(g.get(i, j), g.get(j, i));
        }
    }
}
