#![cfg(feature = "dev")]

use approx::assert_relative_eq;

use fnembed_rs::internals::algorithms::interpolation::Interpolation;
use fnembed_rs::internals::algorithms::vptree::VpTree;
use fnembed_rs::internals::engine::estimator::GramEstimator;
use fnembed_rs::internals::primitives::errors::EmbedError;
use fnembed_rs::internals::primitives::function::{FunctionSamples, PointSet};

// ============================================================================
// Helper Functions
// ============================================================================

fn square_reference() -> PointSet<f64> {
    PointSet::new(vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0], 2).unwrap()
}

/// Scalar function over the square corners.
fn corner_function(outputs: [f64; 4]) -> FunctionSamples<f64> {
    FunctionSamples::new(
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
        2,
        outputs.to_vec(),
        1,
    )
    .unwrap()
}

// ============================================================================
// Symmetry & Shape
// ============================================================================

#[test]
fn test_gram_is_exactly_symmetric() {
    let x = square_reference();
    let funcs = vec![
        corner_function([1.0, 2.0, 3.0, 4.0]),
        corner_function([-1.0, 0.5, 2.0, 1.0]),
        corner_function([0.0, 1.0, 0.0, 1.0]),
    ];

    let gram = GramEstimator::new(100, 5)
        .estimate(&funcs, &x, Interpolation::InverseDistanceWeighted)
        .unwrap();

    assert_eq!((gram.rows(), gram.cols()), (3, 3));
    for i in 0..3 {
        for j in 0..3 {
            // Mirrored construction: bitwise equality, not just tolerance.
            assert_eq!(gram.get(i, j), gram.get(j, i));
        }
    }
}

#[test]
fn test_diagonal_is_non_negative() {
    let x = square_reference();
    let funcs = vec![
        corner_function([1.0, -2.0, 3.0, -4.0]),
        corner_function([0.1, 0.2, 0.3, 0.4]),
    ];

    let gram = GramEstimator::new(50, 9)
        .estimate(&funcs, &x, Interpolation::InverseDistanceWeighted)
        .unwrap();

    for i in 0..2 {
        assert!(gram.get(i, i) >= 0.0);
    }
}

#[test]
fn test_single_iteration_is_well_formed() {
    let x = square_reference();
    let funcs = vec![
        corner_function([1.0, 2.0, 3.0, 4.0]),
        corner_function([4.0, 3.0, 2.0, 1.0]),
    ];

    let gram = GramEstimator::new(1, 13)
        .estimate(&funcs, &x, Interpolation::InverseDistanceWeighted)
        .unwrap();

    assert_eq!((gram.rows(), gram.cols()), (2, 2));
    assert_eq!(gram.get(0, 1), gram.get(1, 0));
    assert!(gram.data().iter().all(|v| v.is_finite()));
}

// ============================================================================
// Known-Value Scenarios
// ============================================================================

#[test]
fn test_identical_functions_give_equal_entries() {
    let x = square_reference();
    let f = corner_function([1.0, 2.0, 3.0, 4.0]);
    let funcs = vec![f.clone(), f];

    let gram = GramEstimator::new(200, 21)
        .estimate(&funcs, &x, Interpolation::InverseDistanceWeighted)
        .unwrap();

    // Same outputs at the same shared samples: all four entries coincide.
    assert_relative_eq!(gram.get(0, 0), gram.get(1, 1));
    assert_relative_eq!(gram.get(0, 0), gram.get(0, 1));
    assert_relative_eq!(gram.get(0, 0), gram.get(1, 0));
}

#[test]
fn test_constant_function_diagonal_is_squared_norm() {
    let x = square_reference();
    let c = 3.0;
    let f = corner_function([c, c, c, c]);

    for iters in [1, 10, 100] {
        let gram = GramEstimator::new(iters, 37)
            .estimate(
                &[f.clone()],
                &x,
                Interpolation::InverseDistanceWeighted,
            )
            .unwrap();
        assert_relative_eq!(gram.get(0, 0), c * c, epsilon = 1e-12);
    }
}

#[test]
fn test_constant_function_nearest_neighbor() {
    let x = square_reference();
    let c = -2.5;
    let f = corner_function([c, c, c, c]);
    let trees = vec![VpTree::new(f.inputs(), f.input_dim())];

    let gram = GramEstimator::new(25, 41)
        .estimate(&[f], &x, Interpolation::NearestNeighbor(&trees))
        .unwrap();
    assert_relative_eq!(gram.get(0, 0), c * c);
}

// ============================================================================
// Statistical Properties
// ============================================================================

#[test]
fn test_more_iterations_reduce_variance() {
    let x = square_reference();
    let f = corner_function([0.0, 1.0, 2.0, 5.0]);

    let variance_of = |iters: usize| -> f64 {
        let estimates: Vec<f64> = (0..30u64)
            .map(|trial| {
                GramEstimator::new(iters, 1000 + trial)
                    .estimate(
                        &[f.clone()],
                        &x,
                        Interpolation::InverseDistanceWeighted,
                    )
                    .unwrap()
                    .get(0, 0)
            })
            .collect();
        let mean = estimates.iter().sum::<f64>() / estimates.len() as f64;
        estimates.iter().map(|e| (e - mean) * (e - mean)).sum::<f64>() / estimates.len() as f64
    };

    let var_few = variance_of(2);
    let var_many = variance_of(400);
    assert!(
        var_many < var_few,
        "variance did not shrink: {} vs {}",
        var_many,
        var_few
    );
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_seed_same_estimate() {
    let x = square_reference();
    let funcs = vec![
        corner_function([1.0, 2.0, 3.0, 4.0]),
        corner_function([4.0, 3.0, 2.0, 1.0]),
    ];

    let a = GramEstimator::new(64, 77)
        .estimate(&funcs, &x, Interpolation::InverseDistanceWeighted)
        .unwrap();
    let b = GramEstimator::new(64, 77)
        .estimate(&funcs, &x, Interpolation::InverseDistanceWeighted)
        .unwrap();
    assert_eq!(a.data(), b.data());
}

// ============================================================================
// Failure Conditions
// ============================================================================

#[test]
fn test_output_dimension_mismatch_fails() {
    let x = square_reference();
    let scalar = corner_function([1.0, 2.0, 3.0, 4.0]);
    let planar = FunctionSamples::new(
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
        2,
        vec![1.0; 8],
        2,
    )
    .unwrap();

    let err = GramEstimator::new(10, 1)
        .estimate(
            &[scalar, planar],
            &x,
            Interpolation::InverseDistanceWeighted,
        )
        .unwrap_err();
    assert_eq!(
        err,
        EmbedError::ShapeMismatch {
            expected: 1,
            got: 2
        }
    );
}

#[test]
fn test_wrong_index_count_fails() {
    let x = square_reference();
    let f = corner_function([1.0, 2.0, 3.0, 4.0]);
    let g = corner_function([4.0, 3.0, 2.0, 1.0]);
    let trees = vec![VpTree::new(f.inputs(), f.input_dim())];

    let err = GramEstimator::new(10, 1)
        .estimate(&[f, g], &x, Interpolation::NearestNeighbor(&trees))
        .unwrap_err();
    assert_eq!(
        err,
        EmbedError::IndexCountMismatch {
            indices: 1,
            functions: 2
        }
    );
}

#[test]
fn test_degenerate_reference_fails() {
    // Collinear reference points: hull has no interior.
    let x = PointSet::new(vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0], 2).unwrap();
    let f = FunctionSamples::new(
        vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0],
        2,
        vec![1.0, 2.0, 3.0],
        1,
    )
    .unwrap();

    let err = GramEstimator::new(10, 1)
        .estimate(&[f], &x, Interpolation::InverseDistanceWeighted)
        .unwrap_err();
    assert_eq!(err, EmbedError::DegenerateDomain { rank: 1, dim: 2 });
}
