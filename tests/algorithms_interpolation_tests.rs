#![cfg(feature = "dev")]

use approx::assert_relative_eq;

use fnembed_rs::internals::algorithms::interpolation::{interpolate_idw, interpolate_nn};
use fnembed_rs::internals::algorithms::vptree::VpTree;
use fnembed_rs::internals::primitives::function::{FunctionSamples, PointSet};

// ============================================================================
// Helper Functions
// ============================================================================

fn line_function() -> FunctionSamples<f64> {
    // f(x) = 2x sampled at x = 0, 1, 2, 3
    FunctionSamples::new(
        vec![0.0, 1.0, 2.0, 3.0],
        1,
        vec![0.0, 2.0, 4.0, 6.0],
        1,
    )
    .unwrap()
}

// ============================================================================
// Nearest-Neighbor Tests
// ============================================================================

#[test]
fn test_nn_exact_at_known_inputs() {
    let func = line_function();
    let tree = VpTree::new(func.inputs(), func.input_dim());
    let queries = PointSet::new(vec![0.0, 1.0, 2.0, 3.0], 1).unwrap();

    let out = interpolate_nn(&tree, &queries, &func).unwrap();
    assert_eq!(out.rows(), 4);
    assert_eq!(out.cols(), 1);
    for (i, want) in [0.0, 2.0, 4.0, 6.0].iter().enumerate() {
        assert_relative_eq!(out.get(i, 0), *want);
    }
}

#[test]
fn test_nn_snaps_to_closest() {
    let func = line_function();
    let tree = VpTree::new(func.inputs(), func.input_dim());
    let queries = PointSet::new(vec![0.4, 1.6, 2.9], 1).unwrap();

    let out = interpolate_nn(&tree, &queries, &func).unwrap();
    assert_relative_eq!(out.get(0, 0), 0.0); // closest input: 0
    assert_relative_eq!(out.get(1, 0), 4.0); // closest input: 2
    assert_relative_eq!(out.get(2, 0), 6.0); // closest input: 3
}

#[test]
fn test_nn_vector_valued() {
    let func = FunctionSamples::new(
        vec![0.0, 10.0],
        1,
        vec![1.0, -1.0, 3.0, -3.0],
        2,
    )
    .unwrap();
    let tree = VpTree::new(func.inputs(), func.input_dim());
    let queries = PointSet::new(vec![2.0, 8.0], 1).unwrap();

    let out = interpolate_nn(&tree, &queries, &func).unwrap();
    assert_eq!(out.row(0), &[1.0, -1.0]);
    assert_eq!(out.row(1), &[3.0, -3.0]);
}

// ============================================================================
// Inverse-Distance Tests
// ============================================================================

#[test]
fn test_idw_exact_at_known_inputs() {
    let func = line_function();
    let queries = PointSet::new(vec![0.0, 1.0, 2.0, 3.0], 1).unwrap();

    let out = interpolate_idw(&queries, &func);
    for (i, want) in [0.0, 2.0, 4.0, 6.0].iter().enumerate() {
        assert_relative_eq!(out.get(i, 0), *want);
    }
}

#[test]
fn test_idw_midpoint_of_two_points() {
    // Equidistant from both samples: plain average.
    let func = FunctionSamples::new(vec![0.0, 2.0], 1, vec![10.0, 20.0], 1).unwrap();
    let queries = PointSet::new(vec![1.0], 1).unwrap();

    let out = interpolate_idw(&queries, &func);
    assert_relative_eq!(out.get(0, 0), 15.0);
}

#[test]
fn test_idw_weights_favor_closer_point() {
    let func = FunctionSamples::new(vec![0.0, 10.0], 1, vec![0.0, 100.0], 1).unwrap();
    let queries = PointSet::new(vec![1.0], 1).unwrap();

    // weights: 1/1 and 1/9 -> value = 100 * (1/9) / (1 + 1/9) = 10
    let out = interpolate_idw(&queries, &func);
    assert_relative_eq!(out.get(0, 0), 10.0, epsilon = 1e-12);
}

#[test]
fn test_idw_constant_function() {
    let func = FunctionSamples::new(vec![0.0, 1.0, 5.0], 1, vec![3.0, 3.0, 3.0], 1).unwrap();
    let queries = PointSet::new(vec![0.5, 2.5, 4.0], 1).unwrap();

    let out = interpolate_idw(&queries, &func);
    for i in 0..3 {
        assert_relative_eq!(out.get(i, 0), 3.0, epsilon = 1e-12);
    }
}

#[test]
fn test_idw_tolerates_duplicate_inputs() {
    // A duplicated sample just counts twice in the average.
    let func = FunctionSamples::new(vec![0.0, 0.0, 2.0], 1, vec![10.0, 10.0, 40.0], 1).unwrap();
    let queries = PointSet::new(vec![1.0], 1).unwrap();

    // weights: 1, 1, 1 -> (10 + 10 + 40) / 3 = 20
    let out = interpolate_idw(&queries, &func);
    assert_relative_eq!(out.get(0, 0), 20.0, epsilon = 1e-12);
}

#[test]
fn test_idw_exact_hit_beats_duplicates() {
    // Query sits on a known input that appears twice with the same output.
    let func = FunctionSamples::new(vec![1.0, 1.0, 3.0], 1, vec![7.0, 7.0, 9.0], 1).unwrap();
    let queries = PointSet::new(vec![1.0], 1).unwrap();

    let out = interpolate_idw(&queries, &func);
    assert_relative_eq!(out.get(0, 0), 7.0);
}
