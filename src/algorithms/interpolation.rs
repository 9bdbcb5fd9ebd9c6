//! Interpolation strategies for implicitly defined functions.
//!
//! ## Purpose
//!
//! This module evaluates a function, given only as (input, output) sample
//! pairs, at arbitrary query points. Two interchangeable strategies are
//! offered: exact lookup of the nearest known input, and a distance-weighted
//! average over all known outputs.
//!
//! ## Design notes
//!
//! * **Tagged strategy**: the strategy enum carries the per-function metric
//!   indices with the nearest-neighbor variant, so a mode without its
//!   required resources cannot be expressed.
//! * **Coincident queries**: a query within epsilon of a known input returns
//!   that output exactly in both strategies, which keeps the weighted
//!   average free of division by zero.
//! * **Duplicates tolerated**: repeated input points simply contribute their
//!   weight twice; neither strategy assumes uniqueness.
//!
//! ## Key concepts
//!
//! * **Inverse-distance weighting**: outputs averaged with weights 1/d.
//! * **Nearest-neighbor**: output of the closest known input, located via a
//!   prebuilt vantage-point tree.
//!
//! ## Invariants
//!
//! * The output matrix has one row per query and one column per output
//!   dimension.
//! * Both strategies reproduce known outputs exactly at known inputs.
//!
//! ## Non-goals
//!
//! * This module does not build the metric indices (callers own them).
//! * This module does not draw the query points.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::vptree::VpTree;
use crate::math::distance::DistanceMetric;
use crate::primitives::errors::EmbedError;
use crate::primitives::function::{FunctionSamples, PointSet};
use crate::primitives::matrix::Matrix;

// ============================================================================
// Strategy Selection
// ============================================================================

/// Interpolation strategy, carrying its required resources.
#[derive(Debug, Clone, Copy)]
pub enum Interpolation<'a, T: Float> {
    /// Exact nearest-neighbor lookup through one prebuilt index per function.
    NearestNeighbor(&'a [VpTree<T>]),

    /// Inverse-distance-weighted average over all known outputs.
    InverseDistanceWeighted,
}

// ============================================================================
// Nearest-Neighbor Interpolation
// ============================================================================

/// Evaluate `func` at every query by copying the output of the closest
/// known input, located via `tree`.
///
/// `tree` must be built over `func`'s input points; the engine validates
/// this before calling.
pub fn interpolate_nn<T: Float>(
    tree: &VpTree<T>,
    queries: &PointSet<T>,
    func: &FunctionSamples<T>,
) -> Result<Matrix<T>, EmbedError> {
    debug_assert_eq!(tree.len(), func.len(), "Index/function size mismatch");
    debug_assert_eq!(queries.dim(), func.input_dim(), "Query dimension mismatch");

    let k = func.output_dim();
    let mut out = Matrix::zeros(queries.len(), k);

    for q in 0..queries.len() {
        let (idx, _) = tree
            .nearest(queries.point(q))
            .ok_or(EmbedError::EmptyInput)?;
        let output = func.output(idx);
        for c in 0..k {
            out.set(q, c, output[c]);
        }
    }

    Ok(out)
}

// ============================================================================
// Inverse-Distance-Weighted Interpolation
// ============================================================================

/// Evaluate `func` at every query as the average of all known outputs
/// weighted by inverse distance.
///
/// A query coinciding with a known input returns that output exactly.
pub fn interpolate_idw<T: Float>(queries: &PointSet<T>, func: &FunctionSamples<T>) -> Matrix<T> {
    debug_assert_eq!(queries.dim(), func.input_dim(), "Query dimension mismatch");

    let k = func.output_dim();
    let eps = T::epsilon();
    let mut out = Matrix::zeros(queries.len(), k);

    for q in 0..queries.len() {
        let query = queries.point(q);

        let mut denom = T::zero();
        let mut numer = vec![T::zero(); k];
        let mut exact = None;

        for p in 0..func.len() {
            let dist = DistanceMetric::euclidean(query, func.input(p));
            if dist <= eps {
                exact = Some(p);
                break;
            }
            let weight = T::one() / dist;
            denom = denom + weight;
            let output = func.output(p);
            for c in 0..k {
                numer[c] = numer[c] + weight * output[c];
            }
        }

        match exact {
            Some(p) => {
                let output = func.output(p);
                for c in 0..k {
                    out.set(q, c, output[c]);
                }
            }
            None => {
                for c in 0..k {
                    out.set(q, c, numer[c] / denom);
                }
            }
        }
    }

    out
}
