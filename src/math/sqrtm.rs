//! Linear algebra backend for the symmetric matrix square root.
//!
//! ## Purpose
//!
//! This module provides a trait-based bridge from generic `Float` types to
//! the nalgebra backend for the two dense operations the pipeline needs:
//! the symmetric matrix square root and the affine rank of a point set.
//!
//! ## Design notes
//!
//! * The square root uses the symmetric eigendecomposition M = V Σ Vᵀ and
//!   returns V √Σ Vᵀ.
//! * Eigenvalues estimated as negative by Monte Carlo noise are floored at
//!   zero before the square root; without the floor, the root of a noisy
//!   Gram estimate would contain NaN.
//! * Affine rank is computed from the singular values of the centered point
//!   matrix and detects reference sets whose hull has no interior.
//! * Generic callers go through `FloatLinalg` (f32 and f64), which delegates
//!   to per-precision backend functions.
//!
//! ## Invariants
//!
//! * Inputs to `sym_sqrt` are symmetric, so row-major and column-major
//!   storage coincide and the output is symmetric as well.
//!
//! ## Non-goals
//!
//! * This module does not validate symmetry (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Symmetric matrix square root of a flattened n x n symmetric matrix,
    /// with negative eigenvalues floored at zero.
    ///
    /// Returns `None` if the result contains non-finite values.
    fn sym_sqrt(m: &[Self], n: usize) -> Option<Vec<Self>>;

    /// Affine rank of a flattened point set (points of dimension `dim`).
    fn affine_rank(points: &[Self], dim: usize) -> usize;
}

impl FloatLinalg for f64 {
    #[inline]
    fn sym_sqrt(m: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::sym_sqrt_f64(m, n)
    }
    #[inline]
    fn affine_rank(points: &[Self], dim: usize) -> usize {
        nalgebra_backend::affine_rank_f64(points, dim)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn sym_sqrt(m: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::sym_sqrt_f32(m, n)
    }
    #[inline]
    fn affine_rank(points: &[Self], dim: usize) -> usize {
        nalgebra_backend::affine_rank_f32(points, dim)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based dense operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::DMatrix;

    /// Symmetric square root with eigenvalue clamping, f64 precision.
    pub fn sym_sqrt_f64(m: &[f64], n: usize) -> Option<Vec<f64>> {
        // Symmetric input: storage order is immaterial.
        let matrix = DMatrix::from_column_slice(n, n, m);
        let eig = matrix.symmetric_eigen();

        let roots = eig
            .eigenvalues
            .map(|lambda| if lambda < 0.0 { 0.0 } else { lambda.sqrt() });

        let half = &eig.eigenvectors
            * DMatrix::from_diagonal(&roots)
            * eig.eigenvectors.transpose();

        if half.iter().any(|v| !v.is_finite()) {
            return None;
        }
        Some(half.as_slice().to_vec())
    }

    /// Symmetric square root with eigenvalue clamping, f32 precision.
    pub fn sym_sqrt_f32(m: &[f32], n: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n, n, m);
        let eig = matrix.symmetric_eigen();

        let roots = eig
            .eigenvalues
            .map(|lambda| if lambda < 0.0 { 0.0f32 } else { lambda.sqrt() });

        let half = &eig.eigenvectors
            * DMatrix::from_diagonal(&roots)
            * eig.eigenvectors.transpose();

        if half.iter().any(|v| !v.is_finite()) {
            return None;
        }
        Some(half.as_slice().to_vec())
    }

    /// Affine rank of a point set, f64 precision.
    pub fn affine_rank_f64(points: &[f64], dim: usize) -> usize {
        let n = points.len() / dim;
        if n == 0 {
            return 0;
        }

        // Centroid per dimension
        let mut centroid = vec![0.0f64; dim];
        for p in 0..n {
            for d in 0..dim {
                centroid[d] += points[p * dim + d];
            }
        }
        for c in centroid.iter_mut() {
            *c /= n as f64;
        }

        // dim x n matrix of centered points
        let centered = DMatrix::from_fn(dim, n, |d, p| points[p * dim + d] - centroid[d]);

        let svd = centered.svd(false, false);
        let max_sv = svd
            .singular_values
            .iter()
            .fold(0.0f64, |acc, &s| acc.max(s));
        let tol = max_sv * (n.max(dim) as f64) * f64::EPSILON;
        svd.singular_values.iter().filter(|&&s| s > tol).count()
    }

    /// Affine rank of a point set, f32 precision.
    pub fn affine_rank_f32(points: &[f32], dim: usize) -> usize {
        let n = points.len() / dim;
        if n == 0 {
            return 0;
        }

        let mut centroid = vec![0.0f32; dim];
        for p in 0..n {
            for d in 0..dim {
                centroid[d] += points[p * dim + d];
            }
        }
        for c in centroid.iter_mut() {
            *c /= n as f32;
        }

        let centered = DMatrix::from_fn(dim, n, |d, p| points[p * dim + d] - centroid[d]);

        let svd = centered.svd(false, false);
        let max_sv = svd
            .singular_values
            .iter()
            .fold(0.0f32, |acc, &s| acc.max(s));
        let tol = max_sv * (n.max(dim) as f32) * f32::EPSILON;
        svd.singular_values.iter().filter(|&&s| s > tol).count()
    }
}
