//! Gaussian random projection for row-dimensionality reduction.
//!
//! ## Purpose
//!
//! This module reduces the row count of a matrix while approximately
//! preserving pairwise column dot products, in the Johnson-Lindenstrauss
//! style: multiply by a seeded Gaussian matrix with entries drawn from
//! N(0, 1/target_dim).
//!
//! ## Design notes
//!
//! * **Deterministic**: the projection matrix is generated from an explicit
//!   seed, so identical inputs and seeds produce identical reductions.
//! * **Identity shortcut**: when the target dimension is at least the row
//!   count there is nothing to gain from projecting, and the input is
//!   returned unchanged so no distortion is introduced.
//!
//! ## Key concepts
//!
//! * **Dot-product preservation**: E[(Rx)·(Ry)] = x·y for the chosen entry
//!   variance, with distortion shrinking as target_dim grows.
//!
//! ## Non-goals
//!
//! * This module does not choose the target dimension (callers cap it).

// External dependencies
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

// Internal dependencies
use crate::primitives::matrix::Matrix;

// ============================================================================
// Row Reduction
// ============================================================================

/// Project the rows of `m` down to `target_dim` with a seeded Gaussian map.
///
/// Returns a `target_dim x cols` matrix whose pairwise column dot products
/// approximate those of `m`. When `target_dim >= m.rows()` the input is
/// returned unchanged.
pub fn reduce_rows<T: Float>(m: &Matrix<T>, target_dim: usize, seed: u64) -> Matrix<T> {
    let rows = m.rows();
    let cols = m.cols();
    if target_dim >= rows {
        return m.clone();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let scale = T::from(1.0 / (target_dim as f64).sqrt()).unwrap();

    // target_dim x rows projection matrix, entries N(0, 1/target_dim)
    let projection: Matrix<T> = {
        let mut p = Matrix::zeros(target_dim, rows);
        for i in 0..target_dim {
            for j in 0..rows {
                let g: f64 = rng.sample(StandardNormal);
                p.set(i, j, T::from(g).unwrap() * scale);
            }
        }
        p
    };

    let mut out = Matrix::zeros(target_dim, cols);
    for i in 0..target_dim {
        for j in 0..cols {
            let mut acc = T::zero();
            for k in 0..rows {
                acc = acc + projection.get(i, k) * m.get(k, j);
            }
            out.set(i, j, acc);
        }
    }
    out
}
