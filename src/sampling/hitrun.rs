//! Hit-and-run sampling over the convex hull of a point set.
//!
//! ## Purpose
//!
//! This module draws approximately uniform samples from the interior of the
//! convex hull of a reference set X via a hit-and-run random walk. The walk
//! runs in barycentric coordinates: a point of conv(X) is X·w for a weight
//! vector w on the standard simplex, so walking the simplex and mapping
//! through X stays inside the hull by construction.
//!
//! ## Design notes
//!
//! * **Direction**: each step draws a Gaussian direction in weight space and
//!   removes its mean, keeping the weight sum invariant.
//! * **Chord**: the feasible step interval [t_min, t_max] comes from the
//!   non-negativity constraints w + t·u ≥ 0; the walk moves to a uniform
//!   point on that chord.
//! * **Drift control**: weights are clamped at zero and renormalized after
//!   every step.
//! * **One sample per step**: every post-move position is recorded, so any
//!   requested count ≥ 1 is supported. There is no burn-in.
//! * **Determinism**: the walk is a pure function of (X, iters, seed).
//!
//! ## Invariants
//!
//! * Every returned point is a convex combination of the reference points.
//!
//! ## Non-goals
//!
//! * This module does not construct explicit hull facets.
//! * This module does not interpolate function values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

// Internal dependencies
use crate::math::sqrtm::FloatLinalg;
use crate::primitives::errors::EmbedError;
use crate::primitives::function::PointSet;

// ============================================================================
// Region Sampling
// ============================================================================

/// Draw `iters` points from the convex hull of `x` via hit-and-run.
///
/// Fails with [`EmbedError::TooFewPoints`] if `x` has fewer than d+1 points
/// and with [`EmbedError::DegenerateDomain`] if its affine rank is below the
/// ambient dimension (the hull has no interior to sample).
pub fn sample_region<T: FloatLinalg>(
    x: &PointSet<T>,
    iters: usize,
    seed: u64,
) -> Result<PointSet<T>, EmbedError> {
    if iters == 0 {
        return Err(EmbedError::InvalidIterations(0));
    }

    let dim = x.dim();
    let n = x.len();
    if n < dim + 1 {
        return Err(EmbedError::TooFewPoints {
            got: n,
            min: dim + 1,
        });
    }

    let rank = T::affine_rank(x.points(), dim);
    if rank < dim {
        return Err(EmbedError::DegenerateDomain { rank, dim });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let eps = T::epsilon();
    let inv_n = T::one() / T::from(n).unwrap();

    // Start at the centroid (uniform weights).
    let mut weights = vec![inv_n; n];
    let mut direction = vec![T::zero(); n];
    let mut samples = Vec::with_capacity(iters * dim);

    for _ in 0..iters {
        // Zero-sum Gaussian direction keeps the weight sum invariant.
        let mut mean = T::zero();
        for u in direction.iter_mut() {
            let g: f64 = rng.sample(StandardNormal);
            *u = T::from(g).unwrap();
            mean = mean + *u;
        }
        mean = mean * inv_n;
        for u in direction.iter_mut() {
            *u = *u - mean;
        }

        // Feasible chord from w + t·u ≥ 0.
        let mut t_min = T::neg_infinity();
        let mut t_max = T::infinity();
        for (&w, &u) in weights.iter().zip(direction.iter()) {
            if u > eps {
                t_min = t_min.max(-w / u);
            } else if u < -eps {
                t_max = t_max.min(-w / u);
            }
        }

        // A direction with no usable component leaves the walk in place.
        if t_min.is_finite() && t_max.is_finite() && t_max > t_min {
            let u01: f64 = rng.random();
            let t = t_min + (t_max - t_min) * T::from(u01).unwrap();

            let mut total = T::zero();
            for (w, &u) in weights.iter_mut().zip(direction.iter()) {
                *w = (*w + t * u).max(T::zero());
                total = total + *w;
            }
            for w in weights.iter_mut() {
                *w = *w / total;
            }
        }

        // Map the weights through X.
        for d in 0..dim {
            let mut coord = T::zero();
            for (p, &w) in weights.iter().enumerate() {
                coord = coord + w * x.point(p)[d];
            }
            samples.push(coord);
        }
    }

    PointSet::new(samples, dim)
}
