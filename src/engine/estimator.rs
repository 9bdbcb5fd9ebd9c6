//! Monte Carlo estimation of the pairwise inner-product matrix.
//!
//! ## Purpose
//!
//! This module orchestrates sampling and interpolation into an estimate of
//! the Gram matrix among N functions: entry (i, j) approximates the integral
//! inner product of functions i and j over the convex hull of the reference
//! set.
//!
//! ## Design notes
//!
//! * **Shared samples**: one sample set is drawn and reused across every
//!   function. The cross terms are only meaningful when all functions are
//!   evaluated at the same locations.
//! * **Symmetry by construction**: only the upper triangle is computed; the
//!   lower triangle is mirrored, so entry (i, j) equals entry (j, i)
//!   exactly, not merely within rounding.
//! * **Normalization**: the summed matrix is divided by the sample count,
//!   turning the sum into a sample-mean estimate of the expected inner
//!   product.
//! * **Purity**: the estimate is a function of its inputs and the seed; no
//!   state survives the call.
//!
//! ## Key concepts
//!
//! * **Monte Carlo estimate**: unbiased in expectation with respect to the
//!   walk-induced measure over the hull; variance shrinks as the sample
//!   count grows.
//!
//! ## Invariants
//!
//! * The output is N×N, exactly symmetric, with non-negative diagonal.
//!
//! ## Non-goals
//!
//! * This module does not factor the matrix (see `engine::embedder`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::interpolation::{interpolate_idw, interpolate_nn, Interpolation};
use crate::engine::validator::Validator;
use crate::math::sqrtm::FloatLinalg;
use crate::primitives::errors::EmbedError;
use crate::primitives::function::{FunctionSamples, PointSet};
use crate::primitives::matrix::Matrix;
use crate::sampling::hitrun::sample_region;

// ============================================================================
// Gram Estimator
// ============================================================================

/// Monte Carlo estimator of the pairwise inner-product matrix.
#[derive(Debug, Clone, Copy)]
pub struct GramEstimator {
    iterations: usize,
    seed: u64,
}

impl GramEstimator {
    /// Create an estimator with the given sample count and seed.
    pub fn new(iterations: usize, seed: u64) -> Self {
        Self { iterations, seed }
    }

    /// Estimate the N×N inner-product matrix among `functions` over the
    /// convex hull of `x`.
    ///
    /// All functions are evaluated at one shared sample set via the chosen
    /// interpolation strategy; per-sample dot products are summed and the
    /// total normalized by the sample count.
    pub fn estimate<T: FloatLinalg>(
        &self,
        functions: &[FunctionSamples<T>],
        x: &PointSet<T>,
        strategy: Interpolation<'_, T>,
    ) -> Result<Matrix<T>, EmbedError> {
        Validator::validate_iterations(self.iterations)?;
        Validator::validate_functions(functions, x)?;
        Validator::validate_reference(x)?;
        if let Interpolation::NearestNeighbor(trees) = strategy {
            Validator::validate_indices(trees, functions)?;
        }

        // One shared sample set for every function.
        let samples = sample_region(x, self.iterations, self.seed)?;

        let n = functions.len();
        let k = functions[0].output_dim();

        let mut outputs: Vec<Matrix<T>> = Vec::with_capacity(n);
        for (i, func) in functions.iter().enumerate() {
            let evaluated = match strategy {
                Interpolation::NearestNeighbor(trees) => {
                    interpolate_nn(&trees[i], &samples, func)?
                }
                Interpolation::InverseDistanceWeighted => interpolate_idw(&samples, func),
            };
            outputs.push(evaluated);
        }

        let denom = T::from(self.iterations).unwrap();
        let mut gram = Matrix::zeros(n, n);
        for i in 0..n {
            for j in i..n {
                let mut acc = T::zero();
                for s in 0..self.iterations {
                    let lhs = outputs[i].row(s);
                    let rhs = outputs[j].row(s);
                    for c in 0..k {
                        acc = acc + lhs[c] * rhs[c];
                    }
                }
                let entry = acc / denom;
                gram.set(i, j, entry);
                gram.set(j, i, entry);
            }
        }

        Ok(gram)
    }
}
