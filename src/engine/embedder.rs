//! Factorization of a Gram matrix into an explicit embedding matrix.
//!
//! ## Purpose
//!
//! This module turns the N×N inner-product estimate into a concrete D×N
//! embedding whose pairwise column dot products approximate the input: the
//! symmetric square root recovers a factor A with AᵀA = G, and a random
//! projection caps its row count.
//!
//! ## Design notes
//!
//! * **Clamping is required**: finite-sample Gram estimates carry small
//!   negative eigenvalues; they are floored at zero inside the square root
//!   so the factor stays real. A non-finite result after clamping is fatal.
//! * **No silent garbage**: the input is rejected up front if it is not
//!   square or not symmetric within tolerance.
//! * **Projection shortcut**: with a dimension cap at or above N the square
//!   root is returned as-is, so the embedding reproduces the clamped input
//!   exactly.
//!
//! ## Invariants
//!
//! * The output has min(dim_cap, N) rows and N columns.
//!
//! ## Non-goals
//!
//! * This module does not estimate the Gram matrix.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::projection::reduce_rows;
use crate::math::sqrtm::FloatLinalg;
use crate::primitives::errors::EmbedError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Embedder
// ============================================================================

/// Converts a Gram matrix into a reduced-dimension embedding matrix.
#[derive(Debug, Clone, Copy)]
pub struct Embedder {
    dim_cap: usize,
    seed: u64,
}

impl Embedder {
    /// Create an embedder with the given dimension cap and projection seed.
    pub fn new(dim_cap: usize, seed: u64) -> Self {
        Self { dim_cap, seed }
    }

    /// Factor `gram` into a D×N embedding, D = min(dim_cap, N).
    ///
    /// The columns' pairwise dot products approximate the entries of `gram`
    /// up to Monte Carlo noise already present in the input and the
    /// projection's distortion; with `dim_cap >= N` the reproduction is
    /// exact up to the eigenvalue clamping.
    pub fn embed<T: FloatLinalg>(&self, gram: &Matrix<T>) -> Result<Matrix<T>, EmbedError> {
        Validator::validate_dim_cap(self.dim_cap)?;
        Validator::validate_gram(gram)?;

        let n = gram.rows();
        let root = T::sym_sqrt(gram.data(), n).ok_or_else(|| {
            EmbedError::NumericalInstability(String::from(
                "matrix square root produced non-finite values",
            ))
        })?;
        let full = Matrix::from_vec(root, n, n)?;

        if self.dim_cap >= n {
            return Ok(full);
        }
        Ok(reduce_rows(&full, self.dim_cap, self.seed))
    }
}
