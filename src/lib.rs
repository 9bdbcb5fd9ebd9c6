//! # fnembed — Monte Carlo function embeddings for Rust
//!
//! Estimates a low-dimensional vector embedding for a collection of
//! functions such that the dot product between two functions' embeddings
//! approximates an integral inner product of those functions over a shared
//! domain.
//!
//! ## What does it do?
//!
//! Functions are given only implicitly, as paired samples: known input
//! points and the output values observed at them. The domain over which
//! similarity is measured is the convex hull of a reference point set X.
//! The pipeline:
//!
//! 1. **Sample** the hull of X with a hit-and-run random walk.
//! 2. **Interpolate** every function at the same sample points
//!    (nearest-neighbor or inverse-distance weighting).
//! 3. **Estimate** the N×N pairwise inner-product (Gram) matrix as a
//!    normalized Monte Carlo sum.
//! 4. **Factor** the Gram matrix into an explicit D×N embedding via a
//!    symmetric matrix square root and a seeded Gaussian random projection,
//!    D ≤ a configurable cap.
//!
//! **Common applications:**
//! - Similarity search over learned or measured vector fields
//! - Clustering response surfaces sampled at irregular locations
//! - Compressing families of interpolated signals into fixed-size vectors
//! - Downstream indexing of simulation outputs by behavior, not parameters
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fnembed_rs::prelude::*;
//!
//! // Two scalar-valued functions sampled over the unit square.
//! let grid = vec![
//!     0.0, 0.0,
//!     1.0, 0.0,
//!     0.0, 1.0,
//!     1.0, 1.0,
//! ];
//! let f = FunctionSamples::new(grid.clone(), 2, vec![1.0, 2.0, 3.0, 4.0], 1)?;
//! let g = FunctionSamples::new(grid.clone(), 2, vec![4.0, 3.0, 2.0, 1.0], 1)?;
//!
//! // The convex hull of X is the integration domain.
//! let x = PointSet::new(grid, 2)?;
//!
//! // Build the model
//! let model = FnEmbed::new()
//!     .iterations(200)   // Monte Carlo samples
//!     .dim_cap(8)        // Embedding rows at most 8
//!     .seed(42)          // Reproducible runs
//!     .build()?;
//!
//! // N×N inner-product estimate
//! let gram = model.gram_matrix(
//!     &[f.clone(), g.clone()],
//!     &x,
//!     Interpolation::InverseDistanceWeighted,
//! )?;
//! assert_eq!((gram.rows(), gram.cols()), (2, 2));
//!
//! // D×N embedding, D = min(dim_cap, N)
//! let embedding = model.embedding_matrix(
//!     &[f, g],
//!     &x,
//!     Interpolation::InverseDistanceWeighted,
//! )?;
//! assert_eq!(embedding.cols(), 2);
//! # Result::<(), EmbedError>::Ok(())
//! ```
//!
//! ### Nearest-Neighbor Interpolation
//!
//! Nearest-neighbor mode needs one metric index per function, built over
//! that function's own input points and owned by the caller:
//!
//! ```rust
//! use fnembed_rs::prelude::*;
//!
//! let grid = vec![
//!     0.0, 0.0,
//!     1.0, 0.0,
//!     0.0, 1.0,
//!     1.0, 1.0,
//! ];
//! let f = FunctionSamples::new(grid.clone(), 2, vec![1.0, 2.0, 3.0, 4.0], 1)?;
//! let g = FunctionSamples::new(grid.clone(), 2, vec![4.0, 3.0, 2.0, 1.0], 1)?;
//! let x = PointSet::new(grid, 2)?;
//!
//! let trees = vec![
//!     VpTree::new(f.inputs(), f.input_dim()),
//!     VpTree::new(g.inputs(), g.input_dim()),
//! ];
//!
//! let model = FnEmbed::new().iterations(100).seed(7).build()?;
//! let gram = model.gram_matrix(&[f, g], &x, Interpolation::NearestNeighbor(&trees))?;
//! assert_eq!(gram.rows(), 2);
//! # Result::<(), EmbedError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, EmbedError>`; the `?`
//! operator is idiomatic:
//!
//! ```rust
//! use fnembed_rs::prelude::*;
//!
//! // A 1D reference set with a single distinct point spans no interior.
//! let x = PointSet::new(vec![1.0, 1.0], 1)?;
//! let f = FunctionSamples::new(vec![1.0, 1.0], 1, vec![2.0, 2.0], 1)?;
//!
//! let model = FnEmbed::new().build()?;
//! match model.gram_matrix(&[f], &x, Interpolation::InverseDistanceWeighted) {
//!     Ok(gram) => println!("norm² ≈ {:?}", gram.get(0, 0)),
//!     Err(e) => eprintln!("estimation failed: {}", e),
//! }
//! # Result::<(), EmbedError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! All builder parameters have defaults; specify only what you want to
//! change.
//!
//! | Parameter      | Default      | Range    | Description                                 |
//! |----------------|--------------|----------|---------------------------------------------|
//! | **iterations** | 100          | [1, ∞)   | Monte Carlo samples drawn from the hull     |
//! | **dim_cap**    | 20           | [1, ∞)   | Maximum embedding dimensionality            |
//! | **seed**       | fixed const  | any u64  | RNG seed for sampler and projector streams  |
//!
//! **Choosing iterations:**
//! - **10-100**: quick estimates, high variance
//! - **100-1000**: typical accuracy (default range)
//! - **1000+**: low-variance estimates for small function collections
//!
//! **Choosing dim_cap:** with `dim_cap >= N` (the function count) no
//! projection is applied and the embedding reproduces the estimated Gram
//! matrix exactly; below N, dot products carry additional
//! Johnson-Lindenstrauss distortion that shrinks as the cap grows.
//!
//! ## Interpolation Strategies
//!
//! | Strategy                   | Behavior                                   | Needs                    |
//! |----------------------------|--------------------------------------------|--------------------------|
//! | `NearestNeighbor`          | Output of the closest known input          | One `VpTree` per function |
//! | `InverseDistanceWeighted`  | Average of all outputs, weights 1/distance | Nothing extra            |
//!
//! Both strategies reproduce known outputs exactly at known inputs and
//! tolerate duplicate input points. Nearest-neighbor is piecewise constant
//! and fast per query; inverse-distance weighting is smooth but scans every
//! known point per query.
//!
//! ## Determinism
//!
//! With a fixed seed, repeated calls on identical inputs produce bitwise
//! identical Gram and embedding matrices. The default seed is a fixed
//! constant, so results are reproducible out of the box; supply your own
//! seed per run for independent estimates.
//!
//! ## Numerical Notes
//!
//! - The Gram estimate is exactly symmetric by construction; only the upper
//!   triangle is computed and then mirrored.
//! - A finite-sample Gram estimate may carry small negative eigenvalues.
//!   The square root floors them at zero; this is what keeps the embedding
//!   real-valued. If the decomposition still yields non-finite values, the
//!   pipeline fails with `NumericalInstability` rather than propagating
//!   NaN.
//! - The reference set must contain at least d+1 points of full affine
//!   rank; anything less has a hull without interior and is rejected with
//!   `DegenerateDomain`.
//!
//! ## References
//!
//! - Smith, R. L. (1984). "Efficient Monte Carlo Procedures for Generating
//!   Points Uniformly Distributed over Bounded Regions"
//! - Johnson, W. B. & Lindenstrauss, J. (1984). "Extensions of Lipschitz
//!   mappings into a Hilbert space"
//! - Higham, N. J. (2008). "Functions of Matrices: Theory and Computation"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and errors.
//
// Contains the error enum, the dense row-major matrix, and the sample
// containers for functions and point sets.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains distance metrics, the symmetric matrix square root (nalgebra
// bridge), and the Gaussian random projection.
mod math;

// Layer 3: Sampling - domain sampling.
//
// Contains the hit-and-run random walk over the convex hull of the
// reference set.
mod sampling;

// Layer 4: Algorithms - function evaluation.
//
// Contains the vantage-point tree index and the two interpolation
// strategies (nearest-neighbor, inverse-distance weighting).
mod algorithms;

// Layer 5: Engine - orchestration.
//
// Contains the validator, the Monte Carlo Gram estimator, and the
// embedder that factors the estimate into an embedding matrix.
mod engine;

// High-level fluent API.
//
// Provides the `FnEmbed` builder for configuring and running the pipeline.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use fnembed_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::interpolation::Interpolation;
    pub use crate::algorithms::vptree::VpTree;
    pub use crate::api::{FnEmbedBuilder as FnEmbed, FnEmbedModel};
    pub use crate::engine::config::{
        EmbedConfig, DEFAULT_DIM_CAP, DEFAULT_ITERATIONS, DEFAULT_SEED,
    };
    pub use crate::math::distance::DistanceMetric;
    pub use crate::primitives::errors::EmbedError;
    pub use crate::primitives::function::{FunctionSamples, PointSet};
    pub use crate::primitives::matrix::Matrix;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and errors.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal domain sampling.
    pub mod sampling {
        pub use crate::sampling::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
