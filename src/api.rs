//! High-level API for function embedding.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for the estimation hyperparameters and a model exposing the two
//! pipeline operations (Gram estimation and embedding) plus their
//! composition.
//!
//! ## Design notes
//!
//! * **Ergonomic**: fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: parameters are validated when `build()` is called, and
//!   setting a parameter twice is rejected.
//! * **Type-Safe**: the model is scalar-type agnostic; its methods are
//!   generic over `FloatLinalg` (f32 and f64), inferred from the inputs.
//!
//! ## Key concepts
//!
//! * **Configuration flow**: `FnEmbed::new()` → chained setters →
//!   `.build()` → `gram_matrix` / `embedding_matrix`.
//! * **Strategy at the call**: the interpolation strategy travels with each
//!   call because its nearest-neighbor variant owns per-function indices.

// Internal dependencies
use crate::algorithms::interpolation::Interpolation;
use crate::engine::config::{EmbedConfig, PROJECTOR_SEED_OFFSET};
use crate::engine::embedder::Embedder;
use crate::engine::estimator::GramEstimator;
use crate::engine::validator::Validator;
use crate::math::sqrtm::FloatLinalg;
use crate::primitives::function::{FunctionSamples, PointSet};
use crate::primitives::matrix::Matrix;

// Publicly re-exported types
pub use crate::algorithms::vptree::VpTree;
pub use crate::engine::config::{DEFAULT_DIM_CAP, DEFAULT_ITERATIONS, DEFAULT_SEED};
pub use crate::math::distance::DistanceMetric;
pub use crate::primitives::errors::EmbedError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for the embedding pipeline.
#[derive(Debug, Clone, Default)]
pub struct FnEmbedBuilder {
    /// Monte Carlo sample count.
    pub iterations: Option<usize>,

    /// Maximum embedding dimensionality.
    pub dim_cap: Option<usize>,

    /// Seed for the sampler and projector streams.
    pub seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl FnEmbedBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            iterations: None,
            dim_cap: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Set the Monte Carlo sample count (default: 100).
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.iterations.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.iterations = Some(iterations);
        self
    }

    /// Set the cap on embedding dimensionality (default: 20).
    pub fn dim_cap(mut self, dim_cap: usize) -> Self {
        if self.dim_cap.is_some() {
            self.duplicate_param = Some("dim_cap");
        }
        self.dim_cap = Some(dim_cap);
        self
    }

    /// Set the RNG seed for reproducible estimates.
    ///
    /// The default is a fixed constant, so runs are reproducible unless a
    /// caller-specific seed is supplied.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<FnEmbedModel, EmbedError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = EmbedConfig {
            iterations: self.iterations.unwrap_or(crate::engine::config::DEFAULT_ITERATIONS),
            dim_cap: self.dim_cap.unwrap_or(crate::engine::config::DEFAULT_DIM_CAP),
            seed: self.seed.unwrap_or(crate::engine::config::DEFAULT_SEED),
        };

        Validator::validate_iterations(config.iterations)?;
        Validator::validate_dim_cap(config.dim_cap)?;

        Ok(FnEmbedModel { config })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Configured embedding pipeline.
#[derive(Debug, Clone, Copy)]
pub struct FnEmbedModel {
    config: EmbedConfig,
}

impl FnEmbedModel {
    /// The configuration the model was built with.
    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Estimate the pairwise inner-product matrix among `functions` over
    /// the convex hull of `x`.
    pub fn gram_matrix<T: FloatLinalg>(
        &self,
        functions: &[FunctionSamples<T>],
        x: &PointSet<T>,
        strategy: Interpolation<'_, T>,
    ) -> Result<Matrix<T>, EmbedError> {
        GramEstimator::new(self.config.iterations, self.config.seed)
            .estimate(functions, x, strategy)
    }

    /// Factor a Gram matrix into an embedding matrix with at most
    /// `dim_cap` rows.
    pub fn embed<T: FloatLinalg>(&self, gram: &Matrix<T>) -> Result<Matrix<T>, EmbedError> {
        Embedder::new(
            self.config.dim_cap,
            self.config.seed.wrapping_add(PROJECTOR_SEED_OFFSET),
        )
        .embed(gram)
    }

    /// Estimate the Gram matrix and factor it into an embedding matrix in
    /// one call.
    pub fn embedding_matrix<T: FloatLinalg>(
        &self,
        functions: &[FunctionSamples<T>],
        x: &PointSet<T>,
        strategy: Interpolation<'_, T>,
    ) -> Result<Matrix<T>, EmbedError> {
        let gram = self.gram_matrix(functions, x, strategy)?;
        self.embed(&gram)
    }
}
