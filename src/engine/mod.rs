//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the lower layers into the two pipeline
//! operations:
//! - `GramEstimator`: sampling + interpolation → inner-product matrix
//! - `Embedder`: matrix square root + random projection → embedding matrix
//!
//! plus the configuration structure and the input validator.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Sampling
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline configuration and defaults.
pub mod config;

/// Gram matrix factorization.
pub mod embedder;

/// Monte Carlo Gram estimation.
pub mod estimator;

/// Input validation.
pub mod validator;
