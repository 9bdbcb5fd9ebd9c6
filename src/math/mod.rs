//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks with no
//! pipeline-specific logic:
//! - Distance metrics for neighbor lookup and interpolation weighting
//! - The symmetric matrix square root (nalgebra backend bridge)
//! - Gaussian random projection for dimensionality reduction
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Sampling
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Distance metrics.
pub mod distance;

/// Gaussian random projection.
pub mod projection;

/// Symmetric matrix square root and affine rank (nalgebra bridge).
pub mod sqrtm;
