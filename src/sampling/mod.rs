//! Layer 3: Sampling
//!
//! # Purpose
//!
//! This layer draws sample points from the integration domain (the convex
//! hull of the reference set) via a hit-and-run random walk. Sample sets
//! are ephemeral: regenerated per call, never persisted.
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
//! Layer 3: Sampling ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Hit-and-run random walk over a convex hull.
pub mod hitrun;
