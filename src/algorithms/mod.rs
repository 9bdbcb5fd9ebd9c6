//! Layer 4: Algorithms
//!
//! # Purpose
//!
//! This layer evaluates implicitly defined functions at arbitrary points:
//! - A vantage-point tree locating the closest known input in metric space
//! - The two interpolation strategies (nearest-neighbor, inverse-distance)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Algorithms ← You are here
//!   ↓
//! Layer 3: Sampling
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Interpolation strategies.
pub mod interpolation;

/// Vantage-point tree index.
pub mod vptree;
