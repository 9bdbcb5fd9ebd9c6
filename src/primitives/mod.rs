//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data types shared by every other
//! layer:
//! - The crate-wide error enum
//! - The dense row-major matrix
//! - Sample containers for functions and point sets
//!
//! These types carry no algorithmic logic of their own.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Crate-wide error enum.
pub mod errors;

/// Sample containers for functions and point sets.
pub mod function;

/// Dense row-major matrix.
pub mod matrix;
