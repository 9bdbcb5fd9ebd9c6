//! Error types for function embedding.
//!
//! ## Purpose
//!
//! This module defines the crate-wide error enum returned by every fallible
//! operation: construction of sample containers, domain sampling, Gram
//! estimation, and embedding.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Errors carry the offending values so callers can report
//!   them without re-deriving context.
//! * **No Recovery**: The pipeline is a deterministic-given-seed computation;
//!   no variant is retryable.
//! * **no_std**: `Display` is hand-written and `std::error::Error` is gated
//!   on the `std` feature.
//!
//! ## Key concepts
//!
//! * **Shape errors**: mismatched dimensions or non-square/asymmetric input.
//! * **Domain errors**: reference sets whose convex hull has no interior.
//! * **Numeric errors**: non-finite inputs or non-finite decomposition output.
//! * **Configuration errors**: wrong index counts or invalid parameters.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors returned by the function embedding pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbedError {
    /// Input collection is empty (no functions, points, or values).
    EmptyInput,

    /// Free-form invalid input description.
    InvalidInput(String),

    /// A function's input and output sequences are not index-aligned.
    MismatchedSamples {
        /// Number of input points.
        inputs: usize,
        /// Number of output points.
        outputs: usize,
    },

    /// Output dimensions disagree across functions.
    ShapeMismatch {
        /// Output dimension of the first function.
        expected: usize,
        /// Conflicting output dimension.
        got: usize,
    },

    /// A function's input dimension disagrees with the reference set.
    DimensionMismatch {
        /// Dimension of the reference set.
        expected: usize,
        /// Conflicting input dimension.
        got: usize,
    },

    /// The Gram matrix is not square.
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// The Gram matrix is not symmetric within tolerance.
    NotSymmetric {
        /// Row of the first asymmetric entry.
        row: usize,
        /// Column of the first asymmetric entry.
        col: usize,
    },

    /// The reference set has too few points to span a hull with interior.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required (dimension + 1).
        min: usize,
    },

    /// The convex hull of the reference set is rank-deficient.
    DegenerateDomain {
        /// Affine rank of the reference set.
        rank: usize,
        /// Ambient dimension.
        dim: usize,
    },

    /// A decomposition produced non-finite values despite clamping.
    NumericalInstability(String),

    /// A non-finite value was found in the input.
    InvalidNumericValue(String),

    /// Monte Carlo iteration count is zero.
    InvalidIterations(usize),

    /// Embedding dimension cap is zero.
    InvalidDimCap(usize),

    /// Nearest-neighbor mode received the wrong number of indices.
    IndexCountMismatch {
        /// Number of indices provided.
        indices: usize,
        /// Number of functions.
        functions: usize,
    },

    /// An index was built over a different point count than its function.
    IndexSizeMismatch {
        /// Points in the index.
        index_points: usize,
        /// Points in the function.
        function_points: usize,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbedError::EmptyInput => write!(f, "Input is empty"),
            EmbedError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            EmbedError::MismatchedSamples { inputs, outputs } => write!(
                f,
                "Sample mismatch: {} input points, {} output points",
                inputs, outputs
            ),
            EmbedError::ShapeMismatch { expected, got } => write!(
                f,
                "Output dimension mismatch: expected {}, got {}",
                expected, got
            ),
            EmbedError::DimensionMismatch { expected, got } => write!(
                f,
                "Input dimension mismatch: reference set has dimension {}, function has {}",
                expected, got
            ),
            EmbedError::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square: {}x{}", rows, cols)
            }
            EmbedError::NotSymmetric { row, col } => write!(
                f,
                "Matrix is not symmetric: entries ({}, {}) and ({}, {}) disagree",
                row, col, col, row
            ),
            EmbedError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            EmbedError::DegenerateDomain { rank, dim } => write!(
                f,
                "Degenerate domain: reference set has affine rank {} in dimension {}",
                rank, dim
            ),
            EmbedError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
            EmbedError::InvalidNumericValue(msg) => {
                write!(f, "Invalid numeric value: {}", msg)
            }
            EmbedError::InvalidIterations(got) => {
                write!(f, "Invalid iterations: {} (must be at least 1)", got)
            }
            EmbedError::InvalidDimCap(got) => {
                write!(f, "Invalid dimension cap: {} (must be at least 1)", got)
            }
            EmbedError::IndexCountMismatch { indices, functions } => write!(
                f,
                "Index count mismatch: {} indices for {} functions",
                indices, functions
            ),
            EmbedError::IndexSizeMismatch {
                index_points,
                function_points,
            } => write!(
                f,
                "Index size mismatch: index covers {} points, function has {}",
                index_points, function_points
            ),
            EmbedError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmbedError {}
