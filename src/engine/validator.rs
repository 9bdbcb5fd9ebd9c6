//! Input validation for the estimation pipeline.
//!
//! ## Purpose
//!
//! This module provides validation functions for the Gram estimator and the
//! embedder: collection shapes, parameter bounds, index bookkeeping, and
//! Gram matrix well-formedness.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: validation stops at the first error encountered.
//! * **Efficiency**: checks are ordered from cheap to expensive.
//! * **Generics**: validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shared output dimension**: the cross-function inner product is only
//!   defined when every function maps into the same output space, so the
//!   dimension is validated explicitly rather than discovered by a stacking
//!   failure.
//! * **Index bookkeeping**: nearest-neighbor mode needs exactly one index
//!   per function, built over that function's own points.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sample, interpolate, or decompose anything.
//! * This module does not correct invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::vptree::VpTree;
use crate::primitives::errors::EmbedError;
use crate::primitives::function::{FunctionSamples, PointSet};
use crate::primitives::matrix::Matrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for pipeline configuration and input data.
///
/// Provides static methods returning `Result<(), EmbedError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the Monte Carlo iteration count.
    pub fn validate_iterations(iterations: usize) -> Result<(), EmbedError> {
        if iterations == 0 {
            return Err(EmbedError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate the embedding dimension cap.
    pub fn validate_dim_cap(dim_cap: usize) -> Result<(), EmbedError> {
        if dim_cap == 0 {
            return Err(EmbedError::InvalidDimCap(dim_cap));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), EmbedError> {
        if let Some(param) = duplicate_param {
            return Err(EmbedError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Collection Validation
    // ========================================================================

    /// Validate the function list against the reference set.
    pub fn validate_functions<T: Float>(
        functions: &[FunctionSamples<T>],
        x: &PointSet<T>,
    ) -> Result<(), EmbedError> {
        // Check 1: Non-empty list
        if functions.is_empty() {
            return Err(EmbedError::EmptyInput);
        }

        // Check 2: Input dimensions agree with the reference set
        for func in functions {
            if func.input_dim() != x.dim() {
                return Err(EmbedError::DimensionMismatch {
                    expected: x.dim(),
                    got: func.input_dim(),
                });
            }
        }

        // Check 3: One shared output dimension across all functions
        let output_dim = functions[0].output_dim();
        for func in &functions[1..] {
            if func.output_dim() != output_dim {
                return Err(EmbedError::ShapeMismatch {
                    expected: output_dim,
                    got: func.output_dim(),
                });
            }
        }

        Ok(())
    }

    /// Validate that the reference set can span a hull with interior.
    ///
    /// Full affine rank is checked later by the sampler, which already has
    /// the decomposition at hand; here only the point count is enforced.
    pub fn validate_reference<T: Float>(x: &PointSet<T>) -> Result<(), EmbedError> {
        let min = x.dim() + 1;
        if x.len() < min {
            return Err(EmbedError::TooFewPoints { got: x.len(), min });
        }
        Ok(())
    }

    /// Validate nearest-neighbor indices against the function list.
    pub fn validate_indices<T: Float>(
        trees: &[VpTree<T>],
        functions: &[FunctionSamples<T>],
    ) -> Result<(), EmbedError> {
        // Check 1: One index per function
        if trees.len() != functions.len() {
            return Err(EmbedError::IndexCountMismatch {
                indices: trees.len(),
                functions: functions.len(),
            });
        }

        // Check 2: Each index covers its function's points
        for (tree, func) in trees.iter().zip(functions.iter()) {
            if tree.len() != func.len() {
                return Err(EmbedError::IndexSizeMismatch {
                    index_points: tree.len(),
                    function_points: func.len(),
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Matrix Validation
    // ========================================================================

    /// Validate that a Gram matrix is square and symmetric within tolerance.
    pub fn validate_gram<T: Float>(gram: &Matrix<T>) -> Result<(), EmbedError> {
        if !gram.is_square() {
            return Err(EmbedError::NotSquare {
                rows: gram.rows(),
                cols: gram.cols(),
            });
        }

        let tol = T::epsilon().sqrt();
        for i in 0..gram.rows() {
            for j in (i + 1)..gram.cols() {
                let a = gram.get(i, j);
                let b = gram.get(j, i);
                let scale = T::one().max(a.abs()).max(b.abs());
                if (a - b).abs() > tol * scale {
                    return Err(EmbedError::NotSymmetric { row: i, col: j });
                }
            }
        }

        Ok(())
    }
}
