//! Sample containers for implicitly defined functions and point sets.
//!
//! ## Purpose
//!
//! This module defines the two input types of the pipeline: a function given
//! as index-aligned (input, output) sample pairs, and a flat set of points
//! used both as the reference set whose convex hull defines the integration
//! domain and as the sample sets drawn from it.
//!
//! ## Design notes
//!
//! * **Flattened storage**: points are stored as one `Vec<T>` with an
//!   explicit dimension, so `point(i)` is a contiguous slice.
//! * **Validated construction**: divisibility, pairing, and finiteness are
//!   checked once at construction; downstream layers can assume well-formed
//!   containers.
//! * **Duplicates tolerated**: no uniqueness is assumed of input points;
//!   both interpolation strategies handle repeats.
//!
//! ## Invariants
//!
//! * `inputs.len() == len() * input_dim()` and
//!   `outputs.len() == len() * output_dim()`.
//! * Every stored value is finite.
//!
//! ## Non-goals
//!
//! * This module does not interpolate or index the samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EmbedError;

// ============================================================================
// Helpers
// ============================================================================

fn check_finite<T: Float>(values: &[T], name: &str) -> Result<(), EmbedError> {
    for (i, &val) in values.iter().enumerate() {
        if !val.is_finite() {
            return Err(EmbedError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                i,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
    }
    Ok(())
}

fn check_divisible(len: usize, dim: usize, name: &str) -> Result<(), EmbedError> {
    if dim == 0 {
        return Err(EmbedError::InvalidInput(String::from(
            "dimension must be at least 1",
        )));
    }
    if len % dim != 0 {
        return Err(EmbedError::InvalidInput(format!(
            "{} length {} is not divisible by dimension {}",
            name, len, dim
        )));
    }
    Ok(())
}

// ============================================================================
// Point Set
// ============================================================================

/// A flat set of points in `R^dim`.
///
/// Used for the reference set X (whose convex hull is the integration
/// domain) and for the ephemeral sample sets drawn from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<T> {
    points: Vec<T>,
    dim: usize,
}

impl<T: Float> PointSet<T> {
    /// Create a point set from flattened row-major data (one point per row).
    pub fn new(points: Vec<T>, dim: usize) -> Result<Self, EmbedError> {
        check_divisible(points.len(), dim, "points")?;
        if points.is_empty() {
            return Err(EmbedError::EmptyInput);
        }
        check_finite(&points, "points")?;
        Ok(Self { points, dim })
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len() / self.dim
    }

    /// True if the set holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Flattened point data.
    #[inline]
    pub fn points(&self) -> &[T] {
        &self.points
    }

    /// Slice for one point.
    #[inline]
    pub fn point(&self, index: usize) -> &[T] {
        debug_assert!(index < self.len(), "Point index out of bounds");
        &self.points[index * self.dim..(index + 1) * self.dim]
    }
}

// ============================================================================
// Function Samples
// ============================================================================

/// A function given implicitly as index-aligned (input, output) samples.
///
/// `input(i)` maps to `output(i)`. Inputs live in `R^input_dim`, outputs in
/// `R^output_dim`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSamples<T> {
    inputs: Vec<T>,
    outputs: Vec<T>,
    input_dim: usize,
    output_dim: usize,
}

impl<T: Float> FunctionSamples<T> {
    /// Create a function from flattened, index-aligned sample pairs.
    pub fn new(
        inputs: Vec<T>,
        input_dim: usize,
        outputs: Vec<T>,
        output_dim: usize,
    ) -> Result<Self, EmbedError> {
        check_divisible(inputs.len(), input_dim, "inputs")?;
        check_divisible(outputs.len(), output_dim, "outputs")?;

        let n_in = inputs.len() / input_dim;
        let n_out = outputs.len() / output_dim;
        if n_in != n_out {
            return Err(EmbedError::MismatchedSamples {
                inputs: n_in,
                outputs: n_out,
            });
        }
        if n_in == 0 {
            return Err(EmbedError::EmptyInput);
        }

        check_finite(&inputs, "inputs")?;
        check_finite(&outputs, "outputs")?;

        Ok(Self {
            inputs,
            outputs,
            input_dim,
            output_dim,
        })
    }

    /// Number of sample pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.inputs.len() / self.input_dim
    }

    /// True if the function holds no samples.
    ///
    /// Construction rejects empty functions, so this is false for any
    /// successfully built value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Input dimension.
    #[inline]
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Output dimension.
    #[inline]
    pub fn output_dim(&self) -> usize {
        self.output_dim
    }

    /// Flattened input points.
    #[inline]
    pub fn inputs(&self) -> &[T] {
        &self.inputs
    }

    /// Flattened output points.
    #[inline]
    pub fn outputs(&self) -> &[T] {
        &self.outputs
    }

    /// Slice for one input point.
    #[inline]
    pub fn input(&self, index: usize) -> &[T] {
        debug_assert!(index < self.len(), "Sample index out of bounds");
        &self.inputs[index * self.input_dim..(index + 1) * self.input_dim]
    }

    /// Slice for one output point.
    #[inline]
    pub fn output(&self, index: usize) -> &[T] {
        debug_assert!(index < self.len(), "Sample index out of bounds");
        &self.outputs[index * self.output_dim..(index + 1) * self.output_dim]
    }
}
