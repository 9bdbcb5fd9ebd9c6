//! Distance metrics for nearest-neighbor interpolation.
//!
//! ## Purpose
//!
//! This module provides distance computation for the vantage-point index and
//! the inverse-distance interpolator. Only true metrics are offered, since
//! vantage-point pruning relies on the triangle inequality.
//!
//! ## Design notes
//!
//! * **Decoupling**: distance calculation is separated from interpolation
//!   weighting.
//! * **Generics**: all computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * Distance is always non-negative.
//! * Distance is zero if and only if points are identical.
//! * The triangle inequality holds for every variant.
//!
//! ## Non-goals
//!
//! * This module does not build or search spatial indices.

// External dependencies
use num_traits::Float;

// ============================================================================
// Distance Metric Enum
// ============================================================================

/// Distance metric for neighbor lookup and interpolation weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Standard Euclidean distance: √(Σ(xᵢ - yᵢ)²)
    #[default]
    Euclidean,

    /// Manhattan distance (L1 norm): Σ|xᵢ - yᵢ|
    Manhattan,

    /// Chebyshev distance (L∞ norm): max|xᵢ - yᵢ|
    Chebyshev,
}

// ============================================================================
// Distance Computation Functions
// ============================================================================

impl DistanceMetric {
    /// Compute the distance between two nD points under this metric.
    #[inline]
    pub fn compute<T: Float>(&self, a: &[T], b: &[T]) -> T {
        match self {
            DistanceMetric::Euclidean => Self::euclidean(a, b),
            DistanceMetric::Manhattan => Self::manhattan(a, b),
            DistanceMetric::Chebyshev => Self::chebyshev(a, b),
        }
    }

    /// Compute Euclidean distance between two nD points.
    #[inline]
    pub fn euclidean<T: Float>(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| {
                let diff = ai - bi;
                diff * diff
            })
            .fold(T::zero(), |acc, x| acc + x)
            .sqrt()
    }

    /// Compute Manhattan distance (L1 norm).
    #[inline]
    pub fn manhattan<T: Float>(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| (ai - bi).abs())
            .fold(T::zero(), |acc, x| acc + x)
    }

    /// Compute Chebyshev distance (L-inf norm).
    #[inline]
    pub fn chebyshev<T: Float>(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| (ai - bi).abs())
            .fold(T::zero(), T::max)
    }
}
