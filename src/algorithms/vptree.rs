//! Vantage-point tree for nearest-neighbor lookup in metric space.
//!
//! ## Purpose
//!
//! This module implements a vantage-point tree to locate, for each query
//! point, the closest known input point of a function. Unlike axis-aligned
//! partitioning, a vantage-point tree splits on distance balls, so it works
//! with any true metric.
//!
//! ## Design notes
//!
//! * **Static Construction**: the tree is built once over a function's input
//!   points and then queried; no insertions or deletions.
//! * **Array Layout**: nodes are stored in a left-complete binary tree
//!   (array) layout; children are reached via arithmetic (2i+1, 2i+2) rather
//!   than pointers, and vantage points are copied next to their nodes for
//!   cache locality.
//! * **Median Split**: each node's ball radius is chosen with
//!   `select_nth_unstable_by` so the inside/outside subtrees fill the
//!   left-complete layout exactly.
//!
//! ## Key concepts
//!
//! * **Vantage point**: the node's pivot; remaining points split by distance
//!   to it.
//! * **Ball radius**: the split threshold; inside points satisfy d ≤ radius,
//!   outside points d ≥ radius.
//! * **Pruning**: a subtree is skipped when the triangle inequality shows it
//!   cannot contain a closer point than the current best.
//!
//! ## Invariants
//!
//! * Queries return the exact nearest neighbor (no approximation).
//! * Ties resolve to the first candidate met by the search order.
//!
//! ## Non-goals
//!
//! * This module does not support k-nearest queries; the interpolator only
//!   needs the single closest point.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::math::distance::DistanceMetric;

// ============================================================================
// Node Type
// ============================================================================

/// Node of the vantage-point tree.
#[derive(Debug, Clone, Copy)]
struct VpNode<T> {
    /// Index of the vantage point in the original flattened data array.
    index: usize,
    /// Ball radius separating the inside and outside subtrees.
    radius: T,
}

impl<T: Float> Default for VpNode<T> {
    fn default() -> Self {
        Self {
            index: 0,
            radius: T::zero(),
        }
    }
}

// ============================================================================
// Vantage-Point Tree
// ============================================================================

/// Vantage-point tree over a flattened point set.
#[derive(Debug, Clone)]
pub struct VpTree<T: Float> {
    /// Left-complete array of nodes.
    nodes: Vec<VpNode<T>>,
    /// Vantage points copied into node order.
    points: Vec<T>,
    /// Dimensionality of the data.
    dim: usize,
    /// Metric used for construction and queries.
    metric: DistanceMetric,
}

impl<T: Float> VpTree<T> {
    // ------------------------------------------------------------------------
    // Public API
    // ------------------------------------------------------------------------

    /// Build a tree from a flattened point array under the Euclidean metric.
    pub fn new(points: &[T], dim: usize) -> Self {
        Self::with_metric(points, dim, DistanceMetric::Euclidean)
    }

    /// Build a tree from a flattened point array under the given metric.
    pub fn with_metric(points: &[T], dim: usize, metric: DistanceMetric) -> Self {
        debug_assert!(dim > 0, "Dimension must be at least 1");
        let n = points.len() / dim;
        let mut indices: Vec<usize> = (0..n).collect();

        let mut nodes = vec![VpNode::default(); n];
        let mut tree_points = vec![T::zero(); points.len()];

        Self::build_recursive(
            points,
            dim,
            metric,
            &mut indices,
            &mut nodes,
            &mut tree_points,
            0,
        );

        Self {
            nodes,
            points: tree_points,
            dim,
            metric,
        }
    }

    /// Number of indexed points.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree indexes no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Dimensionality of the indexed points.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Metric the tree was built with.
    #[inline]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Find the nearest indexed point to `query`.
    ///
    /// Returns the index into the original point array and the distance, or
    /// `None` for an empty tree.
    pub fn nearest(&self, query: &[T]) -> Option<(usize, T)> {
        if self.nodes.is_empty() {
            return None;
        }
        debug_assert_eq!(query.len(), self.dim, "Query dimension mismatch");

        let mut best_dist = T::infinity();
        let mut best_index = 0usize;

        let mut stack: Vec<usize> = Vec::with_capacity(32);
        stack.push(0);

        while let Some(curr) = stack.pop() {
            let node = self.nodes[curr];
            let offset = curr * self.dim;
            let vantage = &self.points[offset..offset + self.dim];

            let dist = self.metric.compute(query, vantage);
            if dist < best_dist {
                best_dist = dist;
                best_index = node.index;
            }

            let left = 2 * curr + 1;
            if left >= self.nodes.len() {
                continue;
            }
            let right = left + 1;
            let has_right = right < self.nodes.len();
            let tau = node.radius;

            // Triangle inequality bounds: inside points have d(p, v) ≤ tau,
            // outside points have d(p, v) ≥ tau.
            let explore_inside = dist - best_dist <= tau;
            let explore_outside = has_right && dist + best_dist >= tau;

            // Push the far side first so the near side is searched first.
            if dist < tau {
                if explore_outside {
                    stack.push(right);
                }
                if explore_inside {
                    stack.push(left);
                }
            } else {
                if explore_inside {
                    stack.push(left);
                }
                if explore_outside {
                    stack.push(right);
                }
            }
        }

        Some((best_index, best_dist))
    }

    // ------------------------------------------------------------------------
    // Private Helpers & Algorithms
    // ------------------------------------------------------------------------

    /// Recursively place vantage points into the left-complete array.
    fn build_recursive(
        points: &[T],
        dim: usize,
        metric: DistanceMetric,
        indices: &mut [usize],
        nodes: &mut [VpNode<T>],
        tree_points: &mut [T],
        curr: usize,
    ) {
        if indices.is_empty() {
            return;
        }

        let vantage = indices[0];
        let vp = &points[vantage * dim..(vantage + 1) * dim];
        let rest_len = indices.len() - 1;
        let inside_count = Self::calculate_left_subtree_size(indices.len());

        let radius;
        {
            let rest = &mut indices[1..];
            if rest_len == 0 {
                radius = T::zero();
            } else if inside_count < rest_len {
                // Partition so the closest `inside_count` points fall inside
                // the ball and the element at the boundary sets the radius.
                rest.select_nth_unstable_by(inside_count, |&a, &b| {
                    let da = metric.compute(&points[a * dim..(a + 1) * dim], vp);
                    let db = metric.compute(&points[b * dim..(b + 1) * dim], vp);
                    da.partial_cmp(&db).unwrap_or(Equal)
                });
                let boundary = rest[inside_count];
                radius = metric.compute(&points[boundary * dim..(boundary + 1) * dim], vp);
            } else {
                // Every remaining point falls inside; cover the farthest.
                radius = rest
                    .iter()
                    .map(|&i| metric.compute(&points[i * dim..(i + 1) * dim], vp))
                    .fold(T::zero(), T::max);
            }
        }

        nodes[curr] = VpNode {
            index: vantage,
            radius,
        };
        tree_points[curr * dim..(curr + 1) * dim].copy_from_slice(vp);

        let (_, rest) = indices.split_at_mut(1);
        let split = inside_count.min(rest.len());
        let (inside, outside) = rest.split_at_mut(split);

        Self::build_recursive(points, dim, metric, inside, nodes, tree_points, 2 * curr + 1);
        Self::build_recursive(
            points,
            dim,
            metric,
            outside,
            nodes,
            tree_points,
            2 * curr + 2,
        );
    }

    /// Number of nodes in the left subtree of a left-complete binary tree of size N.
    fn calculate_left_subtree_size(n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        // Height: H = floor(log2(n))
        let h = (usize::BITS - n.leading_zeros() - 1) as usize;
        if h == 0 {
            return 0;
        }

        // Max nodes in full tree of height h
        let max_leaf_capacity = 1 << h;

        // Nodes in last level R = n - (nodes in full tree of height h-1)
        let total_nodes_above_leaf = max_leaf_capacity - 1;
        let r = n - total_nodes_above_leaf;

        // Left subtree gets the filled portion of the last level
        let left_part_leaves = r.min(max_leaf_capacity / 2);

        // Full left subtree excluding leaves
        let left_subtree_capacity_full = (max_leaf_capacity / 2) - 1;
        left_subtree_capacity_full + left_part_leaves
    }
}
