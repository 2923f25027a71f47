//! Closest pair of points.
//!
//! ## Purpose
//!
//! Divide-and-conquer nearest-pair search over a planar point set, plus an
//! independent O(n²) brute-force reference used for cross-validation and as
//! the recursion base case.
//!
//! ## Key concepts
//!
//! * **Dual presort**: the points are sorted by x and independently by y
//!   once, up front. Each recursion level derives its halves' y-ordered
//!   views by filtering the parent's y-ordered view on `x <= mid.x` (ties
//!   on the median x go to the left view), which preserves y-order without
//!   re-sorting.
//! * **Strip**: after both halves report their best pair at distance `d`,
//!   only points within horizontal distance `d` of the dividing line can
//!   beat it. The strip is scanned in y-order and each point is compared
//!   only against subsequent points within vertical distance `d`; the
//!   packing argument bounds that inner loop by a constant.
//!
//! ## Invariants
//!
//! * Validation happens before any work; inputs are never mutated.
//! * Reported distances are true Euclidean values.
//! * Accounting: each distance-vs-current-best check counts one comparison;
//!   the engine never writes into a caller sequence, so assignments stay 0.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::api::Metered;
use crate::engine::validator::Validator;
use crate::geometry::point::{Pair, Point};
use crate::primitives::errors::DivconError;
use crate::primitives::metrics::Metrics;

// ============================================================================
// Closest-Pair Engine
// ============================================================================

/// Instrumented closest-pair search.
#[derive(Debug, Default)]
pub struct ClosestPair {
    metrics: Metrics,
}

impl ClosestPair {
    /// Create an engine with zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the pair with minimum Euclidean distance by divide and conquer.
    ///
    /// Fails with [`DivconError::TooFewPoints`] for fewer than 2 points and
    /// [`DivconError::NonFinitePoint`] for NaN or infinite coordinates.
    pub fn find_closest_pair<T: Float>(
        &self,
        points: &[Point<T>],
    ) -> Result<Pair<T>, DivconError> {
        self.metrics.reset();
        Validator::validate_points(points)?;

        let mut by_x = points.to_vec();
        by_x.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
        let mut by_y = points.to_vec();
        by_y.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal));

        #[cfg(feature = "std")]
        self.metrics.start_timer();

        let result = self.closest_recursive(&by_x, &by_y);

        #[cfg(feature = "std")]
        self.metrics.stop_timer();

        Ok(result)
    }

    /// Find the closest pair by checking every pair: the O(n²) reference.
    ///
    /// Validates like [`ClosestPair::find_closest_pair`]; the two entry
    /// points report the same minimum distance on every valid input (pair
    /// identity may differ on ties).
    pub fn find_closest_pair_brute_force<T: Float>(
        &self,
        points: &[Point<T>],
    ) -> Result<Pair<T>, DivconError> {
        self.metrics.reset();
        Validator::validate_points(points)?;

        #[cfg(feature = "std")]
        self.metrics.start_timer();

        let result = self.brute_force_closest(points);

        #[cfg(feature = "std")]
        self.metrics.stop_timer();

        Ok(result)
    }

    // ========================================================================
    // Divide and Conquer
    // ========================================================================

    /// Solve for `by_x` (x-ordered view) with `by_y` its y-ordered twin.
    fn closest_recursive<T: Float>(&self, by_x: &[Point<T>], by_y: &[Point<T>]) -> Pair<T> {
        let _scope = self.metrics.recursion_scope();

        let n = by_x.len();
        if n <= 3 {
            return self.brute_force_closest(by_x);
        }

        let mid = n / 2;
        let mid_point = by_x[mid];

        // The x-ordered halves are just slices; the y-ordered halves are
        // rebuilt by a filter that keeps y-order intact.
        let mut left_y: Vec<Point<T>> = Vec::with_capacity(mid + 1);
        let mut right_y: Vec<Point<T>> = Vec::with_capacity(n - mid);
        for point in by_y {
            if point.x <= mid_point.x {
                left_y.push(*point);
            } else {
                right_y.push(*point);
            }
        }

        let left_closest = self.closest_recursive(&by_x[..mid], &left_y);
        let right_closest = self.closest_recursive(&by_x[mid..], &right_y);

        self.metrics.increment_comparisons();
        let best = if left_closest.distance() < right_closest.distance() {
            left_closest
        } else {
            right_closest
        };

        match self.closest_in_strip(by_y, &mid_point, best.distance()) {
            Some(strip_best) => strip_best,
            None => best,
        }
    }

    /// Best pair spanning the dividing line, if it beats `min_distance`.
    fn closest_in_strip<T: Float>(
        &self,
        by_y: &[Point<T>],
        mid_point: &Point<T>,
        min_distance: T,
    ) -> Option<Pair<T>> {
        let strip: Vec<Point<T>> = by_y
            .iter()
            .filter(|p| (p.x - mid_point.x).abs() < min_distance)
            .copied()
            .collect();

        let mut closest_distance = min_distance;
        let mut closest: Option<Pair<T>> = None;

        for i in 0..strip.len() {
            let mut j = i + 1;
            // Points further than min_distance below cannot beat it; the
            // packing argument caps this inner loop at a constant.
            while j < strip.len() && strip[j].y - strip[i].y < min_distance {
                let dist = strip[i].distance_to(&strip[j]);
                self.metrics.increment_comparisons();
                if dist < closest_distance {
                    closest_distance = dist;
                    closest = Some(Pair::new(strip[i], strip[j]));
                }
                j += 1;
            }
        }

        closest
    }

    /// Exhaustive scan of `points` (at least 2).
    fn brute_force_closest<T: Float>(&self, points: &[Point<T>]) -> Pair<T> {
        debug_assert!(points.len() >= 2);

        // The first pair seeds the search; charging it one comparison keeps
        // the count equal to the number of candidate pairs examined.
        let mut best = Pair::new(points[0], points[1]);
        self.metrics.increment_comparisons();

        for i in 0..points.len() {
            let start = if i == 0 { 2 } else { i + 1 };
            for j in start..points.len() {
                let dist = points[i].distance_to(&points[j]);
                self.metrics.increment_comparisons();
                if dist < best.distance() {
                    best = Pair::new(points[i], points[j]);
                }
            }
        }

        best
    }
}

impl Metered for ClosestPair {
    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
