//! Planar points and distance-carrying pairs.
//!
//! ## Design notes
//!
//! * **Exact equality**: Points compare by exact coordinate equality, no
//!   epsilon. Callers wanting tolerance compare distances themselves.
//! * **Cached distance**: A [`Pair`] computes its Euclidean distance once at
//!   construction; the stored value is authoritative.
//! * **Unordered pairs**: `(p, q)` and `(q, p)` are the same pair when the
//!   distances match.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// ============================================================================
// Point
// ============================================================================

/// Immutable 2-D coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T: Float> Point<T> {
    /// Create a point from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(&self, other: &Point<T>) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Float + Display> Display for Point<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ============================================================================
// Pair
// ============================================================================

/// Two points plus their Euclidean distance, computed once at construction.
#[derive(Debug, Clone, Copy)]
pub struct Pair<T> {
    p1: Point<T>,
    p2: Point<T>,
    distance: T,
}

impl<T: Float> Pair<T> {
    /// Create a pair, computing the distance between its endpoints.
    pub fn new(p1: Point<T>, p2: Point<T>) -> Self {
        let distance = p1.distance_to(&p2);
        Self { p1, p2, distance }
    }

    /// First endpoint.
    pub fn p1(&self) -> Point<T> {
        self.p1
    }

    /// Second endpoint.
    pub fn p2(&self) -> Point<T> {
        self.p2
    }

    /// Euclidean distance between the endpoints.
    pub fn distance(&self) -> T {
        self.distance
    }
}

impl<T: Float> PartialEq for Pair<T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
            && ((self.p1 == other.p1 && self.p2 == other.p2)
                || (self.p1 == other.p2 && self.p2 == other.p1))
    }
}

impl<T: Float + Display> Display for Pair<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Pair{{{}, {}, distance={:.4}}}",
            self.p1, self.p2, self.distance
        )
    }
}
