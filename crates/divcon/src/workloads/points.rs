//! Synthetic planar point sets.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::geometry::point::Point;
use crate::primitives::rng::UniformSource;

/// Points with both coordinates uniform in `[min, max)`.
pub fn random_points<R: UniformSource>(
    rng: &mut R,
    len: usize,
    min: f64,
    max: f64,
) -> Vec<Point<f64>> {
    debug_assert!(min < max, "empty coordinate range");
    let span = max - min;
    (0..len)
        .map(|_| {
            let x = min + span * rng.next_f64();
            let y = min + span * rng.next_f64();
            Point::new(x, y)
        })
        .collect()
}
