//! Public traits and re-exports.
//!
//! ## Purpose
//!
//! This module defines the two small traits shared by every algorithm
//! engine and gathers the public surface of the crate in one place; the
//! crate-level `prelude` re-exports from here.
//!
//! ## Key concepts
//!
//! * **[`Metered`]**: every engine exposes its metrics recorder through a
//!   uniform read accessor.
//! * **[`SortAlgorithm`]**: the three sorts behind one interface, so driver
//!   loops can iterate algorithms generically.

// Publicly re-exported types
pub use crate::algorithms::closest::ClosestPair;
pub use crate::algorithms::hybrid_merge::HybridMergeSort;
pub use crate::algorithms::insertion::InsertionSort;
pub use crate::algorithms::quick::QuickSort;
pub use crate::algorithms::select::DeterministicSelect;
#[cfg(feature = "std")]
pub use crate::engine::output::RunRecord;
pub use crate::engine::validator::Validator;
pub use crate::geometry::point::{Pair, Point};
pub use crate::primitives::errors::DivconError;
pub use crate::primitives::metrics::{Metrics, RecursionScope};
pub use crate::primitives::rng::{Lcg64, UniformSource};

// ============================================================================
// Traits
// ============================================================================

/// Read access to the metrics recorder of an algorithm instance.
pub trait Metered {
    /// The recorder describing this instance's most recent run.
    fn metrics(&self) -> &Metrics;
}

/// A sorting algorithm that mutates a sequence in place.
///
/// Unifies the three sorts for generic driver loops; the elements are
/// totally-ordered numeric keys, per-sort behavior (thresholds, pivot
/// sources) stays on the concrete types.
pub trait SortAlgorithm<T>: Metered {
    /// Stable identifier for reports.
    fn name(&self) -> &'static str;

    /// Sort `data` ascending in place.
    fn sort(&mut self, data: &mut [T]);
}
