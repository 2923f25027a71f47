//! Randomized quicksort with bounded recursion depth.
//!
//! ## Purpose
//!
//! In-place quicksort around a uniformly random pivot, with tail elimination
//! on the larger partition: after partitioning, the algorithm recurses only
//! into the smaller side and loops into the larger side. Since a recursive
//! call never covers more than half of its parent's range, recursion depth
//! is O(log n) regardless of pivot luck on any single call.
//!
//! ## Key concepts
//!
//! * **Randomized pivot**: drawn from an injectable [`UniformSource`] and
//!   swapped to the high end before the Lomuto partition.
//! * **Tail elimination**: the larger partition is handled by updating the
//!   loop bounds, not by recursing.
//! * **Depth accounting**: one recursion scope per call wrapping the whole
//!   loop, not one per iteration.
//!
//! ## Invariants
//!
//! * Accounting: one comparison per element scanned during partition, three
//!   assignments per swap.
//! * Identical seeds replay identical pivot sequences and metrics.

// Internal dependencies
use crate::algorithms::{lomuto_partition, swap_counted};
use crate::api::{Metered, SortAlgorithm};
use crate::primitives::metrics::Metrics;
use crate::primitives::rng::{Lcg64, UniformSource};

// ============================================================================
// Randomized Quicksort
// ============================================================================

/// Instrumented randomized quicksort.
///
/// Generic over the pivot source so tests can inject deterministic
/// sequences; defaults to the seedable [`Lcg64`].
#[derive(Debug)]
pub struct QuickSort<R = Lcg64> {
    metrics: Metrics,
    rng: R,
}

impl QuickSort {
    /// Create a sorter with an entropy-seeded pivot source.
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        Self::with_rng(Lcg64::from_entropy())
    }

    /// Create a sorter with the default fixed-seed pivot source.
    #[cfg(not(feature = "std"))]
    pub fn new() -> Self {
        Self::with_rng(Lcg64::default())
    }

    /// Create a sorter with a seeded pivot source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Lcg64::new(seed))
    }
}

#[cfg(feature = "std")]
impl Default for QuickSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: UniformSource> QuickSort<R> {
    /// Create a sorter around an explicit pivot source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            metrics: Metrics::new(),
            rng,
        }
    }

    /// Sort `data` ascending in place.
    ///
    /// Empty and single-element input is a no-op. Resets the metrics on
    /// entry and times the run.
    pub fn sort<T: Copy + PartialOrd>(&mut self, data: &mut [T]) {
        self.metrics.reset();
        if data.len() <= 1 {
            return;
        }

        #[cfg(feature = "std")]
        self.metrics.start_timer();

        let last = data.len() - 1;
        sort_range(&self.metrics, &mut self.rng, data, 0, last);

        #[cfg(feature = "std")]
        self.metrics.stop_timer();
    }
}

impl<R> Metered for QuickSort<R> {
    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

impl<T: Copy + PartialOrd, R: UniformSource> SortAlgorithm<T> for QuickSort<R> {
    fn name(&self) -> &'static str {
        "quick_sort"
    }

    fn sort(&mut self, data: &mut [T]) {
        QuickSort::sort(self, data);
    }
}

// ============================================================================
// Recursion with Tail Elimination
// ============================================================================

fn sort_range<T: Copy + PartialOrd, R: UniformSource>(
    metrics: &Metrics,
    rng: &mut R,
    data: &mut [T],
    mut low: usize,
    mut high: usize,
) {
    let _scope = metrics.recursion_scope();

    while low < high {
        let p = randomized_partition(metrics, rng, data, low, high);

        // Recurse on the smaller partition, iterate on the larger. The
        // strict comparison routes ties right, where the bound update is
        // always safe (p > low holds in that branch).
        if p - low < high - p {
            if p > low {
                sort_range(metrics, rng, data, low, p - 1);
            }
            low = p + 1;
        } else {
            if p < high {
                sort_range(metrics, rng, data, p + 1, high);
            }
            high = p - 1;
        }
    }
}

/// Swap a uniformly chosen element into the high slot, then partition.
fn randomized_partition<T: Copy + PartialOrd, R: UniformSource>(
    metrics: &Metrics,
    rng: &mut R,
    data: &mut [T],
    low: usize,
    high: usize,
) -> usize {
    let pivot_index = low + rng.next_below(high - low + 1);
    swap_counted(metrics, data, pivot_index, high);
    lomuto_partition(metrics, data, low, high)
}
