//! Straight insertion sort.
//!
//! The small-range workhorse: quadratic in the worst case but with minimal
//! constant factors, it sorts short subranges faster than any recursive
//! scheme. The hybrid merge sort delegates subranges to it and the
//! deterministic selector uses it for groups of five; it is also exposed as
//! an algorithm in its own right.
//!
//! Accounting: one comparison per inner-loop probe, one assignment for the
//! key save, one per shift, and one for the final placement.

// Internal dependencies
use crate::api::{Metered, SortAlgorithm};
use crate::primitives::metrics::Metrics;

// ============================================================================
// Insertion Sort
// ============================================================================

/// Instrumented straight insertion sort.
#[derive(Debug, Default)]
pub struct InsertionSort {
    metrics: Metrics,
}

impl InsertionSort {
    /// Create a sorter with zeroed metrics.
    pub fn new() -> Self {
        Self::default()
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

        sort_range(&self.metrics, data, 0, data.len() - 1);

        #[cfg(feature = "std")]
        self.metrics.stop_timer();
    }
}

impl Metered for InsertionSort {
    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

impl<T: Copy + PartialOrd> SortAlgorithm<T> for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion_sort"
    }

    fn sort(&mut self, data: &mut [T]) {
        InsertionSort::sort(self, data);
    }
}

// ============================================================================
// Shared Range Routine
// ============================================================================

/// Insertion-sort `data[left..=right]` with full operation accounting.
///
/// Shared by the standalone sorter, the hybrid merge sort's small-range
/// delegation, and the selector's median-of-five step.
pub(crate) fn sort_range<T: Copy + PartialOrd>(
    metrics: &Metrics,
    data: &mut [T],
    left: usize,
    right: usize,
) {
    for i in (left + 1)..=right {
        let key = data[i];
        metrics.increment_assignments();
        let mut j = i;

        while j > left {
            metrics.increment_comparisons();
            if data[j - 1] > key {
                data[j] = data[j - 1];
                metrics.increment_assignments();
                j -= 1;
            } else {
                break;
            }
        }
        data[j] = key;
        metrics.increment_assignments();
    }
}
