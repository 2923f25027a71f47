//! Hybrid merge sort.
//!
//! ## Purpose
//!
//! Merge sort that delegates small subranges to insertion sort. Stable,
//! O(n log n) in the worst case, and allocation-light: one scratch buffer of
//! `n / 2 + 1` slots is prepared per top-level call and reused across every
//! merge step of that call.
//!
//! ## Key concepts
//!
//! * **Delegation threshold**: subranges of length <= 7 go to insertion
//!   sort, which beats the recursive machinery at that scale.
//! * **Half-copy merge**: only the left half is copied into the scratch
//!   buffer; it merges against the untouched right half directly in place.
//! * **Stability**: the `<=` tie-break on the buffered side keeps equal keys
//!   in their original order.
//!
//! ## Invariants
//!
//! * The scratch buffer never holds meaningful data between merge steps.
//! * Accounting: one comparison per merge step, one assignment per written
//!   element, bulk assignments for the half copy, and the insertion-sort
//!   accounting for delegated subranges.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::insertion;
use crate::api::{Metered, SortAlgorithm};
use crate::primitives::buffer::VecExt;
use crate::primitives::metrics::Metrics;

/// Subranges at or below this length are insertion-sorted.
const INSERTION_SORT_THRESHOLD: usize = 7;

// ============================================================================
// Hybrid Merge Sort
// ============================================================================

/// Instrumented merge sort with insertion-sort delegation.
#[derive(Debug, Default)]
pub struct HybridMergeSort<T> {
    metrics: Metrics,
    buffer: Vec<T>,
}

impl<T: Copy + PartialOrd> HybridMergeSort<T> {
    /// Create a sorter with zeroed metrics and an empty scratch buffer.
    pub fn new() -> Self {
        Self {
            metrics: Metrics::new(),
            buffer: Vec::new(),
        }
    }

    /// Sort `data` ascending in place.
    ///
    /// Empty and single-element input is a no-op. Resets the metrics on
    /// entry, prepares the scratch buffer once, and times the run.
    pub fn sort(&mut self, data: &mut [T]) {
        self.metrics.reset();
        if data.len() <= 1 {
            return;
        }

        // Scratch sized to the largest left half; the fill value is
        // arbitrary, every slot is written before it is read.
        self.buffer.assign(data.len() / 2 + 1, data[0]);

        #[cfg(feature = "std")]
        self.metrics.start_timer();

        let last = data.len() - 1;
        sort_range(&self.metrics, &mut self.buffer, data, 0, last);

        #[cfg(feature = "std")]
        self.metrics.stop_timer();
    }
}

impl<T> Metered for HybridMergeSort<T> {
    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

impl<T: Copy + PartialOrd> SortAlgorithm<T> for HybridMergeSort<T> {
    fn name(&self) -> &'static str {
        "hybrid_merge_sort"
    }

    fn sort(&mut self, data: &mut [T]) {
        HybridMergeSort::sort(self, data);
    }
}

// ============================================================================
// Recursive Split
// ============================================================================

fn sort_range<T: Copy + PartialOrd>(
    metrics: &Metrics,
    buffer: &mut [T],
    data: &mut [T],
    left: usize,
    right: usize,
) {
    if right - left + 1 <= INSERTION_SORT_THRESHOLD {
        insertion::sort_range(metrics, data, left, right);
        return;
    }

    let _scope = metrics.recursion_scope();

    let mid = left + (right - left) / 2;
    sort_range(metrics, buffer, data, left, mid);
    sort_range(metrics, buffer, data, mid + 1, right);
    merge(metrics, buffer, data, left, mid, right);
}

// ============================================================================
// Linear Merge
// ============================================================================

/// Merge the sorted halves `data[left..=mid]` and `data[mid+1..=right]`.
///
/// The left half moves into the scratch buffer (bulk assignments equal to
/// its length) and merges back against the right half in place.
fn merge<T: Copy + PartialOrd>(
    metrics: &Metrics,
    buffer: &mut [T],
    data: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
) {
    let left_size = mid - left + 1;

    buffer[..left_size].copy_from_slice(&data[left..=mid]);
    metrics.add_assignments(left_size as u64);

    let mut i = 0;
    let mut j = mid + 1;
    let mut k = left;

    while i < left_size && j <= right {
        metrics.increment_comparisons();
        // <= keeps equal keys from the left half first: stability.
        if buffer[i] <= data[j] {
            data[k] = buffer[i];
            metrics.increment_assignments();
            i += 1;
        } else {
            data[k] = data[j];
            metrics.increment_assignments();
            j += 1;
        }
        k += 1;
    }

    // Whatever remains of the right half is already in place.
    while i < left_size {
        data[k] = buffer[i];
        metrics.increment_assignments();
        i += 1;
        k += 1;
    }
}
