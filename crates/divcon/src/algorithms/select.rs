//! Deterministic order-statistic selection.
//!
//! ## Purpose
//!
//! Median-of-medians selection: returns the element that would occupy a
//! given 0-based rank if the sequence were sorted, in worst-case linear
//! time. The sequence is partitioned in place as a side effect; callers
//! needing the original order must copy first.
//!
//! ## Key concepts
//!
//! * **Provably good pivot**: the subrange splits into groups of five, each
//!   group's median comes from insertion-sorting a copy in the reusable
//!   group buffer, and the median of those medians is found by recursing
//!   into this same selection routine. The resulting pivot bounds the work
//!   by the T(n) = T(n/5) + T(7n/10) + O(n) recurrence.
//! * **Pivot placement**: the chosen median value is located by a
//!   first-occurrence left-to-right scan and swapped to the high slot
//!   before a `<=` Lomuto partition.
//!
//! ## Invariants
//!
//! * Validation happens before any mutation; a failed call leaves the
//!   sequence untouched.
//! * Every recursive call, including the inner median-of-medians recursion,
//!   is wrapped in a recursion scope.
//!
//! ## Non-goals
//!
//! * Element identity on duplicate values: any element equal to the chosen
//!   pivot value may be moved by the placement scan. Only the returned
//!   value is contractual.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::{insertion, lomuto_partition, swap_counted};
use crate::api::Metered;
use crate::engine::validator::Validator;
use crate::primitives::buffer::Slot;
use crate::primitives::errors::DivconError;
use crate::primitives::metrics::Metrics;

/// Group width for the median-of-medians pivot.
const GROUP: usize = 5;

// ============================================================================
// Deterministic Selector
// ============================================================================

/// Instrumented median-of-medians selection.
#[derive(Debug)]
pub struct DeterministicSelect<T> {
    metrics: Metrics,
    group: Slot<T>,
}

impl<T: Copy + PartialOrd> DeterministicSelect<T> {
    /// Create a selector with zeroed metrics and a group-of-five scratch.
    pub fn new() -> Self {
        Self {
            metrics: Metrics::new(),
            group: Slot::new(GROUP),
        }
    }

    /// Return the element with 0-based rank `k` in ascending order.
    ///
    /// Fails with [`DivconError::EmptyInput`] on an empty sequence and
    /// [`DivconError::RankOutOfRange`] when `k >= data.len()`, in both cases
    /// before any mutation. On success `data` has been partitioned around
    /// the selection pivots.
    pub fn select(&mut self, data: &mut [T], k: usize) -> Result<T, DivconError> {
        self.metrics.reset();
        Validator::validate_selection(data.len(), k)?;

        #[cfg(feature = "std")]
        self.metrics.start_timer();

        let last = data.len() - 1;
        let Self { metrics, group } = self;
        let result = select_range(metrics, group, data, 0, last, k);

        #[cfg(feature = "std")]
        self.metrics.stop_timer();

        Ok(result)
    }
}

impl<T: Copy + PartialOrd> Default for DeterministicSelect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Metered for DeterministicSelect<T> {
    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

// ============================================================================
// Recursive Selection
// ============================================================================

fn select_range<T: Copy + PartialOrd>(
    metrics: &Metrics,
    group: &mut Slot<T>,
    data: &mut [T],
    left: usize,
    right: usize,
    k: usize,
) -> T {
    let _scope = metrics.recursion_scope();

    if left == right {
        return data[left];
    }

    let p = median_of_medians_partition(metrics, group, data, left, right);

    if k == p {
        data[k]
    } else if k < p {
        select_range(metrics, group, data, left, p - 1, k)
    } else {
        select_range(metrics, group, data, p + 1, right, k)
    }
}

/// Partition `data[left..=right]` around the median-of-medians pivot.
///
/// Locates the pivot value by a first-occurrence left-to-right scan (one
/// comparison per probe), swaps it to the high slot, and runs the Lomuto
/// partition. Returns the pivot's final index.
fn median_of_medians_partition<T: Copy + PartialOrd>(
    metrics: &Metrics,
    group: &mut Slot<T>,
    data: &mut [T],
    left: usize,
    right: usize,
) -> usize {
    let pivot_value = median_of_medians(metrics, group, data, left, right);

    for i in left..=right {
        metrics.increment_comparisons();
        if data[i] == pivot_value {
            swap_counted(metrics, data, i, right);
            break;
        }
    }

    lomuto_partition(metrics, data, left, right)
}

/// Median of the group medians of `data[left..=right]`.
///
/// Reads the subrange without mutating it; the medians recursion runs on
/// its own per-level vector.
fn median_of_medians<T: Copy + PartialOrd>(
    metrics: &Metrics,
    group: &mut Slot<T>,
    data: &[T],
    left: usize,
    right: usize,
) -> T {
    let n = right - left + 1;
    if n <= GROUP {
        return median_of_group(metrics, group, data, left, right);
    }

    let num_groups = (n + GROUP - 1) / GROUP;
    let mut medians: Vec<T> = Vec::with_capacity(num_groups);

    for g in 0..num_groups {
        let group_left = left + g * GROUP;
        let group_right = (group_left + GROUP - 1).min(right);
        medians.push(median_of_group(metrics, group, data, group_left, group_right));
    }

    let last = medians.len() - 1;
    let median_rank = medians.len() / 2;
    select_range(metrics, group, &mut medians, 0, last, median_rank)
}

/// Median of `data[left..=right]` (1 to 5 elements) via the group scratch.
///
/// The group buffer is logically reset by overwriting; the source subrange
/// is left untouched.
fn median_of_group<T: Copy + PartialOrd>(
    metrics: &Metrics,
    group: &mut Slot<T>,
    data: &[T],
    left: usize,
    right: usize,
) -> T {
    group.clear();
    group.extend_from_slice(&data[left..=right]);

    let last = group.len() - 1;
    insertion::sort_range(metrics, group, 0, last);

    group[group.len() / 2]
}
