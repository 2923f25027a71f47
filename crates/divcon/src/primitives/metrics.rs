//! Operation metrics for algorithm instrumentation.
//!
//! ## Purpose
//!
//! This module provides the passive recorder that every algorithm instance
//! owns: exact comparison and assignment counters, recursion-depth tracking
//! with a high-water mark, and a monotonic wall-clock timer (`std` only).
//!
//! ## Design notes
//!
//! * **Interior mutability**: Counters live in `Cell`s so recording methods
//!   take `&self`. A recursion guard can then hold a shared borrow of the
//!   recorder while the algorithm keeps counting through it.
//! * **Single-threaded**: `Cell` makes the recorder `!Sync`; one recorder
//!   belongs to exactly one algorithm instance and one thread.
//! * **Unwind-safe depth**: [`Metrics::recursion_scope`] returns a guard
//!   whose `Drop` performs the depth decrement, so the enter/exit pairing
//!   holds on every exit path, including panics.
//!
//! ## Key concepts
//!
//! * **Comparison**: one element-vs-element or element-vs-pivot test.
//! * **Assignment**: one write into a sequence slot; a swap costs three.
//! * **Recursion depth**: nesting of recursive calls of the same algorithm;
//!   `max_recursion_depth` is the high-water mark.
//!
//! ## Invariants
//!
//! * `total_operations() == comparisons() + assignments()`.
//! * `current_recursion_depth()` returns to its pre-call value after every
//!   recursion scope is dropped, even on unwind.
//! * `reset` restores the freshly-constructed state.
//!
//! ## Non-goals
//!
//! * This module does not aggregate metrics across instances.
//! * This module does not provide thread-safe counters.

// External dependencies
use core::cell::Cell;
use core::fmt::{Display, Formatter, Result as FmtResult};

// Feature-gated dependencies
#[cfg(feature = "std")]
use std::time::{Duration, Instant};

// ============================================================================
// Metrics Recorder
// ============================================================================

/// Passive counters and timer owned by one algorithm instance.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// Element-vs-element and element-vs-pivot comparisons.
    comparisons: Cell<u64>,

    /// Writes into sequence slots; a swap counts as three.
    assignments: Cell<u64>,

    /// Depth of the currently nested recursive calls.
    current_depth: Cell<usize>,

    /// High-water mark of `current_depth`.
    max_depth: Cell<usize>,

    /// Instant recorded by the last `start_timer`, if any.
    #[cfg(feature = "std")]
    started: Cell<Option<Instant>>,

    /// Elapsed time recorded by the last `stop_timer`.
    #[cfg(feature = "std")]
    elapsed: Cell<Duration>,
}

impl Metrics {
    /// Create a zeroed recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all counters and the timer.
    ///
    /// Must be called before reusing a recorder across independent runs;
    /// every algorithm operation calls it on entry.
    pub fn reset(&self) {
        self.comparisons.set(0);
        self.assignments.set(0);
        self.current_depth.set(0);
        self.max_depth.set(0);
        #[cfg(feature = "std")]
        {
            self.started.set(None);
            self.elapsed.set(Duration::ZERO);
        }
    }

    // ========================================================================
    // Operation Counting
    // ========================================================================

    /// Record one comparison.
    #[inline]
    pub fn increment_comparisons(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }

    /// Record one assignment.
    #[inline]
    pub fn increment_assignments(&self) {
        self.assignments.set(self.assignments.get() + 1);
    }

    /// Record `n` comparisons at once.
    #[inline]
    pub fn add_comparisons(&self, n: u64) {
        self.comparisons.set(self.comparisons.get() + n);
    }

    /// Record `n` assignments at once.
    #[inline]
    pub fn add_assignments(&self, n: u64) {
        self.assignments.set(self.assignments.get() + n);
    }

    // ========================================================================
    // Recursion Depth
    // ========================================================================

    /// Enter one level of recursion and update the high-water mark.
    ///
    /// Prefer [`Metrics::recursion_scope`], which pairs the exit
    /// automatically.
    #[inline]
    pub fn enter_recursion(&self) {
        let depth = self.current_depth.get() + 1;
        self.current_depth.set(depth);
        if depth > self.max_depth.get() {
            self.max_depth.set(depth);
        }
    }

    /// Exit one level of recursion.
    #[inline]
    pub fn exit_recursion(&self) {
        self.current_depth.set(self.current_depth.get().saturating_sub(1));
    }

    /// Enter a recursion level guarded by a drop scope.
    ///
    /// The matching [`Metrics::exit_recursion`] runs when the returned guard
    /// drops, on normal return and on unwind alike.
    #[inline]
    #[must_use = "the recursion level exits when the scope is dropped"]
    pub fn recursion_scope(&self) -> RecursionScope<'_> {
        self.enter_recursion();
        RecursionScope { metrics: self }
    }

    // ========================================================================
    // Timing
    // ========================================================================

    /// Record the start instant of a timed run.
    #[cfg(feature = "std")]
    pub fn start_timer(&self) {
        self.started.set(Some(Instant::now()));
    }

    /// Record the elapsed time since the last `start_timer`.
    ///
    /// Calling stop without a prior start leaves the elapsed value untouched
    /// (zero after a reset) rather than failing.
    #[cfg(feature = "std")]
    pub fn stop_timer(&self) {
        if let Some(started) = self.started.get() {
            self.elapsed.set(started.elapsed());
        }
    }

    // ========================================================================
    // Read Accessors
    // ========================================================================

    /// Total comparisons recorded.
    pub fn comparisons(&self) -> u64 {
        self.comparisons.get()
    }

    /// Total assignments recorded.
    pub fn assignments(&self) -> u64 {
        self.assignments.get()
    }

    /// Comparisons plus assignments.
    pub fn total_operations(&self) -> u64 {
        self.comparisons.get() + self.assignments.get()
    }

    /// Depth of the recursion currently in flight (0 between runs).
    pub fn current_recursion_depth(&self) -> usize {
        self.current_depth.get()
    }

    /// Deepest recursion level observed since the last reset.
    pub fn max_recursion_depth(&self) -> usize {
        self.max_depth.get()
    }

    /// Elapsed time between the last start/stop pair.
    #[cfg(feature = "std")]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    /// Elapsed time in whole nanoseconds.
    #[cfg(feature = "std")]
    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.get().as_nanos()
    }

    /// Elapsed time in fractional milliseconds.
    #[cfg(feature = "std")]
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.get().as_secs_f64() * 1_000.0
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for Metrics {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "comparisons={}, assignments={}, total={}, max_depth={}",
            self.comparisons(),
            self.assignments(),
            self.total_operations(),
            self.max_recursion_depth(),
        )?;
        #[cfg(feature = "std")]
        write!(f, ", time={:.3}ms", self.elapsed_millis())?;
        Ok(())
    }
}

// ============================================================================
// Recursion Scope Guard
// ============================================================================

/// Drop guard pairing one `enter_recursion` with one `exit_recursion`.
#[derive(Debug)]
pub struct RecursionScope<'a> {
    metrics: &'a Metrics,
}

impl Drop for RecursionScope<'_> {
    fn drop(&mut self) {
        self.metrics.exit_recursion();
    }
}
