//! # divcon: Instrumented Divide-and-Conquer Algorithms for Rust
//!
//! Classical array and geometric divide-and-conquer algorithms, each
//! instrumented with exact operation counters and recursion-depth tracking:
//!
//! * **Hybrid merge sort** that delegates small subranges to insertion sort.
//! * **Randomized quicksort** with tail elimination on the larger partition,
//!   bounding recursion depth to O(log n) with high probability.
//! * **Deterministic selection** via median-of-medians, worst-case linear time.
//! * **Closest pair of points** by divide and conquer, with an independent
//!   brute-force reference for cross-validation.
//! * **Straight insertion sort**, the shared small-range workhorse, also
//!   exposed as an algorithm in its own right.
//!
//! Every algorithm instance owns a [`Metrics`](primitives::metrics::Metrics)
//! recorder that counts element comparisons, slot assignments (a swap is
//! three assignments), and the high-water mark of recursion depth, alongside
//! a monotonic wall-clock timer (with the `std` feature). Counters are exact
//! and reproducible: the quicksort pivot source is injectable, so a seeded
//! generator replays identical pivot sequences and identical metrics.
//!
//! ## Quick Start
//!
//! ```rust
//! use divcon::prelude::*;
//!
//! let mut data = vec![5, 2, 4, 6, 1, 3];
//!
//! let mut sorter = HybridMergeSort::new();
//! sorter.sort(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
//! println!("{}", sorter.metrics());
//! ```
//!
//! Selection and the geometric engine are fallible and validate their
//! arguments before touching any data:
//!
//! ```rust
//! use divcon::prelude::*;
//!
//! let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! let mut selector = DeterministicSelect::new();
//! assert_eq!(selector.select(&mut data, 0)?, 1);
//!
//! let points: Vec<Point<f64>> = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(3.0, 3.0),
//!     Point::new(1.0, 1.1),
//! ];
//! let engine = ClosestPair::new();
//! let pair = engine.find_closest_pair(&points)?;
//! assert!((pair.distance() - 0.1).abs() < 1e-9);
//! # Result::<(), DivconError>::Ok(())
//! ```
//!
//! ## Reproducible pivots
//!
//! ```rust
//! use divcon::prelude::*;
//!
//! let mut a = vec![9, 7, 5, 3, 1];
//! let mut b = a.clone();
//!
//! let mut first = QuickSort::seeded(42);
//! let mut second = QuickSort::seeded(42);
//! first.sort(&mut a);
//! second.sort(&mut b);
//!
//! assert_eq!(first.metrics().comparisons(), second.metrics().comparisons());
//! ```
//!
//! ## Thread model
//!
//! Instances are deliberately single-threaded: the counters use interior
//! mutability and are `!Sync`. Callers wanting parallel runs construct one
//! instance per thread or per call.
//!
//! ## no_std
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency; the wall-clock timer
//! and the run-record reporting are `std`-only.
//!
//! ```toml
//! [dependencies]
//! divcon = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - metrics, errors, RNG, and scratch buffers.
pub mod primitives;

// Layer 2: Geometry - points and distance-carrying pairs.
pub mod geometry;

// Layer 3: Engine - argument validation and run reporting.
pub mod engine;

// Layer 4: Algorithms - the instrumented algorithm engines.
pub mod algorithms;

// Layer 5: Workloads - synthetic array and point generation.
pub mod workloads;

// Public traits and re-exports.
pub mod api;

// Standard divcon prelude.
pub mod prelude {
    pub use crate::api::{
        ClosestPair, DeterministicSelect, DivconError, HybridMergeSort, InsertionSort, Lcg64,
        Metered, Metrics, Pair, Point, QuickSort, SortAlgorithm, UniformSource,
    };
}
