//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions shared by every algorithm
//! engine: operation metrics, error types, the uniform random source, and
//! reusable scratch buffers. It has zero internal dependencies within the
//! crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Workloads
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Geometry
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Operation counters, recursion-depth tracking, and timing.
pub mod metrics;

/// Injectable uniform random source.
pub mod rng;

/// Scratch buffer management.
pub mod buffer;
