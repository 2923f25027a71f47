//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer hosts the concerns shared across algorithm engines: fail-fast
//! argument validation for the fallible operations and run-record snapshots
//! for reporting measured runs.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Workloads
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Geometry
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;

/// Run-record snapshots for measured runs.
#[cfg(feature = "std")]
pub mod output;
