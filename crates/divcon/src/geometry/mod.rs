//! Layer 2: Geometry
//!
//! # Purpose
//!
//! This layer provides the planar primitives of the closest-pair engine:
//! immutable points and distance-carrying pairs. It depends only on the
//! primitives layer.
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
//! Layer 2: Geometry ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Points and closest pairs.
pub mod point;
