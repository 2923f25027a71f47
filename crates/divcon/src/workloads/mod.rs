//! Layer 5: Workloads
//!
//! This layer generates synthetic inputs for exercising and measuring the
//! algorithm engines: integer arrays with controlled structure (random,
//! sorted, reverse-sorted, nearly sorted, duplicate-heavy) and uniform
//! random point sets. Everything is driven through the injectable
//! [`UniformSource`](crate::primitives::rng::UniformSource), so a seeded
//! generator reproduces workloads exactly.

/// Integer array generation.
pub mod arrays;

/// Planar point-set generation.
pub mod points;
