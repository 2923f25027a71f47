//! Injectable uniform random source.
//!
//! ## Purpose
//!
//! This module provides the pseudo-random source consumed by the quicksort
//! pivot selection and the synthetic workload generators. The source is a
//! trait so tests can inject deterministic pivot sequences and reproduce
//! recursion-depth statistics exactly.
//!
//! ## Design notes
//!
//! * **Seedable**: The default generator is a 64-bit LCG; the same seed
//!   replays the same draw sequence across runs.
//! * **Unbiased bounds**: Bounded draws use the widening multiply-shift
//!   reduction instead of modulo.
//! * **No-std**: The generator itself is dependency-free; only entropy
//!   seeding requires `std`.
//!
//! ## Invariants
//!
//! * `next_below(bound)` returns a value in `[0, bound)` for `bound > 0`.
//! * `next_f64()` returns a value in `[0, 1)`.
//!
//! ## Non-goals
//!
//! * This module does not provide cryptographic randomness.
//! * This module does not manage process-wide generator state; callers own
//!   and pass their generators explicitly.

// ============================================================================
// Uniform Source Trait
// ============================================================================

/// Source of uniformly distributed pseudo-random values.
pub trait UniformSource {
    /// Draw the next 64 uniformly distributed bits.
    fn next_u64(&mut self) -> u64;

    /// Draw a value uniformly from `[0, bound)`.
    ///
    /// `bound` must be positive.
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "bound must be positive");
        // Widening multiply-shift maps the 64-bit draw onto [0, bound).
        ((self.next_u64() as u128 * bound as u128) >> 64) as usize
    }

    /// Draw a value uniformly from `[0, 1)`.
    #[inline]
    fn next_f64(&mut self) -> f64 {
        // 53 high bits give the full double mantissa.
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a value uniformly from the inclusive range `[min, max]`.
    #[inline]
    fn next_i64_in(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max, "empty range");
        let span = max.wrapping_sub(min) as u64;
        if span == u64::MAX {
            return self.next_u64() as i64;
        }
        let offset = ((self.next_u64() as u128 * (span as u128 + 1)) >> 64) as u64;
        min.wrapping_add(offset as i64)
    }
}

// ============================================================================
// Default Generator
// ============================================================================

/// Seed used when no entropy source is available.
const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Minimal seedable PRNG.
///
/// A 64-bit LCG with an xorshift output mix. Fast, small, and reproducible;
/// statistical quality is more than adequate for pivot selection and
/// synthetic workloads.
#[derive(Debug, Clone)]
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    /// Create a generator from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a generator seeded from process entropy.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        use std::collections::hash_map::RandomState;
        use std::hash::{BuildHasher, Hasher};

        Self::new(RandomState::new().build_hasher().finish())
    }
}

impl Default for Lcg64 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl UniformSource for Lcg64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        // The raw low bits of an LCG are weak; fold the high bits down.
        self.state ^ (self.state >> 32)
    }
}
