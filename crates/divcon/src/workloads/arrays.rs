//! Synthetic integer arrays with controlled structure.
//!
//! ## Purpose
//!
//! Workload generators for the sorting and selection engines: uniformly
//! random values, already-sorted and reverse-sorted ramps (the adversarial
//! cases for naive pivoting), nearly-sorted data with a tunable disorder
//! fraction, and duplicate-heavy data drawn from a small value pool.
//!
//! ## Invariants
//!
//! * Generated arrays have exactly the requested length.
//! * A seeded generator reproduces the same array for the same arguments.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::DivconError;
use crate::primitives::rng::UniformSource;

// ============================================================================
// Structured Ramps
// ============================================================================

/// Ascending ramp `start, start + 1, ...` of the given length.
pub fn sorted_array(len: usize, start: i64) -> Vec<i64> {
    (0..len).map(|i| start + i as i64).collect()
}

/// Descending ramp ending at `start`.
pub fn reverse_sorted_array(len: usize, start: i64) -> Vec<i64> {
    (0..len).rev().map(|i| start + i as i64).collect()
}

// ============================================================================
// Randomized Arrays
// ============================================================================

/// Uniform draws from the inclusive range `[min, max]`.
pub fn random_array<R: UniformSource>(rng: &mut R, len: usize, min: i64, max: i64) -> Vec<i64> {
    debug_assert!(min <= max, "empty value range");
    (0..len).map(|_| rng.next_i64_in(min, max)).collect()
}

/// Ascending ramp perturbed by `disorder * len` random swaps.
///
/// `disorder` is a fraction in `[0, 1]`; 0 yields a sorted array, 1 an
/// essentially shuffled one.
pub fn nearly_sorted_array<R: UniformSource>(
    rng: &mut R,
    len: usize,
    start: i64,
    disorder: f64,
) -> Result<Vec<i64>, DivconError> {
    Validator::validate_disorder(disorder)?;

    let mut array = sorted_array(len, start);
    if len < 2 {
        return Ok(array);
    }

    let swaps = (len as f64 * disorder) as usize;
    for _ in 0..swaps {
        let a = rng.next_below(len);
        let b = rng.next_below(len);
        array.swap(a, b);
    }

    Ok(array)
}

/// Draws from the pool `[0, unique)`, forcing heavy duplication when the
/// pool is small relative to the length.
pub fn array_with_duplicates<R: UniformSource>(
    rng: &mut R,
    len: usize,
    unique: usize,
) -> Vec<i64> {
    debug_assert!(unique > 0, "value pool must be non-empty");
    (0..len).map(|_| rng.next_below(unique) as i64).collect()
}

// ============================================================================
// Shuffling
// ============================================================================

/// Fisher-Yates shuffle in place.
pub fn shuffle<R: UniformSource, T>(rng: &mut R, data: &mut [T]) {
    for i in (1..data.len()).rev() {
        let j = rng.next_below(i + 1);
        data.swap(i, j);
    }
}
