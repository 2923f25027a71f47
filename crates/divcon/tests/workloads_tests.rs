//! Tests for the synthetic workload generators.
//!
//! These tests verify:
//! - Length, range, and structure guarantees of each generator
//! - Seeded determinism
//! - Disorder-fraction validation
//!
//! ## Test Organization
//!
//! 1. **Ramps** - sorted and reverse-sorted arrays
//! 2. **Randomized Arrays** - range, duplicates, near-sortedness
//! 3. **Shuffle** - permutation property
//! 4. **Points** - coordinate ranges and determinism

use divcon::prelude::*;
use divcon::workloads::{arrays, points};

// ============================================================================
// Ramps
// ============================================================================

/// Test the ascending ramp.
#[test]
fn test_sorted_array() {
    let data = arrays::sorted_array(5, 10);
    assert_eq!(data, vec![10, 11, 12, 13, 14]);
}

/// Test the descending ramp.
#[test]
fn test_reverse_sorted_array() {
    let data = arrays::reverse_sorted_array(5, 10);
    assert_eq!(data, vec![14, 13, 12, 11, 10]);
}

/// Test zero-length ramps.
#[test]
fn test_empty_ramps() {
    assert!(arrays::sorted_array(0, 0).is_empty());
    assert!(arrays::reverse_sorted_array(0, 0).is_empty());
}

// ============================================================================
// Randomized Arrays
// ============================================================================

/// Test length and value range of uniform arrays.
#[test]
fn test_random_array_range() {
    let mut rng = Lcg64::new(1);
    let data = arrays::random_array(&mut rng, 1000, -10, 10);

    assert_eq!(data.len(), 1000);
    assert!(data.iter().all(|&v| (-10..=10).contains(&v)));
}

/// Test that seeded generation reproduces the same array.
#[test]
fn test_random_array_deterministic() {
    let mut a = Lcg64::new(1234);
    let mut b = Lcg64::new(1234);

    assert_eq!(
        arrays::random_array(&mut a, 256, 0, 1000),
        arrays::random_array(&mut b, 256, 0, 1000)
    );
}

/// Test the duplicate-heavy generator stays within its value pool.
#[test]
fn test_array_with_duplicates_pool() {
    let mut rng = Lcg64::new(2);
    let data = arrays::array_with_duplicates(&mut rng, 500, 3);

    assert_eq!(data.len(), 500);
    assert!(data.iter().all(|&v| (0..3).contains(&v)));
}

/// Test that zero disorder yields a fully sorted ramp.
#[test]
fn test_nearly_sorted_zero_disorder() {
    let mut rng = Lcg64::new(3);
    let data = arrays::nearly_sorted_array(&mut rng, 100, 0, 0.0).unwrap();

    assert_eq!(data, arrays::sorted_array(100, 0));
}

/// Test that mild disorder perturbs without changing the multiset.
#[test]
fn test_nearly_sorted_preserves_multiset() {
    let mut rng = Lcg64::new(4);
    let data = arrays::nearly_sorted_array(&mut rng, 200, 0, 0.2).unwrap();

    let mut sorted = data.clone();
    sorted.sort();
    assert_eq!(sorted, arrays::sorted_array(200, 0));
}

/// Test that invalid disorder fractions are rejected.
#[test]
fn test_nearly_sorted_invalid_disorder() {
    let mut rng = Lcg64::new(5);

    assert_eq!(
        arrays::nearly_sorted_array(&mut rng, 10, 0, 1.5),
        Err(DivconError::InvalidDisorder(1.5))
    );
    assert_eq!(
        arrays::nearly_sorted_array(&mut rng, 10, 0, -0.1),
        Err(DivconError::InvalidDisorder(-0.1))
    );
    assert!(arrays::nearly_sorted_array(&mut rng, 10, 0, f64::NAN).is_err());
}

// ============================================================================
// Shuffle
// ============================================================================

/// Test that shuffling permutes without losing elements.
#[test]
fn test_shuffle_is_a_permutation() {
    let mut rng = Lcg64::new(6);
    let mut data = arrays::sorted_array(128, 0);

    arrays::shuffle(&mut rng, &mut data);

    let mut sorted = data.clone();
    sorted.sort();
    assert_eq!(sorted, arrays::sorted_array(128, 0));
    assert_ne!(data, arrays::sorted_array(128, 0), "128 elements should move");
}

// ============================================================================
// Points
// ============================================================================

/// Test coordinate ranges and finiteness of generated points.
#[test]
fn test_random_points_range() {
    let mut rng = Lcg64::new(7);
    let pts = points::random_points(&mut rng, 300, -5.0, 5.0);

    assert_eq!(pts.len(), 300);
    for p in &pts {
        assert!(p.is_finite());
        assert!((-5.0..5.0).contains(&p.x));
        assert!((-5.0..5.0).contains(&p.y));
    }
}

/// Test that seeded point generation is reproducible.
#[test]
fn test_random_points_deterministic() {
    let mut a = Lcg64::new(8);
    let mut b = Lcg64::new(8);

    assert_eq!(
        points::random_points(&mut a, 64, 0.0, 1.0),
        points::random_points(&mut b, 64, 0.0, 1.0)
    );
}
