//! Tests for the closest-pair engine.
//!
//! These tests verify:
//! - Agreement between divide-and-conquer and the brute-force reference
//! - Concrete geometric scenarios, including duplicate points
//! - Fail-fast validation of undersized and non-finite inputs
//! - Recursion-depth bookkeeping and input immutability
//!
//! ## Test Organization
//!
//! 1. **Concrete Scenarios** - hand-checkable point sets
//! 2. **Cross-Validation** - divide-and-conquer vs brute force
//! 3. **Failures** - too few points, non-finite coordinates
//! 4. **Structure** - depth, immutability, degenerate layouts

use approx::assert_relative_eq;

use divcon::prelude::*;
use divcon::workloads::points::random_points;

// ============================================================================
// Concrete Scenarios
// ============================================================================

/// Test the canonical four-point scenario.
#[test]
fn test_four_point_scenario() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(3.0, 3.0),
        Point::new(1.0, 1.1),
    ];
    let engine = ClosestPair::new();

    let pair = engine.find_closest_pair(&points).unwrap();

    assert_relative_eq!(pair.distance(), 0.1, max_relative = 1e-12);
    assert_eq!(
        pair,
        Pair::new(Point::new(1.0, 1.0), Point::new(1.0, 1.1))
    );
}

/// Test that duplicate points give distance zero.
#[test]
fn test_duplicate_points() {
    let points = vec![
        Point::new(1.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
    ];
    let engine = ClosestPair::new();

    assert_eq!(engine.find_closest_pair(&points).unwrap().distance(), 0.0);
    assert_eq!(
        engine
            .find_closest_pair_brute_force(&points)
            .unwrap()
            .distance(),
        0.0
    );
}

/// Test the minimal two-point input.
#[test]
fn test_two_points() {
    let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
    let engine = ClosestPair::new();

    let pair = engine.find_closest_pair(&points).unwrap();

    assert_relative_eq!(pair.distance(), 5.0);
    assert_eq!(engine.metrics().comparisons(), 1, "one candidate pair");
}

/// Test a pair that spans the dividing line.
///
/// The two closest points straddle the median x, so only the strip scan
/// can find them.
#[test]
fn test_pair_across_dividing_line() {
    let points = vec![
        Point::new(-10.0, 0.0),
        Point::new(-8.0, 4.0),
        Point::new(-0.1, 0.0),
        Point::new(0.1, 0.0),
        Point::new(8.0, 4.0),
        Point::new(10.0, 0.0),
    ];
    let engine = ClosestPair::new();

    let pair = engine.find_closest_pair(&points).unwrap();

    assert_relative_eq!(pair.distance(), 0.2, max_relative = 1e-12);
    assert_eq!(
        pair,
        Pair::new(Point::new(-0.1, 0.0), Point::new(0.1, 0.0))
    );
}

// ============================================================================
// Cross-Validation
// ============================================================================

/// Test that both entry points report the same minimum distance.
///
/// The candidate set of the divide-and-conquer recursion always contains a
/// true minimum pair, and both paths evaluate distances identically, so
/// the reported minimum is equal exactly, not approximately.
#[test]
fn test_matches_brute_force_on_random_sets() {
    let mut rng = Lcg64::new(97);
    let engine = ClosestPair::new();

    for size in [2usize, 3, 4, 5, 8, 16, 50, 100, 300] {
        let points = random_points(&mut rng, size, -1000.0, 1000.0);

        let fast = engine.find_closest_pair(&points).unwrap();
        let brute = engine.find_closest_pair_brute_force(&points).unwrap();

        assert_eq!(
            fast.distance(),
            brute.distance(),
            "size {size}: minimum distances diverge"
        );
    }
}

/// Test clustered duplicates against the brute-force reference.
#[test]
fn test_matches_brute_force_with_duplicates() {
    let mut rng = Lcg64::new(101);
    let engine = ClosestPair::new();

    // Snap coordinates to a coarse grid to force collisions and ties.
    let points: Vec<Point<f64>> = random_points(&mut rng, 200, 0.0, 10.0)
        .into_iter()
        .map(|p| Point::new(p.x.round(), p.y.round()))
        .collect();

    let fast = engine.find_closest_pair(&points).unwrap();
    let brute = engine.find_closest_pair_brute_force(&points).unwrap();

    assert_eq!(fast.distance(), brute.distance());
    assert_eq!(fast.distance(), 0.0, "a coarse grid of 200 points collides");
}

/// Test collinear points sharing one x-coordinate.
#[test]
fn test_vertical_line_layout() {
    let points: Vec<Point<f64>> = (0..40)
        .map(|i| Point::new(5.0, (i * i) as f64))
        .collect();
    let engine = ClosestPair::new();

    let fast = engine.find_closest_pair(&points).unwrap();
    let brute = engine.find_closest_pair_brute_force(&points).unwrap();

    assert_eq!(fast.distance(), brute.distance());
    assert_relative_eq!(fast.distance(), 1.0);
}

// ============================================================================
// Failures
// ============================================================================

/// Test that undersized point sets are rejected.
#[test]
fn test_too_few_points_fail() {
    let engine = ClosestPair::new();

    let empty: Vec<Point<f64>> = vec![];
    assert_eq!(
        engine.find_closest_pair(&empty),
        Err(DivconError::TooFewPoints { got: 0, min: 2 })
    );

    let single = vec![Point::new(1.0, 1.0)];
    assert_eq!(
        engine.find_closest_pair(&single),
        Err(DivconError::TooFewPoints { got: 1, min: 2 })
    );
    assert_eq!(
        engine.find_closest_pair_brute_force(&single),
        Err(DivconError::TooFewPoints { got: 1, min: 2 })
    );
}

/// Test that non-finite coordinates are rejected.
#[test]
fn test_non_finite_points_fail() {
    let engine = ClosestPair::new();
    let points = vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];

    let err = engine.find_closest_pair(&points).unwrap_err();
    assert!(matches!(err, DivconError::NonFinitePoint(_)), "got {err:?}");
}

// ============================================================================
// Structure
// ============================================================================

/// Test that the engine never mutates its input.
#[test]
fn test_input_is_untouched() {
    let mut rng = Lcg64::new(103);
    let points = random_points(&mut rng, 64, 0.0, 100.0);
    let snapshot = points.clone();

    let engine = ClosestPair::new();
    engine.find_closest_pair(&points).unwrap();

    assert_eq!(points, snapshot);
}

/// Test recursion-depth bookkeeping on a large set.
#[test]
fn test_recursion_depth_recorded() {
    let mut rng = Lcg64::new(107);
    let points = random_points(&mut rng, 1024, -50.0, 50.0);

    let engine = ClosestPair::new();
    engine.find_closest_pair(&points).unwrap();

    let depth = engine.metrics().max_recursion_depth();
    assert!(depth >= 2, "1024 points must recurse, got depth {depth}");
    assert!(
        depth <= 12,
        "halving 1024 points cannot nest {depth} levels"
    );
    assert_eq!(engine.metrics().current_recursion_depth(), 0);
    assert_eq!(
        engine.metrics().assignments(),
        0,
        "the engine never writes into caller data"
    );
}
