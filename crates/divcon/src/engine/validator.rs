//! Input validation for the fallible operations.
//!
//! ## Purpose
//!
//! This module centralizes the argument checks of the selection, the
//! closest-pair, and the workload-generation entry points. Checks run
//! before any mutation or allocation, so a failed call has no observable
//! side effect.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs.
//! * This module does not perform the algorithms themselves.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::geometry::point::Point;
use crate::primitives::errors::DivconError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for algorithm arguments.
///
/// Provides static methods returning `Result<(), DivconError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the arguments of an order-statistic selection.
    pub fn validate_selection(len: usize, k: usize) -> Result<(), DivconError> {
        // Check 1: Non-empty sequence
        if len == 0 {
            return Err(DivconError::EmptyInput);
        }

        // Check 2: Rank within bounds
        if k >= len {
            return Err(DivconError::RankOutOfRange { k, len });
        }

        Ok(())
    }

    /// Validate a point set for the closest-pair engine.
    pub fn validate_points<T: Float>(points: &[Point<T>]) -> Result<(), DivconError> {
        // Check 1: Enough points for a pair
        if points.len() < 2 {
            return Err(DivconError::TooFewPoints {
                got: points.len(),
                min: 2,
            });
        }

        // Check 2: All coordinates finite
        for (i, point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(DivconError::NonFinitePoint(format!(
                    "points[{}]=({}, {})",
                    i,
                    point.x.to_f64().unwrap_or(f64::NAN),
                    point.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate the disorder fraction of nearly-sorted generation.
    pub fn validate_disorder(disorder: f64) -> Result<(), DivconError> {
        if !disorder.is_finite() || !(0.0..=1.0).contains(&disorder) {
            return Err(DivconError::InvalidDisorder(disorder));
        }
        Ok(())
    }
}
