//! Input validation for SNIP configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for SNIP configuration
//! parameters and input spectra. It checks requirements such as non-empty
//! input, finite values inside the LLS domain and order bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **LLS Domain**: The compression transform needs `x >= -1`.
//! * **Order Bounds**: Window orders must be at least 1.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not treat over-large orders as invalid.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::snip::OrderSchedule;
use crate::primitives::errors::SnipError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for SNIP configuration and input data.
///
/// All methods return `Result<(), SnipError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    /// Upper bound on iterations accepted by the builder.
    pub const MAX_ITERATIONS: usize = 10_000;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate an input spectrum for SNIP.
    ///
    /// Values that a `threshold` ramp will zero are exempt from the LLS
    /// domain check but must still be finite.
    pub fn validate_input<T: Float>(values: &[T], threshold: Option<T>) -> Result<(), SnipError> {
        // Check 1: Non-empty
        if values.is_empty() {
            return Err(SnipError::EmptyInput);
        }

        // Check 2: Finite and, once ramped, inside the LLS domain
        let floor = -T::one();
        for (i, &val) in values.iter().enumerate() {
            let kept = threshold.is_none_or(|t| val >= t);
            if !val.is_finite() || (kept && val < floor) {
                return Err(SnipError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), SnipError> {
        if !val.is_finite() {
            return Err(SnipError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of increasing-window iterations.
    pub fn validate_iterations(iterations: usize) -> Result<(), SnipError> {
        if iterations == 0 || iterations > Self::MAX_ITERATIONS {
            return Err(SnipError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate an explicit sequence of window orders.
    pub fn validate_orders(orders: &[usize]) -> Result<(), SnipError> {
        if orders.is_empty() {
            return Err(SnipError::EmptyOrderSequence);
        }
        if let Some(&bad) = orders.iter().find(|&&o| o == 0) {
            return Err(SnipError::InvalidOrder(bad));
        }
        Ok(())
    }

    /// Validate an order schedule.
    pub fn validate_schedule(schedule: &OrderSchedule) -> Result<(), SnipError> {
        match schedule {
            OrderSchedule::Increasing(n) => Self::validate_iterations(*n),
            OrderSchedule::Custom(orders) => Self::validate_orders(orders),
        }
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SnipError> {
        if let Some(param) = duplicate_param {
            return Err(SnipError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
