//! Moment statistics over 1D arrays.
//!
//! ## Purpose
//!
//! This module provides the mean and the `ddof`-adjusted standard deviation
//! used to summarise spectra and SNIP residuals.
//!
//! ## Design notes
//!
//! * **Two-pass**: The deviation is computed around a precomputed mean.
//! * **Checked**: Short arrays and non-positive denominators are reported as
//!   errors instead of producing NaN.
//!
//! ## Invariants
//!
//! * `stddev >= 0` whenever it succeeds on finite input.
//!
//! ## Non-goals
//!
//! * This module does not provide weighted or robust (MAD) variants.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SnipError;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / T::from(values.len()).unwrap())
}

/// Standard deviation with `ddof` delta degrees of freedom.
///
/// # Formula
///
/// ```text
/// sqrt(sum((x_i - mean(x))^2) / (n - ddof))
/// ```
///
/// `ddof = 0` gives the population estimate, `ddof = 1` the sample estimate.
pub fn stddev<T: Float>(values: &[T], ddof: usize) -> Result<T, SnipError> {
    let n = values.len();
    if n < 2 {
        return Err(SnipError::TooFewPoints { got: n, min: 2 });
    }
    if ddof >= n {
        return Err(SnipError::InvalidDdof { ddof, len: n });
    }

    let mu = mean(values).unwrap_or_else(T::zero);
    let sum_sq = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - mu;
        acc + d * d
    });

    Ok((sum_sq / T::from(n - ddof).unwrap()).sqrt())
}
