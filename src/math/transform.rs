//! Elementwise value transforms: LLS compression pair, scaling and ramp.
//!
//! ## Purpose
//!
//! Counting-statistics data has variance that grows with its magnitude. The
//! log-log-square-root (LLS) transform compresses the dynamic range before
//! SNIP clipping so peaks and background are treated alike; the inverse
//! restores the original scale afterwards.
//!
//! ## Design notes
//!
//! * **Forward**: `LLS(x) = ln(ln(sqrt(x + 1) + 1) + 1)`.
//! * **Inverse**: `(exp(exp(y) - 1) - 1)^2 - 1`, the exact algebraic inverse
//!   of the forward map.
//! * **Unchecked**: Values below `-1` produce NaN, which propagates unchanged.
//!
//! ## Invariants
//!
//! * `inverse_lls(lls(x)) == x` up to rounding for every `x >= -1`.
//! * `lls` is strictly increasing on `(-1, inf)`, so it preserves ordering.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// LLS Compression Pair
// ============================================================================

/// Forward LLS transform of a single value.
#[inline]
pub fn lls<T: Float>(x: T) -> T {
    let one = T::one();
    (((x + one).sqrt() + one).ln() + one).ln()
}

/// Inverse LLS transform of a single value.
#[inline]
pub fn inverse_lls<T: Float>(y: T) -> T {
    let one = T::one();
    let root = (y.exp() - one).exp() - one;
    root * root - one
}

/// Forward LLS transform of every element.
pub fn compress<T: Float>(values: &[T]) -> Vec<T> {
    values.iter().map(|&v| lls(v)).collect()
}

/// Inverse LLS transform of every element.
pub fn expand<T: Float>(values: &[T]) -> Vec<T> {
    values.iter().map(|&v| inverse_lls(v)).collect()
}

// ============================================================================
// Scaling and Thresholding
// ============================================================================

/// Multiply every element by `multiplier`.
pub fn scale<T: Float>(values: &[T], multiplier: T) -> Vec<T> {
    values.iter().map(|&v| v * multiplier).collect()
}

/// Keep elements `>= threshold` and zero the rest.
pub fn ramp<T: Float>(values: &[T], threshold: T) -> Vec<T> {
    values
        .iter()
        .map(|&v| if v >= threshold { v } else { T::zero() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lls_of_zero_is_log_of_log_two_plus_one() {
        let expected = (2.0f64.ln() + 1.0).ln();
        assert!((lls(0.0f64) - expected).abs() < 1e-15);
    }

    #[test]
    fn ramp_keeps_threshold_value() {
        assert_eq!(ramp(&[-1.0, 0.0, 0.5, 2.0], 0.5), vec![0.0, 0.0, 0.5, 2.0]);
    }
}
