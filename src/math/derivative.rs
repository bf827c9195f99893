//! Finite-difference gradient and neighbour midpoint operators.
//!
//! ## Purpose
//!
//! This module builds the two derived windowed operators on top of the
//! neighbour-window engine: a central-difference gradient with one-sided
//! end points, and the symmetric midpoint average.
//!
//! ## Design notes
//!
//! * **Gradient**: Interior points use `(s[i+1] - s[i-1]) / 2`; the first and
//!   last points use forward and backward differences without halving.
//!   Higher orders repeat the order-1 step in a loop (constant stack depth).
//! * **Midpoint**: Single pass of `(s[i-k] + s[i+k]) / 2`; boundaries keep
//!   their values.
//!
//! ## Invariants
//!
//! * Gradient requires at least 2 points; order 0 is the identity.
//! * Midpoint of order 0, or of an order too large for the array, returns
//!   the input unchanged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::neighbour::symmetric_neighbour_op;
use crate::primitives::errors::SnipError;

// ============================================================================
// Gradient
// ============================================================================

/// Numerical gradient of `values`, applied `order` times.
///
/// For example, given `[1, 2, 4, 7, 11, 16]`:
///
/// ```text
/// order 1: [1.0,  1.5,  2.5,   3.5,    4.5,   5.0 ]
/// order 2: [0.5,  0.75, 1.0,   1.0,    0.75,  0.5 ]
/// order 3: [0.25, 0.25, 0.125, -0.125, -0.25, -0.25]
/// ```
pub fn gradient<T: Float>(values: &[T], order: usize) -> Result<Vec<T>, SnipError> {
    if values.len() < 2 {
        return Err(SnipError::TooFewPoints {
            got: values.len(),
            min: 2,
        });
    }

    let mut grad = values.to_vec();
    for _ in 0..order {
        grad = gradient_step(&grad);
    }
    Ok(grad)
}

/// Single order-1 gradient pass. `values` must hold at least 2 points.
fn gradient_step<T: Float>(values: &[T]) -> Vec<T> {
    let two = T::from(2.0).unwrap();
    let n = values.len();

    let mut grad = symmetric_neighbour_op(values, 1, |i, _, src, dst| {
        dst[i] = (src[i + 1] - src[i - 1]) / two;
    });

    // End points are left as raw copies by the window pass
    grad[0] = values[1] - values[0];
    grad[n - 1] = values[n - 1] - values[n - 2];
    grad
}

// ============================================================================
// Midpoint
// ============================================================================

/// Average of the symmetric neighbours at distance `order`.
///
/// For example, given `[1, 4, 6, 2, 4, 2, 5]`:
///
/// ```text
/// order 1:  [1, 3.5, 3,   5, 2,   4.5, 5]
/// order 2:  [1, 4,   2.5, 3, 5.5, 2,   5]
/// order 3:  [1, 4,   6,   3, 4,   2,   5]
/// order 4+: [1, 4,   6,   2, 4,   2,   5]
/// ```
pub fn midpoint<T: Float>(values: &[T], order: usize) -> Vec<T> {
    let two = T::from(2.0).unwrap();
    symmetric_neighbour_op(values, order, |i, k, src, dst| {
        dst[i] = (src[i - k] + src[i + k]) / two;
    })
}
