//! Sensitive Nonlinear Iterative Peak-clipping (SNIP) background estimation.
//!
//! ## Purpose
//!
//! This module implements the SNIP estimator for the continuum underneath
//! peaks in counting spectra. Each iteration replaces every interior value by
//! the smaller of itself and the average of its neighbours at the current
//! window order, so peaks are progressively clipped down to the surrounding
//! background while flat regions are left alone.
//!
//! ## Design notes
//!
//! * **Compression**: Clipping runs in LLS space (see `math::transform`) and
//!   the result is expanded back to the original scale.
//! * **Schedules**: Orders come from an [`OrderSchedule`]; the default is the
//!   increasing window `1, 2, ..., n`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Clipped midpoint**: `r[i] = min((s[i-k] + s[i+k]) / 2, s[i])`.
//! * **Window order**: Half-width `k` of the clipping window at one iteration.
//!
//! ## Invariants
//!
//! * Every clipped-midpoint step is elementwise non-increasing.
//! * Boundary elements (`i < k` or `i >= n - k`) are never modified by a step.
//! * Output length equals input length.
//!
//! ## Non-goals
//!
//! * This module does not provide a decreasing-window schedule.
//! * This module does not detect or fit peaks.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::neighbour::symmetric_neighbour_op;
use crate::math::transform::{compress, expand};

// ============================================================================
// Order Schedule
// ============================================================================

/// Sequence of window orders visited by SNIP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderSchedule {
    /// Increasing window `1, 2, ..., n`.
    Increasing(usize),

    /// Explicit sequence of orders, visited in the given order.
    Custom(Vec<usize>),
}

impl Default for OrderSchedule {
    fn default() -> Self {
        Self::Increasing(OrderSchedule::DEFAULT_ITERATIONS)
    }
}

impl OrderSchedule {
    /// Number of increasing-window iterations when none is configured.
    pub const DEFAULT_ITERATIONS: usize = 8;

    /// Materialise the orders of this schedule.
    pub fn orders(&self) -> Vec<usize> {
        match self {
            Self::Increasing(n) => (1..=*n).collect(),
            Self::Custom(orders) => orders.clone(),
        }
    }

    /// Number of iterations this schedule performs.
    pub fn len(&self) -> usize {
        match self {
            Self::Increasing(n) => *n,
            Self::Custom(orders) => orders.len(),
        }
    }

    /// Whether the schedule performs no iterations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// SNIP Steps
// ============================================================================

/// One clipped-midpoint pass at window `order`.
pub fn clipped_midpoint<T: Float>(values: &[T], order: usize) -> Vec<T> {
    let two = T::from(2.0).unwrap();
    symmetric_neighbour_op(values, order, |i, k, src, dst| {
        let mid = (src[i - k] + src[i + k]) / two;
        dst[i] = mid.min(src[i]);
    })
}

/// Clip already-compressed `values` over every order in `orders`.
pub fn clip_compressed<T, I>(values: &[T], orders: I) -> Vec<T>
where
    T: Float,
    I: IntoIterator<Item = usize>,
{
    orders
        .into_iter()
        .fold(values.to_vec(), |working, order| {
            clipped_midpoint(&working, order)
        })
}

/// Estimate the background of `values` with SNIP over `orders`.
///
/// Compresses with LLS, clips once per order in sequence, then expands back.
pub fn estimate_background<T, I>(values: &[T], orders: I) -> Vec<T>
where
    T: Float,
    I: IntoIterator<Item = usize>,
{
    let compressed = compress(values);
    let clipped = clip_compressed(&compressed, orders);
    expand(&clipped)
}
