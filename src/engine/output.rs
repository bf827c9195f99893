//! Output types for SNIP background estimation.
//!
//! ## Purpose
//!
//! This module defines [`SnipResult`], the container returned by a configured
//! SNIP run: the (optionally thresholded) input, the background estimate,
//! and the optional net signal and per-iteration history.
//!
//! ## Design notes
//!
//! * Optional outputs use `Option<...>` and are only populated on request.
//! * Implements `Display` with a summary block and a column table that
//!   elides the middle rows of long spectra.
//!
//! ## Invariants
//!
//! * `y`, `background` and `residuals` share the input length.
//! * `history` holds one entry per visited order.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond simple queries.
//! * This module does not provide serialization.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Result of a configured SNIP run.
#[derive(Debug, Clone, PartialEq)]
pub struct SnipResult<T> {
    /// Input values after the optional threshold ramp.
    pub y: Vec<T>,

    /// Estimated background in the original scale.
    pub background: Vec<T>,

    /// Net signal `y - background`.
    pub residuals: Option<Vec<T>>,

    /// LLS-space working array after each iteration.
    pub history: Option<Vec<Vec<T>>>,

    /// Window orders visited, in sequence.
    pub orders_used: Vec<usize>,

    /// Number of orders too large to update any element.
    pub skipped_orders: usize,
}

impl<T: Float> SnipResult<T> {
    /// Number of data points.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Whether the result holds no data points.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Number of iterations performed (including skipped orders).
    pub fn iterations(&self) -> usize {
        self.orders_used.len()
    }

    /// Total counts above the background, or `None` if residuals were not requested.
    pub fn net_area(&self) -> Option<T> {
        self.residuals
            .as_ref()
            .map(|r| r.iter().fold(T::zero(), |acc, &v| acc + v))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for SnipResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.y.len())?;
        writeln!(f, "  Iterations: {}", self.orders_used.len())?;
        if let (Some(first), Some(last)) = (self.orders_used.first(), self.orders_used.last()) {
            writeln!(f, "  Orders: {} .. {}", first, last)?;
        }
        if self.skipped_orders > 0 {
            writeln!(f, "  Skipped orders: {}", self.skipped_orders)?;
        }
        writeln!(f)?;

        writeln!(f, "Background:")?;

        let has_resid = self.residuals.is_some();

        write!(f, "{:>8} {:>12} {:>12}", "Index", "Y", "Background")?;
        if has_resid {
            write!(f, " {:>12}", "Net")?;
        }
        writeln!(f)?;

        let line_width = 34 + if has_resid { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.y.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(
                f,
                "{:>8} {:>12.4} {:>12.4}",
                idx, self.y[idx], self.background[idx]
            )?;

            if let Some(resid) = &self.residuals {
                write!(f, " {:>12.4}", resid[idx])?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
