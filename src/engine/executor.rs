//! Execution engine for configured SNIP runs.
//!
//! ## Purpose
//!
//! This module drives a full SNIP pass from a validated configuration:
//! optional thresholding, LLS compression, the clipped-midpoint iteration
//! loop, and expansion back to the original scale. It records which orders
//! actually changed anything and, on request, every intermediate state.
//!
//! ## Design notes
//!
//! * **Step-wise**: Iterates `clipped_midpoint` directly instead of calling the
//!   one-shot estimator so each iteration can be logged and captured.
//! * **Logging**: Emits `debug` summaries and `trace` per-iteration records
//!   through the `log` facade; no logger is installed here.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Captured history has one entry per visited order, each in LLS space.
//! * History entries are elementwise non-increasing from one to the next.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not format results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::snip::{OrderSchedule, clipped_midpoint};
use crate::math::neighbour::is_noop;
use crate::math::transform::{compress, expand, ramp};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a single SNIP execution.
#[derive(Debug, Clone, PartialEq)]
pub struct SnipConfig<T> {
    /// Window orders to visit.
    pub schedule: OrderSchedule,

    /// Values below this are zeroed before compression.
    pub threshold: Option<T>,

    /// Capture the compressed working array after every iteration.
    pub return_history: bool,
}

impl<T> Default for SnipConfig<T> {
    fn default() -> Self {
        Self {
            schedule: OrderSchedule::default(),
            threshold: None,
            return_history: false,
        }
    }
}

/// Raw output of an execution, before result assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Input after the optional threshold ramp.
    pub input: Vec<T>,

    /// Background estimate in the original scale.
    pub background: Vec<T>,

    /// Compressed working array after each iteration.
    pub history: Option<Vec<Vec<T>>>,

    /// Orders visited, in sequence.
    pub orders: Vec<usize>,

    /// Orders whose window did not fit inside the array.
    pub skipped_orders: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs SNIP according to a [`SnipConfig`].
pub struct SnipExecutor;

impl SnipExecutor {
    /// Execute SNIP over `values` with `config`.
    pub fn run_with_config<T: Float>(values: &[T], config: &SnipConfig<T>) -> ExecutorOutput<T> {
        let n = values.len();
        let orders = config.schedule.orders();

        debug!(
            "snip: {} points, {} iterations, threshold={}",
            n,
            orders.len(),
            config.threshold.is_some()
        );

        let input = match config.threshold {
            Some(t) => ramp(values, t),
            None => values.to_vec(),
        };

        let mut working = compress(&input);
        let mut history = config
            .return_history
            .then(|| Vec::with_capacity(orders.len()));
        let mut skipped_orders = 0;

        for (iteration, &order) in orders.iter().enumerate() {
            if is_noop(n, order) {
                // Boundary policy: nothing to update, keep the working array as is
                skipped_orders += 1;
                debug!("snip: order {} exceeds half-length of {} points", order, n);
            } else {
                working = clipped_midpoint(&working, order);
                trace!("snip: iteration {} at order {}", iteration + 1, order);
            }

            if let Some(h) = history.as_mut() {
                h.push(working.clone());
            }
        }

        let background = expand(&working);

        debug!(
            "snip: done, {} of {} orders skipped",
            skipped_orders,
            orders.len()
        );

        ExecutorOutput {
            input,
            background,
            history,
            orders,
            skipped_orders,
        }
    }
}
