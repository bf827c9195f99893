//! High-level API for SNIP background estimation.
//!
//! ## Purpose
//!
//! This module provides the validated, configurable entry point. It
//! implements a fluent builder for choosing the window schedule and
//! optional outputs, and a processor that fits spectra with it.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are checked in `.build()`, input in `.fit()`.
//! * **Reusable**: A built [`SnipProcessor`] can fit any number of spectra.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SnipBuilder`] via `Snip::new()`.
//! 2. Chain configuration methods (`.iterations()`, `.threshold()`, etc.).
//! 3. Call `.build()` and then `.fit(&y)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::SnipExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::array::NumericalFunctions;
pub use crate::algorithms::snip::OrderSchedule;
pub use crate::engine::executor::SnipConfig;
pub use crate::engine::output::SnipResult;
pub use crate::primitives::array::{DenseArray, Mask, NumericalData};
pub use crate::primitives::errors::SnipError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring SNIP runs.
#[derive(Debug, Clone)]
pub struct SnipBuilder<T> {
    /// Window orders to visit (default: increasing, 8 iterations).
    pub schedule: Option<OrderSchedule>,

    /// Zero values below this before estimating.
    pub threshold: Option<T>,

    /// Return the net signal `y - background`.
    pub return_residuals: Option<bool>,

    /// Return the LLS-space array after each iteration.
    pub return_history: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SnipBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SnipBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            schedule: None,
            threshold: None,
            return_residuals: None,
            return_history: None,
            duplicate_param: None,
        }
    }

    /// Use the increasing window `1, 2, ..., iterations`.
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.schedule.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.schedule = Some(OrderSchedule::Increasing(iterations));
        self
    }

    /// Use an explicit sequence of window orders.
    pub fn orders<I>(mut self, orders: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        if self.schedule.is_some() {
            self.duplicate_param = Some("orders");
        }
        self.schedule = Some(OrderSchedule::Custom(orders.into_iter().collect()));
        self
    }

    /// Zero input values below `threshold` before estimating.
    pub fn threshold(mut self, threshold: T) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = Some(threshold);
        self
    }

    /// Include the net signal `y - background` in the result.
    pub fn return_residuals(mut self) -> Self {
        self.return_residuals = Some(true);
        self
    }

    /// Include the LLS-space working array after every iteration.
    pub fn return_history(mut self) -> Self {
        self.return_history = Some(true);
        self
    }

    /// Validate the configuration and build a processor.
    pub fn build(self) -> Result<SnipProcessor<T>, SnipError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let schedule = self.schedule.unwrap_or_default();
        Validator::validate_schedule(&schedule)?;

        if let Some(t) = self.threshold {
            Validator::validate_scalar(t, "threshold")?;
        }

        Ok(SnipProcessor {
            config: SnipConfig {
                schedule,
                threshold: self.threshold,
                return_history: self.return_history.unwrap_or(false),
            },
            return_residuals: self.return_residuals.unwrap_or(false),
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Validated SNIP processor.
#[derive(Debug, Clone)]
pub struct SnipProcessor<T> {
    config: SnipConfig<T>,
    return_residuals: bool,
}

impl<T: Float> SnipProcessor<T> {
    /// The validated execution configuration.
    pub fn config(&self) -> &SnipConfig<T> {
        &self.config
    }

    /// Estimate the background of `y`.
    pub fn fit(&self, y: &[T]) -> Result<SnipResult<T>, SnipError> {
        Validator::validate_input(y, self.config.threshold)?;

        let out = SnipExecutor::run_with_config(y, &self.config);

        let residuals = self.return_residuals.then(|| {
            out.input
                .iter()
                .zip(out.background.iter())
                .map(|(&orig, &bg)| orig - bg)
                .collect::<Vec<T>>()
        });

        Ok(SnipResult {
            y: out.input,
            background: out.background,
            residuals,
            history: out.history,
            orders_used: out.orders,
            skipped_orders: out.skipped_orders,
        })
    }
}
