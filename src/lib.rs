//! # SNIP: Sensitive Nonlinear Iterative Peak-clipping for Rust
//!
//! Background estimation and neighbour-window array transforms for
//! one-dimensional counting spectra (gamma-ray, X-ray, mass spectra).
//!
//! ## What is SNIP?
//!
//! SNIP estimates the smooth continuum underneath the peaks of a spectrum.
//! The data are first compressed with the log-log-square-root (LLS)
//! transform, which stabilises counting-statistics variance. Then, for a
//! growing window half-width `k = 1, 2, ..., n`, every interior channel is
//! replaced by the smaller of itself and the mean of its neighbours at
//! distance `k`. Peaks are clipped down toward the surrounding baseline while
//! flat regions stay put. Finally the result is expanded back to the
//! original scale.
//!
//! **Properties:**
//! - Values only ever decrease from one iteration to the next
//! - The first and last `k` channels are never modified at order `k`
//! - The number of iterations sets the widest peak that gets removed
//!
//! ## Quick Start
//!
//! ### Array methods
//!
//! Every `DenseArray` (including `NumericalData<T>` and `Vec<T>`) gets the
//! transforms as methods via [`prelude::NumericalFunctions`]:
//!
//! ```rust
//! use snip_rs::prelude::*;
//!
//! let data = NumericalData::new(vec![1.0, 2.0, 4.0, 7.0, 11.0, 16.0]);
//!
//! let grad = data.gradient(1)?;
//! assert_eq!(grad.into_vec(), vec![1.0, 1.5, 2.5, 3.5, 4.5, 5.0]);
//!
//! let mid = data.midpoint(1);
//! assert_eq!(mid[1], 2.5);
//!
//! let background = data.snip(3);
//! assert_eq!(background.len(), 6);
//! # Result::<(), SnipError>::Ok(())
//! ```
//!
//! ### Configured run
//!
//! The builder validates its parameters and the input, logs through the
//! `log` facade and can return the net signal and per-iteration history:
//!
//! ```rust
//! use snip_rs::prelude::*;
//!
//! // Flat background of 10 counts with a peak in the middle
//! let mut y = vec![10.0; 41];
//! for (i, v) in y.iter_mut().enumerate().skip(17).take(7) {
//!     let d = i as f64 - 20.0;
//!     *v += 200.0 * (-d * d / 4.0).exp();
//! }
//!
//! let model = Snip::new()
//!     .iterations(10)      // Windows 1..=10
//!     .threshold(0.0)      // Zero negative channels first
//!     .return_residuals()  // Net peak signal
//!     .build()?;
//!
//! let result = model.fit(&y)?;
//!
//! assert!((result.background[20] - 10.0).abs() < 1e-6);
//! println!("{}", result);
//! # Result::<(), SnipError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<_, SnipError>`:
//!
//! - `gradient` and `stddev` need at least 2 points
//! - `stddev` needs `ddof < len`
//! - `build` rejects zero iterations, zero orders and repeated parameters
//! - `fit` rejects empty input, non-finite values and values `< -1`
//!
//! Window orders too large for the array are not errors: the affected
//! elements keep their values.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! snip-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Ryan, C. G. et al. (1988). "SNIP, a statistics-sensitive background
//!   treatment for the quantitative analysis of PIXE spectra in geoscience applications"
//! - Morháč, M. et al. (1997). "Background elimination methods for
//!   multidimensional coincidence gamma-ray spectra"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the owned array type, its capability contract, the boolean
// mask and the shared error enum.
mod primitives;

// Layer 2: Math - pure array operators.
//
// Contains the neighbour-window engine, gradient and midpoint,
// moment statistics and the LLS compression pair.
mod math;

// Layer 3: Algorithms - SNIP.
//
// Contains the clipped-midpoint step and order schedules.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains validation, the logged iteration loop and result assembly.
mod engine;

// Layer 4: Adapters - array-method access to the algorithms.
mod adapters;

// High-level fluent API for configured SNIP runs.
mod api;

// ============================================================================
// Public Surface
// ============================================================================

pub use api::{
    DenseArray, Mask, NumericalData, NumericalFunctions, OrderSchedule, SnipBuilder, SnipConfig,
    SnipError, SnipProcessor, SnipResult,
};

/// File existence checks for loaders built on this crate.
#[cfg(feature = "std")]
pub mod file {
    pub use crate::primitives::file::{file_exists, file_exists_quick};
}

// ============================================================================
// Prelude
// ============================================================================

/// Standard SNIP prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use snip_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        DenseArray, Mask, NumericalData, NumericalFunctions, OrderSchedule,
        OrderSchedule::{Custom, Increasing},
        SnipBuilder as Snip, SnipError, SnipProcessor, SnipResult,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
