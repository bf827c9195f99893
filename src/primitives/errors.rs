//! Error types for array transforms and SNIP estimation.
//!
//! ## Purpose
//!
//! This module defines the single error enum shared by every layer of the
//! crate. Precondition failures that would otherwise be assertions (too few
//! points for a gradient, a `ddof` that empties the denominator) and builder
//! validation failures are all reported through [`SnipError`].
//!
//! ## Design notes
//!
//! * **no_std friendly**: `Display` is hand-written against `core::fmt`;
//!   `std::error::Error` is implemented only with the `std` feature.
//! * **Structured variants**: carry the offending values so callers can
//!   report them without string parsing.
//!
//! ## Non-goals
//!
//! * Out-of-range window orders are not errors (boundaries stay unchanged).
//! * NaN/Inf produced by the compression pair on malformed input is not
//!   intercepted by the low-level operators.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Errors reported by array operators and the SNIP pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnipError {
    /// The input array has no elements.
    EmptyInput,

    /// The array is shorter than an operation requires.
    TooFewPoints {
        /// Number of points supplied.
        got: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// Delta degrees of freedom leave no positive denominator.
    InvalidDdof {
        /// Requested delta degrees of freedom.
        ddof: usize,
        /// Length of the array.
        len: usize,
    },

    /// A window order of zero was supplied where a positive order is required.
    InvalidOrder(usize),

    /// An explicit order sequence contained no orders.
    EmptyOrderSequence,

    /// Iteration count outside the accepted range.
    InvalidIterations(usize),

    /// A non-finite or out-of-domain value was encountered.
    InvalidNumericValue(String),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for SnipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input array is empty"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            Self::InvalidDdof { ddof, len } => write!(
                f,
                "Invalid ddof: {} (must be less than array length {})",
                ddof, len
            ),
            Self::InvalidOrder(order) => {
                write!(f, "Invalid window order: {} (must be >= 1)", order)
            }
            Self::EmptyOrderSequence => write!(f, "Order sequence is empty"),
            Self::InvalidIterations(iterations) => write!(
                f,
                "Invalid iterations: {} (must be in [1, 10000])",
                iterations
            ),
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SnipError {}
