//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the owned array type, its capability contract and the
//! shared error enum. It has zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **array**: `DenseArray` contract, `NumericalData`, boolean `Mask`
//! - **errors**: Shared error type (`SnipError`)
//! - **file**: File existence checks (std only)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters / Engine (executor, output, validator)
//!   ↓
//! Layer 3: Algorithms (snip)
//!   ↓
//! Layer 2: Math (neighbour, derivative, stats, transform)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Dense numeric arrays.
///
/// Provides:
/// - The `DenseArray` capability trait
/// - The owned `NumericalData` array with elementwise operators
/// - Boolean masks with `all`/`any`/`count`
pub mod array;

/// Shared error types.
///
/// Provides:
/// - Unified `SnipError` enum
/// - Specific error variants
pub mod errors;

/// File existence helpers.
#[cfg(feature = "std")]
pub mod file;
