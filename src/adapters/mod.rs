//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides the ways callers reach the algorithms:
//! - **array**: extension methods on any `DenseArray` (direct, unvalidated)
//!
//! The configured, validated path lives in the API builder, which drives the
//! engine.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters / Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Array-method adapter (`NumericalFunctions`).
pub mod array;
