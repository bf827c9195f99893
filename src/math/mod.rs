//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure array operators SNIP is composed from:
//! - The symmetric neighbour-window engine
//! - Gradient and midpoint operators built on it
//! - Mean and standard deviation
//! - The LLS compression pair, scaling and ramp
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters / Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Symmetric neighbour-window transform engine.
pub mod neighbour;

/// Gradient and midpoint operators.
pub mod derivative;

/// Mean and standard deviation.
pub mod stats;

/// LLS compression pair, scaling and ramp.
pub mod transform;
