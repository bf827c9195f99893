//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer composes the math operators into the SNIP background
//! estimator:
//! - Clipped-midpoint iteration in LLS space
//! - Window order schedules
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters / Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// SNIP background estimation.
pub mod snip;
