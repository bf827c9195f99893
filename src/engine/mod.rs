//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates configured SNIP runs:
//! - Validation of parameters and input spectra
//! - Step-wise execution with logging and history capture
//! - Result assembly and formatting
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

/// SNIP execution loop.
pub mod executor;

/// Result types.
pub mod output;

/// Input and parameter validation.
pub mod validator;
