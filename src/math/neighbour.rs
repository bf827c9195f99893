//! Symmetric neighbour-window transform engine.
//!
//! ## Purpose
//!
//! This module provides the higher-order operation every windowed operator in
//! the crate is built on: for each interior index `i`, a caller-supplied rule
//! writes `destination[i]` from the source values at `i - order` and
//! `i + order`.
//!
//! ## Design notes
//!
//! * **Copy-then-update**: The destination starts as a copy of the source, so
//!   elements outside the update range keep their original values.
//! * **Read-only source**: Rules only see the untouched source; results do not
//!   depend on iteration order and neighbouring updates never contaminate
//!   each other.
//! * **Generics**: Generic over any `Copy` element type.
//!
//! ## Key concepts
//!
//! * **Order**: Distance from an index to its symmetric pair of neighbours.
//! * **Update range**: `[order, len - order)`; empty when `2 * order >= len`.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * `out[..order]` and `out[len - order..]` equal the input.
//!
//! ## Non-goals
//!
//! * This module does not treat an over-large order as an error.
//! * This module does not pad or extrapolate beyond the array ends.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::ops::Range;

/// Indices updated by a window of `order` over `len` elements.
#[inline]
pub fn update_range(len: usize, order: usize) -> Range<usize> {
    order..len.saturating_sub(order)
}

/// Whether a window of `order` leaves an array of `len` elements unchanged.
#[inline]
pub fn is_noop(len: usize, order: usize) -> bool {
    update_range(len, order).is_empty()
}

/// Apply `operation` to every index in the update range of `source`.
///
/// `operation(index, order, source, destination)` must write
/// `destination[index]` using only `source`.
pub fn symmetric_neighbour_op<T, F>(source: &[T], order: usize, operation: F) -> Vec<T>
where
    T: Copy,
    F: Fn(usize, usize, &[T], &mut [T]),
{
    let mut destination = source.to_vec();
    for index in update_range(source.len(), order) {
        operation(index, order, source, &mut destination);
    }
    destination
}
