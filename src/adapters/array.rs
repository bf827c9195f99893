//! Array-method adapter: domain operations on any dense array.
//!
//! ## Purpose
//!
//! This module exposes the crate's transforms as methods on every type that
//! implements [`DenseArray`], so callers can write `spectrum.snip(20)` or
//! `counts.gradient(2)?` without going through the builder.
//!
//! ## Design notes
//!
//! * **Extension trait**: [`NumericalFunctions`] has only provided methods and
//!   a blanket impl, so `NumericalData<T>` and `Vec<T>` get it for free.
//! * **Pure and in-place pairs**: Every transform returns a new array; the
//!   `*_in_place` variant replaces the receiver with that result and returns
//!   `&mut Self` for chaining.
//! * **Unchecked numerics**: Unlike the builder, these methods do not validate
//!   the LLS domain; out-of-domain input yields NaN.
//!
//! ## Invariants
//!
//! * Results have the receiver's length.
//! * `snip(n)` equals `snip_with_orders(1..=n)`.
//!
//! ## Non-goals
//!
//! * This adapter does not log or capture iteration history (use the builder).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::snip::estimate_background;
use crate::math::derivative;
use crate::math::neighbour;
use crate::math::stats;
use crate::math::transform;
use crate::primitives::array::DenseArray;
use crate::primitives::errors::SnipError;

/// Numerical transforms available on every [`DenseArray`].
pub trait NumericalFunctions: DenseArray {
    // ========================================================================
    // Scaling and Thresholding
    // ========================================================================

    /// Multiply every element by `multiplier`.
    fn scale(&self, multiplier: Self::Scalar) -> Self {
        Self::from_vec(transform::scale(self.as_slice(), multiplier))
    }

    /// In-place [`scale`](Self::scale).
    fn scale_in_place(&mut self, multiplier: Self::Scalar) -> &mut Self {
        *self = self.scale(multiplier);
        self
    }

    /// Zero every element below `threshold`.
    fn ramp(&self, threshold: Self::Scalar) -> Self {
        Self::from_vec(transform::ramp(self.as_slice(), threshold))
    }

    /// In-place [`ramp`](Self::ramp).
    fn ramp_in_place(&mut self, threshold: Self::Scalar) -> &mut Self {
        *self = self.ramp(threshold);
        self
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Standard deviation with `ddof` delta degrees of freedom.
    ///
    /// Requires at least 2 points and `ddof < len`.
    fn stddev(&self, ddof: usize) -> Result<Self::Scalar, SnipError> {
        stats::stddev(self.as_slice(), ddof)
    }

    // ========================================================================
    // LLS Compression
    // ========================================================================

    /// `ln(ln(sqrt(x + 1) + 1) + 1)` of every element.
    fn lls(&self) -> Self {
        Self::from_vec(transform::compress(self.as_slice()))
    }

    /// In-place [`lls`](Self::lls).
    fn lls_in_place(&mut self) -> &mut Self {
        *self = self.lls();
        self
    }

    /// `(exp(exp(y) - 1) - 1)^2 - 1` of every element, undoing [`lls`](Self::lls).
    fn inverse_lls(&self) -> Self {
        Self::from_vec(transform::expand(self.as_slice()))
    }

    /// In-place [`inverse_lls`](Self::inverse_lls).
    fn inverse_lls_in_place(&mut self) -> &mut Self {
        *self = self.inverse_lls();
        self
    }

    // ========================================================================
    // Neighbour-Window Operators
    // ========================================================================

    /// Apply `operation(index, order, source, destination)` at every index
    /// whose symmetric neighbours at `order` exist. Other elements are copied.
    fn symmetric_neighbour_op<F>(&self, operation: F, order: usize) -> Self
    where
        F: Fn(usize, usize, &[Self::Scalar], &mut [Self::Scalar]),
    {
        Self::from_vec(neighbour::symmetric_neighbour_op(
            self.as_slice(),
            order,
            operation,
        ))
    }

    /// Numerical gradient applied `order` times. Order 0 is the identity.
    ///
    /// Requires at least 2 points.
    fn gradient(&self, order: usize) -> Result<Self, SnipError> {
        derivative::gradient(self.as_slice(), order).map(Self::from_vec)
    }

    /// In-place [`gradient`](Self::gradient). The receiver is untouched on error.
    fn gradient_in_place(&mut self, order: usize) -> Result<&mut Self, SnipError> {
        *self = self.gradient(order)?;
        Ok(self)
    }

    /// Average of the symmetric neighbours at distance `order`.
    fn midpoint(&self, order: usize) -> Self {
        Self::from_vec(derivative::midpoint(self.as_slice(), order))
    }

    /// In-place [`midpoint`](Self::midpoint).
    fn midpoint_in_place(&mut self, order: usize) -> &mut Self {
        *self = self.midpoint(order);
        self
    }

    // ========================================================================
    // SNIP
    // ========================================================================

    /// SNIP background over an explicit sequence of window orders.
    fn snip_with_orders<I>(&self, orders: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self::from_vec(estimate_background(self.as_slice(), orders))
    }

    /// SNIP background over the increasing window `1..=niterations`.
    fn snip(&self, niterations: usize) -> Self {
        self.snip_with_orders(1..=niterations)
    }

    /// In-place [`snip`](Self::snip).
    fn snip_in_place(&mut self, niterations: usize) -> &mut Self {
        *self = self.snip(niterations);
        self
    }
}

impl<A> NumericalFunctions for A
where
    A: DenseArray,
    A::Scalar: Float,
{
}
