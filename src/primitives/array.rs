//! Dense 1D numeric arrays and the capability contract consumed by the transforms.
//!
//! ## Purpose
//!
//! This module provides the owned array type [`NumericalData`] that every
//! transform in the crate produces, together with the [`DenseArray`] trait
//! describing the minimal capability set the transforms rely on. Any type
//! implementing [`DenseArray`] (including plain `Vec<T>`) gets the full set of
//! domain operations through the extension trait in the adapters layer.
//!
//! ## Design notes
//!
//! * **Composition**: `NumericalData` owns a `Vec<T>` and exposes a fixed set of
//!   elementwise, mapping and reduction operations rather than the whole vector API.
//! * **Operators**: `+ - * /` are implemented against scalars and same-length
//!   arrays, by value and by reference.
//! * **Generics**: Generic over `Float` types (f32, f64).
//!
//! ## Invariants
//!
//! * Elementwise array operators require equal lengths; a mismatch panics,
//!   like out-of-bounds indexing.
//! * Every mapping operation preserves length and order.
//!
//! ## Non-goals
//!
//! * No multi-dimensional shapes, broadcasting or views.
//! * No NaN handling beyond what the floating-point type produces.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use num_traits::Float;

// ============================================================================
// Capability Contract
// ============================================================================

/// Capability set required by the neighbour-window transforms and SNIP.
///
/// Implementors are ordered, indexable, fixed-length sequences of a floating
/// scalar that can be rebuilt from an owned buffer.
pub trait DenseArray: Clone + Index<usize, Output = Self::Scalar> + IndexMut<usize> {
    /// Element type.
    type Scalar: Float;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the array holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the elements as a contiguous slice.
    fn as_slice(&self) -> &[Self::Scalar];

    /// Borrow the elements as a mutable contiguous slice.
    fn as_mut_slice(&mut self) -> &mut [Self::Scalar];

    /// Build an array that owns `values`.
    fn from_vec(values: Vec<Self::Scalar>) -> Self;

    /// Copy the elements into a new vector.
    fn to_vec(&self) -> Vec<Self::Scalar> {
        self.as_slice().to_vec()
    }
}

impl<T: Float> DenseArray for Vec<T> {
    type Scalar = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        Vec::as_mut_slice(self)
    }

    #[inline]
    fn from_vec(values: Vec<T>) -> Self {
        values
    }
}

// ============================================================================
// Boolean Mask
// ============================================================================

/// Boolean array produced by elementwise comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mask {
    values: Vec<bool>,
}

impl Mask {
    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mask is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when every entry is set (vacuously true when empty).
    pub fn all(&self) -> bool {
        self.values.iter().all(|&v| v)
    }

    /// True when at least one entry is set.
    pub fn any(&self) -> bool {
        self.values.iter().any(|&v| v)
    }

    /// Number of set entries.
    pub fn count(&self) -> usize {
        self.values.iter().filter(|&&v| v).count()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> core::slice::Iter<'_, bool> {
        self.values.iter()
    }

    /// Borrow the entries as a slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.values
    }
}

impl Index<usize> for Mask {
    type Output = bool;

    #[inline]
    fn index(&self, index: usize) -> &bool {
        &self.values[index]
    }
}

impl From<Vec<bool>> for Mask {
    fn from(values: Vec<bool>) -> Self {
        Self { values }
    }
}

// ============================================================================
// NumericalData
// ============================================================================

/// Owned 1D array of floating-point values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericalData<T> {
    values: Vec<T>,
}

impl<T: Float> NumericalData<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Take ownership of `values`.
    #[inline]
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Copy `values` into a new array.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Array of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self::filled(len, T::zero())
    }

    /// Array of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self {
            values: vec![value; len],
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consume the array and return the underlying buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Iterate mutably over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.values.iter_mut()
    }

    // ========================================================================
    // Unary Maps
    // ========================================================================

    /// Apply `f` to every element, returning a new array.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self {
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Elementwise square root.
    pub fn sqrt(&self) -> Self {
        self.map(T::sqrt)
    }

    /// Elementwise exponential.
    pub fn exp(&self) -> Self {
        self.map(T::exp)
    }

    /// Elementwise natural logarithm.
    pub fn ln(&self) -> Self {
        self.map(T::ln)
    }

    /// Elementwise square.
    pub fn square(&self) -> Self {
        self.map(|v| v * v)
    }

    /// Elementwise power.
    pub fn powf(&self, exponent: T) -> Self {
        self.map(|v| v.powf(exponent))
    }

    /// Elementwise absolute value.
    pub fn abs(&self) -> Self {
        self.map(T::abs)
    }

    /// Reversed copy.
    pub fn reverse(&self) -> Self {
        Self {
            values: self.values.iter().rev().copied().collect(),
        }
    }

    /// Reverse the element order in place.
    pub fn reverse_in_place(&mut self) -> &mut Self {
        self.values.reverse();
        self
    }

    // ========================================================================
    // Reductions
    // ========================================================================

    /// Sum of all elements (zero when empty).
    pub fn sum(&self) -> T {
        self.values.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Arithmetic mean, or `None` when empty.
    pub fn mean(&self) -> Option<T> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.sum() / T::from(self.values.len()).unwrap())
    }

    /// Smallest element, or `None` when empty.
    pub fn min_coeff(&self) -> Option<T> {
        self.values.iter().copied().reduce(T::min)
    }

    /// Largest element, or `None` when empty.
    pub fn max_coeff(&self) -> Option<T> {
        self.values.iter().copied().reduce(T::max)
    }

    // ========================================================================
    // Comparisons
    // ========================================================================

    /// Elementwise `self > rhs`.
    pub fn gt(&self, rhs: T) -> Mask {
        self.test(|v| v > rhs)
    }

    /// Elementwise `self >= rhs`.
    pub fn ge(&self, rhs: T) -> Mask {
        self.test(|v| v >= rhs)
    }

    /// Elementwise `self < rhs`.
    pub fn lt(&self, rhs: T) -> Mask {
        self.test(|v| v < rhs)
    }

    /// Elementwise `self <= rhs`.
    pub fn le(&self, rhs: T) -> Mask {
        self.test(|v| v <= rhs)
    }

    /// Elementwise comparison against another array of the same length.
    pub fn compare<F>(&self, rhs: &Self, predicate: F) -> Mask
    where
        F: Fn(T, T) -> bool,
    {
        assert_eq!(
            self.len(),
            rhs.len(),
            "elementwise comparison requires equal lengths"
        );
        Mask::from(
            self.values
                .iter()
                .zip(rhs.values.iter())
                .map(|(&a, &b)| predicate(a, b))
                .collect::<Vec<_>>(),
        )
    }

    fn test<F>(&self, predicate: F) -> Mask
    where
        F: Fn(T) -> bool,
    {
        Mask::from(self.values.iter().map(|&v| predicate(v)).collect::<Vec<_>>())
    }

    fn zip_with<F>(&self, rhs: &Self, f: F) -> Self
    where
        F: Fn(T, T) -> T,
    {
        assert_eq!(
            self.len(),
            rhs.len(),
            "elementwise arithmetic requires equal lengths"
        );
        Self {
            values: self
                .values
                .iter()
                .zip(rhs.values.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

impl<T: Float> DenseArray for NumericalData<T> {
    type Scalar = T;

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    #[inline]
    fn from_vec(values: Vec<T>) -> Self {
        Self { values }
    }
}

// ============================================================================
// Indexing and Conversions
// ============================================================================

impl<T> Index<usize> for NumericalData<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T> IndexMut<usize> for NumericalData<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<T> From<Vec<T>> for NumericalData<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T: Copy> From<&[T]> for NumericalData<T> {
    fn from(values: &[T]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl<T> From<NumericalData<T>> for Vec<T> {
    fn from(data: NumericalData<T>) -> Self {
        data.values
    }
}

impl<T> AsRef<[T]> for NumericalData<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

impl<T> FromIterator<T> for NumericalData<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for NumericalData<T> {
    type Item = T;
    type IntoIter = <Vec<T> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NumericalData<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: fmt::Display> fmt::Display for NumericalData<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

macro_rules! impl_elementwise_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl<T: Float> $op_trait<T> for NumericalData<T> {
            type Output = NumericalData<T>;

            fn $op_fn(mut self, rhs: T) -> Self::Output {
                self.values.iter_mut().for_each(|v| *v = *v $op rhs);
                self
            }
        }

        impl<T: Float> $op_trait<T> for &NumericalData<T> {
            type Output = NumericalData<T>;

            fn $op_fn(self, rhs: T) -> Self::Output {
                self.map(|v| v $op rhs)
            }
        }

        impl<T: Float> $op_trait<&NumericalData<T>> for &NumericalData<T> {
            type Output = NumericalData<T>;

            fn $op_fn(self, rhs: &NumericalData<T>) -> Self::Output {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }

        impl<T: Float> $op_trait<NumericalData<T>> for NumericalData<T> {
            type Output = NumericalData<T>;

            fn $op_fn(self, rhs: NumericalData<T>) -> Self::Output {
                self.zip_with(&rhs, |a, b| a $op b)
            }
        }

        impl<T: Float> $assign_trait<T> for NumericalData<T> {
            fn $assign_fn(&mut self, rhs: T) {
                self.values.iter_mut().for_each(|v| *v = *v $op rhs);
            }
        }

        impl<T: Float> $assign_trait<&NumericalData<T>> for NumericalData<T> {
            fn $assign_fn(&mut self, rhs: &NumericalData<T>) {
                assert_eq!(
                    self.values.len(),
                    rhs.values.len(),
                    "elementwise arithmetic requires equal lengths"
                );
                self.values
                    .iter_mut()
                    .zip(rhs.values.iter())
                    .for_each(|(a, &b)| *a = *a $op b);
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign, +);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_elementwise_op!(Div, div, DivAssign, div_assign, /);

impl<T: Float> Neg for NumericalData<T> {
    type Output = NumericalData<T>;

    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}
