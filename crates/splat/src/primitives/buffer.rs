//! Sample storage for time series and periodograms.
//!
//! ## Purpose
//!
//! This module provides [`SampleBuffer`], the ordered (coordinate, value,
//! optional error) container shared by time series and periodograms, and the
//! BAD sentinel that marks missing samples.
//!
//! ## Design notes
//!
//! * **Immutable**: A buffer is never modified after construction. Clones and
//!   section extraction always allocate a new buffer.
//! * **In-band gaps**: Missing samples carry `BAD = -T::max_value()` instead of
//!   NaN, so they survive arithmetic-free copies and sorting-free scans.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Coordinates**: Time or frequency positions, monotonic (ascending or descending).
//! * **Values**: Measured quantity at each coordinate; may be BAD.
//! * **Errors**: Optional per-sample uncertainty, same length as the values.
//!
//! ## Invariants
//!
//! * `coords.len() == values.len()` and, when present, `errors.len() == coords.len()`.
//!
//! ## Non-goals
//!
//! * This module does not read or write any file format.
//! * This module does not check coordinate order (see the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SplatError;
use crate::primitives::validator::Validator;

// ============================================================================
// BAD Sentinel
// ============================================================================

/// The BAD sentinel for `T`: `-T::max_value()`.
#[inline]
pub fn bad<T: Float>() -> T {
    -T::max_value()
}

/// Whether `value` is the BAD sentinel.
#[inline]
pub fn is_bad<T: Float>(value: T) -> bool {
    value == bad()
}

// ============================================================================
// Coordinate Order
// ============================================================================

/// Direction of the coordinate sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// `coords[0] < coords[last]`.
    Ascending,

    /// Anything else, including a single sample or equal endpoints.
    Descending,
}

impl Order {
    /// Classify a coordinate slice by its endpoints.
    pub fn of<T: Float>(coords: &[T]) -> Self {
        match (coords.first(), coords.last()) {
            (Some(&first), Some(&last)) if first < last => Order::Ascending,
            _ => Order::Descending,
        }
    }
}

// ============================================================================
// SampleBuffer
// ============================================================================

/// Ordered samples of a time series or periodogram.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer<T> {
    coords: Vec<T>,
    values: Vec<T>,
    errors: Option<Vec<T>>,
}

impl<T: Float> SampleBuffer<T> {
    /// Create a buffer from coordinate, value and optional error arrays.
    ///
    /// Fails with [`SplatError::InvalidLength`] if the arrays differ in length.
    pub fn new(coords: Vec<T>, values: Vec<T>, errors: Option<Vec<T>>) -> Result<Self, SplatError> {
        Validator::validate_lengths(&coords, &values, errors.as_deref())?;

        Ok(Self {
            coords,
            values,
            errors,
        })
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the buffer holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Whether per-sample errors are available.
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.errors.is_some()
    }

    /// Sample coordinates.
    #[inline]
    pub fn coords(&self) -> &[T] {
        &self.coords
    }

    /// Sample values (may contain BAD).
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Per-sample errors, if any.
    #[inline]
    pub fn errors(&self) -> Option<&[T]> {
        self.errors.as_deref()
    }

    /// Direction of the coordinates.
    #[inline]
    pub fn order(&self) -> Order {
        Order::of(&self.coords)
    }

    /// Consume the buffer, returning its arrays.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>, Option<Vec<T>>) {
        (self.coords, self.values, self.errors)
    }
}
