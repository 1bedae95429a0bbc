//! Input abstractions for series construction.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for sample arrays, allowing the
//! series builder to accept slices, vectors and ndarray arrays through a
//! single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Provides direct slice access to underlying data buffers.
//! * **Interoperability**: Bridges standard Rust collections with ndarray, the form
//!   most table readers hand columns over in.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected before any copy.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container, in order.
//!
//! ## Non-goals
//!
//! * This module does not read any file format.
//! * This module does not replace missing values with BAD.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from splat crate
use splat::prelude::SplatError;

/// Trait for types that can supply coordinates, values or errors of a series.
pub trait SeriesInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_series_slice(&self) -> Result<&[T], SplatError>;
}

impl<T: Float> SeriesInput<T> for [T] {
    fn as_series_slice(&self) -> Result<&[T], SplatError> {
        Ok(self)
    }
}

impl<T: Float> SeriesInput<T> for Vec<T> {
    fn as_series_slice(&self) -> Result<&[T], SplatError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, const N: usize> SeriesInput<T> for [T; N] {
    fn as_series_slice(&self) -> Result<&[T], SplatError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> SeriesInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_series_slice(&self) -> Result<&[T], SplatError> {
        self.as_slice().ok_or_else(|| {
            SplatError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
