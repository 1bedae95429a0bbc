//! High-level API for sampled series.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent builder
//! that validates the sample arrays and the query configuration, producing a
//! [`SampledSeries`] that exposes every range, bound, evaluation, lookup and
//! extraction operation.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every optional parameter.
//! * **Validated**: Lengths, order (on request) and duplicate settings are
//!   checked when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SampledBuilder`] via `Sampled::new()`.
//! 2. Chain configuration methods (`.coords()`, `.values()`, `.errors()`, etc.).
//! 3. Call `.build()` to get a [`SampledSeries`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::bound::bound_with;
use crate::algorithms::interpolation;
use crate::algorithms::range::summarize;
use crate::algorithms::section::extract;
use crate::primitives::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::bound::{BoundPolicy, Bracket};
pub use crate::algorithms::range::{RangeSummary, FULL_RANGE_SLACK};
pub use crate::primitives::buffer::{bad, is_bad, Order, SampleBuffer};
pub use crate::primitives::errors::SplatError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for sampled series.
#[derive(Debug, Clone)]
pub struct SampledBuilder<T> {
    /// Sample coordinates (time or frequency).
    pub coords: Option<Vec<T>>,

    /// Sample values.
    pub values: Option<Vec<T>>,

    /// Per-sample errors.
    pub errors: Option<Vec<T>>,

    /// Behaviour for out-of-range queries (default: Clamp).
    pub bound_policy: Option<BoundPolicy>,

    /// Reject coordinates that change direction.
    pub check_order: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SampledBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SampledBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            coords: None,
            values: None,
            errors: None,
            bound_policy: None,
            check_order: None,
            duplicate_param: None,
        }
    }

    /// Set the sample coordinates.
    pub fn coords(mut self, coords: Vec<T>) -> Self {
        if self.coords.is_some() {
            self.duplicate_param = Some("coords");
        }
        self.coords = Some(coords);
        self
    }

    /// Set the sample values.
    pub fn values(mut self, values: Vec<T>) -> Self {
        if self.values.is_some() {
            self.duplicate_param = Some("values");
        }
        self.values = Some(values);
        self
    }

    /// Set the per-sample errors.
    pub fn errors(mut self, errors: Vec<T>) -> Self {
        if self.errors.is_some() {
            self.duplicate_param = Some("errors");
        }
        self.errors = Some(errors);
        self
    }

    /// Set the behaviour for queries outside the coordinate span.
    pub fn bound_policy(mut self, policy: BoundPolicy) -> Self {
        if self.bound_policy.is_some() {
            self.duplicate_param = Some("bound_policy");
        }
        self.bound_policy = Some(policy);
        self
    }

    /// Reject coordinates that change direction.
    pub fn check_order(mut self) -> Self {
        if self.check_order.is_some() {
            self.duplicate_param = Some("check_order");
        }
        self.check_order = Some(true);
        self
    }

    /// Validate the configuration and build the series.
    pub fn build(self) -> Result<SampledSeries<T>, SplatError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let coords = Validator::validate_required(self.coords, "coords")?;
        let values = Validator::validate_required(self.values, "values")?;

        if self.check_order.unwrap_or(false) {
            Validator::validate_monotonic(&coords)?;
        }

        let buffer = SampleBuffer::new(coords, values, self.errors)?;
        Ok(SampledSeries::from_buffer(
            buffer,
            self.bound_policy.unwrap_or_default(),
        ))
    }
}

// ============================================================================
// Sampled Series
// ============================================================================

/// A sample buffer paired with its query configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSeries<T> {
    buffer: SampleBuffer<T>,
    policy: BoundPolicy,
}

impl<T: Float> SampledSeries<T> {
    /// Wrap an existing buffer.
    pub fn from_buffer(buffer: SampleBuffer<T>, policy: BoundPolicy) -> Self {
        Self { buffer, policy }
    }

    /// The underlying samples.
    #[inline]
    pub fn buffer(&self) -> &SampleBuffer<T> {
        &self.buffer
    }

    /// Consume the series, returning its buffer.
    pub fn into_buffer(self) -> SampleBuffer<T> {
        self.buffer
    }

    /// The bound policy used by every query.
    #[inline]
    pub fn policy(&self) -> BoundPolicy {
        self.policy
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the series holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether per-sample errors are available.
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.buffer.has_errors()
    }

    /// Tight and full data ranges.
    pub fn range_summary(&self) -> RangeSummary<T> {
        summarize(&self.buffer)
    }

    /// Bracketing sample indices for `query`.
    pub fn bound(&self, query: T) -> Result<Bracket, SplatError> {
        bound_with(&self.buffer, query, self.policy)
    }

    /// Value at `x`, linearly interpolated or extrapolated; BAD across gaps.
    pub fn eval_at(&self, x: T) -> Result<T, SplatError> {
        interpolation::eval_at(&self.buffer, x, self.policy)
    }

    /// Values at every coordinate in `xs`.
    pub fn eval_array(&self, xs: &[T]) -> Result<Vec<T>, SplatError> {
        interpolation::eval_array(&self.buffer, xs, self.policy)
    }

    /// The bracketing sample nearest to `x`, as `(coord, value)`.
    pub fn lookup_nearest(&self, x: T) -> Result<(T, T), SplatError> {
        interpolation::lookup_nearest(&self.buffer, x, self.policy)
    }

    /// `(x, value)` with the value interpolated inside the bracket of `x`.
    pub fn lookup_interpolated(&self, x: T) -> Result<(T, T), SplatError> {
        interpolation::lookup_interpolated(&self.buffer, x, self.policy)
    }

    /// Copy coordinate windows into a new series with the same policy.
    pub fn section(&self, ranges: &[(T, T)]) -> Result<Option<Self>, SplatError> {
        Ok(extract(&self.buffer, ranges)?.map(|buffer| Self::from_buffer(buffer, self.policy)))
    }
}
