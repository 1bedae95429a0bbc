//! High-level API for building named series.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point of the object
//! layer. It extends the `splat` builder with names and a series kind, and
//! accepts sample arrays from slices, vectors or ndarray arrays.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `splat` builder for samples and
//!   query configuration; only naming is added here.
//! * **Deferred errors**: Input conversion failures are kept and reported by
//!   `.build()`, so the chain never breaks.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SeriesBuilder`] via `SeriesBuilder::new()`.
//! 2. Chain configuration methods (`.name()`, `.kind()`, `.coords()`, etc.).
//! 3. Call `.build()` to get a [`Series`].

// External dependencies
use num_traits::Float;

// Export dependencies from splat crate
use splat::prelude::{BoundPolicy, Sampled, SplatError};

// Internal dependencies
use crate::errors::FrogError;
use crate::input::SeriesInput;
use crate::model::kind::SeriesKind;
use crate::model::series::Series;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for named series.
#[derive(Debug, Clone)]
pub struct SeriesBuilder<T> {
    /// Sample arrays and query configuration.
    pub samples: Sampled<T>,

    /// Short display name (default: the kind's label).
    pub short_name: Option<String>,

    /// Full name (default: the short name).
    pub full_name: Option<String>,

    /// Time series or periodogram (default: time series).
    pub kind: Option<SeriesKind>,

    /// Tracks if any naming parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    /// First input conversion failure, reported on build.
    #[doc(hidden)]
    pub input_error: Option<SplatError>,
}

impl<T: Float> Default for SeriesBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SeriesBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            samples: Sampled::new(),
            short_name: None,
            full_name: None,
            kind: None,
            duplicate_param: None,
            input_error: None,
        }
    }

    /// Set the short display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        if self.short_name.is_some() {
            self.duplicate_param = Some("name");
        }
        self.short_name = Some(name.into());
        self
    }

    /// Set the full name.
    pub fn full_name(mut self, name: impl Into<String>) -> Self {
        if self.full_name.is_some() {
            self.duplicate_param = Some("full_name");
        }
        self.full_name = Some(name.into());
        self
    }

    /// Set the series kind.
    pub fn kind(mut self, kind: SeriesKind) -> Self {
        if self.kind.is_some() {
            self.duplicate_param = Some("kind");
        }
        self.kind = Some(kind);
        self
    }

    /// Set the sample coordinates.
    pub fn coords<I: SeriesInput<T> + ?Sized>(mut self, coords: &I) -> Self {
        if let Some(slice) = self.accept(coords) {
            self.samples = self.samples.coords(slice);
        }
        self
    }

    /// Set the sample values.
    pub fn values<I: SeriesInput<T> + ?Sized>(mut self, values: &I) -> Self {
        if let Some(slice) = self.accept(values) {
            self.samples = self.samples.values(slice);
        }
        self
    }

    /// Set the per-sample errors.
    pub fn errors<I: SeriesInput<T> + ?Sized>(mut self, errors: &I) -> Self {
        if let Some(slice) = self.accept(errors) {
            self.samples = self.samples.errors(slice);
        }
        self
    }

    /// Set the behaviour for queries outside the coordinate span.
    pub fn bound_policy(mut self, policy: BoundPolicy) -> Self {
        self.samples = self.samples.bound_policy(policy);
        self
    }

    /// Reject coordinates that change direction.
    pub fn check_order(mut self) -> Self {
        self.samples = self.samples.check_order();
        self
    }

    fn accept<I: SeriesInput<T> + ?Sized>(&mut self, input: &I) -> Option<Vec<T>> {
        match input.as_series_slice() {
            Ok(slice) => Some(slice.to_vec()),
            Err(err) => {
                self.input_error.get_or_insert(err);
                None
            }
        }
    }

    /// Validate the configuration and build the series.
    pub fn build(self) -> Result<Series<T>, FrogError> {
        if let Some(err) = self.input_error {
            return Err(err.into());
        }
        if let Some(parameter) = self.duplicate_param {
            return Err(SplatError::DuplicateParameter { parameter }.into());
        }

        let data = self.samples.build()?;
        let kind = self.kind.unwrap_or_default();
        let short_name = self
            .short_name
            .unwrap_or_else(|| kind.label().to_string());

        let series = Series::new(short_name, kind, data);
        Ok(match self.full_name {
            Some(full_name) => series.with_full_name(full_name),
            None => series,
        })
    }
}
