//! Time series and periodogram objects.
//!
//! ## Purpose
//!
//! This module provides [`Series`], the named object the application works
//! with. It owns the sampled data, keeps its data range and coordinate frame
//! in step with the samples, and exposes every core query.
//!
//! ## Design notes
//!
//! * **Shared core**: Time series and periodograms differ only in their
//!   [`SeriesKind`]; all sample handling lives in the `splat` crate.
//! * **Cached derivations**: The range summary and frame are recomputed on
//!   construction and on [`Series::set_data`], never lazily.
//! * **Two-phase load**: Snapshots persist raw arrays only. Loading calls
//!   [`SeriesFrame::rebuild`] explicitly through [`Series::from_snapshot`].
//!
//! ## Invariants
//!
//! * `range()` and `frame()` always describe the current samples.

// External dependencies
use num_traits::Float;
use tracing::debug;

// Export dependencies from splat crate
use splat::prelude::{BoundPolicy, Bracket, RangeSummary, SampleBuffer, SampledSeries};

// Internal dependencies
use crate::engine::executor::eval_array_parallel;
use crate::errors::FrogError;
use crate::model::frame::SeriesFrame;
use crate::model::kind::SeriesKind;
use crate::model::snapshot::SeriesSnapshot;

/// Prefix given to the names of extracted sections.
pub const SECTION_PREFIX: &str = "Section of: ";

// ============================================================================
// Series
// ============================================================================

/// A named time series or periodogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    short_name: String,
    full_name: String,
    kind: SeriesKind,
    data: SampledSeries<T>,
    range: RangeSummary<T>,
    frame: SeriesFrame<T>,
}

impl<T: Float> Series<T> {
    /// Wrap sampled data. The full name starts out equal to the short name.
    pub fn new(short_name: impl Into<String>, kind: SeriesKind, data: SampledSeries<T>) -> Self {
        let short_name = short_name.into();
        let range = data.range_summary();
        let frame = SeriesFrame::rebuild(data.buffer());
        Self {
            full_name: short_name.clone(),
            short_name,
            kind,
            data,
            range,
            frame,
        }
    }

    /// Set the full name (for example the source file and extension).
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Short display name.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Change the short display name.
    pub fn set_short_name(&mut self, name: impl Into<String>) {
        self.short_name = name.into();
    }

    /// Full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Time series or periodogram.
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    /// The sampled data with its query policy.
    pub fn data(&self) -> &SampledSeries<T> {
        &self.data
    }

    /// The raw samples.
    pub fn buffer(&self) -> &SampleBuffer<T> {
        self.data.buffer()
    }

    /// Tight and full data ranges of the current samples.
    pub fn range(&self) -> &RangeSummary<T> {
        &self.range
    }

    /// Coordinate frame of the current samples.
    pub fn frame(&self) -> &SeriesFrame<T> {
        &self.frame
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether error bars are available.
    pub fn has_errors(&self) -> bool {
        self.data.has_errors()
    }

    /// Replace the samples, keeping names, kind and policy.
    ///
    /// The range and frame are recomputed. On error the series is unchanged.
    pub fn set_data(
        &mut self,
        coords: Vec<T>,
        values: Vec<T>,
        errors: Option<Vec<T>>,
    ) -> Result<(), FrogError> {
        let buffer = SampleBuffer::new(coords, values, errors)?;
        self.replace_buffer(buffer);
        Ok(())
    }

    fn replace_buffer(&mut self, buffer: SampleBuffer<T>) {
        self.data = SampledSeries::from_buffer(buffer, self.data.policy());
        self.range = self.data.range_summary();
        self.frame = SeriesFrame::rebuild(self.data.buffer());
        debug!(name = %self.short_name, samples = self.len(), "series data replaced");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Bracketing sample indices for `query`.
    pub fn bound(&self, query: T) -> Result<Bracket, FrogError> {
        Ok(self.data.bound(query)?)
    }

    /// Value at `x`, linearly interpolated; BAD across gaps.
    pub fn eval_at(&self, x: T) -> Result<T, FrogError> {
        Ok(self.data.eval_at(x)?)
    }

    /// Values at every coordinate in `xs`.
    pub fn eval_array(&self, xs: &[T]) -> Result<Vec<T>, FrogError> {
        Ok(self.data.eval_array(xs)?)
    }

    /// The bracketing sample nearest to `x`, as `(coord, value)`.
    pub fn lookup_nearest(&self, x: T) -> Result<(T, T), FrogError> {
        Ok(self.data.lookup_nearest(x)?)
    }

    /// `(x, value)` with the value interpolated inside the bracket of `x`.
    pub fn lookup_interpolated(&self, x: T) -> Result<(T, T), FrogError> {
        Ok(self.data.lookup_interpolated(x)?)
    }

    /// Extract coordinate windows into a new series named after this one.
    ///
    /// Returns `Ok(None)` when no window contains data.
    pub fn section(&self, ranges: &[(T, T)]) -> Result<Option<Series<T>>, FrogError> {
        let Some(data) = self.data.section(ranges)? else {
            debug!(name = %self.short_name, windows = ranges.len(), "section holds no data");
            return Ok(None);
        };

        let name = format!("{SECTION_PREFIX}{}", self.short_name);
        let full_name = format!("{SECTION_PREFIX}{}", self.full_name);
        Ok(Some(Series::new(name, self.kind, data).with_full_name(full_name)))
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// The persistent form of this series: names and raw arrays only.
    pub fn snapshot(&self) -> SeriesSnapshot<T> {
        let buffer = self.buffer();
        SeriesSnapshot {
            short_name: self.short_name.clone(),
            full_name: self.full_name.clone(),
            kind: self.kind,
            strict: self.data.policy() == BoundPolicy::Strict,
            coords: buffer.coords().to_vec(),
            values: buffer.values().to_vec(),
            errors: buffer.errors().map(|e| e.to_vec()),
        }
    }

    /// Restore a series from a snapshot, rebuilding its range and frame.
    pub fn from_snapshot(snapshot: SeriesSnapshot<T>) -> Result<Self, FrogError> {
        let policy = if snapshot.strict {
            BoundPolicy::Strict
        } else {
            BoundPolicy::Clamp
        };
        let buffer = SampleBuffer::new(snapshot.coords, snapshot.values, snapshot.errors)?;
        let data = SampledSeries::from_buffer(buffer, policy);
        Ok(Series::new(snapshot.short_name, snapshot.kind, data).with_full_name(snapshot.full_name))
    }
}

impl<T: Float + Send + Sync> Series<T> {
    /// Values at every coordinate in `xs`, evaluated on the rayon pool.
    ///
    /// Element for element equal to [`Series::eval_array`].
    pub fn eval_array_par(&self, xs: &[T]) -> Result<Vec<T>, FrogError> {
        Ok(eval_array_parallel(&self.data, xs)?)
    }
}
