//! Derived coordinate frame of a series.
//!
//! ## Purpose
//!
//! This module describes how sample indices map onto coordinates: direction,
//! endpoints, mean step and whether the grid is uniform. Plotting layers use
//! it to convert between grid positions and coordinates.
//!
//! ## Design notes
//!
//! * **Derived only**: A frame is never persisted. It is recomputed from the
//!   samples by [`SeriesFrame::rebuild`] whenever a series is created, loaded
//!   or given new data.
//! * **Uniformity**: Every step must match the mean step within
//!   [`UNIFORM_TOLERANCE`] of its magnitude.
//!
//! ## Non-goals
//!
//! * This module does not implement celestial or spectral coordinate systems.

// External dependencies
use num_traits::Float;

// Export dependencies from splat crate
use splat::prelude::{Order, SampleBuffer};

/// Relative tolerance for treating a grid as uniform.
pub const UNIFORM_TOLERANCE: f64 = 1.0e-6;

/// Index-to-coordinate mapping derived from a sample buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesFrame<T> {
    /// Direction of the coordinates.
    pub order: Order,

    /// Number of samples.
    pub samples: usize,

    /// First coordinate (zero when empty).
    pub start: T,

    /// Last coordinate (zero when empty).
    pub end: T,

    /// Mean coordinate step (zero for fewer than 2 samples).
    pub step: T,

    /// Whether every step matches the mean step.
    pub uniform: bool,
}

impl<T: Float> SeriesFrame<T> {
    /// Recompute the frame from `buffer`.
    pub fn rebuild(buffer: &SampleBuffer<T>) -> Self {
        let coords = buffer.coords();
        let n = coords.len();
        let (start, end) = match (coords.first(), coords.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => (T::zero(), T::zero()),
        };

        let step = match T::from(n.saturating_sub(1)) {
            Some(intervals) if n >= 2 => (end - start) / intervals,
            _ => T::zero(),
        };

        let tolerance = T::from(UNIFORM_TOLERANCE).unwrap_or_else(T::epsilon) * step.abs();
        let uniform = coords
            .windows(2)
            .all(|w| ((w[1] - w[0]) - step).abs() <= tolerance);

        Self {
            order: buffer.order(),
            samples: n,
            start,
            end,
            step,
            uniform,
        }
    }

    /// Coordinate at a (possibly fractional) grid position.
    ///
    /// Only meaningful for uniform frames.
    pub fn coord_at(&self, position: T) -> T {
        self.start + position * self.step
    }

    /// Fractional grid position of `coord`, or `None` for a zero step.
    pub fn position_of(&self, coord: T) -> Option<T> {
        if self.step == T::zero() {
            None
        } else {
            Some((coord - self.start) / self.step)
        }
    }
}
