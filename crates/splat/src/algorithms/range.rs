//! Data ranges for axis autoscaling.
//!
//! ## Purpose
//!
//! This module computes the tight and padded ("full") data ranges of a
//! sample buffer in a single scan.
//!
//! ## Design notes
//!
//! * **BAD handling**: BAD values are excluded from the Y ranges. Their
//!   coordinates still take part in the X range.
//! * **Padding**: The full Y range is widened by half of each sample's error,
//!   then by a fixed 2% of its own span so error-bar serifs clear the border.
//! * **X axis**: The full X range equals the tight X range.
//!
//! ## Invariants
//!
//! * `x_min <= x_max` for non-empty buffers.
//! * `y_min <= y_max` unless every value is BAD.
//!
//! ## Non-goals
//!
//! * This module does not cache results; wrappers recompute when data changes.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linear::literal;
use crate::primitives::buffer::{bad, is_bad, SampleBuffer};

/// Fraction of the padded Y span added above and below the full range.
pub const FULL_RANGE_SLACK: f64 = 0.02;

// ============================================================================
// RangeSummary
// ============================================================================

/// Tight and padded data ranges of a sample buffer.
///
/// When every value is BAD the Y fields keep their scan seeds
/// (`y_min = T::max_value()`, `y_max = BAD`) and no slack is applied. An empty
/// buffer leaves the X fields seeded the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSummary<T> {
    /// Smallest coordinate.
    pub x_min: T,
    /// Largest coordinate.
    pub x_max: T,
    /// Smallest non-BAD value.
    pub y_min: T,
    /// Largest non-BAD value.
    pub y_max: T,
    /// Padded minimum coordinate (equal to `x_min`).
    pub x_min_full: T,
    /// Padded maximum coordinate (equal to `x_max`).
    pub x_max_full: T,
    /// Smallest non-BAD value minus half its error, less the slack.
    pub y_min_full: T,
    /// Largest non-BAD value plus half its error, plus the slack.
    pub y_max_full: T,
}

impl<T: Float> RangeSummary<T> {
    /// Whether at least one non-BAD value contributed to the Y range.
    #[inline]
    pub fn has_values(&self) -> bool {
        self.y_min <= self.y_max
    }
}

// ============================================================================
// Range Computation
// ============================================================================

/// Scan `buffer` once and compute its tight and full ranges.
pub fn summarize<T: Float>(buffer: &SampleBuffer<T>) -> RangeSummary<T> {
    let coords = buffer.coords();
    let values = buffer.values();
    let errors = buffer.errors();
    let half = literal::<T>(0.5);

    let mut x_min = T::max_value();
    let mut x_max = bad::<T>();
    let mut y_min = T::max_value();
    let mut y_max = bad::<T>();
    let mut y_min_full = T::max_value();
    let mut y_max_full = bad::<T>();
    let mut seen_value = false;

    for i in 0..coords.len() {
        x_min = x_min.min(coords[i]);
        x_max = x_max.max(coords[i]);

        let y = values[i];
        if is_bad(y) {
            continue;
        }
        seen_value = true;
        y_min = y_min.min(y);
        y_max = y_max.max(y);

        // A BAD error on a good value pads nothing
        let pad = match errors {
            Some(e) if !is_bad(e[i]) => e[i] * half,
            _ => T::zero(),
        };
        y_min_full = y_min_full.min(y - pad);
        y_max_full = y_max_full.max(y + pad);
    }

    if seen_value {
        let slack = (y_max_full - y_min_full) * literal(FULL_RANGE_SLACK);
        y_min_full = y_min_full - slack;
        y_max_full = y_max_full + slack;
    }

    RangeSummary {
        x_min,
        x_max,
        y_min,
        y_max,
        x_min_full: x_min,
        x_max_full: x_max,
        y_min_full,
        y_max_full,
    }
}

impl<T: Float> SampleBuffer<T> {
    /// Tight and full data ranges. See [`summarize`].
    pub fn range_summary(&self) -> RangeSummary<T> {
        summarize(self)
    }
}
