//! Section extraction.
//!
//! ## Purpose
//!
//! This module copies one or more coordinate windows out of a sample buffer
//! into a new buffer, separating the windows with BAD gap markers so plotting
//! layers never join them with a line.
//!
//! ## Design notes
//!
//! * **Window edges**: A window starts at `bound(lo).high` and ends at
//!   `bound(hi).low`, so only samples inside `[lo, hi]` are copied.
//! * **Orientation**: The first element of each pair is the edge nearer the
//!   start of the buffer. For descending coordinates pass `(hi, lo)`.
//! * **Clamping**: Window edges beyond the data are clamped to the data span;
//!   windows that miss the span entirely are skipped.
//! * **Ordering**: Windows are copied in the order given, without sorting.
//!
//! ## Key concepts
//!
//! * **Gap marker**: One synthetic sample between consecutive windows, at the
//!   midpoint of the neighbouring coordinates, with a BAD value and (when the
//!   buffer has errors) a BAD error.
//!
//! ## Invariants
//!
//! * The input buffer is never modified.
//! * The output has errors exactly when the input has errors.
//!
//! ## Non-goals
//!
//! * This module does not merge overlapping windows.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::bound::bound;
use crate::math::linear::midpoint;
use crate::primitives::buffer::{bad, SampleBuffer};
use crate::primitives::errors::SplatError;
use crate::primitives::validator::Validator;

// ============================================================================
// Extraction
// ============================================================================

/// Copy the samples inside each `(lo, hi)` window into a new buffer.
///
/// Returns `Ok(None)` when no window contains any sample.
pub fn extract<T: Float>(
    buffer: &SampleBuffer<T>,
    ranges: &[(T, T)],
) -> Result<Option<SampleBuffer<T>>, SplatError> {
    Validator::validate_bracketable(buffer.len())?;

    let windows = locate_windows(buffer, ranges)?;
    if windows.is_empty() {
        return Ok(None);
    }

    let copied: usize = windows.iter().map(|&(lower, upper)| upper - lower + 1).sum();
    let total = copied + windows.len() - 1;

    let coords = buffer.coords();
    let values = buffer.values();
    let errors = buffer.errors();

    let mut out_coords = Vec::with_capacity(total);
    let mut out_values = Vec::with_capacity(total);
    let mut out_errors = errors.map(|_| Vec::with_capacity(total));

    for (j, &(lower, upper)) in windows.iter().enumerate() {
        if j != 0 {
            let previous = out_coords[out_coords.len() - 1];
            out_coords.push(midpoint(previous, coords[lower]));
            out_values.push(bad());
            if let Some(e) = out_errors.as_mut() {
                e.push(bad());
            }
        }

        out_coords.extend_from_slice(&coords[lower..=upper]);
        out_values.extend_from_slice(&values[lower..=upper]);
        if let (Some(out), Some(src)) = (out_errors.as_mut(), errors) {
            out.extend_from_slice(&src[lower..=upper]);
        }
    }

    SampleBuffer::new(out_coords, out_values, out_errors).map(Some)
}

/// Inclusive index windows for each range that holds at least one sample.
///
/// Ranges with a NaN edge hold nothing.
fn locate_windows<T: Float>(
    buffer: &SampleBuffer<T>,
    ranges: &[(T, T)],
) -> Result<Vec<(usize, usize)>, SplatError> {
    let coords = buffer.coords();
    let first = coords[0];
    let last = coords[coords.len() - 1];
    let span_min = first.min(last);
    let span_max = first.max(last);

    let mut windows = Vec::with_capacity(ranges.len());
    for &(lo, hi) in ranges {
        if lo.is_nan() || hi.is_nan() {
            continue;
        }
        if lo.max(hi) < span_min || lo.min(hi) > span_max {
            continue;
        }

        let lower = bound(buffer, lo.max(span_min).min(span_max))?.high;
        let upper = bound(buffer, hi.max(span_min).min(span_max))?.low;
        if upper < lower {
            continue;
        }
        windows.push((lower, upper));
    }

    Ok(windows)
}

impl<T: Float> SampleBuffer<T> {
    /// Extract coordinate windows into a new buffer. See [`extract`].
    pub fn section(&self, ranges: &[(T, T)]) -> Result<Option<Self>, SplatError> {
        extract(self, ranges)
    }
}
