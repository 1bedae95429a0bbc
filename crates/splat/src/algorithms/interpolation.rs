//! Evaluation and cursor lookups over sample buffers.
//!
//! ## Purpose
//!
//! This module evaluates a sample buffer as a piecewise-linear function and
//! answers the two cursor-readout lookups used by plotting layers: the nearest
//! sample, and an interpolated value at the raw query coordinate.
//!
//! ## Design notes
//!
//! * **Exact hits**: `eval_at` returns the stored value unchanged when the query
//!   equals a sample coordinate, with no floating drift.
//! * **Gaps**: `eval_at` returns BAD if either bracketing value is BAD and never
//!   draws a line across a gap.
//! * **Extrapolation**: Clamped out-of-range brackets are evaluated on the same
//!   two-point line, so results outside the data span are extrapolated.
//! * **Independence**: `eval_array` evaluates each query on its own; there is no
//!   shared state between elements.
//!
//! ## Key concepts
//!
//! * **Nearest lookup**: Picks the closer bracketing sample; ties go to `high`.
//! * **Interpolated lookup**: Interpolates by the query's fractional position in
//!   the bracket. It performs neither the exact-hit short-circuit nor the BAD
//!   check of `eval_at`, so a BAD neighbour leaks into the result. Readouts
//!   that must respect gaps should use `eval_at`.
//!
//! ## Non-goals
//!
//! * This module does not provide higher-order interpolation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::bound::{bound_with, BoundPolicy};
use crate::math::linear::{bracket_fraction, two_point};
use crate::primitives::buffer::{bad, is_bad, SampleBuffer};
use crate::primitives::errors::SplatError;

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate the buffer at `x` by linear interpolation (or extrapolation).
pub fn eval_at<T: Float>(
    buffer: &SampleBuffer<T>,
    x: T,
    policy: BoundPolicy,
) -> Result<T, SplatError> {
    let bracket = bound_with(buffer, x, policy)?;
    let coords = buffer.coords();
    let values = buffer.values();
    let (low, high) = bracket.as_pair();

    if bracket.is_exact() {
        return Ok(values[low]);
    }
    if is_bad(values[low]) || is_bad(values[high]) {
        return Ok(bad());
    }

    Ok(two_point(
        coords[low],
        values[low],
        coords[high],
        values[high],
        x,
    ))
}

/// Evaluate the buffer at every coordinate in `xs`.
///
/// The output has the same length as `xs`. The first failing query aborts the
/// whole evaluation.
pub fn eval_array<T: Float>(
    buffer: &SampleBuffer<T>,
    xs: &[T],
    policy: BoundPolicy,
) -> Result<Vec<T>, SplatError> {
    xs.iter().map(|&x| eval_at(buffer, x, policy)).collect()
}

// ============================================================================
// Lookups
// ============================================================================

/// The bracketing sample nearest to `x`, as `(coord, value)`.
///
/// Distances are compared as absolute values and a tie picks the upper
/// index. On ascending coordinates this equals the signed rule
/// `x - coords[low] < coords[high] - x`. On descending coordinates the
/// signed rule would pick the wrong neighbour; for example on `[5, 4, 3]`
/// with `x = 4.9` this returns the sample at 5, where the signed rule
/// gives the one at 4.
pub fn lookup_nearest<T: Float>(
    buffer: &SampleBuffer<T>,
    x: T,
    policy: BoundPolicy,
) -> Result<(T, T), SplatError> {
    let bracket = bound_with(buffer, x, policy)?;
    let coords = buffer.coords();
    let values = buffer.values();
    let (low, high) = bracket.as_pair();

    let to_low = (x - coords[low]).abs();
    let to_high = (coords[high] - x).abs();
    let pick = if to_low < to_high { low } else { high };

    Ok((coords[pick], values[pick]))
}

/// The raw query `x` paired with the value interpolated at its position in
/// the bracket.
///
/// BAD neighbours are interpolated through rather than propagated.
pub fn lookup_interpolated<T: Float>(
    buffer: &SampleBuffer<T>,
    x: T,
    policy: BoundPolicy,
) -> Result<(T, T), SplatError> {
    let bracket = bound_with(buffer, x, policy)?;
    let coords = buffer.coords();
    let values = buffer.values();
    let (low, high) = bracket.as_pair();

    let fraction = bracket_fraction(coords[low], coords[high], x);
    let value = values[low] + fraction * (values[high] - values[low]);

    Ok((x, value))
}
