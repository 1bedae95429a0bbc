//! Two-point linear models.
//!
//! ## Purpose
//!
//! This module holds the straight-line arithmetic shared by interpolation,
//! lookups and gap-marker placement: evaluating the line through two samples,
//! the fractional position of a query inside a bracket, and midpoints.
//!
//! ## Invariants
//!
//! * Zero-width brackets never divide by zero.
//!
//! ## Non-goals
//!
//! * This module does not know about the BAD sentinel; callers decide when a
//!   gap must short-circuit the arithmetic.

// External dependencies
use num_traits::Float;

/// Convert an `f64` literal into `T`.
///
/// Every `Float` can represent the small constants used in this crate, so the
/// NaN fallback is never observed in practice.
#[inline]
pub fn literal<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Evaluate the line through `(x0, y0)` and `(x1, y1)` at `x`.
///
/// Queries outside `[x0, x1]` are extrapolated along the same line.
///
/// # Special cases
///
/// * **Tied x-values**: If `x1 == x0`, uses the simple average of the y-values.
#[inline]
pub fn two_point<T: Float>(x0: T, y0: T, x1: T, y1: T, x: T) -> T {
    let denom = x1 - x0;
    if denom == T::zero() {
        return (y0 + y1) / literal(2.0);
    }
    let slope = (y1 - y0) / denom;
    y0 + (x - x0) * slope
}

/// Fractional position of `x` between `x0` and `x1`.
///
/// Returns 0 for a zero-width bracket.
#[inline]
pub fn bracket_fraction<T: Float>(x0: T, x1: T, x: T) -> T {
    let width = x1 - x0;
    if width == T::zero() {
        T::zero()
    } else {
        (x - x0) / width
    }
}

/// Midpoint between two coordinates.
#[inline]
pub fn midpoint<T: Float>(a: T, b: T) -> T {
    a + (b - a) * literal(0.5)
}
