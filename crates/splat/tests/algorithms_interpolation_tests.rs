//! Tests for evaluation and cursor lookups.
//!
//! These tests verify the piecewise-linear evaluation of sample buffers:
//! - Exact hits, interpolation and extrapolation in `eval_at`
//! - BAD propagation across gaps
//! - Array evaluation
//! - Nearest and interpolated lookups
//!
//! ## Test Organization
//!
//! 1. **Point Evaluation** - Exact, interpolated, extrapolated
//! 2. **Gaps** - BAD propagation
//! 3. **Array Evaluation** - Lengths and consistency
//! 4. **Lookups** - Nearest sample, interpolated readout

use approx::assert_relative_eq;

use splat::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn linear_buffer() -> SampleBuffer<f64> {
    SampleBuffer::new(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![10.0, 20.0, 30.0, 40.0, 50.0],
        None,
    )
    .unwrap()
}

fn gapped_buffer() -> SampleBuffer<f64> {
    SampleBuffer::new(vec![1.0, 2.0, 3.0], vec![10.0, bad(), 30.0], None).unwrap()
}

// ============================================================================
// Point Evaluation Tests
// ============================================================================

/// Test linear interpolation between samples.
#[test]
fn test_eval_at_interpolates() {
    let buffer = linear_buffer();

    assert_relative_eq!(eval_at(&buffer, 2.5, Clamp).unwrap(), 25.0, epsilon = 1e-12);
    assert_relative_eq!(eval_at(&buffer, 4.25, Clamp).unwrap(), 42.5, epsilon = 1e-12);
}

/// Test that sample coordinates return stored values exactly.
#[test]
fn test_eval_at_exact_samples() {
    let buffer = SampleBuffer::new(
        vec![0.3, 0.7, 1.9, 2.2, 8.1],
        vec![0.1, -7.3, 1.0e-9, 3.333, 12.0],
        None,
    )
    .unwrap();

    for k in 0..buffer.len() {
        let y = eval_at(&buffer, buffer.coords()[k], Clamp).unwrap();
        assert_eq!(y, buffer.values()[k], "Exact hit at index {k}");
    }
}

/// Test that out-of-range queries extrapolate along the boundary pair.
#[test]
fn test_eval_at_extrapolates() {
    let buffer = linear_buffer();

    assert_relative_eq!(eval_at(&buffer, 0.0, Clamp).unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(eval_at(&buffer, 7.0, Clamp).unwrap(), 70.0, epsilon = 1e-12);
}

/// Test evaluation over descending coordinates.
#[test]
fn test_eval_at_descending() {
    let buffer = SampleBuffer::new(vec![3.0, 2.0, 1.0], vec![30.0, 20.0, 10.0], None).unwrap();

    assert_relative_eq!(eval_at(&buffer, 1.5, Clamp).unwrap(), 15.0, epsilon = 1e-12);
    assert_relative_eq!(eval_at(&buffer, 2.75, Clamp).unwrap(), 27.5, epsilon = 1e-12);
}

/// Test that strict evaluation refuses to extrapolate.
#[test]
fn test_eval_at_strict() {
    let buffer = linear_buffer();

    assert!(matches!(
        eval_at(&buffer, 7.0, Strict),
        Err(SplatError::OutOfRange { .. })
    ));
    assert_relative_eq!(eval_at(&buffer, 3.5, Strict).unwrap(), 35.0, epsilon = 1e-12);
}

/// Test that duplicate coordinates do not divide by zero.
#[test]
fn test_eval_at_tied_coordinates() {
    let buffer: SampleBuffer<f64> = SampleBuffer::new(vec![0.0, 1.0, 1.0, 2.0], vec![0.0, 4.0, 6.0, 8.0], None).unwrap();

    let y = eval_at(&buffer, 1.0, Clamp).unwrap();
    assert!(y == 4.0 || y == 6.0, "Exact hit on a tied coordinate, got {y}");
    assert!(eval_at(&buffer, 0.5, Clamp).unwrap().is_finite());
}

// ============================================================================
// Gap Tests
// ============================================================================

/// Test that an exact hit on a BAD sample returns BAD.
#[test]
fn test_eval_at_exact_bad() {
    let buffer = gapped_buffer();

    assert_eq!(bound(&buffer, 2.0).unwrap().as_pair(), (1, 1));
    assert!(is_bad(eval_at(&buffer, 2.0, Clamp).unwrap()));
}

/// Test that a BAD neighbour makes the result BAD on both sides of the gap.
#[test]
fn test_eval_at_bad_neighbour() {
    let buffer = gapped_buffer();

    assert!(is_bad(eval_at(&buffer, 1.5, Clamp).unwrap()));
    assert!(is_bad(eval_at(&buffer, 2.5, Clamp).unwrap()));
    assert_eq!(eval_at(&buffer, 1.0, Clamp).unwrap(), 10.0);
    assert_eq!(eval_at(&buffer, 3.0, Clamp).unwrap(), 30.0);
}

// ============================================================================
// Array Evaluation Tests
// ============================================================================

/// Test that array evaluation matches point evaluation element by element.
#[test]
fn test_eval_array_matches_eval_at() {
    let buffer = linear_buffer();
    let xs = vec![0.5, 1.0, 1.5, 2.0, 3.7, 5.0, 6.0];

    let ys = eval_array(&buffer, &xs, Clamp).unwrap();
    assert_eq!(ys.len(), xs.len());
    for (x, y) in xs.iter().zip(&ys) {
        assert_eq!(*y, eval_at(&buffer, *x, Clamp).unwrap());
    }
}

/// Test array evaluation with an empty query list and with gaps.
#[test]
fn test_eval_array_edge_cases() {
    let buffer = gapped_buffer();

    assert!(eval_array(&buffer, &[], Clamp).unwrap().is_empty());

    let ys = eval_array(&buffer, &[1.0, 1.5, 3.0], Clamp).unwrap();
    assert_eq!(ys[0], 10.0);
    assert!(is_bad(ys[1]));
    assert_eq!(ys[2], 30.0);
}

/// Test that array evaluation fails on the first rejected query.
#[test]
fn test_eval_array_strict_failure() {
    let buffer = linear_buffer();

    assert!(eval_array(&buffer, &[2.0, 9.0], Strict).is_err());
}

// ============================================================================
// Lookup Tests
// ============================================================================

/// Test that nearest lookup picks the closer bracketing sample.
#[test]
fn test_lookup_nearest() {
    let buffer = linear_buffer();

    assert_eq!(lookup_nearest(&buffer, 2.2, Clamp).unwrap(), (2.0, 20.0));
    assert_eq!(lookup_nearest(&buffer, 2.8, Clamp).unwrap(), (3.0, 30.0));
    assert_eq!(lookup_nearest(&buffer, 4.0, Clamp).unwrap(), (4.0, 40.0));
}

/// Test that nearest lookup ties go to the upper sample.
#[test]
fn test_lookup_nearest_tie() {
    let buffer = linear_buffer();

    assert_eq!(lookup_nearest(&buffer, 2.5, Clamp).unwrap(), (3.0, 30.0));
}

/// Test nearest lookup on descending coordinates and out of range.
#[test]
fn test_lookup_nearest_descending_and_clamped() {
    let buffer = SampleBuffer::new(vec![3.0, 2.0, 1.0], vec![30.0, 20.0, 10.0], None).unwrap();

    assert_eq!(lookup_nearest(&buffer, 2.9, Clamp).unwrap(), (3.0, 30.0));
    assert_eq!(lookup_nearest(&buffer, 1.2, Clamp).unwrap(), (1.0, 10.0));
    assert_eq!(lookup_nearest(&buffer, -4.0, Clamp).unwrap(), (1.0, 10.0));
}

/// Test that descending data compares absolute distances.
#[test]
fn test_lookup_nearest_descending_absolute_distance() {
    let buffer = SampleBuffer::new(vec![5.0, 4.0, 3.0], vec![50.0, 40.0, 30.0], None).unwrap();

    assert_eq!(lookup_nearest(&buffer, 4.9, Clamp).unwrap(), (5.0, 50.0));
    assert_eq!(lookup_nearest(&buffer, 4.1, Clamp).unwrap(), (4.0, 40.0));
    assert_eq!(lookup_nearest(&buffer, 4.5, Clamp).unwrap(), (4.0, 40.0));
}

/// Test that interpolated lookup returns the raw query coordinate.
#[test]
fn test_lookup_interpolated() {
    let buffer = linear_buffer();

    let (x, y) = lookup_interpolated(&buffer, 3.25, Clamp).unwrap();
    assert_eq!(x, 3.25);
    assert_relative_eq!(y, 32.5, epsilon = 1e-12);

    let (x, y) = lookup_interpolated(&buffer, 4.0, Clamp).unwrap();
    assert_eq!(x, 4.0);
    assert_eq!(y, 40.0);
}

/// Test that interpolated lookup does not propagate BAD like `eval_at`.
#[test]
fn test_lookup_interpolated_ignores_gaps() {
    let buffer = gapped_buffer();

    let (_, y) = lookup_interpolated(&buffer, 1.5, Clamp).unwrap();
    assert!(!is_bad(y), "Interpolated lookup leaks the gap instead of returning BAD");
    assert!(y < -1.0e300);
    assert!(is_bad(eval_at(&buffer, 1.5, Clamp).unwrap()));
}
