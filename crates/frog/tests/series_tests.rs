//! Tests for named series.
//!
//! These tests verify the series object built over the sampled core:
//! - Builder defaults, names and kinds
//! - Cached range and frame kept in step with the samples
//! - Sections named after their source
//! - Snapshot round trips rebuilding derived state
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults, names, duplicate and missing parameters
//! 2. **Data Replacement** - set_data and derived state
//! 3. **Frames** - Uniform and irregular grids
//! 4. **Sections** - Naming and empty results
//! 5. **Snapshots** - Persistent form

use approx::assert_relative_eq;

use frog::prelude::*;

fn lightcurve() -> Series<f64> {
    SeriesBuilder::new()
        .name("lc")
        .full_name("lc.fits[1]")
        .coords(&[1.0, 2.0, 3.0, 4.0, 5.0])
        .values(&[10.0, 20.0, 30.0, 40.0, 50.0])
        .build()
        .unwrap()
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test that an unnamed series takes the label of its kind.
#[test]
fn test_builder_default_names() {
    let series = SeriesBuilder::new()
        .coords(&[1.0, 2.0])
        .values(&[3.0, 4.0])
        .build()
        .unwrap();

    assert_eq!(series.kind(), SeriesKind::TimeSeries);
    assert_eq!(series.short_name(), "Time series");
    assert_eq!(series.full_name(), "Time series");
}

/// Test explicit names and kind.
#[test]
fn test_builder_names_and_kind() {
    let series = SeriesBuilder::new()
        .name("gram")
        .full_name("gram of lc")
        .kind(SeriesKind::Periodogram)
        .coords(&[0.1, 0.2])
        .values(&[3.0, 4.0])
        .build()
        .unwrap();

    assert_eq!(series.short_name(), "gram");
    assert_eq!(series.full_name(), "gram of lc");
    assert_eq!(series.kind(), SeriesKind::Periodogram);
    assert_eq!(series.kind().y_label(), "Power");
}

/// Test that setting a name twice is rejected.
#[test]
fn test_builder_duplicate_name() {
    let result = SeriesBuilder::new()
        .name("a")
        .name("b")
        .coords(&[1.0, 2.0])
        .values(&[3.0, 4.0])
        .build();

    assert!(matches!(
        result,
        Err(FrogError::Splat(SplatError::DuplicateParameter { parameter: "name" }))
    ));
}

/// Test that missing values are reported by the core builder.
#[test]
fn test_builder_missing_values() {
    let result = SeriesBuilder::<f64>::new().coords(&[1.0, 2.0]).build();

    assert!(matches!(
        result,
        Err(FrogError::Splat(SplatError::MissingParameter { parameter: "values" }))
    ));
}

/// Test that mismatched lengths are rejected.
#[test]
fn test_builder_length_mismatch() {
    let result = SeriesBuilder::new()
        .coords(&[1.0, 2.0, 3.0])
        .values(&[3.0, 4.0])
        .build();

    assert!(matches!(
        result,
        Err(FrogError::Splat(SplatError::InvalidLength { .. }))
    ));
}

/// Test that the strict policy reaches the series queries.
#[test]
fn test_builder_strict_policy() {
    let series = SeriesBuilder::new()
        .coords(&[1.0, 2.0, 3.0])
        .values(&[1.0, 2.0, 3.0])
        .bound_policy(Strict)
        .build()
        .unwrap();

    assert!(matches!(
        series.eval_at(0.0),
        Err(FrogError::Splat(SplatError::OutOfRange { .. }))
    ));
    assert_relative_eq!(series.eval_at(2.5).unwrap(), 2.5);
}

/// Test that order checking rejects a reversal.
#[test]
fn test_builder_check_order() {
    let result = SeriesBuilder::new()
        .coords(&[1.0, 3.0, 2.0])
        .values(&[1.0, 2.0, 3.0])
        .check_order()
        .build();

    assert!(matches!(
        result,
        Err(FrogError::Splat(SplatError::NotMonotonic { index: 2 }))
    ));
}

// ============================================================================
// Data Replacement Tests
// ============================================================================

/// Test that replacing data recomputes range and frame.
#[test]
fn test_set_data_updates_derived_state() {
    let mut series = lightcurve();
    assert_relative_eq!(series.range().y_max, 50.0);

    series
        .set_data(vec![0.0, 10.0, 20.0], vec![-1.0, 5.0, 2.0], None)
        .unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.short_name(), "lc");
    assert_relative_eq!(series.range().x_max, 20.0);
    assert_relative_eq!(series.range().y_min, -1.0);
    assert_relative_eq!(series.range().y_max, 5.0);
    assert_eq!(series.frame().samples, 3);
    assert_relative_eq!(series.frame().step, 10.0);
}

/// Test that a failed replacement leaves the series unchanged.
#[test]
fn test_set_data_failure_keeps_series() {
    let mut series = lightcurve();
    let before = series.clone();

    let result = series.set_data(vec![1.0, 2.0], vec![1.0], None);

    assert!(result.is_err());
    assert_eq!(series, before);
}

/// Test that error bars widen the full range.
#[test]
fn test_range_with_errors() {
    let series = SeriesBuilder::new()
        .coords(&[1.0, 2.0])
        .values(&[10.0, 20.0])
        .errors(&[2.0, 4.0])
        .build()
        .unwrap();

    let range = series.range();
    assert!(series.has_errors());
    assert_relative_eq!(range.y_min, 10.0);
    assert_relative_eq!(range.y_max, 20.0);
    // Padded to [9, 22], then 2% of 13 on each side
    assert_relative_eq!(range.y_min_full, 8.74, epsilon = 1e-12);
    assert_relative_eq!(range.y_max_full, 22.26, epsilon = 1e-12);
}

// ============================================================================
// Frame Tests
// ============================================================================

/// Test a uniform ascending grid.
#[test]
fn test_frame_uniform() {
    let series = lightcurve();
    let frame = series.frame();

    assert_eq!(frame.order, Order::Ascending);
    assert!(frame.uniform);
    assert_relative_eq!(frame.start, 1.0);
    assert_relative_eq!(frame.end, 5.0);
    assert_relative_eq!(frame.step, 1.0);
    assert_relative_eq!(frame.coord_at(2.5), 3.5);
    assert_relative_eq!(frame.position_of(4.0).unwrap(), 3.0);
}

/// Test an irregular descending grid.
#[test]
fn test_frame_irregular_descending() {
    let series = SeriesBuilder::new()
        .coords(&[10.0, 9.0, 5.0])
        .values(&[1.0, 2.0, 3.0])
        .build()
        .unwrap();
    let frame = series.frame();

    assert_eq!(frame.order, Order::Descending);
    assert!(!frame.uniform);
    assert_relative_eq!(frame.step, -2.5);
}

/// Test a single sample has no step.
#[test]
fn test_frame_single_sample() {
    let series = SeriesBuilder::new()
        .coords(&[7.0])
        .values(&[1.0])
        .build()
        .unwrap();

    assert_eq!(series.frame().samples, 1);
    assert_relative_eq!(series.frame().step, 0.0);
    assert!(series.frame().position_of(7.0).is_none());
}

// ============================================================================
// Query Tests
// ============================================================================

/// Test that queries delegate to the core.
#[test]
fn test_series_queries() {
    let series = lightcurve();

    assert_eq!(series.bound(2.5).unwrap().as_pair(), (1, 2));
    assert_relative_eq!(series.eval_at(3.25).unwrap(), 32.5);
    assert_eq!(
        series.eval_array(&[1.0, 1.5, 5.0]).unwrap(),
        vec![10.0, 15.0, 50.0]
    );
    assert_eq!(series.lookup_nearest(3.6).unwrap(), (4.0, 40.0));

    let (x, y) = series.lookup_interpolated(4.5).unwrap();
    assert_relative_eq!(x, 4.5);
    assert_relative_eq!(y, 45.0);
}

/// Test that an empty series reports insufficient data.
#[test]
fn test_empty_series_queries() {
    let series = SeriesBuilder::<f64>::new()
        .coords(&[] as &[f64])
        .values(&[] as &[f64])
        .build()
        .unwrap();

    assert!(series.is_empty());
    assert!(matches!(
        series.eval_at(1.0),
        Err(FrogError::Splat(SplatError::InsufficientData { .. }))
    ));
}

// ============================================================================
// Section Tests
// ============================================================================

/// Test that a section carries the prefixed names and kind.
#[test]
fn test_section_naming() {
    let series = lightcurve();
    let section = series.section(&[(2.0, 4.0)]).unwrap().unwrap();

    assert_eq!(section.short_name(), "Section of: lc");
    assert_eq!(section.full_name(), "Section of: lc.fits[1]");
    assert_eq!(section.kind(), SeriesKind::TimeSeries);
    assert_eq!(section.buffer().coords(), &[2.0, 3.0, 4.0]);
    assert_relative_eq!(section.range().x_min, 2.0);
    assert_relative_eq!(section.range().x_max, 4.0);
}

/// Test that a gap marker separates windows in the new series.
#[test]
fn test_section_gap_marker() {
    let series = lightcurve();
    let section = series.section(&[(1.0, 2.0), (4.0, 5.0)]).unwrap().unwrap();

    assert_eq!(section.buffer().coords(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert!(is_bad(section.buffer().values()[2]));
    assert!(is_bad(section.eval_at(2.5).unwrap()));
    assert_relative_eq!(section.range().y_min, 10.0);
    assert_relative_eq!(section.range().y_max, 50.0);
}

/// Test that a section outside the data yields nothing.
#[test]
fn test_section_empty() {
    let series = lightcurve();
    assert!(series.section(&[(20.0, 30.0)]).unwrap().is_none());
}

// ============================================================================
// Snapshot Tests
// ============================================================================

/// Test that a snapshot restores names, policy and derived state.
#[test]
fn test_snapshot_round_trip() {
    let series = SeriesBuilder::new()
        .name("gram")
        .kind(SeriesKind::Periodogram)
        .coords(&[0.1, 0.2, 0.3])
        .values(&[1.0, bad::<f64>(), 3.0])
        .errors(&[0.1, 0.1, 0.1])
        .bound_policy(Strict)
        .build()
        .unwrap();

    let snapshot = series.snapshot();
    assert!(snapshot.strict);
    assert_eq!(snapshot.kind, SeriesKind::Periodogram);

    let restored = Series::from_snapshot(snapshot).unwrap();
    assert_eq!(restored, series);
    assert_eq!(restored.data().policy(), Strict);
    assert_eq!(restored.frame(), series.frame());
}

/// Test that a malformed snapshot is rejected.
#[test]
fn test_snapshot_length_mismatch() {
    let mut snapshot = lightcurve().snapshot();
    snapshot.values.pop();

    assert!(matches!(
        Series::from_snapshot(snapshot),
        Err(FrogError::Splat(SplatError::InvalidLength { .. }))
    ));
}
