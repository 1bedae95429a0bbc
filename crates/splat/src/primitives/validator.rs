//! Input validation for sample buffers and queries.
//!
//! ## Purpose
//!
//! This module provides the validation functions used when constructing
//! sample buffers, configuring the builder and running bracketing searches.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Lengths**: Values and errors must match the coordinate count.
//! * **Bracketing**: A bracketing search needs at least 2 samples.
//! * **Queries**: NaN queries are rejected under every policy.
//! * **Span**: Strict queries must lie within the coordinate span.
//! * **Order**: Coordinates may be required to be monotonic.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not treat BAD values as invalid.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::Order;
use crate::primitives::errors::SplatError;

/// Minimum number of samples for a bracketing search.
pub const MIN_BRACKET_SAMPLES: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sample buffers and queries.
///
/// All methods return `Result<(), SplatError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Validate that `values` and `errors` match the coordinate count.
    pub fn validate_lengths<T>(
        coords: &[T],
        values: &[T],
        errors: Option<&[T]>,
    ) -> Result<(), SplatError> {
        let n = coords.len();
        if values.len() != n {
            return Err(SplatError::InvalidLength {
                field: "values",
                expected: n,
                got: values.len(),
            });
        }
        if let Some(e) = errors {
            if e.len() != n {
                return Err(SplatError::InvalidLength {
                    field: "errors",
                    expected: n,
                    got: e.len(),
                });
            }
        }
        Ok(())
    }

    /// Validate that coordinates never change direction.
    ///
    /// Equal neighbours are accepted. The direction is taken from the
    /// endpoints, as the bracketing search does.
    pub fn validate_monotonic<T: Float>(coords: &[T]) -> Result<(), SplatError> {
        let ascending = Order::of(coords) == Order::Ascending;
        for (i, w) in coords.windows(2).enumerate() {
            let in_order = if ascending { w[0] <= w[1] } else { w[0] >= w[1] };
            if !in_order {
                return Err(SplatError::NotMonotonic { index: i + 1 });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Validate that enough samples exist for a bracketing search.
    pub fn validate_bracketable(n: usize) -> Result<(), SplatError> {
        if n < MIN_BRACKET_SAMPLES {
            return Err(SplatError::InsufficientData {
                got: n,
                min: MIN_BRACKET_SAMPLES,
            });
        }
        Ok(())
    }

    /// Validate that a query coordinate is a number.
    pub fn validate_query<T: Float>(query: T) -> Result<(), SplatError> {
        if query.is_nan() {
            return Err(SplatError::InvalidInput(
                "query coordinate is NaN".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate that `query` lies within the span of `coords` (inclusive).
    ///
    /// NaN queries are rejected.
    pub fn validate_in_span<T: Float>(coords: &[T], query: T) -> Result<(), SplatError> {
        let (min, max) = match (coords.first(), coords.last()) {
            (Some(&first), Some(&last)) => (first.min(last), first.max(last)),
            _ => {
                return Err(SplatError::InsufficientData {
                    got: 0,
                    min: MIN_BRACKET_SAMPLES,
                })
            }
        };

        if !(query >= min && query <= max) {
            return Err(SplatError::OutOfRange {
                query: query.to_f64().unwrap_or(f64::NAN),
                min: min.to_f64().unwrap_or(f64::NAN),
                max: max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Builder
    // ========================================================================

    /// Validate that a required builder parameter was set.
    pub fn validate_required<V>(value: Option<V>, parameter: &'static str) -> Result<V, SplatError> {
        value.ok_or(SplatError::MissingParameter { parameter })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SplatError> {
        if let Some(param) = duplicate_param {
            return Err(SplatError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
