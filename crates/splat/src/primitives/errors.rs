//! Error types for sampled-series operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when building a
//! sample buffer or querying it: mismatched array lengths, too few samples to
//! bracket a query, strict-mode range violations and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Local**: Every error is a synchronous precondition violation; there is no retry.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Construction errors**: Length mismatches, non-monotonic coordinates.
//! 2. **Query errors**: Too few samples for a bracketing search, strict out-of-range queries.
//! 3. **Builder errors**: Missing or duplicated parameters.
//!
//! ## Non-goals
//!
//! * Missing data is never an error. It travels in-band as the BAD sentinel.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sampled-series operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SplatError {
    /// An array does not have the same number of elements as the coordinates.
    InvalidLength {
        /// Name of the offending array (`"values"` or `"errors"`).
        field: &'static str,
        /// Number of coordinates.
        expected: usize,
        /// Number of elements actually supplied.
        got: usize,
    },

    /// Too few samples to bracket a query coordinate.
    InsufficientData {
        /// Number of samples available.
        got: usize,
        /// Minimum required samples.
        min: usize,
    },

    /// Query lies outside the coordinate span (strict bound policy only).
    OutOfRange {
        /// The query coordinate.
        query: f64,
        /// Smallest coordinate in the buffer.
        min: f64,
        /// Largest coordinate in the buffer.
        max: f64,
    },

    /// Coordinates change direction at the given index.
    NotMonotonic {
        /// Index of the first coordinate that breaks the ordering.
        index: usize,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SplatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidLength {
                field,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Length mismatch: {field} has {got} elements, coords has {expected}"
                )
            }
            Self::InsufficientData { got, min } => {
                write!(f, "Insufficient data: got {got} samples, need at least {min}")
            }
            Self::OutOfRange { query, min, max } => {
                write!(f, "Query {query} lies outside the coordinate range [{min}, {max}]")
            }
            Self::NotMonotonic { index } => {
                write!(f, "Coordinates are not monotonic at index {index}")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' is required but was never set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SplatError {}
