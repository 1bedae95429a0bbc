//! Error types for series objects, registries and backends.
//!
//! ## Purpose
//!
//! This module defines [`FrogError`], which wraps core series errors together
//! with the I/O and serialization failures of the storage backends and the
//! lookup failures of the registry.
//!
//! ## Design notes
//!
//! * **Wrapping**: Core errors pass through unchanged as `FrogError::Splat`.
//! * **Chaining**: `source()` exposes the wrapped error.
//! * **Conversion**: `From` implementations allow `?` on every wrapped type.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};
use std::io;

// Export dependencies from splat crate
use splat::prelude::SplatError;

// Internal dependencies
use crate::registry::SeriesHandle;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for series objects, registries and backends.
#[derive(Debug)]
pub enum FrogError {
    /// Invalid samples or query, reported by the series core.
    Splat(SplatError),

    /// Reading or writing a backend file failed.
    Io(io::Error),

    /// A stored snapshot could not be encoded or decoded.
    Format(serde_json::Error),

    /// No series is registered under this handle.
    UnknownHandle(SeriesHandle),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FrogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Splat(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Format(err) => write!(f, "Snapshot format error: {err}"),
            Self::UnknownHandle(handle) => write!(f, "No series registered as {handle}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for FrogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Splat(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Format(err) => Some(err),
            Self::UnknownHandle(_) => None,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<SplatError> for FrogError {
    fn from(err: SplatError) -> Self {
        Self::Splat(err)
    }
}

impl From<io::Error> for FrogError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for FrogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(err)
    }
}
