//! Cursor readouts.
//!
//! ## Purpose
//!
//! This module formats the coordinate/value pairs shown while the cursor
//! moves over a plotted series. BAD values print as `BAD` rather than as a
//! huge negative number.

// External dependencies
use std::fmt::{Display, Formatter, Result};

use num_traits::Float;
use tracing::warn;

// Export dependencies from splat crate
use splat::prelude::is_bad;

// Internal dependencies
use crate::errors::FrogError;
use crate::model::series::Series;

/// Text printed in place of a BAD value.
pub const BAD_TEXT: &str = "BAD";

/// A coordinate/value pair ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout<T> {
    /// Coordinate of the reading.
    pub coord: T,

    /// Value at the coordinate (may be BAD).
    pub value: T,
}

impl<T: Float> Readout<T> {
    /// Whether the value is the BAD sentinel.
    pub fn is_bad(&self) -> bool {
        is_bad(self.value)
    }
}

impl<T: Float + Display> Display for Readout<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_bad() {
            write!(f, "{}, {}", self.coord, BAD_TEXT)
        } else {
            write!(f, "{}, {}", self.coord, self.value)
        }
    }
}

impl<T: Float + Display> Series<T> {
    /// Readout of the sample nearest to `x`.
    pub fn format_lookup(&self, x: T) -> std::result::Result<String, FrogError> {
        let (coord, value) = self.lookup_nearest(x)?;
        let readout = Readout { coord, value };
        if readout.is_bad() {
            warn!(series = %self.short_name(), coord = %coord, "lookup landed on a BAD sample");
        }
        Ok(readout.to_string())
    }

    /// Readout of the value interpolated at `x`.
    pub fn format_interpolated_lookup(&self, x: T) -> std::result::Result<String, FrogError> {
        let (coord, value) = self.lookup_interpolated(x)?;
        Ok(Readout { coord, value }.to_string())
    }
}
