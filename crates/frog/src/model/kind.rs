//! Kinds of sampled series.

// External dependencies
use serde::{Deserialize, Serialize};

/// What a series' coordinates and values measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeriesKind {
    /// Values against time.
    #[default]
    TimeSeries,

    /// Power against frequency (a "gram").
    Periodogram,
}

impl SeriesKind {
    /// Human-readable name of the kind.
    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::TimeSeries => "Time series",
            SeriesKind::Periodogram => "Periodogram",
        }
    }

    /// Default label for the coordinate axis.
    pub fn x_label(&self) -> &'static str {
        match self {
            SeriesKind::TimeSeries => "Time",
            SeriesKind::Periodogram => "Frequency",
        }
    }

    /// Default label for the value axis.
    pub fn y_label(&self) -> &'static str {
        match self {
            SeriesKind::TimeSeries => "Data value",
            SeriesKind::Periodogram => "Power",
        }
    }
}
