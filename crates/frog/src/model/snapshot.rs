//! Persistent form of a series.
//!
//! A snapshot holds only names, kind, query policy and the raw sample arrays.
//! Ranges and frames are rebuilt when the snapshot is turned back into a
//! [`Series`](crate::model::series::Series).

// External dependencies
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::model::kind::SeriesKind;

/// Serializable names and raw arrays of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SeriesSnapshot<T> {
    /// Short display name.
    pub short_name: String,

    /// Full name (usually the source file and extension).
    pub full_name: String,

    /// Time series or periodogram.
    pub kind: SeriesKind,

    /// Reject out-of-range queries instead of extrapolating.
    #[serde(default)]
    pub strict: bool,

    /// Sample coordinates.
    pub coords: Vec<T>,

    /// Sample values, BAD for gaps.
    pub values: Vec<T>,

    /// Per-sample errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<T>>,
}
