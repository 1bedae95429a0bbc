//! Storage backends for series.
//!
//! ## Purpose
//!
//! This module provides [`Backend`], the place a series is loaded from and
//! saved to. Every backend stores a [`SeriesSnapshot`]; the range and frame
//! are rebuilt on load.
//!
//! ## Design notes
//!
//! * **Memory**: Holds a snapshot in the process. Used for undo copies and
//!   for series created from other series.
//! * **Json**: A pretty-printed JSON file on disk. JSON has no NaN or
//!   infinity, so saving a series with a non-finite sample fails before the
//!   file is touched. BAD is finite and round-trips exactly.
//!
//! ## Non-goals
//!
//! * This module does not read FITS tables or text columns.

// External dependencies
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use num_traits::Float;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

// Export dependencies from splat crate
use splat::prelude::SplatError;

// Internal dependencies
use crate::errors::FrogError;
use crate::model::series::Series;
use crate::model::snapshot::SeriesSnapshot;

/// Where a series is stored.
#[derive(Debug, Clone, PartialEq)]
pub enum Backend<T> {
    /// A snapshot held in memory.
    Memory(SeriesSnapshot<T>),

    /// A JSON snapshot file.
    Json(PathBuf),
}

impl<T> Backend<T>
where
    T: Float + Serialize + DeserializeOwned,
{
    /// In-memory backend holding the current state of `series`.
    pub fn memory(series: &Series<T>) -> Self {
        Backend::Memory(series.snapshot())
    }

    /// JSON file backend at `path`.
    pub fn json(path: impl Into<PathBuf>) -> Self {
        Backend::Json(path.into())
    }

    /// Path of a file backend.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Backend::Memory(_) => None,
            Backend::Json(path) => Some(path),
        }
    }

    /// Load the stored series.
    pub fn load(&self) -> Result<Series<T>, FrogError> {
        match self {
            Backend::Memory(snapshot) => Series::from_snapshot(snapshot.clone()),
            Backend::Json(path) => {
                let reader = BufReader::new(File::open(path)?);
                let snapshot: SeriesSnapshot<T> = serde_json::from_reader(reader)?;
                let series = Series::from_snapshot(snapshot)?;
                info!(path = %path.display(), name = %series.short_name(), samples = series.len(), "series loaded");
                Ok(series)
            }
        }
    }

    /// Store `series`, replacing whatever the backend held.
    pub fn save(&mut self, series: &Series<T>) -> Result<(), FrogError> {
        match self {
            Backend::Memory(snapshot) => {
                *snapshot = series.snapshot();
                Ok(())
            }
            Backend::Json(path) => {
                ensure_finite(series)?;
                let mut writer = BufWriter::new(File::create(&*path)?);
                serde_json::to_writer_pretty(&mut writer, &series.snapshot())?;
                writer.flush()?;
                info!(path = %path.display(), name = %series.short_name(), samples = series.len(), "series saved");
                Ok(())
            }
        }
    }
}

/// Reject series that JSON cannot represent.
fn ensure_finite<T: Float>(series: &Series<T>) -> Result<(), FrogError> {
    let buffer = series.buffer();
    let arrays = [
        ("coords", Some(buffer.coords())),
        ("values", Some(buffer.values())),
        ("errors", buffer.errors()),
    ];

    for (field, array) in arrays {
        if let Some(index) = array.and_then(|a| a.iter().position(|v| !v.is_finite())) {
            return Err(SplatError::InvalidInput(format!(
                "{field}[{index}] is not finite and cannot be stored as JSON"
            ))
            .into());
        }
    }
    Ok(())
}
