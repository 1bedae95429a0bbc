//! Series objects.
//!
//! # Purpose
//!
//! This module holds the application-level series types: the series kind,
//! the named [`Series`](series::Series) wrapper, its derived coordinate frame
//! and its persistent snapshot.

/// Kinds of sampled series.
pub mod kind;

/// Derived coordinate frames.
pub mod frame;

/// Persistent snapshots.
pub mod snapshot;

/// Named time series and periodograms.
pub mod series;
