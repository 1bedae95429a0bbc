//! Registry of open series.
//!
//! ## Purpose
//!
//! This module provides [`SeriesRegistry`], the application's record of every
//! open time series or periodogram together with the view that displays it.
//!
//! ## Design notes
//!
//! * **Injected**: The registry is an ordinary value owned by the application
//!   shell and passed by reference to whatever needs lookups.
//! * **Opaque handles**: Entries are addressed by [`SeriesHandle`]s allocated
//!   per registry. Handles are never reused, so a stale handle cannot reach a
//!   newer series.
//! * **Ordering**: Iteration follows insertion order.
//!
//! ## Non-goals
//!
//! * This module does not create or close views; `V` is whatever the caller
//!   associates with a series.

// External dependencies
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};

use num_traits::Float;
use serde::{Deserialize, Serialize};
use tracing::debug;

// Internal dependencies
use crate::errors::FrogError;
use crate::model::series::Series;

// ============================================================================
// Handle
// ============================================================================

/// Opaque identifier of a registered series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeriesHandle(u64);

impl SeriesHandle {
    /// Raw handle number.
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl Display for SeriesHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Registry
// ============================================================================

#[derive(Debug, Clone)]
struct Entry<T, V> {
    series: Series<T>,
    view: V,
}

/// Map from handles to open series and their views.
#[derive(Debug, Clone)]
pub struct SeriesRegistry<T, V = ()> {
    entries: BTreeMap<SeriesHandle, Entry<T, V>>,
    next_id: u64,
}

impl<T: Float, V> Default for SeriesRegistry<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float, V> SeriesRegistry<T, V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Register a series with its view, returning its new handle.
    pub fn insert(&mut self, series: Series<T>, view: V) -> SeriesHandle {
        let handle = SeriesHandle(self.next_id);
        self.next_id += 1;
        debug!(%handle, name = %series.short_name(), "series registered");
        self.entries.insert(handle, Entry { series, view });
        handle
    }

    /// Remove a series, returning it with its view.
    pub fn remove(&mut self, handle: SeriesHandle) -> std::result::Result<(Series<T>, V), FrogError> {
        let entry = self
            .entries
            .remove(&handle)
            .ok_or(FrogError::UnknownHandle(handle))?;
        debug!(%handle, name = %entry.series.short_name(), "series removed");
        Ok((entry.series, entry.view))
    }

    /// The series registered under `handle`.
    pub fn get(&self, handle: SeriesHandle) -> Option<&Series<T>> {
        self.entries.get(&handle).map(|e| &e.series)
    }

    /// Mutable access to the series registered under `handle`.
    pub fn get_mut(&mut self, handle: SeriesHandle) -> Option<&mut Series<T>> {
        self.entries.get_mut(&handle).map(|e| &mut e.series)
    }

    /// The view associated with `handle`.
    pub fn view(&self, handle: SeriesHandle) -> Option<&V> {
        self.entries.get(&handle).map(|e| &e.view)
    }

    /// Mutable access to the view associated with `handle`.
    pub fn view_mut(&mut self, handle: SeriesHandle) -> Option<&mut V> {
        self.entries.get_mut(&handle).map(|e| &mut e.view)
    }

    /// Whether `handle` is registered.
    pub fn contains(&self, handle: SeriesHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// First series (in insertion order) whose short or full name is `name`.
    pub fn find_by_name(&self, name: &str) -> Option<SeriesHandle> {
        self.entries
            .iter()
            .find(|(_, e)| e.series.short_name() == name || e.series.full_name() == name)
            .map(|(&handle, _)| handle)
    }

    /// Registered handles in insertion order.
    pub fn handles(&self) -> impl Iterator<Item = SeriesHandle> + '_ {
        self.entries.keys().copied()
    }

    /// Registered entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (SeriesHandle, &Series<T>, &V)> + '_ {
        self.entries
            .iter()
            .map(|(&handle, e)| (handle, &e.series, &e.view))
    }

    /// Number of registered series.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no series is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
