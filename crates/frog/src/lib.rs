//! # FROG (time series and periodogram objects)
//!
//! Named time series and periodograms built on the `splat` sampled-series
//! core: a fluent builder accepting slices, vectors and ndarray arrays,
//! cursor readouts, section extraction into new named series, a registry of
//! open series with their views, and JSON persistence.
//!
//! ## Quick Start
//!
//! ```rust
//! use frog::prelude::*;
//!
//! let series = SeriesBuilder::new()
//!     .name("lightcurve")
//!     .coords(&[1.0, 2.0, 3.0, 4.0, 5.0])
//!     .values(&[10.0, 20.0, 30.0, 40.0, 50.0])
//!     .build()?;
//!
//! assert_eq!(series.eval_at(2.5)?, 25.0);
//! assert_eq!(series.format_lookup(2.4)?, "2, 20");
//! assert_eq!(series.format_interpolated_lookup(2.5)?, "2.5, 25");
//! # Result::<(), FrogError>::Ok(())
//! ```
//!
//! ## Periodograms and ndarray
//!
//! ```rust
//! use frog::prelude::*;
//! use ndarray::Array1;
//!
//! let freq = Array1::from_vec(vec![0.1, 0.2, 0.3, 0.4]);
//! let power = Array1::from_vec(vec![1.0, 4.0, 2.0, 0.5]);
//!
//! let gram = SeriesBuilder::new()
//!     .kind(SeriesKind::Periodogram)
//!     .coords(&freq)
//!     .values(&power)
//!     .build()?;
//!
//! assert_eq!(gram.short_name(), "Periodogram");
//! assert_eq!(gram.kind().x_label(), "Frequency");
//! # Result::<(), FrogError>::Ok(())
//! ```
//!
//! ## Sections and the registry
//!
//! ```rust
//! use frog::prelude::*;
//!
//! let series = SeriesBuilder::new()
//!     .name("star")
//!     .coords(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
//!     .values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
//!     .build()?;
//!
//! let mut registry: SeriesRegistry<f64> = SeriesRegistry::new();
//! let section = series.section(&[(1.0, 2.5), (4.5, 6.0)])?.expect("data in range");
//! let original = registry.insert(series, ());
//! let extracted = registry.insert(section, ());
//!
//! assert_eq!(registry.find_by_name("Section of: star"), Some(extracted));
//! assert_eq!(registry.find_by_name("star"), Some(original));
//! # Result::<(), FrogError>::Ok(())
//! ```

// Layer 1: Errors and input handling.
mod errors;
mod input;

// Layer 2: Model - series objects, frames and snapshots.
mod model;

// Layer 3: Engine - parallel execution.
mod engine;

// Layer 4: Services - readouts, registry and storage.
mod backend;
mod readout;
mod registry;

// High-level fluent API for named series.
mod api;

// Standard FROG prelude.
pub mod prelude {
    pub use splat::prelude::{
        bad, is_bad, BoundPolicy, Bracket, Clamp, Order, RangeSummary, SampleBuffer,
        SampledSeries, SplatError, Strict,
    };

    pub use crate::api::SeriesBuilder;
    pub use crate::backend::Backend;
    pub use crate::errors::FrogError;
    pub use crate::input::SeriesInput;
    pub use crate::model::frame::{SeriesFrame, UNIFORM_TOLERANCE};
    pub use crate::model::kind::SeriesKind;
    pub use crate::model::series::{Series, SECTION_PREFIX};
    pub use crate::model::snapshot::SeriesSnapshot;
    pub use crate::readout::{Readout, BAD_TEXT};
    pub use crate::registry::{SeriesHandle, SeriesRegistry};
}
