//! # SPLAT (sampled-series core for time series and periodograms)
//!
//! The numerical core shared by time series and periodograms ("grams"):
//! ordered (coordinate, value, optional error) samples with in-band gap
//! markers, axis ranges, bracketing search, piecewise-linear evaluation,
//! cursor lookups and section extraction.
//!
//! ## Quick Start
//!
//! ```rust
//! use splat::prelude::*;
//!
//! let series = Sampled::new()
//!     .coords(vec![1.0, 2.0, 3.0, 4.0, 5.0])
//!     .values(vec![10.0, 20.0, 30.0, 40.0, 50.0])
//!     .build()?;
//!
//! assert_eq!(series.bound(2.5)?.as_pair(), (1, 2));
//! assert_eq!(series.eval_at(2.5)?, 25.0);
//! assert_eq!(series.eval_at(1.0)?, 10.0);
//!
//! let range = series.range_summary();
//! assert_eq!((range.x_min, range.x_max), (1.0, 5.0));
//! assert_eq!((range.y_min, range.y_max), (10.0, 50.0));
//! # Result::<(), SplatError>::Ok(())
//! ```
//!
//! ## Gaps
//!
//! Missing samples hold the BAD sentinel, `-T::max_value()`. BAD values are
//! left out of the Y range, and evaluation returns BAD instead of drawing a
//! line across a gap:
//!
//! ```rust
//! use splat::prelude::*;
//!
//! let series = Sampled::new()
//!     .coords(vec![1.0, 2.0, 3.0])
//!     .values(vec![10.0_f64, bad(), 30.0])
//!     .build()?;
//!
//! let range = series.range_summary();
//! assert_eq!((range.y_min, range.y_max), (10.0, 30.0));
//! assert!(is_bad(series.eval_at(2.0)?));
//! assert!(is_bad(series.eval_at(1.5)?));
//! # Result::<(), SplatError>::Ok(())
//! ```
//!
//! ## Sections
//!
//! ```rust
//! use splat::prelude::*;
//!
//! let series = Sampled::new()
//!     .coords(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
//!     .values(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
//!     .build()?;
//!
//! // Two windows, joined by one BAD gap marker at x = 3.5
//! let section = series.section(&[(1.0, 2.5), (4.5, 6.0)])?.expect("data in range");
//! assert_eq!(section.buffer().coords(), &[1.0, 2.0, 3.5, 5.0, 6.0]);
//! assert!(is_bad(section.buffer().values()[2]));
//!
//! // Nothing in range
//! assert!(series.section(&[(10.0, 20.0)])?.is_none());
//! # Result::<(), SplatError>::Ok(())
//! ```
//!
//! ## Out-of-range queries
//!
//! By default a query outside the coordinate span brackets the nearest end
//! pair and is extrapolated. `BoundPolicy::Strict` rejects such queries:
//!
//! ```rust
//! use splat::prelude::*;
//!
//! let clamped = Sampled::new()
//!     .coords(vec![1.0, 2.0, 3.0])
//!     .values(vec![10.0, 20.0, 30.0])
//!     .build()?;
//! assert_eq!(clamped.eval_at(4.0)?, 40.0);
//!
//! let strict = Sampled::new()
//!     .coords(vec![1.0, 2.0, 3.0])
//!     .values(vec![10.0, 20.0, 30.0])
//!     .bound_policy(Strict)
//!     .build()?;
//! assert!(matches!(strict.eval_at(4.0), Err(SplatError::OutOfRange { .. })));
//! # Result::<(), SplatError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! splat = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - sample storage, errors and validation.
mod primitives;

// Layer 2: Math - two-point linear models.
mod math;

// Layer 3: Algorithms - ranges, bracketing, evaluation and sections.
mod algorithms;

// High-level fluent API for sampled series.
mod api;

// Standard SPLAT prelude.
pub mod prelude {
    pub use crate::algorithms::bound::{bound, bound_with};
    pub use crate::algorithms::interpolation::{
        eval_array, eval_at, lookup_interpolated, lookup_nearest,
    };
    pub use crate::algorithms::range::summarize;
    pub use crate::algorithms::section::extract;
    pub use crate::api::{
        bad, is_bad,
        BoundPolicy::{Clamp, Strict},
        BoundPolicy, Bracket, Order, RangeSummary, SampleBuffer, SampledBuilder as Sampled,
        SampledSeries, SplatError, FULL_RANGE_SLACK,
    };
}
