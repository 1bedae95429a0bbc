//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the series algorithms:
//! - Tight and padded data ranges
//! - Bracketing search over monotonic coordinates
//! - Linear evaluation and cursor lookups
//! - Section extraction with gap markers
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Data ranges for axis autoscaling.
pub mod range;

/// Bracketing search.
pub mod bound;

/// Evaluation and lookups.
pub mod interpolation;

/// Section extraction.
pub mod section;
