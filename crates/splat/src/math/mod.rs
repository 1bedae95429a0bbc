//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the series
//! algorithms: two-point lines, bracket fractions and midpoints.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Two-point linear models.
pub mod linear;
