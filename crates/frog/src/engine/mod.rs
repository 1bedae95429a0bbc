//! Execution engine.
//!
//! # Purpose
//!
//! This layer provides execution strategies over the `splat` core, currently
//! the rayon-backed array evaluation.

/// Parallel evaluation.
pub mod executor;
