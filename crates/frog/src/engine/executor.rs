//! Parallel evaluation of sampled series.
//!
//! ## Purpose
//!
//! This module evaluates a sampled series at many query coordinates at once,
//! spreading the queries over the rayon thread pool. Curve rendering asks for
//! one value per screen column, which is where this pays off.
//!
//! ## Design notes
//!
//! * **Implementation**: A drop-in replacement for the sequential `eval_array`.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Sharing**: Queries only read the series, so it is shared by reference.
//! * **Fallback**: Without the `cpu` feature the sequential path is used.
//!
//! ## Invariants
//!
//! * The output has the same length and order as the queries.
//! * Results equal the sequential evaluation element for element.
//!
//! ## Non-goals
//!
//! * This module does not validate the samples (handled by the `splat` builder).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from splat crate
use splat::prelude::{SampledSeries, SplatError};

// ============================================================================
// Parallel Evaluation
// ============================================================================

/// Evaluate `series` at every coordinate in `xs` in parallel.
///
/// The first failing query (in any thread) aborts the evaluation.
#[cfg(feature = "cpu")]
pub fn eval_array_parallel<T>(series: &SampledSeries<T>, xs: &[T]) -> Result<Vec<T>, SplatError>
where
    T: Float + Send + Sync,
{
    xs.par_iter().map(|&x| series.eval_at(x)).collect()
}

/// Evaluate `series` at every coordinate in `xs` sequentially.
#[cfg(not(feature = "cpu"))]
pub fn eval_array_parallel<T>(series: &SampledSeries<T>, xs: &[T]) -> Result<Vec<T>, SplatError>
where
    T: Float + Send + Sync,
{
    series.eval_array(xs)
}
