//! Bracketing search over monotonic coordinates.
//!
//! ## Purpose
//!
//! This module finds the pair of adjacent sample indices whose coordinates
//! bracket a query coordinate. Every lookup, interpolation and section
//! extraction starts here.
//!
//! ## Design notes
//!
//! * **Direction**: The search branches once on `coords[0] < coords[last]` and
//!   works for ascending and descending coordinates alike.
//! * **Termination**: The bracket narrows while `low < high - 1`; an exact hit
//!   on a midpoint collapses it to `(mid, mid)` immediately.
//! * **Endpoints**: A query equal to a coordinate on the final bracket edge also
//!   collapses to that index, so every sample coordinate maps to `(k, k)`.
//! * **Clamping**: Under [`BoundPolicy::Clamp`] a query outside the coordinate
//!   span converges to the first or last pair without error, and callers that
//!   interpolate on that pair extrapolate.
//!
//! ## Invariants
//!
//! * The result satisfies `low <= high < len` and `high - low <= 1`.
//! * The search is pure; repeated calls return the same pair.
//! * A NaN query is rejected with [`SplatError::InvalidInput`] under every policy.
//!
//! ## Non-goals
//!
//! * This module does not verify that coordinates are monotonic.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::{Order, SampleBuffer};
use crate::primitives::errors::SplatError;
use crate::primitives::validator::Validator;

// ============================================================================
// Bound Policy
// ============================================================================

/// Behaviour for queries outside the coordinate span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundPolicy {
    /// Converge to the nearest boundary pair (callers extrapolate).
    #[default]
    Clamp,

    /// Reject the query with [`SplatError::OutOfRange`].
    Strict,
}

// ============================================================================
// Bracket
// ============================================================================

/// Indices of the samples bracketing a query coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    /// Lower index.
    pub low: usize,

    /// Upper index (equal to `low` on an exact match).
    pub high: usize,
}

impl Bracket {
    /// Whether the query matched a sample coordinate exactly.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.low == self.high
    }

    /// The bracket as a `(low, high)` tuple.
    #[inline]
    pub fn as_pair(&self) -> (usize, usize) {
        (self.low, self.high)
    }
}

// ============================================================================
// Search
// ============================================================================

/// Find the bracketing indices of `query` under the default clamping policy.
///
/// Fails with [`SplatError::InsufficientData`] when fewer than 2 samples exist.
pub fn bound<T: Float>(buffer: &SampleBuffer<T>, query: T) -> Result<Bracket, SplatError> {
    bound_with(buffer, query, BoundPolicy::Clamp)
}

/// Find the bracketing indices of `query` under the given policy.
pub fn bound_with<T: Float>(
    buffer: &SampleBuffer<T>,
    query: T,
    policy: BoundPolicy,
) -> Result<Bracket, SplatError> {
    let coords = buffer.coords();
    Validator::validate_bracketable(coords.len())?;
    Validator::validate_query(query)?;
    if policy == BoundPolicy::Strict {
        Validator::validate_in_span(coords, query)?;
    }
    Ok(search(coords, query))
}

/// Binary search on at least 2 coordinates for a query that is not NaN.
fn search<T: Float>(coords: &[T], query: T) -> Bracket {
    let mut low = 0;
    let mut high = coords.len() - 1;
    let ascending = Order::of(coords) == Order::Ascending;

    while low < high - 1 {
        let mid = (low + high) / 2;
        let c = coords[mid];
        let below = if ascending { query < c } else { query > c };
        let above = if ascending { query > c } else { query < c };

        if below {
            high = mid;
        } else if above {
            low = mid;
        } else {
            return Bracket { low: mid, high: mid };
        }
    }

    // Exact hits on the final edges
    if query == coords[low] {
        high = low;
    } else if query == coords[high] {
        low = high;
    }

    Bracket { low, high }
}
