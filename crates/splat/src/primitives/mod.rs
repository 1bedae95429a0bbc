//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the sample container, the BAD sentinel and the shared
//! error type, plus the validation shared by the algorithms and the builder.
//! It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Sample storage and the BAD sentinel.
pub mod buffer;

/// Shared error types.
pub mod errors;

/// Input validation.
pub mod validator;
