//! bodytrack core: body-metric domain types, the error surface, and the
//! metrics engine.
//!
//! This crate carries no transport or runtime dependencies. The server crate
//! owns storage, locking and HTTP; everything here is plain data and pure
//! functions over it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible
//! path surfaces as `TrackerError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod model;
pub mod motivation;

/// Shared result type.
pub use error::{Result, TrackerError};
