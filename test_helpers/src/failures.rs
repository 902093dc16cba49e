//! A failure hierarchy mirroring a typical runtime error tree.
//!
//! ```text
//! RuntimeFailure
//! └── SpecializedFailure
//!     └── DeeperFailure
//! UnrelatedFailure
//! ```
//!
//! # Examples
//!
//! ```
//! use outcome::Outcome;
//! use test_helpers::failures::{RuntimeFailure, SpecializedFailure};
//!
//! let outcome: Outcome<()> = Outcome::fail(SpecializedFailure);
//! assert!(outcome.matches::<RuntimeFailure>());
//! ```

use outcome::Kind;
use thiserror::Error;

/// Root of the runtime failure tree.
#[derive(Debug, Clone, PartialEq, Eq, Error, Kind)]
#[error("runtime failure: {message}")]
pub struct RuntimeFailure {
    /// Human-readable description.
    pub message: String,
}

impl RuntimeFailure {
    /// Build a runtime failure carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Direct subtype of [`RuntimeFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Kind)]
#[error("special")]
#[kind(parent = RuntimeFailure)]
pub struct SpecializedFailure;

/// Subtype of [`SpecializedFailure`], two levels below the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Kind)]
#[error("deeper")]
#[kind(parent = SpecializedFailure)]
pub struct DeeperFailure;

/// A root kind outside the runtime tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Kind)]
#[error("unrelated")]
pub struct UnrelatedFailure;

/// An operation that always fails with `failure`.
pub fn raising<T, E>(failure: E) -> impl FnOnce() -> Result<T, E> {
    move || -> Result<T, E> { Err(failure) }
}

/// An operation that always panics with `message`.
pub fn panicking<T>(message: &'static str) -> impl FnOnce() -> Result<T, RuntimeFailure> {
    move || -> Result<T, RuntimeFailure> { panic!("{message}") }
}
