//! Capture the result of a fallible operation as an immutable value.
//!
//! An [`Outcome<T>`] records what a single fallible operation produced:
//! either its value or the failure it raised. Callers can carry the outcome
//! across a boundary and decide later whether it worked, and if not, what
//! kind of failure occurred, without the failure propagating on its own.
//!
//! - [`Outcome::capture`] runs an operation once and absorbs its returned
//!   error or panic.
//! - [`Outcome::matches`] classifies the failure against a [`Kind`],
//!   honouring declared supertypes. Errors from other crates are captured as
//!   a [`BoxedFailure`] and match their exact type.
//! - [`Outcome::get`] returns the value and fails loudly with an
//!   [`UnwrapFailure`] when there is none.
//!
//! ```
//! use outcome::{Kind, Outcome};
//!
//! #[derive(Debug, thiserror::Error, Kind)]
//! #[error("batch step failed")]
//! struct StepFailure;
//!
//! let outcome: Outcome<u32> = Outcome::capture(|| Err(StepFailure));
//! if outcome.matches::<StepFailure>() {
//!     // recover without ever calling `get`
//! }
//! assert!(outcome.try_get().is_err());
//! ```

pub use outcome_macros::Kind;

mod capture;
mod error;
mod kind;
mod outcome;
mod result_ext;

pub use capture::{Capture, PanicPolicy};
pub use error::{BoxedFailure, Panicked, SharedFailure, UnwrapFailure};
pub use kind::{IntoFailure, Kind, is_subkind};
pub use outcome::Outcome;
pub use result_ext::OutcomeResultExt;
