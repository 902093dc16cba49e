//! Adapting `Result`-returning call sites into outcomes.
//!
//! Code that already holds a `Result<T, E>` can hand it across a boundary
//! as an [`Outcome`] without re-running anything:
//!
//! ```
//! use outcome::OutcomeResultExt;
//!
//! let outcome = "7".parse::<u8>().into_outcome();
//! assert_eq!(*outcome.get(), 7);
//! ```

use crate::{IntoFailure, Outcome};

/// Extension converting a `Result<T, E>` into an [`Outcome<T>`].
pub trait OutcomeResultExt<T, E> {
    /// `Ok` becomes a succeeded outcome and `Err` a failed one.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> OutcomeResultExt<T, E> for Result<T, E>
where
    E: IntoFailure,
{
    fn into_outcome(self) -> Outcome<T> {
        self.map_or_else(Outcome::fail, Outcome::succeed)
    }
}
