//! Execution policy for capturing an operation's outcome.
//!
//! [`Capture`] runs a fallible operation exactly once on the calling thread
//! and turns whatever it produced into an [`Outcome`]. Returned errors are
//! always captured; how panics are treated is governed by [`PanicPolicy`].

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use crate::{
    error::{Panicked, UnwrapFailure},
    kind::IntoFailure,
    outcome::{Captured, Outcome},
};

/// How [`Capture::run`] treats an operation that panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanicPolicy {
    /// Record the panic as the outcome's failure.
    ///
    /// A payload raised by unwrapping another failed outcome is stored as
    /// that [`UnwrapFailure`]; any other payload becomes [`Panicked`].
    #[default]
    Absorb,
    /// Let the panic continue unwinding out of [`Capture::run`].
    Resume,
}

/// Configuration for running an operation into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use outcome::{Capture, Panicked, PanicPolicy};
///
/// let capture = Capture::new();
/// assert_eq!(capture.panic_policy(), PanicPolicy::Absorb);
///
/// let outcome = capture.run(|| -> Result<u8, Infallible> { panic!("boom") });
/// assert!(outcome.matches::<Panicked>());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capture {
    panics: PanicPolicy,
}

impl Capture {
    /// A capture that absorbs panics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            panics: PanicPolicy::Absorb,
        }
    }

    /// Replace the panic policy.
    #[must_use]
    pub const fn with_panic_policy(mut self, policy: PanicPolicy) -> Self {
        self.panics = policy;
        self
    }

    /// Shorthand for `with_panic_policy(PanicPolicy::Resume)`.
    #[must_use]
    pub const fn resume_panics(self) -> Self {
        self.with_panic_policy(PanicPolicy::Resume)
    }

    /// The configured panic policy.
    #[must_use]
    pub const fn panic_policy(&self) -> PanicPolicy {
        self.panics
    }

    /// Run `operation` once and capture what it produced.
    ///
    /// `Ok` becomes a succeeded outcome and `Err` a failed one. A panic is
    /// handled according to the [`PanicPolicy`].
    ///
    /// # Panics
    ///
    /// Only under [`PanicPolicy::Resume`], when `operation` itself panics;
    /// the original payload is resumed unchanged.
    pub fn run<T, E, F>(self, operation: F) -> Outcome<T>
    where
        F: FnOnce() -> Result<T, E>,
        E: IntoFailure,
    {
        match self.panics {
            PanicPolicy::Resume => settle(operation()),
            PanicPolicy::Absorb => match panic::catch_unwind(AssertUnwindSafe(operation)) {
                Ok(result) => settle(result),
                Err(payload) => {
                    let captured = captured_from_panic(payload);
                    tracing::debug!(failure = %captured.failure(), "captured a panicking operation");
                    Outcome::from_captured(captured)
                }
            },
        }
    }
}

fn settle<T, E: IntoFailure>(result: Result<T, E>) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::succeed(value),
        Err(err) => {
            let captured = Captured::new(err);
            tracing::debug!(failure = %captured.failure(), "captured a failed operation");
            Outcome::from_captured(captured)
        }
    }
}

fn captured_from_panic(payload: Box<dyn Any + Send>) -> Captured {
    match payload.downcast::<UnwrapFailure>() {
        Ok(unwrap) => Captured::new(*unwrap),
        Err(other) => Captured::new(Panicked::from_payload(other.as_ref())),
    }
}
