//! The immutable success-or-failure container.

use std::{any::TypeId, error::Error, fmt, sync::Arc};

use crate::{
    capture::Capture,
    error::{SharedFailure, UnwrapFailure},
    kind::IntoFailure,
};

/// A failure object together with the is-a test of the type it was raised as.
#[derive(Clone)]
pub(crate) struct Captured {
    failure: SharedFailure,
    is_a: fn(TypeId) -> bool,
}

impl Captured {
    pub(crate) fn new<E: IntoFailure>(failure: E) -> Self {
        Self {
            failure: failure.into_shared(),
            is_a: E::descends_from,
        }
    }

    pub(crate) const fn failure(&self) -> &SharedFailure {
        &self.failure
    }

    fn is<K: Error + 'static>(&self) -> bool {
        self.failure.is::<K>() || (self.is_a)(TypeId::of::<K>())
    }
}

#[derive(Clone)]
enum State<T> {
    Succeeded(T),
    Failed(Captured),
}

/// The captured result of a single fallible operation.
///
/// An outcome is either succeeded, holding the produced value, or failed,
/// holding the failure object the operation raised. The state is fixed when
/// the outcome is built and no method mutates it, so inspection can be
/// repeated freely and shared across threads. Success is tracked by the
/// state itself, never inferred from the value: `Outcome<Option<T>>`
/// holding `None` is a success.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// let parsed = Outcome::capture(|| "42".parse::<u32>());
/// assert!(!parsed.is_failure());
/// assert_eq!(*parsed.get(), 42);
///
/// let broken = Outcome::capture(|| "forty-two".parse::<u32>());
/// assert!(broken.is_failure());
/// assert!(broken.matches::<std::num::ParseIntError>());
/// ```
#[derive(Clone)]
#[must_use = "an outcome may hold a failure that should be inspected"]
pub struct Outcome<T> {
    state: State<T>,
}

impl<T> Outcome<T> {
    /// Run `operation` once, capturing its value or its failure.
    ///
    /// Returned errors and panics are both absorbed into the outcome; this
    /// call never propagates the operation's failure. Use [`Capture`] to
    /// let panics escape instead.
    ///
    /// The error type is any [`IntoFailure`]: a [`Kind`](crate::Kind), or a
    /// [`BoxedFailure`](crate::BoxedFailure) for errors from other crates.
    ///
    /// ```
    /// use outcome::{BoxedFailure, Outcome};
    ///
    /// let home = Outcome::capture(|| -> Result<String, BoxedFailure> {
    ///     Ok(std::env::var("OUTCOME_DOC_UNSET")?)
    /// });
    /// assert!(home.matches::<std::env::VarError>());
    /// ```
    pub fn capture<F, E>(operation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: IntoFailure,
    {
        Capture::new().run(operation)
    }

    /// An outcome that already succeeded with `value`.
    pub const fn succeed(value: T) -> Self {
        Self {
            state: State::Succeeded(value),
        }
    }

    /// An outcome that already failed with `failure`.
    ///
    /// Passing the [`SharedFailure`] of another outcome stores that same
    /// object; it then matches its exact type only.
    pub fn fail<E: IntoFailure>(failure: E) -> Self {
        Self::from_captured(Captured::new(failure))
    }

    pub(crate) const fn from_captured(captured: Captured) -> Self {
        Self {
            state: State::Failed(captured),
        }
    }

    /// Returns `true` when the outcome holds a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.state, State::Failed(_))
    }

    /// Returns `true` when the outcome holds a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !self.is_failure()
    }

    /// The stored failure object, or `None` when the outcome succeeded.
    ///
    /// The handle refers to the very object the operation raised; it is
    /// neither wrapped nor copied.
    #[must_use]
    pub const fn failure(&self) -> Option<&SharedFailure> {
        match &self.state {
            State::Succeeded(_) => None,
            State::Failed(captured) => Some(captured.failure()),
        }
    }

    /// Downcast the stored failure to the concrete type `E`.
    ///
    /// Unlike [`Outcome::matches`] this only succeeds for the exact runtime
    /// type of the failure.
    #[must_use]
    pub fn failure_as<E: Error + 'static>(&self) -> Option<&E> {
        self.failure()
            .and_then(|failure| failure.downcast_ref::<E>())
    }

    /// Returns `true` when the outcome failed with a `K` or a subtype of `K`.
    ///
    /// Subtypes are those declared through [`Kind`](crate::Kind). Any other error type
    /// matches when it is the failure's exact runtime type. Always `false`
    /// for a succeeded outcome.
    #[must_use]
    pub fn matches<K: Error + 'static>(&self) -> bool {
        match &self.state {
            State::Succeeded(_) => false,
            State::Failed(captured) => captured.is::<K>(),
        }
    }

    /// The value, or `None` when the outcome failed.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match &self.state {
            State::Succeeded(value) => Some(value),
            State::Failed(_) => None,
        }
    }

    /// The value, or an [`UnwrapFailure`] carrying the captured failure.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapFailure`] when the outcome failed; its cause is the
    /// stored failure object.
    pub fn try_get(&self) -> Result<&T, UnwrapFailure> {
        match &self.state {
            State::Succeeded(value) => Ok(value),
            State::Failed(captured) => Err(UnwrapFailure::new(Arc::clone(captured.failure()))),
        }
    }

    /// The value of a succeeded outcome.
    ///
    /// # Panics
    ///
    /// Panics when the outcome failed. The panic payload is an
    /// [`UnwrapFailure`] whose cause is the stored failure; it can be
    /// recovered with [`std::panic::catch_unwind`] or by capturing the
    /// unwrapping code in another outcome. Check [`Outcome::is_failure`] or
    /// use [`Outcome::try_get`] to avoid the panic.
    ///
    /// The default panic hook prints a non-string payload as `Box<dyn Any>`,
    /// so the cause only reaches the output through the `error` event this
    /// emits first. Install a `tracing` subscriber to see it, or use
    /// [`Outcome::try_get`] and report the error yourself.
    #[track_caller]
    #[must_use]
    pub fn get(&self) -> &T {
        match self.try_get() {
            Ok(value) => value,
            Err(failure) => raise(failure),
        }
    }

    /// Consume the outcome, returning the value of a succeeded outcome.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapFailure`] payload when the outcome failed,
    /// exactly as [`Outcome::get`] does. Without a `tracing` subscriber the
    /// panic message does not name the cause.
    #[track_caller]
    #[must_use]
    pub fn into_value(self) -> T {
        match self.state {
            State::Succeeded(value) => value,
            State::Failed(captured) => raise(UnwrapFailure::new(captured.failure)),
        }
    }

    /// Consume the outcome, returning the failure object if there is one.
    #[must_use]
    pub fn into_failure(self) -> Option<SharedFailure> {
        match self.state {
            State::Succeeded(_) => None,
            State::Failed(captured) => Some(captured.failure),
        }
    }

    /// Convert the outcome back into a `Result` for `?`-based code.
    ///
    /// # Errors
    ///
    /// Returns the stored failure object when the outcome failed.
    pub fn into_result(self) -> Result<T, SharedFailure> {
        match self.state {
            State::Succeeded(value) => Ok(value),
            State::Failed(captured) => Err(captured.failure),
        }
    }
}

#[track_caller]
fn raise(failure: UnwrapFailure) -> ! {
    tracing::error!(cause = %failure.captured(), "unwrapped a failed outcome");
    std::panic::panic_any(failure)
}

impl<T> From<Outcome<T>> for Result<T, SharedFailure> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Succeeded(value) => f.debug_tuple("Succeeded").field(value).finish(),
            State::Failed(captured) => f.debug_tuple("Failed").field(captured.failure()).finish(),
        }
    }
}
