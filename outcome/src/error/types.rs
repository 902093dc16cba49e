//! Container-raised failures and the shared failure handle.

use std::{any::Any, error::Error as StdError, fmt, sync::Arc};

use thiserror::Error;

/// Shared handle to a captured failure object.
///
/// The handle is reference counted so an [`UnwrapFailure`] can attach the
/// original failure as its cause without copying it. Two handles refer to
/// the same failure object exactly when [`Arc::ptr_eq`] holds.
pub type SharedFailure = Arc<dyn StdError + Send + Sync + 'static>;

/// Owned failure object of any error type.
///
/// Operations whose errors come from other crates return this, usually
/// through `?`, to have them captured.
pub type BoxedFailure = Box<dyn StdError + Send + Sync + 'static>;

/// Raised when the value of a failed [`Outcome`](crate::Outcome) is
/// requested.
///
/// The failure is deliberately generic: it says nothing about the kind of
/// the captured failure beyond exposing it through [`StdError::source`] and
/// [`UnwrapFailure::captured`]. Callers that need typed handling should branch
/// on [`Outcome::matches`](crate::Outcome::matches) before unwrapping.
#[derive(Debug, Clone)]
pub struct UnwrapFailure {
    cause: SharedFailure,
}

impl UnwrapFailure {
    pub(crate) const fn new(cause: SharedFailure) -> Self {
        Self { cause }
    }

    /// The failure captured by the outcome that was unwrapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use outcome::Outcome;
    ///
    /// let outcome: Outcome<u8> = Outcome::fail(std::fmt::Error);
    /// let err = outcome.try_get().unwrap_err();
    /// let captured = outcome.failure().expect("failure is stored");
    /// assert!(Arc::ptr_eq(err.captured(), captured));
    /// ```
    #[must_use]
    pub const fn captured(&self) -> &SharedFailure {
        &self.cause
    }

    /// Consume the failure, returning the captured cause.
    #[must_use]
    pub fn into_captured(self) -> SharedFailure {
        self.cause
    }
}

impl fmt::Display for UnwrapFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "called `get` on a failed outcome: {}", self.cause)
    }
}

// The source is the captured failure itself rather than its `Arc`, so
// callers can downcast it to the concrete failure type.
impl StdError for UnwrapFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause)
    }
}

/// Failure recorded when a captured operation panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation panicked: {message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Build a panic failure from a panic payload.
    ///
    /// `&str` and `String` payloads (everything `panic!` produces) keep
    /// their message; other payloads are reported generically.
    #[must_use]
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|msg| (*msg).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("non-string panic payload"));
        Self { message }
    }

    /// The panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
