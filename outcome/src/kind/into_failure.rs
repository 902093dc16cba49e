//! Conversion of raised errors into stored failure objects.

use std::{any::TypeId, sync::Arc};

use super::Kind;
use crate::error::{BoxedFailure, SharedFailure};

/// An error that an [`Outcome`](crate::Outcome) can store as its failure.
///
/// Every [`Kind`] converts, keeping its supertype chain for
/// [`Outcome::matches`](crate::Outcome::matches). Errors from other crates
/// convert through a [`BoxedFailure`], which `?` and `From` produce for any
/// `Error + Send + Sync + 'static`; such failures match their exact runtime
/// type only. A [`SharedFailure`] taken from another outcome is stored as
/// the same object.
///
/// # Examples
///
/// ```
/// use outcome::{BoxedFailure, Outcome};
///
/// let outcome: Outcome<u8> = Outcome::capture(|| -> Result<u8, BoxedFailure> {
///     Ok(u8::try_from(300_u16)?)
/// });
/// assert!(outcome.matches::<std::num::TryFromIntError>());
///
/// let again: Outcome<u8> = Outcome::fail(outcome.into_failure().expect("failed"));
/// assert!(again.matches::<std::num::TryFromIntError>());
/// ```
pub trait IntoFailure {
    /// The failure object to store.
    fn into_shared(self) -> SharedFailure;

    /// Returns `true` when the stored failure is `kind` or a subtype of
    /// `kind` beyond its exact runtime type.
    fn descends_from(kind: TypeId) -> bool;
}

impl<E: Kind> IntoFailure for E {
    fn into_shared(self) -> SharedFailure {
        Arc::new(self)
    }

    fn descends_from(kind: TypeId) -> bool {
        E::is_a(kind)
    }
}

impl IntoFailure for BoxedFailure {
    fn into_shared(self) -> SharedFailure {
        Arc::from(self)
    }

    fn descends_from(_kind: TypeId) -> bool {
        false
    }
}

impl IntoFailure for SharedFailure {
    fn into_shared(self) -> SharedFailure {
        self
    }

    fn descends_from(_kind: TypeId) -> bool {
        false
    }
}
