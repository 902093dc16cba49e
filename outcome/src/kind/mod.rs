//! Nominal classification of failure objects.
//!
//! Rust errors have no open class hierarchy, so a failure type declares its
//! place in one through [`Kind`]. Every kind is a member of itself; a subtype
//! additionally chains to its supertype's [`Kind::is_a`], forming the
//! supertype chain that [`Outcome::matches`](crate::Outcome::matches) walks.
//!
//! Most failure types implement the trait with `#[derive(Kind)]`:
//!
//! ```
//! use outcome::{Kind, Outcome};
//!
//! #[derive(Debug, thiserror::Error, Kind)]
//! #[error("storage failure")]
//! struct StorageFailure;
//!
//! #[derive(Debug, thiserror::Error, Kind)]
//! #[error("disk full")]
//! #[kind(parent = StorageFailure)]
//! struct DiskFull;
//!
//! let outcome: Outcome<()> = Outcome::fail(DiskFull);
//! assert!(outcome.matches::<DiskFull>());
//! assert!(outcome.matches::<StorageFailure>());
//! assert!(!outcome.matches::<std::io::Error>());
//! ```
//!
//! Error types from other crates cannot implement `Kind`; they are captured
//! through [`IntoFailure`] as boxed failures and classified by exact type.

use std::{any::TypeId, error::Error};

mod into_failure;
mod std_impls;

pub use into_failure::IntoFailure;

/// A failure type that can be captured and classified by an outcome.
///
/// The single method answers whether this type is the kind identified by
/// `kind` or one of its subtypes. The default accepts only the implementing
/// type itself, which makes it a root kind. A subtype overrides it to also
/// defer to its supertype:
///
/// ```
/// use std::any::TypeId;
/// use outcome::Kind;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("query timed out")]
/// struct QueryTimeout;
///
/// impl Kind for QueryTimeout {
///     fn is_a(kind: TypeId) -> bool {
///         kind == TypeId::of::<Self>() || std::io::Error::is_a(kind)
///     }
/// }
///
/// assert!(QueryTimeout::is_a(TypeId::of::<std::io::Error>()));
/// ```
pub trait Kind: Error + Send + Sync + 'static {
    /// Returns `true` when `Self` is `kind` or a subtype of `kind`.
    #[must_use]
    fn is_a(kind: TypeId) -> bool {
        kind == TypeId::of::<Self>()
    }
}

/// Returns `true` when `E` is `K` or a declared subtype of `K`.
///
/// # Examples
///
/// ```
/// use outcome::{Panicked, is_subkind};
///
/// assert!(is_subkind::<Panicked, Panicked>());
/// assert!(!is_subkind::<Panicked, std::io::Error>());
/// ```
#[must_use]
pub fn is_subkind<E: Kind, K: Kind>() -> bool {
    E::is_a(TypeId::of::<K>())
}
