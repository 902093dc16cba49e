//! Failure types raised by the outcome container itself.

mod types;

pub use types::{BoxedFailure, Panicked, SharedFailure, UnwrapFailure};
