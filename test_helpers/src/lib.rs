//! Test helpers shared across crates.
//!
//! This crate provides a small failure hierarchy for classification tests
//! and a thread-safe call counter for exactly-once assertions.

pub mod calls;
pub mod failures;
