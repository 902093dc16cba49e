//! Behavioural tests for `outcome` using `rstest-bdd`.
//!
//! Step implementations live under [`steps`], while [`scenarios`] binds the
//! `.feature` file to the shared fixtures.

mod scenarios;
mod steps;
