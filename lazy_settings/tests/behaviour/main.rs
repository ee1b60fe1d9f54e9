//! Behavioural tests for `lazy_settings` using `rstest-bdd`.
//!
//! Step implementations live under [`steps`], while [`scenarios`] binds the
//! `.feature` files in `tests/features` to the shared fixtures.

mod fixtures;
mod scenarios;
pub mod steps;
