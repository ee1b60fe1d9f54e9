//! Behavioural step modules registered with `rstest-bdd`.

pub mod evaluate_steps;
mod helpers;
pub mod merge_steps;
