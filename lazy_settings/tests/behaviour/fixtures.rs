//! Shared fixtures for the behavioural scenarios.

use lazy_settings::{SettingValue, Settings, SettingsResult};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Layers collected by `Given` steps and the result of merging them.
#[derive(Debug, Default, ScenarioState)]
pub struct MergeContext {
    /// Layers in the order they were declared.
    pub layers: Slot<Vec<Settings>>,
    /// Result of the most recent merge.
    pub merged: Slot<Settings>,
}

/// Settings under evaluation and the outcome of the last evaluation.
#[derive(Debug, Default, ScenarioState)]
pub struct EvaluationContext {
    /// Settings object; left empty to model absent settings.
    pub settings: Slot<Settings>,
    /// Outcome of the most recent evaluation.
    pub outcome: Slot<SettingsResult<SettingValue>>,
}

/// Provides a clean merge context for each scenario.
#[fixture]
pub fn merge_context() -> MergeContext {
    MergeContext::default()
}

/// Provides a clean evaluation context for each scenario.
#[fixture]
pub fn evaluation_context() -> EvaluationContext {
    EvaluationContext::default()
}
