//! Steps that evaluate settings by dotted path.

use super::helpers::{parse_json, parse_settings};
use crate::fixtures::EvaluationContext;
use anyhow::{Result, anyhow, ensure};
use lazy_settings::{SettingValue, Settings, SettingsError, evaluate_setting};
use rstest_bdd_macros::{given, then, when};

#[given("the settings {settings}")]
fn set_settings(evaluation_context: &EvaluationContext, settings: String) -> Result<()> {
    evaluation_context.settings.set(parse_settings(&settings)?);
    Ok(())
}

#[given("no settings")]
fn no_settings(evaluation_context: &EvaluationContext) {
    drop(evaluation_context.settings.take());
}

#[given("the lazy setting {name} joins {first} and {second}")]
fn add_joining_lazy_setting(
    evaluation_context: &EvaluationContext,
    name: String,
    first: String,
    second: String,
) {
    let lazy = SettingValue::try_lazy(move |settings: &Settings| {
        let head: String = settings.evaluate_as(&first)?;
        let tail: String = settings.evaluate_as(&second)?;
        Ok(format!("{head} {tail}"))
    });
    let mut settings = evaluation_context.settings.take().unwrap_or_default();
    settings.insert(name, lazy);
    evaluation_context.settings.set(settings);
}

#[when("the setting {property} is evaluated")]
fn evaluate(evaluation_context: &EvaluationContext, property: String) {
    let settings = evaluation_context.settings.take();
    let outcome = evaluate_setting(settings.as_ref(), &property);
    evaluation_context.outcome.set(outcome);
}

#[then("the evaluated value equals {expected}")]
fn evaluated_value_equals(evaluation_context: &EvaluationContext, expected: String) -> Result<()> {
    let expected_json = parse_json(&expected)?;
    let value = evaluation_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("expected a setting to be evaluated"))??;
    ensure!(
        value.to_json() == Some(expected_json.clone()),
        "expected {expected_json}, got {value:?}"
    );
    Ok(())
}

#[then("evaluation fails because {property} is not found")]
fn evaluation_fails(evaluation_context: &EvaluationContext, property: String) -> Result<()> {
    let outcome = evaluation_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("expected a setting to be evaluated"))?;
    let err = outcome
        .err()
        .ok_or_else(|| anyhow!("expected evaluation to fail"))?;
    ensure!(
        matches!(&*err, SettingsError::NotFound { property: missing } if *missing == property),
        "unexpected error {err:?}"
    );
    ensure!(
        err.to_string() == format!("Setting not found: {property}"),
        "unexpected message {err}"
    );
    Ok(())
}
