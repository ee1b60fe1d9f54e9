//! Steps that merge settings layers and inspect the result.

use super::helpers::{parse_json, parse_settings};
use crate::fixtures::MergeContext;
use anyhow::{Result, anyhow, ensure};
use lazy_settings::merge_objects;
use rstest_bdd_macros::{given, then, when};

#[given("a settings layer {layer}")]
fn add_layer(merge_context: &MergeContext, layer: String) -> Result<()> {
    let settings = parse_settings(&layer)?;
    let mut layers = merge_context.layers.get_or_insert_with(Vec::new);
    layers.push(settings);
    Ok(())
}

#[when("the layers are merged")]
fn merge_layers(merge_context: &MergeContext) {
    let layers = merge_context.layers.take().unwrap_or_default();
    merge_context.merged.set(merge_objects(layers));
}

#[then("the merged settings equal {expected}")]
fn merged_settings_equal(merge_context: &MergeContext, expected: String) -> Result<()> {
    let expected_json = parse_json(&expected)?;
    let merged = merge_context
        .merged
        .take()
        .ok_or_else(|| anyhow!("expected the layers to be merged"))?;
    let actual = merged
        .to_json()
        .ok_or_else(|| anyhow!("merged settings contain lazy values"))?;
    ensure!(
        actual == expected_json,
        "expected {expected_json}, got {actual}"
    );
    Ok(())
}
