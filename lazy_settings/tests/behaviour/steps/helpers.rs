//! Parsing helpers shared by step definitions.

use anyhow::{Context, Result};
use lazy_settings::Settings;
use serde_json::Value;

/// Parse inline JSON from a step into a value.
pub fn parse_json(text: &str) -> Result<Value> {
    serde_json::from_str(text.trim()).with_context(|| format!("invalid JSON in step: {text}"))
}

/// Parse inline JSON from a step into a settings object.
pub fn parse_settings(text: &str) -> Result<Settings> {
    Ok(Settings::try_from(parse_json(text)?)?)
}
