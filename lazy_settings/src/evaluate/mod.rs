//! Evaluation of settings by dotted property path.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{SettingValue, Settings, SettingsError, SettingsResult, path};

static EMPTY_SETTINGS: Settings = Settings::new();

/// Resolve `property` against `settings`, invoking a lazy value found there.
///
/// Missing settings (`None`) are treated as an empty mapping. A path that
/// resolves to nothing or to an explicit null is reported as
/// [`SettingsError::NotFound`]. A lazy value is called exactly once with the
/// settings object as its context and its result is returned as-is, even if
/// that result is itself lazy or null.
///
/// # Errors
///
/// Returns [`SettingsError::NotFound`] when the setting is absent, or the
/// error produced by a fallible lazy value.
///
/// # Examples
///
/// ```
/// use lazy_settings::{SettingValue, Settings, evaluate_setting};
///
/// let settings = Settings::new()
///     .with("greeting", "Hola")
///     .with_lazy("message", |settings: &Settings| {
///         let greeting = settings.get("greeting").and_then(SettingValue::as_str);
///         format!("{} World", greeting.unwrap_or_default())
///     });
///
/// let message = evaluate_setting(Some(&settings), "message")?;
/// assert_eq!(message.as_str(), Some("Hola World"));
///
/// let err = evaluate_setting(None, "foo").unwrap_err();
/// assert_eq!(err.to_string(), "Setting not found: foo");
/// # Ok::<_, std::sync::Arc<lazy_settings::SettingsError>>(())
/// ```
pub fn evaluate_setting(
    settings: Option<&Settings>,
    property: &str,
) -> SettingsResult<SettingValue> {
    let context = settings.unwrap_or(&EMPTY_SETTINGS);
    match path::lookup(context, property) {
        None | Some(SettingValue::Null) => {
            tracing::debug!(property = %property, "setting not found");
            Err(SettingsError::not_found_arc(property))
        }
        Some(SettingValue::Lazy(lazy)) => {
            tracing::debug!(property = %property, "evaluating lazy setting");
            lazy.call(context)
        }
        Some(value) => Ok(value.clone()),
    }
}

/// Evaluate `property` and decode the result into `T`.
///
/// # Errors
///
/// In addition to the failures of [`evaluate_setting`], returns
/// [`SettingsError::Unresolved`] when the result still contains a lazy value
/// and [`SettingsError::Decode`] when it does not fit `T`.
///
/// # Examples
///
/// ```
/// use lazy_settings::{Settings, evaluate_setting_as};
///
/// let settings = Settings::from_json_str(r#"{"server": {"port": 8080}}"#)?;
/// let port: u16 = evaluate_setting_as(Some(&settings), "server.port")?;
/// assert_eq!(port, 8080);
/// # Ok::<_, std::sync::Arc<lazy_settings::SettingsError>>(())
/// ```
pub fn evaluate_setting_as<T: DeserializeOwned>(
    settings: Option<&Settings>,
    property: &str,
) -> SettingsResult<T> {
    let value = evaluate_setting(settings, property)?;
    let json = value
        .to_json()
        .ok_or_else(|| Arc::new(SettingsError::unresolved(property)))?;
    serde_json::from_value(json)
        .map_err(|source| Arc::new(SettingsError::decode(property, source)))
}
