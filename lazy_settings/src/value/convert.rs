//! Conversions between settings and plain data formats.
//!
//! JSON is the interchange format: [`serde_json::Value`] converts losslessly
//! into [`SettingValue`], and `serde` support for both [`Settings`] and
//! [`SettingValue`] is routed through it. TOML documents are accepted behind
//! the `toml` feature.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::Error as _};
use serde_json::{Map, Number, Value};

use crate::{SettingsError, SettingsResult, SettingsResultExt};

use super::{SettingValue, Settings};

impl From<Value> for SettingValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => Self::Number(number),
            Value::String(text) => Self::String(text),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Mapping(Settings::from(map)),
        }
    }
}

impl From<Map<String, Value>> for Settings {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl TryFrom<Value> for Settings {
    type Error = SettingsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            other => Err(SettingsError::NotAMapping {
                found: SettingValue::from(other).kind(),
            }),
        }
    }
}

impl From<Settings> for SettingValue {
    fn from(settings: Settings) -> Self {
        Self::Mapping(settings)
    }
}

impl From<Vec<SettingValue>> for SettingValue {
    fn from(items: Vec<Self>) -> Self {
        Self::Array(items)
    }
}

impl From<&str> for SettingValue {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for SettingValue {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<bool> for SettingValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<Number> for SettingValue {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SettingValue {
                fn from(number: $ty) -> Self {
                    Self::Number(Number::from(number))
                }
            }
        )*
    };
}

from_integer!(i32, i64, u16, u32, u64, usize);

impl From<f64> for SettingValue {
    /// Non-finite floats have no JSON representation and become
    /// [`SettingValue::Null`].
    fn from(number: f64) -> Self {
        Number::from_f64(number).map_or(Self::Null, Self::Number)
    }
}

impl<T: Into<SettingValue>> From<Option<T>> for SettingValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl Serialize for SettingValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) => number.serialize(serializer),
            Self::String(text) => serializer.serialize_str(text),
            Self::Array(items) => items.serialize(serializer),
            Self::Mapping(settings) => settings.serialize(serializer),
            Self::Lazy(_) => Err(S::Error::custom(
                "lazy settings cannot be serialised before they are evaluated",
            )),
        }
    }
}

impl Serialize for Settings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for SettingValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl<'de> Deserialize<'de> for Settings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Self::from)
    }
}

impl Settings {
    /// Parse a JSON document whose root is an object.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Json`] for malformed text and
    /// [`SettingsError::NotAMapping`] when the root is not an object.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_settings::Settings;
    ///
    /// let settings = Settings::from_json_str(r#"{"server": {"port": 8080}}"#)?;
    /// assert_eq!(settings.lookup("server.port").and_then(|v| v.as_u64()), Some(8080));
    /// # Ok::<_, std::sync::Arc<lazy_settings::SettingsError>>(())
    /// ```
    pub fn from_json_str(text: &str) -> SettingsResult<Self> {
        let value: Value = serde_json::from_str(text).into_settings()?;
        Self::try_from(value).map_err(Arc::new)
    }

    /// Parse a TOML document.
    ///
    /// Datetimes are kept as their RFC 3339 string form.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Toml`] for malformed text.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_settings::Settings;
    ///
    /// let settings = Settings::from_toml_str("[server]\nport = 8080\n")?;
    /// assert_eq!(settings.lookup("server.port").and_then(|v| v.as_i64()), Some(8080));
    /// # Ok::<_, std::sync::Arc<lazy_settings::SettingsError>>(())
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(text: &str) -> SettingsResult<Self> {
        let table: toml::Table = toml::from_str(text).into_settings()?;
        Ok(Self::from(table))
    }
}

#[cfg(feature = "toml")]
impl From<toml::Value> for SettingValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(text) => Self::String(text),
            toml::Value::Integer(number) => Self::from(number),
            toml::Value::Float(number) => Self::from(number),
            toml::Value::Boolean(flag) => Self::Bool(flag),
            toml::Value::Datetime(datetime) => Self::String(datetime.to_string()),
            toml::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            toml::Value::Table(table) => Self::Mapping(Settings::from(table)),
        }
    }
}

#[cfg(feature = "toml")]
impl From<toml::Table> for Settings {
    fn from(table: toml::Table) -> Self {
        table.into_iter().collect()
    }
}
