//! Settings values and the mapping that holds them.
//!
//! [`SettingValue`] is an explicit tagged union: plain data, a nested
//! [`Settings`] mapping, or a [`LazySetting`] evaluated on lookup. Code that
//! needs to know whether a value is callable matches on the variant instead of
//! inspecting it at runtime.

mod convert;
mod lazy;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use crate::SettingsResult;

pub use lazy::LazySetting;

/// A single settings value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SettingValue {
    /// Explicit null. Evaluating a path that holds null reports the setting as
    /// missing.
    #[default]
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer or floating point number.
    Number(Number),
    /// UTF-8 string.
    String(String),
    /// Ordered list of values. Arrays are replaced, never merged element-wise.
    Array(Vec<SettingValue>),
    /// Nested settings mapping.
    Mapping(Settings),
    /// Callable evaluated with the enclosing settings object as context.
    Lazy(LazySetting),
}

impl SettingValue {
    /// Wrap an infallible callable as a lazy value.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_settings::{SettingValue, Settings};
    ///
    /// let value = SettingValue::lazy(|_: &Settings| 42_u64);
    /// assert!(value.is_lazy());
    /// ```
    #[must_use]
    pub fn lazy<F, V>(f: F) -> Self
    where
        F: Fn(&Settings) -> V + Send + Sync + 'static,
        V: Into<Self>,
    {
        Self::Lazy(LazySetting::new(f))
    }

    /// Wrap a fallible callable as a lazy value.
    ///
    /// Errors returned by the callable propagate unchanged out of
    /// [`crate::evaluate_setting`].
    #[must_use]
    pub fn try_lazy<F, V>(f: F) -> Self
    where
        F: Fn(&Settings) -> SettingsResult<V> + Send + Sync + 'static,
        V: Into<Self>,
    {
        Self::Lazy(LazySetting::fallible(f))
    }

    /// Human-readable name of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Mapping(_) => "mapping",
            Self::Lazy(_) => "lazy value",
        }
    }

    /// Returns `true` for [`SettingValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`SettingValue::Lazy`].
    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Returns `true` for [`SettingValue::Mapping`].
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Borrow the string payload.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Copy out the boolean payload.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Numeric payload as `i64`, when it fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    /// Numeric payload as `u64`, when it fits.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(number) => number.as_u64(),
            _ => None,
        }
    }

    /// Numeric payload as `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => number.as_f64(),
            _ => None,
        }
    }

    /// Borrow the array payload.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the nested mapping.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Settings> {
        match self {
            Self::Mapping(settings) => Some(settings),
            _ => None,
        }
    }

    /// Mutably borrow the nested mapping.
    #[must_use]
    pub const fn as_mapping_mut(&mut self) -> Option<&mut Settings> {
        match self {
            Self::Mapping(settings) => Some(settings),
            _ => None,
        }
    }

    /// Borrow the lazy callable.
    #[must_use]
    pub const fn as_lazy(&self) -> Option<&LazySetting> {
        match self {
            Self::Lazy(lazy) => Some(lazy),
            _ => None,
        }
    }

    /// Convert into plain JSON data.
    ///
    /// Returns `None` when a lazy value appears anywhere inside, since a
    /// callable has no data representation until it is evaluated.
    #[must_use]
    pub fn to_json(&self) -> Option<Value> {
        Some(match self {
            Self::Null => Value::Null,
            Self::Bool(flag) => Value::Bool(*flag),
            Self::Number(number) => Value::Number(number.clone()),
            Self::String(text) => Value::String(text.clone()),
            Self::Array(items) => Value::Array(
                items
                    .iter()
                    .map(Self::to_json)
                    .collect::<Option<Vec<_>>>()?,
            ),
            Self::Mapping(settings) => settings.to_json()?,
            Self::Lazy(_) => return None,
        })
    }
}

/// A settings object: string keys mapped to [`SettingValue`]s.
///
/// Keys are kept in sorted order so merged output is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    entries: BTreeMap<String, SettingValue>,
}

impl Settings {
    /// Create an empty settings object.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_settings::Settings;
    ///
    /// let settings = Settings::new().with("port", 8080_u64).with("host", "localhost");
    /// assert_eq!(settings.len(), 2);
    /// ```
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style insert of an infallible lazy value.
    #[must_use]
    pub fn with_lazy<F, V>(self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Self) -> V + Send + Sync + 'static,
        V: Into<SettingValue>,
    {
        self.with(key, SettingValue::lazy(f))
    }

    /// Insert `value` under `key`, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> Option<SettingValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a top-level key without interpreting dots.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.entries.get(key)
    }

    /// Mutable top-level lookup.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut SettingValue> {
        self.entries.get_mut(key)
    }

    /// Remove a top-level key.
    pub fn remove(&mut self, key: &str) -> Option<SettingValue> {
        self.entries.remove(key)
    }

    /// Returns `true` when `key` is a top-level key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over top-level entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SettingValue)> {
        self.entries.iter()
    }

    /// Iterate over top-level keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Resolve a dotted property path without evaluating lazy values.
    ///
    /// See [`crate::lookup`].
    #[must_use]
    pub fn lookup(&self, property: &str) -> Option<&SettingValue> {
        crate::path::lookup(self, property)
    }

    /// Deep-merge `other` into `self`; `other` wins on conflicts.
    ///
    /// See [`crate::merge_into`].
    pub fn merge(&mut self, other: Self) -> &mut Self {
        crate::merge::merge_into(self, [other])
    }

    /// Resolve and evaluate `property`.
    ///
    /// # Errors
    ///
    /// See [`crate::evaluate_setting`].
    pub fn evaluate(&self, property: &str) -> SettingsResult<SettingValue> {
        crate::evaluate::evaluate_setting(Some(self), property)
    }

    /// Resolve and evaluate `property`, decoding the result into `T`.
    ///
    /// # Errors
    ///
    /// See [`crate::evaluate_setting_as`].
    pub fn evaluate_as<T: DeserializeOwned>(&self, property: &str) -> SettingsResult<T> {
        crate::evaluate::evaluate_setting_as(Some(self), property)
    }

    /// Convert into a JSON object, or `None` when a lazy value is present.
    #[must_use]
    pub fn to_json(&self) -> Option<Value> {
        self.entries
            .iter()
            .map(|(key, value)| value.to_json().map(|json| (key.clone(), json)))
            .collect::<Option<serde_json::Map<_, _>>>()
            .map(Value::Object)
    }
}

impl<K, V> FromIterator<(K, V)> for Settings
where
    K: Into<String>,
    V: Into<SettingValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut settings = Self::new();
        settings.extend(iter);
        settings
    }
}

impl<K, V> Extend<(K, V)> for Settings
where
    K: Into<String>,
    V: Into<SettingValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Settings {
    type Item = (String, SettingValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, SettingValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Settings {
    type Item = (&'a String, &'a SettingValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, SettingValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
