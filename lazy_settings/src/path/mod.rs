//! Property paths and the deep-get helper shared by evaluation.
//!
//! A property path addresses a location inside nested settings. Segments are
//! separated by `.`; array elements can be addressed either with a numeric
//! segment (`servers.0.host`) or with brackets (`servers[0].host`). Bracketed
//! segments may be quoted to carry dots (`labels["app.kubernetes.io"]`).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::{SettingValue, Settings};

/// A parsed property path.
///
/// # Examples
///
/// ```
/// use lazy_settings::PropertyPath;
///
/// let path = PropertyPath::parse("servers[0].host");
/// assert_eq!(path.segments(), ["servers", "0", "host"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    raw: String,
    segments: Vec<String>,
}

impl PropertyPath {
    /// Parse `raw` into segments. Parsing never fails: unmatched brackets are
    /// kept as literal key text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            segments: split_segments(raw),
        }
    }

    /// The path as originally written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve the path against `settings` without evaluating lazy values.
    ///
    /// Returns `None` as soon as a segment is missing or descends into a value
    /// that is neither a mapping nor an array.
    #[must_use]
    pub fn resolve<'a>(&self, settings: &'a Settings) -> Option<&'a SettingValue> {
        let mut segments = self.segments.iter();
        let first = segments.next()?;
        segments.try_fold(settings.get(first)?, |current, segment| {
            step(current, segment)
        })
    }
}

impl FromStr for PropertyPath {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(raw))
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Resolve `property` against `settings` without evaluating lazy values.
///
/// When `property` is itself a top-level key (for example a key literally
/// named `"a.b"`), that entry is returned before any dotted descent is
/// attempted.
///
/// # Examples
///
/// ```
/// use lazy_settings::{Settings, lookup};
///
/// let settings = Settings::new().with("foo", Settings::new().with("bar", "baz"));
/// assert_eq!(lookup(&settings, "foo.bar").and_then(|v| v.as_str()), Some("baz"));
/// assert!(lookup(&settings, "foo.missing").is_none());
/// ```
#[must_use]
pub fn lookup<'a>(settings: &'a Settings, property: &str) -> Option<&'a SettingValue> {
    settings
        .get(property)
        .or_else(|| PropertyPath::parse(property).resolve(settings))
}

fn step<'a>(value: &'a SettingValue, segment: &str) -> Option<&'a SettingValue> {
    match value {
        SettingValue::Mapping(settings) => settings.get(segment),
        SettingValue::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index)),
        _ => None,
    }
}

fn split_segments(raw: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut after_bracket = false;
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if !after_bracket {
                    segments.push(std::mem::take(&mut current));
                }
                after_bracket = false;
            }
            '[' => {
                let rest = chars.as_str();
                if let Some(close) = rest.find(']') {
                    let (inner, tail) = rest.split_at(close);
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                    segments.push(unquote(inner).to_owned());
                    after_bracket = true;
                    chars = tail.strip_prefix(']').unwrap_or(tail).chars();
                } else {
                    current.push(ch);
                    after_bracket = false;
                }
            }
            _ => {
                current.push(ch);
                after_bracket = false;
            }
        }
    }

    if !after_bracket || !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn unquote(inner: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            inner
                .strip_prefix(quote)
                .and_then(|text| text.strip_suffix(quote))
        })
        .unwrap_or(inner)
}
