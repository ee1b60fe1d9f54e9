//! Deep merging of settings objects.
//!
//! Later layers win. Two values merge key by key only when both are mappings;
//! every other combination (arrays, scalars, nulls, lazy values, or a mapping
//! meeting a non-mapping) replaces the earlier value wholesale. A lazy value is
//! therefore always an atomic override.

use crate::{SettingValue, Settings};

/// Overlay `layer` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - Mappings are merged recursively (keys are added or overwritten, and
///   nested mappings are overlaid).
/// - Arrays, scalars, nulls and lazy values replace `target` wholesale.
///
/// # Examples
///
/// ```rust
/// use lazy_settings::{SettingValue, Settings, merge_value};
/// use serde_json::json;
///
/// let mut acc = SettingValue::from(json!({"a": 1, "b": {"x": 1}}));
/// merge_value(&mut acc, SettingValue::from(json!({"b": {"y": 2}, "c": 3})));
/// assert_eq!(acc.to_json(), Some(json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3})));
///
/// // Arrays replace existing values.
/// merge_value(&mut acc, SettingValue::from(json!({"b": [1, 2, 3]})));
/// assert_eq!(acc.to_json(), Some(json!({"a": 1, "b": [1, 2, 3], "c": 3})));
/// ```
pub fn merge_value(target: &mut SettingValue, layer: SettingValue) {
    match (target, layer) {
        (SettingValue::Mapping(existing), SettingValue::Mapping(incoming)) => {
            merge_mapping(existing, incoming);
        }
        (slot, replacement) => *slot = replacement,
    }
}

/// Merge every layer into `target` in order, returning `target`.
///
/// This is the in-place form: the first settings object is mutated and handed
/// back so calls can be chained.
///
/// # Examples
///
/// ```rust
/// use lazy_settings::{Settings, merge_into};
///
/// let mut base = Settings::new().with("foo", "bar");
/// merge_into(&mut base, [Settings::new().with("foo", "baz")]);
/// assert_eq!(base.get("foo").and_then(|v| v.as_str()), Some("baz"));
/// ```
pub fn merge_into<I>(target: &mut Settings, layers: I) -> &mut Settings
where
    I: IntoIterator<Item = Settings>,
{
    for (index, layer) in layers.into_iter().enumerate() {
        tracing::trace!(layer = index, keys = layer.len(), "merging settings layer");
        merge_mapping(target, layer);
    }
    target
}

/// Deep-merge `objects` into a single settings object.
///
/// The inputs are consumed; callers that need to keep an input untouched pass
/// a clone. Zero inputs produce an empty mapping and a single input is
/// returned unchanged.
///
/// # Examples
///
/// ```rust
/// use lazy_settings::{Settings, merge_objects};
///
/// let merged = merge_objects([
///     Settings::new().with("foo", "bar"),
///     Settings::new().with("foo", "baz"),
///     Settings::new().with("foo", "qux"),
/// ]);
/// assert_eq!(merged, Settings::new().with("foo", "qux"));
/// assert!(merge_objects(Vec::new()).is_empty());
/// ```
#[must_use]
pub fn merge_objects<I>(objects: I) -> Settings
where
    I: IntoIterator<Item = Settings>,
{
    let mut layers = objects.into_iter();
    let Some(mut merged) = layers.next() else {
        return Settings::new();
    };
    merge_into(&mut merged, layers);
    merged
}

fn merge_mapping(target: &mut Settings, incoming: Settings) {
    for (key, value) in incoming {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}
