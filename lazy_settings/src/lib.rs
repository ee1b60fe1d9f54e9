//! Layered settings with deep merging and lazily-evaluated values.
//!
//! Settings are nested mappings of [`SettingValue`]s. A value is either plain
//! data, a nested [`Settings`] mapping, or a [`LazySetting`]: a callable that
//! is evaluated on lookup with the whole settings object as its context, so a
//! setting can be derived from its siblings.
//!
//! Two operations make up the crate:
//!
//! - [`merge_objects`] (and its in-place sibling [`merge_into`]) deep-merge an
//!   ordered sequence of settings objects, later objects winning on conflicts.
//! - [`evaluate_setting`] resolves a dotted property path such as
//!   `"server.port"` and invokes lazy values it finds there.
//!
//! ```rust
//! use lazy_settings::{Settings, SettingValue, evaluate_setting, merge_objects};
//!
//! let defaults = Settings::new()
//!     .with("greeting", "Hello")
//!     .with_lazy("message", |settings: &Settings| {
//!         let greeting = settings.get("greeting").and_then(SettingValue::as_str);
//!         format!("{} World", greeting.unwrap_or_default())
//!     });
//! let overrides = Settings::new().with("greeting", "Hola");
//!
//! let settings = merge_objects([defaults, overrides]);
//! let message = evaluate_setting(Some(&settings), "message")?;
//! assert_eq!(message.as_str(), Some("Hola World"));
//! # Ok::<_, std::sync::Arc<lazy_settings::SettingsError>>(())
//! ```

mod error;
mod evaluate;
mod merge;
pub mod path;
mod result_ext;
mod value;

pub use error::{SettingsError, SettingsResult};
pub use evaluate::{evaluate_setting, evaluate_setting_as};
pub use merge::{merge_into, merge_objects, merge_value};
pub use path::{PropertyPath, lookup};
pub use result_ext::SettingsResultExt;
pub use value::{LazySetting, SettingValue, Settings};
