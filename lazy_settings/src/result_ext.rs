//! Extensions for mapping errors to `SettingsResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(SettingsError::…(e)))`
//! patterns when converting external error types into the crate's
//! `SettingsResult<T>` alias (`Result<T, Arc<SettingsError>>`).
//!
//! # Examples
//!
//! ```
//! use lazy_settings::{SettingsResult, SettingsResultExt};
//!
//! fn parse() -> SettingsResult<serde_json::Value> {
//!     // serde_json::Error implements Into<SettingsError>
//!     serde_json::from_str("{\"port\": 8080}").into_settings()
//! }
//! # assert!(parse().is_ok());
//! ```

use std::sync::Arc;

use crate::{SettingsError, SettingsResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<SettingsError>` into a `SettingsResult<T>`.
pub trait SettingsResultExt<T, E> {
    /// Convert `Result<T, E>` into `SettingsResult<T>` using
    /// `Into<SettingsError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into
    /// `Arc<SettingsError>`.
    fn into_settings(self) -> SettingsResult<T>;
}

impl<T, E> SettingsResultExt<T, E> for Result<T, E>
where
    E: Into<SettingsError>,
{
    fn into_settings(self) -> SettingsResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
