//! Primary error enum for settings ingestion and evaluation.

use thiserror::Error;

/// Errors that can occur while ingesting or evaluating settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// The requested property resolved to nothing or to an explicit null.
    #[error("Setting not found: {property}")]
    NotFound {
        /// Dotted path that was requested.
        property: String,
    },

    /// Typed evaluation reached a lazy value that has no data representation.
    ///
    /// Lazy settings are only invoked when they sit directly at the requested
    /// path; a lazy value nested inside the result (or returned by another
    /// lazy value) is left untouched.
    #[error("Setting '{property}' contains a lazy value that has not been evaluated")]
    Unresolved {
        /// Dotted path that was requested.
        property: String,
    },

    /// Typed evaluation could not convert the setting into the caller's type.
    #[error("Failed to decode setting '{property}': {source}")]
    Decode {
        /// Dotted path that was requested.
        property: String,
        /// Underlying deserialisation failure.
        #[source]
        source: serde_json::Error,
    },

    /// A document meant to hold settings did not have a mapping at its root.
    #[error("Expected a settings mapping but found {found}")]
    NotAMapping {
        /// Kind of value found at the root.
        found: &'static str,
    },

    /// JSON settings text could not be parsed.
    #[error("Failed to parse JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML settings text could not be parsed.
    #[cfg(feature = "toml")]
    #[error("Failed to parse TOML settings: {0}")]
    Toml(#[from] toml::de::Error),
}
