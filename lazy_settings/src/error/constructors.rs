//! Constructors and accessors for `SettingsError`.

use std::sync::Arc;

use super::SettingsError;

impl SettingsError {
    /// Construct a not-found error for `property`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_settings::SettingsError;
    /// let err = SettingsError::not_found("missing.path");
    /// assert_eq!(err.to_string(), "Setting not found: missing.path");
    /// ```
    #[must_use]
    pub fn not_found(property: impl Into<String>) -> Self {
        Self::NotFound {
            property: property.into(),
        }
    }

    /// Construct a not-found error already wrapped in an [`Arc`].
    #[must_use]
    pub fn not_found_arc(property: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::not_found(property))
    }

    /// Construct an unresolved-lazy-value error for `property`.
    #[must_use]
    pub fn unresolved(property: impl Into<String>) -> Self {
        Self::Unresolved {
            property: property.into(),
        }
    }

    /// Construct a decode error for `property`.
    #[must_use]
    pub fn decode(property: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            property: property.into(),
            source,
        }
    }

    /// Returns the property path the error refers to, when there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_settings::SettingsError;
    /// let err = SettingsError::not_found("server.port");
    /// assert_eq!(err.property(), Some("server.port"));
    /// ```
    #[must_use]
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::NotFound { property }
            | Self::Unresolved { property }
            | Self::Decode { property, .. } => Some(property),
            _ => None,
        }
    }

    /// Returns `true` when the error reports a missing setting.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
