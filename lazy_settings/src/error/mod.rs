//! Error types produced while building and evaluating settings.

mod constructors;
mod types;

use std::sync::Arc;

pub use types::SettingsError;

/// Result type used throughout the crate.
///
/// Errors are shared behind an [`Arc`] so a failure raised by a lazy setting
/// can be handed back through every evaluation that depended on it without
/// cloning the underlying error.
pub type SettingsResult<T> = Result<T, Arc<SettingsError>>;
