//! Callable settings evaluated on lookup.

use std::fmt;
use std::sync::Arc;

use crate::SettingsResult;

use super::{SettingValue, Settings};

type LazyFn = dyn Fn(&Settings) -> SettingsResult<SettingValue> + Send + Sync;

/// A setting whose value is computed when it is evaluated.
///
/// The callable receives the settings object the lookup ran against, so it can
/// read sibling settings. It is shared through an [`Arc`]: cloning or merging a
/// lazy setting never duplicates the closure, and two lazy settings compare
/// equal only when they wrap the same callable.
#[derive(Clone)]
pub struct LazySetting {
    inner: Arc<LazyFn>,
}

impl LazySetting {
    /// Wrap an infallible callable.
    #[must_use]
    pub fn new<F, V>(f: F) -> Self
    where
        F: Fn(&Settings) -> V + Send + Sync + 'static,
        V: Into<SettingValue>,
    {
        let inner: Arc<LazyFn> =
            Arc::new(move |settings: &Settings| -> SettingsResult<SettingValue> {
                Ok(f(settings).into())
            });
        Self { inner }
    }

    /// Wrap a callable that may fail.
    #[must_use]
    pub fn fallible<F, V>(f: F) -> Self
    where
        F: Fn(&Settings) -> SettingsResult<V> + Send + Sync + 'static,
        V: Into<SettingValue>,
    {
        let inner: Arc<LazyFn> =
            Arc::new(move |settings: &Settings| -> SettingsResult<SettingValue> {
                f(settings).map(Into::into)
            });
        Self { inner }
    }

    /// Invoke the callable once with `settings` as its context.
    ///
    /// # Errors
    ///
    /// Returns whatever error the callable produces.
    pub fn call(&self, settings: &Settings) -> SettingsResult<SettingValue> {
        (self.inner)(settings)
    }
}

impl PartialEq for LazySetting {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for LazySetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySetting")
            .field("callable", &"<callable>")
            .finish()
    }
}

impl From<LazySetting> for SettingValue {
    fn from(lazy: LazySetting) -> Self {
        Self::Lazy(lazy)
    }
}
