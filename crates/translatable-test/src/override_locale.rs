//! Locale override utility for tests.
//!
//! Provides [`override_locale`] to temporarily switch the active and fallback
//! locale for the duration of a closure, then restore the originals. State is
//! thread-local, so parallel tests do not interfere with each other.
//!
//! ## Example
//!
//! ```
//! use translatable_core::i18n;
//! use translatable_test::override_locale::{override_locale, LocaleOverride};
//!
//! override_locale(LocaleOverride::new().language("nl").fallback(None), || {
//!     assert_eq!(i18n::get_language(), "nl");
//!     assert!(i18n::get_fallback_language().is_none());
//! });
//! assert_eq!(i18n::get_language(), "en");
//! ```

use translatable_core::i18n;

/// A builder for specifying which locale state to override.
///
/// Anything left unset keeps its current value inside the closure.
#[derive(Debug, Clone, Default)]
pub struct LocaleOverride {
    language: Option<String>,
    fallback: Option<Option<String>>,
}

impl LocaleOverride {
    /// Creates an override that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active locale.
    #[must_use]
    pub fn language(mut self, code: &str) -> Self {
        self.language = Some(code.to_string());
        self
    }

    /// Sets the fallback locale; `None` disables fallback.
    #[must_use]
    pub fn fallback(mut self, code: Option<&str>) -> Self {
        self.fallback = Some(code.map(str::to_string));
        self
    }
}

/// Temporarily overrides locale state for the duration of the closure.
///
/// The previous state is restored afterwards, even if the closure panics.
pub fn override_locale<F, R>(overrides: LocaleOverride, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _language = overrides.language.as_deref().map(i18n::override_language);
    let _fallback = overrides
        .fallback
        .as_ref()
        .map(|code| i18n::override_fallback_language(code.as_deref()));
    f()
}
