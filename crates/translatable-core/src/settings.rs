//! Settings for underscore-translatable.
//!
//! This module provides the [`Settings`] struct, which holds the locale and
//! logging configuration, and [`LazySettings`], a globally-accessible,
//! lazily-initialized settings instance.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{TranslatableError, TranslatableResult};
use crate::i18n;

/// The complete set of settings.
///
/// Use [`SETTINGS`] to access the global instance.
///
/// # Examples
///
/// ```
/// use translatable_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.language_code, "en");
/// assert_eq!(settings.fallback_language.as_deref(), Some("en"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled. Selects human-readable log output.
    pub debug: bool,

    // ── Internationalization ─────────────────────────────────────────

    /// The locale used when none has been activated (e.g. "en").
    pub language_code: String,
    /// The locale consulted when a translation is empty. `None` disables fallback.
    pub fallback_language: Option<String>,
    /// Every locale the application stores translations for.
    pub languages: Vec<String>,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            language_code: "en".to_string(),
            fallback_language: Some("en".to_string()),
            languages: vec!["en".to_string()],
            log_level: "info".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl Settings {
    /// Checks that every configured locale can be used as a column suffix.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatableError::ImproperlyConfigured`] naming the first
    /// offending setting.
    pub fn validate(&self) -> TranslatableResult<()> {
        if !i18n::is_valid_locale(&self.language_code) {
            return Err(TranslatableError::ImproperlyConfigured(format!(
                "language_code {:?} is not a valid locale",
                self.language_code
            )));
        }
        if let Some(fallback) = &self.fallback_language {
            if !i18n::is_valid_locale(fallback) {
                return Err(TranslatableError::ImproperlyConfigured(format!(
                    "fallback_language {fallback:?} is not a valid locale"
                )));
            }
        }
        if let Some(bad) = self.languages.iter().find(|l| !i18n::is_valid_locale(l)) {
            return Err(TranslatableError::ImproperlyConfigured(format!(
                "languages contains {bad:?}, which is not a valid locale"
            )));
        }
        Ok(())
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup to set the
/// settings, then use [`get`](LazySettings::get) to access them.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings. Must be called exactly once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns a reference to the configured settings.
    ///
    /// # Panics
    ///
    /// Panics if settings have not been configured.
    pub fn get(&self) -> &Settings {
        self.inner
            .get()
            .expect("Settings have not been configured. Call SETTINGS.configure() first.")
    }

    /// Returns the configured settings, or `None` before configuration.
    pub fn try_get(&self) -> Option<&Settings> {
        self.inner.get()
    }

    /// Returns `true` if settings have been configured.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
///
/// Call `SETTINGS.configure(settings)` once at application startup. Locale
/// lookups in [`i18n`](crate::i18n) fall back to [`Settings::default`] until
/// then.
pub static SETTINGS: LazySettings = LazySettings::new();
