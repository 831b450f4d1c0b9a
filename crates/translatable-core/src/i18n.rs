//! Active and fallback locale state.
//!
//! The active locale decides which physical column a logical translatable
//! attribute resolves to. It is kept per thread:
//!
//! - **Language activation**: `activate()`, `deactivate()`, `get_language()`.
//! - **Scoped activation**: `override_language()` returns a guard that
//!   restores the previous language when dropped.
//! - **Fallback**: `get_fallback_language()`, optionally overridden per thread
//!   with `set_fallback_language()`.
//!
//! When nothing is activated, the configured [`SETTINGS`] are used, and when
//! those are not configured either, [`Settings::default`].
//!
//! ## Quick Start
//!
//! ```
//! use translatable_core::i18n;
//!
//! assert_eq!(i18n::get_language(), "en");
//!
//! i18n::activate("nl");
//! assert_eq!(i18n::get_language(), "nl");
//!
//! {
//!     let _guard = i18n::override_language("fr");
//!     assert_eq!(i18n::get_language(), "fr");
//! }
//! assert_eq!(i18n::get_language(), "nl");
//!
//! i18n::deactivate();
//! ```

use std::cell::RefCell;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{TranslatableError, TranslatableResult};
use crate::settings::{Settings, SETTINGS};

// ── Thread-local language state ──────────────────────────────────────────

thread_local! {
    static CURRENT_LANGUAGE: RefCell<Option<String>> = const { RefCell::new(None) };
    /// `Some(None)` disables fallback on this thread; `None` defers to settings.
    static FALLBACK_LANGUAGE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

fn with_settings<T>(f: impl FnOnce(&Settings) -> T) -> T {
    match SETTINGS.try_get() {
        Some(settings) => f(settings),
        None => f(&Settings::default()),
    }
}

/// Activates the given locale for the current thread.
///
/// # Examples
///
/// ```
/// use translatable_core::i18n;
///
/// i18n::activate("fr");
/// assert_eq!(i18n::get_language(), "fr");
/// i18n::deactivate();
/// ```
pub fn activate(language_code: &str) {
    tracing::trace!(language = language_code, "activating language");
    CURRENT_LANGUAGE.with(|cell| {
        *cell.borrow_mut() = Some(language_code.to_string());
    });
}

/// Deactivates the current thread's locale, reverting to the configured default.
pub fn deactivate() {
    CURRENT_LANGUAGE.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Returns the locale active on the current thread.
///
/// Returns the activated locale if one is set, otherwise the configured
/// `language_code`.
pub fn get_language() -> String {
    CURRENT_LANGUAGE
        .with(|cell| cell.borrow().clone())
        .unwrap_or_else(|| with_settings(|s| s.language_code.clone()))
}

/// Overrides the fallback locale for the current thread.
///
/// Passing `None` disables fallback on this thread regardless of settings.
pub fn set_fallback_language(language_code: Option<&str>) {
    FALLBACK_LANGUAGE.with(|cell| {
        *cell.borrow_mut() = Some(language_code.map(str::to_string));
    });
}

/// Drops the thread's fallback override so the configured value applies again.
pub fn reset_fallback_language() {
    FALLBACK_LANGUAGE.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Returns the fallback locale, or `None` when fallback is disabled.
pub fn get_fallback_language() -> Option<String> {
    FALLBACK_LANGUAGE
        .with(|cell| cell.borrow().clone())
        .unwrap_or_else(|| with_settings(|s| s.fallback_language.clone()))
}

/// Returns every locale the application stores translations for.
pub fn available_languages() -> Vec<String> {
    with_settings(|s| s.languages.clone())
}

/// Activates `language_code` until the returned guard is dropped.
///
/// Guards nest: each one restores exactly the language that was active when
/// it was created.
///
/// # Examples
///
/// ```
/// use translatable_core::i18n;
///
/// i18n::activate("en");
/// {
///     let _outer = i18n::override_language("nl");
///     {
///         let _inner = i18n::override_language("de");
///         assert_eq!(i18n::get_language(), "de");
///     }
///     assert_eq!(i18n::get_language(), "nl");
/// }
/// assert_eq!(i18n::get_language(), "en");
/// i18n::deactivate();
/// ```
#[must_use = "the language is restored as soon as the guard is dropped"]
pub fn override_language(language_code: &str) -> LanguageOverride {
    let previous = CURRENT_LANGUAGE.with(|cell| cell.borrow().clone());
    activate(language_code);
    LanguageOverride { previous }
}

/// Guard returned by [`override_language`].
#[derive(Debug)]
pub struct LanguageOverride {
    previous: Option<String>,
}

impl Drop for LanguageOverride {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT_LANGUAGE.with(|cell| {
            *cell.borrow_mut() = previous;
        });
    }
}

/// Sets the fallback locale until the returned guard is dropped.
///
/// `None` disables fallback for the guard's lifetime.
#[must_use = "the fallback is restored as soon as the guard is dropped"]
pub fn override_fallback_language(language_code: Option<&str>) -> FallbackOverride {
    let previous = FALLBACK_LANGUAGE.with(|cell| cell.borrow().clone());
    set_fallback_language(language_code);
    FallbackOverride { previous }
}

/// Guard returned by [`override_fallback_language`].
#[derive(Debug)]
pub struct FallbackOverride {
    previous: Option<Option<String>>,
}

impl Drop for FallbackOverride {
    fn drop(&mut self) {
        let previous = self.previous.take();
        FALLBACK_LANGUAGE.with(|cell| {
            *cell.borrow_mut() = previous;
        });
    }
}

// ── Locale identifiers ───────────────────────────────────────────────────

/// Returns `true` if `code` can be used as a column suffix.
///
/// Valid locales are non-empty and contain only ASCII letters, digits,
/// underscores, and hyphens (`en`, `pt_BR`, `zh-hant`).
pub fn is_valid_locale(code: &str) -> bool {
    static LOCALE: OnceLock<Regex> = OnceLock::new();
    let locale = LOCALE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
    locale.is_match(code)
}

/// Validates a locale identifier.
///
/// # Errors
///
/// Returns [`TranslatableError::InvalidLocale`] if `code` is not a valid locale.
pub fn validate_locale(code: &str) -> TranslatableResult<()> {
    if is_valid_locale(code) {
        Ok(())
    } else {
        Err(TranslatableError::InvalidLocale(code.to_string()))
    }
}
