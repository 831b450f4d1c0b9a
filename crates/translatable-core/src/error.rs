//! Core error types for underscore-translatable.
//!
//! [`TranslatableError`] covers the two places this crate can fail: turning
//! a locale into a column suffix, and loading configuration. Reads of
//! translated attributes never fail; a missing column simply yields `Null`.

use thiserror::Error;

/// The primary error type for underscore-translatable.
#[derive(Error, Debug)]
pub enum TranslatableError {
    // ── Locales ──────────────────────────────────────────────────────

    /// A locale identifier cannot be used as a column suffix.
    #[error("Invalid locale: {0:?}")]
    InvalidLocale(String),

    /// A per-locale mapping could not be applied to an attribute.
    #[error("Invalid translations for '{attribute}': {reason}")]
    InvalidTranslations {
        /// The logical attribute being written.
        attribute: String,
        /// What was wrong with the mapping.
        reason: String,
    },

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The configuration parsed but is not usable.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TranslatableError {
    /// Returns `true` if this error was caused by a bad locale identifier.
    pub const fn is_locale_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLocale(_) | Self::InvalidTranslations { .. }
        )
    }
}

impl From<serde_json::Error> for TranslatableError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, TranslatableError>`.
pub type TranslatableResult<T> = Result<T, TranslatableError>;
