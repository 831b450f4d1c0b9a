//! # translatable-core
//!
//! Core types, settings, locale state, and error types for underscore-translatable.
//! This crate has no ORM dependencies and provides the foundation the model layer
//! builds on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Locale configuration and the global settings instance
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`i18n`] - Thread-local active and fallback locale state
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod i18n;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{TranslatableError, TranslatableResult};
pub use settings::{Settings, SETTINGS};
