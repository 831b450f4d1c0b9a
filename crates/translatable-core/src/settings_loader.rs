//! Settings loading from configuration files.
//!
//! This module provides functions to load [`Settings`] from TOML files, JSON
//! files, and to apply environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//! 4. Validate the result.
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `TRANSLATABLE_DEBUG` | `debug` |
//! | `TRANSLATABLE_LANGUAGE_CODE` | `language_code` |
//! | `TRANSLATABLE_FALLBACK_LANGUAGE` | `fallback_language` (empty disables) |
//! | `TRANSLATABLE_LANGUAGES` | `languages` (comma-separated) |
//! | `TRANSLATABLE_LOG_LEVEL` | `log_level` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use translatable_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file("config/translatable.toml").unwrap();
//! let settings = settings_loader::from_json_file_with_env("config/translatable.json").unwrap();
//! ```

use std::path::Path;

use crate::error::{TranslatableError, TranslatableResult};
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Any fields not present in the TOML keep their default values. TOML has no
/// null, so `fallback_language = ""` disables fallback.
///
/// # Errors
///
/// Returns an error if the TOML is malformed, cannot be deserialized, or
/// names an invalid locale.
pub fn from_toml_str(toml_str: &str) -> TranslatableResult<Settings> {
    let settings = merge_over_defaults(parse_toml(toml_str)?, "TOML")?;
    settings.validate()?;
    Ok(settings)
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> TranslatableResult<Settings> {
    from_toml_str(&read_config_file(path.as_ref(), "TOML")?)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// The result is validated only after the overrides, so an environment
/// variable can replace an invalid file value.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the TOML is malformed, or
/// the final settings name an invalid locale.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> TranslatableResult<Settings> {
    toml_file_with_overrides(path.as_ref(), |name| std::env::var(name).ok())
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, cannot be deserialized, or
/// names an invalid locale.
pub fn from_json_str(json_str: &str) -> TranslatableResult<Settings> {
    let settings = merge_over_defaults(parse_json(json_str)?, "JSON")?;
    settings.validate()?;
    Ok(settings)
}

/// Loads settings from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file(path: impl AsRef<Path>) -> TranslatableResult<Settings> {
    from_json_str(&read_config_file(path.as_ref(), "JSON")?)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
///
/// The result is validated only after the overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the JSON is malformed, or
/// the final settings name an invalid locale.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> TranslatableResult<Settings> {
    json_file_with_overrides(path.as_ref(), |name| std::env::var(name).ok())
}

/// Loads settings from just environment variables (starting from defaults).
///
/// # Errors
///
/// Returns an error if an environment variable names an invalid locale.
pub fn from_env() -> TranslatableResult<Settings> {
    defaults_with_overrides(|name| std::env::var(name).ok())
}

/// Applies `TRANSLATABLE_*` environment variable overrides to a settings struct.
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides_from(settings, |name| std::env::var(name).ok());
}

/// Applies overrides using `lookup` to resolve variable names.
fn apply_overrides_from(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup("TRANSLATABLE_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Some(val) = lookup("TRANSLATABLE_LANGUAGE_CODE") {
        settings.language_code = val.trim().to_string();
    }

    if let Some(val) = lookup("TRANSLATABLE_FALLBACK_LANGUAGE") {
        settings.fallback_language = Some(val);
        normalize_fallback(settings);
    }

    if let Some(val) = lookup("TRANSLATABLE_LANGUAGES") {
        settings.languages = val
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    if let Some(val) = lookup("TRANSLATABLE_LOG_LEVEL") {
        settings.log_level = val;
    }
}

fn toml_file_with_overrides(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> TranslatableResult<Settings> {
    let value = parse_toml(&read_config_file(path, "TOML")?)?;
    let mut settings = merge_over_defaults(value, "TOML")?;
    apply_overrides_from(&mut settings, lookup);
    settings.validate()?;
    Ok(settings)
}

fn json_file_with_overrides(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> TranslatableResult<Settings> {
    let value = parse_json(&read_config_file(path, "JSON")?)?;
    let mut settings = merge_over_defaults(value, "JSON")?;
    apply_overrides_from(&mut settings, lookup);
    settings.validate()?;
    Ok(settings)
}

fn defaults_with_overrides(
    lookup: impl Fn(&str) -> Option<String>,
) -> TranslatableResult<Settings> {
    let mut settings = Settings::default();
    apply_overrides_from(&mut settings, lookup);
    settings.validate()?;
    Ok(settings)
}

// ============================================================
// Helpers
// ============================================================

fn read_config_file(path: &Path, format: &str) -> TranslatableResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        TranslatableError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}

fn parse_toml(toml_str: &str) -> TranslatableResult<serde_json::Value> {
    let toml_value: toml::Value = toml::from_str(toml_str).map_err(|e| {
        TranslatableError::ConfigurationError(format!("Failed to parse TOML: {e}"))
    })?;
    Ok(toml_to_json(toml_value))
}

fn parse_json(json_str: &str) -> TranslatableResult<serde_json::Value> {
    serde_json::from_str(json_str).map_err(|e| {
        TranslatableError::ConfigurationError(format!("Failed to parse JSON: {e}"))
    })
}

/// Deep-merges `value` over the default settings. The result is not validated.
fn merge_over_defaults(value: serde_json::Value, format: &str) -> TranslatableResult<Settings> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        TranslatableError::ConfigurationError(format!(
            "Failed to serialize default settings: {e}"
        ))
    })?;

    let merged = merge_json(default_json, value);
    let mut settings: Settings = serde_json::from_value(merged).map_err(|e| {
        TranslatableError::ConfigurationError(format!(
            "Failed to deserialize settings from {format}: {e}"
        ))
    })?;
    normalize_fallback(&mut settings);
    Ok(settings)
}

/// A blank fallback language means no fallback.
fn normalize_fallback(settings: &mut Settings) {
    settings.fallback_language = settings
        .fallback_language
        .take()
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty());
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}
