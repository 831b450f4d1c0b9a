//! Logging integration for underscore-translatable.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-model spans.
//! Translation lookups emit `trace` events and fallback hits emit `debug`
//! events under the `translatable` target.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level` (e.g. "debug", "info", "warn",
/// "error"). In debug mode a pretty, human-readable format is used; in production
/// a structured JSON format is used. Installing twice is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for work on a single model instance.
///
/// # Examples
///
/// ```
/// use translatable_core::logging::model_span;
///
/// let span = model_span("post");
/// let _guard = span.enter();
/// tracing::debug!("filling attributes");
/// ```
pub fn model_span(model_name: &str) -> tracing::Span {
    tracing::debug_span!("model", name = model_name)
}
