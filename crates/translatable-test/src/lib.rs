//! # translatable-test
//!
//! Testing utilities for underscore-translatable. Provides scoped locale
//! overrides that restore the previous thread state even when a test panics,
//! and a fixture model exercising accessors and mutators on translatable
//! attributes.

pub mod fixtures;
pub mod override_locale;

pub use fixtures::Post;
pub use override_locale::{override_locale, LocaleOverride};
