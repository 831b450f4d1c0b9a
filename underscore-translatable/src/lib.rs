//! # underscore-translatable
//!
//! Translatable model attributes stored one column per locale.
//!
//! A model declares logical attributes such as `title` as translatable. Reading
//! `title` resolves to the `title_<locale>` column of the active locale; writing
//! a scalar stores it there, and writing a per-locale mapping stores several
//! columns at once.
//!
//! This is the meta-crate that re-exports the sub-crates. Depend on the
//! individual crates for finer-grained control.
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use underscore_translatable::prelude::*;
//!
//! #[derive(Default)]
//! struct Post {
//!     attributes: Attributes,
//! }
//!
//! impl Model for Post {
//!     fn meta() -> &'static ModelMeta {
//!         static META: LazyLock<ModelMeta> =
//!             LazyLock::new(|| ModelMeta::new("blog", "post").translatable(&["title"]));
//!         &META
//!     }
//!     fn attributes(&self) -> &Attributes { &self.attributes }
//!     fn attributes_mut(&mut self) -> &mut Attributes { &mut self.attributes }
//! }
//!
//! impl Translatable for Post {}
//!
//! let post = Post::make([("title", Value::map([("en", "Hello"), ("nl", "Hallo")]))]).unwrap();
//!
//! let _nl = i18n::override_language("nl");
//! assert_eq!(post.get_attribute("title"), Value::from("Hallo"));
//! assert_eq!(post.get_translation_with_fallback("title", Some("fr")), Value::from("Hello"));
//! ```

/// Settings, locale state, logging, and error types.
pub use translatable_core as core;

/// Values, attribute stores, the `Model` trait, and the `Translatable` extension.
pub use translatable_db as db;

/// Locale overrides and fixture models for tests.
#[cfg(feature = "testing")]
pub use translatable_test as test;

/// The types most models need.
pub mod prelude {
    pub use translatable_core::i18n;
    pub use translatable_core::{TranslatableError, TranslatableResult};
    pub use translatable_db::{Accessor, Attributes, Model, ModelMeta, Mutator, Translatable, Value};
}

// Third-party re-exports for user convenience.
pub use serde_json;
pub use tracing;
