//! Locale-suffixed translatable attributes.
//!
//! A model opting into [`Translatable`] exposes logical attributes such as
//! `title` that are stored as one physical column per locale, named
//! `<attribute>_<locale>` (`title_en`, `title_nl`, ...).
//!
//! - Reading the logical attribute resolves to the active locale's column.
//! - Writing a scalar stores it under the active locale's column.
//! - Writing a [`Value::Map`] stores one column per locale key.
//! - Physical columns remain ordinary attributes and can be read and
//!   written directly.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use translatable_core::i18n;
//! use translatable_db::attributes::Attributes;
//! use translatable_db::model::{Model, ModelMeta};
//! use translatable_db::translatable::Translatable;
//! use translatable_db::value::Value;
//!
//! #[derive(Default)]
//! struct Page {
//!     attributes: Attributes,
//! }
//!
//! impl Model for Page {
//!     fn meta() -> &'static ModelMeta {
//!         static META: LazyLock<ModelMeta> =
//!             LazyLock::new(|| ModelMeta::new("cms", "page").translatable(&["title"]));
//!         &META
//!     }
//!     fn attributes(&self) -> &Attributes { &self.attributes }
//!     fn attributes_mut(&mut self) -> &mut Attributes { &mut self.attributes }
//! }
//!
//! impl Translatable for Page {}
//!
//! let mut page = Page::default();
//! page.set_attribute("title", Value::map([("en", "Home"), ("nl", "Thuis")])).unwrap();
//!
//! let _guard = i18n::override_language("nl");
//! assert_eq!(page.get_attribute("title"), Value::from("Thuis"));
//! assert_eq!(page.get_attribute("title_en"), Value::from("Home"));
//! ```

use std::collections::BTreeMap;

use translatable_core::error::{TranslatableError, TranslatableResult};
use translatable_core::i18n;

use crate::model::Model;
use crate::value::Value;

/// Locale-suffixed column mapping for a [`Model`].
///
/// Every method has a default implementation; implement the trait with an
/// empty `impl` block and declare attributes in
/// [`ModelMeta::translatable`](crate::model::ModelMeta::translatable).
pub trait Translatable: Model + Sized {
    /// Returns the logical attributes stored per locale.
    fn translatable_attributes(&self) -> &'static [&'static str] {
        &Self::meta().translatable
    }

    /// Returns `true` if `key` is a logical translatable attribute.
    ///
    /// Physical column names such as `title_en` are not translatable
    /// attributes themselves.
    fn is_translatable_attribute(&self, key: &str) -> bool {
        self.translatable_attributes().contains(&key)
    }

    /// Returns the physical column backing `key` for `locale`.
    ///
    /// When `locale` is `None`, the active locale is used.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(post.get_translatable_attribute_name("title", Some("en")), "title_en");
    /// ```
    fn get_translatable_attribute_name(&self, key: &str, locale: Option<&str>) -> String {
        match locale {
            Some(locale) => format!("{key}_{locale}"),
            None => format!("{key}_{}", i18n::get_language()),
        }
    }

    /// Reads `key` for `locale` (the active locale when `None`).
    ///
    /// With `use_fallback`, an empty value is replaced by the fallback
    /// locale's value when that one is not empty. The accessor registered for
    /// `key` is applied to whichever value is returned. Never fails: a missing
    /// column reads as [`Value::Null`].
    fn get_translation(&self, key: &str, locale: Option<&str>, use_fallback: bool) -> Value {
        let locale = locale.map_or_else(i18n::get_language, str::to_string);
        let column = self.get_translatable_attribute_name(key, Some(&locale));
        let mut value = self.read_attribute(&column);

        tracing::trace!(
            target: "translatable",
            attribute = key,
            column = %column,
            found = !value.is_empty(),
            "resolving translation"
        );

        if use_fallback && value.is_empty() {
            if let Some(fallback) = i18n::get_fallback_language().filter(|f| *f != locale) {
                let fallback_column = self.get_translatable_attribute_name(key, Some(&fallback));
                let fallback_value = self.read_attribute(&fallback_column);
                if !fallback_value.is_empty() {
                    tracing::debug!(
                        target: "translatable",
                        attribute = key,
                        locale = %locale,
                        fallback = %fallback,
                        "using fallback translation"
                    );
                    value = fallback_value;
                }
            }
        }

        Self::mutate_attribute(key, value)
    }

    /// Reads `key` for `locale`, falling back when the value is empty.
    fn get_translation_with_fallback(&self, key: &str, locale: Option<&str>) -> Value {
        self.get_translation(key, locale, true)
    }

    /// Reads `key` for `locale` without consulting the fallback locale.
    fn get_translation_without_fallback(&self, key: &str, locale: Option<&str>) -> Value {
        self.get_translation(key, locale, false)
    }

    /// Returns `true` if `key` has a non-empty value stored for `locale`.
    fn has_translation(&self, key: &str, locale: &str) -> bool {
        let column = self.get_translatable_attribute_name(key, Some(locale));
        !self.attributes().value(&column).is_empty()
    }

    /// Returns the non-empty translations of `key` for every available locale.
    fn get_translations(&self, key: &str) -> BTreeMap<String, Value> {
        i18n::available_languages()
            .into_iter()
            .filter_map(|locale| {
                let value = self.get_translation(key, Some(&locale), false);
                (!value.is_empty()).then_some((locale, value))
            })
            .collect()
    }

    /// Returns the physical columns backing `key`, one per available locale.
    fn translated_columns(&self, key: &str) -> Vec<String> {
        i18n::available_languages()
            .iter()
            .map(|locale| self.get_translatable_attribute_name(key, Some(locale)))
            .collect()
    }

    /// Stores `value` as the `locale` translation of `key`.
    ///
    /// The mutator registered for `key` runs first and receives the locale.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatableError::InvalidLocale`] if `locale` cannot be used
    /// as a column suffix. Nothing is written in that case.
    fn set_translation(
        &mut self,
        key: &str,
        locale: &str,
        value: impl Into<Value>,
    ) -> TranslatableResult<&mut Self> {
        i18n::validate_locale(locale)?;

        let value = value.into();
        let value = match Self::mutator_for(key) {
            Some(mutator) => mutator(value, Some(locale)),
            None => value,
        };

        let column = self.get_translatable_attribute_name(key, Some(locale));
        tracing::trace!(target: "translatable", attribute = key, column = %column, "storing translation");
        self.write_attribute(&column, value);
        Ok(self)
    }

    /// Stores several translations of `key` at once.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatableError::InvalidTranslations`] if any locale key is
    /// invalid. Every key is checked before anything is written.
    fn set_translations<K, V>(
        &mut self,
        key: &str,
        translations: impl IntoIterator<Item = (K, V)>,
    ) -> TranslatableResult<&mut Self>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let translations: Vec<(String, Value)> = translations
            .into_iter()
            .map(|(locale, value)| (locale.into(), value.into()))
            .collect();

        if let Some((bad, _)) = translations
            .iter()
            .find(|(locale, _)| !i18n::is_valid_locale(locale))
        {
            return Err(TranslatableError::InvalidTranslations {
                attribute: key.to_string(),
                reason: format!("{bad:?} is not a valid locale"),
            });
        }

        for (locale, value) in translations {
            self.set_translation(key, &locale, value)?;
        }
        Ok(self)
    }

    /// Clears the `locale` translation of `key`.
    fn forget_translation(&mut self, key: &str, locale: &str) -> &mut Self {
        let column = self.get_translatable_attribute_name(key, Some(locale));
        self.attributes_mut().set(column, Value::Null);
        self
    }

    /// Reads an attribute, resolving translatable ones to the active locale.
    ///
    /// No fallback is applied; use
    /// [`get_translation_with_fallback`](Self::get_translation_with_fallback)
    /// for that.
    fn get_attribute(&self, key: &str) -> Value {
        if self.is_translatable_attribute(key) {
            return self.get_translation(key, None, false);
        }
        self.read_attribute(key)
    }

    /// Writes an attribute.
    ///
    /// - Translatable attribute with a [`Value::Map`] or a JSON object: each
    ///   entry is stored under its locale.
    /// - Translatable attribute with any other value: stored under the active
    ///   locale.
    /// - Anything else: written as a plain attribute.
    ///
    /// # Errors
    ///
    /// Returns a locale error if a translatable write names an invalid locale.
    fn set_attribute(&mut self, key: &str, value: impl Into<Value>) -> TranslatableResult<&mut Self> {
        let value = value.into();
        if !self.is_translatable_attribute(key) {
            self.write_attribute(key, value);
            return Ok(self);
        }

        match value {
            Value::Map(translations) => self.set_translations(key, translations),
            Value::Json(json) if json.is_object() => match Value::from_json(json) {
                Value::Map(translations) => self.set_translations(key, translations),
                other => self.set_translation(key, &i18n::get_language(), other),
            },
            scalar => {
                let locale = i18n::get_language();
                self.set_translation(key, &locale, scalar)
            }
        }
    }

    /// Mass-assigns attributes through [`set_attribute`](Self::set_attribute).
    ///
    /// Guarded attributes are skipped.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first failing write; earlier writes stay applied.
    fn fill<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>) -> TranslatableResult<&mut Self>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (key, value) in attributes {
            let key = key.as_ref();
            if Self::is_guarded(key) {
                tracing::debug!(target: "translatable", attribute = key, "skipping guarded attribute");
                continue;
            }
            self.set_attribute(key, value)?;
        }
        Ok(self)
    }

    /// Mass-assigns attributes from a JSON object.
    ///
    /// Nested objects become per-locale mappings.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatableError::SerializationError`] if `json` is not an
    /// object, or any error [`fill`](Self::fill) returns.
    fn fill_json(&mut self, json: serde_json::Value) -> TranslatableResult<&mut Self> {
        match Value::from_json(json) {
            Value::Map(entries) => self.fill(entries),
            other => Err(TranslatableError::SerializationError(format!(
                "expected a JSON object of attributes, got {other}"
            ))),
        }
    }

    /// Builds a new instance and mass-assigns `attributes`.
    ///
    /// # Errors
    ///
    /// Returns any error [`fill`](Self::fill) returns.
    fn make<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> TranslatableResult<Self>
    where
        Self: Default,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut model = Self::default();
        model.fill(attributes)?;
        Ok(model)
    }
}
