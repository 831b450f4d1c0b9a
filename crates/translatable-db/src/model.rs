//! Model trait and metadata.
//!
//! The [`Model`] trait is the host side of the translatable extension: a
//! record backed by an [`Attributes`] store, with optional per-attribute
//! accessors (read hooks) and mutators (write hooks). It knows nothing about
//! locales; [`Translatable`](crate::translatable::Translatable) layers the
//! locale-suffixed column convention on top of it.
//!
//! [`ModelMeta`] captures static per-model options: naming, which attributes
//! are translatable, and which are guarded from mass assignment.

use crate::attributes::Attributes;
use crate::value::Value;

/// A read hook applied to an attribute's stored value.
pub type Accessor = fn(Value) -> Value;

/// A write hook applied before a value is stored.
///
/// The second argument is the locale of the physical column being written
/// when the write goes through a translatable attribute, and `None` for
/// plain attributes.
pub type Mutator = fn(Value, Option<&str>) -> Value;

/// The core trait for all models.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use translatable_db::attributes::Attributes;
/// use translatable_db::model::{Accessor, Model, ModelMeta};
/// use translatable_db::value::Value;
///
/// #[derive(Default)]
/// struct Article {
///     attributes: Attributes,
/// }
///
/// fn shout(value: Value) -> Value {
///     match value {
///         Value::String(s) => Value::String(s.to_uppercase()),
///         other => other,
///     }
/// }
///
/// impl Model for Article {
///     fn meta() -> &'static ModelMeta {
///         static META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta::new("blog", "article"));
///         &META
///     }
///
///     fn attributes(&self) -> &Attributes { &self.attributes }
///     fn attributes_mut(&mut self) -> &mut Attributes { &mut self.attributes }
///
///     fn accessor_for(key: &str) -> Option<Accessor> {
///         (key == "headline").then_some(shout as Accessor)
///     }
/// }
///
/// let mut article = Article::default();
/// article.write_attribute("headline", Value::from("breaking"));
/// assert_eq!(article.read_attribute("headline"), Value::from("BREAKING"));
/// ```
pub trait Model: Send + Sync + 'static {
    /// Returns the static metadata for this model type.
    fn meta() -> &'static ModelMeta
    where
        Self: Sized;

    /// Returns the raw attribute store.
    fn attributes(&self) -> &Attributes;

    /// Returns the raw attribute store mutably.
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Returns the accessor registered for `key`, if any.
    fn accessor_for(_key: &str) -> Option<Accessor>
    where
        Self: Sized,
    {
        None
    }

    /// Returns the mutator registered for `key`, if any.
    fn mutator_for(_key: &str) -> Option<Mutator>
    where
        Self: Sized,
    {
        None
    }

    /// Returns `true` if an accessor is registered for `key`.
    fn has_get_mutator(key: &str) -> bool
    where
        Self: Sized,
    {
        Self::accessor_for(key).is_some()
    }

    /// Returns `true` if a mutator is registered for `key`.
    fn has_set_mutator(key: &str) -> bool
    where
        Self: Sized,
    {
        Self::mutator_for(key).is_some()
    }

    /// Runs `key`'s accessor over `value`, or returns it unchanged.
    fn mutate_attribute(key: &str, value: Value) -> Value
    where
        Self: Sized,
    {
        match Self::accessor_for(key) {
            Some(accessor) => accessor(value),
            None => value,
        }
    }

    /// Reads a column, applying its accessor. Absent columns read as `Null`.
    fn read_attribute(&self, key: &str) -> Value
    where
        Self: Sized,
    {
        Self::mutate_attribute(key, self.attributes().value(key))
    }

    /// Writes a column, applying its mutator first.
    fn write_attribute(&mut self, key: &str, value: Value)
    where
        Self: Sized,
    {
        let value = match Self::mutator_for(key) {
            Some(mutator) => mutator(value, None),
            None => value,
        };
        self.attributes_mut().set(key, value);
    }

    /// Replaces every stored column without running any hooks.
    ///
    /// Used when loading a record from storage.
    fn set_raw_attributes<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>)
    where
        Self: Sized,
        K: Into<String>,
        V: Into<Value>,
    {
        let store = self.attributes_mut();
        store.clear();
        store.extend(attributes);
    }

    /// Builds an instance directly from stored columns.
    fn hydrate<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        Self: Sized + Default,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut model = Self::default();
        model.set_raw_attributes(attributes);
        model
    }

    /// Returns `true` if `key` may not be mass assigned.
    fn is_guarded(key: &str) -> bool
    where
        Self: Sized,
    {
        let guarded = &Self::meta().guarded;
        guarded.contains(&"*") || guarded.contains(&key)
    }
}

/// Metadata about a model.
#[derive(Debug, Clone)]
pub struct ModelMeta {
    /// The application label (e.g., "blog").
    pub app_label: &'static str,
    /// The model name in lowercase (e.g., "post").
    pub model_name: &'static str,
    /// The storage table name.
    pub db_table: String,
    /// Logical attributes stored as one `<attribute>_<locale>` column per locale.
    pub translatable: Vec<&'static str>,
    /// Attributes skipped by mass assignment. `"*"` guards everything.
    pub guarded: Vec<&'static str>,
}

impl ModelMeta {
    /// Creates metadata with a `"{app_label}_{model_name}"` table and no
    /// translatable or guarded attributes.
    pub fn new(app_label: &'static str, model_name: &'static str) -> Self {
        Self {
            app_label,
            model_name,
            db_table: format!("{app_label}_{model_name}"),
            translatable: Vec::new(),
            guarded: Vec::new(),
        }
    }

    /// Declares the translatable attributes.
    #[must_use]
    pub fn translatable(mut self, attributes: &[&'static str]) -> Self {
        self.translatable = attributes.to_vec();
        self
    }

    /// Declares the guarded attributes.
    #[must_use]
    pub fn guarded(mut self, attributes: &[&'static str]) -> Self {
        self.guarded = attributes.to_vec();
        self
    }

    /// Overrides the table name.
    #[must_use]
    pub fn db_table(mut self, table: impl Into<String>) -> Self {
        self.db_table = table.into();
        self
    }
}
