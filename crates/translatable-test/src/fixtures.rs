//! Fixture models.

use std::sync::LazyLock;

use translatable_db::attributes::Attributes;
use translatable_db::model::{Accessor, Model, ModelMeta, Mutator};
use translatable_db::translatable::Translatable;
use translatable_db::value::Value;

/// A blog post with three translatable attributes.
///
/// - `title`: no hooks.
/// - `field_with_accessor`: lower-cased on read.
/// - `field_with_mutator`: upper-cased on write.
///
/// Every other attribute (e.g. `body`) is a plain column.
#[derive(Debug, Default, Clone)]
pub struct Post {
    attributes: Attributes,
}

fn lowercase(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.to_lowercase()),
        other => other,
    }
}

fn uppercase(value: Value, _locale: Option<&str>) -> Value {
    match value {
        Value::String(s) => Value::String(s.to_uppercase()),
        other => other,
    }
}

impl Model for Post {
    fn meta() -> &'static ModelMeta {
        static META: LazyLock<ModelMeta> = LazyLock::new(|| {
            ModelMeta::new("blog", "post").translatable(&[
                "title",
                "field_with_accessor",
                "field_with_mutator",
            ])
        });
        &META
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn accessor_for(key: &str) -> Option<Accessor> {
        match key {
            "field_with_accessor" => Some(lowercase as Accessor),
            _ => None,
        }
    }

    fn mutator_for(key: &str) -> Option<Mutator> {
        match key {
            "field_with_mutator" => Some(uppercase as Mutator),
            _ => None,
        }
    }
}

impl Translatable for Post {}
