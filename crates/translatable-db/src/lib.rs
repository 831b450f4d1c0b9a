//! # translatable-db
//!
//! Model attribute layer for underscore-translatable. Provides the
//! [`Model`](model::Model) trait with its attribute store and read/write hooks,
//! and the [`Translatable`](translatable::Translatable) extension that maps a
//! logical attribute onto one `<attribute>_<locale>` column per locale.
//!
//! ## Module Overview
//!
//! - [`value`] - The [`Value`](value::Value) enum stored in attributes
//! - [`attributes`] - The raw [`Attributes`](attributes::Attributes) store
//! - [`model`] - The [`Model`](model::Model) trait, hooks, and [`ModelMeta`](model::ModelMeta)
//! - [`translatable`] - Locale-suffixed translatable attributes

// These clippy lints are intentionally allowed for this crate:
// - doc_markdown: backtick requirements for documentation items are too strict
// - return_self_not_must_use: builder pattern methods are self-documenting
// - missing_const_for_fn: trait-default style methods read better non-const
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]

pub mod attributes;
pub mod model;
pub mod translatable;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use attributes::Attributes;
pub use model::{Accessor, Model, ModelMeta, Mutator};
pub use translatable::Translatable;
pub use value::Value;
