//! The raw attribute store behind a model instance.
//!
//! [`Attributes`] maps physical column names to [`Value`]s. It performs no
//! locale resolution and runs no hooks; that is the job of
//! [`Model`](crate::model::Model) and
//! [`Translatable`](crate::translatable::Translatable).

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::value::Value;

/// Column name to value mapping for one model instance.
///
/// # Examples
///
/// ```
/// use translatable_db::attributes::Attributes;
/// use translatable_db::value::Value;
///
/// let mut attrs = Attributes::new();
/// attrs.set("title_en", "Hello");
/// assert_eq!(attrs.value("title_en"), Value::from("Hello"));
/// assert_eq!(attrs.value("title_nl"), Value::Null);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Attributes {
    values: BTreeMap<String, Value>,
}

impl Attributes {
    /// Creates an empty attribute store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value for `column`, if any.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Returns a clone of the stored value, or `Null` when the column is absent.
    pub fn value(&self, column: &str) -> Value {
        self.values.get(column).cloned().unwrap_or(Value::Null)
    }

    /// Stores `value` under `column`, returning the previous value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(column.into(), value.into())
    }

    /// Removes `column`, returning its value.
    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.values.remove(column)
    }

    /// Returns `true` if a value (possibly `Null`) is stored under `column`.
    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Returns the number of stored columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no columns are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over stored column names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates over `(column, value)` pairs in column order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.values.iter()
    }

    /// Removes every stored column.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.values.insert(k.into(), v.into());
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
