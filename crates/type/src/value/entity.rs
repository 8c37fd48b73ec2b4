// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Value;

/// An entity: an open-ended, ordered field mapping.
///
/// Entities carry no schema beyond the fields they happen to contain; the
/// resolver only ever interprets the key fields named by the catalog and
/// treats everything else as opaque payload. Field lookup is explicit —
/// [`Entity::get`] returns `None` for an absent field and callers decide
/// whether that is an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity(IndexMap<String, Value>);

impl Entity {
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	/// Build an entity from field pairs, keeping insertion order.
	pub fn from_pairs(pairs: impl IntoIterator<Item = (String, Value)>) -> Self {
		Self(pairs.into_iter().collect())
	}

	pub fn get(&self, field: &str) -> Option<&Value> {
		self.0.get(field)
	}

	pub fn contains_field(&self, field: &str) -> bool {
		self.0.contains_key(field)
	}

	pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
		self.0.insert(field.into(), value)
	}

	pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<IndexMap<String, Value>> for Entity {
	fn from(fields: IndexMap<String, Value>) -> Self {
		Self(fields)
	}
}

impl FromIterator<(String, Value)> for Entity {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl Display for Entity {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("{")?;
		for (i, (field, value)) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}: {}", field, value)?;
		}
		f.write_str("}")
	}
}

/// Builds an [`Entity`] from `field: value` pairs.
///
/// ```
/// use nestql_type::entity;
///
/// let movie = entity! {
///     name: "The Bourne Identity",
///     year: 2002,
/// };
/// assert_eq!(movie.get("year"), Some(&nestql_type::Value::int8(2002)));
/// ```
#[macro_export]
macro_rules! entity {
    // Empty entity
    {} => {
        $crate::Entity::new()
    };

    // Fields with mixed keys: entity!{ name: value, "key": value }
    { $($field:tt : $value:expr),+ $(,)? } => {
        $crate::Entity::from_pairs([
            $(($crate::field_key!($field), $crate::IntoValue::into_value($value))),*
        ])
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! field_key {
	($field:ident) => {
		stringify!($field).to_string()
	};
	($field:literal) => {
		$field.to_string()
	};
}
