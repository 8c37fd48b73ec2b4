// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use nestql_type::{diagnostic::resolve::relation_unknown, error};
use serde::{Deserialize, Serialize};

/// Whether a relation resolves to a single entity or a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
	Single,
	Multiple,
}

/// A fully resolved entity type: the plain-data form every root query
/// executes against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDef {
	/// The entity type name, unique within the catalog.
	pub name: String,
	/// The field whose value uniquely identifies an entity of this type.
	pub primary_key: String,
	/// Relations declared on this type, keyed by relation name.
	pub relations: IndexMap<String, RelationDef>,
}

/// A fully resolved relation: join keys and cardinality are already
/// inferred, so resolution at query time is pure data-driven filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationDef {
	/// The relation name as declared on the parent type.
	pub name: String,
	/// The entity type this relation resolves against.
	pub target: String,
	/// The configured target override, `None` when the relation name
	/// itself names the target. Exposed for caller introspection.
	pub from: Option<String>,
	/// The field on the parent entity holding the join value.
	pub parent_key: String,
	/// The field on candidate entities compared against the join value.
	pub foreign_key: String,
	pub cardinality: Cardinality,
}

impl EntityDef {
	pub fn find_relation(&self, name: &str) -> Option<&RelationDef> {
		self.relations.get(name)
	}

	pub fn get_relation(&self, name: &str) -> crate::Result<&RelationDef> {
		self.find_relation(name)
			.ok_or_else(|| error!(relation_unknown(&self.name, name)))
	}
}

impl RelationDef {
	pub fn is_multiple(&self) -> bool {
		self.cardinality == Cardinality::Multiple
	}
}
