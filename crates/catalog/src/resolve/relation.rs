// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nestql_type::{diagnostic::catalog::relation_target_unknown, return_error};
use tracing::trace;

use crate::{
	Cardinality, RelationDef,
	config::{EntityTypeConfig, RelatedEntityConfig, ResolverConfig},
};

/// Resolve one relation declaration into a [`RelationDef`] with fully
/// inferred join keys.
///
/// The target type is `from` when given, otherwise the relation's own name.
/// The parent-side key defaults to the PARENT type's primary key and the
/// child-side key to the target type's primary key.
pub fn resolve_relation(
	config: &ResolverConfig,
	parent_name: &str,
	parent: &EntityTypeConfig,
	name: &str,
	related: &RelatedEntityConfig,
) -> crate::Result<RelationDef> {
	let target = related.from.clone().unwrap_or_else(|| name.to_string());

	let Some(target_type) = config.entity(&target) else {
		return_error!(relation_target_unknown(parent_name, name, &target));
	};

	let parent_key = related
		.parent_key
		.clone()
		.unwrap_or_else(|| parent.primary_key.clone());
	let foreign_key = related
		.foreign_key
		.clone()
		.unwrap_or_else(|| target_type.primary_key.clone());

	let cardinality = if related.multiple {
		Cardinality::Multiple
	} else {
		Cardinality::Single
	};

	trace!(
		parent = %parent_name,
		relation = %name,
		target = %target,
		parent_key = %parent_key,
		foreign_key = %foreign_key,
		"resolved relation"
	);

	Ok(RelationDef {
		name: name.to_string(),
		target,
		from: related.from.clone(),
		parent_key,
		foreign_key,
		cardinality,
	})
}

#[cfg(test)]
mod tests {
	use indexmap::IndexMap;

	use super::*;

	fn config() -> ResolverConfig {
		let mut config = ResolverConfig::default();
		config.entities.insert(
			"movie".to_string(),
			EntityTypeConfig {
				primary_key: "name".to_string(),
				nested: IndexMap::new(),
			},
		);
		config.entities.insert(
			"director".to_string(),
			EntityTypeConfig {
				primary_key: "id".to_string(),
				nested: IndexMap::new(),
			},
		);
		config
	}

	fn resolve(name: &str, related: &RelatedEntityConfig) -> crate::Result<RelationDef> {
		let config = config();
		let parent = config.entity("movie").unwrap();
		resolve_relation(&config, "movie", parent, name, related)
	}

	#[test]
	fn test_defaults_come_from_primary_keys() {
		// No overrides at all: the relation name is the target, the
		// parent side joins on the parent's primary key, the child
		// side on the target's primary key.
		let def = resolve("director", &RelatedEntityConfig::default()).unwrap();
		assert_eq!(def.target, "director");
		assert_eq!(def.from, None);
		assert_eq!(def.parent_key, "name");
		assert_eq!(def.foreign_key, "id");
		assert_eq!(def.cardinality, Cardinality::Single);
	}

	#[test]
	fn test_parent_key_override() {
		let related = RelatedEntityConfig {
			parent_key: Some("directorId".to_string()),
			..Default::default()
		};
		let def = resolve("director", &related).unwrap();
		assert_eq!(def.parent_key, "directorId");
		assert_eq!(def.foreign_key, "id");
	}

	#[test]
	fn test_from_renames_the_target() {
		let related = RelatedEntityConfig {
			from: Some("director".to_string()),
			parent_key: Some("directorId".to_string()),
			..Default::default()
		};
		let def = resolve("the_director", &related).unwrap();
		assert_eq!(def.target, "director");
		assert_eq!(def.from.as_deref(), Some("director"));
		assert_eq!(def.name, "the_director");
		// Child-side key still defaults from the renamed target.
		assert_eq!(def.foreign_key, "id");
	}

	#[test]
	fn test_multiple_sets_cardinality() {
		let related = RelatedEntityConfig {
			multiple: true,
			foreign_key: Some("movie".to_string()),
			..Default::default()
		};
		let def = resolve("director", &related).unwrap();
		assert_eq!(def.cardinality, Cardinality::Multiple);
		assert!(def.is_multiple());
		assert_eq!(def.foreign_key, "movie");
	}

	#[test]
	fn test_unknown_target_is_a_configuration_error() {
		let err = resolve("producer", &RelatedEntityConfig::default()).unwrap_err();
		assert_eq!(err.code(), "CATALOG_002");
	}

	#[test]
	fn test_unknown_from_target_is_a_configuration_error() {
		let related = RelatedEntityConfig {
			from: Some("studio".to_string()),
			..Default::default()
		};
		let err = resolve("director", &related).unwrap_err();
		assert_eq!(err.code(), "CATALOG_002");
	}
}
