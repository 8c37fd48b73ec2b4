// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use nestql_type::{diagnostic::catalog::primary_key_undefined, return_error};
use tracing::trace;

use crate::{
	EntityDef,
	config::{EntityTypeConfig, ResolverConfig},
	resolve::resolve_relation,
};

/// Resolve one entity type declaration into an [`EntityDef`], resolving
/// every relation declared under it.
pub fn resolve_entity(
	config: &ResolverConfig,
	name: &str,
	entity: &EntityTypeConfig,
) -> crate::Result<EntityDef> {
	if entity.primary_key.is_empty() {
		return_error!(primary_key_undefined(name));
	}

	let mut relations = IndexMap::new();
	for (relation_name, related) in &entity.nested {
		let def = resolve_relation(config, name, entity, relation_name, related)?;
		relations.insert(relation_name.clone(), def);
	}

	trace!(entity = %name, primary_key = %entity.primary_key, relations = relations.len(), "resolved entity type");

	Ok(EntityDef {
		name: name.to_string(),
		primary_key: entity.primary_key.clone(),
		relations,
	})
}
