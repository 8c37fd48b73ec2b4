// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nestql_catalog::{Cardinality, EntityDef, RelationDef};
use nestql_type::{Args, Entity, diagnostic::resolve::parent_key_missing, return_error};
use tracing::{instrument, trace};

use crate::{QueryContext, Resolved, source::EntitySource};

/// Resolve a relation from a parent entity to its related entities.
///
/// This is an equi-join of the parent against the target type's entity
/// set on `(parent_key, foreign_key)`, projected to the relation's
/// cardinality. The target set is never pre-indexed, so every resolution
/// is a linear scan; sources are expected to cache and callers to batch.
///
/// The parent must carry the parent-side join key — a missing (or
/// explicitly undefined) field is a resolution error, not an empty
/// result, so misconfigured joins surface instead of silently resolving
/// to nothing. Candidates lacking the foreign-key field simply do not
/// match. Relation `args` are accepted for surface compatibility and not
/// interpreted.
#[instrument(name = "resolve::related", level = "trace", skip_all, fields(entity = %entity.name, relation = %relation.name, depth = ctx.depth()))]
pub async fn resolve_related<S>(
	source: &S,
	entity: &EntityDef,
	relation: &RelationDef,
	parent: &Entity,
	_args: &Args,
	ctx: &QueryContext,
) -> crate::Result<Resolved>
where
	S: EntitySource + ?Sized,
{
	let parent_value = match parent.get(&relation.parent_key) {
		Some(value) if !value.is_undefined() => value,
		_ => return_error!(parent_key_missing(
			&entity.name,
			&relation.name,
			&relation.parent_key,
			parent
		)),
	};

	let candidates = source.list_entities(&relation.target).await?;
	trace!(
		candidates = candidates.len(),
		parent_key = %relation.parent_key,
		foreign_key = %relation.foreign_key,
		parent_value = %parent_value,
		value_type = %parent_value.get_type(),
		"filtering candidate entities"
	);

	let matches: Vec<Entity> = candidates
		.into_iter()
		.filter(|candidate| candidate.get(&relation.foreign_key) == Some(parent_value))
		.collect();
	trace!(matches = matches.len(), "filtered candidate entities");

	match relation.cardinality {
		Cardinality::Multiple => Ok(Resolved::Multiple(matches)),
		Cardinality::Single => Ok(Resolved::Single(matches.into_iter().next())),
	}
}
