// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nestql_catalog::EntityDef;
use nestql_type::Args;
use tracing::{instrument, trace};

use crate::{QueryContext, Resolved, source::EntitySource};

/// Resolve a root query against one entity type.
///
/// When the arguments carry the type's primary key the call is a single
/// lookup and resolves to `Resolved::Single` — absent when no entity has
/// that key. Otherwise the call is a bulk lookup resolving to every entity
/// of the type, in load order. A primary-key argument that is explicitly
/// undefined counts as absent.
#[instrument(name = "resolve::root", level = "trace", skip_all, fields(entity = %entity.name, depth = ctx.depth()))]
pub async fn resolve_root<S>(
	source: &S,
	entity: &EntityDef,
	args: &Args,
	ctx: &QueryContext,
) -> crate::Result<Resolved>
where
	S: EntitySource + ?Sized,
{
	match args.get(&entity.primary_key) {
		Some(id) if !id.is_undefined() => {
			trace!(primary_key = %entity.primary_key, id = %id, "single entity lookup");
			let found = source.find_entity(&entity.name, &entity.primary_key, id).await?;
			Ok(Resolved::Single(found))
		}
		_ => {
			trace!("bulk entity lookup");
			let entities = source.list_entities(&entity.name).await?;
			Ok(Resolved::Multiple(entities))
		}
	}
}
