// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nestql_catalog::{Catalog, ResolverConfig};
use nestql_type::{Args, Entity};
use tracing::instrument;

use crate::{
	QueryContext, Resolved,
	resolve::{resolve_related, resolve_root},
	source::EntitySource,
};

/// A resolver: an immutable catalog bound to an entity source.
///
/// Constructed once, read-only afterwards. Holding no mutable state, a
/// resolver imposes no ordering or mutual exclusion between concurrent
/// resolutions.
#[derive(Debug, Clone)]
pub struct Resolver<S> {
	catalog: Catalog,
	source: S,
}

impl<S: EntitySource> Resolver<S> {
	/// Build a resolver from configuration. Static misconfiguration —
	/// a missing primary key, a relation targeting an undeclared type —
	/// fails here, not on first use.
	pub fn new(config: &ResolverConfig, source: S) -> crate::Result<Self> {
		Ok(Self {
			catalog: Catalog::resolve(config)?,
			source,
		})
	}

	pub fn from_catalog(catalog: Catalog, source: S) -> Self {
		Self {
			catalog,
			source,
		}
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	/// Resolve a root query: a single entity when `args` carry the
	/// type's primary key, every entity of the type otherwise.
	#[instrument(name = "resolver::resolve", level = "trace", skip(self, args, ctx))]
	pub async fn resolve(
		&self,
		entity_type: &str,
		args: &Args,
		ctx: &QueryContext,
	) -> crate::Result<Resolved> {
		let entity = self.catalog.get_entity(entity_type)?;
		resolve_root(&self.source, entity, args, ctx).await
	}

	/// Resolve a named relation from a parent entity.
	#[instrument(name = "resolver::resolve_related", level = "trace", skip(self, parent, args, ctx))]
	pub async fn resolve_related(
		&self,
		entity_type: &str,
		relation: &str,
		parent: &Entity,
		args: &Args,
		ctx: &QueryContext,
	) -> crate::Result<Resolved> {
		let entity = self.catalog.get_entity(entity_type)?;
		let relation = entity.get_relation(relation)?;
		resolve_related(&self.source, entity, relation, parent, args, ctx).await
	}
}
