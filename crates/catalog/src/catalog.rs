// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use nestql_type::{diagnostic::resolve::entity_type_unknown, error};
use tracing::debug;

use crate::{EntityDef, config::ResolverConfig, resolve::resolve_entity};

/// The immutable catalog of resolved entity types.
///
/// Built once from a [`ResolverConfig`]; afterwards it is read-only and
/// shared freely across concurrent resolutions. Every static
/// misconfiguration is raised by [`Catalog::resolve`], never deferred to
/// query time.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
	entities: IndexMap<String, EntityDef>,
}

impl Catalog {
	pub fn resolve(config: &ResolverConfig) -> crate::Result<Catalog> {
		debug!(entities = config.entities.len(), "resolving catalog");

		let mut entities = IndexMap::new();
		for (name, entity) in &config.entities {
			entities.insert(name.clone(), resolve_entity(config, name, entity)?);
		}

		Ok(Catalog {
			entities,
		})
	}

	pub fn find_entity(&self, name: &str) -> Option<&EntityDef> {
		self.entities.get(name)
	}

	pub fn get_entity(&self, name: &str) -> crate::Result<&EntityDef> {
		self.find_entity(name).ok_or_else(|| error!(entity_type_unknown(name)))
	}

	pub fn entities(&self) -> impl Iterator<Item = &EntityDef> {
		self.entities.values()
	}

	pub fn len(&self) -> usize {
		self.entities.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}
}
