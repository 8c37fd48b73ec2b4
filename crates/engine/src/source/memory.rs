// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use async_trait::async_trait;
use indexmap::IndexMap;
use nestql_type::{Entity, Value, diagnostic::resolve::entity_set_unavailable, error};

use crate::source::EntitySource;

/// An [`EntitySource`] over in-memory entity sets, one per entity type.
///
/// Single-entity lookup is a linear scan by primary-key equality. Asking
/// for an entity type without a registered set is a resolution error —
/// an empty set must be registered explicitly.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	sets: IndexMap<String, Vec<Entity>>,
}

impl MemorySource {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register the entity set for `entity_type`, replacing any previous
	/// set.
	#[must_use]
	pub fn with_set(mut self, entity_type: impl Into<String>, entities: Vec<Entity>) -> Self {
		self.sets.insert(entity_type.into(), entities);
		self
	}

	pub fn insert_set(&mut self, entity_type: impl Into<String>, entities: Vec<Entity>) {
		self.sets.insert(entity_type.into(), entities);
	}

	fn set(&self, entity_type: &str) -> crate::Result<&[Entity]> {
		self.sets
			.get(entity_type)
			.map(Vec::as_slice)
			.ok_or_else(|| error!(entity_set_unavailable(entity_type)))
	}
}

#[async_trait]
impl EntitySource for MemorySource {
	async fn find_entity(
		&self,
		entity_type: &str,
		primary_key: &str,
		id: &Value,
	) -> crate::Result<Option<Entity>> {
		let entities = self.set(entity_type)?;
		Ok(entities.iter().find(|entity| entity.get(primary_key) == Some(id)).cloned())
	}

	async fn list_entities(&self, entity_type: &str) -> crate::Result<Vec<Entity>> {
		Ok(self.set(entity_type)?.to_vec())
	}
}
