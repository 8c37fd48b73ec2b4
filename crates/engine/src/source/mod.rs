// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use async_trait::async_trait;
use nestql_type::{Entity, Value};

mod memory;

pub use memory::MemorySource;

/// The data-access capability the resolver delegates to.
///
/// Implementations may be backed by in-memory sets ([`MemorySource`]), a
/// database, or a remote service. The resolver never mutates entities or
/// the underlying store; it issues at most one source call per resolution
/// and propagates source errors unchanged. Caching, batching, retries and
/// timeouts are the source's concern.
#[async_trait]
pub trait EntitySource: Send + Sync {
	/// Load the entity of `entity_type` whose `primary_key` field equals
	/// `id`. Absence is `Ok(None)`, never an error.
	async fn find_entity(
		&self,
		entity_type: &str,
		primary_key: &str,
		id: &Value,
	) -> crate::Result<Option<Entity>>;

	/// Load every entity of `entity_type`, in the source's load order.
	async fn list_entities(&self, entity_type: &str) -> crate::Result<Vec<Entity>>;
}
