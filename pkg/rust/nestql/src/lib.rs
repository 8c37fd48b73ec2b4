// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! # NestQL
//!
//! NestQL resolves typed queries against a graph of related entities. A
//! configuration describes entity types, their primary keys, and their
//! relationships; from it a [`Resolver`] is built that can fetch a single
//! entity by primary key, fetch every entity of a type, or traverse a named
//! relation from a parent entity — inferring join keys from primary keys
//! whenever the configuration does not spell them out.
//!
//! Data access is an injected capability: implement [`EntitySource`] over
//! your store, or use the built-in [`MemorySource`] for inline data.
//!
//! ```
//! use nestql::{NestQL, MemorySource, QueryContext, args, entity};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), nestql::Error> {
//! let config = serde_json::from_str(
//!     r#"{ "entities": { "movie": { "primaryKey": "name" } } }"#,
//! ).unwrap();
//!
//! let source = MemorySource::new()
//!     .with_set("movie", vec![entity! { name: "The Bourne Identity", year: 2002 }]);
//!
//! let resolver = NestQL::embedded(&config, source)?;
//! let movie = resolver
//!     .resolve("movie", &args! { name: "The Bourne Identity" }, &QueryContext::root())
//!     .await?;
//! assert_eq!(movie.single().unwrap().get("year"), Some(&nestql::Value::int8(2002)));
//! # Ok(())
//! # }
//! ```

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use nestql_catalog::{
	Cardinality, Catalog, EntityDef, EntityTypeConfig, RelatedEntityConfig, RelationDef,
	ResolverConfig,
};
pub use nestql_engine::{EntitySource, MemorySource, QueryContext, Resolved, Resolver};
pub use nestql_type::{
	Args, Diagnostic, Entity, Error, IntoValue, OrderedF64, Result, Type, Value, args, diagnostic,
	entity, error,
};

pub struct NestQL {}

impl NestQL {
	/// Build a resolver over inline, in-memory entity sets.
	pub fn embedded(
		config: &ResolverConfig,
		source: MemorySource,
	) -> Result<Resolver<MemorySource>> {
		Resolver::new(config, source)
	}

	/// Build a resolver over a lazily loading entity source.
	pub fn lazy<S: EntitySource>(config: &ResolverConfig, source: S) -> Result<Resolver<S>> {
		Resolver::new(config, source)
	}
}
