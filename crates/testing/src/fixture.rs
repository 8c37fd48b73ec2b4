// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Canonical movie/director fixtures shared by the integration suite.

use indexmap::IndexMap;
use nestql_catalog::{EntityTypeConfig, RelatedEntityConfig, ResolverConfig};
use nestql_engine::MemorySource;
use nestql_type::entity;

/// `movie` keyed by `name`, with a singular `director` relation joined on
/// the movie's `directorId`; `director` keyed by `id`.
pub fn movie_config() -> ResolverConfig {
	let mut config = ResolverConfig::default();
	config.entities.insert(
		"movie".to_string(),
		EntityTypeConfig {
			primary_key: "name".to_string(),
			nested: IndexMap::from([(
				"director".to_string(),
				RelatedEntityConfig {
					parent_key: Some("directorId".to_string()),
					..Default::default()
				},
			)]),
		},
	);
	config.entities.insert(
		"director".to_string(),
		EntityTypeConfig {
			primary_key: "id".to_string(),
			..Default::default()
		},
	);
	config
}

/// Two movies and the one director the fixtures join against.
pub fn movie_source() -> MemorySource {
	MemorySource::new()
		.with_set(
			"movie",
			vec![
				entity! { name: "The Bourne Identity", year: 2002, directorId: "1234" },
				entity! { name: "Minority Report", year: 2002, directorId: "5678" },
			],
		)
		.with_set(
			"director",
			vec![
				entity! { id: "1234", name: "Doug Liman" },
				entity! { id: "5678", name: "Steven Spielberg" },
			],
		)
}
