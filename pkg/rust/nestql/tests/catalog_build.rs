// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Building a resolver: configuration loading and static validation.

use nestql::{Cardinality, MemorySource, NestQL, ResolverConfig};
use nestql_testing::fixture::{movie_config, movie_source};

#[tokio::test]
async fn test_build_resolves_join_keys_up_front() {
	let resolver = NestQL::embedded(&movie_config(), movie_source()).unwrap();

	let movie = resolver.catalog().get_entity("movie").unwrap();
	assert_eq!(movie.primary_key, "name");

	let director = movie.get_relation("director").unwrap();
	assert_eq!(director.target, "director");
	assert_eq!(director.from, None);
	assert_eq!(director.parent_key, "directorId");
	// Child-side key defaults to the target type's primary key.
	assert_eq!(director.foreign_key, "id");
	assert_eq!(director.cardinality, Cardinality::Single);
}

#[tokio::test]
async fn test_build_rejects_unknown_relation_target() {
	let config: ResolverConfig = serde_json::from_str(
		r#"{
			"entities": {
				"movie": {
					"primaryKey": "name",
					"nested": { "director": { "parentKey": "directorId" } }
				}
			}
		}"#,
	)
	.unwrap();

	let err = NestQL::embedded(&config, MemorySource::new()).unwrap_err();
	assert_eq!(err.code(), "CATALOG_002");
}

#[tokio::test]
async fn test_build_rejects_empty_primary_key() {
	let config: ResolverConfig =
		serde_json::from_str(r#"{ "entities": { "movie": { "primaryKey": "" } } }"#).unwrap();

	let err = NestQL::embedded(&config, MemorySource::new()).unwrap_err();
	assert_eq!(err.code(), "CATALOG_001");
}

#[tokio::test]
async fn test_configuration_errors_render_with_help() {
	let config: ResolverConfig =
		serde_json::from_str(r#"{ "entities": { "movie": { "primaryKey": "" } } }"#).unwrap();

	let rendered = NestQL::embedded(&config, MemorySource::new()).unwrap_err().to_string();
	assert!(rendered.starts_with("error[CATALOG_001]:"));
	assert!(rendered.contains("help:"));
}

#[tokio::test]
async fn test_lazy_and_embedded_share_the_same_catalog() {
	let embedded = NestQL::embedded(&movie_config(), movie_source()).unwrap();
	let lazy = NestQL::lazy(&movie_config(), movie_source()).unwrap();

	assert_eq!(embedded.catalog(), lazy.catalog());
}
