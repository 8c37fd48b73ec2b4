// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Root queries for every entity of a type.

use nestql::{Args, NestQL, QueryContext, Value, entity};
use nestql_testing::fixture::{movie_config, movie_source};

#[tokio::test]
async fn test_resolves_every_entity_in_load_order() {
	nestql_testing::tracing::init();
	let resolver = NestQL::embedded(&movie_config(), movie_source()).unwrap();

	let resolved = resolver
		.resolve("movie", &Args::None, &QueryContext::root())
		.await
		.unwrap();

	let movies = resolved.multiple().unwrap();
	assert_eq!(movies.len(), 2);
	assert_eq!(movies[0].get("name"), Some(&Value::utf8("The Bourne Identity")));
	assert_eq!(movies[1].get("name"), Some(&Value::utf8("Minority Report")));
}

#[tokio::test]
async fn test_resolves_multiple_entity_types_independently() {
	let config = serde_json::from_str(
		r#"{
			"entities": {
				"movie": { "primaryKey": "name" },
				"actor": { "primaryKey": "name" }
			}
		}"#,
	)
	.unwrap();
	let source = nestql::MemorySource::new()
		.with_set(
			"movie",
			vec![
				entity! { name: "The Bourne Identity", year: 2002 },
				entity! { name: "Minority Report", year: 2002 },
			],
		)
		.with_set(
			"actor",
			vec![entity! { name: "Matt Damon" }, entity! { name: "Tom Cruise" }],
		);
	let resolver = NestQL::embedded(&config, source).unwrap();
	let ctx = QueryContext::root();

	let movies = resolver.resolve("movie", &Args::None, &ctx).await.unwrap();
	assert_eq!(movies.multiple().map(<[nestql::Entity]>::len), Some(2));

	let actors = resolver.resolve("actor", &Args::None, &ctx).await.unwrap();
	let actors = actors.multiple().unwrap();
	assert_eq!(actors[0], entity! { name: "Matt Damon" });
	assert_eq!(actors[1], entity! { name: "Tom Cruise" });
}

#[tokio::test]
async fn test_arguments_without_the_primary_key_resolve_everything() {
	let resolver = NestQL::embedded(&movie_config(), movie_source()).unwrap();

	let resolved = resolver
		.resolve("movie", &nestql::args! { year: 2002 }, &QueryContext::root())
		.await
		.unwrap();

	assert_eq!(resolved.multiple().map(<[nestql::Entity]>::len), Some(2));
}
