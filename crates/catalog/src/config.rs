// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configures the whole resolver: one entry per entity type.
///
/// Wire names are camelCase, so configuration documents load directly:
///
/// ```json
/// {
///     "entities": {
///         "movie": {
///             "primaryKey": "name",
///             "nested": {
///                 "director": { "parentKey": "directorId" }
///             }
///         },
///         "director": { "primaryKey": "id" }
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResolverConfig {
	pub entities: IndexMap<String, EntityTypeConfig>,
}

/// Configures one entity type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntityTypeConfig {
	/// The field that is the primary identifying key for each entity of
	/// this type.
	pub primary_key: String,

	/// Other entity types related to this one, keyed by relation name.
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub nested: IndexMap<String, RelatedEntityConfig>,
}

/// Configures one relation from a parent entity type to a target type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RelatedEntityConfig {
	/// Resolve to multiple entities instead of a single one.
	#[serde(default)]
	pub multiple: bool,

	/// The target entity type, when different from the relation name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub from: Option<String>,

	/// The parent-side join key. Defaults to the parent type's primary
	/// key.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parent_key: Option<String>,

	/// The child-side join key. Defaults to the target type's primary
	/// key.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub foreign_key: Option<String>,
}

impl ResolverConfig {
	pub fn entity(&self, name: &str) -> Option<&EntityTypeConfig> {
		self.entities.get(name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_deserialize_minimal() {
		let config: ResolverConfig = serde_json::from_str(
			r#"{ "entities": { "movie": { "primaryKey": "name" } } }"#,
		)
		.unwrap();

		let movie = config.entity("movie").unwrap();
		assert_eq!(movie.primary_key, "name");
		assert!(movie.nested.is_empty());
	}

	#[test]
	fn test_deserialize_relations() {
		let config: ResolverConfig = serde_json::from_str(
			r#"{
				"entities": {
					"movie": {
						"primaryKey": "name",
						"nested": {
							"director": { "parentKey": "directorId" },
							"actors": {
								"from": "actor",
								"multiple": true,
								"foreignKey": "movie"
							}
						}
					},
					"director": { "primaryKey": "id" },
					"actor": { "primaryKey": "name" }
				}
			}"#,
		)
		.unwrap();

		let movie = config.entity("movie").unwrap();
		let director = &movie.nested["director"];
		assert_eq!(director.parent_key.as_deref(), Some("directorId"));
		assert!(!director.multiple);
		assert_eq!(director.from, None);

		let actors = &movie.nested["actors"];
		assert_eq!(actors.from.as_deref(), Some("actor"));
		assert!(actors.multiple);
		assert_eq!(actors.foreign_key.as_deref(), Some("movie"));
	}

	#[test]
	fn test_unknown_fields_are_rejected() {
		let result: Result<ResolverConfig, _> = serde_json::from_str(
			r#"{ "entities": { "movie": { "primaryKey": "name", "primarykey": "x" } } }"#,
		);
		assert!(result.is_err());
	}

	#[test]
	fn test_serialize_round_trip() {
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

		let json = serde_json::to_string(&config).unwrap();
		assert_eq!(serde_json::from_str::<ResolverConfig>(&json).unwrap(), config);
		assert!(json.contains("primaryKey"));
		assert!(json.contains("parentKey"));
	}
}
