// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Entity, error::diagnostic::Diagnostic};

pub fn parent_key_missing(entity_type: &str, relation: &str, field: &str, parent: &Entity) -> Diagnostic {
	let available = parent.field_names().collect::<Vec<_>>().join(", ");
	Diagnostic {
		code: "RESOLVE_001".to_string(),
		message: format!(
			"parent entity of type '{}' has no '{}' field to resolve relation '{}'",
			entity_type, field, relation
		),
		label: Some("the parent-side join key must be present on the parent entity".to_string()),
		help: Some("check the parentKey override against the parent entity's fields".to_string()),
		notes: vec![format!("fields present on the parent entity: {}", available)],
	}
}

pub fn entity_type_unknown(name: &str) -> Diagnostic {
	Diagnostic {
		code: "RESOLVE_002".to_string(),
		message: format!("unknown entity type '{}'", name),
		label: Some("this entity type is not declared in the catalog".to_string()),
		help: Some("check for typos or declare the entity type in the configuration".to_string()),
		notes: vec![],
	}
}

pub fn relation_unknown(entity_type: &str, relation: &str) -> Diagnostic {
	Diagnostic {
		code: "RESOLVE_003".to_string(),
		message: format!("entity type '{}' has no relation '{}'", entity_type, relation),
		label: Some("this relation is not declared on the parent entity type".to_string()),
		help: Some("declare the relation under the entity type's nested entities".to_string()),
		notes: vec![],
	}
}

pub fn entity_set_unavailable(entity_type: &str) -> Diagnostic {
	Diagnostic {
		code: "RESOLVE_004".to_string(),
		message: format!("no entity set available for entity type '{}'", entity_type),
		label: Some("the data source holds no entities of this type".to_string()),
		help: Some("register an entity set for this type with the data source".to_string()),
		notes: vec![],
	}
}
