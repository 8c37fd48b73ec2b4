// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn primary_key_undefined(entity_type: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_001".to_string(),
		message: format!("entity type '{}' has no primary key", entity_type),
		label: Some("every entity type must name its primary key field".to_string()),
		help: Some(
			"set primaryKey to the field that uniquely identifies entities of this type"
				.to_string(),
		),
		notes: vec![],
	}
}

pub fn relation_target_unknown(entity_type: &str, relation: &str, target: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_002".to_string(),
		message: format!(
			"relation '{}' of entity type '{}' targets unknown entity type '{}'",
			relation, entity_type, target
		),
		label: Some("the target of a relation must be a declared entity type".to_string()),
		help: Some(
			"declare the target under entities, or point the relation elsewhere with from"
				.to_string(),
		),
		notes: vec![
			"a relation resolves against the entity type named by its from field, \
			 or by the relation name itself when from is omitted"
				.to_string(),
		],
	}
}
