// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The type of a [`Value`](crate::Value).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	Undefined,
	Boolean,
	Float8,
	Int8,
	Utf8,
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("UNDEFINED"),
			Type::Boolean => f.write_str("BOOLEAN"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::Int8 => f.write_str("INT8"),
			Type::Utf8 => f.write_str("UTF8"),
		}
	}
}
