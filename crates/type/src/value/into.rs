// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::Value;

/// Conversion into a [`Value`], used by the `entity!` and `args!` macros.
pub trait IntoValue {
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

impl IntoValue for bool {
	fn into_value(self) -> Value {
		Value::Boolean(self)
	}
}

impl IntoValue for i32 {
	fn into_value(self) -> Value {
		Value::Int8(i64::from(self))
	}
}

impl IntoValue for i64 {
	fn into_value(self) -> Value {
		Value::Int8(self)
	}
}

impl IntoValue for f64 {
	fn into_value(self) -> Value {
		Value::float8(self)
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::Utf8(self.to_string())
	}
}

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::Utf8(self)
	}
}
