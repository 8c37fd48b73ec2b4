// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use crate::Value;

/// Named arguments for a query invocation.
///
/// A root query carries at most the primary-key field of the entity type it
/// targets; related-entity invocations accept arguments for surface
/// compatibility with invoking frameworks but the resolver does not interpret
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Args {
	#[default]
	None,
	Named(HashMap<String, Value>),
}

impl Args {
	pub fn empty() -> Args {
		Args::None
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		match self {
			Args::Named(map) => map.get(name),
			Args::None => None,
		}
	}
}

impl From<()> for Args {
	fn from(_: ()) -> Self {
		Args::None
	}
}

impl From<HashMap<String, Value>> for Args {
	fn from(map: HashMap<String, Value>) -> Self {
		Args::Named(map)
	}
}

/// Builds [`Args`] from `name: value` pairs.
#[macro_export]
macro_rules! args {
    // Empty args
    () => {
        $crate::Args::None
    };

    {} => {
        $crate::Args::None
    };

    // Named arguments with mixed keys: args!{ name: value, "key": value }
    { $($name:tt : $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::new();
            $(
                map.insert($crate::field_key!($name), $crate::IntoValue::into_value($value));
            )*
            $crate::Args::Named(map)
        }
    };
}
