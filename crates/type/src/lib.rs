// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]

mod args;
pub mod error;
pub mod value;

pub use args::Args;
pub use error::{Error, diagnostic, diagnostic::Diagnostic};
pub use value::{Entity, IntoValue, OrderedF64, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
