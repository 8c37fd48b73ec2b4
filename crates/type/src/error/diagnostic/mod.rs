// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter, Write};

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod resolve;

/// A structured, renderable description of a failure.
///
/// Codes are namespaced: `CATALOG_*` diagnostics are raised while resolving
/// configuration into a catalog, `RESOLVE_*` diagnostics at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();

		let _ = writeln!(&mut output, "error[{}]: {}", d.code, d.message);

		if let Some(label) = &d.label {
			let _ = writeln!(&mut output, " = {}", label);
		}

		if let Some(help) = &d.help {
			let _ = writeln!(&mut output, "\nhelp: {}", help);
		}

		for note in &d.notes {
			let _ = writeln!(&mut output, "\nnote: {}", note);
		}

		output
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}
