// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod catalog;

/// A structured description of an error condition.
///
/// Diagnostics are the unit of error reporting across all nymdb crates: a
/// stable code, a human-readable message, and optional label/help/notes used
/// by renderers closer to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub statement: Option<String>,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Diagnostic {
	pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
		self.statement = Some(statement.into());
		self
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

/// Conversion into a [`Diagnostic`].
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_serialize_roundtrip() {
		let diagnostic = Diagnostic {
			code: "CATALOG_001".to_string(),
			statement: Some("set search_path = 'a,b'".to_string()),
			message: "invalid search path".to_string(),
			label: Some("bad element".to_string()),
			help: None,
			notes: vec!["note".to_string()],
		};

		let json = serde_json::to_string(&diagnostic).unwrap();
		let back: Diagnostic = serde_json::from_str(&json).unwrap();

		assert_eq!(back, diagnostic);
	}

	#[test]
	fn test_display_is_code() {
		let diagnostic = Diagnostic {
			code: "CATALOG_002".to_string(),
			statement: None,
			message: "anything".to_string(),
			label: None,
			help: None,
			notes: vec![],
		};

		assert_eq!(diagnostic.to_string(), "CATALOG_002");
	}
}
