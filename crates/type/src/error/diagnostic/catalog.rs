// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use crate::error::diagnostic::Diagnostic;

/// Search path specification string could not be parsed
pub fn invalid_search_path(spec: &str, reason: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_001".to_string(),
		statement: None,
		message: format!("Invalid search path specification: {}", reason),
		label: Some("malformed search path".to_string()),
		help: Some(
			"Separate namespace names with commas and double-quote names containing special characters"
				.to_string(),
		),
		notes: vec![format!("specification was: {}", spec)],
	}
}

/// Creation was requested but the explicit search path is empty
pub fn no_default_creation_namespace() -> Diagnostic {
	Diagnostic {
		code: "CATALOG_002".to_string(),
		statement: None,
		message: "No default creation namespace".to_string(),
		label: Some("empty explicit search path".to_string()),
		help: Some("Qualify the object name with a namespace, or set a non-empty search path".to_string()),
		notes: vec![],
	}
}

/// A qualified name referenced a namespace that does not exist
pub fn namespace_not_found(name: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_003".to_string(),
		statement: None,
		message: format!("Namespace {} does not exist", name),
		label: Some("unknown namespace".to_string()),
		help: Some("Check the namespace name".to_string()),
		notes: vec![],
	}
}

/// A call resolved to more than one equally good candidate
pub fn ambiguous_call(name: &str, arity: usize) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_004".to_string(),
		statement: None,
		message: format!("Call to {} with {} arguments is ambiguous", name, arity),
		label: Some("ambiguous call".to_string()),
		help: Some("Qualify the name with a namespace or add explicit casts to the arguments".to_string()),
		notes: vec![],
	}
}
