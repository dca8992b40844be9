// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use nymdb_type::{Diagnostic, Error, IntoDiagnostic, diagnostic::catalog};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
	#[error("invalid search path specification: {reason}")]
	InvalidSearchPath {
		spec: String,
		reason: String,
	},

	#[error("no default creation namespace")]
	NoDefaultCreationNamespace,

	#[error("namespace {name} does not exist")]
	NamespaceNotFound {
		name: String,
	},

	#[error("call to {name} with {arity} arguments is ambiguous")]
	AmbiguousCall {
		name: String,
		arity: usize,
	},
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			CatalogError::InvalidSearchPath {
				spec,
				reason,
			} => catalog::invalid_search_path(&spec, &reason),
			CatalogError::NoDefaultCreationNamespace => catalog::no_default_creation_namespace(),
			CatalogError::NamespaceNotFound {
				name,
			} => catalog::namespace_not_found(&name),
			CatalogError::AmbiguousCall {
				name,
				arity,
			} => catalog::ambiguous_call(&name, arity),
		}
	}
}

impl From<CatalogError> for Error {
	fn from(err: CatalogError) -> Self {
		Error(err.into_diagnostic())
	}
}
