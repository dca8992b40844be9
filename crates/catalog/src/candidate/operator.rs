// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use nymdb_core::interface::{CatalogQuery, ObjectId, OperatorKind, TypeId};

use crate::{
	candidate::{CandidateFlags, CandidateMatch, resolve_candidates},
	search_path::ResolvedSearchPath,
};

/// Parameters of an operator lookup.
///
/// Operators are declared with exactly two operand slots; prefix operators
/// carry [`TypeId::NONE`] in the left slot. Variadic and default expansion
/// never apply to operators.
#[derive(Debug, Clone)]
pub struct OperatorLookup<'a> {
	qualifier: Option<&'a str>,
	name: &'a str,
	kind: OperatorKind,
	operands: Option<(TypeId, TypeId)>,
	missing_ok: bool,
}

impl<'a> OperatorLookup<'a> {
	pub fn infix(name: &'a str) -> Self {
		Self {
			qualifier: None,
			name,
			kind: OperatorKind::Infix,
			operands: None,
			missing_ok: false,
		}
	}

	pub fn prefix(name: &'a str) -> Self {
		Self {
			qualifier: None,
			name,
			kind: OperatorKind::Prefix,
			operands: None,
			missing_ok: false,
		}
	}

	/// Restrict the lookup to one namespace instead of the search path.
	pub fn qualified(mut self, namespace: &'a str) -> Self {
		self.qualifier = Some(namespace);
		self
	}

	/// Exact operand types, for [`Self::resolve_exact`].
	pub fn operands(mut self, left: TypeId, right: TypeId) -> Self {
		self.operands = Some((left, right));
		self
	}

	/// Exact right operand of a prefix operator.
	pub fn operand(mut self, right: TypeId) -> Self {
		self.operands = Some((TypeId::NONE, right));
		self
	}

	pub fn missing_ok(mut self) -> Self {
		self.missing_ok = true;
		self
	}

	/// All operators of this name and kind reachable along the path, for
	/// the type-driven selection done by the caller.
	pub fn candidates(
		&self,
		catalog: &impl CatalogQuery,
		path: &ResolvedSearchPath,
	) -> crate::Result<Vec<CandidateMatch>> {
		resolve_candidates(
			catalog,
			path,
			self.qualifier,
			self.name,
			Some(2),
			&[],
			CandidateFlags {
				missing_ok: self.missing_ok,
				..Default::default()
			},
			Some(self.kind),
		)
	}

	/// The operator whose declared operand types equal the requested ones,
	/// if any. Earlier path namespaces mask later ones, so at most one
	/// candidate can match exactly.
	pub fn resolve_exact(
		&self,
		catalog: &impl CatalogQuery,
		path: &ResolvedSearchPath,
	) -> crate::Result<Option<ObjectId>> {
		let Some((left, right)) = self.operands else {
			return Ok(None);
		};
		let wanted = [left, right];
		let found = self
			.candidates(catalog, path)?
			.into_iter()
			.find(|candidate| candidate.arg_types == wanted);
		Ok(found.and_then(|candidate| candidate.id))
	}
}
