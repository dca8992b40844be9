// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use nymdb_core::interface::CatalogQuery;

use crate::{
	candidate::{CandidateFlags, CandidateMatch, resolve_candidates},
	search_path::ResolvedSearchPath,
};

/// Parameters of a function candidate lookup.
///
/// By default the lookup is unqualified, positional, matches any arity, and
/// performs no variadic or default expansion. A concrete call site sets the
/// arity, any argument names, and the expansion flags; catalog listings (such
/// as DROP FUNCTION resolution) keep the arity wildcard.
#[derive(Debug, Clone)]
pub struct FunctionLookup<'a> {
	qualifier: Option<&'a str>,
	name: &'a str,
	arity: Option<usize>,
	arg_names: &'a [String],
	flags: CandidateFlags,
}

impl<'a> FunctionLookup<'a> {
	pub fn new(name: &'a str) -> Self {
		Self {
			qualifier: None,
			name,
			arity: None,
			arg_names: &[],
			flags: CandidateFlags::default(),
		}
	}

	/// Restrict the lookup to one namespace instead of the search path.
	pub fn qualified(mut self, namespace: &'a str) -> Self {
		self.qualifier = Some(namespace);
		self
	}

	pub fn arity(mut self, arity: usize) -> Self {
		self.arity = Some(arity);
		self
	}

	/// Names supplied with named notation, in call order. They always
	/// follow any positional arguments, so the count of positional
	/// arguments is the arity minus the number of names.
	pub fn arg_names(mut self, names: &'a [String]) -> Self {
		self.arg_names = names;
		self
	}

	pub fn expand_variadic(mut self) -> Self {
		self.flags.expand_variadic = true;
		self
	}

	pub fn expand_defaults(mut self) -> Self {
		self.flags.expand_defaults = true;
		self
	}

	pub fn include_out_arguments(mut self) -> Self {
		self.flags.include_out_arguments = true;
		self
	}

	/// Tolerate a qualifier naming a nonexistent namespace, returning no
	/// candidates instead of an error.
	pub fn missing_ok(mut self) -> Self {
		self.flags.missing_ok = true;
		self
	}

	pub fn resolve(
		&self,
		catalog: &impl CatalogQuery,
		path: &ResolvedSearchPath,
	) -> crate::Result<Vec<CandidateMatch>> {
		resolve_candidates(
			catalog,
			path,
			self.qualifier,
			self.name,
			self.arity,
			self.arg_names,
			self.flags,
			None,
		)
	}
}
