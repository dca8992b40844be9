// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

//! Generic overload matching over a resolved search path.
//!
//! The same engine serves function and operator resolution. Declarations
//! found in earlier namespaces mask identical-signature declarations in
//! later namespaces, non-variadic matches mask variadic matches that expand
//! to the same effective signature, and residual conflicts are reported as a
//! single match with no identity rather than an error; the decision to
//! treat an ambiguous selection as a failure belongs to the caller.

mod function;
mod operator;

pub use function::FunctionLookup;
pub use operator::OperatorLookup;

use nymdb_core::interface::{
	CandidateDeclaration, CatalogQuery, NamespaceId, ObjectId, OperatorKind, TypeId,
};
use tracing::warn;

use crate::{error::CatalogError, search_path::ResolvedSearchPath};

/// Flags steering candidate collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateFlags {
	/// Retain variadic declarations whose fixed arity is at most the
	/// requested arity, expanding the tail with the variadic element type.
	pub expand_variadic: bool,
	/// Retain declarations with more parameters than supplied arguments
	/// when every uncovered trailing parameter has a default.
	pub expand_defaults: bool,
	/// Match against the declaration's full signature including OUT-mode
	/// arguments, where one is declared.
	pub include_out_arguments: bool,
	/// On a qualified name whose namespace does not exist, return an empty
	/// result instead of failing.
	pub missing_ok: bool,
}

/// One possible resolution of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
	/// The matched declaration, or `None` when two or more distinct
	/// declarations expand to this same effective signature (the call is
	/// ambiguous if this entry is selected).
	pub id: Option<ObjectId>,
	/// Effective argument types after variadic/default expansion. With
	/// default expansion this can be longer than the requested arity.
	pub arg_types: Vec<TypeId>,
	/// Number of positions absorbed by variadic expansion.
	pub variadic_absorbed: usize,
	/// Number of parameters filled from declared defaults.
	pub defaulted: usize,
	/// Call position to declared position map; `Some` only for calls
	/// using named arguments. Defaulted parameters occupy the tail.
	pub arg_map: Option<Vec<usize>>,
}

impl CandidateMatch {
	/// The matched declaration's id, failing if this entry marks an
	/// ambiguous selection.
	pub fn identity(&self, name: &str) -> crate::Result<ObjectId> {
		match self.id {
			Some(id) => Ok(id),
			None => Err(CatalogError::AmbiguousCall {
				name: name.to_string(),
				arity: self.arg_types.len(),
			}
			.into()),
		}
	}
}

struct PendingCandidate {
	matched: CandidateMatch,
	path_pos: usize,
}

/// Collect candidate matches for a possibly-qualified name.
///
/// With `arity` of `None`, all declarations with the name are returned
/// regardless of argument count; named notation and both expansion flags must
/// be off in that mode. The result never contains two non-ambiguous entries
/// agreeing on their first `arity` effective argument types.
pub(crate) fn resolve_candidates(
	catalog: &impl CatalogQuery,
	path: &ResolvedSearchPath,
	qualifier: Option<&str>,
	name: &str,
	arity: Option<usize>,
	arg_names: &[String],
	flags: CandidateFlags,
	kind_filter: Option<OperatorKind>,
) -> crate::Result<Vec<CandidateMatch>> {
	debug_assert!(
		arity.is_some() || (arg_names.is_empty() && !flags.expand_variadic && !flags.expand_defaults),
		"arity wildcard requires positional notation without expansion"
	);
	if arity.is_none() && !(arg_names.is_empty() && !flags.expand_variadic && !flags.expand_defaults) {
		warn!(name, "arity wildcard lookup combined with named arguments or expansion");
		return Ok(Vec::new());
	}

	let namespaces: Vec<NamespaceId> = match qualifier {
		Some(qualifier) => match catalog.namespace_by_name(qualifier)? {
			// Revoked USAGE yields no candidates, same as an empty
			// namespace; it is never a fault here.
			Some(namespace) if !catalog.has_usage(path.role, namespace)? => return Ok(Vec::new()),
			Some(namespace) => vec![namespace],
			None if flags.missing_ok => return Ok(Vec::new()),
			None => {
				return Err(CatalogError::NamespaceNotFound {
					name: qualifier.to_string(),
				}
				.into());
			}
		},
		// Unqualified: search the resolved path in order. Functions and
		// operators are never searched in the temp namespace.
		None => {
			path.namespaces
				.iter()
				.copied()
				.filter(|ns| Some(*ns) != path.temp_namespace)
				.collect()
		}
	};

	let mut results: Vec<PendingCandidate> = Vec::new();

	for (path_pos, namespace) in namespaces.iter().enumerate() {
		for declaration in catalog.declarations(*namespace, name)? {
			if kind_filter.is_some() && declaration.operator_kind != kind_filter {
				continue;
			}
			let Some(matched) = consider(&declaration, arity, arg_names, flags) else {
				continue;
			};
			merge(&mut results, PendingCandidate {
				matched,
				path_pos,
			}, arity);
		}
	}

	Ok(results.into_iter().map(|pending| pending.matched).collect())
}

/// Check one declaration against the call shape, producing its effective
/// signature if it could match.
fn consider(
	declaration: &CandidateDeclaration,
	arity: Option<usize>,
	arg_names: &[String],
	flags: CandidateFlags,
) -> Option<CandidateMatch> {
	let declared = declaration.signature(flags.include_out_arguments);
	let pronargs = declared.len();

	let Some(nargs) = arity else {
		// All-arities listing: no expansion, declared signature as-is.
		return Some(CandidateMatch {
			id: Some(declaration.id),
			arg_types: declared.to_vec(),
			variadic_absorbed: 0,
			defaulted: 0,
			arg_map: None,
		});
	};

	if !arg_names.is_empty() {
		return consider_named(declaration, declared, nargs, arg_names, flags);
	}

	// Positional notation. A declaration can use variadic expansion or
	// default expansion but never both: defaults need fewer supplied args
	// than declared, variadic needs the same or more. A variadic marker on
	// a declaration without parameters is malformed and never matches.
	let variadic = flags.expand_variadic
		&& declaration.variadic_type.is_some()
		&& pronargs >= 1
		&& pronargs <= nargs;
	let use_defaults = !variadic
		&& flags.expand_defaults
		&& pronargs > nargs
		&& nargs + declaration.default_count >= pronargs;

	if pronargs != nargs && !variadic && !use_defaults {
		return None;
	}

	let mut arg_types = declared.to_vec();
	let mut variadic_absorbed = 0;
	let mut defaulted = 0;

	if variadic {
		let element = declaration.variadic_type?;
		arg_types.truncate(pronargs - 1);
		arg_types.resize(nargs, element);
		variadic_absorbed = nargs - pronargs + 1;
	} else if use_defaults {
		defaulted = pronargs - nargs;
	}

	Some(CandidateMatch {
		id: Some(declaration.id),
		arg_types,
		variadic_absorbed,
		defaulted,
		arg_map: None,
	})
}

/// Named or mixed notation. The declaration matches only if every supplied
/// name maps to a parameter after the last positional argument and every
/// parameter left without a value has a default. Variadic expansion never
/// applies here; a variadic parameter is matched as an ordinary parameter of
/// its declared (array) type.
fn consider_named(
	declaration: &CandidateDeclaration,
	declared: &[TypeId],
	nargs: usize,
	arg_names: &[String],
	flags: CandidateFlags,
) -> Option<CandidateMatch> {
	let pronargs = declared.len();

	if pronargs > nargs {
		if !flags.expand_defaults || nargs + declaration.default_count < pronargs {
			return None;
		}
	} else if pronargs != nargs {
		return None;
	}

	let names = declaration.arg_names.as_ref()?;
	if names.len() < pronargs {
		return None;
	}

	let numposargs = nargs.checked_sub(arg_names.len())?;

	let mut arg_map = vec![0usize; pronargs];
	let mut given = vec![false; pronargs];
	for (pos, slot) in arg_map.iter_mut().enumerate().take(numposargs) {
		*slot = pos;
		given[pos] = true;
	}

	let mut call_pos = numposargs;
	for supplied in arg_names {
		let declared_pos = names[..pronargs].iter().position(|name| name == supplied)?;
		// Covers both a duplicate name and a name colliding with a
		// positional argument.
		if given[declared_pos] {
			return None;
		}
		given[declared_pos] = true;
		arg_map[call_pos] = declared_pos;
		call_pos += 1;
	}

	// Unsupplied parameters must all have defaults; defaults always cover
	// the trailing parameters of a declaration.
	let first_default = pronargs.saturating_sub(declaration.default_count);
	for declared_pos in 0..pronargs {
		if given[declared_pos] {
			continue;
		}
		if declared_pos < first_default {
			return None;
		}
		arg_map[call_pos] = declared_pos;
		call_pos += 1;
	}
	debug_assert_eq!(call_pos, pronargs);

	let arg_types = arg_map.iter().map(|&declared_pos| declared[declared_pos]).collect();

	Some(CandidateMatch {
		id: Some(declaration.id),
		arg_types,
		variadic_absorbed: 0,
		defaulted: pronargs - nargs,
		arg_map: Some(arg_map),
	})
}

/// Fold a new candidate into the result list, applying masking and
/// ambiguity rules against any existing candidate with the same effective
/// signature.
fn merge(results: &mut Vec<PendingCandidate>, new: PendingCandidate, arity: Option<usize>) {
	let conflict = results.iter().position(|prev| {
		same_effective_signature(&prev.matched.arg_types, &new.matched.arg_types, arity)
	});

	let Some(index) = conflict else {
		results.push(new);
		return;
	};

	let prev = &mut results[index];
	if prev.path_pos != new.path_pos {
		// Candidates arrive in path order, so the existing one is from
		// an earlier namespace and masks the new one.
		debug_assert!(prev.path_pos < new.path_pos);
		return;
	}

	// Same namespace. A non-variadic match beats a variadic one expanding
	// to the same signature; otherwise the conflict is a real ambiguity.
	if prev.matched.variadic_absorbed == 0 && new.matched.variadic_absorbed > 0 {
		return;
	}
	if prev.matched.variadic_absorbed > 0 && new.matched.variadic_absorbed == 0 {
		*prev = new;
		return;
	}
	prev.matched.id = None;
}

/// Two effective signatures conflict when they agree on the first `arity`
/// positions. Default expansion can make a signature longer than the
/// requested arity; distinctness is only guaranteed within it.
fn same_effective_signature(a: &[TypeId], b: &[TypeId], arity: Option<usize>) -> bool {
	match arity {
		Some(n) => a.len() >= n && b.len() >= n && a[..n] == b[..n],
		None => a == b,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::{FunctionToCreate, TestCatalog};

	const INT: TypeId = TypeId(21);
	const TEXT: TypeId = TypeId(25);

	fn resolved_path(namespaces: Vec<NamespaceId>) -> ResolvedSearchPath {
		ResolvedSearchPath {
			namespaces,
			role: nymdb_core::interface::RoleId(7),
			creation: crate::search_path::CreationTarget::None,
			temp_namespace: None,
			generation: 1,
		}
	}

	#[test]
	fn test_exact_match() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		let f = catalog.create_function(FunctionToCreate::new(ns, "f", &[INT]));
		let path = resolved_path(vec![ns]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(1),
			&[],
			CandidateFlags::default(),
			None,
		)
		.unwrap();

		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, Some(f));
		assert_eq!(matches[0].arg_types, vec![INT]);
	}

	#[test]
	fn test_arity_mismatch_no_match() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		catalog.create_function(FunctionToCreate::new(ns, "f", &[INT]));
		let path = resolved_path(vec![ns]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(2),
			&[],
			CandidateFlags::default(),
			None,
		)
		.unwrap();

		assert!(matches.is_empty());
	}

	#[test]
	fn test_earlier_namespace_masks_later() {
		let mut catalog = TestCatalog::new();
		let first = catalog.create_namespace("alpha");
		let second = catalog.create_namespace("beta");
		let winner = catalog.create_function(FunctionToCreate::new(first, "f", &[INT]));
		catalog.create_function(FunctionToCreate::new(second, "f", &[INT]));
		let path = resolved_path(vec![first, second]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(1),
			&[],
			CandidateFlags::default(),
			None,
		)
		.unwrap();

		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, Some(winner));
	}

	#[test]
	fn test_different_signatures_do_not_mask() {
		let mut catalog = TestCatalog::new();
		let first = catalog.create_namespace("alpha");
		let second = catalog.create_namespace("beta");
		let f_int = catalog.create_function(FunctionToCreate::new(first, "f", &[INT]));
		let f_text = catalog.create_function(FunctionToCreate::new(second, "f", &[TEXT]));
		let path = resolved_path(vec![first, second]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(1),
			&[],
			CandidateFlags::default(),
			None,
		)
		.unwrap();

		let ids: Vec<_> = matches.iter().map(|m| m.id).collect();
		assert_eq!(ids, vec![Some(f_int), Some(f_text)]);
	}

	#[test]
	fn test_variadic_expansion() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		let f = catalog.create_function(FunctionToCreate::new(ns, "f", &[TEXT]).variadic(INT, &[TEXT, INT]));
		let path = resolved_path(vec![ns]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(4),
			&[],
			CandidateFlags {
				expand_variadic: true,
				..Default::default()
			},
			None,
		)
		.unwrap();

		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, Some(f));
		assert_eq!(matches[0].arg_types, vec![TEXT, INT, INT, INT]);
		assert_eq!(matches[0].variadic_absorbed, 3);
		assert_eq!(matches[0].defaulted, 0);
	}

	#[test]
	fn test_exact_masks_variadic() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		let exact = catalog.create_function(FunctionToCreate::new(ns, "f", &[INT]));
		catalog.create_function(FunctionToCreate::new(ns, "f", &[]).variadic(INT, &[INT]));
		let path = resolved_path(vec![ns]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(1),
			&[],
			CandidateFlags {
				expand_variadic: true,
				..Default::default()
			},
			None,
		)
		.unwrap();

		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, Some(exact));
		assert_eq!(matches[0].variadic_absorbed, 0);
	}

	#[test]
	fn test_exact_masks_variadic_regardless_of_order() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		catalog.create_function(FunctionToCreate::new(ns, "f", &[]).variadic(INT, &[INT]));
		let exact = catalog.create_function(FunctionToCreate::new(ns, "f", &[INT]));
		let path = resolved_path(vec![ns]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(1),
			&[],
			CandidateFlags {
				expand_variadic: true,
				..Default::default()
			},
			None,
		)
		.unwrap();

		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, Some(exact));
	}

	#[test]
	fn test_two_variadics_are_ambiguous() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		catalog.create_function(FunctionToCreate::new(ns, "f", &[]).variadic(INT, &[INT]));
		catalog.create_function(FunctionToCreate::new(ns, "f", &[INT]).variadic(INT, &[INT, INT]));
		let path = resolved_path(vec![ns]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(2),
			&[],
			CandidateFlags {
				expand_variadic: true,
				..Default::default()
			},
			None,
		)
		.unwrap();

		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, None);
		assert_eq!(matches[0].identity("f").unwrap_err().code(), "CATALOG_004");
	}

	#[test]
	fn test_variadic_marker_without_parameters_never_matches() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		catalog.create_function(FunctionToCreate::new(ns, "f", &[]).variadic(INT, &[]));
		let path = resolved_path(vec![ns]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(1),
			&[],
			CandidateFlags {
				expand_variadic: true,
				..Default::default()
			},
			None,
		)
		.unwrap();

		assert!(matches.is_empty());
	}

	#[test]
	fn test_out_arguments_included_on_request() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		let f = catalog.create_function(FunctionToCreate::new(ns, "f", &[INT]).with_out(&[INT, TEXT]));
		let path = resolved_path(vec![ns]);

		// With the flag the extended signature replaces the input one,
		// so the declaration matches at the extended arity.
		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(2),
			&[],
			CandidateFlags {
				include_out_arguments: true,
				..Default::default()
			},
			None,
		)
		.unwrap();
		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, Some(f));
		assert_eq!(matches[0].arg_types, vec![INT, TEXT]);

		// Without the flag only the input arity matches.
		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(2),
			&[],
			CandidateFlags::default(),
			None,
		)
		.unwrap();
		assert!(matches.is_empty());

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(1),
			&[],
			CandidateFlags::default(),
			None,
		)
		.unwrap();
		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, Some(f));
		assert_eq!(matches[0].arg_types, vec![INT]);
	}

	#[test]
	fn test_default_expansion() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		let f = catalog.create_function(FunctionToCreate::new(ns, "f", &[INT, INT]).defaults(1));
		let path = resolved_path(vec![ns]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(1),
			&[],
			CandidateFlags {
				expand_defaults: true,
				..Default::default()
			},
			None,
		)
		.unwrap();

		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, Some(f));
		assert_eq!(matches[0].arg_types, vec![INT, INT]);
		assert_eq!(matches[0].defaulted, 1);
	}

	#[test]
	fn test_default_expansion_needs_enough_defaults() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		catalog.create_function(FunctionToCreate::new(ns, "f", &[INT, INT, INT]).defaults(1));
		let path = resolved_path(vec![ns]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(1),
			&[],
			CandidateFlags {
				expand_defaults: true,
				..Default::default()
			},
			None,
		)
		.unwrap();

		assert!(matches.is_empty());
	}

	#[test]
	fn test_named_call_with_default() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		let g = catalog.create_function(
			FunctionToCreate::new(ns, "g", &[INT, INT]).names(&["a", "b"]).defaults(1),
		);
		let path = resolved_path(vec![ns]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"g",
			Some(1),
			&["a".to_string()],
			CandidateFlags {
				expand_defaults: true,
				..Default::default()
			},
			None,
		)
		.unwrap();

		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, Some(g));
		// Defaulted parameters occupy the tail of the map.
		assert_eq!(matches[0].arg_map, Some(vec![0, 1]));
		assert_eq!(matches[0].defaulted, 1);
	}

	#[test]
	fn test_named_call_missing_required_parameter() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		catalog.create_function(FunctionToCreate::new(ns, "g", &[INT, INT]).names(&["a", "b"]).defaults(1));
		let path = resolved_path(vec![ns]);

		// g(b => 1): no value and no default for a.
		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"g",
			Some(1),
			&["b".to_string()],
			CandidateFlags {
				expand_defaults: true,
				..Default::default()
			},
			None,
		)
		.unwrap();

		assert!(matches.is_empty());
	}

	#[test]
	fn test_mixed_notation() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		let g = catalog
			.create_function(FunctionToCreate::new(ns, "g", &[INT, TEXT, INT]).names(&["a", "b", "c"]));
		let path = resolved_path(vec![ns]);

		// g(1, c => 2, b => 'x')
		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"g",
			Some(3),
			&["c".to_string(), "b".to_string()],
			CandidateFlags::default(),
			None,
		)
		.unwrap();

		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, Some(g));
		assert_eq!(matches[0].arg_map, Some(vec![0, 2, 1]));
		assert_eq!(matches[0].arg_types, vec![INT, INT, TEXT]);
	}

	#[test]
	fn test_named_collides_with_positional() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		catalog.create_function(FunctionToCreate::new(ns, "g", &[INT, INT]).names(&["a", "b"]));
		let path = resolved_path(vec![ns]);

		// g(1, a => 2): a is already supplied positionally.
		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"g",
			Some(2),
			&["a".to_string()],
			CandidateFlags::default(),
			None,
		)
		.unwrap();

		assert!(matches.is_empty());
	}

	#[test]
	fn test_unknown_argument_name() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		catalog.create_function(FunctionToCreate::new(ns, "g", &[INT]).names(&["a"]));
		let path = resolved_path(vec![ns]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"g",
			Some(1),
			&["z".to_string()],
			CandidateFlags::default(),
			None,
		)
		.unwrap();

		assert!(matches.is_empty());
	}

	#[test]
	fn test_qualified_search_ignores_path() {
		let mut catalog = TestCatalog::new();
		let first = catalog.create_namespace("alpha");
		let second = catalog.create_namespace("beta");
		catalog.create_function(FunctionToCreate::new(first, "f", &[INT]));
		let in_beta = catalog.create_function(FunctionToCreate::new(second, "f", &[INT]));
		let path = resolved_path(vec![first, second]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			Some("beta"),
			"f",
			Some(1),
			&[],
			CandidateFlags::default(),
			None,
		)
		.unwrap();

		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, Some(in_beta));
	}

	#[test]
	fn test_qualified_missing_namespace() {
		let catalog = TestCatalog::new();
		let path = resolved_path(vec![]);

		let err = resolve_candidates(
			&catalog,
			&path,
			Some("nope"),
			"f",
			Some(1),
			&[],
			CandidateFlags::default(),
			None,
		)
		.unwrap_err();
		assert_eq!(err.code(), "CATALOG_003");

		let matches = resolve_candidates(
			&catalog,
			&path,
			Some("nope"),
			"f",
			Some(1),
			&[],
			CandidateFlags {
				missing_ok: true,
				..Default::default()
			},
			None,
		)
		.unwrap();
		assert!(matches.is_empty());
	}

	#[test]
	fn test_qualified_without_usage_is_empty() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("beta");
		catalog.create_function(FunctionToCreate::new(ns, "f", &[INT]));
		let path = resolved_path(vec![]);
		catalog.deny_usage(path.role, ns);

		let matches = resolve_candidates(
			&catalog,
			&path,
			Some("beta"),
			"f",
			Some(1),
			&[],
			CandidateFlags::default(),
			None,
		)
		.unwrap();

		assert!(matches.is_empty());
	}

	#[test]
	fn test_temp_namespace_skipped_for_functions() {
		let mut catalog = TestCatalog::new();
		let temp = catalog.create_namespace("temp_1");
		let public = catalog.create_namespace("public");
		catalog.create_function(FunctionToCreate::new(temp, "f", &[INT]));
		let in_public = catalog.create_function(FunctionToCreate::new(public, "f", &[INT]));
		let mut path = resolved_path(vec![temp, public]);
		path.temp_namespace = Some(temp);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			Some(1),
			&[],
			CandidateFlags::default(),
			None,
		)
		.unwrap();

		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].id, Some(in_public));
	}

	#[test]
	fn test_arity_wildcard_lists_all() {
		let mut catalog = TestCatalog::new();
		let ns = catalog.create_namespace("alpha");
		let f1 = catalog.create_function(FunctionToCreate::new(ns, "f", &[INT]));
		let f2 = catalog.create_function(FunctionToCreate::new(ns, "f", &[INT, TEXT]));
		let path = resolved_path(vec![ns]);

		let matches = resolve_candidates(
			&catalog,
			&path,
			None,
			"f",
			None,
			&[],
			CandidateFlags::default(),
			None,
		)
		.unwrap();

		let ids: Vec<_> = matches.iter().map(|m| m.id).collect();
		assert_eq!(ids, vec![Some(f1), Some(f2)]);
	}
}
