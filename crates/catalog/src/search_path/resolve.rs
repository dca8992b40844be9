// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use nymdb_core::interface::{CatalogQuery, NamespaceId, NamespaceVisibilityHook, RoleId};

use crate::search_path::{ParsedSearchPath, PathToken};

/// Output of the lookup-and-filter phase: tokens resolved to namespace ids
/// with the USAGE filter applied, order preserved, duplicates retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FilteredPath {
	pub namespaces: Vec<NamespaceId>,
	pub first_explicit: Option<NamespaceId>,
	pub temp_missing: bool,
}

/// Resolve parsed tokens to namespace ids and drop everything the role may
/// not use. Dropping is always silent: unknown namespaces, a missing `$user`
/// namespace, a missing temp namespace, and revoked USAGE all just leave the
/// entry out.
pub(crate) fn filter_path(
	catalog: &impl CatalogQuery,
	parsed: &ParsedSearchPath,
	role: RoleId,
	temp_namespace: Option<NamespaceId>,
) -> crate::Result<FilteredPath> {
	let mut namespaces = Vec::with_capacity(parsed.tokens.len());
	let mut temp_missing = false;

	for token in &parsed.tokens {
		let namespace = match token {
			PathToken::CurrentRole => match catalog.role_namespace(role)? {
				Some(namespace) => namespace,
				None => continue,
			},
			PathToken::Temp => match temp_namespace {
				Some(namespace) => {
					// The session's own temp namespace is
					// implicitly usable; no USAGE check.
					namespaces.push(namespace);
					continue;
				}
				None => {
					temp_missing = true;
					continue;
				}
			},
			PathToken::Identifier(name) => match catalog.namespace_by_name(name)? {
				Some(namespace) => namespace,
				None => continue,
			},
		};

		if catalog.has_usage(role, namespace)? {
			namespaces.push(namespace);
		}
	}

	let first_explicit = namespaces.first().copied();

	Ok(FilteredPath {
		namespaces,
		first_explicit,
		temp_missing,
	})
}

/// Deduplicate the filtered list, prepend the implicitly-searched namespaces,
/// and run the visibility hook.
///
/// Prepended in order, when not already present: the session's temp namespace
/// first, then the system namespace. A system namespace listed explicitly
/// keeps its explicit position. The hook runs last and must be re-executed on
/// every resolution; its output is not assumed stable across calls.
pub(crate) fn finalize_path(
	filtered: &[NamespaceId],
	temp_namespace: Option<NamespaceId>,
	hook: Option<&dyn NamespaceVisibilityHook>,
) -> Vec<NamespaceId> {
	let mut explicit: Vec<NamespaceId> = Vec::with_capacity(filtered.len());
	for namespace in filtered {
		if !explicit.contains(namespace) {
			explicit.push(*namespace);
		}
	}

	let mut path = Vec::with_capacity(explicit.len() + 2);
	if let Some(temp) = temp_namespace {
		if !explicit.contains(&temp) {
			path.push(temp);
		}
	}
	if !explicit.contains(&NamespaceId::SYSTEM) {
		path.push(NamespaceId::SYSTEM);
	}
	path.extend(explicit);

	if let Some(hook) = hook {
		hook.adjust(&mut path);
	}

	path
}

#[cfg(test)]
mod tests {
	use nymdb_core::interface::NamespaceVisibilityHook;

	use super::*;
	use crate::{
		search_path::parse_search_path,
		test_utils::TestCatalog,
	};

	#[test]
	fn test_unknown_namespace_dropped_silently() {
		let mut catalog = TestCatalog::new();
		let role = catalog.create_role("alice");
		let alpha = catalog.create_namespace("alpha");
		let parsed = parse_search_path("alpha, nonexistent").unwrap();

		let filtered = filter_path(&catalog, &parsed, role, None).unwrap();

		assert_eq!(filtered.namespaces, vec![alpha]);
		assert!(!filtered.temp_missing);
	}

	#[test]
	fn test_usage_filter() {
		let mut catalog = TestCatalog::new();
		let role = catalog.create_role("alice");
		let alpha = catalog.create_namespace("alpha");
		let beta = catalog.create_namespace("beta");
		catalog.deny_usage(role, alpha);
		let parsed = parse_search_path("alpha, beta").unwrap();

		let filtered = filter_path(&catalog, &parsed, role, None).unwrap();

		assert_eq!(filtered.namespaces, vec![beta]);
		assert_eq!(filtered.first_explicit, Some(beta));
	}

	#[test]
	fn test_user_placeholder_resolves_to_role_namespace() {
		let mut catalog = TestCatalog::new();
		let role = catalog.create_role("alice");
		let alice = catalog.create_namespace("alice");
		let public = catalog.create_namespace("public");
		let parsed = parse_search_path("$user, public").unwrap();

		let filtered = filter_path(&catalog, &parsed, role, None).unwrap();

		assert_eq!(filtered.namespaces, vec![alice, public]);
	}

	#[test]
	fn test_user_placeholder_dropped_without_namespace() {
		let mut catalog = TestCatalog::new();
		let role = catalog.create_role("alice");
		let public = catalog.create_namespace("public");
		let parsed = parse_search_path("$user, public").unwrap();

		let filtered = filter_path(&catalog, &parsed, role, None).unwrap();

		assert_eq!(filtered.namespaces, vec![public]);
		assert_eq!(filtered.first_explicit, Some(public));
	}

	#[test]
	fn test_user_placeholder_dropped_for_unknown_role() {
		let mut catalog = TestCatalog::new();
		catalog.create_namespace("alice");
		let public = catalog.create_namespace("public");
		let parsed = parse_search_path("$user, public").unwrap();

		// The role id resolves to no role name, so the placeholder is
		// dropped even though a same-named namespace exists.
		let filtered = filter_path(&catalog, &parsed, RoleId(999), None).unwrap();

		assert_eq!(filtered.namespaces, vec![public]);
	}

	#[test]
	fn test_temp_token_without_temp_namespace() {
		let mut catalog = TestCatalog::new();
		let role = catalog.create_role("alice");
		let parsed = parse_search_path("pg_temp").unwrap();

		let filtered = filter_path(&catalog, &parsed, role, None).unwrap();

		assert!(filtered.namespaces.is_empty());
		assert!(filtered.temp_missing);
	}

	#[test]
	fn test_temp_token_skips_usage_check() {
		let mut catalog = TestCatalog::new();
		let role = catalog.create_role("alice");
		let temp = catalog.create_namespace("temp_alice");
		catalog.deny_usage(role, temp);
		let parsed = parse_search_path("pg_temp").unwrap();

		let filtered = filter_path(&catalog, &parsed, role, Some(temp)).unwrap();

		assert_eq!(filtered.namespaces, vec![temp]);
	}

	#[test]
	fn test_finalize_dedupes_keeping_first() {
		let a = NamespaceId(1025);
		let b = NamespaceId(1026);

		let path = finalize_path(&[a, b, a], None, None);

		assert_eq!(path, vec![NamespaceId::SYSTEM, a, b]);
	}

	#[test]
	fn test_finalize_prepends_temp_before_system() {
		let a = NamespaceId(1025);
		let temp = NamespaceId(2000);

		let path = finalize_path(&[a], Some(temp), None);

		assert_eq!(path, vec![temp, NamespaceId::SYSTEM, a]);
	}

	#[test]
	fn test_explicit_system_keeps_position() {
		let a = NamespaceId(1025);

		let path = finalize_path(&[a, NamespaceId::SYSTEM], None, None);

		assert_eq!(path, vec![a, NamespaceId::SYSTEM]);
	}

	struct ReverseHook;

	impl NamespaceVisibilityHook for ReverseHook {
		fn adjust(&self, path: &mut Vec<NamespaceId>) {
			path.reverse();
		}
	}

	#[test]
	fn test_hook_runs_last() {
		let a = NamespaceId(1025);

		let path = finalize_path(&[a], None, Some(&ReverseHook));

		assert_eq!(path, vec![a, NamespaceId::SYSTEM]);
	}
}
