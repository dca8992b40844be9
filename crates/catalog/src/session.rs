// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use nymdb_core::interface::{
	CatalogChange, CatalogQuery, NamespaceId, NamespaceVisibilityHook, ObjectId, ObjectKind, RoleId,
};
use tracing::{debug, instrument};

use crate::{
	candidate::{CandidateMatch, FunctionLookup, OperatorLookup},
	error::CatalogError,
	search_path::{
		CreationTarget, ParsedSearchPath, PathToken, ResolvedSearchPath, SearchPathCache,
		SearchPathCacheEntry, SearchPathCacheKey, filter_path, finalize_path, parse_search_path,
	},
	visible::{self, Visibility},
};

/// Search path applied to sessions that never set one.
pub const DEFAULT_SEARCH_PATH: &str = "$user, public";

/// Per-session name resolution state: the active role, the search path
/// specification, the session's temp namespace, and the memoized resolutions.
///
/// The session holds no catalog data. All lookups go through the
/// [`CatalogQuery`] handed to each resolving call, and cached state is
/// invalidated by bumping a generation counter whenever the session settings
/// or the catalog change.
pub struct CatalogSession {
	role: RoleId,
	spec: String,
	parsed: ParsedSearchPath,
	temp_namespace: Option<NamespaceId>,
	/// Never zero, so a zeroed cache entry can never appear current.
	generation: u64,
	cache: SearchPathCache,
	/// Cache key for the current (spec, role) pair, rebuilt on change so
	/// lookups avoid re-allocating the spec string.
	key: SearchPathCacheKey,
	active: Option<ResolvedSearchPath>,
	hook: Option<Box<dyn NamespaceVisibilityHook>>,
}

impl CatalogSession {
	pub fn new(role: RoleId) -> Self {
		let parsed = ParsedSearchPath {
			tokens: vec![PathToken::CurrentRole, PathToken::Identifier("public".to_string())],
			temp_creation_pending: false,
		};
		Self {
			role,
			spec: DEFAULT_SEARCH_PATH.to_string(),
			parsed,
			temp_namespace: None,
			generation: 1,
			cache: SearchPathCache::new(),
			key: SearchPathCacheKey {
				spec: DEFAULT_SEARCH_PATH.to_string(),
				role,
			},
			active: None,
			hook: None,
		}
	}

	pub fn role(&self) -> RoleId {
		self.role
	}

	pub fn search_path_spec(&self) -> &str {
		&self.spec
	}

	pub fn temp_namespace(&self) -> Option<NamespaceId> {
		self.temp_namespace
	}

	/// Replace the search path specification. The new value is parsed
	/// eagerly and rejected as a whole if any element is malformed;
	/// namespace existence and permissions are not checked until the path
	/// is next resolved.
	#[instrument(name = "catalog::session::set_search_path", level = "trace", skip(self))]
	pub fn set_search_path(&mut self, spec: &str) -> crate::Result<()> {
		let parsed = parse_search_path(spec)?;
		self.spec = spec.to_string();
		self.parsed = parsed;
		self.key = SearchPathCacheKey {
			spec: self.spec.clone(),
			role: self.role,
		};
		self.bump_generation();
		Ok(())
	}

	/// Switch the session to a different role. `$user` re-resolves against
	/// the new role's name on the next path resolution.
	#[instrument(name = "catalog::session::set_role", level = "trace", skip(self))]
	pub fn set_role(&mut self, role: RoleId) {
		self.role = role;
		self.key = SearchPathCacheKey {
			spec: self.spec.clone(),
			role,
		};
		self.bump_generation();
	}

	/// Record that the session's temp namespace was initialized (or torn
	/// down). Paths that previously dropped a `pg_temp` entry are
	/// recomputed on next resolution.
	#[instrument(name = "catalog::session::set_temp_namespace", level = "trace", skip(self))]
	pub fn set_temp_namespace(&mut self, namespace: Option<NamespaceId>) {
		self.temp_namespace = namespace;
		self.bump_generation();
	}

	/// Install a hook that adjusts every resolved path, e.g. to hide
	/// namespaces mid-restore. While a hook is registered, cached final
	/// paths are recomputed on every resolution; the hook's output is
	/// never assumed stable.
	pub fn register_visibility_hook(&mut self, hook: Box<dyn NamespaceVisibilityHook>) {
		self.hook = Some(hook);
		self.bump_generation();
	}

	pub fn clear_visibility_hook(&mut self) {
		self.hook = None;
		self.bump_generation();
	}

	/// Invalidate derived path state after a catalog mutation. Namespace
	/// and role changes (create/drop/rename, grants) can each change how a
	/// specification resolves.
	#[instrument(name = "catalog::session::on_catalog_change", level = "trace", skip(self))]
	pub fn on_catalog_change(&mut self, change: CatalogChange) {
		debug!(?change, "invalidating resolved search paths");
		self.bump_generation();
	}

	fn bump_generation(&mut self) {
		self.generation = self.generation.wrapping_add(1);
		if self.generation == 0 {
			self.generation = 1;
		}
	}

	/// The resolved search path for the current settings, computing it if
	/// no valid memoized resolution exists.
	pub fn active_path(&mut self, catalog: &impl CatalogQuery) -> crate::Result<&ResolvedSearchPath> {
		let path = match self.active.take() {
			Some(path) if self.hook.is_none() && path.generation == self.generation => path,
			_ => self.compute_path(catalog)?,
		};
		Ok(self.active.insert(path))
	}

	/// Resolve and return an owned copy of the active search path.
	#[instrument(name = "catalog::session::resolve_search_path", level = "trace", skip(self, catalog))]
	pub fn resolve_search_path(&mut self, catalog: &impl CatalogQuery) -> crate::Result<ResolvedSearchPath> {
		Ok(self.active_path(catalog)?.clone())
	}

	fn compute_path(&mut self, catalog: &impl CatalogQuery) -> crate::Result<ResolvedSearchPath> {
		let hook = self.hook.as_deref();

		if let Some(entry) = self.cache.get(&self.key) {
			// An entry that dropped a temp token is never reused once
			// the temp namespace exists. Every setter that installs
			// the namespace currently also bumps the generation; this
			// invariant must hold even if that changes.
			let stale = entry.generation != self.generation
				|| (entry.temp_missing && self.temp_namespace.is_some());
			if !stale {
				let final_path = if entry.force_recompute {
					finalize_path(&entry.filtered, self.temp_namespace, hook)
				} else {
					entry.final_path.clone()
				};
				let first_explicit = entry.first_explicit;
				return Ok(self.assemble(final_path, first_explicit));
			}
		}

		let filtered = filter_path(catalog, &self.parsed, self.role, self.temp_namespace)?;
		let final_path = finalize_path(&filtered.namespaces, self.temp_namespace, hook);
		let first_explicit = filtered.first_explicit;

		// Inserted only after full successful computation, so a failing
		// catalog lookup never leaves a partial entry behind.
		self.cache.insert(self.key.clone(), SearchPathCacheEntry {
			filtered: filtered.namespaces,
			final_path: final_path.clone(),
			first_explicit,
			temp_missing: filtered.temp_missing,
			force_recompute: self.hook.is_some(),
			generation: self.generation,
		});

		Ok(self.assemble(final_path, first_explicit))
	}

	fn assemble(&self, namespaces: Vec<NamespaceId>, first_explicit: Option<NamespaceId>) -> ResolvedSearchPath {
		let creation = if self.parsed.temp_creation_pending && self.temp_namespace.is_none() {
			CreationTarget::PendingTemp
		} else {
			match first_explicit {
				Some(namespace) => CreationTarget::Namespace(namespace),
				None => CreationTarget::None,
			}
		};
		ResolvedSearchPath {
			namespaces,
			role: self.role,
			creation,
			temp_namespace: self.temp_namespace,
			generation: self.generation,
		}
	}

	/// Where an unqualified CREATE would place its object.
	pub fn creation_target(&mut self, catalog: &impl CatalogQuery) -> crate::Result<CreationTarget> {
		Ok(self.active_path(catalog)?.creation)
	}

	/// The default creation namespace, failing if there is none. A pending
	/// temp namespace also fails here: callers supporting lazy temp
	/// creation must check [`Self::creation_target`] first and initialize
	/// the temp namespace before retrying.
	pub fn require_creation_namespace(&mut self, catalog: &impl CatalogQuery) -> crate::Result<NamespaceId> {
		match self.creation_target(catalog)? {
			CreationTarget::Namespace(namespace) => Ok(namespace),
			CreationTarget::PendingTemp | CreationTarget::None => {
				Err(CatalogError::NoDefaultCreationNamespace.into())
			}
		}
	}

	/// Whether the session role may create objects in the namespace. The
	/// session's own temp namespace is exempt from permission checks.
	pub fn can_create_in(&self, catalog: &impl CatalogQuery, namespace: NamespaceId) -> crate::Result<bool> {
		if Some(namespace) == self.temp_namespace {
			return Ok(true);
		}
		catalog.has_create(self.role, namespace)
	}

	/// Collect function candidates for a call under the active path.
	#[instrument(name = "catalog::session::resolve_functions", level = "trace", skip(self, catalog, lookup))]
	pub fn resolve_functions(
		&mut self,
		catalog: &impl CatalogQuery,
		lookup: &FunctionLookup<'_>,
	) -> crate::Result<Vec<CandidateMatch>> {
		let path = self.active_path(catalog)?;
		lookup.resolve(catalog, path)
	}

	/// Collect operator candidates under the active path.
	#[instrument(name = "catalog::session::resolve_operators", level = "trace", skip(self, catalog, lookup))]
	pub fn resolve_operators(
		&mut self,
		catalog: &impl CatalogQuery,
		lookup: &OperatorLookup<'_>,
	) -> crate::Result<Vec<CandidateMatch>> {
		let path = self.active_path(catalog)?;
		lookup.candidates(catalog, path)
	}

	/// Resolve an operator with exact operand types under the active path.
	pub fn resolve_operator_exact(
		&mut self,
		catalog: &impl CatalogQuery,
		lookup: &OperatorLookup<'_>,
	) -> crate::Result<Option<ObjectId>> {
		let path = self.active_path(catalog)?;
		lookup.resolve_exact(catalog, path)
	}

	/// Find the first object of the given kind with this unqualified name
	/// along the active path. Overload resolution does not apply; for
	/// functions and operators use the candidate lookups instead.
	pub fn lookup_unqualified(
		&mut self,
		catalog: &impl CatalogQuery,
		kind: ObjectKind,
		name: &str,
	) -> crate::Result<Option<ObjectId>> {
		let path = self.active_path(catalog)?;
		for namespace in path.searchable(kind) {
			if let Some(id) = catalog.lookup_object(namespace, kind, name)? {
				return Ok(Some(id));
			}
		}
		Ok(None)
	}

	/// Would an unqualified reference to this object's name find this
	/// object? Distinguishes a concurrently dropped object from a merely
	/// shadowed one.
	pub fn visibility(
		&mut self,
		catalog: &impl CatalogQuery,
		kind: ObjectKind,
		id: ObjectId,
	) -> crate::Result<Visibility> {
		let path = self.active_path(catalog)?;
		visible::visibility(catalog, path, kind, id)
	}

	/// Strict form of [`Self::visibility`]: a concurrently dropped object
	/// counts as not visible.
	pub fn is_visible(
		&mut self,
		catalog: &impl CatalogQuery,
		kind: ObjectKind,
		id: ObjectId,
	) -> crate::Result<bool> {
		Ok(self.visibility(catalog, kind, id)? == Visibility::Visible)
	}
}
