// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use crate::interface::{CandidateDeclaration, NamespaceId, ObjectDef, ObjectId, ObjectKind, RoleId};

/// Kinds of catalog change that invalidate derived search path state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogChange {
	Namespace,
	Role,
}

/// Read access to the catalog backend.
///
/// This layer never stores catalog rows itself; every lookup and permission
/// check goes through this trait. Implementations may block or fail; calls
/// are treated as opaque and are not retried here. For a fixed catalog
/// snapshot the answers must be stable, which the search path cache relies
/// on.
pub trait CatalogQuery {
	/// Resolve a namespace name to its id, if such a namespace exists.
	fn namespace_by_name(&self, name: &str) -> crate::Result<Option<NamespaceId>>;

	/// Does the role hold USAGE rights on the namespace?
	fn has_usage(&self, role: RoleId, namespace: NamespaceId) -> crate::Result<bool>;

	/// Does the role hold CREATE rights on the namespace?
	fn has_create(&self, role: RoleId, namespace: NamespaceId) -> crate::Result<bool>;

	/// Name of the given role, or `None` if the role no longer exists.
	fn role_name(&self, role: RoleId) -> crate::Result<Option<String>>;

	/// The namespace named identically to the role, if one exists.
	/// Backends with a direct index may override this.
	fn role_namespace(&self, role: RoleId) -> crate::Result<Option<NamespaceId>> {
		match self.role_name(role)? {
			Some(name) => self.namespace_by_name(&name),
			None => Ok(None),
		}
	}

	/// All function/operator declarations with the given name in the given
	/// namespace.
	fn declarations(&self, namespace: NamespaceId, name: &str) -> crate::Result<Vec<CandidateDeclaration>>;

	/// Look up a non-overloadable object by name within one namespace.
	fn lookup_object(&self, namespace: NamespaceId, kind: ObjectKind, name: &str)
	-> crate::Result<Option<ObjectId>>;

	/// Reverse lookup: describe an object by id. Returns `None` if the
	/// object has been dropped concurrently.
	fn find_object(&self, kind: ObjectKind, id: ObjectId) -> crate::Result<Option<ObjectDef>>;
}
