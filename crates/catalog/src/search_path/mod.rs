// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

//! Search path parsing, caching, and resolution.
//!
//! The search path is a possibly-empty ordered list of namespaces. On top of
//! the explicit list, implicitly-searched namespaces are added: the session's
//! temp namespace (if initialized) is searched first, and the system catalog
//! namespace is always searched: at its explicit position if listed, else
//! after the temp namespace and before the explicit list.
//!
//! The default creation target is the first element of the explicit list; an
//! empty explicit list means there is no default. `$user` refers to the
//! namespace named like the current role and is ignored when absent.
//! `pg_temp` refers to the session's temp namespace; when it appears first
//! but the temp namespace is not set up yet, creation is deferred until the
//! first attempt to create something in it, since the temp namespace cannot
//! be created outside a transaction.

mod cache;
mod parse;
mod resolve;

pub(crate) use cache::{SearchPathCache, SearchPathCacheEntry, SearchPathCacheKey};
pub use parse::{ParsedSearchPath, PathToken, parse_search_path};
pub(crate) use resolve::{filter_path, finalize_path};

use nymdb_core::interface::{NamespaceId, ObjectKind, RoleId};

/// Where an object without an explicit namespace qualification would be
/// created under the current search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationTarget {
	/// The first explicitly-listed namespace.
	Namespace(NamespaceId),
	/// `pg_temp` is listed first but the temp namespace does not exist
	/// yet; it is to be created lazily on first use.
	PendingTemp,
	/// The explicit path is empty; creation requests must qualify.
	None,
}

impl CreationTarget {
	pub fn namespace(&self) -> Option<NamespaceId> {
		match self {
			CreationTarget::Namespace(id) => Some(*id),
			_ => None,
		}
	}
}

/// A search path resolved against a role and catalog snapshot: deduplicated,
/// permission-filtered, with implicit namespaces in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSearchPath {
	/// Final search order, implicit namespaces included.
	pub namespaces: Vec<NamespaceId>,
	/// Role the path was filtered for.
	pub role: RoleId,
	pub creation: CreationTarget,
	/// The session's temp namespace at resolution time, whether or not it
	/// appears in `namespaces`.
	pub temp_namespace: Option<NamespaceId>,
	/// Generation the path was computed at.
	pub generation: u64,
}

impl ResolvedSearchPath {
	/// Namespaces to consult for an unqualified search of the given kind,
	/// in order. The temp namespace is skipped for everything but
	/// relations and types.
	pub fn searchable(&self, kind: ObjectKind) -> impl Iterator<Item = NamespaceId> + '_ {
		let skip_temp = !kind.searchable_in_temp();
		self.namespaces
			.iter()
			.copied()
			.filter(move |ns| !(skip_temp && Some(*ns) == self.temp_namespace))
	}
}
