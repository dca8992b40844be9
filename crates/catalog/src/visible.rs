// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

//! Visibility queries: would an unqualified reference to an object's name
//! find that object under a resolved search path?

use nymdb_core::interface::{CatalogQuery, ObjectId, ObjectKind};

use crate::{
	candidate::{CandidateFlags, resolve_candidates},
	search_path::ResolvedSearchPath,
};

/// Answer of a visibility query. Visibility checks race with concurrent
/// drops by nature, so a vanished input is reported distinctly rather than
/// folded into [`Visibility::NotVisible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
	/// An unqualified reference to the object's name finds this object.
	Visible,
	/// The object exists but is shadowed by an earlier namespace, or its
	/// namespace is not on the path.
	NotVisible,
	/// The object was dropped before the check could describe it.
	InputMissing,
}

/// Determine whether the object would be found by an unqualified reference
/// to its name.
///
/// For overloadable kinds the check runs candidate collection with the
/// object's exact argument types, since a same-named declaration in an
/// earlier namespace only shadows when the signatures collide. For all other
/// kinds the first name hit along the path decides.
pub fn visibility(
	catalog: &impl CatalogQuery,
	path: &ResolvedSearchPath,
	kind: ObjectKind,
	id: ObjectId,
) -> crate::Result<Visibility> {
	let Some(object) = catalog.find_object(kind, id)? else {
		return Ok(Visibility::InputMissing);
	};
	debug_assert_eq!(object.kind, kind);

	if !path.searchable(kind).any(|namespace| namespace == object.namespace) {
		return Ok(Visibility::NotVisible);
	}

	if kind.overloadable() {
		// No expansion: the object is visible iff its own signature
		// survives masking at its exact arity.
		let matches = resolve_candidates(
			catalog,
			path,
			None,
			&object.name,
			Some(object.arg_types.len()),
			&[],
			CandidateFlags::default(),
			None,
		)?;
		let found = matches.iter().any(|candidate| candidate.id == Some(id));
		return Ok(if found {
			Visibility::Visible
		} else {
			Visibility::NotVisible
		});
	}

	for namespace in path.searchable(kind) {
		if let Some(found) = catalog.lookup_object(namespace, kind, &object.name)? {
			return Ok(if found == id {
				Visibility::Visible
			} else {
				Visibility::NotVisible
			});
		}
	}

	Ok(Visibility::NotVisible)
}

/// Strict visibility: a concurrently dropped object counts as not visible.
pub fn is_visible(
	catalog: &impl CatalogQuery,
	path: &ResolvedSearchPath,
	kind: ObjectKind,
	id: ObjectId,
) -> crate::Result<bool> {
	Ok(visibility(catalog, path, kind, id)? == Visibility::Visible)
}
