// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

mod catalog;
mod hook;
mod object;

pub use catalog::{CatalogChange, CatalogQuery};
pub use hook::NamespaceVisibilityHook;
pub use object::{
	CandidateDeclaration, NamespaceDef, NamespaceId, ObjectDef, ObjectId, ObjectKind, OperatorKind, RoleDef,
	RoleId, TypeId,
};
