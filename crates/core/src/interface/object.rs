// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifier of a namespace (schema-like container). Equality is identity,
/// never name: a renamed namespace keeps its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamespaceId(pub u64);

impl NamespaceId {
	/// The system catalog namespace. Hardcoded with a fixed id; it exists
	/// in every catalog and is implicitly part of every search path.
	pub const SYSTEM: NamespaceId = NamespaceId(1);
}

impl Display for NamespaceId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleId(pub u64);

impl Display for RoleId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// Identifier of a declared type. Opaque to this layer; candidate matching
/// only ever compares type ids for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(pub u64);

impl TypeId {
	/// Absent-operand sentinel, used as the left operand slot of prefix
	/// operators. Never a real type.
	pub const NONE: TypeId = TypeId(0);
}

impl Display for TypeId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// Identifier of a catalog object (function, operator, relation, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl Display for ObjectId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDef {
	pub id: NamespaceId,
	pub name: String,
}

impl NamespaceDef {
	pub fn system() -> Self {
		Self {
			id: NamespaceId::SYSTEM,
			name: "system".to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDef {
	pub id: RoleId,
	pub name: String,
}

/// Kinds of catalog objects resolvable through the search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
	Relation,
	Type,
	Function,
	Operator,
	Collation,
}

impl ObjectKind {
	/// Whether unqualified searches for this kind may look inside the
	/// session's temp namespace. Only relations and types qualify; temp
	/// tables have rowtypes, so types must be allowed too.
	pub fn searchable_in_temp(&self) -> bool {
		matches!(self, ObjectKind::Relation | ObjectKind::Type)
	}

	/// Whether names of this kind can be overloaded by argument types.
	pub fn overloadable(&self) -> bool {
		matches!(self, ObjectKind::Function | ObjectKind::Operator)
	}
}

impl Display for ObjectKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ObjectKind::Relation => f.write_str("relation"),
			ObjectKind::Type => f.write_str("type"),
			ObjectKind::Function => f.write_str("function"),
			ObjectKind::Operator => f.write_str("operator"),
			ObjectKind::Collation => f.write_str("collation"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
	Infix,
	Prefix,
}

/// A catalog-declared function or operator signature, as handed to the
/// candidate resolver by the catalog backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDeclaration {
	pub id: ObjectId,
	pub namespace: NamespaceId,
	/// Declared input argument types, in declaration order.
	pub arg_types: Vec<TypeId>,
	/// Parameter names parallel to the widest known signature, if any were
	/// declared. Required for named-notation matching.
	pub arg_names: Option<Vec<String>>,
	/// Element type of the trailing variadic parameter, if declared.
	pub variadic_type: Option<TypeId>,
	/// Number of trailing parameters carrying declared defaults.
	pub default_count: usize,
	/// Input and output argument types together, when the declaration has
	/// OUT-mode arguments. Used instead of `arg_types` when the caller asks
	/// for OUT arguments to be included.
	pub signature_with_out: Option<Vec<TypeId>>,
	/// Set for operator declarations; `None` for functions.
	pub operator_kind: Option<OperatorKind>,
}

impl CandidateDeclaration {
	/// The signature considered by the matcher under the given flag.
	pub fn signature(&self, include_out_arguments: bool) -> &[TypeId] {
		if include_out_arguments {
			if let Some(all) = &self.signature_with_out {
				return all;
			}
		}
		&self.arg_types
	}
}

/// Description of an existing object, as returned by reverse lookup. The
/// argument types are empty for non-overloadable kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDef {
	pub id: ObjectId,
	pub kind: ObjectKind,
	pub namespace: NamespaceId,
	pub name: String,
	pub arg_types: Vec<TypeId>,
}
