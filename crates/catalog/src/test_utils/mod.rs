// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

//! In-memory [`CatalogQuery`] implementation for tests.
//!
//! Holds namespaces, roles, declarations, and permission denials in plain
//! maps. Ids are allocated sequentially from a fixed base so tests can assert
//! on ordering without caring about concrete values.

use std::collections::{HashMap, HashSet};

use nymdb_core::interface::{
	CandidateDeclaration, CatalogQuery, NamespaceDef, NamespaceId, ObjectDef, ObjectId, ObjectKind,
	OperatorKind, RoleDef, RoleId, TypeId,
};

const FIRST_USER_ID: u64 = 1025;

/// A function declaration under construction.
#[derive(Debug, Clone)]
pub struct FunctionToCreate {
	pub namespace: NamespaceId,
	pub name: String,
	pub arg_types: Vec<TypeId>,
	pub arg_names: Option<Vec<String>>,
	pub variadic_type: Option<TypeId>,
	pub default_count: usize,
	pub signature_with_out: Option<Vec<TypeId>>,
}

impl FunctionToCreate {
	pub fn new(namespace: NamespaceId, name: &str, arg_types: &[TypeId]) -> Self {
		Self {
			namespace,
			name: name.to_string(),
			arg_types: arg_types.to_vec(),
			arg_names: None,
			variadic_type: None,
			default_count: 0,
			signature_with_out: None,
		}
	}

	pub fn names(mut self, names: &[&str]) -> Self {
		self.arg_names = Some(names.iter().map(|name| name.to_string()).collect());
		self
	}

	pub fn defaults(mut self, count: usize) -> Self {
		self.default_count = count;
		self
	}

	/// Declare the trailing parameter variadic. `arg_types` is the full
	/// declared signature (its last entry being the variadic parameter's
	/// array type), `element` the type each absorbed argument takes.
	pub fn variadic(mut self, element: TypeId, arg_types: &[TypeId]) -> Self {
		self.variadic_type = Some(element);
		self.arg_types = arg_types.to_vec();
		self
	}

	pub fn with_out(mut self, all: &[TypeId]) -> Self {
		self.signature_with_out = Some(all.to_vec());
		self
	}
}

/// An operator declaration under construction.
#[derive(Debug, Clone)]
pub struct OperatorToCreate {
	pub namespace: NamespaceId,
	pub name: String,
	pub kind: OperatorKind,
	pub left: TypeId,
	pub right: TypeId,
}

impl OperatorToCreate {
	pub fn infix(namespace: NamespaceId, name: &str, left: TypeId, right: TypeId) -> Self {
		Self {
			namespace,
			name: name.to_string(),
			kind: OperatorKind::Infix,
			left,
			right,
		}
	}

	pub fn prefix(namespace: NamespaceId, name: &str, right: TypeId) -> Self {
		Self {
			namespace,
			name: name.to_string(),
			kind: OperatorKind::Prefix,
			left: TypeId::NONE,
			right,
		}
	}
}

#[derive(Debug, Default)]
pub struct TestCatalog {
	namespaces: Vec<NamespaceDef>,
	roles: Vec<RoleDef>,
	next_id: u64,
	usage_denied: HashSet<(RoleId, NamespaceId)>,
	create_denied: HashSet<(RoleId, NamespaceId)>,
	declarations: HashMap<(NamespaceId, String), Vec<CandidateDeclaration>>,
	named: HashMap<(NamespaceId, ObjectKind, String), ObjectId>,
	objects: HashMap<ObjectId, ObjectDef>,
}

impl TestCatalog {
	pub fn new() -> Self {
		Self {
			namespaces: vec![NamespaceDef::system()],
			next_id: FIRST_USER_ID,
			..Default::default()
		}
	}

	fn alloc(&mut self) -> u64 {
		let id = self.next_id;
		self.next_id += 1;
		id
	}

	pub fn create_namespace(&mut self, name: &str) -> NamespaceId {
		let id = NamespaceId(self.alloc());
		self.namespaces.push(NamespaceDef {
			id,
			name: name.to_string(),
		});
		id
	}

	pub fn create_role(&mut self, name: &str) -> RoleId {
		let id = RoleId(self.alloc());
		self.roles.push(RoleDef {
			id,
			name: name.to_string(),
		});
		id
	}

	pub fn deny_usage(&mut self, role: RoleId, namespace: NamespaceId) {
		self.usage_denied.insert((role, namespace));
	}

	pub fn deny_create(&mut self, role: RoleId, namespace: NamespaceId) {
		self.create_denied.insert((role, namespace));
	}

	pub fn create_function(&mut self, function: FunctionToCreate) -> ObjectId {
		let id = ObjectId(self.alloc());
		self.objects.insert(id, ObjectDef {
			id,
			kind: ObjectKind::Function,
			namespace: function.namespace,
			name: function.name.clone(),
			arg_types: function.arg_types.clone(),
		});
		self.declarations
			.entry((function.namespace, function.name))
			.or_default()
			.push(CandidateDeclaration {
				id,
				namespace: function.namespace,
				arg_types: function.arg_types,
				arg_names: function.arg_names,
				variadic_type: function.variadic_type,
				default_count: function.default_count,
				signature_with_out: function.signature_with_out,
				operator_kind: None,
			});
		id
	}

	pub fn create_operator(&mut self, operator: OperatorToCreate) -> ObjectId {
		let id = ObjectId(self.alloc());
		let arg_types = vec![operator.left, operator.right];
		self.objects.insert(id, ObjectDef {
			id,
			kind: ObjectKind::Operator,
			namespace: operator.namespace,
			name: operator.name.clone(),
			arg_types: arg_types.clone(),
		});
		self.declarations
			.entry((operator.namespace, operator.name))
			.or_default()
			.push(CandidateDeclaration {
				id,
				namespace: operator.namespace,
				arg_types,
				arg_names: None,
				variadic_type: None,
				default_count: 0,
				signature_with_out: None,
				operator_kind: Some(operator.kind),
			});
		id
	}

	pub fn create_object(&mut self, namespace: NamespaceId, kind: ObjectKind, name: &str) -> ObjectId {
		let id = ObjectId(self.alloc());
		self.objects.insert(id, ObjectDef {
			id,
			kind,
			namespace,
			name: name.to_string(),
			arg_types: Vec::new(),
		});
		self.named.insert((namespace, kind, name.to_string()), id);
		id
	}

	pub fn create_relation(&mut self, namespace: NamespaceId, name: &str) -> ObjectId {
		self.create_object(namespace, ObjectKind::Relation, name)
	}

	/// Remove the object's description while keeping its name entries, to
	/// model a drop racing with a visibility check.
	pub fn drop_object(&mut self, id: ObjectId) {
		self.objects.remove(&id);
	}
}

impl CatalogQuery for TestCatalog {
	fn namespace_by_name(&self, name: &str) -> nymdb_core::Result<Option<NamespaceId>> {
		Ok(self.namespaces.iter().find(|ns| ns.name == name).map(|ns| ns.id))
	}

	fn has_usage(&self, role: RoleId, namespace: NamespaceId) -> nymdb_core::Result<bool> {
		Ok(!self.usage_denied.contains(&(role, namespace)))
	}

	fn has_create(&self, role: RoleId, namespace: NamespaceId) -> nymdb_core::Result<bool> {
		Ok(!self.create_denied.contains(&(role, namespace)))
	}

	fn role_name(&self, role: RoleId) -> nymdb_core::Result<Option<String>> {
		Ok(self.roles.iter().find(|r| r.id == role).map(|r| r.name.clone()))
	}

	fn declarations(
		&self,
		namespace: NamespaceId,
		name: &str,
	) -> nymdb_core::Result<Vec<CandidateDeclaration>> {
		Ok(self
			.declarations
			.get(&(namespace, name.to_string()))
			.cloned()
			.unwrap_or_default())
	}

	fn lookup_object(
		&self,
		namespace: NamespaceId,
		kind: ObjectKind,
		name: &str,
	) -> nymdb_core::Result<Option<ObjectId>> {
		Ok(self.named.get(&(namespace, kind, name.to_string())).copied())
	}

	fn find_object(&self, kind: ObjectKind, id: ObjectId) -> nymdb_core::Result<Option<ObjectDef>> {
		Ok(self.objects.get(&id).filter(|object| object.kind == kind).cloned())
	}
}
