// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use crate::interface::NamespaceId;

/// Extension point allowing a plugin to insert or reorder namespaces in the
/// final search path.
///
/// The hook's output is not assumed stable: for the same input it may answer
/// differently across invocations, so the final path ordering is recomputed
/// on every resolution while a hook is registered. The filtered (permission
/// checked) namespace list is still reused.
pub trait NamespaceVisibilityHook {
	fn adjust(&self, path: &mut Vec<NamespaceId>);
}
