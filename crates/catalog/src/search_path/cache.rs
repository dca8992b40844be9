// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use std::collections::HashMap;

use nymdb_core::interface::{NamespaceId, RoleId};
use tracing::debug;

/// Only a small number of distinct search path strings is expected per
/// session. If the cache grows past this, reset it entirely instead of
/// evicting: most entries of an oversized cache come from dynamically built
/// path strings that will never be looked up again, and the few hot entries
/// are repopulated immediately.
const RESET_THRESHOLD: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct SearchPathCacheKey {
	pub spec: String,
	pub role: RoleId,
}

#[derive(Debug, Clone)]
pub(crate) struct SearchPathCacheEntry {
	/// Namespace ids that resolved and passed the USAGE filter, in token
	/// order, duplicates retained.
	pub filtered: Vec<NamespaceId>,
	/// Final computed search path (deduplicated, implicit namespaces in
	/// place, hook applied).
	pub final_path: Vec<NamespaceId>,
	/// First element of the explicit (filtered) list, if any.
	pub first_explicit: Option<NamespaceId>,
	/// A temp token was dropped because the temp namespace did not exist;
	/// the entry must be recomputed once it does.
	pub temp_missing: bool,
	/// Computed while a visibility hook was registered: `final_path` must
	/// be recomputed from `filtered` on every lookup.
	pub force_recompute: bool,
	/// Generation the entry was computed at. Entries from an older
	/// generation are treated as absent.
	pub generation: u64,
}

/// Memoizes (spec string, role) to resolved path state.
///
/// Population is atomic by construction: an entry is inserted only after the
/// resolver produced it in full, so a failed computation leaves the key
/// absent and the next lookup retries cleanly.
#[derive(Debug, Default)]
pub(crate) struct SearchPathCache {
	entries: HashMap<SearchPathCacheKey, SearchPathCacheEntry>,
}

impl SearchPathCache {
	pub fn new() -> Self {
		Self {
			entries: HashMap::new(),
		}
	}

	pub fn get(&self, key: &SearchPathCacheKey) -> Option<&SearchPathCacheEntry> {
		self.entries.get(key)
	}

	pub fn get_mut(&mut self, key: &SearchPathCacheKey) -> Option<&mut SearchPathCacheEntry> {
		self.entries.get_mut(key)
	}

	pub fn insert(&mut self, key: SearchPathCacheKey, entry: SearchPathCacheEntry) {
		if self.entries.len() >= RESET_THRESHOLD && !self.entries.contains_key(&key) {
			debug!(entries = self.entries.len(), "search path cache reset");
			self.entries.clear();
		}
		self.entries.insert(key, entry);
	}

	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.entries.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(generation: u64) -> SearchPathCacheEntry {
		SearchPathCacheEntry {
			filtered: vec![NamespaceId(1025)],
			final_path: vec![NamespaceId::SYSTEM, NamespaceId(1025)],
			first_explicit: Some(NamespaceId(1025)),
			temp_missing: false,
			force_recompute: false,
			generation,
		}
	}

	fn key(spec: &str, role: u64) -> SearchPathCacheKey {
		SearchPathCacheKey {
			spec: spec.to_string(),
			role: RoleId(role),
		}
	}

	#[test]
	fn test_get_after_insert() {
		let mut cache = SearchPathCache::new();

		cache.insert(key("a,b", 1), entry(1));

		assert!(cache.get(&key("a,b", 1)).is_some());
		assert!(cache.get(&key("a,b", 2)).is_none());
		assert!(cache.get(&key("a, b", 1)).is_none());
	}

	#[test]
	fn test_reset_at_threshold() {
		let mut cache = SearchPathCache::new();

		for i in 0..RESET_THRESHOLD {
			cache.insert(key(&format!("spec_{}", i), 1), entry(1));
		}
		assert_eq!(cache.len(), RESET_THRESHOLD);

		// One more distinct key clears everything rather than evicting.
		cache.insert(key("one_more", 1), entry(1));

		assert_eq!(cache.len(), 1);
		assert!(cache.get(&key("one_more", 1)).is_some());
	}

	#[test]
	fn test_reinsert_existing_key_does_not_reset() {
		let mut cache = SearchPathCache::new();

		for i in 0..RESET_THRESHOLD {
			cache.insert(key(&format!("spec_{}", i), 1), entry(1));
		}

		cache.insert(key("spec_0", 1), entry(2));

		assert_eq!(cache.len(), RESET_THRESHOLD);
	}
}
