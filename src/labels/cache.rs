//! Memoization of finished label mappings.
//!
//! Constants cannot change while the process runs, so a group's final mapping (after overrides)
//! is computed once and kept for the lifetime of the cache. Entries are keyed by descriptor id
//! and group prefix, which keeps identically named groups of different types apart, even when
//! the types themselves share a name.
//!
//! # Thread Safety
//!
//! The cache is a [`DashMap`]. Two threads resolving the same group for the first time may both
//! compute it, but [`GroupCache::insert`] stores only the first mapping and hands that one back
//! to both, so callers always observe a single mapping per group.

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::metadata::LabelMap;

/// Identifies a cached group
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    /// Id of the descriptor declaring the group, see [`crate::metadata::TypeDescriptor::id`]
    pub type_id: u64,
    /// Group prefix, e.g. `STATUS_`
    pub prefix: String,
}

impl GroupKey {
    /// Create a new key
    pub fn new(type_id: u64, prefix: impl Into<String>) -> Self {
        GroupKey {
            type_id,
            prefix: prefix.into(),
        }
    }
}

/// Unbounded, never-evicting store of finished label mappings
#[derive(Debug, Default)]
pub struct GroupCache {
    entries: DashMap<GroupKey, Arc<LabelMap>>,
}

impl GroupCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        GroupCache::default()
    }

    /// The process-wide cache, created on first use
    pub fn global() -> Arc<GroupCache> {
        static GLOBAL: OnceLock<Arc<GroupCache>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(GroupCache::new())).clone()
    }

    /// Fetch the mapping stored for `key`
    #[must_use]
    pub fn get(&self, key: &GroupKey) -> Option<Arc<LabelMap>> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Store `labels` for `key` unless a mapping is already present
    ///
    /// Returns the mapping that ends up stored, which is the earlier one if another caller won
    /// the race.
    pub fn insert(&self, key: GroupKey, labels: LabelMap) -> Arc<LabelMap> {
        self.entries
            .entry(key)
            .or_insert_with(|| Arc::new(labels))
            .value()
            .clone()
    }

    /// Number of cached groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no group has been cached yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
