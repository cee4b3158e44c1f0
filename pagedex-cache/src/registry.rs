//! Per-scope cache registry.
//!
//! One cache per owning scope (a site, an account, a workspace). Scopes
//! share nothing; resetting a scope discards its item store and query
//! index wholesale, which is how a scope switch invalidates everything at
//! once.

use crate::cache::QueryCache;
use pagedex_types::{Keyed, Query, ScopeId};
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::HashMap;
use tracing::debug;

/// Registry of per-scope caches sharing one defaults configuration.
#[derive(Debug, Clone)]
pub struct CacheRegistry<T> {
    defaults: BTreeMap<String, Value>,
    scopes: HashMap<ScopeId, QueryCache<T>>,
}

impl<T: Keyed + Clone + PartialEq> CacheRegistry<T> {
    /// Creates an empty registry with no default query parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(BTreeMap::new())
    }

    /// Creates an empty registry; every scope's cache canonicalizes with
    /// `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: BTreeMap<String, Value>) -> Self {
        Self {
            defaults,
            scopes: HashMap::new(),
        }
    }

    /// Returns the cache for `scope`, if any merge ever reached it.
    #[must_use]
    pub fn scope(&self, scope: ScopeId) -> Option<&QueryCache<T>> {
        self.scopes.get(&scope)
    }

    /// Number of scopes holding a cache.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns true if no scope holds a cache.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Iterates over all scopes and their caches, unordered.
    pub fn iter(&self) -> impl Iterator<Item = (&ScopeId, &QueryCache<T>)> {
        self.scopes.iter()
    }

    /// Merges records into `scope`'s store, creating the cache on first
    /// merge.
    pub fn receive(&mut self, scope: ScopeId, items: &[T]) {
        let cache = self
            .scopes
            .entry(scope)
            .or_insert_with(|| QueryCache::with_defaults(self.defaults.clone()));
        *cache = cache.receive(items);
    }

    /// Merges one fetched page into `scope`'s cache, creating it on first
    /// merge.
    pub fn receive_page(
        &mut self,
        scope: ScopeId,
        items: &[T],
        query: &Query,
        found: Option<usize>,
    ) {
        let cache = self
            .scopes
            .entry(scope)
            .or_insert_with(|| QueryCache::with_defaults(self.defaults.clone()));
        *cache = cache.receive_page(items, query, found);
    }

    /// Discards `scope`'s cache wholesale.
    ///
    /// Returns true if a cache existed.
    pub fn reset(&mut self, scope: ScopeId) -> bool {
        let existed = self.scopes.remove(&scope).is_some();
        if existed {
            debug!(scope = %scope, "reset scope cache");
        }
        existed
    }

    /// Discards every scope's cache.
    pub fn clear(&mut self) {
        self.scopes.clear();
    }
}

impl<T: Keyed + Clone + PartialEq> Default for CacheRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
