//! In-flight fetch bookkeeping.
//!
//! The fetch layer records which query pages and which single records it
//! is currently requesting. This state lives outside the cache maps: a
//! failed fetch clears its tracker entry and never touches cached data,
//! so the cache only ever sees successfully completed pages.

use pagedex_types::{ItemKey, QueryKey, ScopeId};
use std::collections::HashSet;

/// Tracks which query and item fetches are currently in flight.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    queries: HashSet<(ScopeId, QueryKey)>,
    items: HashSet<(ScopeId, ItemKey)>,
}

impl RequestTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a query fetch as started. Returns false if it was already
    /// in flight.
    pub fn begin_query(&mut self, scope: ScopeId, key: QueryKey) -> bool {
        self.queries.insert((scope, key))
    }

    /// Marks a query fetch as finished (successfully or not). Returns
    /// false if it was not in flight.
    pub fn finish_query(&mut self, scope: ScopeId, key: &QueryKey) -> bool {
        self.queries.remove(&(scope, key.clone()))
    }

    /// Returns true while a fetch for this query is in flight.
    #[must_use]
    pub fn is_requesting_query(&self, scope: ScopeId, key: &QueryKey) -> bool {
        self.queries.contains(&(scope, key.clone()))
    }

    /// Marks a single-record fetch as started. Returns false if it was
    /// already in flight.
    pub fn begin_item(&mut self, scope: ScopeId, key: ItemKey) -> bool {
        self.items.insert((scope, key))
    }

    /// Marks a single-record fetch as finished. Returns false if it was
    /// not in flight.
    pub fn finish_item(&mut self, scope: ScopeId, key: &ItemKey) -> bool {
        self.items.remove(&(scope, key.clone()))
    }

    /// Returns true while a fetch for this record is in flight.
    #[must_use]
    pub fn is_requesting_item(&self, scope: ScopeId, key: &ItemKey) -> bool {
        self.items.contains(&(scope, key.clone()))
    }

    /// Drops every in-flight marker for `scope`.
    pub fn clear_scope(&mut self, scope: ScopeId) {
        self.queries.retain(|(s, _)| *s != scope);
        self.items.retain(|(s, _)| *s != scope);
    }

    /// Returns true if nothing is in flight anywhere.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queries.is_empty() && self.items.is_empty()
    }
}
