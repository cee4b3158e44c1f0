//! The query cache: composition root over one item store and one query
//! index.
//!
//! Merge operations are persistent (`&self -> Self`): the returned cache
//! shares structure with its parent, and a receive that changes nothing
//! returns a cache whose maps are `ptr_eq` to the originals. Upstream
//! memoization layers key their invalidation on that identity signal, so
//! readers of an older cache value never observe a half-applied merge.

use crate::index::{IndexEntry, QueryIndex};
use crate::slot::Slot;
use crate::store::ItemStore;
use pagedex_types::{ItemKey, Keyed, Query, QueryKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::trace;

/// Serializable snapshot of a cache, for seeding and restore.
///
/// Records carry their own keys, so items are stored as a plain list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheState<T> {
    /// Every known record.
    pub items: Vec<T>,
    /// Every recorded query entry.
    pub queries: Vec<(QueryKey, IndexEntry)>,
}

impl<T> Default for CacheState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            queries: Vec::new(),
        }
    }
}

/// Per-collection entity cache with paginated-query indexing.
///
/// Generic over the record type: anything `Keyed + Clone + PartialEq`
/// can be cached, and the cache never interprets a record beyond its key.
#[derive(Debug, Clone)]
pub struct QueryCache<T> {
    defaults: BTreeMap<String, Value>,
    store: ItemStore<T>,
    index: QueryIndex,
}

impl<T: Keyed + Clone + PartialEq> QueryCache<T> {
    /// Creates an empty cache with no default query parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(BTreeMap::new())
    }

    /// Creates an empty cache whose canonical keys treat `defaults` as
    /// omitted parameters.
    #[must_use]
    pub fn with_defaults(defaults: BTreeMap<String, Value>) -> Self {
        Self {
            defaults,
            store: ItemStore::new(),
            index: QueryIndex::new(),
        }
    }

    /// Restores a cache from a snapshot.
    #[must_use]
    pub fn from_state(state: CacheState<T>) -> Self {
        Self::from_state_with_defaults(state, BTreeMap::new())
    }

    /// Restores a cache from a snapshot, with default query parameters.
    #[must_use]
    pub fn from_state_with_defaults(
        state: CacheState<T>,
        defaults: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            defaults,
            store: ItemStore::from_items(state.items),
            index: QueryIndex::from_entries(state.queries),
        }
    }

    /// Snapshots the cache for persistence by an external collaborator.
    #[must_use]
    pub fn state(&self) -> CacheState<T> {
        CacheState {
            items: self.store.iter().cloned().collect(),
            queries: self
                .index
                .entries()
                .map(|(key, entry)| (key.clone(), entry.clone()))
                .collect(),
        }
    }

    /// The default query parameters used for canonicalization.
    #[must_use]
    pub fn defaults(&self) -> &BTreeMap<String, Value> {
        &self.defaults
    }

    /// The underlying item store.
    #[must_use]
    pub fn store(&self) -> &ItemStore<T> {
        &self.store
    }

    /// The underlying query index.
    #[must_use]
    pub fn index(&self) -> &QueryIndex {
        &self.index
    }

    /// Canonical key for `query` under this cache's defaults.
    #[must_use]
    pub fn key_for(&self, query: &Query) -> QueryKey {
        QueryKey::canonical_with_defaults(query, &self.defaults)
    }

    /// Returns the record for `key`, if known.
    #[must_use]
    pub fn item(&self, key: &ItemKey) -> Option<&T> {
        self.store.get(key)
    }

    /// Every known record for the scope, unordered.
    #[must_use]
    pub fn all_items(&self) -> Vec<&T> {
        self.store.iter().collect()
    }

    /// Resolves the requested page of `query`, fully known or nothing.
    ///
    /// Returns `None` when the query was never recorded, when any
    /// position of the requested window is a hole, or when a position
    /// references a key the store no longer resolves. "Queried, zero
    /// results" returns `Some(vec![])` — distinct from never queried.
    #[must_use]
    pub fn items_for(&self, query: &Query) -> Option<Vec<&T>> {
        let key = self.key_for(query);
        let entry = self.index.entry(&key)?;

        let start = query.offset();
        let len = query.effective_per_page().get() as usize;
        let window = entry.item_keys.window(start, len);

        let mut items = Vec::with_capacity(window.len());
        for slot in window {
            match slot {
                Slot::Key(item_key) => match self.store.get(item_key) {
                    Some(item) => items.push(item),
                    None => {
                        trace!(query = %key, item = %item_key, "stale key in query window");
                        return None;
                    }
                },
                Slot::Hole => {
                    trace!(query = %key, position = start, "hole in query window");
                    return None;
                }
            }
        }
        Some(items)
    }

    /// Authoritative total for `query`, once reported.
    #[must_use]
    pub fn found_for(&self, query: &Query) -> Option<usize> {
        self.index.entry(&self.key_for(query))?.found
    }

    /// Number of pages for `query` at its page size.
    ///
    /// Zero found yields zero pages at this layer; the consumer-facing
    /// floor lives in [`PagedView`](crate::PagedView).
    #[must_use]
    pub fn pages_for(&self, query: &Query) -> Option<usize> {
        let found = self.found_for(query)?;
        let per_page = query.effective_per_page().get() as usize;
        Some(found.div_ceil(per_page))
    }

    /// Merges records into the item store without touching any query.
    #[must_use]
    pub fn receive(&self, items: &[T]) -> Self {
        let (store, changed) = self.store.merge(items);
        if !changed {
            return self.clone();
        }
        Self {
            defaults: self.defaults.clone(),
            store,
            index: self.index.clone(),
        }
    }

    /// Merges one fetched page: records into the store, keys into the
    /// query's index entry, and `found` as the authoritative total when
    /// supplied.
    ///
    /// The page position comes from the query's (defaulted) pagination.
    /// The fetch layer calls this once per successfully completed page
    /// fetch; failures never reach the cache.
    #[must_use]
    pub fn receive_page(&self, items: &[T], query: &Query, found: Option<usize>) -> Self {
        let (store, store_changed) = self.store.merge(items);

        let keys: Vec<ItemKey> = items.iter().map(Keyed::key).collect();
        let (index, index_changed) = self.index.record_page(
            &self.key_for(query),
            query.effective_page(),
            query.effective_per_page(),
            &keys,
            found,
        );

        if !store_changed && !index_changed {
            return self.clone();
        }
        Self {
            defaults: self.defaults.clone(),
            store,
            index,
        }
    }

    /// Returns true if both caches share the same store and index roots.
    ///
    /// This is the invalidation signal for memoization layers above the
    /// cache: an unchanged receive preserves it, any effective merge
    /// breaks it.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.store.ptr_eq(&other.store) && self.index.ptr_eq(&other.index)
    }
}

impl<T: Keyed + Clone + PartialEq> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
