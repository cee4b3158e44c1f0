//! The query index.
//!
//! Maps each canonical query key to the sparse ordered sequence of record
//! keys seen for that query, plus the authoritative total reported by the
//! source of truth. Entries are created on first merge and updated in
//! place (never deleted); the whole index is discarded together when the
//! owning scope resets.

use crate::slot::KeyList;
use pagedex_types::{ItemKey, Page, PerPage, QueryKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything known about one logical query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Sparse result sequence indexed by absolute position.
    pub item_keys: KeyList,
    /// Authoritative total result count, once reported.
    pub found: Option<usize>,
}

impl IndexEntry {
    /// Returns true if `position` lies inside the materialized range and
    /// has been resolved to a key.
    #[must_use]
    pub fn is_resolved(&self, position: usize) -> bool {
        self.item_keys
            .get(position)
            .is_some_and(|slot| !slot.is_hole())
    }
}

/// Canonical query key → [`IndexEntry`] map with persistent semantics.
#[derive(Debug, Clone, Default)]
pub struct QueryIndex {
    entries: im::HashMap<QueryKey, IndexEntry>,
}

impl QueryIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an index seeded from `(key, entry)` pairs.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (QueryKey, IndexEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the entry for a canonical key, if the query was ever
    /// recorded.
    #[must_use]
    pub fn entry(&self, key: &QueryKey) -> Option<&IndexEntry> {
        self.entries.get(key)
    }

    /// Number of recorded queries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no query was ever recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all recorded entries, unordered.
    pub fn entries(&self) -> impl Iterator<Item = (&QueryKey, &IndexEntry)> {
        self.entries.iter()
    }

    /// Records one received page for the query identified by `key`.
    ///
    /// Writes `keys` at the page's absolute offset (padding with holes as
    /// needed, overwriting stale keys on refetch). A known `found` resizes
    /// the sequence to exactly the total when it first appears or changes;
    /// an absent `found` never erases a previously recorded total. After
    /// every call the sequence is no longer than the known total.
    ///
    /// Returns the next index and whether anything changed; an unchanged
    /// record returns an index whose map is `ptr_eq` to this one.
    #[must_use]
    pub fn record_page(
        &self,
        key: &QueryKey,
        page: Page,
        per_page: PerPage,
        keys: &[ItemKey],
        found: Option<usize>,
    ) -> (Self, bool) {
        let previous = self.entries.get(key);
        let mut entry = previous.cloned().unwrap_or_default();

        let start = page.offset(per_page);
        entry.item_keys.write_page(start, keys);

        match found {
            Some(total) if entry.found != Some(total) => {
                entry.item_keys.resize(total);
                entry.found = Some(total);
            }
            _ => {
                // Unchanged or unreported total still bounds the sequence.
                if let Some(total) = entry.found
                    && entry.item_keys.len() > total
                {
                    entry.item_keys.resize(total);
                }
            }
        }

        if previous == Some(&entry) {
            return (self.clone(), false);
        }

        debug!(
            query = %key,
            page = page.get(),
            per_page = per_page.get(),
            received = keys.len(),
            found = ?entry.found,
            "recorded query page"
        );

        let mut entries = self.entries.clone();
        entries.insert(key.clone(), entry);
        (Self { entries }, true)
    }

    /// Returns true if both indexes share the same map root.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.entries.ptr_eq(&other.entries)
    }
}
