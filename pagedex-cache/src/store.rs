//! The shared item store.
//!
//! A flat map from record key to record, shared by every query recorded
//! against the same cache. A later merge for the same key fully replaces
//! the earlier record; there is no field-level patching at this layer.
//!
//! Backed by a persistent hash map: merging produces a new store that
//! shares structure with its parent, and a merge that changes nothing
//! returns a store whose map is `ptr_eq` to the original.

use pagedex_types::{ItemKey, Keyed};

/// Keyed record storage with last-write-wins replacement.
#[derive(Debug, Clone)]
pub struct ItemStore<T> {
    items: im::HashMap<ItemKey, T>,
}

impl<T: Keyed + Clone + PartialEq> ItemStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: im::HashMap::new(),
        }
    }

    /// Creates a store seeded with `items`.
    ///
    /// Duplicate keys resolve last-one-wins, as in [`ItemStore::merge`].
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut map = im::HashMap::new();
        for item in items {
            map.insert(item.key(), item);
        }
        Self { items: map }
    }

    /// Returns the record for `key`, if known.
    #[must_use]
    pub fn get(&self, key: &ItemKey) -> Option<&T> {
        self.items.get(key)
    }

    /// Returns true if a record for `key` is known.
    #[must_use]
    pub fn contains(&self, key: &ItemKey) -> bool {
        self.items.contains_key(key)
    }

    /// Number of known records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no records are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all known records, unordered.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Merges `items` into the store, inserting or replacing per key.
    ///
    /// Duplicates within `items` resolve last-one-wins. Returns the next
    /// store and whether anything changed; replacing a record with an
    /// equal one is not a change, and an unchanged merge returns a store
    /// whose map is `ptr_eq` to this one.
    #[must_use]
    pub fn merge(&self, items: &[T]) -> (Self, bool) {
        let mut next = self.items.clone();
        let mut changed = false;

        for item in items {
            let key = item.key();
            if next.get(&key) == Some(item) {
                continue;
            }
            next.insert(key, item.clone());
            changed = true;
        }

        if !changed {
            return (self.clone(), false);
        }
        (Self { items: next }, true)
    }

    /// Returns true if both stores share the same map root.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.items.ptr_eq(&other.items)
    }
}

impl<T: Keyed + Clone + PartialEq> Default for ItemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
