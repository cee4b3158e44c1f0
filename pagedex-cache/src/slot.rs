//! Sparse ordered key sequences.
//!
//! A query's result set is one conceptual sequence indexed by absolute
//! position, materialized only up to the highest position a page fetch has
//! ever written. Positions inside the materialized range that were never
//! written (or were invalidated by a resize) are holes.
//!
//! Representing the set this way — rather than as a per-page list of
//! lists — lets arbitrary page sizes and overlapping refetches merge
//! without duplication, and makes "has this position ever been fetched" a
//! single slot check.

use pagedex_types::ItemKey;
use serde::{Deserialize, Serialize};

/// One position of a sparse result sequence.
///
/// Serializes holes as JSON `null`, so a persisted sequence reads as
/// `[841, null]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<ItemKey>", into = "Option<ItemKey>")]
pub enum Slot {
    /// The record key occupying this position.
    Key(ItemKey),
    /// Position known to exist but not yet fetched.
    Hole,
}

impl Slot {
    /// Returns true for an unfetched position.
    #[must_use]
    pub fn is_hole(&self) -> bool {
        matches!(self, Self::Hole)
    }

    /// Returns the occupying key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&ItemKey> {
        match self {
            Self::Key(key) => Some(key),
            Self::Hole => None,
        }
    }
}

impl From<Option<ItemKey>> for Slot {
    fn from(key: Option<ItemKey>) -> Self {
        match key {
            Some(key) => Self::Key(key),
            None => Self::Hole,
        }
    }
}

impl From<Slot> for Option<ItemKey> {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Key(key) => Some(key),
            Slot::Hole => None,
        }
    }
}

impl From<ItemKey> for Slot {
    fn from(key: ItemKey) -> Self {
        Self::Key(key)
    }
}

/// A resizable sparse sequence of record keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyList(Vec<Slot>);

impl KeyList {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fully resolved sequence from keys in order.
    #[must_use]
    pub fn from_keys(keys: impl IntoIterator<Item = ItemKey>) -> Self {
        Self(keys.into_iter().map(Slot::Key).collect())
    }

    /// Materialized length: one past the highest position ever written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no position has been materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the slot at `index`, or `None` outside the materialized
    /// range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.0.get(index)
    }

    /// Writes one received page into positions `[start, start + keys.len())`.
    ///
    /// The sequence grows with holes as needed; existing positions are
    /// overwritten, so a refetch of the same page replaces stale keys.
    pub fn write_page(&mut self, start: usize, keys: &[ItemKey]) {
        let end = start + keys.len();
        if self.0.len() < end {
            self.0.resize(end, Slot::Hole);
        }
        for (offset, key) in keys.iter().enumerate() {
            self.0[start + offset] = Slot::Key(key.clone());
        }
    }

    /// Resizes the sequence to exactly `len` positions.
    ///
    /// Shrinking discards positions at or beyond `len`; growing pads with
    /// holes and never invents resolved entries.
    pub fn resize(&mut self, len: usize) {
        self.0.resize(len, Slot::Hole);
    }

    /// The read window `[start, start + len)`, clamped to the
    /// materialized range.
    #[must_use]
    pub fn window(&self, start: usize, len: usize) -> &[Slot] {
        let lo = start.min(self.0.len());
        let hi = start.saturating_add(len).min(self.0.len());
        &self.0[lo..hi]
    }

    /// Iterates over all materialized slots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.0.iter()
    }
}

impl FromIterator<ItemKey> for KeyList {
    fn from_iter<I: IntoIterator<Item = ItemKey>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<'a> IntoIterator for &'a KeyList {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
