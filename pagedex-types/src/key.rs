//! Item and scope identifiers.
//!
//! Cached records are addressed by a stable scalar key — an integer or a
//! string, whichever the remote collection uses. Cache instances are
//! addressed by the numeric id of the owning scope (a site, an account, a
//! workspace).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of one cached record.
///
/// Remote collections address records either by numeric id or by a string
/// slug; both hash, compare and serialize deterministically, so either
/// works as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemKey {
    /// Numeric identifier.
    Int(i64),
    /// String identifier (slug, content hash, UUID string).
    Str(String),
}

impl ItemKey {
    /// Returns the numeric form, if this is a numeric key.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(_) => None,
        }
    }

    /// Returns the string form, if this is a string key.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemKey {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for ItemKey {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for ItemKey {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Identifier of the scope that owns one cache instance.
///
/// Scopes share nothing: each has its own item store and query index, and
/// resetting a scope discards both wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(u64);

impl ScopeId {
    /// Creates a scope id from its numeric value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ScopeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Implemented by anything the cache can store.
///
/// The cache never interprets a record beyond this one accessor.
pub trait Keyed {
    /// The record's stable identifier.
    fn key(&self) -> ItemKey;
}
