//! Query descriptors and their canonical keys.
//!
//! A query is a set of named selection parameters (filter, search, sort)
//! plus an optional pagination position. Two queries that differ only in
//! pagination describe the same logical result set and must share one
//! index entry; [`QueryKey`] captures exactly that identity.

use crate::{Page, PerPage};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A query descriptor: selection parameters plus pagination position.
///
/// Selection parameters define *which* records belong to the result set
/// and in *what order*; `page`/`per_page` define which slice of that
/// ordered set is being addressed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Named selection parameters, sorted by name.
    #[serde(default)]
    pub params: BTreeMap<String, Value>,
    /// Requested page; the first page when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
    /// Requested page size; [`PerPage::DEFAULT`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<PerPage>,
}

impl Query {
    /// Creates an empty query (all records, first page, default size).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a selection parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Sets the requested page.
    #[must_use]
    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the requested page size.
    #[must_use]
    pub fn with_per_page(mut self, per_page: PerPage) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Returns a selection parameter by name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// The requested page, defaulted to the first.
    #[must_use]
    pub fn effective_page(&self) -> Page {
        self.page.unwrap_or_default()
    }

    /// The requested page size, defaulted.
    #[must_use]
    pub fn effective_per_page(&self) -> PerPage {
        self.per_page.unwrap_or_default()
    }

    /// Absolute offset of the requested page's first position.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.effective_page().offset(self.effective_per_page())
    }
}

/// Pagination-independent canonical identity of a query's selection
/// parameters.
///
/// Derived by dropping pagination, dropping null-valued parameters,
/// dropping parameters equal to the collection's defaults, sorting the
/// remainder by name and serializing the result as a JSON array of
/// `[name, value]` pairs: `{search: "Hello", page: 2}` keys as
/// `[["search","Hello"]]`, and an empty selection keys as `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryKey(String);

impl QueryKey {
    /// Canonicalizes a query with no default parameters.
    #[must_use]
    pub fn canonical(query: &Query) -> Self {
        Self::canonical_with_defaults(query, &BTreeMap::new())
    }

    /// Canonicalizes a query, treating parameters equal to `defaults` as
    /// omitted.
    #[must_use]
    pub fn canonical_with_defaults(query: &Query, defaults: &BTreeMap<String, Value>) -> Self {
        // BTreeMap iteration is sorted by name, which keeps the key
        // independent of parameter insertion order.
        let pairs: Vec<(&String, &Value)> = query
            .params
            .iter()
            .filter(|(_, value)| !value.is_null())
            .filter(|(name, value)| defaults.get(*name) != Some(*value))
            .collect();

        let raw = serde_json::to_string(&pairs).expect("JSON parameter pairs always serialize");
        Self(raw)
    }

    /// The canonical key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the key, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
