//! Consumer-facing paged reads.
//!
//! [`PagedView`] binds a cache to one query and applies the conventions
//! list UIs rely on: the last page is never reported below 1 (an empty
//! result still renders a single stable page), and per-domain decoration
//! happens here, at the read boundary, never inside the core.

use crate::cache::QueryCache;
use pagedex_types::{Keyed, Query};

/// A read-only view of one query's result pages.
#[derive(Debug)]
pub struct PagedView<'a, T> {
    cache: &'a QueryCache<T>,
    query: Query,
}

impl<'a, T: Keyed + Clone + PartialEq> PagedView<'a, T> {
    /// Creates a view of `query` over `cache`.
    #[must_use]
    pub fn new(cache: &'a QueryCache<T>, query: Query) -> Self {
        Self { cache, query }
    }

    /// The query this view reads.
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The requested page, fully known or `None`.
    #[must_use]
    pub fn items(&self) -> Option<Vec<&'a T>> {
        self.cache.items_for(&self.query)
    }

    /// The requested page with every record passed through `decorate` —
    /// the hook for per-domain normalization after retrieval.
    #[must_use]
    pub fn items_with<F, U>(&self, mut decorate: F) -> Option<Vec<U>>
    where
        F: FnMut(&T) -> U,
    {
        let items = self.items()?;
        Some(items.into_iter().map(|item| decorate(item)).collect())
    }

    /// Authoritative total for the query, once reported.
    #[must_use]
    pub fn found(&self) -> Option<usize> {
        self.cache.found_for(&self.query)
    }

    /// Raw page count; zero when the query matched nothing.
    #[must_use]
    pub fn pages(&self) -> Option<usize> {
        self.cache.pages_for(&self.query)
    }

    /// The last queryable page, never below 1.
    #[must_use]
    pub fn last_page(&self) -> Option<usize> {
        Some(self.pages()?.max(1))
    }

    /// Returns true if the view's page is the last queryable page, or
    /// `None` while the total is unknown.
    #[must_use]
    pub fn is_last_page(&self) -> Option<bool> {
        Some(self.query.effective_page().get() as usize == self.last_page()?)
    }
}
