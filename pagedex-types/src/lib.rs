//! Core type definitions for Pagedex.
//!
//! This crate defines the fundamental, collection-agnostic types used
//! throughout the cache engine:
//! - Item and scope identifiers (integer or string scalars)
//! - 1-based pagination newtypes with validated construction
//! - Query descriptors and their canonical, pagination-independent keys
//!
//! Domain-specific record shapes (JSON entities, display normalization,
//! etc.) belong in `pagedex-model`, not here.

mod key;
mod page;
mod query;

pub use key::{ItemKey, Keyed, ScopeId};
pub use page::{Page, PerPage};
pub use query::{Query, QueryKey};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("page numbers are 1-based; zero is not a valid page")]
    ZeroPage,

    #[error("page size must be at least 1")]
    ZeroPerPage,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
