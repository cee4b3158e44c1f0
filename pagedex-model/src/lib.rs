//! Entity model for Pagedex collections.
//!
//! The cache core is generic and never interprets a record beyond its
//! key. This crate provides the concrete shape remote collections
//! actually deliver:
//! - [`Entity`] — a JSON-backed record addressed by a stable key
//! - [`CollectionHandler`] — optional per-collection validation and
//!   post-read normalization, applied at the read boundary
//!
//! Domain-specific rules (entity decoding, image extraction, tier
//! filtering) belong in a handler implementation, never in the cache.

mod entity;
mod handler;

pub use entity::Entity;
pub use handler::CollectionHandler;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building entities from raw payloads.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("record payload has no '{0}' identifier field")]
    MissingKey(String),

    #[error("identifier field '{0}' is not an integer or string scalar")]
    InvalidKey(String),
}
