use crate::Entity;

/// Optional trait for collections that need validation or post-read
/// normalization beyond raw caching.
///
/// Most collections do NOT need to implement this — the generic cache
/// stores and paginates records untouched.
///
/// Only implement this if the domain needs:
/// - Admission checks before a record enters the store
/// - Display normalization after retrieval (HTML entity decoding,
///   canonical image extraction), applied at the read boundary
pub trait CollectionHandler: Send + Sync {
    /// Validate a record before it is merged into a cache.
    /// Return `Err(message)` to reject the write.
    fn validate(&self, entity: &Entity) -> Result<(), String> {
        let _ = entity;
        Ok(())
    }

    /// Called on each record after it is read from a cache, before it
    /// reaches the UI. Use this for computing derived/display fields.
    fn on_after_read(&self, entity: &mut Entity) {
        let _ = entity;
    }

    /// Clone-and-normalize convenience for read-boundary decoration
    /// (e.g. a paged view's per-item mapping hook).
    #[must_use]
    fn decorated(&self, entity: &Entity) -> Entity {
        let mut copy = entity.clone();
        self.on_after_read(&mut copy);
        copy
    }
}
