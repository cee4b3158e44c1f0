mod common;

use common::{Rec, rec};
use pagedex_cache::{CacheRegistry, RequestTracker};
use pagedex_types::{ItemKey, Query, QueryKey, ScopeId};
use serde_json::json;
use std::collections::BTreeMap;

const SITE_A: ScopeId = ScopeId::new(2_916_284);
const SITE_B: ScopeId = ScopeId::new(77_203_074);

// ── Scope lifecycle ──────────────────────────────────────────────

#[test]
fn empty_registry_has_no_scopes() {
    let registry: CacheRegistry<Rec> = CacheRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.scope(SITE_A).is_none());
}

#[test]
fn first_merge_creates_the_scope_cache() {
    let mut registry = CacheRegistry::new();
    registry.receive(SITE_A, &[rec(841, "Hello World")]);

    assert_eq!(registry.len(), 1);
    let cache = registry.scope(SITE_A).unwrap();
    assert_eq!(cache.item(&ItemKey::from(841)), Some(&rec(841, "Hello World")));
}

#[test]
fn scopes_share_nothing() {
    let mut registry = CacheRegistry::new();
    let query = Query::new().param("search", "Hello");
    registry.receive_page(SITE_A, &[rec(841, "Hello A")], &query, Some(1));
    registry.receive_page(SITE_B, &[rec(120, "Steak & Eggs")], &query, Some(1));

    assert_eq!(
        registry.scope(SITE_A).unwrap().items_for(&query),
        Some(vec![&rec(841, "Hello A")])
    );
    assert_eq!(
        registry.scope(SITE_B).unwrap().items_for(&query),
        Some(vec![&rec(120, "Steak & Eggs")])
    );
    assert!(registry.scope(SITE_A).unwrap().item(&ItemKey::from(120)).is_none());
}

#[test]
fn reset_discards_one_scope_wholesale() {
    let mut registry = CacheRegistry::new();
    let query = Query::new().param("search", "Hello");
    registry.receive_page(SITE_A, &[rec(841, "a")], &query, Some(1));
    registry.receive_page(SITE_B, &[rec(120, "b")], &query, Some(1));

    assert!(registry.reset(SITE_A));
    assert!(registry.scope(SITE_A).is_none());
    assert!(registry.scope(SITE_B).is_some());
    assert!(!registry.reset(SITE_A));
}

#[test]
fn clear_discards_everything() {
    let mut registry = CacheRegistry::new();
    registry.receive(SITE_A, &[rec(1, "a")]);
    registry.receive(SITE_B, &[rec(2, "b")]);
    registry.clear();
    assert!(registry.is_empty());
}

#[test]
fn registry_defaults_flow_into_scope_caches() {
    let mut defaults = BTreeMap::new();
    defaults.insert("tier".to_string(), json!("all"));
    let mut registry = CacheRegistry::with_defaults(defaults);

    let explicit = Query::new().param("search", "mood").param("tier", "all");
    let implicit = Query::new().param("search", "mood");
    registry.receive_page(SITE_A, &[rec(7, "Mood")], &explicit, Some(1));

    assert_eq!(
        registry.scope(SITE_A).unwrap().items_for(&implicit),
        Some(vec![&rec(7, "Mood")])
    );
}

// ── Request tracking ─────────────────────────────────────────────

#[test]
fn query_requests_are_tracked_per_scope() {
    let mut tracker = RequestTracker::new();
    let key = QueryKey::canonical(&Query::new().param("search", "Hello"));

    assert!(tracker.begin_query(SITE_A, key.clone()));
    assert!(tracker.is_requesting_query(SITE_A, &key));
    assert!(!tracker.is_requesting_query(SITE_B, &key));

    assert!(tracker.finish_query(SITE_A, &key));
    assert!(!tracker.is_requesting_query(SITE_A, &key));
    assert!(tracker.is_idle());
}

#[test]
fn duplicate_begin_is_reported() {
    let mut tracker = RequestTracker::new();
    let key = QueryKey::canonical(&Query::new().param("search", "Hello"));

    assert!(tracker.begin_query(SITE_A, key.clone()));
    assert!(!tracker.begin_query(SITE_A, key.clone()));
}

#[test]
fn item_requests_are_tracked_independently_of_queries() {
    let mut tracker = RequestTracker::new();
    let item = ItemKey::from(841);

    assert!(tracker.begin_item(SITE_A, item.clone()));
    assert!(tracker.is_requesting_item(SITE_A, &item));
    assert!(!tracker.is_requesting_item(SITE_B, &item));
    assert!(tracker.finish_item(SITE_A, &item));
    assert!(!tracker.finish_item(SITE_A, &item));
}

#[test]
fn clear_scope_drops_only_that_scopes_requests() {
    let mut tracker = RequestTracker::new();
    let key = QueryKey::canonical(&Query::new().param("search", "Hello"));
    tracker.begin_query(SITE_A, key.clone());
    tracker.begin_query(SITE_B, key.clone());
    tracker.begin_item(SITE_A, ItemKey::from(1));

    tracker.clear_scope(SITE_A);
    assert!(!tracker.is_requesting_query(SITE_A, &key));
    assert!(tracker.is_requesting_query(SITE_B, &key));
}
