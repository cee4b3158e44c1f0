use pagedex_types::ItemKey;
use std::collections::HashSet;

// ── ItemKey ──────────────────────────────────────────────────────

#[test]
fn int_key_accessors() {
    let key = ItemKey::from(841);
    assert_eq!(key.as_int(), Some(841));
    assert_eq!(key.as_str(), None);
}

#[test]
fn str_key_accessors() {
    let key = ItemKey::from("twentysixteen");
    assert_eq!(key.as_str(), Some("twentysixteen"));
    assert_eq!(key.as_int(), None);
}

#[test]
fn display_formats_both_forms() {
    assert_eq!(ItemKey::from(1204).to_string(), "1204");
    assert_eq!(ItemKey::from("hello").to_string(), "hello");
}

#[test]
fn int_and_str_keys_are_distinct() {
    assert_ne!(ItemKey::from(1), ItemKey::from("1"));
}

#[test]
fn keys_hash_and_dedupe() {
    let mut set = HashSet::new();
    set.insert(ItemKey::from(841));
    set.insert(ItemKey::from(841));
    set.insert(ItemKey::from("841"));
    assert_eq!(set.len(), 2);
}

#[test]
fn serde_int_key_is_plain_number() {
    let json = serde_json::to_string(&ItemKey::from(841)).unwrap();
    assert_eq!(json, "841");
    let parsed: ItemKey = serde_json::from_str("841").unwrap();
    assert_eq!(parsed, ItemKey::from(841));
}

#[test]
fn serde_str_key_is_plain_string() {
    let json = serde_json::to_string(&ItemKey::from("mood")).unwrap();
    assert_eq!(json, "\"mood\"");
    let parsed: ItemKey = serde_json::from_str("\"mood\"").unwrap();
    assert_eq!(parsed, ItemKey::from("mood"));
}

// ── ScopeId ──────────────────────────────────────────────────────

#[test]
fn scope_id_roundtrip() {
    let scope = pagedex_types::ScopeId::new(2_916_284);
    assert_eq!(scope.get(), 2_916_284);
    assert_eq!(scope.to_string(), "2916284");
}

#[test]
fn scope_id_from_u64() {
    let scope: pagedex_types::ScopeId = 7u64.into();
    assert_eq!(scope.get(), 7);
}
