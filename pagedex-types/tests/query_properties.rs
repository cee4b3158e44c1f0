//! Property-based tests for query canonicalization.
//!
//! The canonical key must be a pure function of the selection parameters:
//! insertion order, pagination position and null-valued parameters never
//! influence it, and the serialized form is always a name-sorted pair
//! array.

use pagedex_types::{Page, PerPage, Query, QueryKey};
use proptest::prelude::*;
use serde_json::Value;

fn param_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_]{1,8}").unwrap()
}

fn param_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z0-9 ]{0,12}").unwrap().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

fn params() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::vec((param_name(), param_value()), 0..6)
}

fn build_query(params: &[(String, Value)]) -> Query {
    let mut query = Query::new();
    for (name, value) in params {
        query = query.param(name.clone(), value.clone());
    }
    query
}

proptest! {
    /// Pagination never influences the canonical key.
    #[test]
    fn key_ignores_pagination(params in params(), page in 1u32..500, per_page in 1u32..100) {
        let bare = build_query(&params);
        let paged = build_query(&params)
            .with_page(Page::new(page).unwrap())
            .with_per_page(PerPage::new(per_page).unwrap());

        prop_assert_eq!(QueryKey::canonical(&bare), QueryKey::canonical(&paged));
    }

    /// Canonicalization is deterministic.
    #[test]
    fn key_is_deterministic(params in params()) {
        let query = build_query(&params);
        prop_assert_eq!(QueryKey::canonical(&query), QueryKey::canonical(&query));
    }

    /// Insertion order never influences the canonical key.
    #[test]
    fn key_ignores_insertion_order(params in params()) {
        let forward = build_query(&params);
        let mut reversed_params = params.clone();
        reversed_params.reverse();
        let reversed = build_query(&reversed_params);

        prop_assert_eq!(QueryKey::canonical(&forward), QueryKey::canonical(&reversed));
    }

    /// Null-valued parameters are indistinguishable from absent ones.
    #[test]
    fn key_ignores_null_parameters(params in params(), name in param_name()) {
        let without = build_query(&params);
        let mut with_null = build_query(&params);
        if with_null.get_param(&name).is_none() {
            with_null = with_null.param(name, Value::Null);
            prop_assert_eq!(QueryKey::canonical(&without), QueryKey::canonical(&with_null));
        }
    }

    /// The canonical form is a JSON array of [name, value] pairs with
    /// names in sorted order.
    #[test]
    fn key_is_sorted_pair_array(params in params()) {
        let query = build_query(&params);
        let key = QueryKey::canonical(&query);

        let parsed: Vec<(String, Value)> = serde_json::from_str(key.as_str()).unwrap();
        let names: Vec<&String> = parsed.iter().map(|(name, _)| name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(names, sorted);
    }
}
