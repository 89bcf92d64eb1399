//! Tests for the locator module

use super::*;
use crate::types::{EndpointHint, EndpointKind, FilterSortConfig, SortKey};
use pretty_assertions::assert_eq;
use test_case::test_case;
use url::Url;

fn strategy() -> LocatorStrategy {
    LocatorStrategy::new("octocat", 6)
}

fn query_pairs(locator: &PageLocator) -> Vec<(String, String)> {
    Url::parse(locator.as_str())
        .unwrap()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn query_value(locator: &PageLocator, key: &str) -> Option<String> {
    query_pairs(locator)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_locator_is_deterministic() {
    let strategy = strategy();
    let plain = FilterSortConfig::new();
    let filtered = FilterSortConfig::new()
        .with_language("Rust")
        .with_sort(SortKey::StarsDesc);

    for config in [&plain, &filtered] {
        for index in 0..4 {
            assert_eq!(
                strategy.locator(index, config),
                strategy.locator(index, config)
            );
        }
    }
}

#[test]
fn test_language_insertion_order_does_not_change_locator() {
    let strategy = strategy();
    let a = FilterSortConfig::new()
        .with_language("Go")
        .with_language("Rust");
    let b = FilterSortConfig::new()
        .with_language("Rust")
        .with_language("Go");
    assert_eq!(strategy.locator(0, &a), strategy.locator(0, &b));
}

// ============================================================================
// Endpoint selection
// ============================================================================

#[test]
fn test_plain_config_uses_list_endpoint() {
    let locator = strategy().locator(0, &FilterSortConfig::new());
    assert_eq!(locator.endpoint(), EndpointKind::List);
    assert!(locator
        .as_str()
        .starts_with("https://api.github.com/users/octocat/repos?"));
}

#[test]
fn test_language_filter_selects_search_endpoint() {
    let config = FilterSortConfig::new().with_language("Go");
    let locator = strategy().locator(0, &config);
    assert_eq!(locator.endpoint(), EndpointKind::Search);
    assert!(locator
        .as_str()
        .starts_with("https://api.github.com/search/repositories?"));
}

#[test]
fn test_star_sort_selects_search_endpoint() {
    let config = FilterSortConfig::new().with_sort(SortKey::StarsDesc);
    let locator = strategy().locator(0, &config);
    assert_eq!(locator.endpoint(), EndpointKind::Search);
}

#[test]
fn test_hint_overrides_policy() {
    let forced_search = FilterSortConfig::new().with_endpoint_hint(EndpointHint::Search);
    assert_eq!(
        strategy().locator(0, &forced_search).endpoint(),
        EndpointKind::Search
    );

    let forced_list = FilterSortConfig::new()
        .with_sort(SortKey::StarsDesc)
        .with_endpoint_hint(EndpointHint::List);
    let locator = strategy().locator(0, &forced_list);
    assert_eq!(locator.endpoint(), EndpointKind::List);
    // Star sort has no list-endpoint encoding; falls back to updated/desc.
    assert_eq!(query_value(&locator, "sort").as_deref(), Some("updated"));
    assert_eq!(query_value(&locator, "direction").as_deref(), Some("desc"));
}

// ============================================================================
// Sort mapping
// ============================================================================

#[test_case(SortKey::UpdatedDesc, "updated", "desc"; "updated desc")]
#[test_case(SortKey::UpdatedAsc, "updated", "asc"; "updated asc")]
#[test_case(SortKey::NameAsc, "full_name", "asc"; "name asc")]
fn test_list_sort_mapping(sort: SortKey, expected_sort: &str, expected_direction: &str) {
    let config = FilterSortConfig::new().with_sort(sort);
    let locator = strategy().locator(0, &config);
    assert_eq!(locator.endpoint(), EndpointKind::List);
    assert_eq!(query_value(&locator, "sort").as_deref(), Some(expected_sort));
    assert_eq!(
        query_value(&locator, "direction").as_deref(),
        Some(expected_direction)
    );
}

#[test_case(SortKey::UpdatedDesc, "updated", "desc"; "updated desc")]
#[test_case(SortKey::UpdatedAsc, "updated", "asc"; "updated asc")]
#[test_case(SortKey::StarsDesc, "stars", "desc"; "stars desc")]
fn test_search_sort_mapping(sort: SortKey, expected_sort: &str, expected_order: &str) {
    let config = FilterSortConfig::new().with_language("Rust").with_sort(sort);
    let locator = strategy().locator(0, &config);
    assert_eq!(locator.endpoint(), EndpointKind::Search);
    assert_eq!(query_value(&locator, "sort").as_deref(), Some(expected_sort));
    assert_eq!(query_value(&locator, "order").as_deref(), Some(expected_order));
}

#[test]
fn test_search_name_sort_omits_sort_param() {
    let config = FilterSortConfig::new()
        .with_language("Rust")
        .with_sort(SortKey::NameAsc);
    let locator = strategy().locator(0, &config);
    assert_eq!(locator.endpoint(), EndpointKind::Search);
    assert_eq!(query_value(&locator, "sort"), None);
    assert_eq!(query_value(&locator, "order"), None);
}

// ============================================================================
// Query encoding
// ============================================================================

#[test]
fn test_page_index_translates_to_one_based() {
    let strategy = strategy();
    let config = FilterSortConfig::new();
    assert_eq!(
        query_value(&strategy.locator(0, &config), "page").as_deref(),
        Some("1")
    );
    assert_eq!(
        query_value(&strategy.locator(2, &config), "page").as_deref(),
        Some("3")
    );
}

#[test]
fn test_page_size_is_appended() {
    let locator = strategy().locator(0, &FilterSortConfig::new());
    assert_eq!(query_value(&locator, "per_page").as_deref(), Some("6"));
}

#[test]
fn test_languages_encode_as_conjunctive_qualifiers() {
    let config = FilterSortConfig::new()
        .with_language("Rust")
        .with_language("Go");
    let locator = strategy().locator(0, &config);
    // BTreeSet order: Go before Rust.
    assert_eq!(
        query_value(&locator, "q").as_deref(),
        Some("user:octocat language:Go language:Rust")
    );
}

#[test]
fn test_search_page_size_is_clamped_to_remote_ceiling() {
    let strategy = LocatorStrategy::new("octocat", 150);
    let config = FilterSortConfig::new().with_language("Go");
    let locator = strategy.locator(0, &config);
    assert_eq!(query_value(&locator, "per_page").as_deref(), Some("100"));

    // The list endpoint takes the configured size as-is.
    let locator = strategy.locator(0, &FilterSortConfig::new());
    assert_eq!(query_value(&locator, "per_page").as_deref(), Some("150"));
}

#[test]
fn test_base_url_override() {
    let strategy = LocatorStrategy::new("octocat", 6).with_base_url("http://127.0.0.1:9999/");
    let locator = strategy.locator(0, &FilterSortConfig::new());
    assert!(locator
        .as_str()
        .starts_with("http://127.0.0.1:9999/users/octocat/repos?"));
}
