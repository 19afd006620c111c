//! Tests for response module

use super::*;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, HeaderValue::from_str(value).unwrap());
    }
    map
}

// ============================================================================
// Link Header Tests
// ============================================================================

#[test]
fn test_parse_link_header() {
    let header = r#"<https://api.example.com/items?page=2>; rel="next", <https://api.example.com/items?page=5>; rel="last""#;
    let links = parse_link_header(header);

    assert_eq!(
        links,
        vec![
            LinkRel {
                url: "https://api.example.com/items?page=2".to_string(),
                rel: "next".to_string(),
            },
            LinkRel {
                url: "https://api.example.com/items?page=5".to_string(),
                rel: "last".to_string(),
            },
        ]
    );
}

#[test]
fn test_parse_link_header_multiple_rels() {
    let links = parse_link_header(r#"<https://x.test/?page=3>; rel="next last""#);
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].rel, "next");
    assert_eq!(links[1].rel, "last");
}

#[test]
fn test_parse_link_header_skips_malformed() {
    let links = parse_link_header(r#"https://x.test/?page=3; rel="next", <https://x.test/?page=9>"#);
    assert!(links.is_empty());
}

// ============================================================================
// PageResponse::from_headers Tests
// ============================================================================

#[test]
fn test_from_headers_pages() {
    let map = headers(&[(
        "link",
        r#"<https://api.github.com/user/repos?page=3&per_page=2>; rel="next", <https://api.github.com/user/repos?page=1&per_page=2>; rel="prev", <https://api.github.com/user/repos?page=1&per_page=2>; rel="first", <https://api.github.com/user/repos?page=7&per_page=2>; rel="last""#,
    )]);

    let response = PageResponse::from_headers(200, &map);
    assert_eq!(response.status, 200);
    assert_eq!(response.next_page, 3);
    assert_eq!(response.prev_page, 1);
    assert_eq!(response.first_page, 1);
    assert_eq!(response.last_page, 7);
    assert!(response.has_next());
    assert!(response.rate.is_none());
}

#[test]
fn test_from_headers_last_page() {
    let map = headers(&[(
        "link",
        r#"<https://api.example.com/items?page=2>; rel="prev", <https://api.example.com/items?page=1>; rel="first""#,
    )]);

    let response = PageResponse::from_headers(200, &map);
    assert_eq!(response.next_page, 0);
    assert_eq!(response.prev_page, 2);
    assert!(!response.has_next());
}

#[test]
fn test_from_headers_without_page_param() {
    let map = headers(&[(
        "link",
        r#"<https://api.example.com/items?cursor=abc>; rel="next""#,
    )]);

    let response = PageResponse::from_headers(200, &map);
    assert_eq!(response.next_page, 0);
}

#[test]
fn test_from_headers_rate() {
    let map = headers(&[
        ("x-ratelimit-limit", "5000"),
        ("x-ratelimit-remaining", "4990"),
        ("x-ratelimit-used", "10"),
        ("x-ratelimit-reset", "1700000000"),
        ("x-ratelimit-resource", "core"),
    ]);

    let response = PageResponse::from_headers(200, &map);
    let rate = response.rate.expect("rate should be parsed");
    assert_eq!(rate.limit, 5000);
    assert_eq!(rate.remaining, 4990);
    assert_eq!(rate.used, 10);
    assert_eq!(rate.reset, Utc.timestamp_opt(1_700_000_000, 0).unwrap());
    assert_eq!(rate.resource.as_deref(), Some("core"));
}

#[test]
fn test_from_headers_incomplete_rate() {
    let map = headers(&[
        ("x-ratelimit-limit", "60"),
        ("x-ratelimit-remaining", "not-a-number"),
        ("x-ratelimit-reset", "1700000000"),
    ]);

    let response = PageResponse::from_headers(403, &map);
    assert_eq!(response.status, 403);
    assert!(response.rate.is_none());
}

#[test]
fn test_from_headers_empty() {
    let response = PageResponse::from_headers(200, &HeaderMap::new());
    assert_eq!(response, PageResponse::last().with_status(200));
}

// ============================================================================
// Rate Tests
// ============================================================================

#[test]
fn test_rate_new_computes_used() {
    let rate = Rate::new(60, 15, Utc::now());
    assert_eq!(rate.used, 45);
    assert!(!rate.is_exhausted());

    let rate = Rate::new(60, 0, Utc::now());
    assert!(rate.is_exhausted());
}

#[test]
fn test_rate_reset_in() {
    let now = Utc.timestamp_opt(1_000, 0).unwrap();

    let rate = Rate::new(10, 0, Utc.timestamp_opt(1_030, 0).unwrap());
    assert_eq!(rate.reset_in(now), Duration::from_secs(30));

    let rate = Rate::new(10, 0, Utc.timestamp_opt(990, 0).unwrap());
    assert_eq!(rate.reset_in(now), Duration::ZERO);
}

#[test]
fn test_page_response_builders() {
    let response = PageResponse::with_next(4).with_status(200);
    assert_eq!(response.next_page, 4);
    assert_eq!(response.status, 200);
    assert!(response.has_next());
    assert!(!PageResponse::last().has_next());
}
