//! Building page metadata from HTTP response headers

use super::types::{PageResponse, Rate};
use chrono::DateTime;
use reqwest::header::HeaderMap;
use std::str::FromStr;
use tracing::debug;
use url::Url;

const LINK: &str = "link";
const RATE_LIMIT: &str = "x-ratelimit-limit";
const RATE_REMAINING: &str = "x-ratelimit-remaining";
const RATE_USED: &str = "x-ratelimit-used";
const RATE_RESET: &str = "x-ratelimit-reset";
const RATE_RESOURCE: &str = "x-ratelimit-resource";

/// A single `<url>; rel="..."` entry from a Link header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRel {
    /// Target URL
    pub url: String,
    /// Relation name (e.g. "next")
    pub rel: String,
}

/// Parse a Link header (RFC 5988) into its entries
///
/// Format: `<https://api.example.com/items?page=2>; rel="next", <...>; rel="last"`.
/// An entry with several space separated relations yields one [`LinkRel`] per
/// relation. Malformed entries are skipped.
pub fn parse_link_header(header: &str) -> Vec<LinkRel> {
    let mut links = Vec::new();

    for part in header.split(',') {
        let mut url = None;
        let mut rels = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                rels = Some(stripped.trim_matches('"').trim_matches('\''));
            }
        }

        if let (Some(u), Some(r)) = (url, rels) {
            for rel in r.split_whitespace() {
                links.push(LinkRel {
                    url: u.to_string(),
                    rel: rel.to_string(),
                });
            }
        }
    }

    links
}

/// Read the `page` query parameter of a link target
fn page_of(url: &str) -> u32 {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.query_pairs()
                .find(|(key, _)| key == "page")
                .and_then(|(_, value)| value.parse().ok())
        })
        .unwrap_or(0)
}

fn header_value<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}

fn parse_rate(headers: &HeaderMap) -> Option<Rate> {
    let limit = header_value::<u32>(headers, RATE_LIMIT)?;
    let remaining = header_value::<u32>(headers, RATE_REMAINING)?;
    let reset = header_value::<i64>(headers, RATE_RESET)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))?;

    let mut rate = Rate::new(limit, remaining, reset);
    if let Some(used) = header_value::<u32>(headers, RATE_USED) {
        rate.used = used;
    }
    rate.resource = header_value::<String>(headers, RATE_RESOURCE);
    Some(rate)
}

impl PageResponse {
    /// Build page metadata from an HTTP status and response headers
    ///
    /// Page numbers come from the `page` query parameter of the `next`,
    /// `prev`, `first` and `last` Link relations. Rate information is only
    /// attached when limit, remaining and reset are all present.
    pub fn from_headers(status: u16, headers: &HeaderMap) -> Self {
        let mut response = Self {
            status,
            rate: parse_rate(headers),
            ..Default::default()
        };

        if let Some(link) = headers.get(LINK).and_then(|v| v.to_str().ok()) {
            for entry in parse_link_header(link) {
                let page = page_of(&entry.url);
                match entry.rel.as_str() {
                    "next" => response.next_page = page,
                    "prev" => response.prev_page = page,
                    "first" => response.first_page = page,
                    "last" => response.last_page = page,
                    other => debug!(rel = other, "Ignoring unknown link relation"),
                }
            }
        }

        response
    }
}
