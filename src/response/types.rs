//! Response metadata types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rate limit status reported by the backend alongside a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// Requests allowed per window
    pub limit: u32,
    /// Requests left in the current window
    pub remaining: u32,
    /// Requests already spent in the current window
    pub used: u32,
    /// When the current window resets
    pub reset: DateTime<Utc>,
    /// Quota bucket the request was counted against (e.g. "core", "search")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

impl Rate {
    /// Create a rate with the given limit, remaining count and reset time
    pub fn new(limit: u32, remaining: u32, reset: DateTime<Utc>) -> Self {
        Self {
            limit,
            remaining,
            used: limit.saturating_sub(remaining),
            reset,
            resource: None,
        }
    }

    /// True when no requests are left in the current window
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Time left until the window resets, zero if it already has
    pub fn reset_in(&self, now: DateTime<Utc>) -> Duration {
        (self.reset - now).to_std().unwrap_or(Duration::ZERO)
    }
}

/// Metadata returned with each page
///
/// Page numbers of zero mean "not present". A `next_page` of zero marks the
/// last page of the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    /// HTTP status of the page request (0 when not known)
    #[serde(default)]
    pub status: u16,
    /// Page number of the next page
    #[serde(default)]
    pub next_page: u32,
    /// Page number of the previous page
    #[serde(default)]
    pub prev_page: u32,
    /// Page number of the first page
    #[serde(default)]
    pub first_page: u32,
    /// Page number of the last page
    #[serde(default)]
    pub last_page: u32,
    /// Rate limit status, if the backend reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,
}

impl PageResponse {
    /// Metadata for a final page (no next page)
    pub fn last() -> Self {
        Self::default()
    }

    /// Metadata pointing at the given next page
    pub fn with_next(next_page: u32) -> Self {
        Self {
            next_page,
            ..Default::default()
        }
    }

    /// Attach rate limit status
    #[must_use]
    pub fn with_rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Set the HTTP status
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Check if more pages are available
    pub fn has_next(&self) -> bool {
        self.next_page != 0
    }
}
