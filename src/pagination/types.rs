//! Pagination types and traits
//!
//! Defines the options, results and capability traits used by the driver.

use crate::error::{Error, Result};
use crate::response::PageResponse;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Page number used when no options are supplied
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none (or zero) is supplied
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Page request options
///
/// Fields missing from a deserialized document default to zero. A zero
/// `per_page` is replaced by [`DEFAULT_PER_PAGE`] before the first fetch, a
/// zero `page` is handed to the fetcher as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page number to request
    #[serde(default)]
    pub page: u32,
    /// Number of items per page
    #[serde(default)]
    pub per_page: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ListOptions {
    /// Create options for the given page and page size
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Resolve the options the first fetch is made with
    pub fn normalize(options: Option<Self>) -> Self {
        match options {
            None => Self::default(),
            Some(opts) if opts.per_page == 0 => Self {
                per_page: DEFAULT_PER_PAGE,
                ..opts
            },
            Some(opts) => opts,
        }
    }

    /// Copy of these options pointing at another page
    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }
}

/// One fetched page: its items plus the response metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page, in the order the backend returned them
    pub items: Vec<T>,
    /// Metadata returned with the page
    pub response: PageResponse,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, response: PageResponse) -> Self {
        Self { items, response }
    }
}

/// Outcome of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// Safe to fetch the next page
    Continue,
    /// Stop paginating (successfully) after the current page
    Stop,
}

impl RateLimitDecision {
    /// Check if we should continue
    pub fn should_continue(&self) -> bool {
        matches!(self, Self::Continue)
    }

    /// Check if we should stop
    pub fn should_stop(&self) -> bool {
        matches!(self, Self::Stop)
    }
}

impl From<bool> for RateLimitDecision {
    fn from(should_continue: bool) -> Self {
        if should_continue {
            Self::Continue
        } else {
            Self::Stop
        }
    }
}

/// Fetches a single page of items
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    /// Fetch the page described by `options`
    async fn fetch(&self, options: &ListOptions) -> Result<Page<T>>;
}

/// Processes items as they are fetched
#[async_trait]
pub trait ItemProcessor<T>: Send + Sync {
    /// Process one item
    async fn process(&self, item: &T) -> Result<()>;
}

/// Decides whether pagination may continue after a page
///
/// Implementations may wait internally (e.g. until a quota window resets)
/// before returning.
#[async_trait]
pub trait RateLimitPolicy: Send + Sync {
    /// Inspect the metadata of the page just fetched
    async fn check(&self, response: &PageResponse) -> Result<RateLimitDecision>;
}

/// Why a pagination run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The last page was reached
    LastPage,
    /// The rate limit policy asked to stop
    RateLimit,
    /// A capability failed or the run was cancelled
    Error,
}

/// Statistics from a pagination run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationStats {
    /// Pages successfully fetched
    pub pages_fetched: usize,
    /// Items accumulated
    pub items_fetched: usize,
    /// Items successfully processed
    pub items_processed: usize,
    /// Rate limit checks performed
    pub rate_limit_checks: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl PaginationStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched page with `items` items
    pub fn add_page(&mut self, items: usize) {
        self.pages_fetched += 1;
        self.items_fetched += items;
    }

    /// Record a processed item
    pub fn add_processed(&mut self) {
        self.items_processed += 1;
    }

    /// Record a rate limit check
    pub fn add_rate_limit_check(&mut self) {
        self.rate_limit_checks += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Everything a pagination run produced
///
/// `items` is valid even when `error` is set: it holds what was accumulated
/// before the failure.
#[derive(Debug)]
pub struct Paginated<T> {
    /// Accumulated items, in page order then item order
    pub items: Vec<T>,
    /// First error encountered, returned exactly as the capability reported it
    pub error: Option<Error>,
    /// Why the run ended
    pub stop_reason: StopReason,
    /// Run statistics
    pub stats: PaginationStats,
}

impl<T> Paginated<T> {
    /// Check if the run ended without an error
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Check if the run ended with an error
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Split into the accumulated items and the error, if any
    pub fn into_parts(self) -> (Vec<T>, Option<Error>) {
        (self.items, self.error)
    }

    /// Convert into a `Result`, dropping partial items on error
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.items),
        }
    }
}
