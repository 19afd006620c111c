//! Pagination module
//!
//! The page-fetch loop and the capability contracts it is driven by.
//!
//! # Overview
//!
//! Callers provide three capabilities:
//! - [`PageFetcher`] - fetches one page for the given [`ListOptions`]
//! - [`ItemProcessor`] - does something with every fetched item
//! - [`RateLimitPolicy`] - decides, after each page, whether to keep going
//!
//! [`paginate`] (or the [`Paginator`] builder) runs them in a strictly
//! sequential loop until the last page, a rate-limit stop, an error, or
//! cancellation, and returns everything accumulated along the way.

mod driver;
mod types;

pub use driver::{paginate, Paginator};
pub use types::{
    ItemProcessor, ListOptions, Page, PageFetcher, Paginated, PaginationStats, RateLimitDecision,
    RateLimitPolicy, StopReason, DEFAULT_PAGE, DEFAULT_PER_PAGE,
};
