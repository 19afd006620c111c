//! # pagewalk
//!
//! A generic pagination driver for paged list APIs.
//!
//! Fetching every page of a listing is always the same loop: request a page,
//! keep its items, do something with each one, check the rate limit, follow
//! the next-page pointer. pagewalk owns that loop; callers supply the three
//! pieces that differ between APIs.
//!
//! ## Features
//!
//! - **Pluggable capabilities**: fetch, per-item processing and rate limit policy are traits
//! - **Partial results**: items fetched before a failure are always returned
//! - **Rate limit policies**: stop on exhaustion, wait for reset, token bucket throttle
//! - **Header parsing**: `Link` and `X-RateLimit-*` headers into page metadata
//! - **Cancellation**: abort long runs with a `CancellationToken`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagewalk::process::Skip;
//! use pagewalk::rate_limit::StopWhenExhausted;
//! use pagewalk::{paginate, ListOptions};
//!
//! let result = paginate(&repo_fetcher, &Skip, &StopWhenExhausted::new(10), Some(ListOptions::new(1, 50))).await;
//! for repo in &result.items {
//!     println!("{}", repo.name);
//! }
//! if let Some(e) = result.error {
//!     eprintln!("stopped early: {e}");
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       Paginator                           │
//! │  fetch(options) → items → process(item)… → check(meta)    │
//! │        ▲                                        │         │
//! │        └──────────── options.with_page(next) ◄──┘         │
//! └───────────────────────────────────────────────────────────┘
//!        │                  │                      │
//!   PageFetcher       ItemProcessor          RateLimitPolicy
//!   (caller)          Skip, ProcessWith      AlwaysContinue, StopWhenExhausted,
//!                                            WaitForReset, Throttle
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// The pagination driver and capability traits
pub mod pagination;

/// Page response metadata
pub mod response;

/// Rate limit policies
pub mod rate_limit;

/// Item processors
pub mod process;

/// Configuration loading
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pagination::{
    paginate, ItemProcessor, ListOptions, Page, PageFetcher, Paginated, PaginationStats,
    Paginator, RateLimitDecision, RateLimitPolicy, StopReason,
};
pub use response::{PageResponse, Rate};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
