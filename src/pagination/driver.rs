//! The pagination driver
//!
//! Fetch a page, accumulate it, process its items, ask the rate limit policy,
//! then either advance to the next page or stop.

use super::types::{
    ItemProcessor, ListOptions, PageFetcher, Paginated, PaginationStats, RateLimitPolicy,
    StopReason,
};
use crate::error::{Error, Result};
use std::future::Future;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Drives a single pagination run
///
/// Holds borrowed capabilities, so one `Paginator` can be run any number of
/// times. Each run starts from the configured options with an empty
/// accumulator.
pub struct Paginator<'a, T> {
    fetcher: &'a dyn PageFetcher<T>,
    processor: &'a dyn ItemProcessor<T>,
    rate_limit: &'a dyn RateLimitPolicy,
    options: Option<ListOptions>,
    cancel: Option<CancellationToken>,
}

impl<'a, T: Send + Sync> Paginator<'a, T> {
    /// Create a paginator with default options and no cancellation
    pub fn new(
        fetcher: &'a dyn PageFetcher<T>,
        processor: &'a dyn ItemProcessor<T>,
        rate_limit: &'a dyn RateLimitPolicy,
    ) -> Self {
        Self {
            fetcher,
            processor,
            rate_limit,
            options: None,
            cancel: None,
        }
    }

    /// Set the starting options
    #[must_use]
    pub fn with_options(mut self, options: ListOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Abort the run when `token` is cancelled
    ///
    /// The token is checked before every fetch and raced against every
    /// fetch, process and rate limit call.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run the pagination loop to completion
    pub async fn run(&self) -> Paginated<T> {
        let start = Instant::now();
        let mut items = Vec::new();
        let mut stats = PaginationStats::new();

        let (stop_reason, error) = match self.drive(&mut items, &mut stats).await {
            Ok(reason) => {
                info!(
                    pages = stats.pages_fetched,
                    items = items.len(),
                    reason = ?reason,
                    "Pagination complete"
                );
                (reason, None)
            }
            Err(e) => {
                if e.is_cancelled() {
                    warn!(items = items.len(), "Pagination cancelled");
                } else {
                    warn!(
                        error = %e,
                        pages = stats.pages_fetched,
                        items = items.len(),
                        "Pagination stopped on error"
                    );
                }
                (StopReason::Error, Some(e))
            }
        };

        stats.set_duration(start.elapsed().as_millis() as u64);

        Paginated {
            items,
            error,
            stop_reason,
            stats,
        }
    }

    async fn drive(&self, items: &mut Vec<T>, stats: &mut PaginationStats) -> Result<StopReason> {
        let mut options = ListOptions::normalize(self.options);

        loop {
            let page = self.guard(self.fetcher.fetch(&options)).await?;

            let count = page.items.len();
            stats.add_page(count);
            debug!(
                page = options.page,
                per_page = options.per_page,
                items = count,
                next_page = page.response.next_page,
                "Fetched page"
            );

            let first_new = items.len();
            items.extend(page.items);

            for item in &items[first_new..] {
                self.guard(self.processor.process(item)).await?;
                stats.add_processed();
            }

            stats.add_rate_limit_check();
            let decision = self.guard(self.rate_limit.check(&page.response)).await?;
            if decision.should_stop() {
                debug!(page = options.page, "Rate limit policy stopped pagination");
                return Ok(StopReason::RateLimit);
            }

            if !page.response.has_next() {
                return Ok(StopReason::LastPage);
            }

            options = options.with_page(page.response.next_page);
        }
    }

    /// Await a capability call, aborting if the run is cancelled first
    async fn guard<R>(&self, step: impl Future<Output = Result<R>>) -> Result<R> {
        let Some(token) = &self.cancel else {
            return step.await;
        };

        if token.is_cancelled() {
            return Err(Error::Cancelled);
        }

        tokio::select! {
            biased;
            () = token.cancelled() => Err(Error::Cancelled),
            result = step => result,
        }
    }
}

/// Paginate through a listing
///
/// Starts from `options` (page 1 with 100 items per page when `None`) and
/// returns every item fetched. When a capability fails the error is returned
/// next to the items accumulated up to that point.
pub async fn paginate<T: Send + Sync>(
    fetcher: &dyn PageFetcher<T>,
    processor: &dyn ItemProcessor<T>,
    rate_limit: &dyn RateLimitPolicy,
    options: Option<ListOptions>,
) -> Paginated<T> {
    Paginator {
        fetcher,
        processor,
        rate_limit,
        options,
        cancel: None,
    }
    .run()
    .await
}
