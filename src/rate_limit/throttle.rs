//! Client-side throttling
//!
//! Uses the governor crate for token bucket rate limiting.

use crate::error::{Error, Result};
use crate::pagination::{RateLimitDecision, RateLimitPolicy};
use crate::response::PageResponse;
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for throttling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleConfig {
    /// Maximum number of pages per second
    pub requests_per_second: u32,
    /// Burst size (max tokens in bucket)
    pub burst_size: u32,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 10,
            burst_size: 10,
        }
    }
}

impl ThrottleConfig {
    /// Create a new throttle config
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }
}

/// Token bucket policy: waits for a permit after every page, then continues
#[derive(Clone)]
pub struct Throttle {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl Throttle {
    /// Create a throttle from config; both rates must be non-zero
    pub fn new(config: &ThrottleConfig) -> Result<Self> {
        let rate = NonZeroU32::new(config.requests_per_second)
            .ok_or_else(|| Error::invalid_value("requests_per_second", "must be non-zero"))?;
        let burst = NonZeroU32::new(config.burst_size)
            .ok_or_else(|| Error::invalid_value("burst_size", "must be non-zero"))?;

        let quota = Quota::per_second(rate).allow_burst(burst);
        Ok(Self {
            limiter: Arc::new(Governor::direct(quota)),
        })
    }

    /// Wait until the next page may be fetched
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Try to acquire a permit, returning immediately
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }

    /// Wait with a timeout
    pub async fn wait_with_timeout(&self, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, self.limiter.until_ready())
            .await
            .is_ok()
    }
}

#[async_trait]
impl RateLimitPolicy for Throttle {
    async fn check(&self, _response: &PageResponse) -> Result<RateLimitDecision> {
        self.wait().await;
        Ok(RateLimitDecision::Continue)
    }
}

impl std::fmt::Debug for Throttle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle").finish()
    }
}
