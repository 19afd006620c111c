//! Quota-driven rate limit policies

use crate::error::{Error, Result};
use crate::pagination::{RateLimitDecision, RateLimitPolicy};
use crate::response::PageResponse;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, warn};

/// Policy that always continues
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysContinue;

#[async_trait]
impl RateLimitPolicy for AlwaysContinue {
    async fn check(&self, _response: &PageResponse) -> Result<RateLimitDecision> {
        Ok(RateLimitDecision::Continue)
    }
}

/// Stops pagination once the remaining quota drops to `min_remaining`
///
/// Pages without rate information never stop the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopWhenExhausted {
    /// Stop when this many requests or fewer are left
    pub min_remaining: u32,
}

impl StopWhenExhausted {
    /// Create the policy
    pub fn new(min_remaining: u32) -> Self {
        Self { min_remaining }
    }
}

#[async_trait]
impl RateLimitPolicy for StopWhenExhausted {
    async fn check(&self, response: &PageResponse) -> Result<RateLimitDecision> {
        match &response.rate {
            Some(rate) if rate.remaining <= self.min_remaining => {
                debug!(
                    remaining = rate.remaining,
                    reset = %rate.reset,
                    "Quota exhausted, stopping"
                );
                Ok(RateLimitDecision::Stop)
            }
            _ => Ok(RateLimitDecision::Continue),
        }
    }
}

/// Waits for the quota window to reset once it runs low
///
/// If the reset is further away than `max_wait`, the check fails with
/// [`Error::RateLimited`] instead of sleeping.
#[derive(Debug, Clone, Copy)]
pub struct WaitForReset {
    /// Wait when this many requests or fewer are left
    pub min_remaining: u32,
    /// Longest acceptable wait
    pub max_wait: Duration,
}

impl Default for WaitForReset {
    fn default() -> Self {
        Self {
            min_remaining: 0,
            max_wait: Duration::from_secs(3600),
        }
    }
}

impl WaitForReset {
    /// Create the policy
    pub fn new(min_remaining: u32, max_wait: Duration) -> Self {
        Self {
            min_remaining,
            max_wait,
        }
    }
}

#[async_trait]
impl RateLimitPolicy for WaitForReset {
    async fn check(&self, response: &PageResponse) -> Result<RateLimitDecision> {
        let Some(rate) = &response.rate else {
            return Ok(RateLimitDecision::Continue);
        };
        if rate.remaining > self.min_remaining {
            return Ok(RateLimitDecision::Continue);
        }

        let wait = rate.reset_in(Utc::now());
        if wait > self.max_wait {
            return Err(Error::RateLimited {
                retry_after_seconds: wait.as_secs_f64().ceil() as u64,
            });
        }

        if !wait.is_zero() {
            warn!(
                remaining = rate.remaining,
                wait_ms = wait.as_millis() as u64,
                "Quota low, waiting for reset"
            );
            tokio::time::sleep(wait).await;
        }
        Ok(RateLimitDecision::Continue)
    }
}
