//! Tests for rate limit policies

use super::*;
use crate::error::Error;
use crate::pagination::{RateLimitDecision, RateLimitPolicy};
use crate::response::{PageResponse, Rate};
use chrono::{Duration as ChronoDuration, Utc};
use std::time::{Duration, Instant};

fn page_with(remaining: u32, reset_in: ChronoDuration) -> PageResponse {
    PageResponse::with_next(2).with_rate(Rate::new(60, remaining, Utc::now() + reset_in))
}

// ============================================================================
// AlwaysContinue Tests
// ============================================================================

#[tokio::test]
async fn test_always_continue() {
    let decision = AlwaysContinue.check(&PageResponse::last()).await.unwrap();
    assert_eq!(decision, RateLimitDecision::Continue);

    let decision = AlwaysContinue
        .check(&page_with(0, ChronoDuration::hours(1)))
        .await
        .unwrap();
    assert_eq!(decision, RateLimitDecision::Continue);
}

// ============================================================================
// StopWhenExhausted Tests
// ============================================================================

#[tokio::test]
async fn test_stop_when_exhausted() {
    let policy = StopWhenExhausted::default();

    let decision = policy
        .check(&page_with(0, ChronoDuration::minutes(5)))
        .await
        .unwrap();
    assert!(decision.should_stop());

    let decision = policy
        .check(&page_with(1, ChronoDuration::minutes(5)))
        .await
        .unwrap();
    assert!(decision.should_continue());
}

#[tokio::test]
async fn test_stop_when_exhausted_threshold() {
    let policy = StopWhenExhausted::new(10);

    let decision = policy
        .check(&page_with(10, ChronoDuration::minutes(5)))
        .await
        .unwrap();
    assert!(decision.should_stop());

    let decision = policy
        .check(&page_with(11, ChronoDuration::minutes(5)))
        .await
        .unwrap();
    assert!(decision.should_continue());
}

#[tokio::test]
async fn test_stop_when_exhausted_without_rate() {
    let decision = StopWhenExhausted::new(100)
        .check(&PageResponse::with_next(3))
        .await
        .unwrap();
    assert!(decision.should_continue());
}

// ============================================================================
// WaitForReset Tests
// ============================================================================

#[tokio::test]
async fn test_wait_for_reset_plenty_left() {
    let policy = WaitForReset::new(0, Duration::from_millis(1));
    let decision = policy
        .check(&page_with(30, ChronoDuration::hours(1)))
        .await
        .unwrap();
    assert!(decision.should_continue());
}

#[tokio::test]
async fn test_wait_for_reset_already_reset() {
    let policy = WaitForReset::new(0, Duration::from_millis(1));
    let start = Instant::now();

    let decision = policy
        .check(&page_with(0, ChronoDuration::seconds(-10)))
        .await
        .unwrap();

    assert!(decision.should_continue());
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_wait_for_reset_sleeps_until_reset() {
    let policy = WaitForReset::new(0, Duration::from_secs(5));
    let start = Instant::now();

    let decision = policy
        .check(&page_with(0, ChronoDuration::milliseconds(200)))
        .await
        .unwrap();

    assert!(decision.should_continue());
    assert!(start.elapsed() >= Duration::from_millis(100));
}

#[tokio::test]
async fn test_wait_for_reset_too_long() {
    let policy = WaitForReset::new(0, Duration::from_secs(60));

    let err = policy
        .check(&page_with(0, ChronoDuration::minutes(30)))
        .await
        .unwrap_err();

    match err {
        Error::RateLimited {
            retry_after_seconds,
        } => {
            assert!(retry_after_seconds > 60);
            assert!(retry_after_seconds <= 30 * 60);
        }
        other => panic!("Expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wait_for_reset_without_rate() {
    let decision = WaitForReset::default()
        .check(&PageResponse::with_next(2))
        .await
        .unwrap();
    assert!(decision.should_continue());
}

// ============================================================================
// Throttle Tests
// ============================================================================

#[test]
fn test_throttle_config_default() {
    let config = ThrottleConfig::default();
    assert_eq!(config.requests_per_second, 10);
    assert_eq!(config.burst_size, 10);
}

#[test]
fn test_throttle_rejects_zero_rates() {
    let err = Throttle::new(&ThrottleConfig::new(0, 5)).unwrap_err();
    assert!(err.to_string().contains("requests_per_second"));

    let err = Throttle::new(&ThrottleConfig::new(5, 0)).unwrap_err();
    assert!(err.to_string().contains("burst_size"));
}

#[tokio::test]
async fn test_throttle_allows_burst() {
    let throttle = Throttle::new(&ThrottleConfig::new(10, 5)).unwrap();

    for _ in 0..5 {
        assert!(throttle.try_acquire());
    }
    assert!(!throttle.try_acquire());
}

#[tokio::test]
async fn test_throttle_check_continues() {
    let throttle = Throttle::new(&ThrottleConfig::new(100, 10)).unwrap();

    let decision = throttle.check(&PageResponse::with_next(2)).await.unwrap();
    assert!(decision.should_continue());
    assert!(throttle.wait_with_timeout(Duration::from_millis(100)).await);
}
