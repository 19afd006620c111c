//! Rate limit policies
//!
//! Ready-made [`RateLimitPolicy`](crate::pagination::RateLimitPolicy)
//! implementations.
//!
//! # Policies
//!
//! - [`AlwaysContinue`] - never stops
//! - [`StopWhenExhausted`] - stops once the reported quota runs low
//! - [`WaitForReset`] - sleeps until the quota window resets, up to a limit
//! - [`Throttle`] - client-side token bucket using governor

mod policies;
mod throttle;

pub use policies::{AlwaysContinue, StopWhenExhausted, WaitForReset};
pub use throttle::{Throttle, ThrottleConfig};

#[cfg(test)]
mod tests;
