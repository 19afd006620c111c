//! Paginator configuration
//!
//! Lets the starting options and the rate limit policy be declared in YAML
//! or JSON instead of code:
//!
//! ```yaml
//! options:
//!   page: 1
//!   per_page: 50
//! rate_limit:
//!   type: wait_for_reset
//!   min_remaining: 5
//!   max_wait_secs: 900
//! ```

use crate::error::{Error, Result};
use crate::pagination::{ListOptions, RateLimitPolicy};
use crate::rate_limit::{
    AlwaysContinue, StopWhenExhausted, Throttle, ThrottleConfig, WaitForReset,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete paginator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorConfig {
    /// Starting options (defaults apply when absent)
    #[serde(default)]
    pub options: Option<ListOptions>,

    /// Rate limit policy
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

impl PaginatorConfig {
    /// Build the configured rate limit policy
    pub fn rate_limit_policy(&self) -> Result<Box<dyn RateLimitPolicy>> {
        self.rate_limit.build()
    }
}

// ============================================================================
// Rate Limit
// ============================================================================

/// Declarative rate limit policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RateLimitConfig {
    /// Never stop on rate limit grounds
    #[default]
    Always,

    /// Stop once the remaining quota drops to `min_remaining`
    StopWhenExhausted {
        /// Stop at or below this many remaining requests
        #[serde(default)]
        min_remaining: u32,
    },

    /// Sleep until the quota resets, failing if that takes longer than `max_wait_secs`
    WaitForReset {
        /// Wait at or below this many remaining requests
        #[serde(default)]
        min_remaining: u32,
        /// Longest acceptable wait in seconds
        #[serde(default = "default_max_wait_secs")]
        max_wait_secs: u64,
    },

    /// Client-side token bucket
    Throttle {
        /// Pages per second
        #[serde(default = "default_rps")]
        requests_per_second: u32,
        /// Bucket size
        #[serde(default = "default_burst")]
        burst_size: u32,
    },
}

fn default_max_wait_secs() -> u64 {
    3600
}

fn default_rps() -> u32 {
    ThrottleConfig::default().requests_per_second
}

fn default_burst() -> u32 {
    ThrottleConfig::default().burst_size
}

impl RateLimitConfig {
    /// Validate and build the policy
    pub fn build(&self) -> Result<Box<dyn RateLimitPolicy>> {
        Ok(match *self {
            Self::Always => Box::new(AlwaysContinue),
            Self::StopWhenExhausted { min_remaining } => {
                Box::new(StopWhenExhausted::new(min_remaining))
            }
            Self::WaitForReset {
                min_remaining,
                max_wait_secs,
            } => Box::new(WaitForReset::new(
                min_remaining,
                Duration::from_secs(max_wait_secs),
            )),
            Self::Throttle {
                requests_per_second,
                burst_size,
            } => Box::new(Throttle::new(&ThrottleConfig::new(
                requests_per_second,
                burst_size,
            ))?),
        })
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a config file; `.json` files are read as JSON, everything else as YAML
pub fn load_config(path: impl AsRef<Path>) -> Result<PaginatorConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {e}",
            path.display()
        ))
    })?;

    if path.extension().is_some_and(|ext| ext == "json") {
        load_config_from_json(&content)
    } else {
        load_config_from_str(&content)
    }
}

/// Load a config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PaginatorConfig> {
    let config: PaginatorConfig = serde_yaml::from_str(yaml)?;
    validate(&config)?;
    Ok(config)
}

/// Load a config from a JSON string
pub fn load_config_from_json(json: &str) -> Result<PaginatorConfig> {
    let config: PaginatorConfig = serde_json::from_str(json)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &PaginatorConfig) -> Result<()> {
    if let RateLimitConfig::Throttle {
        requests_per_second,
        burst_size,
    } = config.rate_limit
    {
        if requests_per_second == 0 {
            return Err(Error::invalid_value(
                "rate_limit.requests_per_second",
                "must be non-zero",
            ));
        }
        if burst_size == 0 {
            return Err(Error::invalid_value(
                "rate_limit.burst_size",
                "must be non-zero",
            ));
        }
    }
    Ok(())
}
