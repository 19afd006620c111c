//! Error types for pagewalk
//!
//! This module defines the error hierarchy for the crate. Capability
//! implementations (fetchers, processors, rate-limit policies) report failures
//! through this type and the driver hands them back to the caller untouched.

use thiserror::Error;

/// The main error type for pagewalk
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    // ============================================================================
    // Capability Errors
    // ============================================================================
    /// The page fetch capability failed
    #[error("Fetch failed: {message}")]
    Fetch { message: String },

    /// The item processing capability failed
    #[error("Item processing failed: {message}")]
    Process { message: String },

    /// The rate limit capability failed
    #[error("Rate limit check failed: {message}")]
    RateLimit { message: String },

    /// Quota exhausted for longer than the caller is willing to wait
    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    /// The run was cancelled through its cancellation token
    #[error("Pagination cancelled")]
    Cancelled,

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Transport failure reported by reqwest
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Malformed URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Generic configuration problem
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A configuration field holds an unusable value
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    /// YAML deserialization failure
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON deserialization failure
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Free-form error
    #[error("{0}")]
    Other(String),

    /// Error bubbled up from an `anyhow` based capability
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create an item processing error
    pub fn process(message: impl Into<String>) -> Self {
        Self::Process {
            message: message.into(),
        }
    }

    /// Create a rate limit check error
    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::RateLimit {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error was caused by cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this error is retryable
    ///
    /// The driver never retries. Fetchers that want to retry transient
    /// transport failures before reporting them can use this.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for pagewalk
pub type Result<T> = std::result::Result<T, Error>;
