//! Page response metadata
//!
//! Every fetched page comes back with a [`PageResponse`]: where the next page
//! is (if anywhere) and whatever quota information the backend reported.
//!
//! # Overview
//!
//! Fetchers built on top of an HTTP client can populate the metadata straight
//! from the response headers with [`PageResponse::from_headers`], which
//! understands RFC 5988 `Link` headers and the common `X-RateLimit-*` family.

mod headers;
mod types;

pub use headers::{parse_link_header, LinkRel};
pub use types::{PageResponse, Rate};

#[cfg(test)]
mod tests;
