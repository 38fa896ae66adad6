//! HTTP transport module
//!
//! Provides the HTTP client the pager and the resource clients are driven
//! through.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Raw Exchanges**: Terminal statuses (including 304/404/412) are
//!   returned in the [`Exchange`], not converted to errors; precondition
//!   interpretation belongs to the conditions layer
//!
//! Only transport-class failures are retried here. A precondition status is
//! a protocol answer, never a fault, so it is handed back untouched.

mod client;
mod rate_limit;

pub use client::{Exchange, HttpClient, HttpClientConfig, RequestConfig};
pub use rate_limit::{Throttle, ThrottleConfig};

#[cfg(test)]
mod tests;
