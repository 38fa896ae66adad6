// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # restcursor
//!
//! A minimal, Rust-native client kit for cursor-paged listings and
//! conditional REST requests.
//!
//! ## Features
//!
//! - **Cursor Paging**: Lazy, strictly sequential page streams over any
//!   continuation-token listing
//! - **Conditional Requests**: ETag match/none-match, modification-time
//!   bounds, and lease tokens composed into precondition headers
//! - **Typed Outcomes**: 304/404/412 interpreted per operation kind
//!   instead of surfacing as generic HTTP failures
//! - **Resilient Transport**: Retries, backoff, and rate limiting beneath
//!   the protocol layer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use restcursor::http::{HttpClient, HttpClientConfig};
//! use restcursor::settings::{Setting, SettingSelector, SettingsClient};
//! use restcursor::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = HttpClientConfig::builder()
//!         .base_url("https://config.example.com")
//!         .build();
//!     let client = SettingsClient::new(HttpClient::with_config(config));
//!
//!     // Create only if absent; 412 surfaces as AlreadyExists
//!     let created = client.add_setting(&Setting::new("db", "conn")).await?;
//!
//!     // Re-read only when the version moved; Ok(None) means "unchanged"
//!     let fresh = client
//!         .get_setting_if_changed("db", None, created.etag.as_ref())
//!         .await?;
//!
//!     // Page through everything lazily
//!     let all = client.list_settings(SettingSelector::all()).collect().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Resource Clients                          │
//! │   settings: add / set / get / delete / list                     │
//! │   paths:    create / delete / properties / rename               │
//! └───────────────┬─────────────────────────────┬───────────────────┘
//!                 │                             │
//! ┌───────────────┴───────────┐   ┌─────────────┴───────────────────┐
//! │          Pager            │   │           Conditions            │
//! │  Page / PageFetcher       │   │  AccessConditions / ETag        │
//! │  lazy page & item streams │   │  header composition             │
//! │  continuation tokens      │   │  status -> typed outcome        │
//! └───────────────┬───────────┘   └─────────────┬───────────────────┘
//!                 │                             │
//! ┌───────────────┴─────────────────────────────┴───────────────────┐
//! │                          Transport                              │
//! │        retry / backoff / throttle / raw exchanges               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document the error and method enum variants before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the kit
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Cursor-based paging
pub mod pager;

/// Conditional request composition and status interpretation
pub mod conditions;

/// Configuration settings client
pub mod settings;

/// Storage path client
pub mod paths;

// ============================================================================
// Re-exports
// ============================================================================

pub use conditions::{AccessConditions, ETag, OperationKind, Outcome};
pub use error::{Error, Result};
pub use pager::{Page, PageFetcher, Pager};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
