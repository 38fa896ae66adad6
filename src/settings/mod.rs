//! Configuration settings client
//!
//! A key/label/value store client with ETag-based optimistic concurrency
//! and cursor-paged listing.
//!
//! # Overview
//!
//! Settings are addressed by key plus optional label. Every mutation can be
//! made conditional on the setting's current version:
//!
//! - `add_setting` creates only if absent (`If-None-Match: *`)
//! - `set_setting` can require the caller's ETag to still be current
//! - `get_setting_if_changed` short-circuits to `None` when the cached
//!   version is still fresh (304)
//! - `delete_setting` can refuse to delete a version the caller never saw
//! - `list_settings` pages through the store lazily

mod client;
mod types;

pub use client::{SettingListFetcher, SettingsClient};
pub use types::{Setting, SettingSelector};
