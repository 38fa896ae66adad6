//! Storage path client
//!
//! A file/directory path client where mutations are guarded by leases and
//! modified-access conditions, and rename asserts independent conditions
//! on the source and destination resources.

mod client;
mod types;

pub use client::PathClient;
pub use types::{PathKind, PathProperties};
