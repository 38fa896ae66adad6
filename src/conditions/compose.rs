//! Header composition and status interpretation
//!
//! Pure functions mapping access conditions onto wire headers and response
//! statuses onto typed outcomes.

use super::types::{AccessConditions, OperationKind, Outcome};
use crate::types::HeaderSet;
use chrono::{DateTime, Utc};

// Destination / single-resource precondition headers
pub const IF_MATCH: &str = "If-Match";
pub const IF_NONE_MATCH: &str = "If-None-Match";
pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
pub const IF_UNMODIFIED_SINCE: &str = "If-Unmodified-Since";
pub const LEASE_ID: &str = "x-lease-id";

// Source-side namespace for rename/copy requests; disjoint from the
// unprefixed set so one request can assert conditions on both resources
pub const SOURCE_IF_MATCH: &str = "x-source-if-match";
pub const SOURCE_IF_NONE_MATCH: &str = "x-source-if-none-match";
pub const SOURCE_IF_MODIFIED_SINCE: &str = "x-source-if-modified-since";
pub const SOURCE_IF_UNMODIFIED_SINCE: &str = "x-source-if-unmodified-since";
pub const SOURCE_LEASE_ID: &str = "x-source-lease-id";

/// Format an instant as an RFC 1123 HTTP-date (`If-Modified-Since` form)
pub fn format_http_date(instant: DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Compose the precondition headers for a request's target resource
///
/// Unset fields produce no header; fields are independent, so any
/// combination may appear together. Pure and idempotent: composing twice
/// from the same conditions yields identical sets.
pub fn compose_headers(conditions: &AccessConditions) -> HeaderSet {
    let mut headers = HeaderSet::new();

    if let Some(etag) = conditions.if_match_etag() {
        headers.insert(IF_MATCH.to_string(), etag.to_header_value());
    }
    if let Some(etag) = conditions.if_none_match_etag() {
        headers.insert(IF_NONE_MATCH.to_string(), etag.to_header_value());
    }
    if let Some(instant) = conditions.modified_since() {
        headers.insert(IF_MODIFIED_SINCE.to_string(), format_http_date(instant));
    }
    if let Some(instant) = conditions.unmodified_since() {
        headers.insert(IF_UNMODIFIED_SINCE.to_string(), format_http_date(instant));
    }
    if let Some(lease) = conditions.lease() {
        headers.insert(LEASE_ID.to_string(), lease.to_string());
    }

    headers
}

/// Compose the precondition headers for the SOURCE side of a rename/copy
///
/// Same fields and quoting rules as [`compose_headers`], mapped into the
/// `x-source-*` namespace.
pub fn compose_source_headers(conditions: &AccessConditions) -> HeaderSet {
    let mut headers = HeaderSet::new();

    if let Some(etag) = conditions.if_match_etag() {
        headers.insert(SOURCE_IF_MATCH.to_string(), etag.to_header_value());
    }
    if let Some(etag) = conditions.if_none_match_etag() {
        headers.insert(SOURCE_IF_NONE_MATCH.to_string(), etag.to_header_value());
    }
    if let Some(instant) = conditions.modified_since() {
        headers.insert(
            SOURCE_IF_MODIFIED_SINCE.to_string(),
            format_http_date(instant),
        );
    }
    if let Some(instant) = conditions.unmodified_since() {
        headers.insert(
            SOURCE_IF_UNMODIFIED_SINCE.to_string(),
            format_http_date(instant),
        );
    }
    if let Some(lease) = conditions.lease() {
        headers.insert(SOURCE_LEASE_ID.to_string(), lease.to_string());
    }

    headers
}

/// Interpret a response status for the operation that issued the request
///
/// Returns `None` for statuses outside the table; the caller surfaces the
/// raw transport error for those. Never panics, never performs I/O.
///
/// 412 deliberately means different things per kind: an add sends
/// `If-None-Match: *`, so its 412 specifically means "already present",
/// while an update or delete 412 means the version moved underneath the
/// caller.
pub fn interpret_status(kind: OperationKind, status: u16) -> Option<Outcome> {
    match (kind, status) {
        (OperationKind::Get, 304) => Some(Outcome::NotModified),
        (_, 404) => Some(Outcome::NotFound),
        (OperationKind::Add, 412) => Some(Outcome::AlreadyExists),
        (OperationKind::Update | OperationKind::Delete, 412) => {
            Some(Outcome::ConcurrentModification)
        }
        _ => None,
    }
}
