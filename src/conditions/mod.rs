//! Conditional request module
//!
//! Translates access conditions into wire-level precondition headers and
//! maps response status codes to typed outcomes.
//!
//! # Overview
//!
//! An [`AccessConditions`] value declares what must be true of a resource
//! for a request to proceed: an ETag to match or not match, modification
//! time bounds, a lease token. [`compose_headers`] turns it into the
//! outgoing header set; [`compose_source_headers`] maps the same fields
//! into the disjoint `x-source-*` namespace so rename/copy requests can
//! assert conditions on both resources at once. [`interpret_status`] reads
//! the answer: which statuses mean what depends on which operation asked.
//!
//! Everything here is pure: no I/O, no shared state, safe to call
//! concurrently.

mod compose;
mod types;

pub use compose::{
    compose_headers, compose_source_headers, format_http_date, interpret_status, IF_MATCH,
    IF_MODIFIED_SINCE, IF_NONE_MATCH, IF_UNMODIFIED_SINCE, LEASE_ID, SOURCE_IF_MATCH,
    SOURCE_IF_MODIFIED_SINCE, SOURCE_IF_NONE_MATCH, SOURCE_IF_UNMODIFIED_SINCE, SOURCE_LEASE_ID,
};
pub use types::{AccessConditions, ETag, OperationKind, Outcome, ETAG_ANY};
