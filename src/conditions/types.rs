//! Conditional request types
//!
//! Defines the ETag token, the access-conditions value object, and the
//! operation-kind / outcome pair used for status interpretation.

use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The wildcard ETag: matches any resource version
pub const ETAG_ANY: &str = "*";

/// An opaque resource-version token
///
/// The wildcard value `*` means "match unconditionally" and travels
/// unquoted on the wire; every concrete value is wrapped in double quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ETag(String);

impl ETag {
    /// Create an ETag from a raw version token
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The wildcard ETag (`*`)
    pub fn any() -> Self {
        Self(ETAG_ANY.to_string())
    }

    /// Check if this is the wildcard
    pub fn is_any(&self) -> bool {
        self.0 == ETAG_ANY
    }

    /// Raw token value, unquoted
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wire form: quoted unless wildcard
    pub fn to_header_value(&self) -> String {
        if self.is_any() {
            self.0.clone()
        } else {
            format!("\"{}\"", self.0)
        }
    }

    /// Parse an ETag from a response header, stripping surrounding quotes
    pub fn from_header(raw: &str) -> Self {
        let trimmed = raw.trim();
        let unquoted = trimmed
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(trimmed);
        Self(unquoted.to_string())
    }
}

impl std::fmt::Display for ETag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ETag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ETag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Preconditions a request asserts about a resource
///
/// All fields are independently optional; any subset may be set. The value
/// is immutable once constructed: build a fresh instance per request. For
/// rename/copy operations, build one instance per side and compose them
/// with [`super::compose_headers`] and [`super::compose_source_headers`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessConditions {
    if_match: Option<ETag>,
    if_none_match: Option<ETag>,
    if_modified_since: Option<DateTime<Utc>>,
    if_unmodified_since: Option<DateTime<Utc>>,
    lease_id: Option<String>,
}

impl AccessConditions {
    /// Create empty conditions (unconditional request)
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the resource version to match
    #[must_use]
    pub fn if_match(mut self, etag: impl Into<ETag>) -> Self {
        self.if_match = Some(etag.into());
        self
    }

    /// Require the resource version to NOT match
    #[must_use]
    pub fn if_none_match(mut self, etag: impl Into<ETag>) -> Self {
        self.if_none_match = Some(etag.into());
        self
    }

    /// Require the resource to have been modified since the instant
    #[must_use]
    pub fn if_modified_since(mut self, instant: DateTime<Utc>) -> Self {
        self.if_modified_since = Some(instant);
        self
    }

    /// Require the resource to NOT have been modified since the instant
    #[must_use]
    pub fn if_unmodified_since(mut self, instant: DateTime<Utc>) -> Self {
        self.if_unmodified_since = Some(instant);
        self
    }

    /// Assert lease ownership
    #[must_use]
    pub fn lease_id(mut self, lease: impl Into<String>) -> Self {
        self.lease_id = Some(lease.into());
        self
    }

    /// The ETag the resource must match, if set
    pub fn if_match_etag(&self) -> Option<&ETag> {
        self.if_match.as_ref()
    }

    /// The ETag the resource must not match, if set
    pub fn if_none_match_etag(&self) -> Option<&ETag> {
        self.if_none_match.as_ref()
    }

    /// The modified-since bound, if set
    pub fn modified_since(&self) -> Option<DateTime<Utc>> {
        self.if_modified_since
    }

    /// The unmodified-since bound, if set
    pub fn unmodified_since(&self) -> Option<DateTime<Utc>> {
        self.if_unmodified_since
    }

    /// The lease token, if set
    pub fn lease(&self) -> Option<&str> {
        self.lease_id.as_deref()
    }

    /// Check if no condition is set
    pub fn is_empty(&self) -> bool {
        self.if_match.is_none()
            && self.if_none_match.is_none()
            && self.if_modified_since.is_none()
            && self.if_unmodified_since.is_none()
            && self.lease_id.is_none()
    }

    /// Precondition headers for this resource
    pub fn to_headers(&self) -> crate::types::HeaderSet {
        super::compose_headers(self)
    }

    /// Precondition headers for this resource as the SOURCE of a
    /// rename/copy
    pub fn to_source_headers(&self) -> crate::types::HeaderSet {
        super::compose_source_headers(self)
    }
}

/// The operation a status code is being interpreted for
///
/// The backend reuses HTTP 412 for several business meanings distinguished
/// only by which operation issued the request, so interpretation is keyed
/// by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Create-if-absent (sends `If-None-Match: *`)
    Add,
    /// Read, optionally conditional on a cached ETag
    Get,
    /// Overwrite with optimistic concurrency
    Update,
    /// Delete with optimistic concurrency
    Delete,
}

/// Typed outcome of a recognized precondition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Conditional GET short-circuit: no new data, not an error
    NotModified,
    /// The addressed resource does not exist
    NotFound,
    /// Add-style target already present
    AlreadyExists,
    /// Update/delete precondition failed against a newer version
    ConcurrentModification,
}

impl Outcome {
    /// Map the outcome onto the error taxonomy
    ///
    /// `NotModified` is an explicit empty result, never an error.
    pub fn into_error(self, message: impl Into<String>) -> Option<Error> {
        match self {
            Outcome::NotModified => None,
            Outcome::NotFound => Some(Error::not_found(message)),
            Outcome::AlreadyExists => Some(Error::already_exists(message)),
            Outcome::ConcurrentModification => Some(Error::concurrent_modification(message)),
        }
    }
}
