//! Path types

use crate::conditions::ETag;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// What a path addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    #[default]
    File,
    Directory,
}

impl PathKind {
    /// Wire value for the resource-type parameter
    pub fn as_str(self) -> &'static str {
        match self {
            PathKind::File => "file",
            PathKind::Directory => "directory",
        }
    }
}

/// Properties of a path, read from response headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathProperties {
    /// Resource kind
    pub kind: PathKind,
    /// Current version token
    pub etag: Option<ETag>,
    /// Last modification instant
    pub last_modified: Option<DateTime<Utc>>,
}

impl PathProperties {
    /// Parse properties from a response header map
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        let kind = match header_str(headers, "x-resource-type") {
            Some("directory") => PathKind::Directory,
            _ => PathKind::File,
        };

        let etag = header_str(headers, "etag").map(ETag::from_header);

        let last_modified = header_str(headers, "last-modified")
            .map(|raw| {
                DateTime::parse_from_rfc2822(raw)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| Error::decode(format!("bad last-modified header '{raw}': {e}")))
            })
            .transpose()?;

        Ok(Self {
            kind,
            etag,
            last_modified,
        })
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
