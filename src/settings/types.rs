//! Settings types

use crate::conditions::ETag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A configuration setting: a key/label pair mapping to a value
///
/// The key is required (it addresses the setting in the service URL); the
/// label is an optional second dimension. The etag identifies the version
/// the caller last saw and drives conditional mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    /// Setting key (required, non-empty)
    pub key: String,
    /// Optional label dimension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Setting value
    #[serde(default)]
    pub value: String,
    /// Version token of the last-read state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<ETag>,
    /// When the setting last changed, per the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Setting {
    /// Create a setting with a key and value
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Set the label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the etag
    #[must_use]
    pub fn with_etag(mut self, etag: impl Into<ETag>) -> Self {
        self.etag = Some(etag.into());
        self
    }
}

/// Filters for a settings listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingSelector {
    /// Key filter (exact or wildcard, server-interpreted)
    pub key: Option<String>,
    /// Label filter
    pub label: Option<String>,
}

impl SettingSelector {
    /// Select everything
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter by key
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Filter by label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
