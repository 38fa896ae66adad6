//! Settings client implementation
//!
//! Each operation composes its precondition headers, issues one exchange
//! through the transport, and interprets the status for its own operation
//! kind before touching the body.

use super::types::{Setting, SettingSelector};
use crate::conditions::{interpret_status, AccessConditions, ETag, OperationKind};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pager::{Page, PageBody, PageFetcher, Pager};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client for a key/label/value configuration store
#[derive(Debug, Clone)]
pub struct SettingsClient {
    http: Arc<HttpClient>,
}

impl SettingsClient {
    /// Create a client over a transport
    pub fn new(http: HttpClient) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    /// Create a client sharing a transport with other clients
    pub fn with_shared(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Add a setting only if its key/label pair does not exist yet
    ///
    /// Sends `If-None-Match: *`: if the service finds any existing version
    /// its ETag will match and the request fails with 412, which here
    /// means the setting was already present.
    pub async fn add_setting(&self, setting: &Setting) -> Result<Setting> {
        validate_setting(setting)?;

        let conditions = AccessConditions::new().if_none_match(ETag::any());
        info!("Adding setting - {}", setting.key);

        let exchange = self
            .http
            .put_with_config(
                &setting_path(&setting.key),
                request_for(setting).headers(conditions.to_headers()),
            )
            .await?;

        if let Some(outcome) = interpret_status(OperationKind::Add, exchange.status) {
            let message = format!("setting '{}' was already present", setting.key);
            if let Some(err) = outcome.into_error(message) {
                warn!("Failed to add setting - {}: {}", setting.key, err);
                return Err(err);
            }
        }

        let created: Setting = exchange.require_success()?.json()?;
        debug!("Added setting - {}", created.key);
        Ok(created)
    }

    /// Create or overwrite a setting
    ///
    /// With `if_unchanged`, the setting's own ETag is sent as `If-Match`
    /// so the write only lands if nothing moved since the caller read it.
    /// A wildcard ETag always matches; no ETag means unconditional.
    pub async fn set_setting(&self, setting: &Setting, if_unchanged: bool) -> Result<Setting> {
        validate_setting(setting)?;

        let mut conditions = AccessConditions::new();
        if if_unchanged {
            if let Some(etag) = &setting.etag {
                conditions = conditions.if_match(etag.clone());
            }
        }
        info!("Setting value for - {}", setting.key);

        let exchange = self
            .http
            .put_with_config(
                &setting_path(&setting.key),
                request_for(setting).headers(conditions.to_headers()),
            )
            .await?;

        if let Some(outcome) = interpret_status(OperationKind::Update, exchange.status) {
            let message = format!("setting '{}' changed since it was read", setting.key);
            if let Some(err) = outcome.into_error(message) {
                warn!("Failed to set setting - {}: {}", setting.key, err);
                return Err(err);
            }
        }

        let updated: Setting = exchange.require_success()?.json()?;
        debug!("Set setting - {}", updated.key);
        Ok(updated)
    }

    /// Fetch a setting
    pub async fn get_setting(&self, key: &str, label: Option<&str>) -> Result<Setting> {
        let setting = self.get_setting_if_changed(key, label, None).await?;
        // Without a cached ETag there is no 304 path
        setting.ok_or_else(|| Error::decode(format!("empty response body for setting '{key}'")))
    }

    /// Fetch a setting only if it changed since the cached version
    ///
    /// Sends `If-None-Match` with the cached ETag. `Ok(None)` means the
    /// cached version is still current (304), explicitly "no new data",
    /// not an error. A missing setting is a `NotFound` error.
    pub async fn get_setting_if_changed(
        &self,
        key: &str,
        label: Option<&str>,
        cached: Option<&ETag>,
    ) -> Result<Option<Setting>> {
        validate_key(key)?;

        let mut conditions = AccessConditions::new();
        if let Some(etag) = cached {
            conditions = conditions.if_none_match(etag.clone());
        }

        let mut config = RequestConfig::new().headers(conditions.to_headers());
        if let Some(label) = label {
            config = config.query("label", label);
        }
        debug!("Retrieving setting - {key}");

        let exchange = self
            .http
            .get_with_config(&setting_path(key), config)
            .await?;

        match interpret_status(OperationKind::Get, exchange.status) {
            Some(outcome) => {
                let message = format!("setting '{key}' does not exist");
                match outcome.into_error(message) {
                    // 304: cached version still current
                    None => Ok(None),
                    Some(err) => {
                        warn!("Failed to get setting - {key}: {err}");
                        Err(err)
                    }
                }
            }
            None => {
                let setting: Setting = exchange.require_success()?.json()?;
                debug!("Retrieved setting - {key}");
                Ok(Some(setting))
            }
        }
    }

    /// Delete a setting
    ///
    /// With `if_match`, the delete only proceeds if the stored version
    /// still matches; a 412 means something wrote the setting after the
    /// caller read it.
    pub async fn delete_setting(
        &self,
        key: &str,
        label: Option<&str>,
        if_match: Option<&ETag>,
    ) -> Result<()> {
        validate_key(key)?;

        let mut conditions = AccessConditions::new();
        if let Some(etag) = if_match {
            conditions = conditions.if_match(etag.clone());
        }

        let mut config = RequestConfig::new().headers(conditions.to_headers());
        if let Some(label) = label {
            config = config.query("label", label);
        }
        info!("Deleting setting - {key}");

        let exchange = self
            .http
            .delete_with_config(&setting_path(key), config)
            .await?;

        if let Some(outcome) = interpret_status(OperationKind::Delete, exchange.status) {
            let message = format!("setting '{key}' changed since it was read");
            if let Some(err) = outcome.into_error(message) {
                warn!("Failed to delete setting - {key}: {err}");
                return Err(err);
            }
        }

        exchange.require_success()?;
        debug!("Deleted setting - {key}");
        Ok(())
    }

    /// List settings lazily, one page per round-trip
    ///
    /// Each call builds a fresh pager; a consumed pager is never rewound.
    pub fn list_settings(&self, selector: SettingSelector) -> Pager<SettingListFetcher> {
        Pager::new(SettingListFetcher {
            http: Arc::clone(&self.http),
            selector,
        })
    }
}

/// Fetcher for the settings listing endpoint
///
/// The selector's filters are captured at construction; continuation
/// fetches resend them alongside the opaque `after` token.
#[derive(Debug)]
pub struct SettingListFetcher {
    http: Arc<HttpClient>,
    selector: SettingSelector,
}

impl SettingListFetcher {
    fn base_config(&self) -> RequestConfig {
        let mut config = RequestConfig::new();
        if let Some(key) = &self.selector.key {
            config = config.query("key", key);
        }
        if let Some(label) = &self.selector.label {
            config = config.query("label", label);
        }
        config
    }

    async fn fetch(&self, config: RequestConfig) -> Result<Page<Setting>> {
        let body: PageBody<Setting> = self
            .http
            .get_with_config("/kv", config)
            .await?
            .require_success()?
            .json()?;
        Ok(body.into())
    }
}

#[async_trait]
impl PageFetcher for SettingListFetcher {
    type Item = Setting;

    async fn fetch_first(&self) -> Result<Page<Setting>> {
        debug!("Listing settings - first page");
        self.fetch(self.base_config()).await
    }

    async fn fetch_next(&self, token: &str) -> Result<Page<Setting>> {
        debug!("Listing settings - continuation");
        self.fetch(self.base_config().query("after", token)).await
    }
}

/// URL path for a setting key
fn setting_path(key: &str) -> String {
    format!("/kv/{key}")
}

/// Request carrying the setting body and label query
fn request_for(setting: &Setting) -> RequestConfig {
    let mut config = RequestConfig::new().json(serde_json::json!({
        "key": setting.key,
        "label": setting.label,
        "value": setting.value,
    }));
    if let Some(label) = &setting.label {
        config = config.query("label", label);
    }
    config
}

/// The key addresses the setting in the service URL, so it cannot be
/// empty; fail before any request is issued
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_argument("key", "must not be empty"));
    }
    Ok(())
}

fn validate_setting(setting: &Setting) -> Result<()> {
    validate_key(&setting.key)
}
