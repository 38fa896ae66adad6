//! Path client implementation

use super::types::{PathKind, PathProperties};
use crate::conditions::{interpret_status, AccessConditions, ETag, OperationKind};
use crate::error::{Error, Result};
use crate::http::{Exchange, HttpClient, RequestConfig};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Header naming the rename source on a rename request
pub const RENAME_SOURCE: &str = "x-rename-source";

/// Client for file/directory paths with lease- and version-guarded
/// mutations
#[derive(Debug, Clone)]
pub struct PathClient {
    http: Arc<HttpClient>,
}

impl PathClient {
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

    /// Create or overwrite a path
    ///
    /// Conditions guard the overwrite: a 412 means the path moved since
    /// the caller read it.
    pub async fn create_path(
        &self,
        path: &str,
        kind: PathKind,
        conditions: &AccessConditions,
    ) -> Result<PathProperties> {
        validate_path(path)?;
        info!("Creating path - {path}");

        let config = RequestConfig::new()
            .query("resource", kind.as_str())
            .headers(conditions.to_headers());
        let exchange = self.http.put_with_config(&path_url(path), config).await?;

        self.finish_mutation(OperationKind::Update, exchange, path)
    }

    /// Create a path only if it does not exist yet
    ///
    /// Sends `If-None-Match: *`; a 412 here means the path was already
    /// present.
    pub async fn create_path_if_absent(
        &self,
        path: &str,
        kind: PathKind,
    ) -> Result<PathProperties> {
        validate_path(path)?;
        info!("Creating path if absent - {path}");

        let conditions = AccessConditions::new().if_none_match(ETag::any());
        let config = RequestConfig::new()
            .query("resource", kind.as_str())
            .headers(conditions.to_headers());
        let exchange = self.http.put_with_config(&path_url(path), config).await?;

        self.finish_mutation(OperationKind::Add, exchange, path)
    }

    /// Delete a path
    ///
    /// A lease or ETag condition refuses deletion of a version the caller
    /// never saw.
    pub async fn delete_path(
        &self,
        path: &str,
        recursive: bool,
        conditions: &AccessConditions,
    ) -> Result<()> {
        validate_path(path)?;
        info!("Deleting path - {path}");

        let config = RequestConfig::new()
            .query("recursive", recursive.to_string())
            .headers(conditions.to_headers());
        let exchange = self
            .http
            .delete_with_config(&path_url(path), config)
            .await?;

        if let Some(outcome) = interpret_status(OperationKind::Delete, exchange.status) {
            let message = format!("path '{path}' precondition failed");
            if let Some(err) = outcome.into_error(message) {
                warn!("Failed to delete path - {path}: {err}");
                return Err(err);
            }
        }

        exchange.require_success()?;
        debug!("Deleted path - {path}");
        Ok(())
    }

    /// Read a path's properties from response headers
    pub async fn get_path_properties(
        &self,
        path: &str,
        conditions: &AccessConditions,
    ) -> Result<PathProperties> {
        validate_path(path)?;
        debug!("Retrieving path properties - {path}");

        let config = RequestConfig::new().headers(conditions.to_headers());
        let exchange = self.http.get_with_config(&path_url(path), config).await?;

        if let Some(outcome) = interpret_status(OperationKind::Get, exchange.status) {
            let message = format!("path '{path}' does not exist");
            if let Some(err) = outcome.into_error(message) {
                warn!("Failed to get path properties - {path}: {err}");
                return Err(err);
            }
        }

        let exchange = exchange.require_success()?;
        PathProperties::from_headers(&exchange.headers)
    }

    /// Rename a path, asserting conditions on both sides
    ///
    /// Destination conditions travel in the unprefixed precondition
    /// namespace; source conditions (lease included) travel under
    /// `x-source-*`, so the two sets never collide on one request.
    pub async fn rename_path(
        &self,
        source: &str,
        destination: &str,
        source_conditions: &AccessConditions,
        dest_conditions: &AccessConditions,
    ) -> Result<()> {
        validate_path(source)?;
        if destination.is_empty() {
            return Err(Error::invalid_argument(
                "destination",
                "must not be empty",
            ));
        }
        info!("Renaming path - {source} -> {destination}");

        let config = RequestConfig::new()
            .header(RENAME_SOURCE, format!("/{}", source.trim_start_matches('/')))
            .headers(dest_conditions.to_headers())
            .headers(source_conditions.to_source_headers());
        let exchange = self
            .http
            .put_with_config(&path_url(destination), config)
            .await?;

        if let Some(outcome) = interpret_status(OperationKind::Update, exchange.status) {
            let message = format!("rename of '{source}' to '{destination}' precondition failed");
            if let Some(err) = outcome.into_error(message) {
                warn!("Failed to rename path - {source}: {err}");
                return Err(err);
            }
        }

        exchange.require_success()?;
        debug!("Renamed path - {source} -> {destination}");
        Ok(())
    }

    fn finish_mutation(
        &self,
        kind: OperationKind,
        exchange: Exchange,
        path: &str,
    ) -> Result<PathProperties> {
        if let Some(outcome) = interpret_status(kind, exchange.status) {
            let message = match kind {
                OperationKind::Add => format!("path '{path}' already exists"),
                _ => format!("path '{path}' changed since it was read"),
            };
            if let Some(err) = outcome.into_error(message) {
                warn!("Path mutation failed - {path}: {err}");
                return Err(err);
            }
        }

        let exchange = exchange.require_success()?;
        debug!("Path mutation completed - {path}");
        PathProperties::from_headers(&exchange.headers)
    }
}

/// URL path for a storage path
fn path_url(path: &str) -> String {
    format!("/paths/{}", path.trim_start_matches('/'))
}

/// Paths address resources in the service URL, so they cannot be empty;
/// fail before any request is issued
fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(Error::invalid_argument("path", "must not be empty"));
    }
    Ok(())
}
