use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use crate::model::query::{ODataFilter, QueryParams, quote};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const LIBRARIES: EntitySet = EntitySet::new("Libraries");

/// Client for `/odata/Libraries`
pub struct LibrariesClient {
    http_client: Arc<HttpClient>,
}

impl LibrariesClient {
    /// Creates a new libraries client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets libraries, optionally only the one with the given package id
    pub async fn get(&self, package_id: Option<&str>) -> Result<Value, AppError> {
        let filter = ODataFilter::new().eq_text("Id", package_id);
        self.http_client
            .send(LIBRARIES.list().with_query(QueryParams::new().with_filter(&filter)))
            .await
    }

    /// Gets every uploaded version of a library
    pub async fn get_versions(&self, package_id: &str) -> Result<Value, AppError> {
        self.http_client
            .send(LIBRARIES.function(&format!("GetVersions(packageId={})", quote(package_id))))
            .await
    }

    /// Deletes a library version, `key` being `Id:Version`
    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        info!("Deleting library {}", key);
        self.http_client.dispatch(LIBRARIES.delete(quote(key))).await
    }

    /// Downloads the `.nupkg` of a library version
    pub async fn download_package(&self, key: &str) -> Result<Vec<u8>, AppError> {
        self.http_client
            .send_raw(LIBRARIES.function(&format!("DownloadPackage(key={})", quote(key))))
            .await
    }
}
