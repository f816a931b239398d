use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use crate::model::query::{ODataFilter, QueryParams, quote};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const PROCESSES: EntitySet = EntitySet::new("Processes");

/// Client for `/odata/Processes`, the package feed of the tenant
pub struct ProcessesClient {
    http_client: Arc<HttpClient>,
}

impl ProcessesClient {
    /// Creates a new processes client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets processes, optionally filtered by title
    pub async fn get(&self, title: Option<&str>) -> Result<Value, AppError> {
        let filter = ODataFilter::new().eq_text("Title", title);
        self.http_client
            .send(PROCESSES.list().with_query(QueryParams::new().with_filter(&filter)))
            .await
    }

    /// Gets every uploaded version of a process package
    pub async fn get_versions(&self, process_id: &str) -> Result<Value, AppError> {
        self.http_client
            .send(PROCESSES.function(&format!(
                "GetProcessVersions(processId={})",
                quote(process_id)
            )))
            .await
    }

    /// Deletes a package version, `key` being `Id:Version`
    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        info!("Deleting package {}", key);
        self.http_client.dispatch(PROCESSES.delete(quote(key))).await
    }

    /// Downloads the `.nupkg` of a package version
    pub async fn download_package(&self, key: &str) -> Result<Vec<u8>, AppError> {
        self.http_client
            .send_raw(PROCESSES.function(&format!("DownloadPackage(key={})", quote(key))))
            .await
    }
}
