use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use serde_json::Value;
use std::sync::Arc;

const STATUS: Endpoint = Endpoint::get("/api/Status/Get");
// Misspelled on the server
const VERIFY_HOST: Endpoint = Endpoint::get("/api/Status/VerifyHostAvailibility");

/// Client for `/api/Status`
pub struct StatusClient {
    http_client: Arc<HttpClient>,
}

impl StatusClient {
    /// Creates a new status client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Checks that the service is up, an empty response meaning healthy
    pub async fn get(&self) -> Result<Value, AppError> {
        self.http_client.send(STATUS.request()).await
    }

    /// Asks the server whether it can reach `url`
    pub async fn verify_host_availability(&self, url: &str) -> Result<Value, AppError> {
        self.http_client
            .send(VERIFY_HOST.request().with_param("url", url))
            .await
    }
}
