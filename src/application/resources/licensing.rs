use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const ACQUIRE: Endpoint = Endpoint::post("/api/Licensing/Acquire");
const RELEASE: Endpoint = Endpoint::put("/api/Licensing/Release");

/// Client for `/api/Licensing`
pub struct LicensingClient {
    http_client: Arc<HttpClient>,
}

impl LicensingClient {
    /// Creates a new licensing client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Acquires license units
    pub async fn acquire<B: Serialize + ?Sized>(&self, license: &B) -> Result<Value, AppError> {
        self.http_client
            .send(ACQUIRE.request().with_json(license)?)
            .await
    }

    /// Releases previously acquired license units
    pub async fn release<B: Serialize + ?Sized>(&self, license: &B) -> Result<Value, AppError> {
        self.http_client
            .send(RELEASE.request().with_json(license)?)
            .await
    }
}
