use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use crate::model::requests::MetricsQuery;
use serde_json::Value;
use std::sync::Arc;

const METRICS: Endpoint = Endpoint::get("/api/Metrics");
const PERFORMANCE: Endpoint = Endpoint::get("/api/Metrics/Performance");
const RESOURCES: Endpoint = Endpoint::get("/api/Metrics/Resources");

/// Client for `/api/Metrics`
pub struct MetricsClient {
    http_client: Arc<HttpClient>,
}

impl MetricsClient {
    /// Creates a new metrics client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets system metrics, optionally by category and date range
    pub async fn get_metrics(&self, query: &MetricsQuery<'_>) -> Result<Value, AppError> {
        self.http_client
            .send(METRICS.request().with_query(query.to_query()))
            .await
    }

    /// Gets performance metrics
    pub async fn get_performance_metrics(&self) -> Result<Value, AppError> {
        self.http_client.send(PERFORMANCE.request()).await
    }

    /// Gets resource usage metrics
    pub async fn get_resource_metrics(&self) -> Result<Value, AppError> {
        self.http_client.send(RESOURCES.request()).await
    }
}
