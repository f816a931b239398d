use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use crate::model::query::QueryParams;
use serde_json::Value;
use std::sync::Arc;

const CONSUMPTION_LICENSE_STATS: Endpoint = Endpoint::get("/api/Stats/GetConsumptionLicenseStats");
const COUNT_STATS: Endpoint = Endpoint::get("/api/Stats/GetCountStats");
const JOBS_STATS: Endpoint = Endpoint::get("/api/Stats/GetJobsStats");
const LICENSE_STATS: Endpoint = Endpoint::get("/api/Stats/GetLicenseStats");
const SESSIONS_STATS: Endpoint = Endpoint::get("/api/Stats/GetSessionsStats");

/// Client for `/api/Stats`
pub struct StatsClient {
    http_client: Arc<HttpClient>,
}

fn usage_query(tenant_id: Option<i64>, days: Option<u32>) -> QueryParams {
    QueryParams::new()
        .with_opt("tenantId", tenant_id)
        .with_opt("days", days)
}

impl StatsClient {
    /// Creates a new stats client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets consumption licensing usage over the last `days` days
    pub async fn get_consumption_license_stats(
        &self,
        tenant_id: Option<i64>,
        days: Option<u32>,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(
                CONSUMPTION_LICENSE_STATS
                    .request()
                    .with_query(usage_query(tenant_id, days)),
            )
            .await
    }

    /// Gets entity counts (processes, assets, queues, ...)
    pub async fn get_count_stats(&self) -> Result<Value, AppError> {
        self.http_client.send(COUNT_STATS.request()).await
    }

    /// Gets job counts grouped by state
    pub async fn get_jobs_stats(&self) -> Result<Value, AppError> {
        self.http_client.send(JOBS_STATS.request()).await
    }

    /// Gets licensing usage over the last `days` days
    pub async fn get_license_stats(
        &self,
        tenant_id: Option<i64>,
        days: Option<u32>,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(LICENSE_STATS.request().with_query(usage_query(tenant_id, days)))
            .await
    }

    /// Gets robot session counts grouped by state
    pub async fn get_sessions_stats(&self) -> Result<Value, AppError> {
        self.http_client.send(SESSIONS_STATS.request()).await
    }
}
