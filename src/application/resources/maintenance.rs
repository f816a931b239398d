/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use crate::model::query::QueryParams;
use crate::model::requests::MaintenanceStart;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, warn};

const END: Endpoint = Endpoint::post("/api/Maintenance/End");
const GET: Endpoint = Endpoint::get("/api/Maintenance/Get");
const START: Endpoint = Endpoint::post("/api/Maintenance/Start");
const STATUS: Endpoint = Endpoint::get("/api/Maintenance/Status");
const ENABLE: Endpoint = Endpoint::post("/api/Maintenance/Enable");
const DISABLE: Endpoint = Endpoint::post("/api/Maintenance/Disable");
const ACTIVE_SESSIONS: Endpoint = Endpoint::get("/api/Maintenance/ActiveSessions");

/// Client for `/api/Maintenance`
pub struct MaintenanceClient {
    http_client: Arc<HttpClient>,
}

impl MaintenanceClient {
    /// Creates a new maintenance client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Ends the maintenance window, for one tenant or the current one
    pub async fn end(&self, tenant_id: Option<i64>) -> Result<(), AppError> {
        info!("Ending maintenance window");
        self.http_client
            .dispatch(
                END.request()
                    .with_query(QueryParams::new().with_opt("tenantId", tenant_id)),
            )
            .await
    }

    /// Gets the maintenance settings
    pub async fn get(&self, tenant_id: Option<i64>) -> Result<Value, AppError> {
        self.http_client
            .send(
                GET.request()
                    .with_query(QueryParams::new().with_opt("tenantId", tenant_id)),
            )
            .await
    }

    /// Starts a maintenance window
    pub async fn start(&self, params: &MaintenanceStart) -> Result<(), AppError> {
        warn!("Starting maintenance window: {}", params.phase);
        self.http_client
            .dispatch(START.request().with_query(params.to_query()))
            .await
    }

    /// Gets the maintenance status
    pub async fn get_status(&self) -> Result<Value, AppError> {
        self.http_client.send(STATUS.request()).await
    }

    /// Enables maintenance mode, with an optional drain time in minutes
    pub async fn enable(&self, drain_time_minutes: Option<u32>) -> Result<(), AppError> {
        let body = match drain_time_minutes {
            Some(minutes) => json!({ "drainTimeMinutes": minutes }),
            None => json!({}),
        };
        self.http_client
            .dispatch(ENABLE.request().with_body(body))
            .await
    }

    /// Disables maintenance mode
    pub async fn disable(&self) -> Result<(), AppError> {
        self.http_client.dispatch(DISABLE.request()).await
    }

    /// Gets the sessions still active during maintenance
    pub async fn get_active_sessions(&self) -> Result<Value, AppError> {
        self.http_client.send(ACTIVE_SESSIONS.request()).await
    }
}
