use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use crate::model::query::QueryParams;
use crate::model::requests::{AuditLogFilter, ExportFormat};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

const AUDIT_LOGS: EntitySet = EntitySet::new("AuditLogs");

/// Client for `/odata/AuditLogs`
pub struct AuditClient {
    http_client: Arc<HttpClient>,
}

impl AuditClient {
    /// Creates a new audit client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets audit logs, optionally filtered by date range, component and action
    pub async fn get_audit_logs(&self, filter: &AuditLogFilter<'_>) -> Result<Value, AppError> {
        debug!("Getting audit logs");
        self.http_client
            .send(AUDIT_LOGS.list().with_query(filter.to_query()))
            .await
    }

    /// Gets the detailed audit trail of one entity
    pub async fn get_audit_trail(
        &self,
        entity_type: &str,
        entity_id: i64,
    ) -> Result<Value, AppError> {
        let query = QueryParams::new()
            .with("entityType", entity_type)
            .with("entityId", entity_id);
        self.http_client
            .send(AUDIT_LOGS.function("GetAuditTrail").with_query(query))
            .await
    }

    /// Exports audit logs between two dates
    ///
    /// # Returns
    /// The exported file content as bytes
    pub async fn export_audit_logs(
        &self,
        from_date: &str,
        to_date: &str,
        format: ExportFormat,
    ) -> Result<Vec<u8>, AppError> {
        info!("Exporting audit logs as {}", format);
        let query = QueryParams::new()
            .with("from", from_date)
            .with("to", to_date)
            .with("format", format);
        let bytes = self
            .http_client
            .send_raw(AUDIT_LOGS.function("Export").with_query(query))
            .await?;
        debug!("Audit export obtained: {} bytes", bytes.len());
        Ok(bytes)
    }
}
