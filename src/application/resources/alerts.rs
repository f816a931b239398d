use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use crate::model::requests::AlertFilter;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

const ALERTS: EntitySet = EntitySet::new("Alerts");

/// Client for `/odata/Alerts`
pub struct AlertsClient {
    http_client: Arc<HttpClient>,
}

impl AlertsClient {
    /// Creates a new alerts client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets alerts, optionally filtered by severity, status and creation date
    pub async fn get(&self, filter: &AlertFilter<'_>) -> Result<Value, AppError> {
        debug!("Getting alerts");
        self.http_client
            .send(ALERTS.list().with_query(filter.to_query()))
            .await
    }

    /// Gets one alert
    pub async fn get_by_id(&self, alert_id: i64) -> Result<Value, AppError> {
        self.http_client.send(ALERTS.get(alert_id)).await
    }

    /// Acknowledges an alert, with optional notes
    pub async fn acknowledge(&self, alert_id: i64, notes: Option<&str>) -> Result<(), AppError> {
        info!("Acknowledging alert {}", alert_id);
        let body = match notes.filter(|n| !n.is_empty()) {
            Some(notes) => json!({ "notes": notes }),
            None => json!({}),
        };
        self.http_client
            .dispatch(ALERTS.action(alert_id, "Acknowledge").with_body(body))
            .await
    }

    /// Resolves an alert, with optional resolution details
    pub async fn resolve(&self, alert_id: i64, resolution: Option<&str>) -> Result<(), AppError> {
        info!("Resolving alert {}", alert_id);
        let body = match resolution.filter(|r| !r.is_empty()) {
            Some(resolution) => json!({ "resolution": resolution }),
            None => json!({}),
        };
        self.http_client
            .dispatch(ALERTS.action(alert_id, "Resolve").with_body(body))
            .await
    }
}
