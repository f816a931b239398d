use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use crate::model::query::{ODataFilter, QueryParams};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const ENVIRONMENTS: EntitySet = EntitySet::new("Environments");

/// Client for `/odata/Environments`
pub struct EnvironmentsClient {
    http_client: Arc<HttpClient>,
}

impl EnvironmentsClient {
    /// Creates a new environments client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets environments, optionally filtered by name and organization unit
    pub async fn get(
        &self,
        name: Option<&str>,
        organization_unit_id: Option<i64>,
    ) -> Result<Value, AppError> {
        let filter = ODataFilter::new()
            .eq_text("Name", name)
            .eq("OrganizationUnitId", organization_unit_id);
        self.http_client
            .send(
                ENVIRONMENTS
                    .list()
                    .with_query(QueryParams::new().with_filter(&filter)),
            )
            .await
    }

    /// Gets one environment
    pub async fn get_by_id(&self, environment_id: i64) -> Result<Value, AppError> {
        self.http_client.send(ENVIRONMENTS.get(environment_id)).await
    }

    /// Creates an environment (`Name`, `Description`, `Type`, `OrganizationUnitId`)
    pub async fn create<B: Serialize + ?Sized>(&self, environment: &B) -> Result<Value, AppError> {
        self.http_client
            .send(ENVIRONMENTS.create().with_json(environment)?)
            .await
    }

    /// Replaces an environment
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        environment_id: i64,
        environment: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(ENVIRONMENTS.update(environment_id).with_json(environment)?)
            .await
    }

    /// Deletes an environment
    pub async fn delete(&self, environment_id: i64) -> Result<(), AppError> {
        self.http_client
            .dispatch(ENVIRONMENTS.delete(environment_id))
            .await
    }
}
