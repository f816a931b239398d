use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use crate::model::query::{ODataFilter, QueryParams};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const MACHINES: EntitySet = EntitySet::new("Machines");

/// Client for `/odata/Machines`
pub struct MachinesClient {
    http_client: Arc<HttpClient>,
}

impl MachinesClient {
    /// Creates a new machines client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets machines, optionally filtered by name and type (Standard, Template)
    pub async fn get(
        &self,
        name: Option<&str>,
        machine_type: Option<&str>,
    ) -> Result<Value, AppError> {
        let filter = ODataFilter::new()
            .eq_text("Name", name)
            .eq_text("Type", machine_type);
        self.http_client
            .send(MACHINES.list().with_query(QueryParams::new().with_filter(&filter)))
            .await
    }

    /// Gets one machine
    pub async fn get_by_id(&self, machine_id: i64) -> Result<Value, AppError> {
        self.http_client.send(MACHINES.get(machine_id)).await
    }

    /// Creates a machine
    pub async fn create<B: Serialize + ?Sized>(&self, machine: &B) -> Result<Value, AppError> {
        self.http_client
            .send(MACHINES.create().with_json(machine)?)
            .await
    }

    /// Replaces a machine
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        machine_id: i64,
        machine: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(MACHINES.update(machine_id).with_json(machine)?)
            .await
    }

    /// Deletes a machine
    pub async fn delete(&self, machine_id: i64) -> Result<(), AppError> {
        self.http_client.dispatch(MACHINES.delete(machine_id)).await
    }
}
