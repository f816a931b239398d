use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use crate::model::requests::AssetFilter;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const ASSETS: EntitySet = EntitySet::new("Assets");

/// Client for `/odata/Assets`
pub struct AssetsClient {
    http_client: Arc<HttpClient>,
}

impl AssetsClient {
    /// Creates a new assets client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets assets, optionally filtered by name, scope and type
    pub async fn get(&self, filter: &AssetFilter<'_>) -> Result<Value, AppError> {
        self.http_client
            .send(ASSETS.list().with_query(filter.to_query()))
            .await
    }

    /// Gets one asset
    pub async fn get_by_id(&self, asset_id: i64) -> Result<Value, AppError> {
        self.http_client.send(ASSETS.get(asset_id)).await
    }

    /// Creates an asset (`Name`, `ValueScope`, `ValueType` and the matching value field)
    pub async fn create<B: Serialize + ?Sized>(&self, asset: &B) -> Result<Value, AppError> {
        info!("Creating asset");
        self.http_client
            .send(ASSETS.create().with_json(asset)?)
            .await
    }

    /// Replaces an asset
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        asset_id: i64,
        asset: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(ASSETS.update(asset_id).with_json(asset)?)
            .await
    }

    /// Deletes an asset
    pub async fn delete(&self, asset_id: i64) -> Result<(), AppError> {
        info!("Deleting asset {}", asset_id);
        self.http_client.dispatch(ASSETS.delete(asset_id)).await
    }
}
