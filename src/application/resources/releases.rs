use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use crate::model::query::{ODataFilter, QueryParams};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const RELEASES: EntitySet = EntitySet::new("Releases");

/// Client for `/odata/Releases`
///
/// A release binds a process package version to a folder so that jobs can be
/// started for it.
pub struct ReleasesClient {
    http_client: Arc<HttpClient>,
}

impl ReleasesClient {
    /// Creates a new releases client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets releases, optionally filtered by name and process key
    pub async fn get(
        &self,
        name: Option<&str>,
        process_key: Option<&str>,
    ) -> Result<Value, AppError> {
        let filter = ODataFilter::new()
            .eq_text("Name", name)
            .eq_text("ProcessKey", process_key);
        self.http_client
            .send(RELEASES.list().with_query(QueryParams::new().with_filter(&filter)))
            .await
    }

    /// Gets one release
    pub async fn get_by_id(&self, release_id: i64) -> Result<Value, AppError> {
        self.http_client.send(RELEASES.get(release_id)).await
    }

    /// Creates a release
    pub async fn create<B: Serialize + ?Sized>(&self, release: &B) -> Result<Value, AppError> {
        self.http_client
            .send(RELEASES.create().with_json(release)?)
            .await
    }

    /// Replaces a release
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        release_id: i64,
        release: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(RELEASES.update(release_id).with_json(release)?)
            .await
    }

    /// Deletes a release
    pub async fn delete(&self, release_id: i64) -> Result<(), AppError> {
        self.http_client.dispatch(RELEASES.delete(release_id)).await
    }

    /// Moves a release to the latest version of its package
    pub async fn update_to_latest(&self, release_id: i64) -> Result<(), AppError> {
        info!("Updating release {} to latest package version", release_id);
        self.http_client
            .dispatch(RELEASES.action(release_id, "UpdateToLatestPackageVersion"))
            .await
    }
}
