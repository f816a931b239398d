/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use crate::model::requests::{JobFilter, StopStrategy};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

const JOBS: EntitySet = EntitySet::new("Jobs");

/// Client for `/odata/Jobs`
pub struct JobsClient {
    http_client: Arc<HttpClient>,
}

impl JobsClient {
    /// Creates a new jobs client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets jobs, optionally filtered by state, release name and creation date
    pub async fn get(&self, filter: &JobFilter<'_>) -> Result<Value, AppError> {
        self.http_client
            .send(JOBS.list().with_query(filter.to_query()))
            .await
    }

    /// Gets one job
    pub async fn get_by_id(&self, job_id: i64) -> Result<Value, AppError> {
        self.http_client.send(JOBS.get(job_id)).await
    }

    /// Starts jobs
    ///
    /// # Arguments
    /// * `start_info` - The `startInfo` object (`ReleaseKey`, `Strategy`, `RobotIds`, `InputArguments`, ...)
    ///
    /// # Returns
    /// The created jobs
    pub async fn start_jobs<B: Serialize + ?Sized>(&self, start_info: &B) -> Result<Value, AppError> {
        info!("Starting jobs");
        let body = json!({ "startInfo": serde_json::to_value(start_info)? });
        self.http_client
            .send(JOBS.collection_action("StartJobs").with_body(body))
            .await
    }

    /// Stops one job
    pub async fn stop_job(&self, job_id: i64, strategy: StopStrategy) -> Result<(), AppError> {
        info!("Stopping job {} ({:?})", job_id, strategy);
        self.http_client
            .dispatch(
                JOBS.action(job_id, "StopJob")
                    .with_json(&json!({ "strategy": strategy }))?,
            )
            .await
    }

    /// Stops several jobs at once
    pub async fn stop_jobs(&self, job_ids: &[i64], strategy: StopStrategy) -> Result<(), AppError> {
        info!("Stopping {} jobs ({:?})", job_ids.len(), strategy);
        self.http_client
            .dispatch(
                JOBS.collection_action("StopJobs")
                    .with_json(&json!({ "jobIds": job_ids, "strategy": strategy }))?,
            )
            .await
    }
}
