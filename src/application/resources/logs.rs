use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

const SUBMIT_LOGS: Endpoint = Endpoint::post("/api/Logs/SubmitLogs");
const POST_LOG: Endpoint = Endpoint::post("/api/Logs");

/// Client for `/api/Logs`
pub struct LogsClient {
    http_client: Arc<HttpClient>,
}

impl LogsClient {
    /// Creates a new logs client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Inserts a batch of log entries
    ///
    /// Each entry is the string form of a JSON log object, e.g.
    /// `{"message": "Process execution started", "level": "Information", "timeStamp": "...", "processName": "...", "jobId": "..."}`.
    pub async fn submit_logs(&self, logs: &[String]) -> Result<(), AppError> {
        debug!("Submitting {} log entries", logs.len());
        self.http_client
            .dispatch(SUBMIT_LOGS.request().with_json(logs)?)
            .await
    }

    /// Inserts a single log entry
    #[deprecated(note = "use `submit_logs` instead")]
    pub async fn post_log<B: Serialize + ?Sized>(&self, log: &B) -> Result<(), AppError> {
        self.http_client
            .dispatch(POST_LOG.request().with_json(log)?)
            .await
    }
}
