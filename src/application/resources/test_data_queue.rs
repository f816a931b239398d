use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::warn;

const ADD_ITEM: Endpoint = Endpoint::post("/api/TestDataQueueActions/AddItem");
const BULK_ADD_ITEMS: Endpoint = Endpoint::post("/api/TestDataQueueActions/BulkAddItems");
const DELETE_ALL_ITEMS: Endpoint = Endpoint::delete("/api/TestDataQueueActions/DeleteAllItems");

/// Client for `/api/TestDataQueueActions`
pub struct TestDataQueueClient {
    http_client: Arc<HttpClient>,
}

impl TestDataQueueClient {
    /// Creates a new test data queue client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Adds one item to a test data queue
    pub async fn add_item(&self, queue_name: &str, content: Value) -> Result<Value, AppError> {
        let body = json!({ "QueueName": queue_name, "Content": content });
        self.http_client
            .send(ADD_ITEM.request().with_body(body))
            .await
    }

    /// Adds several items to a test data queue, returning how many were added
    pub async fn bulk_add_items(
        &self,
        queue_name: &str,
        items: Vec<Value>,
    ) -> Result<Value, AppError> {
        let body = json!({ "QueueName": queue_name, "Items": items });
        self.http_client
            .send(BULK_ADD_ITEMS.request().with_body(body))
            .await
    }

    /// Removes every item from a test data queue
    pub async fn delete_all_items(&self, queue_name: &str) -> Result<(), AppError> {
        warn!("Deleting all items of test data queue {}", queue_name);
        self.http_client
            .dispatch(DELETE_ALL_ITEMS.request().with_param("queueName", queue_name))
            .await
    }
}
