/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::endpoint::{Endpoint, EntitySet};
use crate::model::http::HttpClient;
use crate::model::query::{ODataFilter, QueryParams};
use crate::model::requests::{QueueItem, QueueItemFilter};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

const QUEUE_DEFINITIONS: EntitySet = EntitySet::new("QueueDefinitions");
const QUEUE_ITEMS: EntitySet = EntitySet::new("QueueItems");
const ADD_QUEUE_ITEM: Endpoint = Endpoint::post("/odata/Queues/UiPathODataSvc.AddQueueItem");

/// Client for queue definitions and queue items
pub struct QueuesClient {
    http_client: Arc<HttpClient>,
}

impl QueuesClient {
    /// Creates a new queues client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets queue definitions, optionally filtered by name
    pub async fn get(&self, name: Option<&str>) -> Result<Value, AppError> {
        let filter = ODataFilter::new().eq_text("Name", name);
        self.http_client
            .send(
                QUEUE_DEFINITIONS
                    .list()
                    .with_query(QueryParams::new().with_filter(&filter)),
            )
            .await
    }

    /// Gets one queue definition
    pub async fn get_by_id(&self, queue_id: i64) -> Result<Value, AppError> {
        self.http_client.send(QUEUE_DEFINITIONS.get(queue_id)).await
    }

    /// Creates a queue definition
    pub async fn create<B: Serialize + ?Sized>(&self, queue: &B) -> Result<Value, AppError> {
        self.http_client
            .send(QUEUE_DEFINITIONS.create().with_json(queue)?)
            .await
    }

    /// Replaces a queue definition
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        queue_id: i64,
        queue: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(QUEUE_DEFINITIONS.update(queue_id).with_json(queue)?)
            .await
    }

    /// Deletes a queue definition
    pub async fn delete(&self, queue_id: i64) -> Result<(), AppError> {
        self.http_client
            .dispatch(QUEUE_DEFINITIONS.delete(queue_id))
            .await
    }

    /// Adds an item to a queue
    pub async fn add_queue_item(&self, item: &QueueItem) -> Result<Value, AppError> {
        debug!("Adding item to queue {}", item.name);
        self.http_client
            .send(ADD_QUEUE_ITEM.request().with_body(json!({ "itemData": item })))
            .await
    }

    /// Gets queue items
    pub async fn get_queue_items(&self, filter: &QueueItemFilter<'_>) -> Result<Value, AppError> {
        self.http_client
            .send(QUEUE_ITEMS.list().with_query(filter.to_query()))
            .await
    }

    /// Gets one queue item
    pub async fn get_queue_item_by_id(&self, item_id: i64) -> Result<Value, AppError> {
        self.http_client.send(QUEUE_ITEMS.get(item_id)).await
    }

    /// Deletes a queue item
    pub async fn delete_queue_item(&self, item_id: i64) -> Result<(), AppError> {
        self.http_client.dispatch(QUEUE_ITEMS.delete(item_id)).await
    }
}
