/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

const WEBHOOKS: EntitySet = EntitySet::new("Webhooks");

/// Client for `/odata/Webhooks`
pub struct WebhooksClient {
    http_client: Arc<HttpClient>,
}

impl WebhooksClient {
    /// Creates a new webhooks client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Creates a webhook
    ///
    /// The body carries at least `Url`, `Enabled`, `Secret`,
    /// `SubscribeToAllEvents` and `Events`.
    pub async fn create<B: Serialize + ?Sized>(&self, webhook: &B) -> Result<Value, AppError> {
        self.http_client
            .send(WEBHOOKS.create().with_json(webhook)?)
            .await
    }

    /// Gets one webhook when `webhook_id` is given, every webhook otherwise
    pub async fn get(&self, webhook_id: Option<i64>) -> Result<Value, AppError> {
        let request = match webhook_id {
            Some(id) => WEBHOOKS.get(id),
            None => WEBHOOKS.list(),
        };
        self.http_client.send(request).await
    }

    /// Replaces a webhook
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        webhook_id: i64,
        webhook: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(WEBHOOKS.update(webhook_id).with_json(webhook)?)
            .await
    }

    /// Deletes a webhook
    pub async fn delete(&self, webhook_id: i64) -> Result<(), AppError> {
        self.http_client.dispatch(WEBHOOKS.delete(webhook_id)).await
    }

    /// Gets the event types a webhook can subscribe to
    pub async fn get_event_types(&self) -> Result<Value, AppError> {
        self.http_client.send(WEBHOOKS.function("GetEventTypes")).await
    }

    /// Sends a ping event through a webhook
    pub async fn ping(&self, webhook_id: i64) -> Result<Value, AppError> {
        debug!("Pinging webhook {}", webhook_id);
        self.http_client.send(WEBHOOKS.action(webhook_id, "Ping")).await
    }
}
