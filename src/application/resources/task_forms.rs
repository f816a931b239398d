/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use crate::model::query::{ODataFilter, QueryParams};
use crate::model::requests::TaskQuery;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

const TASK_FORMS: EntitySet = EntitySet::new("TaskForms");
const TASKS: EntitySet = EntitySet::new("Tasks");

/// Client for `/odata/TaskForms` and `/odata/Tasks`
pub struct TaskFormsClient {
    http_client: Arc<HttpClient>,
}

impl TaskFormsClient {
    /// Creates a new task forms client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets task forms, optionally filtered by process name and status
    /// (Pending, Completed, Canceled)
    pub async fn get(
        &self,
        process_name: Option<&str>,
        status: Option<&str>,
    ) -> Result<Value, AppError> {
        let filter = ODataFilter::new()
            .eq_text("ProcessName", process_name)
            .eq_text("Status", status);
        self.http_client
            .send(TASK_FORMS.list().with_query(QueryParams::new().with_filter(&filter)))
            .await
    }

    /// Gets one task form
    pub async fn get_by_id(&self, form_id: i64) -> Result<Value, AppError> {
        self.http_client.send(TASK_FORMS.get(form_id)).await
    }

    /// Submits a response to a task form
    pub async fn submit<B: Serialize + ?Sized>(
        &self,
        form_id: i64,
        data: &B,
    ) -> Result<(), AppError> {
        self.http_client
            .dispatch(TASK_FORMS.action(form_id, "Submit").with_json(data)?)
            .await
    }

    /// Assigns a task form to a user
    pub async fn assign(&self, form_id: i64, user_id: i64) -> Result<(), AppError> {
        debug!("Assigning task form {} to user {}", form_id, user_id);
        self.http_client
            .dispatch(
                TASK_FORMS
                    .action(form_id, "Assign")
                    .with_body(json!({ "userId": user_id })),
            )
            .await
    }

    /// Gets tasks, one page at a time
    pub async fn get_tasks(&self, query: &TaskQuery<'_>) -> Result<Value, AppError> {
        self.http_client
            .send(TASKS.list().with_query(query.to_query()))
            .await
    }

    /// Gets one task
    pub async fn get_task_by_id(&self, task_id: i64) -> Result<Value, AppError> {
        self.http_client.send(TASKS.get(task_id)).await
    }

    /// Replaces a task
    pub async fn update_task<B: Serialize + ?Sized>(
        &self,
        task_id: i64,
        task: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(TASKS.update(task_id).with_json(task)?)
            .await
    }

    /// Deletes a task
    pub async fn delete_task(&self, task_id: i64) -> Result<(), AppError> {
        self.http_client.dispatch(TASKS.delete(task_id)).await
    }

    /// Completes a task with the given action
    pub async fn complete_task(&self, task_id: i64, action: &str) -> Result<(), AppError> {
        self.http_client
            .dispatch(
                TASKS
                    .action(task_id, "Complete")
                    .with_body(json!({ "action": action })),
            )
            .await
    }
}
