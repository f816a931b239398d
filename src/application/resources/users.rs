/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use crate::model::requests::UserFilter;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

const USERS: EntitySet = EntitySet::new("Users");

/// Client for `/odata/Users`
pub struct UsersClient {
    http_client: Arc<HttpClient>,
}

impl UsersClient {
    /// Creates a new users client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets users
    ///
    /// # Example
    /// ```ignore
    /// let filter = UserFilter::new().with_email("jane@example.com").with_is_active(true);
    /// let users = client.users.get(&filter).await?;
    /// ```
    pub async fn get(&self, filter: &UserFilter<'_>) -> Result<Value, AppError> {
        self.http_client
            .send(USERS.list().with_query(filter.to_query()))
            .await
    }

    /// Gets one user
    pub async fn get_by_id(&self, user_id: i64) -> Result<Value, AppError> {
        self.http_client.send(USERS.get(user_id)).await
    }

    /// Creates a user
    ///
    /// The body typically carries `UserName`, `Name`, `Surname`,
    /// `EmailAddress`, `RolesList` and `OrganizationUnits`.
    pub async fn create<B: Serialize + ?Sized>(&self, user: &B) -> Result<Value, AppError> {
        self.http_client.send(USERS.create().with_json(user)?).await
    }

    /// Replaces a user
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        user_id: i64,
        user: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(USERS.update(user_id).with_json(user)?)
            .await
    }

    /// Deletes a user
    pub async fn delete(&self, user_id: i64) -> Result<(), AppError> {
        info!("Deleting user {}", user_id);
        self.http_client.dispatch(USERS.delete(user_id)).await
    }

    /// Changes a user's password
    pub async fn change_password(
        &self,
        user_id: i64,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let body = json!({
            "currentPassword": current_password,
            "newPassword": new_password,
        });
        self.http_client
            .dispatch(USERS.action(user_id, "ChangePassword").with_body(body))
            .await
    }
}
