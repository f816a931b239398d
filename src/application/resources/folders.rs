/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use crate::model::query::QueryParams;
use crate::model::requests::{FolderRolesQuery, FolderType};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

const DELETE_BY_KEY: Endpoint = Endpoint::delete("/api/Folders/DeleteByKey");
const GET_ALL_FOR_CURRENT_USER: Endpoint = Endpoint::get("/api/Folders/GetAllForCurrentUser");
const PATCH_NAME_DESCRIPTION: Endpoint = Endpoint::patch("/api/Folders/PatchNameDescription");
const GET_FOLDERS_FOR_CURRENT_USER: Endpoint =
    Endpoint::get("/api/FoldersNavigation/GetFoldersForCurrentUser");
const GET_NAVIGATION_CONTEXT: Endpoint =
    Endpoint::get("/api/FoldersNavigation/GetFolderNavigationContextForCurrentUser");
const GET_ALL_FOLDERS: Endpoint = Endpoint::get("/api/FoldersNavigation/GetAllFoldersForCurrentUser");
const GET_ALL_ROLES_FOR_USER: Endpoint = Endpoint::get("/api/FoldersNavigation/GetAllRolesForUser");

/// Client for `/api/Folders` and `/api/FoldersNavigation`
pub struct FoldersClient {
    http_client: Arc<HttpClient>,
}

impl FoldersClient {
    /// Creates a new folders client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Deletes a folder
    ///
    /// Orchestrator only accepts this when no entity or user association exists
    /// in the folder or any of its descendants.
    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        info!("Deleting folder {}", key);
        self.http_client
            .dispatch(DELETE_BY_KEY.request().with_param("key", key))
            .await
    }

    /// Gets the folders of the current user, paginated
    ///
    /// # Returns
    /// `{"PageItems": [...], "Count": n}`; see [`PagedResult`](crate::model::responses::PagedResult)
    pub async fn get_all_for_current_user(
        &self,
        take: Option<u32>,
        skip: Option<u32>,
    ) -> Result<Value, AppError> {
        let query = QueryParams::new()
            .with_opt("take", take)
            .with_opt("skip", skip);
        self.http_client
            .send(GET_ALL_FOR_CURRENT_USER.request().with_query(query))
            .await
    }

    /// Updates a folder name and/or description; only the given fields are sent
    pub async fn update_name_description(
        &self,
        key: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<(), AppError> {
        let mut body = Map::new();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            body.insert("Name".to_string(), Value::from(name));
        }
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            body.insert("Description".to_string(), Value::from(description));
        }
        self.http_client
            .dispatch(
                PATCH_NAME_DESCRIPTION
                    .request()
                    .with_param("key", key)
                    .with_body(Value::Object(body)),
            )
            .await
    }

    /// Gets the folders visible to the current user, optionally filtered by name and type
    ///
    /// The response is returned unchanged: a JSON array of folders, or a
    /// `PageItems`/`Count` page on servers that paginate this endpoint.
    pub async fn get(
        &self,
        search_text: Option<&str>,
        folder_type: Option<FolderType>,
    ) -> Result<Value, AppError> {
        let query = QueryParams::new()
            .with_text("searchText", search_text)
            .with_opt("folderTypes", folder_type);
        let folders = self
            .http_client
            .send::<Value>(GET_FOLDERS_FOR_CURRENT_USER.request().with_query(query))
            .await?;
        let items = folders
            .as_array()
            .or_else(|| folders.get("PageItems").and_then(Value::as_array));
        if let Some(items) = items {
            debug!("Folders obtained: {} folders", items.len());
        }
        Ok(folders)
    }

    /// Gets the navigation context of one folder
    pub async fn get_by_id(&self, folder_id: i64) -> Result<Value, AppError> {
        self.http_client
            .send(
                GET_NAVIGATION_CONTEXT
                    .request()
                    .with_param("folderId", folder_id),
            )
            .await
    }

    /// Gets the whole folder hierarchy of the current user
    pub async fn get_folder_hierarchy(&self) -> Result<Value, AppError> {
        self.http_client.send(GET_ALL_FOLDERS.request()).await
    }

    /// Gets the folder roles assigned to a user
    pub async fn get_user_folder_roles(
        &self,
        query: &FolderRolesQuery<'_>,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(GET_ALL_ROLES_FOR_USER.request().with_query(query.to_query()))
            .await
    }
}
