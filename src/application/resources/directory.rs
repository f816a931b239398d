use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use crate::model::query::QueryParams;
use serde_json::Value;
use std::sync::Arc;

const GET_PERMISSIONS: Endpoint = Endpoint::get("/api/DirectoryService/GetDirectoryPermissions");
const GET_DOMAINS: Endpoint = Endpoint::get("/api/DirectoryService/GetDomains");
const GET_DOMAIN_USER_ID: Endpoint = Endpoint::get("/api/DirectoryService/GetDomainUserId");
const SEARCH: Endpoint = Endpoint::get("/api/DirectoryService/SearchForUsersAndGroups");

/// Client for `/api/DirectoryService`
pub struct DirectoryClient {
    http_client: Arc<HttpClient>,
}

impl DirectoryClient {
    /// Creates a new directory client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets directory permissions, optionally for one user and/or domain
    pub async fn get_permissions(
        &self,
        username: Option<&str>,
        domain: Option<&str>,
    ) -> Result<Value, AppError> {
        let query = QueryParams::new()
            .with_text("username", username)
            .with_text("domain", domain);
        self.http_client
            .send(GET_PERMISSIONS.request().with_query(query))
            .await
    }

    /// Gets the available domains
    pub async fn get_domains(&self) -> Result<Value, AppError> {
        self.http_client.send(GET_DOMAINS.request()).await
    }

    /// Gets the Orchestrator user id matching a directory user
    ///
    /// # Arguments
    /// * `domain` - The domain name
    /// * `directory_identifier` - Directory identifier
    /// * `user_name` - Username to search for
    /// * `user_type` - Type of user (User, Robot, DirectoryUser, ...)
    pub async fn get_domain_user_id(
        &self,
        domain: &str,
        directory_identifier: &str,
        user_name: &str,
        user_type: &str,
    ) -> Result<Value, AppError> {
        let query = QueryParams::new()
            .with("domain", domain)
            .with("directoryIdentifier", directory_identifier)
            .with("userName", user_name)
            .with("userType", user_type);
        self.http_client
            .send(GET_DOMAIN_USER_ID.request().with_query(query))
            .await
    }

    /// Searches users and groups by prefix
    pub async fn search_users_and_groups(
        &self,
        search_context: &str,
        domain: &str,
        prefix: &str,
    ) -> Result<Value, AppError> {
        let query = QueryParams::new()
            .with("searchContext", search_context)
            .with("domain", domain)
            .with("prefix", prefix);
        self.http_client.send(SEARCH.request().with_query(query)).await
    }
}
