/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::auth::AuthProvider;
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::endpoint::{ApiRequest, HttpMethod, ResponseMode};
use crate::model::query::QueryParams;
use crate::model::responses::ApiResponse;
use reqwest::Client as HttpInternalClient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Request dispatcher shared by every resource client
///
/// Joins paths to the base URL, attaches the auth provider headers, performs
/// exactly one HTTP call and turns the response into an [`ApiResponse`] or an
/// [`AppError`]. There is no retry and no caching.
pub struct HttpClient {
    auth: Arc<dyn AuthProvider>,
    http_client: HttpInternalClient,
    base_url: String,
}

impl HttpClient {
    /// Creates a dispatcher for `base_url`
    ///
    /// # Arguments
    /// * `auth` - Provider of the authentication headers
    /// * `base_url` - URL every endpoint path is joined to
    pub fn new(auth: Arc<dyn AuthProvider>, base_url: &str) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(auth, base_url, http_client))
    }

    /// Creates a dispatcher using the base URL and timeout from `config`
    pub fn from_config(auth: Arc<dyn AuthProvider>, config: &Config) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        Ok(Self::with_client(auth, &config.rest_api.base_url, http_client))
    }

    /// Creates a dispatcher around an existing reqwest client
    pub fn with_client(
        auth: Arc<dyn AuthProvider>,
        base_url: &str,
        http_client: HttpInternalClient,
    ) -> Self {
        Self {
            auth,
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without trailing separator
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`, with exactly one `/` at the join
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Performs one request
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - Decoded body of a 2xx response
    /// * `Err(AppError::Http)` - Non-2xx status, with the body preserved
    /// * `Err(AppError::Network)` - Transport failure
    /// * `Err(AppError::Auth)` - The auth provider could not produce credentials
    pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let headers = self.auth.headers().await?;
        let url = self.url_for(&request.path);

        debug!("{} {}", request.method, url);

        let mut builder = self
            .http_client
            .request(request.method.into(), &url)
            .header("Accept", "application/json");

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if !request.query.is_empty() {
            builder = builder.query(request.query.as_slice());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Http { status, body });
        }

        let bytes = response.bytes().await?;
        match request.response_mode {
            ResponseMode::Raw => Ok(ApiResponse::Raw(bytes.to_vec())),
            ResponseMode::Json if bytes.is_empty() => Ok(ApiResponse::Empty),
            ResponseMode::Json => Ok(ApiResponse::Json(serde_json::from_slice(&bytes)?)),
        }
    }

    /// Performs a request and deserializes the body into `T`
    ///
    /// An empty body is decoded from `null`, so `Value` yields `Value::Null`
    /// and `Option<_>` yields `None`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, AppError> {
        self.request(request).await?.into_json()
    }

    /// Performs a request in raw mode and returns the body bytes
    pub async fn send_raw(&self, request: ApiRequest) -> Result<Vec<u8>, AppError> {
        self.request(request.raw()).await?.into_bytes()
    }

    /// Performs a request whose body is not needed; failures still propagate
    pub async fn dispatch(&self, request: ApiRequest) -> Result<(), AppError> {
        self.request(request).await.map(|_| ())
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str, query: QueryParams) -> Result<Value, AppError> {
        self.send(ApiRequest::new(HttpMethod::Get, path).with_query(query))
            .await
    }

    /// Makes a POST request
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, AppError> {
        self.send(ApiRequest::new(HttpMethod::Post, path).with_body(body))
            .await
    }

    /// Makes a PUT request
    pub async fn put(&self, path: &str, body: Value) -> Result<Value, AppError> {
        self.send(ApiRequest::new(HttpMethod::Put, path).with_body(body))
            .await
    }

    /// Makes a PATCH request
    pub async fn patch(&self, path: &str, body: Value) -> Result<Value, AppError> {
        self.send(ApiRequest::new(HttpMethod::Patch, path).with_body(body))
            .await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Value, AppError> {
        self.send(ApiRequest::new(HttpMethod::Delete, path)).await
    }
}
