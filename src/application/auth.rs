/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authentication for the Orchestrator API
//!
//! Every request carries the headers returned by an [`AuthProvider`]. Two
//! providers are included:
//! - [`BearerTokenAuth`]: a pre-issued token (personal access token)
//! - [`ClientCredentialsAuth`]: OAuth client credentials with a cached token
//!   that is exchanged again shortly before it expires

use crate::application::config::Config;
use crate::constants::{FOLDER_HEADER, TENANT_HEADER, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{OAuthToken, TokenResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Header name/value pairs attached to every request
pub type AuthHeaders = Vec<(String, String)>;

/// Source of per-request authentication headers
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Headers for the next request, refreshing credentials when needed
    async fn headers(&self) -> Result<AuthHeaders, AppError>;
}

fn context_headers(tenant_name: Option<&str>, folder_id: Option<i64>) -> AuthHeaders {
    let mut headers = AuthHeaders::new();
    if let Some(tenant) = tenant_name {
        headers.push((TENANT_HEADER.to_string(), tenant.to_string()));
    }
    if let Some(folder) = folder_id {
        headers.push((FOLDER_HEADER.to_string(), folder.to_string()));
    }
    headers
}

/// Static bearer token
#[derive(Clone)]
pub struct BearerTokenAuth {
    token: String,
    tenant_name: Option<String>,
    folder_id: Option<i64>,
}

impl BearerTokenAuth {
    /// Creates a provider for `token`
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            tenant_name: None,
            folder_id: None,
        }
    }

    /// Creates a provider from the access token in `config`
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let token = config
            .credentials
            .access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Auth("access token not configured".to_string()))?;
        Ok(Self {
            token: token.to_string(),
            tenant_name: config.tenant_name.clone(),
            folder_id: config.folder_id,
        })
    }

    /// Sends `X-UIPATH-TenantName` with every request
    #[must_use]
    pub fn with_tenant(mut self, tenant_name: &str) -> Self {
        self.tenant_name = Some(tenant_name.to_string());
        self
    }

    /// Sends `X-UIPATH-OrganizationUnitId` with every request
    #[must_use]
    pub fn with_folder(mut self, folder_id: i64) -> Self {
        self.folder_id = Some(folder_id);
        self
    }
}

#[async_trait]
impl AuthProvider for BearerTokenAuth {
    async fn headers(&self) -> Result<AuthHeaders, AppError> {
        if self.token.is_empty() {
            return Err(AppError::Auth("empty bearer token".to_string()));
        }
        let mut headers = vec![("Authorization".to_string(), format!("Bearer {}", self.token))];
        headers.extend(context_headers(self.tenant_name.as_deref(), self.folder_id));
        Ok(headers)
    }
}

/// OAuth client-credentials provider
///
/// The access token is cached and reused until it gets within the expiry
/// margin. A failed exchange is reported as [`AppError::Auth`] right away.
pub struct ClientCredentialsAuth {
    config: Arc<Config>,
    client: Client,
    token: Arc<RwLock<Option<OAuthToken>>>,
}

impl ClientCredentialsAuth {
    /// Creates a new provider; no token is requested until the first call
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and the identity server URL
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            config,
            client,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Gets the current token, exchanging credentials when none is cached or it expired
    pub async fn token(&self) -> Result<OAuthToken, AppError> {
        {
            let token = self.token.read().await;
            if let Some(t) = token.as_ref().filter(|t| !t.is_expired(None)) {
                return Ok(t.clone());
            }
        }

        let mut token = self.token.write().await;
        // Another task may have refreshed while we waited for the write lock
        if let Some(t) = token.as_ref().filter(|t| !t.is_expired(None)) {
            return Ok(t.clone());
        }

        if token.is_some() {
            debug!("Access token expired, requesting a new one");
        } else {
            info!("No access token cached, requesting one");
        }
        let fresh = self.exchange().await?;
        *token = Some(fresh.clone());
        Ok(fresh)
    }

    /// Forces a new token exchange and caches the result
    pub async fn refresh(&self) -> Result<OAuthToken, AppError> {
        warn!("Forcing access token refresh");
        let mut token = self.token.write().await;
        let fresh = self.exchange().await?;
        *token = Some(fresh.clone());
        Ok(fresh)
    }

    /// Drops the cached token
    pub async fn clear(&self) {
        let mut token = self.token.write().await;
        *token = None;
    }

    async fn exchange(&self) -> Result<OAuthToken, AppError> {
        let credentials = &self.config.credentials;
        if credentials.client_id.is_empty() || credentials.client_secret.is_empty() {
            return Err(AppError::Auth(
                "client id and client secret are required".to_string(),
            ));
        }

        let url = self.config.token_url();
        debug!("Sending token request to: {}", url);

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("scope", credentials.scope.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| AppError::Auth(format!("token error body unreadable: {e}")))?;
            error!("Token request failed with status {}: {}", status, body);
            return Err(AppError::Auth(format!(
                "token request failed with status {status}: {body}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::Auth(format!("invalid token response: {e}")))?;

        info!("✓ Access token obtained, expires in {}s", body.expires_in);
        Ok(body.into())
    }
}

#[async_trait]
impl AuthProvider for ClientCredentialsAuth {
    async fn headers(&self) -> Result<AuthHeaders, AppError> {
        let token = self.token().await?;
        let mut headers = vec![("Authorization".to_string(), token.authorization())];
        headers.extend(context_headers(
            self.config.tenant_name.as_deref(),
            self.config.folder_id,
        ));
        Ok(headers)
    }
}

/// Picks the provider matching `config`: a bearer token when one is set,
/// otherwise OAuth client credentials
pub fn auth_from_config(config: &Config) -> Result<Arc<dyn AuthProvider>, AppError> {
    if config
        .credentials
        .access_token
        .as_deref()
        .is_some_and(|t| !t.is_empty())
    {
        debug!("Using static bearer token authentication");
        Ok(Arc::new(BearerTokenAuth::from_config(config)?))
    } else {
        debug!("Using OAuth client credentials authentication");
        Ok(Arc::new(ClientCredentialsAuth::new(Arc::new(
            config.clone(),
        ))?))
    }
}
