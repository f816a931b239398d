use crate::constants::{DEFAULT_BASE_URL, DEFAULT_IDENTITY_URL, DEFAULT_SCOPE, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{env_var, env_var_or};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the Orchestrator API
pub struct Credentials {
    /// OAuth client id of the external application
    pub client_id: String,
    /// OAuth client secret of the external application
    pub client_secret: String,
    /// Space separated OAuth scopes requested with client credentials
    pub scope: String,
    /// Pre-issued bearer token (personal access token); bypasses the OAuth exchange when set
    pub access_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Orchestrator API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Identity server configuration
    pub identity: IdentityConfig,
    /// Tenant name sent with every request, if any
    pub tenant_name: Option<String>,
    /// Folder (organization unit) id sent with every request, if any
    pub folder_id: Option<i64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is joined to
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the identity server issuing access tokens
pub struct IdentityConfig {
    /// Base URL of the identity server (the token endpoint is `{url}/connect/token`)
    pub url: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_IDENTITY_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// The `.env` file is loaded first when present. See the crate documentation
    /// for the list of `UIPATH_*` variables.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = env_var_or("UIPATH_CLIENT_ID", String::new());
        let client_secret = env_var_or("UIPATH_CLIENT_SECRET", String::new());
        let access_token: Option<String> = env_var("UIPATH_ACCESS_TOKEN");

        if access_token.is_none() {
            if client_id.is_empty() {
                error!("UIPATH_CLIENT_ID not found in environment variables or .env file");
            }
            if client_secret.is_empty() {
                error!("UIPATH_CLIENT_SECRET not found in environment variables or .env file");
            }
        }

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
                scope: env_var_or("UIPATH_SCOPE", DEFAULT_SCOPE.to_string()),
                access_token,
            },
            rest_api: RestApiConfig {
                base_url: env_var_or("UIPATH_BASE_URL", DEFAULT_BASE_URL.to_string()),
                timeout: env_var_or("UIPATH_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            identity: IdentityConfig {
                url: env_var_or("UIPATH_IDENTITY_URL", DEFAULT_IDENTITY_URL.to_string()),
            },
            tenant_name: env_var("UIPATH_TENANT_NAME"),
            folder_id: env_var("UIPATH_FOLDER_ID"),
        }
    }

    /// Creates a configuration for OAuth client credentials against the default cloud endpoints
    pub fn with_client_credentials(client_id: &str, client_secret: &str, scope: &str) -> Self {
        Config {
            credentials: Credentials {
                client_id: client_id.to_string(),
                client_secret: client_secret.to_string(),
                scope: scope.to_string(),
                access_token: None,
            },
            rest_api: RestApiConfig::default(),
            identity: IdentityConfig::default(),
            tenant_name: None,
            folder_id: None,
        }
    }

    /// Creates a configuration using a pre-issued bearer token
    pub fn with_access_token(access_token: &str) -> Self {
        Config {
            credentials: Credentials {
                access_token: Some(access_token.to_string()),
                scope: DEFAULT_SCOPE.to_string(),
                ..Default::default()
            },
            rest_api: RestApiConfig::default(),
            identity: IdentityConfig::default(),
            tenant_name: None,
            folder_id: None,
        }
    }

    /// Overrides the REST base URL
    #[must_use]
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.rest_api.base_url = base_url.to_string();
        self
    }

    /// Overrides the identity server URL
    #[must_use]
    pub fn identity_url(mut self, url: &str) -> Self {
        self.identity.url = url.to_string();
        self
    }

    /// Sets the tenant name header
    #[must_use]
    pub fn tenant(mut self, tenant_name: &str) -> Self {
        self.tenant_name = Some(tenant_name.to_string());
        self
    }

    /// Sets the folder (organization unit) header
    #[must_use]
    pub fn folder(mut self, folder_id: i64) -> Self {
        self.folder_id = Some(folder_id);
        self
    }

    /// Token endpoint derived from the identity server URL
    #[must_use]
    pub fn token_url(&self) -> String {
        format!(
            "{}/{}",
            self.identity.url.trim_end_matches('/'),
            crate::constants::TOKEN_ENDPOINT
        )
    }
}
