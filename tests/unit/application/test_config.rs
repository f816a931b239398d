use uipath_client::application::config::{Config, Credentials, IdentityConfig, RestApiConfig};
use uipath_client::constants::{DEFAULT_BASE_URL, DEFAULT_SCOPE, DEFAULT_TIMEOUT_SECS};

#[test]
fn test_config_with_client_credentials() {
    let config = Config::with_client_credentials("app-id", "app-secret", "OR.Folders OR.Users");
    assert_eq!(config.credentials.client_id, "app-id");
    assert_eq!(config.credentials.client_secret, "app-secret");
    assert_eq!(config.credentials.scope, "OR.Folders OR.Users");
    assert!(config.credentials.access_token.is_none());
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert!(config.tenant_name.is_none());
    assert!(config.folder_id.is_none());
}

#[test]
fn test_config_with_access_token() {
    let config = Config::with_access_token("pat-123");
    assert_eq!(config.credentials.access_token.as_deref(), Some("pat-123"));
    assert_eq!(config.credentials.scope, DEFAULT_SCOPE);
    assert!(config.credentials.client_id.is_empty());
}

#[test]
fn test_config_builders() {
    let config = Config::with_access_token("t")
        .base_url("https://cloud.uipath.com/acme/DefaultTenant/orchestrator_")
        .identity_url("https://cloud.uipath.com/identity_/")
        .tenant("DefaultTenant")
        .folder(42);
    assert_eq!(
        config.rest_api.base_url,
        "https://cloud.uipath.com/acme/DefaultTenant/orchestrator_"
    );
    assert_eq!(config.tenant_name.as_deref(), Some("DefaultTenant"));
    assert_eq!(config.folder_id, Some(42));
    assert_eq!(
        config.token_url(),
        "https://cloud.uipath.com/identity_/connect/token"
    );
}

#[test]
fn test_config_serialization() {
    let config = Config {
        credentials: Credentials {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            scope: "OR.Default".to_string(),
            access_token: None,
        },
        rest_api: RestApiConfig {
            base_url: "http://localhost:8080".to_string(),
            timeout: 5,
        },
        identity: IdentityConfig {
            url: "http://localhost:8080/identity".to_string(),
        },
        tenant_name: None,
        folder_id: Some(7),
    };

    let json = serde_json::to_string(&config).unwrap();
    let restored: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.rest_api.timeout, 5);
    assert_eq!(restored.folder_id, Some(7));
    assert!(config.to_string().contains("localhost:8080"));
}

#[test]
fn test_default_sub_configs() {
    assert_eq!(RestApiConfig::default().base_url, DEFAULT_BASE_URL);
    assert_eq!(
        IdentityConfig::default().url,
        "https://cloud.uipath.com/identity_"
    );
}
