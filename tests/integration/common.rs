// Common utilities for integration tests

use std::sync::Arc;
use uipath_client::prelude::*;

pub const TEST_TOKEN: &str = "test-token";
pub const BEARER: &str = "Bearer test-token";

/// Creates a client authenticated with a static token against the mock server
pub fn create_test_client(server_url: &str) -> Client {
    setup_logger();
    Client::new(Arc::new(BearerTokenAuth::new(TEST_TOKEN)), server_url)
        .expect("Failed to create client")
}

/// Creates a client-credentials configuration whose identity server is the mock server
pub fn create_test_config(server_url: &str) -> Config {
    Config::with_client_credentials("test-client", "test-secret", "OR.Default")
        .base_url(server_url)
        .identity_url(server_url)
}

/// JSON body of a successful token exchange
pub fn token_body(access_token: &str, expires_in: u64) -> String {
    json!({
        "access_token": access_token,
        "expires_in": expires_in,
        "token_type": "Bearer",
        "scope": "OR.Default"
    })
    .to_string()
}
