use std::sync::Arc;
use uipath_client::application::auth::BearerTokenAuth;
use uipath_client::application::client::Client;
use uipath_client::application::config::Config;
use uipath_client::model::http::HttpClient;

#[test]
fn test_http_client_url_join() {
    let http_client = HttpClient::new(
        Arc::new(BearerTokenAuth::new("t")),
        "https://cloud.uipath.com/acme/DefaultTenant/orchestrator_/",
    )
    .unwrap();
    assert_eq!(
        http_client.base_url(),
        "https://cloud.uipath.com/acme/DefaultTenant/orchestrator_"
    );
    assert_eq!(
        http_client.url_for("/odata/Users"),
        "https://cloud.uipath.com/acme/DefaultTenant/orchestrator_/odata/Users"
    );
    assert_eq!(
        http_client.url_for("api/Status/Get"),
        "https://cloud.uipath.com/acme/DefaultTenant/orchestrator_/api/Status/Get"
    );
}

#[test]
fn test_client_new() {
    let client = Client::new(Arc::new(BearerTokenAuth::new("t")), "https://example.com").unwrap();
    assert_eq!(client.http_client().base_url(), "https://example.com");
}

#[test]
fn test_client_from_config() {
    let config = Config::with_access_token("t").base_url("http://localhost:9000/");
    let client = Client::from_config(config).unwrap();
    assert_eq!(client.http_client().base_url(), "http://localhost:9000");
}

#[test]
fn test_client_shares_dispatcher() {
    let http_client = Arc::new(
        HttpClient::new(Arc::new(BearerTokenAuth::new("t")), "https://example.com").unwrap(),
    );
    let client = Client::from_http_client(http_client.clone());
    assert!(Arc::ptr_eq(client.http_client(), &http_client));
}
