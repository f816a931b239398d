use crate::common::{BEARER, create_test_client};
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use std::io::Write;
use std::sync::Arc;
use uipath_client::prelude::*;

#[tokio::test]
async fn test_base_url_with_trailing_slash_joins_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/Status/Get")
        .match_header("authorization", BEARER)
        .match_header("accept", "application/json")
        .with_status(200)
        .create_async()
        .await;

    let client = create_test_client(&format!("{}/", server.url()));
    client.status.get().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_preserved() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/Maintenance/Status")
        .with_status(500)
        .with_body(r#"{"message":"Internal error","errorCode":1000}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let error = client.maintenance.get_status().await.unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(error.is_server_error());
    assert_eq!(
        error.body(),
        Some(r#"{"message":"Internal error","errorCode":1000}"#)
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/odata/Settings")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let error = client.settings.get_settings().await.unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_content_yields_empty_result() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/odata/Assets(3)")
        .with_status(204)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let result = client
        .assets
        .update(3, &json!({ "Name": "ApiKey", "StringValue": "v2" }))
        .await
        .unwrap();

    assert_eq!(result, Value::Null);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_raw_request_returns_body_bytes() {
    let mut server = Server::new_async().await;
    let csv = "Id,Action,Component\n1,Create,Users\n";
    let mock = server
        .mock(
            "GET",
            "/odata/AuditLogs/UiPath.Server.Configuration.OData.Export",
        )
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "2024-01-01".into()),
            Matcher::UrlEncoded("to".into(), "2024-01-31".into()),
            Matcher::UrlEncoded("format".into(), "CSV".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "text/csv")
        .with_body(csv)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let bytes = client
        .audit
        .export_audit_logs("2024-01-01", "2024-01-31", ExportFormat::Csv)
        .await
        .unwrap();

    assert_eq!(bytes, csv.as_bytes());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_json_is_a_json_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/Stats/GetCountStats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"Type\": ")
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let result = client.stats.get_count_stats().await;

    assert!(matches!(result, Err(AppError::Json(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreadable_error_body_is_a_network_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/Stats/GetJobsStats")
        .with_status(500)
        .with_chunked_body(|writer| {
            writer.write_all(b"{\"message\":")?;
            Err(std::io::Error::other("connection dropped"))
        })
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let result = client.stats.get_jobs_stats().await;

    assert!(matches!(result, Err(AppError::Network(_))));
}

#[tokio::test]
async fn test_connection_refused_is_a_network_error() {
    // Nothing listens on port 1
    let client = create_test_client("http://127.0.0.1:1");
    let result = client.status.get().await;
    assert!(matches!(result, Err(AppError::Network(_))));
}

#[tokio::test]
async fn test_typed_send_through_dispatcher() {
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Machine {
        id: i64,
        name: String,
    }

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/odata/Machines")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"@odata.count":1,"value":[{"Id":4,"Name":"VM-01"}]}"#)
        .create_async()
        .await;

    let http_client = HttpClient::new(Arc::new(BearerTokenAuth::new("t")), &server.url()).unwrap();
    let machines: ODataCollection<Machine> = http_client
        .send(EntitySet::new("Machines").list())
        .await
        .unwrap();

    assert_eq!(machines.count, Some(1));
    assert_eq!(machines.value[0].id, 4);
    assert_eq!(machines.value[0].name, "VM-01");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_convenience_methods() {
    let mut server = Server::new_async().await;
    let get_mock = server
        .mock("GET", "/api/Folders/GetAllForCurrentUser")
        .match_query(Matcher::UrlEncoded("take".into(), "5".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"PageItems":[],"Count":0}"#)
        .create_async()
        .await;
    let post_mock = server
        .mock("POST", "/api/Logs")
        .match_body(Matcher::Json(json!({ "message": "hello" })))
        .with_status(200)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let http_client = client.http_client();
    let page = http_client
        .get(
            "/api/Folders/GetAllForCurrentUser",
            QueryParams::new().with("take", 5),
        )
        .await
        .unwrap();
    assert_eq!(page["Count"], 0);

    let posted = http_client
        .post("api/Logs", json!({ "message": "hello" }))
        .await
        .unwrap();
    assert_eq!(posted, Value::Null);

    get_mock.assert_async().await;
    post_mock.assert_async().await;
}
