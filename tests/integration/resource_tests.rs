use crate::common::create_test_client;
use mockito::{Matcher, Server};
use uipath_client::prelude::*;

#[tokio::test]
async fn test_alert_acknowledge_without_notes_sends_empty_object() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            "/odata/Alerts(8)/UiPath.Server.Configuration.OData.Acknowledge",
        )
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client.alerts.acknowledge(8, None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_stop_jobs_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/odata/Jobs/UiPath.Server.Configuration.OData.StopJobs")
        .match_body(Matcher::Json(json!({
            "jobIds": [101, 102],
            "strategy": "Kill"
        })))
        .with_status(200)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client
        .jobs
        .stop_jobs(&[101, 102], StopStrategy::Kill)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_start_jobs_wraps_start_info() {
    let mut server = Server::new_async().await;
    let start_info = json!({
        "ReleaseKey": "5b1f0d5e-0000-4000-8000-000000000002",
        "Strategy": "ModernJobsCount",
        "JobsCount": 1
    });
    let mock = server
        .mock("POST", "/odata/Jobs/UiPath.Server.Configuration.OData.StartJobs")
        .match_body(Matcher::Json(json!({ "startInfo": start_info.clone() })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"value":[{"Id":555,"State":"Pending"}]}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let jobs = client.jobs.start_jobs(&start_info).await.unwrap();

    assert_eq!(jobs["value"][0]["Id"], 555);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_queue_item_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/odata/Queues/UiPathODataSvc.AddQueueItem")
        .match_body(Matcher::Json(json!({
            "itemData": {
                "Name": "Invoices",
                "Priority": "High",
                "SpecificContent": { "InvoiceId": "INV-001" }
            }
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Id":9001,"Status":"New"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let item = QueueItem::new("Invoices", json!({ "InvoiceId": "INV-001" }))
        .with_priority(QueuePriority::High);
    let created = client.queues.add_queue_item(&item).await.unwrap();

    assert_eq!(created["Status"], "New");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_queue_items_filter_and_paging() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/odata/QueueItems")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded(
                "$filter".into(),
                "QueueDefinitionId eq 3 and Status eq 'Failed'".into(),
            ),
            Matcher::UrlEncoded("$skip".into(), "20".into()),
            Matcher::UrlEncoded("$top".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"value":[]}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let filter = QueueItemFilter::new()
        .with_queue_definition_id(3)
        .with_status("Failed")
        .with_skip(20)
        .with_top(10);
    client.queues.get_queue_items(&filter).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_maintenance_start_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/Maintenance/Start")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("phase".into(), "Draining".into()),
            Matcher::UrlEncoded("force".into(), "true".into()),
            Matcher::UrlEncoded("killJobs".into(), "false".into()),
            Matcher::UrlEncoded("tenantId".into(), "1".into()),
        ]))
        .with_status(200)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let params = MaintenanceStart::new(MaintenancePhase::Draining)
        .with_force(true)
        .with_tenant_id(1);
    client.maintenance.start(&params).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_maintenance_enable_with_drain_time() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/Maintenance/Enable")
        .match_body(Matcher::Json(json!({ "drainTimeMinutes": 15 })))
        .with_status(200)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client.maintenance.enable(Some(15)).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_webhook_get_one_or_all() {
    let mut server = Server::new_async().await;
    let all = server
        .mock("GET", "/odata/Webhooks")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"value":[{"Id":1},{"Id":2}]}"#)
        .create_async()
        .await;
    let one = server
        .mock("GET", "/odata/Webhooks(2)")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Id":2,"Url":"https://hooks.example.com/orchestrator"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let webhooks = client.webhooks.get(None).await.unwrap();
    let webhook = client.webhooks.get(Some(2)).await.unwrap();

    assert_eq!(webhooks["value"].as_array().map(Vec::len), Some(2));
    assert_eq!(webhook["Url"], "https://hooks.example.com/orchestrator");
    all.assert_async().await;
    one.assert_async().await;
}

#[tokio::test]
async fn test_webhook_ping() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            "/odata/Webhooks(2)/UiPath.Server.Configuration.OData.Ping",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Success":true}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let result = client.webhooks.ping(2).await.unwrap();

    assert_eq!(result["Success"], true);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_library_versions_use_quoted_key() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/odata/Libraries/UiPath.Server.Configuration.OData.GetVersions(packageId='Common.Activities')",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"value":[{"Version":"1.0.0"},{"Version":"1.1.0"}]}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let versions = client
        .libraries
        .get_versions("Common.Activities")
        .await
        .unwrap();

    assert_eq!(versions["value"][1]["Version"], "1.1.0");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_process_package_download_is_raw() {
    let mut server = Server::new_async().await;
    let package = vec![0x50_u8, 0x4b, 0x03, 0x04, 0x00, 0xff];
    let mock = server
        .mock(
            "GET",
            "/odata/Processes/UiPath.Server.Configuration.OData.DownloadPackage(key='Invoices:1.0.3')",
        )
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(package.clone())
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let bytes = client
        .processes
        .download_package("Invoices:1.0.3")
        .await
        .unwrap();

    assert_eq!(bytes, package);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_task_list_always_pages() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/odata/Tasks")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("$skip".into(), "0".into()),
            Matcher::UrlEncoded("$take".into(), "100".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"value":[]}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client.task_forms.get_tasks(&TaskQuery::new()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_complete_task_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            "/odata/Tasks(77)/UiPath.Server.Configuration.OData.Complete",
        )
        .match_body(Matcher::Json(json!({ "action": "Approve" })))
        .with_status(204)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client.task_forms.complete_task(77, "Approve").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_license_stats_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/Stats/GetLicenseStats")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("tenantId".into(), "1".into()),
            Matcher::UrlEncoded("days".into(), "30".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"robotType":"Unattended","count":4}]"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let stats = client
        .stats
        .get_license_stats(Some(1), Some(30))
        .await
        .unwrap();

    assert_eq!(stats[0]["count"], 4);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_verify_host_availability() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/Status/VerifyHostAvailibility")
        .match_query(Matcher::UrlEncoded(
            "url".into(),
            "https://example.com".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("true")
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let available = client
        .status
        .verify_host_availability("https://example.com")
        .await
        .unwrap();

    assert_eq!(available, Value::Bool(true));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_test_data_queue_delete_all_items() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/TestDataQueueActions/DeleteAllItems")
        .match_query(Matcher::UrlEncoded("queueName".into(), "LoginData".into()))
        .with_status(204)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client
        .test_data_queue
        .delete_all_items("LoginData")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_logs_sends_array() {
    let mut server = Server::new_async().await;
    let entry = json!({ "message": "Process execution started", "level": "Information" })
        .to_string();
    let mock = server
        .mock("POST", "/api/Logs/SubmitLogs")
        .match_body(Matcher::Json(json!([entry.clone()])))
        .with_status(204)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client.logs.submit_logs(&[entry]).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_environments_filter_by_folder() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/odata/Environments")
        .match_query(Matcher::UrlEncoded(
            "$filter".into(),
            "Name eq 'Prod' and OrganizationUnitId eq 5".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"value":[{"Id":2,"Name":"Prod"}]}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let environments = client.environments.get(Some("Prod"), Some(5)).await.unwrap();

    assert_eq!(environments["value"][0]["Id"], 2);
    mock.assert_async().await;
}
