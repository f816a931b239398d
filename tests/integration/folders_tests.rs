use crate::common::{BEARER, create_test_client};
use mockito::{Matcher, Server};
use uipath_client::prelude::*;

#[tokio::test]
async fn test_search_folders_by_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/FoldersNavigation/GetFoldersForCurrentUser")
        .match_header("authorization", BEARER)
        .match_query(Matcher::UrlEncoded("searchText".into(), "Finance".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"PageItems":[{"Id":11,"DisplayName":"Finance","FullyQualifiedName":"Finance"}],"Count":1}"#,
        )
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let folders = client.folders.get(Some("Finance"), None).await.unwrap();

    assert_eq!(folders["Count"], 1);
    assert_eq!(folders["PageItems"][0]["DisplayName"], "Finance");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_folders_by_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/FoldersNavigation/GetFoldersForCurrentUser")
        .match_query(Matcher::UrlEncoded("folderTypes".into(), "Personal".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"PageItems":[],"Count":0}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let folders = client
        .folders
        .get(None, Some(FolderType::Personal))
        .await
        .unwrap();

    assert_eq!(folders["Count"], 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_name_only_sends_name() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/Folders/PatchNameDescription")
        .match_query(Matcher::UrlEncoded(
            "key".into(),
            "2f5c1c9a-0000-4000-8000-000000000001".into(),
        ))
        .match_body(Matcher::Json(json!({ "Name": "Finance EMEA" })))
        .with_status(204)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client
        .folders
        .update_name_description(
            "2f5c1c9a-0000-4000-8000-000000000001",
            Some("Finance EMEA"),
            None,
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_folder_by_key() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/Folders/DeleteByKey")
        .match_query(Matcher::UrlEncoded("key".into(), "abc".into()))
        .with_status(204)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client.folders.delete("abc").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_user_folder_roles_defaults() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/FoldersNavigation/GetAllRolesForUser")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("username".into(), "jdoe".into()),
            Matcher::UrlEncoded("type".into(), "User".into()),
            Matcher::UrlEncoded("skip".into(), "0".into()),
            Matcher::UrlEncoded("take".into(), "100".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"PageItems":[],"Count":0}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client
        .folders
        .get_user_folder_roles(&FolderRolesQuery::new("jdoe"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_folder_navigation_context() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/api/FoldersNavigation/GetFolderNavigationContextForCurrentUser",
        )
        .match_query(Matcher::UrlEncoded("folderId".into(), "11".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"PageItems":[{"Id":11}],"Count":1}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let context = client.folders.get_by_id(11).await.unwrap();

    assert_eq!(context["PageItems"][0]["Id"], 11);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_folders_returns_array_unchanged() {
    let mut server = Server::new_async().await;
    let body = json!([
        { "Id": 11, "DisplayName": "Finance" },
        { "Id": 12, "DisplayName": "Finance EMEA" }
    ]);
    let mock = server
        .mock("GET", "/api/FoldersNavigation/GetFoldersForCurrentUser")
        .match_query(Matcher::UrlEncoded("searchText".into(), "Finance".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let folders = client.folders.get(Some("Finance"), None).await.unwrap();

    assert_eq!(folders, body);
    mock.assert_async().await;
}
