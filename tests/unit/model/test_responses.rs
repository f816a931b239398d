use serde::Deserialize;
use serde_json::{Value, json};
use uipath_client::error::AppError;
use uipath_client::model::responses::{ApiResponse, ODataCollection, PagedResult};

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
struct User {
    id: i64,
    user_name: String,
}

#[test]
fn test_empty_response() {
    assert!(ApiResponse::Empty.is_empty());
    assert_eq!(ApiResponse::Empty.into_value().unwrap(), Value::Null);

    let none: Option<User> = ApiResponse::Empty.into_json().unwrap();
    assert!(none.is_none());
    assert!(ApiResponse::Empty.into_bytes().unwrap().is_empty());
}

#[test]
fn test_json_response_into_typed() {
    let response = ApiResponse::Json(json!({ "Id": 5, "UserName": "jdoe" }));
    assert!(!response.is_empty());
    let user: User = response.into_json().unwrap();
    assert_eq!(
        user,
        User {
            id: 5,
            user_name: "jdoe".to_string()
        }
    );
}

#[test]
fn test_json_response_type_mismatch() {
    let response = ApiResponse::Json(json!({ "Id": "not-a-number" }));
    let result: Result<User, AppError> = response.into_json();
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[test]
fn test_raw_response() {
    let response = ApiResponse::Raw(b"Id,Action\n1,Create\n".to_vec());
    assert!(!response.is_empty());
    assert_eq!(
        response.clone().into_bytes().unwrap(),
        b"Id,Action\n1,Create\n".to_vec()
    );
    assert!(matches!(
        response.into_value(),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_odata_collection_deserialization() {
    let body = json!({
        "@odata.context": "https://cloud.uipath.com/odata/$metadata#Users",
        "@odata.count": 2,
        "value": [
            { "Id": 1, "UserName": "admin" },
            { "Id": 2, "UserName": "jdoe" }
        ]
    });
    let users: ODataCollection<User> = serde_json::from_value(body).unwrap();
    assert_eq!(users.count, Some(2));
    assert_eq!(users.len(), 2);
    assert_eq!(users.value[1].user_name, "jdoe");
    assert!(users.context.is_some());
}

#[test]
fn test_odata_collection_without_metadata() {
    let users: ODataCollection<User> = serde_json::from_value(json!({ "value": [] })).unwrap();
    assert!(users.is_empty());
    assert_eq!(users.count, None);
}

#[test]
fn test_paged_result_deserialization() {
    let body = json!({
        "PageItems": [{ "Id": 9, "UserName": "svc" }],
        "Count": 31
    });
    let page: PagedResult<User> = serde_json::from_value(body).unwrap();
    assert_eq!(page.count, 31);
    assert_eq!(page.page_items.len(), 1);
}
