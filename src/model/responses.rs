/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded body of a successful response
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// 2xx with no body (e.g. 204 after DELETE/PUT)
    Empty,
    /// JSON body
    Json(Value),
    /// Body bytes returned untouched in raw mode
    Raw(Vec<u8>),
}

impl ApiResponse {
    /// Whether the response carried no body
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ApiResponse::Empty => true,
            ApiResponse::Raw(bytes) => bytes.is_empty(),
            ApiResponse::Json(_) => false,
        }
    }

    /// The JSON value, `Value::Null` for an empty body
    pub fn into_value(self) -> Result<Value, AppError> {
        match self {
            ApiResponse::Empty => Ok(Value::Null),
            ApiResponse::Json(v) => Ok(v),
            ApiResponse::Raw(_) => Err(AppError::InvalidInput(
                "raw response cannot be read as JSON".to_string(),
            )),
        }
    }

    /// Deserializes the body into `T`; an empty body is decoded from `null`
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, AppError> {
        Ok(serde_json::from_value(self.into_value()?)?)
    }

    /// The body bytes; JSON bodies are re-serialized and an empty body gives no bytes
    pub fn into_bytes(self) -> Result<Vec<u8>, AppError> {
        match self {
            ApiResponse::Empty => Ok(Vec::new()),
            ApiResponse::Json(v) => Ok(serde_json::to_vec(&v)?),
            ApiResponse::Raw(bytes) => Ok(bytes),
        }
    }
}

/// Standard OData collection envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ODataCollection<T> {
    /// Metadata context URL
    #[serde(rename = "@odata.context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Total count, when `$count=true` was requested or the server adds it
    #[serde(rename = "@odata.count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Items of the current page
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

impl<T> ODataCollection<T> {
    /// Number of items in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether this page has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Page envelope used by the `/api/...` navigation endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PagedResult<T> {
    /// Items of the current page
    #[serde(rename = "PageItems", default = "Vec::new")]
    pub page_items: Vec<T>,
    /// Total number of items available
    #[serde(rename = "Count", default)]
    pub count: u64,
}
