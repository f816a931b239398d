/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Request descriptors
//!
//! Resource clients describe every operation as an [`ApiRequest`], usually
//! built from one of two declarative tables:
//! - [`Endpoint`]: a fixed method + path under `/api/...`
//! - [`EntitySet`]: an OData entity set under `/odata/{name}` with the usual
//!   collection, by-key and action paths

use crate::constants::ODATA_ACTION_NAMESPACE;
use crate::error::AppError;
use crate::model::query::QueryParams;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// HTTP methods accepted by the Orchestrator API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// How the dispatcher should treat a successful response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// Parse the body as JSON; an empty body yields no value
    #[default]
    Json,
    /// Return the body bytes untouched (exports, downloads, screenshots)
    Raw,
}

/// One outgoing request: method, path, query, optional JSON body and response mode
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the base URL
    pub path: String,
    /// Query parameters
    pub query: QueryParams,
    /// JSON body
    pub body: Option<Value>,
    /// Response decoding mode
    pub response_mode: ResponseMode,
}

impl ApiRequest {
    /// Creates a request without query, body, in JSON mode
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
            response_mode: ResponseMode::Json,
        }
    }

    /// Replaces the query parameters
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Appends one query parameter
    #[must_use]
    pub fn with_param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push(key, value);
        self
    }

    /// Sets an already built JSON body
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes `body` and sets it as the JSON body
    pub fn with_json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, AppError> {
        Ok(self.with_body(serde_json::to_value(body)?))
    }

    /// Switches to raw response mode
    #[must_use]
    pub fn raw(mut self) -> Self {
        self.response_mode = ResponseMode::Raw;
        self
    }
}

/// Fixed method + path pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the base URL
    pub path: &'static str,
}

impl Endpoint {
    /// GET endpoint
    pub const fn get(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
        }
    }

    /// POST endpoint
    pub const fn post(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Post,
            path,
        }
    }

    /// PUT endpoint
    pub const fn put(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Put,
            path,
        }
    }

    /// PATCH endpoint
    pub const fn patch(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Patch,
            path,
        }
    }

    /// DELETE endpoint
    pub const fn delete(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Delete,
            path,
        }
    }

    /// A fresh request for this endpoint
    #[must_use]
    pub fn request(&self) -> ApiRequest {
        ApiRequest::new(self.method, self.path)
    }
}

/// OData entity set exposed under `/odata/{name}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySet {
    /// Entity set name, e.g. `Users`
    pub name: &'static str,
}

impl EntitySet {
    /// Declares an entity set
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// `/odata/{name}`
    #[must_use]
    pub fn collection_path(&self) -> String {
        format!("/odata/{}", self.name)
    }

    /// `/odata/{name}({key})`
    ///
    /// Numeric keys are used as is; string keys must be passed through
    /// [`quote`](crate::model::query::quote).
    #[must_use]
    pub fn entity_path(&self, key: impl fmt::Display) -> String {
        format!("/odata/{}({key})", self.name)
    }

    /// GET on the collection
    #[must_use]
    pub fn list(&self) -> ApiRequest {
        ApiRequest::new(HttpMethod::Get, self.collection_path())
    }

    /// GET one entity
    #[must_use]
    pub fn get(&self, key: impl fmt::Display) -> ApiRequest {
        ApiRequest::new(HttpMethod::Get, self.entity_path(key))
    }

    /// POST on the collection
    #[must_use]
    pub fn create(&self) -> ApiRequest {
        ApiRequest::new(HttpMethod::Post, self.collection_path())
    }

    /// PUT one entity
    #[must_use]
    pub fn update(&self, key: impl fmt::Display) -> ApiRequest {
        ApiRequest::new(HttpMethod::Put, self.entity_path(key))
    }

    /// DELETE one entity
    #[must_use]
    pub fn delete(&self, key: impl fmt::Display) -> ApiRequest {
        ApiRequest::new(HttpMethod::Delete, self.entity_path(key))
    }

    /// POST a bound action on one entity
    #[must_use]
    pub fn action(&self, key: impl fmt::Display, action: &str) -> ApiRequest {
        ApiRequest::new(
            HttpMethod::Post,
            format!("{}/{ODATA_ACTION_NAMESPACE}.{action}", self.entity_path(key)),
        )
    }

    /// POST an action bound to the collection
    #[must_use]
    pub fn collection_action(&self, action: &str) -> ApiRequest {
        ApiRequest::new(
            HttpMethod::Post,
            format!("{}/{ODATA_ACTION_NAMESPACE}.{action}", self.collection_path()),
        )
    }

    /// GET a function bound to the collection; `function` may carry its own `(args)`
    #[must_use]
    pub fn function(&self, function: &str) -> ApiRequest {
        ApiRequest::new(
            HttpMethod::Get,
            format!("{}/{ODATA_ACTION_NAMESPACE}.{function}", self.collection_path()),
        )
    }
}
