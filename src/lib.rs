//! # uipath-client
//!
//! A thin, async client for the UiPath Orchestrator REST/OData API.
//!
//! Every resource client ([`folders`](application::resources::folders),
//! [`users`](application::resources::users),
//! [`queues`](application::resources::queues), ...) maps its methods one to one
//! onto Orchestrator endpoints. Requests are described as
//! [`ApiRequest`](model::endpoint::ApiRequest) values and executed by a single
//! dispatcher, [`HttpClient`](model::http::HttpClient), which adds the
//! authentication headers, performs the call and decodes the response.
//!
//! ## Configuration
//!
//! [`Config::new`](application::config::Config::new) reads the `UIPATH_*`
//! environment variables (a `.env` file is honoured):
//!
//! | Variable | Meaning |
//! |---|---|
//! | `UIPATH_BASE_URL` | Orchestrator URL, `https://cloud.uipath.com` by default |
//! | `UIPATH_IDENTITY_URL` | Identity server used for the token exchange |
//! | `UIPATH_CLIENT_ID` / `UIPATH_CLIENT_SECRET` | External application credentials |
//! | `UIPATH_SCOPE` | Requested scopes, `OR.Default` by default |
//! | `UIPATH_ACCESS_TOKEN` | Static bearer token, bypasses the token exchange |
//! | `UIPATH_TENANT_NAME` | Sent as `X-UIPATH-TenantName` |
//! | `UIPATH_FOLDER_ID` | Sent as `X-UIPATH-OrganizationUnitId` |
//! | `UIPATH_REST_TIMEOUT` | Request timeout in seconds |
//!
//! ## Example
//!
//! ```rust,no_run
//! use uipath_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! setup_logger();
//! let client = Client::from_config(Config::new())?;
//!
//! let folders = client.folders.get(Some("Finance"), None).await?;
//! info!("Folders: {}", folders);
//!
//! let user = client
//!     .users
//!     .create(&json!({
//!         "UserName": "jane.doe",
//!         "EmailAddress": "jane@example.com",
//!         "RolesList": ["Robot"],
//!     }))
//!     .await?;
//! info!("Created user {}", user["Id"]);
//! # Ok(())
//! # }
//! ```

/// Authentication, configuration, top-level client and resource clients
pub mod application;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// Request descriptors, dispatcher and wire models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Logging and environment helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
