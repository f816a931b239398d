/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/25
******************************************************************************/

//! # UiPath Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types
//! from the library. By importing this prelude, you get access to the client,
//! its configuration and the request builders needed for most Orchestrator
//! interactions.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uipath_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::from_config(Config::new())?;
//! let users = client.users.get(&UserFilter::new().with_is_active(true)).await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Orchestrator client
pub use crate::application::config::{Config, Credentials, IdentityConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Authentication providers
pub use crate::application::auth::{
    AuthHeaders, AuthProvider, BearerTokenAuth, ClientCredentialsAuth, auth_from_config,
};

/// OAuth token models
pub use crate::model::auth::{OAuthToken, TokenResponse};

// ============================================================================
// CLIENTS
// ============================================================================

/// Top-level client
pub use crate::application::client::Client;

/// Resource clients
pub use crate::application::resources::*;

/// Request dispatcher
pub use crate::model::http::HttpClient;

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

/// Request descriptors
pub use crate::model::endpoint::{ApiRequest, Endpoint, EntitySet, HttpMethod, ResponseMode};

/// Query string and `$filter` builders
pub use crate::model::query::{FilterOp, ODataFilter, QueryParams};

/// Typed filters and request bodies
pub use crate::model::requests::{
    AlertFilter, AssetFilter, AuditLogFilter, ExportFormat, FolderRolesQuery, FolderType,
    JobFilter, MaintenancePhase, MaintenanceStart, MetricsQuery, QueueItem, QueueItemFilter,
    QueuePriority, RobotFilter, StopStrategy, TaskQuery, UserFilter,
};

/// Response wrappers
pub use crate::model::responses::{ApiResponse, ODataCollection, PagedResult};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
