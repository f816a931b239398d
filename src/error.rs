/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type shared by every layer of the client

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Credential acquisition or refresh failed
    Auth(String),
    /// The server answered with a non-success status
    Http {
        /// Status code returned by Orchestrator
        status: StatusCode,
        /// Raw response body, preserved as text
        body: String,
    },
    /// Network level failure (DNS, connection refused, timeout, TLS)
    Network(reqwest::Error),
    /// Request or response JSON could not be (de)serialized
    Json(serde_json::Error),
    /// Invalid input detected before any request was sent
    InvalidInput(String),
}

impl AppError {
    /// Returns the HTTP status when the error came from a non-success response
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the response body when the error came from a non-success response
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            AppError::Http { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// `true` for 4xx responses
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Http { status, .. } if status.is_client_error())
    }

    /// `true` for 5xx responses
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, AppError::Http { status, .. } if status.is_server_error())
    }

    /// `true` for 404 responses
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth(msg) => write!(f, "authentication error: {msg}"),
            AppError::Http { status, body } if body.is_empty() => {
                write!(f, "http error: {status}")
            }
            AppError::Http { status, body } => write!(f, "http error: {status}: {body}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
