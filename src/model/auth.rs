/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::TOKEN_EXPIRY_MARGIN_SECS;
use chrono::Utc;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Response of the identity server token endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// Access token for API requests
    pub access_token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    /// Token type (usually "Bearer")
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Granted scopes
    #[serde(default)]
    pub scope: String,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// OAuth access token together with the moment it was issued
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuthToken {
    /// Access token for API requests
    pub access_token: String,
    /// Token type (usually "Bearer")
    pub token_type: String,
    /// Granted scopes
    pub scope: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    /// Timestamp when the token was issued (seconds since epoch)
    pub created_at: i64,
}

impl OAuthToken {
    /// Creates a token issued now
    pub fn new(access_token: String, token_type: String, scope: String, expires_in: u64) -> Self {
        Self {
            access_token,
            token_type,
            scope,
            expires_in,
            created_at: Utc::now().timestamp(),
        }
    }

    /// Unix timestamp (seconds) at which the token stops being valid
    #[must_use]
    pub fn expires_at(&self) -> i64 {
        self.created_at + self.expires_in as i64
    }

    /// Checks if the token is expired or will expire within the margin
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds (default: 60)
    #[must_use]
    pub fn is_expired(&self, margin_seconds: Option<i64>) -> bool {
        let margin = margin_seconds.unwrap_or(TOKEN_EXPIRY_MARGIN_SECS);
        Utc::now().timestamp() >= self.expires_at() - margin
    }

    /// Value of the `Authorization` header for this token
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl From<TokenResponse> for OAuthToken {
    fn from(v: TokenResponse) -> Self {
        OAuthToken::new(v.access_token, v.token_type, v.scope, v.expires_in)
    }
}
