use chrono::Utc;
use uipath_client::model::auth::{OAuthToken, TokenResponse};

fn token(expires_in: u64, age_secs: i64) -> OAuthToken {
    OAuthToken {
        access_token: "test_token".to_string(),
        token_type: "Bearer".to_string(),
        scope: "OR.Default".to_string(),
        expires_in,
        created_at: Utc::now().timestamp() - age_secs,
    }
}

#[test]
fn test_oauth_token_is_expired_not_expired() {
    // 1 hour, just issued
    assert!(!token(3600, 0).is_expired(None));
}

#[test]
fn test_oauth_token_is_expired_expired() {
    assert!(token(10, 20).is_expired(Some(1)));
}

#[test]
fn test_oauth_token_is_expired_within_default_margin() {
    // 30s left, default margin is 60s
    assert!(token(3600, 3570).is_expired(None));
    assert!(!token(3600, 3570).is_expired(Some(10)));
}

#[test]
fn test_oauth_token_expires_at() {
    let t = token(3600, 0);
    assert_eq!(t.expires_at(), t.created_at + 3600);
}

#[test]
fn test_oauth_token_authorization_header() {
    assert_eq!(token(3600, 0).authorization(), "Bearer test_token");
}

#[test]
fn test_token_response_defaults() {
    let response: TokenResponse =
        serde_json::from_str(r#"{"access_token":"abc","expires_in":3600}"#).unwrap();
    assert_eq!(response.token_type, "Bearer");
    assert_eq!(response.scope, "");

    let t: OAuthToken = response.into();
    assert_eq!(t.access_token, "abc");
    assert_eq!(t.expires_in, 3600);
    assert!(!t.is_expired(None));
}

#[test]
fn test_oauth_token_serialization() {
    let t = token(3600, 0);
    let json = serde_json::to_string(&t).unwrap();
    let deserialized: OAuthToken = serde_json::from_str(&json).unwrap();
    assert_eq!(t, deserialized);
}
