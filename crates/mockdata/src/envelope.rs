//! API response envelopes and authentication records.
//!
//! An [`ApiEnvelope`] is what route interception fulfills a matched request
//! with: status code, JSON body, and headers (defaulting to
//! `Content-Type: application/json`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::records::{alnum_token, mock_user, User, UserOverrides};

/// A canned HTTP response for the mocked network boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    pub status: u16,
    pub body: Value,
    pub headers: HashMap<String, String>,
}

impl ApiEnvelope {
    /// Envelope with an arbitrary status and JSON body.
    pub fn json(status: u16, body: Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status,
            body,
            headers,
        }
    }

    /// `200 {"success": true, "data": ...}`.
    pub fn success(data: impl Serialize) -> Self {
        let data = serde_json::to_value(data).unwrap_or(Value::Null);
        Self::json(200, json!({ "success": true, "data": data }))
    }

    /// `{"success": false, "error": message}` with the given status.
    pub fn error(message: &str, status: u16) -> Self {
        Self::json(status, json!({ "success": false, "error": message }))
    }

    /// Body serialized for the wire.
    pub fn body_string(&self) -> String {
        self.body.to_string()
    }
}

/// Successful authentication payload, including the user it authenticates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSuccess {
    pub success: bool,
    pub token: String,
    pub refresh_token: String,
    pub expires_in: u32,
    pub user: User,
}

pub fn mock_auth_success() -> AuthSuccess {
    AuthSuccess {
        success: true,
        token: format!("mock_token_{}", alnum_token(32)),
        refresh_token: format!("mock_refresh_{}", alnum_token(32)),
        expires_in: 3600,
        user: mock_user(UserOverrides::default()),
    }
}

/// Failed authentication payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthFailure {
    pub success: bool,
    pub error: String,
    pub message: String,
}

pub fn mock_auth_failure() -> AuthFailure {
    AuthFailure {
        success: false,
        error: "Invalid credentials".to_string(),
        message: "The email or password you entered is incorrect".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_wraps_data() {
        let envelope = ApiEnvelope::success(json!({"id": "prod_1234"}));
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.body["success"], json!(true));
        assert_eq!(envelope.body["data"]["id"], json!("prod_1234"));
        assert_eq!(
            envelope.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn error_envelope_carries_message_and_status() {
        let envelope = ApiEnvelope::error("out of stock", 409);
        assert_eq!(envelope.status, 409);
        assert_eq!(envelope.body["success"], json!(false));
        assert_eq!(envelope.body["error"], json!("out of stock"));
    }

    #[test]
    fn auth_success_token_shape() {
        let auth = mock_auth_success();
        assert!(auth.success);
        assert!(auth.token.starts_with("mock_token_"));
        assert_eq!(auth.token.len(), "mock_token_".len() + 32);
        assert!(auth.refresh_token.starts_with("mock_refresh_"));
        assert_eq!(auth.expires_in, 3600);
    }

    #[test]
    fn auth_failure_is_fixed() {
        let auth = mock_auth_failure();
        assert!(!auth.success);
        assert_eq!(auth.error, "Invalid credentials");
    }
}
