//! Backend API contract.
//!
//! The session store talks to the backend exclusively through this trait so
//! the HTTP transport stays swappable (and the store testable against an
//! in-memory stub). Request bodies are camelCase on the wire.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::order::OrdersEnvelope;
use crate::session::VerificationParams;

/// Body of `POST /send_verification_code`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationCodeRequest {
    pub phone_number: String,
    /// Anti-abuse slider captcha proof. Empty when no challenge was shown.
    pub slider_ticket: String,
    pub slider_randstr: String,
}

/// Success envelope of `POST /send_verification_code`.
///
/// Unknown fields are retained in `extra` so the store can hand the raw
/// payload back to the caller on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationCodeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub params: Option<VerificationParams>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: String,
    pub verification_code: String,
    pub rsa_public_key: String,
    pub client_ip: String,
    pub request_code: String,
    pub timestamp: String,
}

/// Success envelope of `POST /login`.
///
/// The user record sits one level deeper than usual: `data.data`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub authorization: String,
    #[serde(default)]
    pub data: Option<LoginData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub data: Option<Value>,
}

impl LoginResponse {
    /// The full user record, if the envelope carried one.
    pub fn user_record(&self) -> Option<&Value> {
        self.data.as_ref().and_then(|d| d.data.as_ref())
    }

    /// The `userId` field of the nested user record.
    pub fn user_id(&self) -> Option<&str> {
        self.user_record()
            .and_then(|record| record.get("userId"))
            .and_then(Value::as_str)
    }
}

/// The remote backend, at its interface boundary.
///
/// Implementations translate transport failures into `PickupError::Network`
/// and malformed responses into `PickupError::Api`; application-level
/// failures (`success: false`) come back as ordinary envelopes for the store
/// to interpret.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// `POST /send_verification_code`. No auth header.
    async fn send_verification_code(
        &self,
        request: &VerificationCodeRequest,
    ) -> Result<VerificationCodeResponse>;

    /// `POST /login`. No auth header.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    /// `GET /pending_orders?page=..&limit=10` with `Authorization: <token>`.
    async fn pending_orders(&self, authorization: &str, page: u32) -> Result<OrdersEnvelope>;

    /// `GET /completed_orders?page=..&limit=10` with `Authorization: <token>`.
    async fn completed_orders(&self, authorization: &str, page: u32) -> Result<OrdersEnvelope>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verification_request_is_camel_case() {
        let request = VerificationCodeRequest {
            phone_number: "15912345678".to_string(),
            slider_ticket: String::new(),
            slider_randstr: String::new(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["phoneNumber"], "15912345678");
        assert_eq!(body["sliderTicket"], "");
    }

    #[test]
    fn test_verification_response_retains_raw_payload() {
        let response: VerificationCodeResponse = serde_json::from_value(json!({
            "success": true,
            "params": {
                "rsa_public_key": "pk",
                "client_ip": "ip",
                "request_code": "abc",
                "timestamp": "t"
            },
            "message": "sent"
        }))
        .unwrap();
        assert!(response.success);
        assert_eq!(response.params.as_ref().unwrap().request_code, "abc");
        // Round-trips the unknown field.
        let raw = serde_json::to_value(&response).unwrap();
        assert_eq!(raw["message"], "sent");
    }

    #[test]
    fn test_login_response_nested_user_record() {
        let response: LoginResponse = serde_json::from_value(json!({
            "success": true,
            "authorization": "Bearer xyz",
            "data": {"data": {"userId": "u1", "name": "A"}}
        }))
        .unwrap();
        assert_eq!(response.user_id(), Some("u1"));
        assert_eq!(response.user_record().unwrap()["name"], "A");
    }

    #[test]
    fn test_login_response_missing_record() {
        let response: LoginResponse =
            serde_json::from_value(json!({"success": true, "authorization": "tok"})).unwrap();
        assert!(response.user_record().is_none());
        assert!(response.user_id().is_none());
    }
}
