//! Session domain model.
//!
//! The session is the in-memory record of the current user's authentication
//! token and identity. `authorization` is non-empty exactly when a login has
//! succeeded and no logout has been committed since.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-issued bundle required to complete a login challenge.
///
/// Obtained from the verification-code endpoint and echoed back verbatim in
/// the login request. Field names follow the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationParams {
    pub rsa_public_key: String,
    pub client_ip: String,
    pub request_code: String,
    pub timestamp: String,
}

/// In-memory session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Phone number the last verification code was requested for.
    pub phone_number: String,
    /// Params from the last successful verification-code request.
    /// Must be present before a login attempt is permitted.
    pub verification_params: Option<VerificationParams>,
    /// Opaque authentication token. Empty string means unauthenticated.
    pub authorization: String,
    /// Identifier of the logged-in user. Empty when unauthenticated.
    pub user_id: String,
    /// Full user record as returned by the backend. Opaque to the client.
    pub user_info: Option<Value>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        !self.authorization.is_empty()
    }
}
