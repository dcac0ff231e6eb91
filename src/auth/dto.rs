use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for account registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub account_type: String,
}

/// Public view of an account. The password hash never leaves the
/// server.
#[derive(Debug, Serialize)]
pub struct PublicAccount {
    pub id: Uuid,
    pub email: String,
    pub account_type: String,
}

/// Response for the gated session probe.
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub message: String,
    pub email: String,
}
