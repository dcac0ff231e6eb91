use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Authentication failures. Variants exist for server-side diagnostics;
/// clients only ever see the generic responses below.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Both collapse into this one
    /// variant so the response cannot be used to probe for registered
    /// emails.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// No session cookie on the request.
    #[error("missing session cookie")]
    NoToken,

    /// Signature mismatch, unexpected algorithm, or undecodable token.
    #[error("malformed session token")]
    MalformedToken,

    /// Token is past its expiry.
    #[error("session token expired")]
    ExpiredToken,

    /// Token verified but its subject no longer resolves to an account.
    #[error("session subject no longer exists")]
    StaleSubject,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid email or password" })),
            )
                .into_response(),
            AuthError::NoToken
            | AuthError::MalformedToken
            | AuthError::ExpiredToken
            | AuthError::StaleSubject => StatusCode::UNAUTHORIZED.into_response(),
            AuthError::Internal(err) => {
                error!(error = %err, "internal error during authentication");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
