use axum::{
    extract::{FromRef, State},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        cookie,
        dto::{LoginRequest, PublicAccount, RegisterRequest, SessionStatus},
        error::AuthError,
        password,
        repo_types::Principal,
        services,
        token::{SessionKeys, SESSION_TTL},
    },
    state::AppState,
};

/// Public account routes.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/new-account", post(register))
        .route("/accounts", get(list_accounts))
}

/// Routes that only exist behind the session gate.
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/is-logged-in", get(is_logged_in))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthError> {
    payload.email = payload.email.trim().to_lowercase();

    let principal =
        services::authenticate(state.accounts.as_ref(), &payload.email, &payload.password).await?;

    let keys = SessionKeys::from_ref(&state);
    let token = keys
        .issue(&principal.email, SESSION_TTL)
        .map_err(AuthError::Internal)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        cookie::session_cookie(&token, SESSION_TTL).map_err(AuthError::Internal)?,
    );

    info!(account_id = %principal.id, "login succeeded");
    Ok((headers, Json(json!({}))))
}

#[instrument]
pub async fn logout() -> impl IntoResponse {
    // Sessions are stateless; logging out is overwriting the cookie.
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie::clear_session_cookie());
    (StatusCode::NO_CONTENT, headers)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<Json<PublicAccount>, (StatusCode, String)> {
    payload.email = payload.email.trim().to_lowercase();

    if !services::is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err((StatusCode::BAD_REQUEST, "Invalid email".into()));
    }

    if payload.password.len() < 6 {
        warn!("password too short");
        return Err((StatusCode::BAD_REQUEST, "Password too short".into()));
    }

    // Ensure email is not taken
    match state.accounts.find_by_email(&payload.email).await {
        Ok(Some(_)) => {
            warn!(email = %payload.email, "email already registered");
            return Err((StatusCode::CONFLICT, "Email already registered".into()));
        }
        Ok(None) => {}
        Err(e) => {
            error!(error = %e, "find_by_email failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    }

    let hash = match password::hash_password(&payload.password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "hash_password failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let account = match state
        .accounts
        .insert(&payload.email, &hash, &payload.account_type)
        .await
    {
        Ok(a) => a,
        Err(e) => {
            error!(error = %e, "create account failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    info!(account_id = %account.id, email = %account.email, "account registered");
    Ok(Json(PublicAccount {
        id: account.id,
        email: account.email,
        account_type: account.account_type,
    }))
}

#[instrument(skip(state))]
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicAccount>>, (StatusCode, String)> {
    let accounts = state.accounts.list().await.map_err(|e| {
        error!(error = %e, "list accounts failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    let out = accounts
        .into_iter()
        .map(|a| PublicAccount {
            id: a.id,
            email: a.email,
            account_type: a.account_type,
        })
        .collect();
    Ok(Json(out))
}

#[instrument(skip(principal))]
pub async fn is_logged_in(principal: Principal) -> Json<SessionStatus> {
    Json(SessionStatus {
        message: "Account is logged in".into(),
        email: principal.email,
    })
}
