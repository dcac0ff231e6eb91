use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, instrument, warn};

use crate::{
    accounts::{
        dto::{DetailsQuery, NewAccountDetails},
        repo::AccountDetails,
    },
    state::AppState,
};

pub fn details_routes() -> Router<AppState> {
    Router::new()
        .route("/new-account-details", post(create_details))
        .route("/account-details", get(get_details))
}

#[instrument(skip(state, payload))]
pub async fn create_details(
    State(state): State<AppState>,
    Json(payload): Json<NewAccountDetails>,
) -> Result<Json<AccountDetails>, (StatusCode, String)> {
    let account = match state.accounts.find_by_email(&payload.email).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            warn!(email = %payload.email, "no account for details");
            return Err((StatusCode::BAD_REQUEST, "No account found".into()));
        }
        Err(e) => {
            error!(error = %e, "find_by_email failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let details =
        AccountDetails::create(&state.db, account.id, &payload.first_name, &payload.last_name)
            .await
            .map_err(|e| {
                error!(error = %e, account_id = %account.id, "create details failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            })?;
    Ok(Json(details))
}

#[instrument(skip(state))]
pub async fn get_details(
    State(state): State<AppState>,
    Query(query): Query<DetailsQuery>,
) -> Result<Json<AccountDetails>, (StatusCode, String)> {
    let account = match state.accounts.find_by_email(&query.email).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            return Err((StatusCode::BAD_REQUEST, "No account found".into()));
        }
        Err(e) => {
            error!(error = %e, "find_by_email failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let details = AccountDetails::find_by_account(&state.db, account.id)
        .await
        .map_err(|e| {
            error!(error = %e, account_id = %account.id, "fetch details failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?
        .ok_or((StatusCode::NOT_FOUND, "No account details found".into()))?;
    Ok(Json(details))
}
