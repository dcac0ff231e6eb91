use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument};

use crate::{
    auth::repo_types::Principal,
    orders::{dto::NewOrder, repo_types::Order},
    state::AppState,
};

pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/new-order", post(create_order))
}

#[instrument(skip(state, principal))]
pub async fn list_orders(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<Order>>, (StatusCode, String)> {
    let orders = Order::list(&state.db).await.map_err(|e| {
        error!(error = %e, account_id = %principal.id, "list orders failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    Ok(Json(orders))
}

#[instrument(skip(state, principal, payload))]
pub async fn create_order(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<NewOrder>,
) -> Result<(StatusCode, Json<Order>), (StatusCode, String)> {
    let order = Order::create(&state.db, &payload).await.map_err(|e| {
        error!(error = %e, account_id = %principal.id, "create order failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    info!(order_id = %order.id, account_id = %order.account_id, "order created");
    Ok((StatusCode::CREATED, Json(order)))
}
