use crate::state::AppState;
use axum::Router;

pub mod cookie;
mod dto;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod password;
pub mod repo;
pub mod repo_types;
pub mod services;
pub mod token;

/// Public account and session routes.
pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}

/// Routes that must sit behind the session gate; the caller applies
/// the middleware.
pub fn session_router() -> Router<AppState> {
    handlers::session_routes()
}
