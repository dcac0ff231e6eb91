use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::auth::cookie;
use crate::auth::error::AuthError;
use crate::auth::repo::AccountStore;
use crate::auth::repo_types::Principal;
use crate::auth::token::SessionKeys;
use crate::state::AppState;

/// Middleware guarding protected routes. On success the resolved
/// `Principal` rides in the request extensions for the downstream
/// handler; on failure the chain stops here and the handler never runs.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let keys = SessionKeys::from_ref(&state);
    match evaluate(&keys, state.accounts.as_ref(), req.headers()).await {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        Err(err) => {
            // The reason stays in the logs; the client sees only the
            // status code.
            warn!(reason = %err, "request rejected at session gate");
            err.into_response()
        }
    }
}

/// The gate itself, separated from the transport so it can be tested
/// without a running router: extract the cookie, verify the token,
/// resolve the subject to a live account.
pub(crate) async fn evaluate(
    keys: &SessionKeys,
    accounts: &dyn AccountStore,
    headers: &HeaderMap,
) -> Result<Principal, AuthError> {
    let token = cookie::session_token(headers).ok_or(AuthError::NoToken)?;
    let claims = keys.verify(&token)?;
    let account = accounts
        .find_by_email(&claims.sub)
        .await?
        .ok_or(AuthError::StaleSubject)?;
    Ok(Principal::from(account))
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::cookie::SESSION_COOKIE;
    use crate::auth::password;
    use crate::auth::repo::testing::MemoryAccounts;
    use crate::auth::token::SESSION_TTL;
    use axum::http::{header::COOKIE, HeaderValue};
    use time::Duration;

    fn keys() -> SessionKeys {
        SessionKeys::new("gate-test-secret")
    }

    fn cookie_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let value = format!("{SESSION_COOKIE}={token}");
        headers.insert(COOKIE, HeaderValue::from_str(&value).expect("cookie"));
        headers
    }

    async fn store_with_account(email: &str) -> MemoryAccounts {
        let store = MemoryAccounts::default();
        let hash = password::hash_password("pw-irrelevant").expect("hash");
        store.insert(email, &hash, "shipper").await.expect("insert");
        store
    }

    #[tokio::test]
    async fn valid_cookie_resolves_principal() {
        let store = store_with_account("a@x.com").await;
        let token = keys().issue("a@x.com", SESSION_TTL).expect("issue");
        let principal = evaluate(&keys(), &store, &cookie_headers(&token))
            .await
            .expect("evaluate");
        assert_eq!(principal.email, "a@x.com");
    }

    #[tokio::test]
    async fn missing_cookie_is_rejected() {
        let store = store_with_account("a@x.com").await;
        let err = evaluate(&keys(), &store, &HeaderMap::new()).await.unwrap_err();
        assert!(matches!(err, AuthError::NoToken));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let store = store_with_account("a@x.com").await;
        let err = evaluate(&keys(), &store, &cookie_headers("junk"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MalformedToken));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let store = store_with_account("a@x.com").await;
        let token = keys()
            .issue("a@x.com", Duration::seconds(-5))
            .expect("issue");
        let err = evaluate(&keys(), &store, &cookie_headers(&token))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::ExpiredToken));
    }

    #[tokio::test]
    async fn token_for_deleted_account_is_rejected() {
        // Valid signature, live ttl, but no account behind the subject.
        let store = MemoryAccounts::default();
        let token = keys().issue("gone@x.com", SESSION_TTL).expect("issue");
        let err = evaluate(&keys(), &store, &cookie_headers(&token))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::StaleSubject));
    }
}
