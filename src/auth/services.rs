use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, warn};

use crate::auth::error::AuthError;
use crate::auth::password;
use crate::auth::repo::AccountStore;
use crate::auth::repo_types::Principal;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Authenticates a login attempt. An unknown email and a wrong password
/// both come back as the same `InvalidCredentials` so the outcome never
/// reveals whether the email is registered. Reads only; no lockout
/// state is kept.
pub async fn authenticate(
    store: &dyn AccountStore,
    email: &str,
    plaintext: &str,
) -> Result<Principal, AuthError> {
    let Some(account) = store.find_by_email(email).await? else {
        warn!("login attempt for unknown email");
        return Err(AuthError::InvalidCredentials);
    };

    match password::verify_password(plaintext, &account.password_hash) {
        Ok(true) => Ok(Principal::from(account)),
        Ok(false) => {
            warn!(account_id = %account.id, "login attempt with wrong password");
            Err(AuthError::InvalidCredentials)
        }
        Err(e) => {
            // Corrupt stored hash. Fails this attempt only.
            error!(account_id = %account.id, error = %e, "stored hash unusable");
            Err(AuthError::Internal(e))
        }
    }
}
