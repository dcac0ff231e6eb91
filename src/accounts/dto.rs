use serde::Deserialize;

/// Request body for attaching contact details to an account.
#[derive(Debug, Deserialize)]
pub struct NewAccountDetails {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Query string for looking up details by account email.
#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    pub email: String,
}
