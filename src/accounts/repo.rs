use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Contact details attached to an account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccountDetails {
    pub id: Uuid,
    pub account_id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl AccountDetails {
    pub async fn find_by_account(
        db: &PgPool,
        account_id: Uuid,
    ) -> anyhow::Result<Option<AccountDetails>> {
        let details = sqlx::query_as::<_, AccountDetails>(
            r#"
            SELECT id, account_id, first_name, last_name
            FROM account_details
            WHERE account_id = $1
            "#,
        )
        .bind(account_id)
        .fetch_optional(db)
        .await?;
        Ok(details)
    }

    pub async fn create(
        db: &PgPool,
        account_id: Uuid,
        first_name: &str,
        last_name: &str,
    ) -> anyhow::Result<AccountDetails> {
        let details = sqlx::query_as::<_, AccountDetails>(
            r#"
            INSERT INTO account_details (account_id, first_name, last_name)
            VALUES ($1, $2, $3)
            RETURNING id, account_id, first_name, last_name
            "#,
        )
        .bind(account_id)
        .bind(first_name)
        .bind(last_name)
        .fetch_one(db)
        .await?;
        Ok(details)
    }
}
