use crate::auth::repo_types::Account;
use async_trait::async_trait;
use sqlx::PgPool;

/// Account lookups and inserts, abstracted so the authentication core
/// can run against an in-memory store in tests.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>>;
    async fn insert(
        &self,
        email: &str,
        password_hash: &str,
        account_type: &str,
    ) -> anyhow::Result<Account>;
    async fn list(&self) -> anyhow::Result<Vec<Account>>;
}

pub struct PgAccounts {
    pool: PgPool,
}

impl PgAccounts {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccounts {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, email, password_hash, account_type, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    async fn insert(
        &self,
        email: &str,
        password_hash: &str,
        account_type: &str,
    ) -> anyhow::Result<Account> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (email, password_hash, account_type)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, account_type, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(account_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(account)
    }

    async fn list(&self) -> anyhow::Result<Vec<Account>> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, email, password_hash, account_type, created_at
            FROM accounts
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(accounts)
    }
}
